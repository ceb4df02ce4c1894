//! Concrete renderers for the CLI.

mod json;
mod terminal;

pub use json::JsonRenderer;
pub use terminal::TerminalRenderer;
