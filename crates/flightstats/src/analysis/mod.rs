//! Analysis façade: turns a menu selection into a store query plus a render
//! request, and runs the interactive menu.

mod facade;
mod session;

pub use facade::{CompareChoice, FlightAnalysis, MenuChoice, capitalize, split_list};
pub use session::{Session, SessionEnd};
