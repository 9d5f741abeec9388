//! Console front end: text rendering of the grid, column parsing from
//! standard input, the interactive move provider and the result reporter.

pub mod board_text;
pub mod input;
mod interactive;
mod reporter;

pub use interactive::Interactive;
pub use reporter::{announcement, ConsoleReporter};
