//! Utility modules for semcoord.

pub mod errors;
pub mod printer;

pub use errors::LexiconError;
pub use printer::{axis_color, value_bar, ColoredText, Printer, PrinterColor};
