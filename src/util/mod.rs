//! Shared utilities

pub mod diagnostic;
pub mod fs;
pub mod process;
pub mod prompt;

pub use diagnostic::Diagnostic;
pub use prompt::{Picker, StdinPicker};
