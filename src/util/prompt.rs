//! Interactive selection from a list of labeled items.

use std::io::{self, BufRead, Write};

/// A capability that lets the user choose one item from a list.
pub trait Picker {
    /// Return the selected index, or `None` when the user cancels.
    fn pick(&self, items: &[String]) -> io::Result<Option<usize>>;
}

/// Numbered-list picker reading the selection from stdin.
///
/// The list and prompt go to stderr so stdout stays clean for piping.
/// An empty line, `q`, or end of input cancels.
pub struct StdinPicker;

impl Picker for StdinPicker {
    fn pick(&self, items: &[String]) -> io::Result<Option<usize>> {
        let mut err = io::stderr().lock();
        let width = items.len().to_string().len();
        for (i, item) in items.iter().enumerate() {
            writeln!(err, "{:>width$}. {}", i + 1, item)?;
        }

        loop {
            write!(err, "run> ")?;
            err.flush()?;

            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() || line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(err, "enter a number between 1 and {}", items.len())?,
            }
        }
    }
}
