//! Interactive operation menu
//!
//! Reads choices and file paths line by line. Any error from an operation is
//! reported and the menu is shown again; only `Exit` or end of input stop
//! the loop.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::compute::{compute_files, BinaryOp};

/// A selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compute(BinaryOp),
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection such as `"2"`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Compute(BinaryOp::Add)),
            "2" => Some(MenuChoice::Compute(BinaryOp::Subtract)),
            "3" => Some(MenuChoice::Compute(BinaryOp::Multiply)),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop over arbitrary input and output streams
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-4): ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let op = match MenuChoice::parse(&line) {
                Some(MenuChoice::Compute(op)) => op,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid choice '{}'. Please enter 1-4.", line.trim())?;
                    continue;
                }
            };

            let Some(left) = self.prompt("Enter path to first matrix file: ")? else {
                return Ok(());
            };
            let Some(right) = self.prompt("Enter path to second matrix file: ")? else {
                return Ok(());
            };
            let Some(output) = self.prompt("Enter path for output file: ")? else {
                return Ok(());
            };

            let output = PathBuf::from(output.trim());
            match compute_files(op, Path::new(left.trim()), Path::new(right.trim()), &output) {
                Ok(_) => writeln!(
                    self.output,
                    "{} completed successfully. Result saved to {}",
                    op.name(),
                    output.display()
                )?,
                Err(e) => {
                    warn!(op = op.name(), error = %e, "operation failed");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Sparse Matrix Operations")?;
        writeln!(self.output, "1. Addition")?;
        writeln!(self.output, "2. Subtraction")?;
        writeln!(self.output, "3. Multiplication")?;
        writeln!(self.output, "4. Exit")
    }

    /// Print `message` and read one line; `None` on end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Run the menu on stdin and stdout
pub fn run_stdio() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run()
}
