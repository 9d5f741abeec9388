use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use super::board_text;
use super::input::read_column;
use crate::engine::{MoveProvider, MoveRequest};
use crate::error::InputError;
use crate::game::MoveError;

/// A person choosing columns at a console.
///
/// Prompts go to `out`, diagnostics for bad input go to `err`. Reading blocks
/// until a line arrives; there is no retry limit.
pub struct Interactive<R, O, E> {
    input: R,
    out: O,
    err: E,
    retrying: bool,
}

impl Interactive<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, O: Write, E: Write> Interactive<R, O, E> {
    pub fn new(input: R, out: O, err: E) -> Self {
        Interactive {
            input,
            out,
            err,
            retrying: false,
        }
    }

    pub fn into_parts(self) -> (R, O, E) {
        (self.input, self.out, self.err)
    }
}

impl<R: BufRead, O: Write, E: Write> MoveProvider for Interactive<R, O, E> {
    fn name(&self) -> &str {
        "Human"
    }

    fn choose_column(&mut self, request: MoveRequest<'_>) -> Result<isize, InputError> {
        // Show the grid once per turn, not after every rejected column
        if !self.retrying {
            write!(self.out, "{}", board_text::render(request.board))?;
            writeln!(self.out, "[Turn {}] Your move!", request.turn / 2 + 1)?;
        }
        self.retrying = false;

        let last = request.board.columns().saturating_sub(1);
        loop {
            write!(self.out, "Enter a column (0-{last}): ")?;
            self.out.flush()?;

            match read_column(&mut self.input) {
                Ok(column) => return Ok(column),
                Err(InputError::Parse(text)) => {
                    writeln!(self.err, "-- Not a valid column ({text}) --")?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    fn on_rejected(&mut self, column: isize, error: MoveError) {
        self.retrying = true;
        let written = match error {
            MoveError::ColumnFull => writeln!(self.err, "-- Column {column} is full! --"),
            MoveError::InvalidColumn => writeln!(self.err, "-- Out of range! ({column}) --"),
            // Not a choice the person made; the engine always drops a real piece
            MoveError::EmptyCell => {
                writeln!(self.err, "-- Column {column} was not played: {error} --")
            }
        };
        if let Err(e) = written {
            tracing::warn!("failed to write move diagnostic: {e}");
        }
    }
}
