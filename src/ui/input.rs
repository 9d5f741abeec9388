use std::io::BufRead;

use crate::error::InputError;

/// Read one line and parse it as a column number.
///
/// Only the integer parse is checked here; whether the column can be played
/// is up to the board.
pub fn read_column<R: BufRead>(reader: &mut R) -> Result<isize, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    parse_column(&line)
}

pub fn parse_column(line: &str) -> Result<isize, InputError> {
    let text = line.trim();
    text.parse::<isize>()
        .map_err(|_| InputError::Parse(text.to_string()))
}
