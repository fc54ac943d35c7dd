//! Human player that types moves as text.

use super::{Strategy, StrategyError};
use crate::player::Player;
use crate::types::{Board, Coord, Mark};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player reading `x, y` lines from `input` and prompting on `output`.
///
/// Malformed lines are answered with "Invalid move" and a fresh prompt; the
/// player only returns once two integers have been entered or input ends.
/// Whether the square is free is the caller's concern.
pub struct ManualPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ManualPlayer<R, W> {
    /// Creates a manual player over the given input and prompt handles.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Releases the underlying handles.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Strategy for ManualPlayer<R, W> {
    #[instrument(skip(self, _grid, me), fields(player = %me.name()))]
    fn choose_move(
        &mut self,
        _grid: &Board,
        me: &Player,
        _opponent: Mark,
    ) -> Result<Coord, StrategyError> {
        loop {
            write!(self.output, "{}, enter your move in the form x, y: ", me.name())?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("Input closed while waiting for a move");
                return Err(StrategyError::InputClosed);
            }
            // Undecodable bytes become U+FFFD and fail to parse like any typo.
            let line = String::from_utf8_lossy(&buf);

            match parse_move(&line) {
                Some(coord) => return Ok(coord),
                None => {
                    debug!(input = %line.trim(), "Unparseable move");
                    writeln!(self.output, "Invalid move")?;
                }
            }
        }
    }
}

/// Parses `"x, y"`, `"x,y"` or `"x y"` into a coordinate.
///
/// Parts are separated by a comma with optional spaces around it, or by a
/// run of spaces. Exactly two integers are required, so leading or trailing
/// separators and doubled commas are rejected. Range is not checked here.
pub fn parse_move(line: &str) -> Option<Coord> {
    let line = line.trim_end_matches(['\r', '\n']);
    match split_move(line).as_slice() {
        [x, y] => Some(Coord::new(x.trim().parse().ok()?, y.trim().parse().ok()?)),
        _ => None,
    }
}

/// Splits on `" *, *"`, falling back to `" +"` when no comma follows the spaces.
fn split_move(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let spaces_from = |i: usize| bytes[i..].iter().take_while(|b| **b == b' ').count();

    let mut parts = Vec::new();
    let (mut start, mut i) = (0, 0);
    while i < bytes.len() {
        let spaces = spaces_from(i);
        let separator_end = if bytes.get(i + spaces) == Some(&b',') {
            let after_comma = i + spaces + 1;
            Some(after_comma + spaces_from(after_comma))
        } else if spaces > 0 {
            Some(i + spaces)
        } else {
            None
        };

        match separator_end {
            Some(end) => {
                parts.push(&line[start..i]);
                start = end;
                i = end;
            }
            None => i += 1,
        }
    }
    parts.push(&line[start..]);
    parts
}
