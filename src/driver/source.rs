//! Move sources: scripted and line-oriented.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use tracing::debug;

use super::{MovePair, MoveSource};

/// A fixed queue of move pairs, consumed one per round.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    queue: VecDeque<MovePair>,
}

impl ScriptedMoves {
    /// Create a script from `(user, opponent)` pairs.
    pub fn new<I, U, O>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, O)>,
        U: Into<String>,
        O: Into<String>,
    {
        Self {
            queue: pairs
                .into_iter()
                .map(|(user, opponent)| MovePair::new(user, opponent))
                .collect(),
        }
    }

    /// Number of pairs not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_moves(&mut self, _round: u32) -> io::Result<Option<MovePair>> {
        Ok(self.queue.pop_front())
    }
}

/// Reads one round per line: `<user> <opponent>` or `<user>,<opponent>`.
///
/// Blank lines are skipped, and so are lines missing either move, so a
/// mistyped line never costs a round.
#[derive(Debug)]
pub struct LineMoveSource<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineMoveSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> MoveSource for LineMoveSource<R> {
    fn next_moves(&mut self, round: u32) -> io::Result<Option<MovePair>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            match parse_line(&self.buf) {
                Some(pair) => return Ok(Some(pair)),
                None if self.buf.trim().is_empty() => {}
                None => debug!(round, line = self.buf.trim(), "skipping incomplete move line"),
            }
        }
    }
}

/// Split a line into a move pair.
///
/// Returns `None` unless both the user and the opponent move are present.
fn parse_line(line: &str) -> Option<MovePair> {
    let line = line.trim();
    let (user, opponent) = match line.split_once(',') {
        Some(split) => split,
        None => line.split_once(char::is_whitespace)?,
    };

    let (user, opponent) = (user.trim(), opponent.trim());
    if user.is_empty() || opponent.is_empty() {
        return None;
    }
    Some(MovePair::new(user, opponent))
}
