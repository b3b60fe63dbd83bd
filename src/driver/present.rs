//! Presenters for round outcomes.

use std::io::{self, Write};

use super::{MatchSummary, Presenter};
use crate::rules::TurnResolution;

/// Human-readable console output.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn on_turn(&mut self, turn: &TurnResolution) -> io::Result<()> {
        let summary = &turn.summary;
        write!(
            self.out,
            "Round {}: User {} vs Opponent {} -> {}",
            summary.round,
            display_move(&summary.user_move),
            display_move(&summary.opponent_move),
            summary.result_label()
        )?;
        if let Some(penalty) = summary.penalty {
            write!(self.out, " ({penalty})")?;
        }
        writeln!(
            self.out,
            " [score {}-{}]",
            turn.state.user_score, turn.state.opponent_score
        )
    }

    fn on_finished(&mut self, summary: &MatchSummary) -> io::Result<()> {
        writeln!(self.out, "--- Final Result ---")?;
        writeln!(
            self.out,
            "Total Score -> You: {} | Opponent: {}",
            summary.state.user_score, summary.state.opponent_score
        )?;
        match summary.result {
            Some(result) => writeln!(self.out, "RESULT: {result}"),
            None => writeln!(
                self.out,
                "RESULT: unfinished after round {}",
                summary.state.round_number
            ),
        }
    }
}

fn display_move(mv: &str) -> &str {
    if mv.is_empty() {
        "(none)"
    } else {
        mv
    }
}

/// One JSON record per line.
///
/// Rounds are written as `{"summary": ..., "state": ...}` and the final line
/// is the match summary.
#[derive(Debug)]
pub struct JsonPresenter<W> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn on_turn(&mut self, turn: &TurnResolution) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, turn)?;
        writeln!(self.out)
    }

    fn on_finished(&mut self, summary: &MatchSummary) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, summary)?;
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{run_match, ScriptedMoves};
    use crate::rules::MatchEngine;

    #[test]
    fn test_text_presenter_output() {
        let mut engine = MatchEngine::new();
        let mut source = ScriptedMoves::new([("rock", "scissors"), ("lizard", "rock"), ("bomb", "paper")]);
        let mut presenter = TextPresenter::new(Vec::new());

        run_match(&mut engine, &mut source, &mut presenter).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Round 1: User rock vs Opponent scissors -> Winner: User. [score 1-0]"
        );
        assert_eq!(
            lines[1],
            "Round 2: User lizard vs Opponent rock -> Winner: Opponent. (invalid move) [score 1-1]"
        );
        assert_eq!(
            lines[2],
            "Round 3: User bomb vs Opponent paper -> Winner: User. [score 2-1]"
        );
        assert_eq!(lines[3], "--- Final Result ---");
        assert_eq!(lines[4], "Total Score -> You: 2 | Opponent: 1");
        assert_eq!(lines[5], "RESULT: User wins");
    }

    #[test]
    fn test_json_presenter_output() {
        let mut engine = MatchEngine::new();
        let mut source = ScriptedMoves::new([(" PAPER ", "rock")]);
        let mut presenter = JsonPresenter::new(Vec::new());

        run_match(&mut engine, &mut source, &mut presenter).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let turn: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(turn["summary"]["round"], 1);
        assert_eq!(turn["summary"]["user_move"], "paper");
        assert_eq!(turn["summary"]["winner"], "user");
        assert_eq!(turn["state"]["round_number"], 2);
        assert_eq!(turn["state"]["user_score"], 1);

        let summary: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(summary["result"].is_null());
    }
}
