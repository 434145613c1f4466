//! Per-process tally of finished games.

use derive_getters::Getters;
use tictactoe_engine::{Mark, Outcome};

/// Wins and ties across every game played since launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    games: u32,
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scoreboard {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: &Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Tied => self.ties += 1,
        }
    }

    /// One-line summary for the exit screen.
    pub fn summary(&self) -> String {
        format!(
            "Games played: {} | X wins: {} | O wins: {} | Ties: {}",
            self.games, self.x_wins, self.o_wins, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut board = Scoreboard::default();
        board.record(&Outcome::Won(Mark::X));
        board.record(&Outcome::Won(Mark::X));
        board.record(&Outcome::Won(Mark::O));
        board.record(&Outcome::Tied);

        assert_eq!(*board.games(), 4);
        assert_eq!(*board.x_wins(), 2);
        assert_eq!(*board.o_wins(), 1);
        assert_eq!(*board.ties(), 1);
        assert_eq!(
            board.summary(),
            "Games played: 4 | X wins: 2 | O wins: 1 | Ties: 1"
        );
    }
}
