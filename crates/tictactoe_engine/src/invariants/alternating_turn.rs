//! Alternating turn invariant: marks alternate starting with the first player.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: no mark moves twice in a row.
///
/// History starts with the game's first mark and alternates from there,
/// and the mark to move is the one after the last entry.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.mark != game.first_mark()
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            game.first_mark()
        } else {
            game.first_mark().opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns starting with the first player"
    }
}
