//! Turn count invariant: moves made equals occupied cells.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: the turn count equals the number of non-empty cells.
///
/// Every applied move fills exactly one cell and nothing else fills cells.
pub struct TurnCountInvariant;

impl Invariant<GameInProgress> for TurnCountInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.turn_count() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "Turn count matches number of occupied cells"
    }
}
