//! Monotonic snapshots invariant: each step adds exactly one mark.

use super::super::timeline::diff;
use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: the timeline starts empty and every snapshot differs from
/// its predecessor by exactly one square going from empty to a mark.
pub struct MonotonicSnapshotsInvariant;

impl Invariant<GameSession> for MonotonicSnapshotsInvariant {
    fn holds(session: &GameSession) -> bool {
        let snapshots = session.timeline().snapshots();

        match snapshots.first() {
            Some(first) if *first == Board::new() => {}
            _ => return false,
        }

        snapshots
            .windows(2)
            .all(|pair| diff(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
