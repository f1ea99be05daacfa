//! Ordered history of board snapshots.

use super::action::Move;
use super::board::Board;
use super::error::GameError;
use super::{Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshots from game start to the latest move.
///
/// Index 0 is always the empty board. Looking at an earlier step never
/// removes anything; only [`Timeline::branch`] discards the snapshots
/// after the step a new move is played from.
///
/// Deserialized timelines must start with the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineRecord")]
pub struct Timeline {
    snapshots: Vec<Board>,
}

/// Timeline as read from serialized input, before validation.
#[derive(Deserialize)]
struct TimelineRecord {
    snapshots: Vec<Board>,
}

impl TryFrom<TimelineRecord> for Timeline {
    type Error = GameError;

    fn try_from(record: TimelineRecord) -> Result<Self, Self::Error> {
        match record.snapshots.first() {
            Some(first) if *first == Board::new() => Ok(Self {
                snapshots: record.snapshots,
            }),
            Some(_) => Err(GameError::InvariantViolation(
                "Timeline must start with the empty board".to_string(),
            )),
            None => Err(GameError::InvariantViolation(
                "Timeline has no snapshots".to_string(),
            )),
        }
    }
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (moves played + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Returns every snapshot in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> &Board {
        // The initial snapshot is never removed.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Drops every snapshot after `step`, then appends `board`.
    ///
    /// Returns the step index of the appended snapshot.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, step: usize, board: Board) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Branching from earlier step"
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(board);
        self.snapshots.len() - 1
    }

    /// Recovers the move that produced the snapshot at `step`.
    ///
    /// Returns `None` for step 0, for steps past the end, and when the
    /// two snapshots do not differ by exactly one new mark.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let before = self.snapshots.get(step.checked_sub(1)?)?;
        let after = self.snapshots.get(step)?;
        diff(before, after)
    }

    #[cfg(test)]
    pub(crate) fn overwrite_for_test(&mut self, step: usize, pos: Position, player: crate::Player) {
        self.snapshots[step].set(pos, Square::Occupied(player));
    }

    /// Recovers every move in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len())
            .filter_map(|step| self.move_at(step))
            .collect()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the single Empty-to-mark change between two boards.
pub(crate) fn diff(before: &Board, after: &Board) -> Option<Move> {
    let mut found = None;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) if found.is_none() => {
                found = Some(Move::new(player, pos));
            }
            _ => return None,
        }
    }
    found
}
