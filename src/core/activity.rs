//! Append-only activity log.
//!
//! Every accepted operation that changes the board or a player's assets
//! appends one record. Records are never edited or removed, so the log is
//! the game's audit trail and feeds the "recent activity" panel.
//!
//! Backed by `im::Vector` so status snapshots clone the log in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

/// Kind of activity. Serialized as the record's `type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    /// Turn order was decided.
    Order,
    /// A tile went onto the board.
    TilePlaced,
    /// A new turn began.
    Turn,
    /// Unplayable tiles were swapped.
    ReplaceTile,
    /// A corporation was founded.
    Establish,
    /// Shares were bought.
    Buy,
    /// Two corporations merged.
    Merge,
    /// Merger bonuses were paid.
    Bonus,
}

/// A single log entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// What happened.
    #[serde(rename = "type")]
    pub kind: ActivityKind,

    /// Human-readable description.
    pub text: String,
}

impl ActivityRecord {
    /// Create a new record.
    pub fn new(kind: ActivityKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Ordered, append-only sequence of records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivityLog {
    records: Vector<ActivityRecord>,
}

impl ActivityLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn add(&mut self, kind: ActivityKind, text: impl Into<String>) {
        self.records.push_back(ActivityRecord::new(kind, text));
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&ActivityRecord> {
        self.records.back()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter()
    }

    /// Kinds of all records, oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = ActivityKind> + '_ {
        self.records.iter().map(|r| r.kind)
    }
}
