//! Undoing [`UnionFind`] operations.
//!
//! A recording [`UnionFind`] keeps a stack of [`LogEntry`] records, one per elementary
//! mutation. Rewinding pops records and inverts them, strictly in reverse order, so every
//! state the structure went through since its creation (or its last [`UnionFind::reset`]) can
//! be restored.
use tracing::{debug, instrument, trace};

use crate::error::UnionFindError;
use crate::union_find::{UnionFind, Vertex};

/// A single invertible mutation of the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogEntry {
    /// `vertex` was appended as a new singleton.
    CreatedVertex(Vertex),
    /// Path compression replaced `parent` as the parent of `vertex`.
    CompressedEdge { vertex: Vertex, parent: Vertex },
    /// `absorbed` (a leader) was attached under `root`.
    MergedSets {
        absorbed: Vertex,
        root: Vertex,
        rank_incremented: bool,
    },
}

/// The kind of operation undone by a call to [`UnionFind::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The log was empty; nothing changed.
    Noop,
    /// A vertex created by [`UnionFind::make_set`] was removed.
    MakeSet,
    /// A parent pointer rewritten by [`UnionFind::find_set`] was restored.
    FindSet,
    /// A merge done by [`UnionFind::union_sets`] was split again.
    UnionSets,
}

/// A position in the log of a recording [`UnionFind`], see [`UnionFind::rewind_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snapshot(usize);

impl UnionFind {
    /// Number of records in the log; always `0` when not recording.
    pub fn history_len(&self) -> usize {
        self.log.as_ref().map_or(0, Vec::len)
    }

    fn check_recording(&self) -> Result<(), UnionFindError> {
        if self.is_recording() {
            Ok(())
        } else {
            Err(UnionFindError::RecordingDisabled)
        }
    }

    /// Undo the most recent elementary operation, returning which kind it was.
    ///
    /// Returns [`Operation::Noop`] without changing anything when the log is empty.
    ///
    /// # Panics
    ///
    /// * When recording is disabled
    pub fn rewind(&mut self) -> Operation {
        self.try_rewind().unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_rewind(&mut self) -> Result<Operation, UnionFindError> {
        let entry = match &mut self.log {
            Some(log) => log.pop(),
            None => return Err(UnionFindError::RecordingDisabled),
        };
        let Some(entry) = entry else {
            return Ok(Operation::Noop);
        };
        trace!(?entry, "rewinding");

        let operation = match entry {
            LogEntry::CreatedVertex(u) => {
                debug_assert_eq!(u + 1, self.size());
                self.parent.pop();
                self.rank.pop();
                self.components -= 1;
                Operation::MakeSet
            }
            LogEntry::CompressedEdge { vertex, parent } => {
                self.parent[vertex] = parent;
                Operation::FindSet
            }
            LogEntry::MergedSets {
                absorbed,
                root,
                rank_incremented,
            } => {
                self.parent[absorbed] = absorbed;
                self.components += 1;
                if rank_incremented {
                    self.rank[root] -= 1;
                }
                Operation::UnionSets
            }
        };
        Ok(operation)
    }

    /// Rewind to the state just before vertex `u` was created, so that `size() <= u`.
    ///
    /// Does nothing if `u` does not exist. If the log was truncated by [`UnionFind::reset`]
    /// after `u` was created, rewinding stops at the reset point.
    ///
    /// # Panics
    ///
    /// * When recording is disabled
    #[instrument(level = "debug", skip(self))]
    pub fn rewind_vertex(&mut self, u: Vertex) {
        if let Err(e) = self.check_recording() {
            panic!("{e}");
        }
        let mut undone = 0;
        while u < self.size() {
            if self.rewind() == Operation::Noop {
                break;
            }
            undone += 1;
        }
        debug!(undone, size = self.size(), "rewound before vertex");
    }

    /// Rewind to the state just before `u` and `v` were first in the same set.
    ///
    /// Leaders are found with a walk that does not compress paths, so deciding whether to keep
    /// going never adds records to the log. Does nothing if `u == v`.
    ///
    /// # Panics
    ///
    /// * When recording is disabled
    /// * When `u >= self.size()` or `v >= self.size()`
    #[instrument(level = "debug", skip(self))]
    pub fn rewind_union(&mut self, u: Vertex, v: Vertex) {
        let checked = self
            .check_recording()
            .and_then(|()| self.check_vertex(u))
            .and_then(|()| self.check_vertex(v));
        if let Err(e) = checked {
            panic!("{e}");
        }
        if u == v {
            return;
        }

        let mut undone = 0;
        while self.root(u) == self.root(v) {
            if self.rewind() == Operation::Noop {
                break;
            }
            undone += 1;
        }
        debug!(undone, "rewound before union");
    }

    /// Mark the current position in the log.
    ///
    /// # Panics
    ///
    /// * When recording is disabled
    pub fn snapshot(&self) -> Snapshot {
        if let Err(e) = self.check_recording() {
            panic!("{e}");
        }
        Snapshot(self.history_len())
    }

    /// Rewind until the log is no longer than it was when `snapshot` was taken.
    ///
    /// A snapshot taken before a [`UnionFind::clear`], a [`UnionFind::reset`] or a deeper
    /// rewind may point past the end of the log, in which case nothing happens. A snapshot
    /// shorter than the log re-seeded by a reset rewinds into that log and removes vertices;
    /// keeping snapshots meaningful across a reset is up to the caller.
    ///
    /// # Panics
    ///
    /// * When recording is disabled
    #[instrument(level = "debug", skip(self))]
    pub fn rewind_to(&mut self, snapshot: Snapshot) {
        if let Err(e) = self.check_recording() {
            panic!("{e}");
        }
        let mut undone = 0;
        while self.history_len() > snapshot.0 {
            self.rewind();
            undone += 1;
        }
        debug!(undone, "rewound to snapshot");
    }
}
