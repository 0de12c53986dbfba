use core::ops::Range;

use tracing::debug;

use crate::error::UnionFindError;
use crate::iter::{IndependentSet, Leaders};
use crate::rewind::LogEntry;

/// Vertices are dense indices `0..size()`, allocated in creation order.
pub type Vertex = usize;

/// Whether a [`UnionFind`] keeps the log needed by the rewind operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recording {
    Enabled,
    #[default]
    Disabled,
}

/// A disjoint-set forest over the vertices `0..size()`, using path compression and union by
/// rank.
///
/// When built with [`Recording::Enabled`], every mutation (including the parent rewrites done
/// by path compression) is pushed onto a log, and the structure can be rewound to any earlier
/// state. See [`UnionFind::rewind`].
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    pub(crate) parent: Vec<Vertex>,
    pub(crate) rank: Vec<usize>,
    pub(crate) components: usize,
    // `None` exactly when recording is disabled.
    pub(crate) log: Option<Vec<LogEntry>>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::with_recording(Recording::Disabled)
    }

    pub fn with_rewind() -> Self {
        Self::with_recording(Recording::Enabled)
    }

    pub fn with_recording(recording: Recording) -> Self {
        Self::with_capacity(recording, 0)
    }

    /// An empty union-find with room for `n` vertices before reallocating.
    pub fn with_capacity(recording: Recording, n: usize) -> Self {
        let log = match recording {
            Recording::Enabled => Some(Vec::with_capacity(n)),
            Recording::Disabled => None,
        };
        Self {
            parent: Vec::with_capacity(n),
            rank: Vec::with_capacity(n),
            components: 0,
            log,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.log.is_some()
    }

    pub(crate) fn record(&mut self, entry: LogEntry) {
        if let Some(log) = &mut self.log {
            log.push(entry);
        }
    }

    pub(crate) fn check_vertex(&self, u: Vertex) -> Result<(), UnionFindError> {
        if u < self.size() {
            Ok(())
        } else {
            Err(UnionFindError::InvalidVertex {
                vertex: u,
                size: self.size(),
            })
        }
    }

    pub fn clear(&mut self) {
        debug!(size = self.size(), "clearing union-find");
        self.parent.clear();
        self.rank.clear();
        self.components = 0;
        if let Some(log) = &mut self.log {
            log.clear();
        }
    }

    /// Make every vertex a singleton set again.
    ///
    /// The log is discarded and, when recording, replaced by one vertex creation per vertex:
    /// rewinding after a reset can go back to "all singletons", but no further.
    pub fn reset(&mut self) {
        debug!(size = self.size(), "resetting union-find");
        let n = self.size();
        for (u, (parent, rank)) in self.parent.iter_mut().zip(self.rank.iter_mut()).enumerate() {
            *parent = u;
            *rank = 0;
        }
        self.components = n;
        if let Some(log) = &mut self.log {
            log.clear();
            log.extend((0..n).map(LogEntry::CreatedVertex));
        }
    }

    pub fn make_set(&mut self) -> Vertex {
        let u = self.size();
        self.parent.push(u);
        self.rank.push(0);
        self.components += 1;
        self.record(LogEntry::CreatedVertex(u));
        u
    }

    /// Add `n` new singleton vertices, returning the range of their ids.
    pub fn make_sets(&mut self, n: usize) -> Range<Vertex> {
        let start = self.size();
        self.parent.reserve(n);
        self.rank.reserve(n);
        if let Some(log) = &mut self.log {
            log.reserve(n);
        }
        for _ in 0..n {
            self.make_set();
        }
        start..self.size()
    }

    /// Find the leader of the set containing `u`, compressing the path from `u` to it.
    ///
    /// Each parent pointer rewritten by compression is logged separately when recording, so a
    /// single call may take several [`UnionFind::rewind`] steps to undo.
    ///
    /// # Panics
    ///
    /// * When `u >= self.size()`
    pub fn find_set(&mut self, u: Vertex) -> Vertex {
        self.try_find_set(u).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_find_set(&mut self, u: Vertex) -> Result<Vertex, UnionFindError> {
        self.check_vertex(u)?;
        Ok(self.compress(u))
    }

    // Unchecked: callers validate `u` first.
    fn compress(&mut self, u: Vertex) -> Vertex {
        let leader = self.root(u);

        // Second pass: point every vertex on the path directly at the leader, logging each
        // rewrite in the order the path is walked from `u`.
        let mut node = u;
        while self.parent[node] != leader && node != leader {
            let next = self.parent[node];
            self.record(LogEntry::CompressedEdge {
                vertex: node,
                parent: next,
            });
            self.parent[node] = leader;
            node = next;
        }
        leader
    }

    /// Find the leader of `u` without modifying the forest.
    ///
    /// # Panics
    ///
    /// * When `u >= self.size()`
    pub fn find_root(&self, u: Vertex) -> Vertex {
        if let Err(e) = self.check_vertex(u) {
            panic!("{e}");
        }
        self.root(u)
    }

    // Unchecked: callers validate `u` first.
    pub(crate) fn root(&self, u: Vertex) -> Vertex {
        let mut node = u;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// # Panics
    ///
    /// * When `u >= self.size()` or `v >= self.size()`
    pub fn same_set(&mut self, u: Vertex, v: Vertex) -> bool {
        self.find_set(u) == self.find_set(v)
    }

    /// Merge the sets containing `u` and `v`, returning the leader of the merged set.
    ///
    /// The leader of higher rank absorbs the other; on equal ranks the leader of `u` wins and
    /// its rank grows by one. Nothing changes (and nothing beyond compressions is logged) when
    /// `u` and `v` are already in the same set.
    ///
    /// # Panics
    ///
    /// * When `u >= self.size()` or `v >= self.size()`
    pub fn union_sets(&mut self, u: Vertex, v: Vertex) -> Vertex {
        self.try_union_sets(u, v).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_union_sets(&mut self, u: Vertex, v: Vertex) -> Result<Vertex, UnionFindError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        // Nothing is mutated until both vertices are validated.
        let lu = self.compress(u);
        let lv = self.compress(v);
        if lu == lv {
            return Ok(lu);
        }

        self.components -= 1;
        if self.rank[lu] < self.rank[lv] {
            self.parent[lu] = lv;
            self.record(LogEntry::MergedSets {
                absorbed: lu,
                root: lv,
                rank_incremented: false,
            });
            Ok(lv)
        } else {
            let rank_incremented = self.rank[lu] == self.rank[lv];
            if rank_incremented {
                self.rank[lu] += 1;
            }
            self.parent[lv] = lu;
            self.record(LogEntry::MergedSets {
                absorbed: lv,
                root: lu,
                rank_incremented,
            });
            Ok(lu)
        }
    }

    pub fn empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn size(&self) -> usize {
        self.parent.len()
    }

    pub fn number_of_independent_sets(&self) -> usize {
        self.components
    }

    /// Iterate over the leader of every set, in increasing order.
    ///
    /// The scan calls [`UnionFind::find_set`] on each vertex, so it compresses paths (and logs
    /// those compressions) as it goes.
    pub fn leaders(&mut self) -> Leaders<'_> {
        Leaders::new(self)
    }

    /// Iterate over every vertex in the same set as `u`, in increasing order.
    ///
    /// # Panics
    ///
    /// * When `u >= self.size()`
    pub fn independent_set(&mut self, u: Vertex) -> IndependentSet<'_> {
        let leader = self.find_set(u);
        IndependentSet::new(self, leader)
    }
}
