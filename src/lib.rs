//! # Rewind Union-Find
//!
//! A [`UnionFind`] maintains a partition of the vertices `0..n` into disjoint sets, with
//! near-constant time [`find_set`](UnionFind::find_set) and
//! [`union_sets`](UnionFind::union_sets) thanks to path compression and union by rank.
//!
//! Built with [`Recording::Enabled`], it also keeps a log of every elementary mutation
//! (including the parent rewrites done by path compression) and can be rewound:
//!
//! - [`rewind`](UnionFind::rewind) undoes the last elementary operation,
//! - [`rewind_vertex`](UnionFind::rewind_vertex) goes back to before a vertex was created,
//! - [`rewind_union`](UnionFind::rewind_union) goes back to before two vertices were first
//!   in the same set,
//! - [`snapshot`](UnionFind::snapshot) and [`rewind_to`](UnionFind::rewind_to) mark and
//!   restore arbitrary points.
//!
//! ```rust
//! use rewind_union_find::{Operation, UnionFind};
//!
//! let mut uf = UnionFind::with_rewind();
//! uf.make_sets(5);
//!
//! uf.union_sets(0, 1);
//! uf.union_sets(2, 3);
//! uf.union_sets(1, 4);
//! uf.union_sets(2, 0);
//! assert_eq!((uf.size(), uf.number_of_independent_sets()), (5, 1));
//!
//! // undo the last union
//! assert_eq!(uf.rewind(), Operation::UnionSets);
//! assert_eq!(uf.number_of_independent_sets(), 2);
//! assert_eq!(uf.independent_set(2).count(), 2);
//!
//! // back to before 0 and 4 were in the same set
//! uf.rewind_union(0, 4);
//! assert_eq!(uf.number_of_independent_sets(), 3);
//!
//! // back to before 3 existed
//! uf.rewind_vertex(3);
//! assert_eq!((uf.size(), uf.number_of_independent_sets()), (3, 3));
//! ```
//!
//! Without recording no log is kept, and the rewind operations panic.

pub mod error;
pub mod iter;
pub mod rewind;
pub mod union_find;

pub use error::UnionFindError;
pub use iter::{IndependentSet, Leaders};
pub use rewind::{Operation, Snapshot};
pub use union_find::{Recording, UnionFind, Vertex};
