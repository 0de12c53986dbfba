//! Lazy scans over the vertices of a [`UnionFind`].
//!
//! Both iterators resolve leaders with [`UnionFind::find_set`], so they mutably borrow the
//! forest and compress paths as they advance. Call [`UnionFind::leaders`] or
//! [`UnionFind::independent_set`] again to restart a scan.
use core::iter::FusedIterator;
use core::ops::Range;

use crate::union_find::{UnionFind, Vertex};

/// Iterator over the leaders of a [`UnionFind`], see [`UnionFind::leaders`].
#[derive(Debug)]
pub struct Leaders<'a> {
    forest: &'a mut UnionFind,
    vertices: Range<Vertex>,
}

impl<'a> Leaders<'a> {
    pub(crate) fn new(forest: &'a mut UnionFind) -> Self {
        let vertices = 0..forest.size();
        Self { forest, vertices }
    }
}

impl Iterator for Leaders<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let forest = &mut *self.forest;
        self.vertices.find(|&u| forest.find_set(u) == u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.vertices.len()))
    }
}

impl FusedIterator for Leaders<'_> {}

/// Iterator over the vertices in one set of a [`UnionFind`], see
/// [`UnionFind::independent_set`].
#[derive(Debug)]
pub struct IndependentSet<'a> {
    forest: &'a mut UnionFind,
    leader: Vertex,
    vertices: Range<Vertex>,
}

impl<'a> IndependentSet<'a> {
    pub(crate) fn new(forest: &'a mut UnionFind, leader: Vertex) -> Self {
        let vertices = 0..forest.size();
        Self {
            forest,
            leader,
            vertices,
        }
    }

    /// The leader of the set being scanned.
    pub fn leader(&self) -> Vertex {
        self.leader
    }
}

impl Iterator for IndependentSet<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let forest = &mut *self.forest;
        let leader = self.leader;
        self.vertices.find(|&v| forest.find_set(v) == leader)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.vertices.len()))
    }
}

impl FusedIterator for IndependentSet<'_> {}
