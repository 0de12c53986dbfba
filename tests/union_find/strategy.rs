use {
    proptest::{
        collection::vec,
        prelude::{prop_oneof, Just, Strategy},
    },
    rewind_union_find::{UnionFind, Vertex},
};

const MAX_VERTICES: usize = 12;
const MAX_SCRIPT: usize = 40;

/// A mutating call on a [`UnionFind`].
///
/// Vertex arguments are reduced modulo the current size when the op is applied, so any script
/// is valid on any forest with at least one vertex.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    MakeSet,
    MakeSets(usize),
    Union(usize, usize),
    Find(usize),
}

impl Op {
    /// Apply the op, returning true when it merged two distinct sets.
    pub(crate) fn apply(&self, uf: &mut UnionFind) -> bool {
        let n = uf.size();
        match *self {
            Op::MakeSet => {
                uf.make_set();
                false
            }
            Op::MakeSets(k) => {
                uf.make_sets(k);
                false
            }
            Op::Union(_, _) | Op::Find(_) if n == 0 => false,
            Op::Union(u, v) => {
                let before = uf.number_of_independent_sets();
                uf.union_sets(u % n, v % n);
                uf.number_of_independent_sets() < before
            }
            Op::Find(u) => {
                uf.find_set(u % n);
                false
            }
        }
    }
}

pub(crate) fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::MakeSet),
        1 => (0..4usize).prop_map(Op::MakeSets),
        4 => (0..MAX_VERTICES, 0..MAX_VERTICES).prop_map(|(u, v)| Op::Union(u, v)),
        2 => (0..MAX_VERTICES).prop_map(Op::Find),
    ]
}

pub(crate) fn script_strategy() -> impl Strategy<Value = Vec<Op>> {
    vec(op_strategy(), 0..MAX_SCRIPT)
}

/// A recording forest with `1..MAX_VERTICES` vertices and a random history applied to it.
pub(crate) fn forest_strategy() -> impl Strategy<Value = UnionFind> {
    (1..MAX_VERTICES, script_strategy()).prop_map(|(n, script)| {
        let mut uf = UnionFind::with_rewind();
        uf.make_sets(n);
        for op in &script {
            op.apply(&mut uf);
        }
        uf
    })
}

/// Everything observable about a forest without mutating it.
pub(crate) fn observe(uf: &UnionFind) -> (usize, usize, Vec<Vertex>) {
    let roots = (0..uf.size()).map(|u| uf.find_root(u)).collect();
    (uf.size(), uf.number_of_independent_sets(), roots)
}
