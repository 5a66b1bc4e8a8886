//! Disjoint-set forest with path compression and union by rank.
//!
//! The algorithm lives in the provided methods of [`DisjointSet`]; implementors only expose
//! where the parent and rank of each node are stored. [`UnionFind`] keeps them in plain
//! vectors, while [`AnnotatedGraph`](crate::graph::AnnotatedGraph) keeps them in its node
//! decorations so that Kruskal's forest stays visible after every step.

use crate::graph::NodeId;

/// Storage access plus the union-find operations built on top of it.
///
/// Every node starts as the root of its own singleton set (`parent(n) == n`, rank 0).
///
/// # Examples
///
/// ```rust
/// use graphstep::{graph::NodeId, utils::{DisjointSet, UnionFind}};
///
/// let mut sets = UnionFind::new(4);
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
///
/// let (ra, rb) = (sets.find(a), sets.find(b));
/// assert!(sets.union(ra, rb));
/// assert_eq!(sets.find(a), sets.find(b));
/// assert_ne!(sets.find(a), sets.find(c));
/// ```
pub trait DisjointSet {
    /// Returns the stored parent of `node`.
    fn parent(&self, node: NodeId) -> NodeId;

    /// Overwrites the stored parent of `node`.
    fn set_parent(&mut self, node: NodeId, parent: NodeId);

    /// Returns the stored rank of `node`.
    fn rank(&self, node: NodeId) -> u32;

    /// Overwrites the stored rank of `node`.
    fn set_rank(&mut self, node: NodeId, rank: u32);

    /// Returns the root of the set containing `node`.
    ///
    /// Every node visited on the way is re-attached directly to the root.
    fn find(&mut self, node: NodeId) -> NodeId {
        let parent = self.parent(node);
        if parent == node {
            return node;
        }
        let root = self.find(parent);
        self.set_parent(node, root);
        root
    }

    /// Merges the sets rooted at `root_a` and `root_b`.
    ///
    /// The root of lower rank is attached below the other. On equal rank `root_b` is attached
    /// below `root_a`, whose rank grows by one. Both arguments must be roots as returned by
    /// [`find`](Self::find).
    ///
    /// Returns `false` without changing anything when both are the same root.
    fn union(&mut self, root_a: NodeId, root_b: NodeId) -> bool {
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank(root_a);
        let rank_b = self.rank(root_b);
        if rank_a < rank_b {
            self.set_parent(root_a, root_b);
        } else if rank_a > rank_b {
            self.set_parent(root_b, root_a);
        } else {
            self.set_parent(root_b, root_a);
            self.set_rank(root_a, rank_a + 1);
        }
        true
    }
}

/// A standalone disjoint-set forest over `0..len`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<NodeId>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).map(NodeId::new).collect(),
            rank: vec![0; len],
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds both roots and merges them; returns `false` if `a` and `b` were already joined.
    pub fn join(&mut self, a: NodeId, b: NodeId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        self.union(root_a, root_b)
    }
}

impl DisjointSet for UnionFind {
    fn parent(&self, node: NodeId) -> NodeId {
        self.parent[node.index()]
    }

    fn set_parent(&mut self, node: NodeId, parent: NodeId) {
        self.parent[node.index()] = parent;
    }

    fn rank(&self, node: NodeId) -> u32 {
        self.rank[node.index()]
    }

    fn set_rank(&mut self, node: NodeId, rank: u32) {
        self.rank[node.index()] = rank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn test_singletons() {
        let mut sets = UnionFind::new(3);
        assert_eq!(sets.len(), 3);
        for i in 0..3 {
            assert_eq!(sets.find(n(i)), n(i));
        }
        assert!(UnionFind::new(0).is_empty());
    }

    #[test]
    fn test_union_by_rank() {
        let mut sets = UnionFind::new(4);
        assert!(sets.union(n(0), n(1)));
        // equal rank: second under first
        assert_eq!(sets.parent(n(1)), n(0));
        assert_eq!(sets.rank(n(0)), 1);

        // lower rank root goes under higher
        assert!(sets.union(n(2), n(0)));
        assert_eq!(sets.parent(n(2)), n(0));
        assert_eq!(sets.rank(n(0)), 1);
    }

    #[test]
    fn test_same_root_union_is_rejected() {
        let mut sets = UnionFind::new(2);
        assert!(sets.join(n(0), n(1)));
        let root = sets.find(n(1));
        assert!(!sets.union(root, root));
        assert!(!sets.join(n(1), n(0)));
    }

    #[test]
    fn test_path_compression() {
        let mut sets = UnionFind::new(4);
        // hand-built chain 3 -> 2 -> 1 -> 0
        sets.set_parent(n(3), n(2));
        sets.set_parent(n(2), n(1));
        sets.set_parent(n(1), n(0));

        assert_eq!(sets.find(n(3)), n(0));
        assert_eq!(sets.parent(n(3)), n(0));
        assert_eq!(sets.parent(n(2)), n(0));
    }

    #[test]
    fn test_chains_terminate_at_self_rooted_node() {
        let mut sets = UnionFind::new(8);
        for i in 1..8 {
            sets.join(n(i - 1), n(i));
        }
        let root = sets.find(n(5));
        assert_eq!(sets.parent(root), root);
        for i in 0..8 {
            assert_eq!(sets.find(n(i)), root);
        }
    }
}
