//! Disjoint-set (union-find) structure over cell ids.
//!
//! This module tracks which cells belong to the same connected component while the spanning tree
//! is grown. It exists only transiently: the spanning-tree builder creates one per generation and
//! discards it afterwards. Storage is a pair of flat vectors indexed by cell id, `find` is
//! iterative with path halving, and merges use union by size, so the amortized cost per
//! operation is near constant. A remaining-components counter replaces any full scan for the
//! "single representative left" termination check.

/// A disjoint-set over the ids `0..n` with path halving and union by size.
///
/// Every element starts as its own representative. Following representatives from any element
/// always reaches a fixed point; path halving shortens the chains as a side effect of `find`
/// without changing any observable result.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    /// Parent pointer per element; an element is a representative iff it points to itself.
    parent: Vec<usize>,
    /// Component size per representative; stale for non-representatives.
    size: Vec<usize>,
    /// Number of components remaining, decremented on every successful merge.
    components: usize,
}

impl DisjointSet {
    /// Creates a disjoint-set with `count` singleton components.
    pub(crate) fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            size: vec![1; count],
            components: count,
        }
    }

    /// Returns the representative of the component containing `element`.
    ///
    /// This function follows the representative chain until it reaches the fixed point, linking
    /// every visited element to its grandparent on the way so later lookups stay short.
    #[expect(
        clippy::indexing_slicing,
        reason = "Elements are cell ids minted by the grid; they never exceed the element count."
    )]
    pub(crate) fn find(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            let grandparent = self.parent[self.parent[element]];
            self.parent[element] = grandparent;
            element = grandparent;
        }
        element
    }

    /// Merges the components containing the two elements.
    ///
    /// This function returns `true` if the elements were in different components and a merge
    /// happened, and `false` if they already shared a representative. The smaller component is
    /// attached below the larger one.
    #[expect(
        clippy::indexing_slicing,
        reason = "Representatives returned by find are valid indices by construction."
    )]
    pub(crate) fn union(&mut self, first: usize, second: usize) -> bool {
        let mut first_root = self.find(first);
        let mut second_root = self.find(second);

        if first_root == second_root {
            return false;
        }

        if self.size[first_root] < self.size[second_root] {
            std::mem::swap(&mut first_root, &mut second_root);
        }
        self.parent[second_root] = first_root;
        self.size[first_root] += self.size[second_root];
        self.components -= 1;

        true
    }

    /// Returns whether the two elements share a representative.
    pub(crate) fn connected(&mut self, first: usize, second: usize) -> bool {
        self.find(first) == self.find(second)
    }

    /// Returns the number of components remaining.
    pub(crate) const fn components(&self) -> usize {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_singletons() {
        let mut set = DisjointSet::new(6);

        assert_eq!(set.components(), 6);
        for element in 0..6 {
            assert_eq!(set.find(element), element);
        }
    }

    #[test]
    fn test_union_merges_components() {
        let mut set = DisjointSet::new(4);

        assert!(set.union(0, 1));
        assert!(set.connected(0, 1));
        assert_eq!(set.components(), 3);
    }

    #[test]
    fn test_union_of_joined_elements_is_a_no_op() {
        let mut set = DisjointSet::new(4);

        assert!(set.union(2, 3));
        assert!(!set.union(3, 2));
        assert_eq!(set.components(), 3);
    }

    #[test]
    fn test_union_is_transitive() {
        let mut set = DisjointSet::new(5);

        assert!(set.union(0, 1));
        assert!(set.union(1, 2));
        assert!(set.union(3, 4));

        assert!(set.connected(0, 2));
        assert!(set.connected(4, 3));
        assert!(!set.connected(0, 3));
        assert_eq!(set.components(), 2);
    }

    #[test]
    fn test_find_agrees_after_union_of_representatives() {
        let mut set = DisjointSet::new(8);

        for element in 1..8 {
            let first_root = set.find(0);
            let second_root = set.find(element);
            assert!(set.union(first_root, second_root));
            assert_eq!(set.find(0), set.find(element));
        }

        assert_eq!(set.components(), 1);
    }

    #[test]
    fn test_long_chain_stays_consistent() {
        // Degenerate merge order; path halving must keep every element on the single component.
        let mut set = DisjointSet::new(64);

        for element in 0..63 {
            assert!(set.union(element, element + 1));
        }

        let root = set.find(0);
        for element in 0..64 {
            assert_eq!(set.find(element), root);
        }
        assert_eq!(set.components(), 1);
    }
}
