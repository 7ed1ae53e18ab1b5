//! Compatibility graph for one group.

use setclique_core::Collection;

use crate::partition::Group;

/// Directed acyclic compatibility graph over the members of one group.
///
/// Vertices are group-local positions. An edge `a -> b` (always `a < b`)
/// exists when the two cards differ in every dimension of the group's key.
/// Dimensions outside the key agree with the reference card for every
/// member, so they agree with each other and are not checked.
///
/// The reference card is left out: it is compatible with every member by
/// construction.
#[derive(Clone, Debug, Default)]
pub struct CompatibilityGraph {
    // successors[a] holds every b > a with an edge a -> b, ascending.
    successors: Vec<Vec<usize>>,
}

impl CompatibilityGraph {
    /// Builds the graph for `group`.
    pub fn build(collection: &Collection, group: &Group) -> Self {
        let n = group.len();
        let mut successors = vec![Vec::new(); n];

        for (a, &ai) in group.positions.iter().enumerate() {
            let card = &collection[ai];
            for (b, &bi) in group.positions.iter().enumerate().skip(a + 1) {
                let hcard = &collection[bi];
                if group.key.iter().all(|dim| card[dim] != hcard[dim]) {
                    successors[a].push(b);
                }
            }
        }

        Self { successors }
    }

    /// Builds a graph directly from edge lists. Successors of `a` that are not
    /// greater than `a`, or not a vertex, are dropped.
    pub fn from_successors(mut successors: Vec<Vec<usize>>) -> Self {
        let n = successors.len();
        for (a, succ) in successors.iter_mut().enumerate() {
            succ.retain(|&b| b > a && b < n);
            succ.sort_unstable();
            succ.dedup();
        }
        Self { successors }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Returns the higher vertices adjacent to `a`, ascending.
    #[inline]
    pub fn successors(&self, a: usize) -> &[usize] {
        &self.successors[a]
    }

    /// Returns true if `a -> b` is an edge. Requires `a < b`.
    #[inline]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.successors[a].binary_search(&b).is_ok()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use setclique_core::Card;

    fn coll(cards: &[[u32; 3]]) -> Collection {
        Collection::from_cards(3, 4, cards.iter().map(|c| Card::new(*c))).unwrap()
    }

    #[test]
    fn test_edges_only_ascend() {
        let coll = Collection::with_seed(3, 4, 40, 3).unwrap();
        for reference in 0..coll.len() {
            for group in partition(&coll, reference) {
                let graph = CompatibilityGraph::build(&coll, &group);
                assert_eq!(graph.len(), group.len());
                for a in 0..graph.len() {
                    assert!(graph.successors(a).iter().all(|&b| b > a && b < graph.len()));
                }
            }
        }
    }

    #[test]
    fn test_edge_requires_all_key_dimensions_to_differ() {
        // Reference (0,0,0); members differ from it in dimensions 0 and 1.
        let coll = coll(&[[0, 0, 0], [1, 1, 0], [2, 2, 0], [1, 3, 0], [3, 3, 0]]);
        let groups = partition(&coll, 0);
        assert_eq!(groups.len(), 1);

        let graph = CompatibilityGraph::build(&coll, &groups[0]);
        // (1,1) vs (2,2): edge. (1,1) vs (1,3): same dim 0. (1,1) vs (3,3): edge.
        assert_eq!(graph.successors(0), &[1, 3]);
        // (2,2) vs (1,3): edge. (2,2) vs (3,3): edge.
        assert_eq!(graph.successors(1), &[2, 3]);
        // (1,3) vs (3,3): same dim 1.
        assert!(graph.successors(2).is_empty());
        assert!(graph.has_edge(1, 3));
        assert!(!graph.has_edge(2, 3));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_from_successors_drops_descending_edges() {
        let graph = CompatibilityGraph::from_successors(vec![vec![2, 1, 1], vec![0, 1, 2], vec![0, 7]]);
        assert_eq!(graph.successors(0), &[1, 2]);
        assert_eq!(graph.successors(1), &[2]);
        assert!(graph.successors(2).is_empty());
        assert_eq!(
            crate::clique::enumerate_cliques(&graph, 3),
            vec![crate::clique::Clique::from_slice(&[0, 1, 2])]
        );
    }

    #[test]
    fn test_singleton_group() {
        let coll = coll(&[[0, 0, 0], [1, 0, 0]]);
        let groups = partition(&coll, 0);
        let graph = CompatibilityGraph::build(&coll, &groups[0]);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
