//! Fixed-size clique enumeration over a compatibility graph.

use smallvec::SmallVec;

use crate::graph::CompatibilityGraph;

/// Strictly increasing group-local positions, pairwise connected.
pub type Clique = SmallVec<[usize; 4]>;

/// Returns every clique of exactly `size` vertices.
///
/// Each clique is reported once, in ascending vertex order.
///
/// # Example
///
/// ```
/// use setclique_solver::{enumerate_cliques, CompatibilityGraph};
///
/// // A triangle 0-1-2 plus a pendant edge 2-3.
/// let graph = CompatibilityGraph::from_successors(vec![vec![1, 2], vec![2], vec![3], vec![]]);
///
/// let triangles = enumerate_cliques(&graph, 3);
/// assert_eq!(triangles.len(), 1);
/// assert_eq!(triangles[0].as_slice(), &[0, 1, 2]);
/// assert_eq!(enumerate_cliques(&graph, 2).len(), 4);
/// ```
pub fn enumerate_cliques(graph: &CompatibilityGraph, size: usize) -> Vec<Clique> {
    let mut cliques = Vec::new();
    for_each_clique(graph, size, |clique| cliques.push(Clique::from_slice(clique)));
    cliques
}

/// Calls `visit` with every clique of exactly `size` vertices.
///
/// Cliques grow from each edge `a -> b` by appending only vertices above the
/// current last member, so no clique is produced twice and the search only
/// walks edges that exist. Recursion depth is bounded by `size`.
pub fn for_each_clique<F>(graph: &CompatibilityGraph, size: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    match size {
        0 => {}
        1 => {
            for v in 0..graph.len() {
                visit(&[v]);
            }
        }
        _ => {
            let mut clique = Clique::new();
            for a in 0..graph.len() {
                for &b in graph.successors(a) {
                    clique.clear();
                    clique.push(a);
                    clique.push(b);
                    extend(graph, size, &mut clique, &mut visit);
                }
            }
        }
    }
}

fn extend<F>(graph: &CompatibilityGraph, size: usize, clique: &mut Clique, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if clique.len() >= size {
        visit(clique.as_slice());
        return;
    }

    let last = clique[clique.len() - 1];
    // A candidate must follow `last`, so it is one of last's successors.
    for &candidate in graph.successors(last) {
        let members = &clique[..clique.len() - 1];
        if members.iter().all(|&m| graph.has_edge(m, candidate)) {
            clique.push(candidate);
            extend(graph, size, clique, visit);
            clique.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(n: usize) -> CompatibilityGraph {
        CompatibilityGraph::from_successors((0..n).map(|a| (a + 1..n).collect()).collect())
    }

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_complete_graph_counts() {
        let graph = complete(7);
        for k in 1..=7 {
            assert_eq!(enumerate_cliques(&graph, k).len(), binomial(7, k), "k = {k}");
        }
        assert!(enumerate_cliques(&graph, 8).is_empty());
        assert!(enumerate_cliques(&graph, 0).is_empty());
    }

    #[test]
    fn test_cliques_are_unique_and_increasing() {
        let graph = complete(6);
        let mut cliques = enumerate_cliques(&graph, 3);
        assert!(cliques.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
        let before = cliques.len();
        cliques.sort();
        cliques.dedup();
        assert_eq!(cliques.len(), before);
    }

    #[test]
    fn test_missing_edge_breaks_clique() {
        // 4-cycle 0-1-2-3-0 with chord 0-2: triangles {0,1,2} and {0,2,3}.
        let graph = CompatibilityGraph::from_successors(vec![vec![1, 2, 3], vec![2], vec![3], vec![]]);
        let triangles = enumerate_cliques(&graph, 3);
        let sets: Vec<&[usize]> = triangles.iter().map(|c| c.as_slice()).collect();
        assert_eq!(sets, vec![&[0, 1, 2][..], &[0, 2, 3][..]]);
        assert!(enumerate_cliques(&graph, 4).is_empty());
    }

    #[test]
    fn test_edgeless_graph() {
        let graph = CompatibilityGraph::from_successors(vec![vec![]; 5]);
        assert_eq!(enumerate_cliques(&graph, 1).len(), 5);
        assert!(enumerate_cliques(&graph, 2).is_empty());
    }
}
