//! Stable topological sequencing of an acyclic graph.

use crate::graph::Adjacency;

/// Order the nodes of an acyclic `graph` so every dependency precedes its
/// dependents.
///
/// Roots are taken in node order. For each unvisited root, its unvisited
/// dependencies are resolved depth-first (in successor order) before the
/// root is emitted, so a whole dependency chain is emitted contiguously
/// before the next independent node. Nodes with no ordering relationship
/// keep their relative node order.
///
/// The traversal uses an explicit stack. On a cyclic graph the result is
/// still a permutation of the nodes but does not respect every edge; check
/// for cycles first.
pub fn stable_order<G: Adjacency>(graph: &G) -> Vec<usize> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut work: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        work.push((root, 0));

        while let Some(frame) = work.last_mut() {
            let (node, next) = *frame;
            match graph.successors(node).get(next) {
                Some(&dependency) => {
                    frame.1 += 1;
                    if !visited[dependency] {
                        visited[dependency] = true;
                        work.push((dependency, 0));
                    }
                }
                None => {
                    work.pop();
                    order.push(node);
                }
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DependencyGraph;
    use pretty_assertions::assert_eq;

    fn graph(n: usize, edges: &[(usize, usize)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for i in 0..n {
            graph.add_node(format!("n{i}"));
        }
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    #[test]
    fn test_independent_nodes_keep_node_order() {
        assert_eq!(stable_order(&graph(3, &[])), vec![0, 1, 2]);
    }

    #[test]
    fn test_dependency_before_dependent() {
        // 0 depends on 2
        assert_eq!(stable_order(&graph(3, &[(0, 2)])), vec![2, 0, 1]);
    }

    #[test]
    fn test_chain_is_emitted_contiguously() {
        // 0 -> 3 -> 4, 1 and 2 independent
        let g = graph(5, &[(0, 3), (3, 4)]);
        assert_eq!(stable_order(&g), vec![4, 3, 0, 1, 2]);
    }

    #[test]
    fn test_diamond() {
        // 3 depends on 1 and 2, both depend on 0
        let g = graph(4, &[(3, 1), (3, 2), (1, 0), (2, 0)]);
        assert_eq!(stable_order(&g), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_successor_order_breaks_ties() {
        // 0 depends on 2 then 1
        let g = graph(3, &[(0, 2), (0, 1)]);
        assert_eq!(stable_order(&g), vec![2, 1, 0]);
    }

    #[test]
    fn test_deep_chain_uses_no_recursion() {
        let n = 200_000;
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let order = stable_order(&graph(n, &edges));
        assert_eq!(order.len(), n);
        assert_eq!(order[0], n - 1);
        assert_eq!(order[n - 1], 0);
    }
}
