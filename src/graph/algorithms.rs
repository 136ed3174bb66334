//! Graph algorithms used by clustering and routing

use crate::graph::{ClusterForest, Weight};

/// Depth-first traversal of the forest tree containing `root`.
///
/// Returns the reached vertices in pre-order, marking each one in `visited`.
/// Neighbours are explored in stored order and already-visited vertices are
/// skipped, so the result matches a recursive traversal without its depth
/// limit.
pub fn preorder_traversal(forest: &ClusterForest, root: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut order = vec![root];
    visited[root] = true;

    // (vertex, position of the next neighbour to inspect)
    let mut stack = vec![(root, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (node, pos) = *frame;
        match forest.neighbors(node).get(pos) {
            Some(&next) => {
                frame.1 += 1;
                let next = next as usize;
                if !visited[next] {
                    visited[next] = true;
                    order.push(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Single-pair Dijkstra over a dense weight matrix.
///
/// A matrix entry of zero means "no link". Among equal tentative distances the
/// lowest index is finalised first. Returns `None` when `target` is
/// unreachable from `source`; paths whose total overflows `Weight` are not
/// relaxed.
pub fn shortest_distance_dense(
    matrix: &[Vec<Weight>],
    source: usize,
    target: usize,
) -> Option<Weight> {
    let n = matrix.len();
    // None until reached
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut finalized = vec![false; n];
    dist[source] = Some(0);

    loop {
        // (distance, index) ordering picks the lowest index among equal minima
        let (d, u) = (0..n)
            .filter(|&i| !finalized[i])
            .filter_map(|i| dist[i].map(|d| (d, i)))
            .min()?;

        if u == target {
            return Some(d);
        }

        finalized[u] = true;

        for (v, &weight) in matrix[u].iter().enumerate() {
            if finalized[v] || weight == 0 {
                continue;
            }
            let Some(candidate) = d.checked_add(weight) else {
                continue;
            };
            if dist[v].map_or(true, |current| candidate < current) {
                dist[v] = Some(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn path_forest() -> ClusterForest {
        // 0 - 1 - 2 and 0 - 3, plus isolated 4
        ClusterForest::from_adjacency(&[vec![1, 3], vec![0, 2], vec![1], vec![0], vec![]])
    }

    #[test]
    fn traversal_is_preorder() {
        let forest = path_forest();
        let mut visited = vec![false; forest.node_count];
        assert_eq!(preorder_traversal(&forest, 0, &mut visited), vec![0, 1, 2, 3]);
        assert_eq!(visited, vec![true, true, true, true, false]);
    }

    #[test]
    fn traversal_of_isolated_vertex_is_singleton() {
        let forest = path_forest();
        let mut visited = vec![false; forest.node_count];
        assert_eq!(preorder_traversal(&forest, 4, &mut visited), vec![4]);
    }

    #[test]
    fn traversal_handles_long_chains() {
        let n = 200_000;
        let adjacency: Vec<Vec<u32>> = (0..n)
            .map(|i| {
                let mut list = Vec::new();
                if i > 0 {
                    list.push(i as u32 - 1);
                }
                if i + 1 < n {
                    list.push(i as u32 + 1);
                }
                list
            })
            .collect();
        let forest = ClusterForest::from_adjacency(&adjacency);
        let mut visited = vec![false; n];
        let order = preorder_traversal(&forest, 0, &mut visited);
        assert_eq!(order.len(), n);
        assert_eq!(order.last(), Some(&(n - 1)));
    }

    fn triangle() -> Vec<Vec<Weight>> {
        // 0-1 costs 10, 0-2 costs 3, 2-1 costs 4; 3 is disconnected
        vec![
            vec![0, 10, 3, 0],
            vec![10, 0, 4, 0],
            vec![3, 4, 0, 0],
            vec![0, 0, 0, 0],
        ]
    }

    #[rstest]
    #[case(0, 1, Some(7))]
    #[case(1, 0, Some(7))]
    #[case(0, 2, Some(3))]
    #[case(2, 2, Some(0))]
    #[case(0, 3, None)]
    #[case(3, 0, None)]
    fn dense_dijkstra(
        #[case] source: usize,
        #[case] target: usize,
        #[case] expected: Option<Weight>,
    ) {
        assert_eq!(shortest_distance_dense(&triangle(), source, target), expected);
    }

    #[test]
    fn maximum_weight_path_is_reachable() {
        let matrix = vec![vec![0, Weight::MAX], vec![Weight::MAX, 0]];
        assert_eq!(shortest_distance_dense(&matrix, 0, 1), Some(Weight::MAX));
    }

    #[test]
    fn overflowing_path_is_skipped_for_cheaper_route() {
        // 0-1-2 overflows, 0-3-2 fits
        let matrix = vec![
            vec![0, 1, 0, 5],
            vec![1, 0, Weight::MAX, 0],
            vec![0, Weight::MAX, 0, 6],
            vec![5, 0, 6, 0],
        ];
        assert_eq!(shortest_distance_dense(&matrix, 0, 2), Some(11));

        let chain = vec![
            vec![0, 1, 0],
            vec![1, 0, Weight::MAX],
            vec![0, Weight::MAX, 0],
        ];
        assert_eq!(shortest_distance_dense(&chain, 0, 2), None);
        assert_eq!(shortest_distance_dense(&chain, 1, 2), Some(Weight::MAX));
    }

    #[test]
    fn zero_weight_entries_are_not_links() {
        let matrix = vec![vec![0, 0], vec![0, 0]];
        assert_eq!(shortest_distance_dense(&matrix, 0, 1), None);
    }
}
