use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graphmap::{DiGraphMap, NodeTrait};

/// Mean edge weight over a path's consecutive node pairs.
///
/// A pair whose edge has already been removed contributes zero to the sum.
/// Paths with fewer than two nodes score 0.0.
pub fn path_average_weight<N: NodeTrait>(graph: &DiGraphMap<N, f64>, path: &[N]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for pair in path.windows(2) {
        if let Some(weight) = graph.edge_weight(pair[0], pair[1]) {
            total += *weight;
        }
    }

    total / (path.len() - 1) as f64
}

/// BFS shortest path from start to end, fewest edges first.
///
/// Among equal-length shortest paths the one discovered first wins, which
/// follows node insertion order; callers must not rely on which one that is.
/// Returns None when either endpoint is absent or no path exists.
pub fn shortest_path<N: NodeTrait>(graph: &DiGraphMap<N, f64>, start: N, end: N) -> Option<Vec<N>> {
    if !graph.contains_node(start) || !graph.contains_node(end) {
        return None;
    }
    if start == end {
        return Some(vec![start]);
    }

    let mut parents: HashMap<N, N> = HashMap::new();
    let mut visited: HashSet<N> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(node) {
            if !visited.insert(next) {
                continue;
            }
            parents.insert(next, node);
            if next == end {
                let mut path = vec![end];
                let mut current = end;
                while let Some(&parent) = parents.get(&current) {
                    path.push(parent);
                    current = parent;
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(next);
        }
    }

    None
}
