use std::collections::HashSet;

use petgraph::algo::all_simple_paths;
use petgraph::graphmap::{DiGraphMap, NodeTrait};
use petgraph::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::debruijn::{get_sink_nodes, get_starting_nodes, remove_path};
use crate::graph::path::path_average_weight;

/// The tie-break RNG is reseeded with this on every call, so equally-scored
/// choices are reproducible run to run.
const TIE_BREAK_SEED: u64 = 9001;

/// Keep the best of the candidate paths and remove all others.
///
/// Best means heaviest mean weight, then longest, then one picked uniformly
/// at random among the remaining ties. Losing paths are removed with the
/// caller's endpoint flags; a single candidate trivially wins and nothing is
/// removed. The candidate list must not be empty.
pub fn select_best_path<N: NodeTrait>(
    graph: &mut DiGraphMap<N, f64>,
    paths: &[Vec<N>],
    lengths: &[usize],
    weights: &[f64],
    drop_first: bool,
    drop_last: bool,
) {
    assert!(
        !paths.is_empty(),
        "select_best_path called with no candidate paths"
    );

    let max_weight = weights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let heaviest: Vec<usize> = (0..paths.len())
        .filter(|&i| weights[i] == max_weight)
        .collect();

    let best = if heaviest.len() == 1 {
        heaviest[0]
    } else {
        let max_length = heaviest.iter().map(|&i| lengths[i]).max().unwrap_or(0);
        let longest: Vec<usize> = heaviest
            .iter()
            .copied()
            .filter(|&i| lengths[i] == max_length)
            .collect();
        if longest.len() == 1 {
            longest[0]
        } else {
            let mut rng = StdRng::seed_from_u64(TIE_BREAK_SEED);
            longest[rng.gen_range(0..longest.len())]
        }
    };

    for (i, path) in paths.iter().enumerate() {
        if i != best {
            remove_path(graph, path, drop_first, drop_last);
        }
    }
}

/// Resolve one bubble by keeping the best simple path between entry and exit.
///
/// Both endpoints are shared by every competing path and always survive.
/// Does nothing when no simple path connects the two nodes.
pub fn solve_bubble<N: NodeTrait>(graph: &mut DiGraphMap<N, f64>, entry: N, exit: N) {
    let paths: Vec<Vec<N>> = all_simple_paths(&*graph, entry, exit, 0, None).collect();
    if paths.is_empty() {
        return;
    }

    let lengths: Vec<usize> = paths.iter().map(|path| path.len()).collect();
    let weights: Vec<f64> = paths
        .iter()
        .map(|path| path_average_weight(graph, path))
        .collect();

    select_best_path(graph, &paths, &lengths, &weights, false, false);
}

/// Locate and resolve every bubble reachable from the current start/sink sets.
///
/// For each (start, sink) pair the walk follows sole successors forward from
/// the start until a node with two or more successors (the bubble entry), and
/// sole predecessors backward from the sink until a node with two or more
/// predecessors (the exit). Pairs visited later see the graph as mutated by
/// earlier resolutions; a pair whose node was removed in between is skipped.
pub fn simplify_bubbles<N: NodeTrait>(graph: &mut DiGraphMap<N, f64>) {
    let starting_nodes = get_starting_nodes(graph);
    let sink_nodes = get_sink_nodes(graph);

    for &start in &starting_nodes {
        for &sink in &sink_nodes {
            if !graph.contains_node(start) || !graph.contains_node(sink) {
                continue;
            }
            let entry = walk_to_branch(graph, start, Direction::Outgoing);
            let exit = walk_to_branch(graph, sink, Direction::Incoming);
            solve_bubble(graph, entry, exit);
        }
    }
}

/// Follow sole neighbors in the given direction until a node with two or
/// more of them, or a dead end. A visited set stops the walk on cycles.
fn walk_to_branch<N: NodeTrait>(graph: &DiGraphMap<N, f64>, from: N, direction: Direction) -> N {
    let mut seen = HashSet::new();
    let mut node = from;

    loop {
        if !seen.insert(node) {
            return node;
        }
        let mut neighbors = graph.neighbors_directed(node, direction);
        let next = match neighbors.next() {
            Some(next) => next,
            None => return node,
        };
        if neighbors.next().is_some() {
            return node;
        }
        node = next;
    }
}

/// Trim entry tips: competing dead-end branches hanging off the graph's
/// starting side.
///
/// Bubbles are resolved first so tip scores are not skewed by unresolved
/// alternates. From each starting node the walk runs forward while the
/// current node has fewer than two successors, fewer than two predecessors
/// and at least one successor; the collected paths then compete, losers
/// dropping their dangling first node but never the merge point.
pub fn solve_entry_tips<N: NodeTrait>(graph: &mut DiGraphMap<N, f64>, starting_nodes: &[N]) {
    simplify_bubbles(graph);

    let mut paths = Vec::new();
    for &start in starting_nodes {
        if !graph.contains_node(start) {
            continue;
        }
        paths.push(walk_tip(graph, start, Direction::Outgoing));
    }
    if paths.is_empty() {
        return;
    }

    let lengths: Vec<usize> = paths.iter().map(|path| path.len()).collect();
    let weights: Vec<f64> = paths
        .iter()
        .map(|path| path_average_weight(graph, path))
        .collect();

    select_best_path(graph, &paths, &lengths, &weights, true, false);
}

/// Trim out tips: the mirror of solve_entry_tips on the sink side.
///
/// Walks run backward from each sink and the paths are reversed into forward
/// orientation before scoring, so edge weights are read in edge direction.
/// Losers drop their dangling last node.
pub fn solve_out_tips<N: NodeTrait>(graph: &mut DiGraphMap<N, f64>, sink_nodes: &[N]) {
    simplify_bubbles(graph);

    let mut paths = Vec::new();
    for &sink in sink_nodes {
        if !graph.contains_node(sink) {
            continue;
        }
        let mut path = walk_tip(graph, sink, Direction::Incoming);
        path.reverse();
        paths.push(path);
    }
    if paths.is_empty() {
        return;
    }

    let lengths: Vec<usize> = paths.iter().map(|path| path.len()).collect();
    let weights: Vec<f64> = paths
        .iter()
        .map(|path| path_average_weight(graph, path))
        .collect();

    select_best_path(graph, &paths, &lengths, &weights, false, true);
}

/// Accumulate a tip path from a free end toward the graph body.
///
/// The walk advances along the sole neighbor in the given direction while
/// the current node branches nowhere (fewer than two successors and fewer
/// than two predecessors). A dead end short of any merge point ends the walk
/// and the truncated path still competes. Cycles stop at the first repeat.
fn walk_tip<N: NodeTrait>(graph: &DiGraphMap<N, f64>, from: N, direction: Direction) -> Vec<N> {
    let mut path = vec![from];
    let mut seen = HashSet::new();
    seen.insert(from);
    let mut node = from;

    loop {
        let successors = graph.neighbors_directed(node, Direction::Outgoing).count();
        let predecessors = graph.neighbors_directed(node, Direction::Incoming).count();
        if successors >= 2 || predecessors >= 2 {
            break;
        }
        let next = match graph.neighbors_directed(node, direction).next() {
            Some(next) => next,
            None => break,
        };
        if !seen.insert(next) {
            break;
        }
        path.push(next);
        node = next;
    }

    path
}
