use ahash::AHashMap;
use petgraph::graphmap::{DiGraphMap, NodeTrait};
use petgraph::Direction;
use tracing::warn;

use crate::kmer::kmer::encode_kmer;

/// Type definition for DebruijnGraph - a directed graph where:
/// - Nodes are (k-1)-mers, 2-bit encoded into a u64
/// - Edge weights are the originating k-mer's count across all reads
pub type DebruijnGraph = DiGraphMap<u64, f64>;

/// Build the de Bruijn graph from a k-mer frequency index.
///
/// Each k-mer contributes one prefix->suffix edge carrying its count.
/// Index keys are sorted before insertion; node iteration order must be
/// identical run to run for tie-breaking to be reproducible.
pub fn build_graph(kmer_index: &AHashMap<String, u32>, k: usize) -> DebruijnGraph {
    let mut kmers: Vec<(&String, u32)> = kmer_index.iter().map(|(s, &c)| (s, c)).collect();
    kmers.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut graph = DiGraphMap::new();
    let mut skipped = 0usize;

    for (kmer, count) in kmers {
        match (encode_kmer(&kmer[..k - 1]), encode_kmer(&kmer[1..])) {
            (Some(prefix), Some(suffix)) => {
                graph.add_edge(prefix, suffix, count as f64);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} k-mers with non-ACGT characters", skipped);
    }

    graph
}

/// Find nodes with no incoming edges (contig start candidates)
pub fn get_starting_nodes<N: NodeTrait>(graph: &DiGraphMap<N, f64>) -> Vec<N> {
    let mut starting_nodes = Vec::new();

    for node in graph.nodes() {
        let has_incoming = graph
            .neighbors_directed(node, Direction::Incoming)
            .next()
            .is_some();
        if !has_incoming {
            starting_nodes.push(node);
        }
    }

    starting_nodes
}

/// Find nodes with no outgoing edges (contig end candidates)
pub fn get_sink_nodes<N: NodeTrait>(graph: &DiGraphMap<N, f64>) -> Vec<N> {
    let mut sink_nodes = Vec::new();

    for node in graph.nodes() {
        let has_outgoing = graph
            .neighbors_directed(node, Direction::Outgoing)
            .next()
            .is_some();
        if !has_outgoing {
            sink_nodes.push(node);
        }
    }

    sink_nodes
}

/// Remove a path's nodes from the graph along with their incident edges.
///
/// Interior nodes always go; the endpoints only when the matching flag is
/// set. Removing a node that is already gone is a no-op, so paths sharing
/// nodes can be removed in any order within a batch.
pub fn remove_path<N: NodeTrait>(
    graph: &mut DiGraphMap<N, f64>,
    path: &[N],
    drop_first: bool,
    drop_last: bool,
) {
    if path.is_empty() {
        return;
    }
    if drop_first {
        graph.remove_node(path[0]);
    }
    if drop_last {
        graph.remove_node(path[path.len() - 1]);
    }
    if path.len() > 2 {
        for &node in &path[1..path.len() - 1] {
            graph.remove_node(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::count::build_kmer_index;
    use crate::kmer::kmer::encode_kmer;

    #[test]
    fn test_build_graph() {
        // TCAGAGA with k=3: TCA CAG AGA GAG AGA
        let index = build_kmer_index(&["TCAGAGA".to_string()], 3);
        let graph = build_graph(&index, 3);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        let ag = encode_kmer("AG").unwrap();
        let ga = encode_kmer("GA").unwrap();
        assert!(graph.contains_node(ag));
        assert!(graph.contains_node(ga));
        assert_eq!(graph.edge_weight(ag, ga), Some(&2.0));
    }

    #[test]
    fn test_build_graph_skips_ambiguous_kmers() {
        let index = build_kmer_index(&["TCNGA".to_string()], 3);
        let graph = build_graph(&index, 3);

        // TCN, CNG and NGA cannot be encoded, only an empty graph remains
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_remove_path_endpoint_flags() {
        let edges = [(1, 2), (3, 2), (2, 4), (4, 5), (5, 6), (5, 7)];

        let mut graph_1: DiGraphMap<u32, f64> = DiGraphMap::new();
        let mut graph_2: DiGraphMap<u32, f64> = DiGraphMap::new();
        let mut graph_3: DiGraphMap<u32, f64> = DiGraphMap::new();
        let mut graph_4: DiGraphMap<u32, f64> = DiGraphMap::new();
        for &(a, b) in &edges {
            graph_1.add_edge(a, b, 1.0);
            graph_2.add_edge(a, b, 1.0);
            graph_3.add_edge(a, b, 1.0);
            graph_4.add_edge(a, b, 1.0);
        }

        remove_path(&mut graph_1, &[1, 2], true, false);
        assert!(!graph_1.contains_edge(1, 2));
        assert!(graph_1.contains_edge(3, 2));

        remove_path(&mut graph_2, &[5, 7], false, true);
        assert!(!graph_2.contains_edge(5, 7));
        assert!(graph_2.contains_edge(5, 6));

        remove_path(&mut graph_3, &[2, 4, 5], false, false);
        assert!(!graph_3.contains_node(4));
        assert!(graph_3.contains_node(2));
        assert!(graph_3.contains_node(5));

        remove_path(&mut graph_4, &[2, 4, 5], true, true);
        assert!(!graph_4.contains_edge(2, 4));
        assert!(!graph_4.contains_edge(4, 5));
        assert!(!graph_4.contains_node(2));
        assert!(!graph_4.contains_node(4));
        assert!(!graph_4.contains_node(5));
    }

    #[test]
    fn test_remove_path_twice_is_noop() {
        let mut graph: DiGraphMap<u32, f64> = DiGraphMap::new();
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);

        remove_path(&mut graph, &[1, 2, 3], true, true);
        remove_path(&mut graph, &[1, 2, 3], true, true);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_starting_and_sink_nodes() {
        let mut graph: DiGraphMap<u32, f64> = DiGraphMap::new();
        for (a, b) in [(1, 2), (3, 2), (2, 4), (4, 5), (5, 6), (5, 7)] {
            graph.add_edge(a, b, 1.0);
        }

        let mut starting = get_starting_nodes(&graph);
        starting.sort_unstable();
        assert_eq!(starting, vec![1, 3]);

        let mut sinks = get_sink_nodes(&graph);
        sinks.sort_unstable();
        assert_eq!(sinks, vec![6, 7]);
    }

    #[test]
    fn test_isolated_node_is_both_start_and_sink() {
        let mut graph: DiGraphMap<u32, f64> = DiGraphMap::new();
        graph.add_node(9);
        assert_eq!(get_starting_nodes(&graph), vec![9]);
        assert_eq!(get_sink_nodes(&graph), vec![9]);
    }
}
