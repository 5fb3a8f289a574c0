use crate::graph::debruijn::DebruijnGraph;
use crate::graph::path::shortest_path;
use crate::kmer::kmer::{decode_kmer, first_base};

#[derive(Debug, Clone)]
pub struct Contig {
    pub sequence: String,
    pub length: usize,
}

/// Extract one contig per connected (start, sink) pair.
///
/// Each pair contributes the shortest start->sink path; pairs with no path
/// between them are skipped, which is the expected outcome for most
/// combinations. Output order follows the start/sink iteration order.
pub fn get_contigs(
    graph: &DebruijnGraph,
    starting_nodes: &[u64],
    sink_nodes: &[u64],
    node_len: usize,
) -> Vec<Contig> {
    let mut contigs = Vec::new();

    for &start in starting_nodes {
        for &sink in sink_nodes {
            if let Some(path) = shortest_path(graph, start, sink) {
                let sequence = spell_path(&path, node_len);
                contigs.push(Contig {
                    length: sequence.len(),
                    sequence,
                });
            }
        }
    }

    contigs
}

/// Reconstruct the sequence a node path spells out: the first base of every
/// node but the last, then the whole last node.
fn spell_path(path: &[u64], node_len: usize) -> String {
    let mut sequence = String::with_capacity(path.len() - 1 + node_len);
    for &node in &path[..path.len() - 1] {
        sequence.push(first_base(node, node_len));
    }
    if let Some(&last) = path.last() {
        sequence.push_str(&decode_kmer(last, node_len));
    }
    sequence
}
