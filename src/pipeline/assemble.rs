use std::io;

use tracing::info;

use crate::graph::contig::get_contigs;
use crate::graph::debruijn::{build_graph, get_sink_nodes, get_starting_nodes};
use crate::graph::simplify::{simplify_bubbles, solve_entry_tips, solve_out_tips};
use crate::io::fasta::save_contigs;
use crate::io::fastq::{open_fastq, stream_fastq_records};
use crate::kmer::count::build_kmer_index;

/// Run the full assembly pipeline: FASTQ reads in, FASTA contigs out.
pub fn assemble_reads(
    input_path: &str,
    output_path: &str,
    k: usize,
    min_len: usize,
) -> io::Result<()> {
    // graph nodes are 2-bit-encoded (k-1)-mers in a u64
    if !(2..=33).contains(&k) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("k-mer size must be between 2 and 33, got {}", k),
        ));
    }

    info!("Streaming FASTQ records from {}", input_path);
    let reader = open_fastq(input_path)?;
    let sequences: Vec<String> = stream_fastq_records(reader)
        .map(|record| record.sequence)
        .collect();
    info!("Loaded {} reads", sequences.len());

    let kmer_index = build_kmer_index(&sequences, k);
    info!("Counted {} distinct {}-mers", kmer_index.len(), k);
    drop(sequences);

    let mut graph = build_graph(&kmer_index, k);
    info!(
        "Built de Bruijn graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    drop(kmer_index);

    simplify_bubbles(&mut graph);
    let starting_nodes = get_starting_nodes(&graph);
    let sink_nodes = get_sink_nodes(&graph);
    solve_entry_tips(&mut graph, &starting_nodes);
    solve_out_tips(&mut graph, &sink_nodes);
    info!(
        "Simplified graph down to {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let starting_nodes = get_starting_nodes(&graph);
    let sink_nodes = get_sink_nodes(&graph);
    let mut contigs = get_contigs(&graph, &starting_nodes, &sink_nodes, k - 1);
    if min_len > 0 {
        contigs.retain(|contig| contig.length >= min_len);
    }
    info!("Extracted {} contigs", contigs.len());

    save_contigs(&contigs, output_path)?;
    info!("Wrote contigs to {}", output_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_oversized_k() {
        let err = assemble_reads("reads.fq", "out.fa", 34, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_rejects_tiny_k() {
        let err = assemble_reads("reads.fq", "out.fa", 1, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
