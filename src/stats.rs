use std::io::{self, BufRead};

use serde::Serialize;

use crate::io::fasta::open_fasta;

#[derive(Serialize)]
pub struct Stats {
    pub total_contigs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub n50: usize,
}

/// Contig statistics for an assembly FASTA, wrapped sequences included.
pub fn calculate_stats(path: &str) -> io::Result<Stats> {
    let reader = open_fasta(path)?;
    let mut lengths = vec![];
    let mut total = 0;
    let mut current_sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if !current_sequence.is_empty() {
                total += current_sequence.len();
                lengths.push(current_sequence.len());
                current_sequence.clear();
            }
        } else {
            current_sequence.push_str(line.trim());
        }
    }
    if !current_sequence.is_empty() {
        total += current_sequence.len();
        lengths.push(current_sequence.len());
    }

    lengths.sort_unstable();
    let total_contigs = lengths.len();
    let average_length = if total_contigs > 0 {
        total as f64 / total_contigs as f64
    } else {
        0.0
    };

    // N50: longest length at which the running total reaches half the assembly
    let mut acc = 0;
    let half_total = total / 2;
    let n50 = lengths
        .iter()
        .rev()
        .find(|&&len| {
            acc += len;
            acc >= half_total
        })
        .copied()
        .unwrap_or(0);

    Ok(Stats {
        total_contigs,
        total_length: total,
        average_length,
        n50,
    })
}
