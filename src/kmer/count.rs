use ahash::AHashMap;
use rayon::prelude::*;

/// Iterator over the k-length windows of a sequence, in read order.
pub fn cut_kmers(sequence: &str, k: usize) -> impl Iterator<Item = &str> {
    let windows = if sequence.len() >= k {
        sequence.len() - k + 1
    } else {
        0
    };
    (0..windows).map(move |i| &sequence[i..i + k])
}

/// Count every k-mer occurrence across all reads.
///
/// Reads are counted in parallel and the per-thread maps merged; the
/// resulting index is exhaustive over all k-mers observed in the read set.
pub fn build_kmer_index(sequences: &[String], k: usize) -> AHashMap<String, u32> {
    sequences
        .par_iter()
        .fold(AHashMap::new, |mut counts, sequence| {
            for kmer in cut_kmers(sequence, k) {
                *counts.entry(kmer.to_string()).or_insert(0) += 1;
            }
            counts
        })
        .reduce(AHashMap::new, |mut merged, counts| {
            for (kmer, count) in counts {
                *merged.entry(kmer).or_insert(0) += count;
            }
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_kmers() {
        let kmers: Vec<&str> = cut_kmers("TCAGA", 3).collect();
        assert_eq!(kmers, vec!["TCA", "CAG", "AGA"]);
    }

    #[test]
    fn test_cut_kmers_short_sequence_yields_nothing() {
        assert_eq!(cut_kmers("TC", 3).count(), 0);
    }

    #[test]
    fn test_build_kmer_index() {
        let reads = vec!["TCAGAGA".to_string()];
        let index = build_kmer_index(&reads, 3);

        assert_eq!(index.len(), 4);
        assert!(index.contains_key("TCA"));
        assert!(index.contains_key("CAG"));
        assert!(index.contains_key("AGA"));
        assert!(index.contains_key("GAG"));
        assert_eq!(index["AGA"], 2);
    }

    #[test]
    fn test_build_kmer_index_sums_across_reads() {
        let reads = vec!["TCAG".to_string(), "TCAG".to_string()];
        let index = build_kmer_index(&reads, 4);
        assert_eq!(index["TCAG"], 2);
    }
}
