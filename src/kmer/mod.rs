//! K-mer slicing, counting and 2-bit encoding

pub mod count;
pub mod kmer;
