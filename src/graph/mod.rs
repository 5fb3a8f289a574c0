//! De Bruijn graph construction, simplification and contig extraction

pub mod contig;
pub mod debruijn;
pub mod path;
pub mod simplify;
