//! kestrel - a de Bruijn graph short-read assembler.
//!
//! Reads are cut into k-mers and counted, the counts become a weighted
//! directed graph over (k-1)-mer nodes, and the graph is simplified by
//! resolving bubbles (alternate paths between a shared entry and exit) and
//! trimming tips (dead-end branches) before contigs are spelled out from
//! the surviving start-to-sink paths.

pub mod cli_main;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod stats;
