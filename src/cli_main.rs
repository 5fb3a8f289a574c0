use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kestrel", version, about = "De Bruijn graph short-read assembler", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble single-end reads into contigs
    Assemble {
        /// Input FASTQ(.gz) file
        #[arg(short, long)]
        input: String,

        /// Output FASTA(.gz) file
        #[arg(short, long)]
        output: String,

        /// K-mer size (2 to 33)
        #[arg(short, long, default_value_t = 21)]
        kmer_size: usize,

        /// Minimum contig length to report, 0 keeps everything
        #[arg(long, default_value_t = 0)]
        min_len: usize,

        /// Number of threads for k-mer counting
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Report assembly statistics for a contig FASTA
    Stats {
        /// Input FASTA(.gz) file
        #[arg(short, long)]
        input: String,

        /// Output format (json or tsv)
        #[arg(long, default_value = "json")]
        format: String,
    },
}
