use clap::Parser;
use rayon::ThreadPoolBuilder;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use kestrel::cli_main::{Cli, Commands};
use kestrel::pipeline;
use kestrel::stats::calculate_stats;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            input,
            output,
            kmer_size,
            min_len,
            threads,
        } => {
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .expect("Failed to build thread pool");

            info!("Running assembly pipeline");
            let start = std::time::Instant::now();

            if let Err(e) = pipeline::assemble::assemble_reads(&input, &output, kmer_size, min_len)
            {
                eprintln!("Error during assembly: {}", e);
                std::process::exit(1);
            }

            println!("Assembly completed in {:.2}s", start.elapsed().as_secs_f32());
        }

        Commands::Stats { input, format } => {
            info!("Calculating assembly statistics for: {}", input);

            let stats = match calculate_stats(&input) {
                Ok(stats) => stats,
                Err(e) => {
                    eprintln!("Error reading assembly: {}", e);
                    std::process::exit(1);
                }
            };

            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&stats).unwrap());
                }
                "tsv" => {
                    println!("contigs\ttotal_len\tavg_len\tn50");
                    println!(
                        "{}\t{}\t{:.2}\t{}",
                        stats.total_contigs, stats.total_length, stats.average_length, stats.n50
                    );
                }
                _ => eprintln!("Unsupported format: {}", format),
            }
        }
    }
}
