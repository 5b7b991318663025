use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tally::TallyError;
use tally::config::PipelineConfig;
use tally::pipeline;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Per-key min/mean/max summary of a key;value measurements file", long_about = None)]
struct Cli {
    /// Path to the measurements file
    input: PathBuf,
}

fn main() -> Result<(), TallyError> {
    let cli = Cli::parse();
    let config = PipelineConfig::detect();

    // Diagnostics go to stderr; stdout carries only the summary line.
    eprintln!("[tally] Input file: {}", cli.input.display());
    eprintln!(
        "[tally] Workers: {}, lines per chunk: {}, queue capacity: {}",
        config.workers, config.lines_per_chunk, config.queue_capacity
    );

    let start = Instant::now();
    let summary = pipeline::run(&cli.input, &config)?;
    println!("{}", summary);
    eprintln!("[tally] Took {:?} to run", start.elapsed());

    Ok(())
}
