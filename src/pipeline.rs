use crate::chunker::Chunker;
use crate::config::PipelineConfig;
use crate::error::TallyError;
use crate::formatter;
use crate::record;
use crate::reducer;
use crate::table::AggregateTable;
use crossbeam_channel::{Receiver, bounded};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::thread;

/// Summarize the file at `path` into the final `{key=min/mean/max, ...}`
/// string using the parallel pipeline.
pub fn run(path: &Path, config: &PipelineConfig) -> Result<String, TallyError> {
    let file = File::open(path)?;
    summarize(file, config)
}

/// Parallel single-pass aggregation over any byte stream: the calling
/// thread chunks the input and feeds one bounded queue, `config.workers`
/// threads drain it into private tables, and the merged result is
/// formatted after all workers have been joined.
pub fn summarize<R: Read>(input: R, config: &PipelineConfig) -> Result<String, TallyError> {
    let chunker = Chunker::new(input, config.lines_per_chunk, config.line_buffer_size);
    let tables = run_workers(chunker, config)?;
    Ok(formatter::format_summary(&reducer::reduce(tables)))
}

/// Single-threaded reference computation over the same chunking path.
/// The parallel pipeline must reproduce its output byte for byte.
pub fn summarize_sequential<R: Read>(
    input: R,
    config: &PipelineConfig,
) -> Result<String, TallyError> {
    let mut table = AggregateTable::new();
    for chunk in Chunker::new(input, config.lines_per_chunk, config.line_buffer_size) {
        fold_chunk(&chunk?, &mut table)?;
    }
    Ok(formatter::format_summary(&table))
}

fn run_workers<R: Read>(
    chunker: Chunker<R>,
    config: &PipelineConfig,
) -> Result<Vec<AggregateTable>, TallyError> {
    let (tx, rx) = bounded::<Vec<u8>>(config.queue_capacity);

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(config.workers);
        for _ in 0..config.workers {
            let rx = rx.clone();
            handles.push(scope.spawn(move || drain(rx)));
        }
        drop(rx);

        // The producer runs on the coordinating thread; a full queue
        // blocks it here until a worker takes a chunk.
        let mut producer_err = None;
        for chunk in chunker {
            match chunk {
                Ok(chunk) => {
                    // Send fails only once every worker has exited, which
                    // happens when a worker hit a parse error.
                    if tx.send(chunk).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    producer_err = Some(e);
                    break;
                }
            }
        }
        // Dropping the sender closes the queue; workers finish draining
        // and return. This is the sole termination signal.
        drop(tx);

        let mut tables = Vec::with_capacity(handles.len());
        let mut worker_err = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(table)) => tables.push(table),
                Ok(Err(e)) => {
                    if worker_err.is_none() {
                        worker_err = Some(e);
                    }
                }
                Err(_) => {
                    if worker_err.is_none() {
                        worker_err = Some(TallyError::Other("worker thread panicked".to_string()));
                    }
                }
            }
        }

        if let Some(e) = producer_err {
            return Err(e);
        }
        if let Some(e) = worker_err {
            return Err(e);
        }
        Ok(tables)
    })
}

fn drain(rx: Receiver<Vec<u8>>) -> Result<AggregateTable, TallyError> {
    let mut table = AggregateTable::new();
    for chunk in rx {
        fold_chunk(&chunk, &mut table)?;
    }
    Ok(table)
}

fn fold_chunk(chunk: &[u8], table: &mut AggregateTable) -> Result<(), TallyError> {
    for line in chunk.split(|&b| b == b'\n') {
        if line.is_empty() {
            continue;
        }
        let (key, value) = record::parse_line(line)?;
        table.observe(key, value)?;
    }
    Ok(())
}
