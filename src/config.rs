use std::thread;

/// Startup constants for the aggregation pipeline. These are fixed at
/// startup rather than exposed as flags; the defaults mirror the tuned
/// values of the original program.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Worker threads draining the chunk queue.
    pub workers: usize,
    /// Complete lines per chunk handed to a worker.
    pub lines_per_chunk: usize,
    /// Bounded chunk queue capacity; a full queue blocks the producer.
    pub queue_capacity: usize,
    /// Upper bound on a single line's length.
    pub line_buffer_size: usize,
}

impl PipelineConfig {
    /// Size the pool from the machine: one thread is reserved for chunk
    /// production and coordination, the rest become workers.
    pub fn detect() -> Self {
        let parallelism = thread::available_parallelism().map(|n| n.get()).unwrap_or(2);
        Self {
            workers: parallelism.saturating_sub(1).max(1),
            ..Self::default_config()
        }
    }

    /// Fixed configuration for tests and benchmarks.
    pub fn default_config() -> Self {
        Self {
            workers: 4,
            lines_per_chunk: 1000,
            queue_capacity: 10_000,
            line_buffer_size: 1 << 20,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_lines_per_chunk(mut self, lines_per_chunk: usize) -> Self {
        self.lines_per_chunk = lines_per_chunk.max(1);
        self
    }
}
