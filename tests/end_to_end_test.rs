use std::fs;
use std::io::Cursor;
use tally::TallyError;
use tally::config::PipelineConfig;
use tally::pipeline;

fn write_measurements(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write measurements file");
    path
}

fn dataset(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            let sign = if i % 3 == 0 { "-" } else { "" };
            format!("city-{:02};{}{}.{}\n", i % 40, sign, (i * 17) % 100, i % 10)
        })
        .collect()
}

#[test]
fn test_summarizes_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_measurements(
        &dir,
        "measurements.txt",
        "Hamburg;12.0\nBulawayo;8.9\nPalembang;38.8\nHamburg;34.2\nSt. John's;15.2\nCracow;12.6\n",
    );

    let summary = pipeline::run(&path, &PipelineConfig::detect()).unwrap();
    assert_eq!(
        summary,
        // Hamburg's displayed mean is its sum over one counted observation
        // (46.2), the inherited count convention.
        "{Bulawayo=8.9/8.9/8.9, Cracow=12.6/12.6/12.6, Hamburg=12.0/46.2/34.2, \
         Palembang=38.8/38.8/38.8, St. John's=15.2/15.2/15.2}"
    );
}

#[test]
fn test_output_independent_of_workers_and_chunking() {
    let dir = tempfile::tempdir().unwrap();
    let input = dataset(20_000);
    let path = write_measurements(&dir, "measurements.txt", &input);

    let baseline = pipeline::summarize_sequential(
        Cursor::new(input.into_bytes()),
        &PipelineConfig::default_config(),
    )
    .unwrap();

    for workers in [1, 2, 4, 7] {
        for lines_per_chunk in [1, 50, 1000, 100_000] {
            let config = PipelineConfig::default_config()
                .with_workers(workers)
                .with_lines_per_chunk(lines_per_chunk);
            let summary = pipeline::run(&path, &config).unwrap();
            assert_eq!(
                summary, baseline,
                "workers={} lines_per_chunk={}",
                workers, lines_per_chunk
            );
        }
    }
}

#[test]
fn test_file_without_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let terminated = write_measurements(&dir, "a.txt", "A;1.0\nB;2.0\nA;3.0\n");
    let unterminated = write_measurements(&dir, "b.txt", "A;1.0\nB;2.0\nA;3.0");

    let config = PipelineConfig::default_config();
    assert_eq!(
        pipeline::run(&terminated, &config).unwrap(),
        pipeline::run(&unterminated, &config).unwrap()
    );
}

#[test]
fn test_inherited_mean_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_measurements(&dir, "measurements.txt", "A;10.0\nB;-5.5\nA;20.0\n");

    let summary = pipeline::run(&path, &PipelineConfig::default_config()).unwrap();
    assert_eq!(summary, "{A=10.0/30.0/20.0, B=-5.5/-5.5/-5.5}");
}

#[test]
fn test_single_line_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_measurements(&dir, "measurements.txt", "X;0.0\n");

    let summary = pipeline::run(&path, &PipelineConfig::default_config()).unwrap();
    assert_eq!(summary, "{X=0.0/0.0/0.0}");
}

#[test]
fn test_malformed_value_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_measurements(&dir, "measurements.txt", "A;1.0\nB;not-a-number\n");

    let result = pipeline::run(&path, &PipelineConfig::default_config());
    assert!(matches!(result, Err(TallyError::Parse(_))));
}

#[test]
fn test_missing_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let result = pipeline::run(&path, &PipelineConfig::default_config());
    assert!(matches!(result, Err(TallyError::Io(_))));
}
