use pretty_assertions::assert_eq;
use sentiscope::analysis::{run_batch, Aggregator, AnalysisError, Pipeline};
use sentiscope::config::{AppConfig, LoadOptions, SchemaPreset, SourceConfig};
use sentiscope::data::Dataset;
use sentiscope::Sentiment;
use std::path::{Path, PathBuf};

fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn english_aggregator() -> Aggregator {
    Aggregator::new(Pipeline::english())
}

#[test]
fn batch_reports_each_source_and_the_merge() {
    let dir = tempfile::tempdir().unwrap();
    let preset = write_file(
        dir.path(),
        "sentiment140.csv",
        "0,1,Mon Apr 06,NO_QUERY,alice,I hate rainy mondays\n\
         4,2,Mon Apr 06,NO_QUERY,bob,What a great game @carol\n",
    );
    let headered = write_file(
        dir.path(),
        "entity.csv",
        "id,text\n1,I love sunny days! http://x.co @bob\n2,the meeting is at noon\n",
    );

    let sources = vec![
        SourceConfig::with_preset(&preset, SchemaPreset::Sentiment140),
        SourceConfig::with_header(&headered),
    ];
    let mut stages = Vec::new();
    let report = run_batch(
        &english_aggregator(),
        &sources,
        &LoadOptions::default(),
        |progress, status| stages.push((progress, status.to_string())),
    );

    assert!(report.failures.is_empty());
    assert_eq!(report.sources.len(), 2);
    assert_eq!(report.sources[0].name, "sentiment140.csv");

    let first = report.sources[0].summary.as_ref().unwrap();
    assert_eq!((first.positive, first.neutral, first.negative), (1, 0, 1));

    let merged = report.merged_summary.as_ref().unwrap();
    assert_eq!(merged.total, 4);
    assert_eq!((merged.positive, merged.neutral, merged.negative), (2, 1, 1));
    assert!((merged.positive_pct + merged.neutral_pct + merged.negative_pct - 100.0).abs() < 1e-9);

    let origins: Vec<&str> = report.merged.iter().map(|r| r.origin()).collect();
    assert_eq!(
        origins,
        vec!["sentiment140.csv", "sentiment140.csv", "entity.csv", "entity.csv"]
    );
    let sunny = &report.merged.records()[2];
    assert_eq!(sunny.clean(), Some("love sunny days"));
    assert_eq!(sunny.label(), Some(Sentiment::Positive));

    assert_eq!(report.positive_after_reduction(), Some(50.0));
    assert_eq!(stages.last().map(|s| s.0), Some(100.0));
}

#[test]
fn unreadable_source_is_reported_and_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(dir.path(), "good.csv", "text\nhappy happy\n");
    let sources = vec![
        SourceConfig::with_header(dir.path().join("missing.csv")),
        SourceConfig::with_header(&good),
    ];

    let report = run_batch(&english_aggregator(), &sources, &LoadOptions::default(), |_, _| {});

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "missing.csv");
    assert_eq!(report.sources.len(), 1);
    assert_eq!(report.merged.len(), 1);
}

#[test]
fn row_limit_applies_per_source() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = String::from("text\n");
    for i in 0..25 {
        body.push_str(&format!("tweet number {}\n", i));
    }
    let path = write_file(dir.path(), "many.csv", &body);
    let sources = vec![SourceConfig::with_header(&path), SourceConfig::with_header(&path)];

    let limited = run_batch(&english_aggregator(), &sources, &LoadOptions::default(), |_, _| {});
    assert_eq!(limited.merged.len(), 20);

    let options = LoadOptions {
        max_rows: None,
        skip_malformed: false,
    };
    let full = run_batch(&english_aggregator(), &sources, &options, |_, _| {});
    assert_eq!(full.merged.len(), 50);
}

#[test]
fn empty_input_yields_empty_dataset_error() {
    let aggregator = english_aggregator();
    let mut empty = Dataset::new("empty", vec!["text".to_string()]);
    assert_eq!(aggregator.process(&mut empty), Err(AnalysisError::EmptyDataset));

    let report = run_batch(&aggregator, &[], &LoadOptions::default(), |_, _| {});
    assert_eq!(report.merged_summary, Err(AnalysisError::EmptyDataset));
    assert_eq!(report.positive_after_reduction(), None);
    assert!(report.polarity.is_none());
}

#[test]
fn config_file_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon = write_file(dir.path(), "lexicon.json", r#"{"meeting": -0.5}"#);
    let config_json = format!(
        r#"{{ "extra_stopwords": ["noon"], "lexicon_path": {:?} }}"#,
        lexicon.display().to_string()
    );
    let config = AppConfig::from_json_str(&config_json).unwrap();
    let pipeline = config.build_pipeline().unwrap();

    let analysis = pipeline.analyze("The meeting is at noon");
    assert_eq!(analysis.clean, "meeting");
    assert_eq!(analysis.polarity.label, Sentiment::Negative);

    let neutral = pipeline.analyze("I love sunny days");
    assert_eq!(neutral.polarity.label, Sentiment::Neutral);
}
