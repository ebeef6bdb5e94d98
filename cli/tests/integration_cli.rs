use search_cli::{run, OutputFormat, RunOptions};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, Cursor};
use tempfile::tempdir;

const ANIMALS: &str = "a\n3\na cat sat\na dog ran\ncat and dog\ncat -dog\n";

fn run_to_string(input: &str, opts: &RunOptions) -> String {
    let mut out = Vec::new();
    run(Cursor::new(input), &mut out, opts).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_results_in_text_format() {
    let out = run_to_string(ANIMALS, &RunOptions::default());
    assert_eq!(out, "{ document_id = 0, relevance = 0.202733 }\n");
}

#[test]
fn prints_results_as_json_lines() {
    let opts = RunOptions { format: OutputFormat::Json, ..RunOptions::default() };
    let out = run_to_string("\n3\ncat\ncat dog\nfish\ncat\n", &opts);
    let lines: Vec<Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"].as_u64(), Some(0));
    assert_eq!(lines[1]["id"].as_u64(), Some(1));
    assert!(lines[0]["relevance"].as_f64().unwrap() > lines[1]["relevance"].as_f64().unwrap());
}

#[test]
fn caps_output_at_max_results() {
    let mut input = String::from("\n10\n");
    for i in 0..10 {
        input.push_str(&format!("word{i} shared\n"));
    }
    input.push_str("shared word3\n");
    assert_eq!(run_to_string(&input, &RunOptions::default()).lines().count(), 5);
    let opts = RunOptions { max_results: 2, ..RunOptions::default() };
    let out = run_to_string(&input, &opts);
    assert_eq!(out.lines().count(), 2);
    assert!(out.starts_with("{ document_id = 3,"));
}

#[test]
fn unknown_query_prints_nothing() {
    assert_eq!(run_to_string("a\n1\ncat\nzebra\n", &RunOptions::default()), "");
}

#[test]
fn malformed_query_fails() {
    let mut out = Vec::new();
    let err = run(Cursor::new("a\n1\ncat\ncat -\n"), &mut out, &RunOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("malformed query token"));
    assert!(out.is_empty());
}

#[test]
fn reads_corpus_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(&path, ANIMALS).unwrap();
    let mut out = Vec::new();
    run(BufReader::new(File::open(&path).unwrap()), &mut out, &RunOptions::default()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "{ document_id = 0, relevance = 0.202733 }\n");
}
