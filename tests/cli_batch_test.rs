//! End-to-end tests for the batch command line checker.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const DICTIONARY: &str = "\
the\t1
is\t8
bad\t900
spelling\t7302
spewing\t41780
ricksha\t40000
rickshaw\t30000
";

const TEXT: &str = "The speling is bad\nthe ricsha is bda, xqzvbw\n";

struct Fixture {
    dir: TempDir,
    dictionary: PathBuf,
    text: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let dictionary = dir.path().join("dictionary.tsv");
        let text = dir.path().join("input.txt");
        fs::write(&dictionary, DICTIONARY).unwrap();
        fs::write(&text, TEXT).unwrap();
        Fixture {
            dir,
            dictionary,
            text,
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn spellbound<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_spellbound"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_correct_command() {
    let fixture = Fixture::new();
    let output = spellbound(["correct", arg(&fixture.dictionary), arg(&fixture.text)]);

    assert!(output.status.success());
    // "bda," carries punctuation and is not checked
    assert_eq!(
        stdout(&output),
        "speling\tspelling,spewing\nricsha\tricksha\nxqzvbw\t\n"
    );
}

#[test]
fn test_reads_standard_input_without_files() {
    let fixture = Fixture::new();
    let mut child = Command::new(env!("CARGO_BIN_EXE_spellbound"))
        .args(["correct", arg(&fixture.dictionary)])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"the speling spelling\nricsha the\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "speling\tspelling,spewing\nricsha\tricksha\n"
    );
}

#[test]
fn test_suggest_command_with_index_file() {
    let fixture = Fixture::new();
    let index = fixture.path("ngrams.tsv");
    let output = spellbound([
        "suggest",
        arg(&fixture.dictionary),
        arg(&fixture.text),
        "--ngram-index",
        arg(&index),
    ]);

    assert!(output.status.success());
    assert!(index.exists());
    let stdout = stdout(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines.contains(&"ricsha\tricksha,rickshaw"), "{stdout}");
    assert!(lines.contains(&"xqzvbw\t"), "{stdout}");
    assert!(lines.iter().all(|line| !line.starts_with("the\t")));
}

#[test]
fn test_json_format() {
    let fixture = Fixture::new();
    let output = spellbound([
        "--format",
        "json",
        "correct",
        arg(&fixture.dictionary),
        arg(&fixture.text),
        "--sequential",
    ]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["word"], "speling");
    assert_eq!(first["suggestions"][0], "spelling");
}

#[test]
fn test_build_index_command() {
    let fixture = Fixture::new();
    let index = fixture.path("bigrams.tsv");
    let output = spellbound([
        "build-index",
        arg(&fixture.dictionary),
        arg(&index),
        "--ngram-length",
        "2",
    ]);

    assert!(output.status.success());
    let contents = fs::read_to_string(&index).unwrap();
    assert!(contents.lines().all(|line| line.split('\t').next().unwrap().len() == 2));
    assert!(contents.contains("ck\trickshaw,ricksha\n"));
}

#[test]
fn test_missing_dictionary_fails() {
    let fixture = Fixture::new();
    let missing = fixture.path("missing.tsv");
    let output = spellbound(["correct", arg(&missing), arg(&fixture.text)]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: "), "{stderr}");
}

#[test]
fn test_unknown_metric_fails() {
    let fixture = Fixture::new();
    let output = spellbound([
        "suggest",
        arg(&fixture.dictionary),
        arg(&fixture.text),
        "--metric",
        "soundex",
    ]);

    assert!(!output.status.success());
}
