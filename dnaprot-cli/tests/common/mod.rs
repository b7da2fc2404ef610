#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Flat-file record holding `CCAGGAGGTTTATGAAAGGAGGAAA` once filtered
pub const RECORD: &str = concat!(
    "ID   TEST; SV 1; linear; genomic DNA\n",
    "XX\n",
    " SQ   Sequence 25 BP;\n",
    "     ccaggaggtt tatgaaaggag        21\n",
    "     gaaa                          25\n",
    "//\n",
);

/// Writes a fixture to a temporary file that lives as long as the handle
pub fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

/// Builds a `dnaprot` invocation with logging left at its CLI default
pub fn dnaprot(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dnaprot").expect("dnaprot binary");
    cmd.env_remove("RUST_LOG").args(args);
    cmd
}

/// Runs `dnaprot`, asserts success and returns stdout
pub fn run_dnaprot(args: &[&str]) -> String {
    let output = dnaprot(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

/// Runs `dnaprot`, asserts failure and returns stderr
pub fn run_dnaprot_failure(args: &[&str]) -> String {
    let output = dnaprot(args).assert().failure().get_output().stderr.clone();
    String::from_utf8(output).expect("utf-8 stderr")
}
