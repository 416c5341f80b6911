use std::fs;
use std::path::{Path, PathBuf};

use moctab_format::DumpStyle;

use super::CommandError;
use super::check::{self, CheckArgs};
use super::dump::{self, DumpArgs};
use super::generate::{self, GenerateArgs};

const COUNTER: &str = r#"{
    "qualified_name": "Counter",
    "base_name": "QObject",
    "signals": [{ "name": "changed" }],
    "properties": [
        { "name": "value", "type": "int", "read": "value", "notify": 0 }
    ]
}"#;

const TIMER: &str = r#"{
    "qualified_name": "Timer",
    "slots": [{ "name": "start" }]
}"#;

fn write(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

fn generate_args(inputs: Vec<PathBuf>) -> GenerateArgs {
    GenerateArgs {
        inputs,
        output: None,
        config: None,
        comments: None,
        wrap: None,
    }
}

#[test]
fn inputs_are_concatenated_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let counter = write(dir.path(), "counter.json", COUNTER);
    let timer = write(dir.path(), "timer.json", TIMER);

    let source = generate::render(&generate_args(vec![timer, counter])).unwrap();

    let timer_at = source.find("qt_meta_data_Timer[]").unwrap();
    let counter_at = source.find("qt_meta_data_Counter[]").unwrap();
    assert!(timer_at < counter_at);
}

#[test]
fn no_comments_flag_strips_row_comments() {
    let dir = tempfile::tempdir().unwrap();
    let counter = write(dir.path(), "counter.json", COUNTER);

    let mut args = generate_args(vec![counter]);
    args.comments = Some(false);
    let source = generate::render(&args).unwrap();

    assert!(!source.contains("// revision"));
    assert!(!source.contains("// eod"));
    assert!(source.contains("// SIGNAL 0"));
}

#[test]
fn run_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let counter = write(dir.path(), "counter.json", COUNTER);
    let output = dir.path().join("moc_counter.cpp");

    let mut args = generate_args(vec![counter]);
    args.output = Some(output.clone());
    generate::run(args).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("\nstatic const uint qt_meta_data_Counter[] = {\n"));
    assert!(written.contains("const QMetaObject Counter::staticMetaObject = {"));
}

#[test]
fn first_bad_input_stops_generation() {
    let dir = tempfile::tempdir().unwrap();
    let counter = write(dir.path(), "counter.json", COUNTER);
    let bad = write(dir.path(), "bad.json", r#"{ "qualified_name": "Bad", "extra": 1 }"#);

    let err = generate::render(&generate_args(vec![counter, bad])).unwrap_err();

    assert!(matches!(err, CommandError::Description { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn dump_lists_decoded_sections() {
    let dir = tempfile::tempdir().unwrap();
    let counter = write(dir.path(), "counter.json", COUNTER);

    let listing = dump::render(&DumpArgs {
        input: counter,
        style: DumpStyle::Plain,
    })
    .unwrap();

    assert!(listing.contains("[header]"));
    assert!(listing.contains("[methods]"));
    assert!(listing.contains("[properties]"));
    assert!(listing.contains("changed"));
    assert!(!listing.contains("\x1b["));
}

#[test]
fn check_accepts_valid_and_rejects_dangling_notify() {
    let dir = tempfile::tempdir().unwrap();
    let counter = write(dir.path(), "counter.json", COUNTER);
    let dangling = write(
        dir.path(),
        "dangling.json",
        r#"{
            "qualified_name": "D",
            "properties": [{ "name": "x", "type": "int", "notify": 3 }]
        }"#,
    );

    assert!(
        check::run(CheckArgs {
            inputs: vec![counter.clone()],
        })
        .is_ok()
    );

    let err = check::run(CheckArgs {
        inputs: vec![counter, dangling],
    })
    .unwrap_err();
    assert!(err.to_string().contains("notifies through method 3"));
}
