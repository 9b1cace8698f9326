use dddgen::cli::Args;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("dddgen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["go", "shopsvc"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.language, "go");
    assert_eq!(parsed.project_name, "shopsvc");
    assert_eq!(parsed.config_file, None);
    assert!(parsed.ignored.is_empty());
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert!(!parsed.verbose);
}

#[test]
fn test_config_file_arg() {
    let args = make_args(&["Python", "shopsvc", "./dddgen.yml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.language, "Python");
    assert_eq!(parsed.config_file, Some(PathBuf::from("./dddgen.yml")));
}

#[test]
fn test_all_flags() {
    let args = make_args(&["--verbose", "--output-dir", "/tmp/out", "go", "shopsvc"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.output_dir, PathBuf::from("/tmp/out"));
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "-o", "out", "go", "shopsvc"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.output_dir, PathBuf::from("out"));
}

#[test]
fn test_language_is_not_validated_by_parser() {
    let args = make_args(&["ruby", "shopsvc"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert_eq!(parsed.language, "ruby");
}

#[test]
fn test_missing_args() {
    let args = make_args(&["go"]);
    assert!(Args::try_parse_from(args).is_err());
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_extra_args_are_ignored() {
    let args = make_args(&["go", "shopsvc", "config.yml", "extra", "more"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.language, "go");
    assert_eq!(parsed.project_name, "shopsvc");
    assert_eq!(parsed.config_file, Some(PathBuf::from("config.yml")));
    assert_eq!(parsed.ignored, vec!["extra", "more"]);
}
