use super::*;
use std::path::Path;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["protoclass", "in.json"]).expect("default args should parse");

    assert_eq!(args.input, PathBuf::from("in.json"));
    assert!(args.output.is_none());
    assert!(args.config.is_none());
    assert!(!args.pretty);
    assert!(!args.no_static_merge);
    assert!(!args.dump_tree);
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "protoclass",
        "-o",
        "out.json",
        "--config",
        "protoclass.json",
        "--pretty",
        "--no-static-merge",
        "--dump-tree",
        "in.json",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.output.as_deref(), Some(Path::new("out.json")));
    assert_eq!(args.config.as_deref(), Some(Path::new("protoclass.json")));
    assert!(args.pretty);
    assert!(args.no_static_merge);
    assert!(args.dump_tree);
    assert_eq!(args.input, PathBuf::from("in.json"));
}

#[test]
fn requires_input() {
    assert!(CliArgs::try_parse_from(["protoclass"]).is_err());
}
