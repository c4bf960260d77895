use clap::Parser;
use fixture_precision::cli::{validate_file_name, Args};

#[test]
fn accepts_plain_file_names() {
    for name in ["send.json", "recv_multi.json", "state-1.json"] {
        validate_file_name(name).expect("file name should be valid");
    }
}

#[test]
fn rejects_names_that_are_not_json_files() {
    for name in ["send", "send.txt", "send.json.bak", ".json", ".hidden.json"] {
        let err = validate_file_name(name).expect_err("file name should be rejected");
        assert!(
            err.to_string().contains(name),
            "unexpected error for '{name}': {err}"
        );
    }
}

#[test]
fn rejects_path_traversal_and_separators() {
    for name in ["", ".", "..", "../send.json", "a/send.json", "a\\b", " send.json"] {
        let err = validate_file_name(name).expect_err("file name should be rejected");
        assert!(
            err.to_string().contains("file name"),
            "unexpected error for '{name}': {err}"
        );
    }
}

#[test]
fn defaults_match_fixture_layout() {
    let args = Args::try_parse_from(["fixture-precision"]).expect("parse defaults");
    assert_eq!(args.root, std::path::PathBuf::from("unit"));
    assert_eq!(args.file_name, "send.json");
}

#[test]
fn flags_override_defaults() {
    let args = Args::try_parse_from([
        "fixture-precision",
        "--root",
        "test/unit",
        "--file-name",
        "recv.json",
    ])
    .expect("parse flags");
    assert_eq!(args.root, std::path::PathBuf::from("test/unit"));
    assert_eq!(args.file_name, "recv.json");
}
