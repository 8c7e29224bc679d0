//! Tests for source parsing

use super::parser::parse;
use super::*;
use crate::error::FiledepError;

const SHA: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

#[test]
fn test_parse_shorthand() {
    let d = parse("github:acme/lib/x.lua@main").unwrap();
    assert_eq!(d.provider, Provider::GitHub);
    assert_eq!(d.owner, "acme");
    assert_eq!(d.repo, "lib");
    assert_eq!(d.path_in_repo, "x.lua");
    assert_eq!(d.git_ref, "main");
    assert_eq!(d.filename(), "x.lua");
    assert_eq!(d.canonical_id(), "github:acme/lib/x.lua@main");
    assert_eq!(
        d.fetch_url,
        "https://raw.githubusercontent.com/acme/lib/main/x.lua"
    );
}

#[test]
fn test_shorthand_and_raw_url_are_equivalent() {
    let short = parse("github:o/r/p.txt@ref").unwrap();
    let raw = parse("https://raw.githubusercontent.com/o/r/ref/p.txt").unwrap();
    assert_eq!(short.canonical_id(), raw.canonical_id());
    assert_eq!(short.fetch_url, raw.fetch_url);
}

#[test]
fn test_all_forms_share_canonical_id() {
    let inputs = [
        "github:acme/lib/src/util/x.lua@v1.2",
        "https://raw.githubusercontent.com/acme/lib/v1.2/src/util/x.lua",
        "https://github.com/acme/lib/blob/v1.2/src/util/x.lua",
        "https://github.com/acme/lib/raw/v1.2/src/util/x.lua",
        "https://github.com/acme/lib/src/util/x.lua@v1.2",
        "  github:acme/lib/src/util/x.lua@v1.2  ",
    ];
    for input in inputs {
        let d = parse(input).unwrap();
        assert_eq!(
            d.canonical_id(),
            "github:acme/lib/src/util/x.lua@v1.2",
            "input: {input}"
        );
        assert_eq!(d.filename(), "x.lua");
    }
}

#[test]
fn test_canonicalization_is_idempotent() {
    let inputs = [
        "github:acme/lib/x.lua@main",
        "github:acme/lib/pkg@2/x.lua@main",
        "https://github.com/acme/lib/blob/abc1234/deep/path/x.lua",
        "https://raw.githubusercontent.com/acme/lib/main/x.lua",
        "https://github.com/acme/lib/x.lua@dev",
    ];
    for input in inputs {
        let first = parse(input).unwrap().canonical_id();
        let second = parse(&first).unwrap().canonical_id();
        assert_eq!(first, second, "input: {input}");
    }
}

#[test]
fn test_blob_url_rewritten_to_raw_content() {
    let d = parse("https://github.com/acme/lib/blob/main/src/x.lua").unwrap();
    assert_eq!(
        d.fetch_url,
        "https://raw.githubusercontent.com/acme/lib/main/src/x.lua"
    );
}

#[test]
fn test_raw_url_is_its_own_fetch_url() {
    let url = "http://raw.githubusercontent.com/acme/lib/main/x.lua";
    let d = parse(url).unwrap();
    assert_eq!(d.fetch_url, url);
}

#[test]
fn test_tree_url_error_mentions_tree() {
    let err = parse("https://github.com/acme/lib/tree/main/totally/a/file.lua").unwrap_err();
    assert!(matches!(
        err,
        FiledepError::SourceParseFailed {
            reason: ParseError::TreeUrl,
            ..
        }
    ));
    assert!(err.to_string().contains("tree"));
}

#[test]
fn test_web_url_without_ref_is_ambiguous() {
    let err = parse("https://github.com/acme/lib/src/x.lua").unwrap_err();
    assert!(matches!(
        err,
        FiledepError::SourceParseFailed {
            reason: ParseError::AmbiguousRef,
            ..
        }
    ));
    assert!(err.to_string().contains("ref required"));
}

#[test]
fn test_shorthand_error_messages() {
    let cases = [
        ("github:acme/lib/x.lua", "missing ref"),
        ("github:acme/lib/x.lua@", "empty ref"),
        ("github:acme/lib@main", "owner/repo/path required"),
        ("https://github.com/acme/lib/blob/main/dir/", "directory, not a file"),
        ("https://example.com/acme/lib/main/x.lua", "unsupported host"),
    ];
    for (input, expected) in cases {
        let err = parse(input).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "input {input}: expected '{expected}' in '{err}'"
        );
    }
}

#[test]
fn test_error_carries_input() {
    let err = parse(" github:acme/lib/x.lua ").unwrap_err();
    match err {
        FiledepError::SourceParseFailed { input, .. } => {
            assert_eq!(input, "github:acme/lib/x.lua");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_commit_ref_is_pinned() {
    let d = parse(&format!("github:acme/lib/x.lua@{SHA}")).unwrap();
    assert!(d.is_pinned());
    assert!(!parse("github:acme/lib/x.lua@main").unwrap().is_pinned());
}

#[test]
fn test_custom_hosts_build_fetch_url_on_raw_host() {
    let parser = SourceParser::new(HostConfig::new("git.corp.test", "raw.corp.test"));
    let d = parser
        .parse("https://git.corp.test/team/tools/blob/main/bin/run.sh")
        .unwrap();
    assert_eq!(d.fetch_url, "https://raw.corp.test/team/tools/main/bin/run.sh");
    assert_eq!(d.canonical_id(), "github:team/tools/bin/run.sh@main");
}

#[test]
fn test_encoded_url_paths_match_shorthand() {
    let cases = [
        (
            "github:acme/lib/docs/my file.lua@main",
            "https://github.com/acme/lib/blob/main/docs/my%20file.lua",
            "https://raw.githubusercontent.com/acme/lib/main/docs/my%20file.lua",
            "my file.lua",
        ),
        (
            "github:acme/lib/café.lua@main",
            "https://github.com/acme/lib/blob/main/caf%C3%A9.lua",
            "https://raw.githubusercontent.com/acme/lib/main/caf%C3%A9.lua",
            "café.lua",
        ),
    ];
    for (shorthand, blob, raw, filename) in cases {
        let short = parse(shorthand).unwrap();
        let blob = parse(blob).unwrap();
        let raw = parse(raw).unwrap();
        assert_eq!(short.canonical_id(), blob.canonical_id());
        assert_eq!(short.canonical_id(), raw.canonical_id());
        assert_eq!(short.filename(), filename);
        assert_eq!(blob.filename(), filename);
        assert_eq!(raw.filename(), filename);
        assert_eq!(short.fetch_url, blob.fetch_url);
        assert_eq!(short.fetch_url, raw.fetch_url);
    }

    let unescaped = parse("https://github.com/acme/lib/blob/main/docs/my file.lua").unwrap();
    assert_eq!(unescaped.canonical_id(), "github:acme/lib/docs/my file.lua@main");
}

#[test]
fn test_fetch_url_encodes_path_once() {
    let d = parse("github:acme/lib/docs/my file.lua@main").unwrap();
    assert_eq!(
        d.fetch_url,
        "https://raw.githubusercontent.com/acme/lib/main/docs/my%20file.lua"
    );
    let pinned = d.pinned_to(SHA);
    assert_eq!(
        pinned.fetch_url,
        format!("https://raw.githubusercontent.com/acme/lib/{SHA}/docs/my%20file.lua")
    );
}

#[test]
fn test_commit_lookup_uses_decoded_path() {
    let d = parse("https://github.com/acme/lib/blob/main/my%20file.lua").unwrap();
    let history = crate::resolver::GitHubHistory::new(&crate::config::Settings::default()).unwrap();
    let url = history
        .commits_url(&d.owner, &d.repo, &d.path_in_repo, &d.git_ref)
        .unwrap();
    assert!(url.as_str().contains("path=my+file.lua"), "url: {url}");
    assert!(!url.as_str().contains("%2520"), "url: {url}");
}

#[test]
fn test_plain_http_raw_host() {
    let parser = SourceParser::new(HostConfig::new("github.com", "http://localhost:8080"));
    let d = parser.parse("github:acme/lib/x.lua@main").unwrap();
    assert_eq!(d.fetch_url, "http://localhost:8080/acme/lib/main/x.lua");

    let raw = parser.parse("http://localhost:8080/acme/lib/main/x.lua").unwrap();
    assert_eq!(raw.canonical_id(), d.canonical_id());
    assert_eq!(raw.fetch_url, d.fetch_url);
}

#[test]
fn test_raw_host_defaults_to_https() {
    let hosts = HostConfig::new("github.com", "localhost:8080");
    assert_eq!(hosts.raw_scheme, "https");
    assert_eq!(hosts.raw_host, "localhost:8080");
    assert_eq!(HostConfig::new("github.com", "HTTPS://Raw.Test/").raw_host, "raw.test");
}
