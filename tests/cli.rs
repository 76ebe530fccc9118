use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ennet-cli-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn expands_positional_abbreviations() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("ul>li*2").arg("a{hi}");

    cmd.assert()
        .success()
        .stdout("<ul><li /><li /></ul>\n<a>hi</a>\n")
        .stderr("");
}

#[test]
fn expands_stdin_lines() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.write_stdin("a+b\n\n  p.x  \n");

    cmd.assert()
        .success()
        .stdout("<a /><b />\n<p class=\"x\" />\n");
}

#[test]
fn treeviz_format() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("--format").arg("treeviz").arg("p>span");

    cmd.assert()
        .success()
        .stdout("└─ Element: p\n  └─ Element: span\n");
}

#[test]
fn json_format() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("-f").arg("json").arg("{hi}");

    cmd.assert().success().stdout(
        predicate::str::contains(r#""kind": "root""#)
            .and(predicate::str::contains(r#""kind": "text""#))
            .and(predicate::str::contains(r#""name": "hi""#)),
    );
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("markup")
            .and(predicate::str::contains("treeviz"))
            .and(predicate::str::contains("yaml")),
    );
}

#[test]
fn parse_error_exits_with_failure() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("a#");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("id name is required"));
}

#[test]
fn stops_at_first_error() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("a").arg("+b").arg("c");

    cmd.assert()
        .failure()
        .stdout("<a />\n")
        .stderr(predicate::str::contains("unexpected + at 1"));
}

#[test]
fn unknown_format_is_reported() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("--format").arg("html").arg("a");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown format 'html' (available: json, markup, treeviz, yaml)",
        ));
}

#[test]
fn config_file_controls_output() {
    let path = temp_config(
        "no-newline",
        "[output]\nformat = \"markup\"\ntrailing_newline = false\n",
    );
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("--config").arg(&path).arg("a").arg("b");

    let assert = cmd.assert();
    std::fs::remove_file(&path).ok();
    assert.success().stdout("<a /><b />");
}

#[test]
fn format_flag_overrides_config_file() {
    let path = temp_config("treeviz", "[output]\nformat = \"json\"\n");
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("-c").arg(&path).arg("-f").arg("markup").arg("a");

    let assert = cmd.assert();
    std::fs::remove_file(&path).ok();
    assert.success().stdout("<a />\n");
}

#[test]
fn missing_config_file_is_an_error() {
    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.arg("--config").arg("/nonexistent/ennet.toml").arg("a");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = std::env::temp_dir().join(format!("ennet-cli-{}-local", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    std::fs::write(dir.join("ennet.toml"), "[output]\ntrailing_newline = false\n")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.current_dir(&dir).arg("a").arg("b");

    let assert = cmd.assert();
    std::fs::remove_dir_all(&dir).ok();
    assert.success().stdout("<a /><b />");
}

#[test]
fn config_flag_overrides_local_config_file() {
    let dir = std::env::temp_dir().join(format!("ennet-cli-{}-layered", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    std::fs::write(dir.join("ennet.toml"), "[output]\nformat = \"json\"\n").expect("write config");
    let path = temp_config("layered", "[output]\nformat = \"treeviz\"\n");

    let mut cmd = cargo_bin_cmd!("ennet");
    cmd.current_dir(&dir).arg("--config").arg(&path).arg("p");

    let assert = cmd.assert();
    std::fs::remove_dir_all(&dir).ok();
    std::fs::remove_file(&path).ok();
    assert.success().stdout("└─ Element: p\n");
}
