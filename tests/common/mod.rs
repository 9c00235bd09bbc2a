#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const SITE_CONFIG: &str = r#"
[types.test]
attributes = ["a", "b"]
template = "test: {value}-{a}-{b}"

[types.image]
attributes = ["alt", "width"]
template = '<img src="{value}" alt="{alt}" width="{width}">'

[types.image.defaults]
width = "100"

[types.note]
attributes = ["title"]

[options]
base_url = "https://example.com"
"#;

pub fn macrotag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("macrotag").unwrap();
    cmd.env_remove("MACROTAG_CONFIG");
    cmd.env_remove("MACROTAG_LOG");
    cmd
}

/// Write `contents` as macrotag.toml in `dir`, returning its path
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("macrotag.toml");
    fs::write(&path, contents).unwrap();
    path
}
