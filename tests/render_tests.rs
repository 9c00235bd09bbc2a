//! Integration tests for the render command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{macrotag_cmd, write_config, SITE_CONFIG};

#[test]
fn test_render_with_template() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), SITE_CONFIG);

    macrotag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("test: test value a: attrA b: attrB")
        .assert()
        .success()
        .stdout("test: test value-attrA-attrB\n");
}

#[test]
fn test_render_absorbed_text_reaches_handler() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), SITE_CONFIG);

    macrotag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("test: test value a: attrA b: attrB c: attrC")
        .assert()
        .success()
        .stdout("test: test value-attrA-attrB c: attrC\n");
}

#[test]
fn test_render_uses_attribute_defaults() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), SITE_CONFIG);

    macrotag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("image: cat.png alt: A cat")
        .assert()
        .success()
        .stdout("<img src=\"cat.png\" alt=\"A cat\" width=\"100\">\n");
}

#[test]
fn test_render_without_handler() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), SITE_CONFIG);

    macrotag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("note: hello title: Hi")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "Invalid render handler for tag type: 'note'",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_render_undefined_type() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), SITE_CONFIG);

    macrotag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("invalid: test value")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Undefined tag type"));
}

#[test]
fn test_render_without_config() {
    let temp = TempDir::new().unwrap();

    // Point discovery at a file that does not exist so a stray macrotag.toml
    // above the temp directory cannot be picked up.
    macrotag_cmd()
        .current_dir(temp.path())
        .env("MACROTAG_CONFIG", temp.path().join("macrotag.toml"))
        .arg("render")
        .arg("test: value")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("MACROTAG_CONFIG"));
}
