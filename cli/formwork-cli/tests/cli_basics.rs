// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, and the offline render path

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn formwork_cmd() -> Command {
    Command::cargo_bin("formwork").expect("Failed to find formwork binary")
}

fn declaration_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_formwork_version() {
    formwork_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("formwork"));
}

#[test]
fn test_formwork_help() {
    formwork_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("push"));
}

#[test]
fn test_render_declaration_file() {
    let file = declaration_file(
        r#"{
            "Description": "Ingest pipeline",
            "Resources": {
                "IngestQueue": {
                    "Type": "AWS::SQS::Queue",
                    "Properties": { "QueueName": "ingest" }
                }
            }
        }"#,
    );

    formwork_cmd()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"AWSTemplateFormatVersion\": \"2010-09-09\""))
        .stdout(predicate::str::contains("\"IngestQueue\""))
        .stdout(predicate::str::contains("\"Ingest pipeline\""));
}

#[test]
fn test_render_is_deterministic_across_runs() {
    let file = declaration_file(
        r#"{
            "Resources": {
                "Zeta": { "Type": "AWS::SNS::Topic" },
                "Alpha": { "Type": "AWS::SQS::Queue" }
            }
        }"#,
    );

    let first = formwork_cmd()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = formwork_cmd()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

#[test]
fn test_render_missing_file_fails() {
    formwork_cmd()
        .arg("render")
        .arg("no-such-file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_render_rejects_invalid_logical_id() {
    let file = declaration_file(
        r#"{
            "Resources": {
                "bad-id": { "Type": "AWS::SQS::Queue" }
            }
        }"#,
    );

    formwork_cmd()
        .arg("render")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid logical ID"));
}

#[test]
fn test_push_requires_a_bucket() {
    let file = declaration_file(r#"{ "Resources": {} }"#);

    formwork_cmd()
        .arg("push")
        .arg(file.path())
        .env_remove("FORMWORK_BUCKET")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bucket"));
}

#[test]
fn test_delete_requires_a_key() {
    formwork_cmd()
        .args(["delete", "--bucket", "infra-templates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--key"));
}
