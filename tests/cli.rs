//! End-to-end tests for the entity-builder binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MANIFEST: &str = r#"
entity = "contact"

[[fields]]
kind = "email"
label = "Contact"

[[fields]]
name = "photo"
kind = "image"
label = "Photo"
focal_point = true
webp_support = true

[[fields]]
name = "related"
kind = "node_reference"
label = "Related"
bundle = "article"
required = true
"#;

fn entity_builder() -> Command {
    let mut cmd = Command::cargo_bin("entity-builder").unwrap();
    cmd.env_remove("ENTITY_BUILDER_MANIFEST").env("NO_COLOR", "1");
    cmd
}

fn manifest_in(dir: &TempDir, source: &str) -> std::path::PathBuf {
    let path = dir.path().join("fields.toml");
    std::fs::write(&path, source).unwrap();
    path
}

#[test]
fn build_prints_definitions() {
    let dir = TempDir::new().unwrap();
    let manifest = manifest_in(&dir, MANIFEST);

    let output = entity_builder()
        .arg("build")
        .arg(&manifest)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let fields = &value["fields"];

    assert_eq!(fields["contact"]["type"], "email");
    assert_eq!(fields["contact"]["required"], false);
    assert_eq!(fields["contact"]["settings"]["max_length"], 50);
    assert_eq!(fields["contact"]["display"]["form"]["type"], "email_default");

    assert_eq!(fields["photo"]["settings"]["file_extensions"], "png jpg jpeg webp");
    assert_eq!(fields["photo"]["display"]["form"]["type"], "image_focal_point");

    assert_eq!(fields["related"]["settings"]["target_type"], "node");
    assert_eq!(
        fields["related"]["settings"]["handler_settings"]["target_bundles"]["article"],
        "article"
    );
}

#[test]
fn build_reads_manifest_from_env() {
    let dir = TempDir::new().unwrap();
    let manifest = manifest_in(&dir, MANIFEST);

    entity_builder()
        .env("ENTITY_BUILDER_MANIFEST", &manifest)
        .args(["build", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\":1"));
}

#[test]
fn validate_fails_on_duplicate_names() {
    let dir = TempDir::new().unwrap();
    let manifest = manifest_in(
        &dir,
        r#"
[[fields]]
kind = "boolean"
label = "Featured"

[[fields]]
name = "featured"
kind = "textfield"
label = "Featured text"
"#,
    );

    entity_builder()
        .arg("validate")
        .arg(&manifest)
        .assert()
        .failure()
        .stdout(predicate::str::contains("used more than once"));
}

#[test]
fn validate_accepts_good_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = manifest_in(&dir, MANIFEST);

    entity_builder()
        .arg("validate")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid (3 fields)"));
}

#[test]
fn kinds_lists_storage_types() {
    entity_builder()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("media_image"))
        .stdout(predicate::str::contains("entity_reference_revisions"));
}

#[test]
fn missing_manifest_fails() {
    entity_builder()
        .args(["build", "/nonexistent/fields.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading manifest"));
}

#[test]
fn build_rejects_misspelled_flag() {
    let dir = TempDir::new().unwrap();
    let manifest = manifest_in(
        &dir,
        r#"
[[fields]]
kind = "textfield"
label = "Title"
requried = true
"#,
    );

    entity_builder()
        .arg("build")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key 'requried'"));
}
