//! Integration tests for Kifu Core

use kifu_core::{
    BuildDescriptor, BuildProfile, CopyRule, Error, OutputSpec, ShellConfig, WindowConfig,
};
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Window Configuration Tests
// =============================================================================

#[test]
fn test_window_config_defaults() {
    let config = WindowConfig::default();
    assert_eq!(config.width, 900);
    assert_eq!(config.height, 900);
    assert!(config.host_api_access);
}

#[test]
fn test_window_inner_size() {
    let config = WindowConfig::default();
    assert_eq!(config.inner_size(), (900.0, 900.0));
}

#[test]
fn test_shell_config_defaults() {
    let config = ShellConfig::default();
    assert_eq!(config.artifact, PathBuf::from("index.html"));
    assert!(config.devtools);
    assert_eq!(config.title(), "Kifu");
}

// =============================================================================
// Descriptor Parsing Tests
// =============================================================================

fn write_descriptor(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("bundle.toml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_descriptor_load_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_descriptor(
        dir.path(),
        r#"
entry = "www/bootstrap.js"

[output]
dir = "dist"
filename = "bootstrap.js"
"#,
    );

    let descriptor = BuildDescriptor::load(&path).unwrap();
    assert_eq!(descriptor.profile, BuildProfile::Development);
    assert!(descriptor.copy.is_empty());
}

#[test]
fn test_descriptor_resolves_against_own_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_descriptor(
        dir.path(),
        r#"
entry = "www/bootstrap.js"
profile = "release"

[output]
dir = "dist"
filename = "bootstrap.js"

[[copy]]
from = "www/index.html"
"#,
    );

    let descriptor = BuildDescriptor::load(&path).unwrap();
    assert_eq!(descriptor.entry, dir.path().join("www/bootstrap.js"));
    assert_eq!(descriptor.output.dir, dir.path().join("dist"));
    assert_eq!(descriptor.copy[0].from, dir.path().join("www/index.html"));
    assert_eq!(descriptor.profile, BuildProfile::Release);
}

#[test]
fn test_descriptor_parse_error_names_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_descriptor(dir.path(), "entry = ");

    let err = BuildDescriptor::load(&path).unwrap_err();
    assert!(matches!(err, Error::DescriptorParse { .. }));
    assert!(err.to_string().contains("bundle.toml"));
}

#[test]
fn test_descriptor_missing_file() {
    let err = BuildDescriptor::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, Error::DescriptorRead { .. }));
    assert!(err.is_missing_input());
}

// =============================================================================
// Validation Tests
// =============================================================================

fn descriptor_in(dir: &Path) -> BuildDescriptor {
    BuildDescriptor {
        entry: dir.join("www/bootstrap.js"),
        output: OutputSpec {
            dir: dir.join("dist"),
            filename: "bootstrap.js".to_string(),
        },
        profile: BuildProfile::Development,
        copy: vec![CopyRule {
            from: dir.join("www/index.html"),
        }],
    }
}

fn seed_sources(dir: &Path) {
    fs::create_dir_all(dir.join("www")).unwrap();
    fs::write(dir.join("www/bootstrap.js"), "console.log(\"kifu\");\n").unwrap();
    fs::write(dir.join("www/index.html"), "<!DOCTYPE html>\n").unwrap();
}

#[test]
fn test_validate_accepts_complete_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    assert!(descriptor_in(dir.path()).validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_entry() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let mut descriptor = descriptor_in(dir.path());
    descriptor.entry = PathBuf::new();

    let err = descriptor.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidDescriptor(_)));
}

#[test]
fn test_validate_rejects_empty_output_filename() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let mut descriptor = descriptor_in(dir.path());
    descriptor.output.filename = String::new();

    assert!(matches!(
        descriptor.validate().unwrap_err(),
        Error::InvalidDescriptor(_)
    ));
}

#[test]
fn test_validate_rejects_missing_copy_source() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    fs::remove_file(dir.path().join("www/index.html")).unwrap();

    let err = descriptor_in(dir.path()).validate().unwrap_err();
    match err {
        Error::MissingSource { path } => assert!(path.ends_with("www/index.html")),
        other => panic!("expected MissingSource, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_missing_entry() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    fs::remove_file(dir.path().join("www/bootstrap.js")).unwrap();

    let err = descriptor_in(dir.path()).validate().unwrap_err();
    assert!(matches!(err, Error::MissingSource { .. }));
}

// =============================================================================
// Staging Tests
// =============================================================================

#[test]
fn test_stage_populates_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let descriptor = descriptor_in(dir.path());

    let report = descriptor.stage().unwrap();

    let staged_js = dir.path().join("dist/bootstrap.js");
    let staged_html = dir.path().join("dist/index.html");
    assert!(staged_js.is_file());
    assert!(staged_html.is_file());
    assert_eq!(
        fs::read_to_string(&staged_js).unwrap(),
        "console.log(\"kifu\");\n"
    );
    assert_eq!(fs::read_to_string(&staged_html).unwrap(), "<!DOCTYPE html>\n");

    assert_eq!(report.artifacts.len(), 2);
    assert_eq!(report.output_dir, dir.path().join("dist"));
    assert_eq!(report.total_bytes(), 21 + 16);
}

#[test]
fn test_stage_entry_lands_at_bundle_path() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let descriptor = descriptor_in(dir.path());

    let report = descriptor.stage().unwrap();
    assert_eq!(report.artifacts[0].dest, descriptor.bundle_path());
}

#[test]
fn test_restage_overwrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let descriptor = descriptor_in(dir.path());

    descriptor.stage().unwrap();
    fs::write(dir.path().join("www/index.html"), "<html>v2</html>\n").unwrap();
    descriptor.stage().unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("dist/index.html")).unwrap(),
        "<html>v2</html>\n"
    );
}

#[test]
fn test_stage_without_copy_rules() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let mut descriptor = descriptor_in(dir.path());
    descriptor.copy.clear();

    let report = descriptor.stage().unwrap();
    assert_eq!(report.artifacts.len(), 1);
    assert!(dir.path().join("dist/bootstrap.js").is_file());
    assert!(!dir.path().join("dist/index.html").exists());
}

#[test]
fn test_stage_fails_on_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    fs::remove_file(dir.path().join("www/index.html")).unwrap();

    let err = descriptor_in(dir.path()).stage().unwrap_err();
    assert!(matches!(err, Error::MissingSource { .. }));
    // Validation runs before anything is copied
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn test_clean_removes_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    seed_sources(dir.path());
    let descriptor = descriptor_in(dir.path());

    descriptor.stage().unwrap();
    assert!(dir.path().join("dist").exists());

    descriptor.clean().unwrap();
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn test_clean_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = descriptor_in(dir.path());
    assert!(descriptor.clean().is_ok());
    assert!(descriptor.clean().is_ok());
}

// =============================================================================
// Artifact Path Tests
// =============================================================================

#[test]
fn test_page_path_names_staged_html() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = descriptor_in(dir.path());
    assert_eq!(
        descriptor.page_path(),
        Some(dir.path().join("dist/index.html"))
    );
}

#[test]
fn test_page_path_without_html_copy_rule() {
    let dir = tempfile::tempdir().unwrap();
    let mut descriptor = descriptor_in(dir.path());
    descriptor.copy = vec![CopyRule {
        from: dir.path().join("www/style.css"),
    }];
    assert_eq!(descriptor.page_path(), None);
}

// =============================================================================
// Repository Descriptor Tests
// =============================================================================

#[test]
fn test_repository_descriptor_is_valid() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let descriptor = BuildDescriptor::load(root.join("bundle.toml")).unwrap();

    descriptor.validate().unwrap();
    assert_eq!(descriptor.profile, BuildProfile::Development);
    assert!(descriptor.bundle_path().ends_with("dist/bootstrap.js"));
    assert!(descriptor
        .page_path()
        .map(|p| p.ends_with("dist/index.html"))
        .unwrap_or(false));
}
