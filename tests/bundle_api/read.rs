//! Bundle Read Tests
//!
//! Tests for reading bundles back through the facade, including archives
//! produced by other tools.

use crate::*;
use std::io::{Cursor, Write};
use wasmbundle::{Error, ReadOptions};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn write_raw_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(contents).unwrap();
    }
    fs::write(path, zip.finish().unwrap().into_inner()).unwrap();
}

// =============================================================================
// ROUND TRIP
// =============================================================================

#[test]
fn test_roundtrip_typed_directive() {
    init_tracing();
    let sources = create_sources();
    let bundle = write_and_read(&sources);

    assert_eq!(bundle.directive(), &app_directive());
    assert_eq!(bundle.path(), sources.target().as_path());

    let mut names: Vec<&str> = bundle.modules().iter().map(|m| m.name()).collect();
    names.sort();
    assert_eq!(names, vec!["fetch.wasm", "hello.wasm"]);

    let statics: Vec<&str> = bundle.static_files().collect();
    assert_eq!(statics, vec!["index.html", "site.css"]);
}

#[test]
fn test_handlers_resolve_to_modules() {
    let sources = create_sources();
    let bundle = write_and_read(&sources);

    for handler in &bundle.directive().handlers {
        let module = bundle
            .module(&handler.module)
            .unwrap_or_else(|| panic!("no module for handler {}", handler.resource));
        assert_eq!(module.stem(), handler.module);
        assert!(module.is_resolved());
    }

    assert_eq!(&*bundle.module("hello.wasm").unwrap().module_bytes().unwrap(), HELLO_WASM);
    assert_eq!(&*bundle.module("fetch").unwrap().module_bytes().unwrap(), FETCH_WASM);
    assert!(bundle.module("missing").is_none());
}

#[test]
fn test_into_modules_keeps_bytes() {
    let sources = create_sources();
    let modules = write_and_read(&sources).into_modules();
    fs::remove_file(sources.target()).unwrap();

    assert_eq!(modules.len(), 2);
    for module in &modules {
        assert!(!module.module_bytes().unwrap().is_empty());
    }
}

// =============================================================================
// DIRECTIVE REQUIRED
// =============================================================================

#[test]
fn test_archive_without_directive_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nodirective.wasm.zip");
    write_raw_zip(
        &path,
        &[("hello.wasm", HELLO_WASM), ("static/index.html", b"<p></p>")],
    );

    let result: Result<Bundle<AppDirective>> = read_bundle(&path);
    assert!(matches!(result, Err(Error::DirectiveNotFound { .. })));
}

#[test]
fn test_directive_alias_is_not_the_directive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alias.wasm.zip");
    write_raw_zip(
        &path,
        &[("Directive.yml", b"identifier: com.example.alias\n" as &[u8])],
    );

    let result: Result<Bundle<AppDirective>> = read_bundle(&path);
    assert!(matches!(result, Err(Error::DirectiveNotFound { .. })));
}

#[test]
fn test_directive_of_wrong_shape_fails_decode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shape.wasm.zip");
    write_raw_zip(&path, &[("Directive.yaml", b"- just\n- a\n- list\n" as &[u8])]);

    let err = read_bundle::<AppDirective>(&path).unwrap_err();
    assert!(matches!(err, Error::DirectiveDecode { .. }));
    assert!(!err.is_malformed_input());
    assert!(!err.is_io());
}

// =============================================================================
// FOREIGN ARCHIVES
// =============================================================================

#[test]
fn test_reads_archive_from_other_tools() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foreign.wasm.zip");
    let directive = serde_yaml::to_string(&app_directive()).unwrap();
    write_raw_zip(
        &path,
        &[
            ("static/index.html", b"<p>foreign</p>" as &[u8]),
            ("hello.wasm", HELLO_WASM),
            ("README.md", b"ignored"),
            ("Directive.yaml", directive.as_bytes()),
        ],
    );

    let bundle: Bundle<AppDirective> =
        BundleReader::read_with_options(&path, &ReadOptions::default()).unwrap();

    assert_eq!(bundle.directive(), &app_directive());
    assert_eq!(bundle.modules().len(), 1);
    assert_eq!(bundle.static_files().collect::<Vec<_>>(), vec!["index.html"]);
    assert_eq!(bundle.static_file("index.html").unwrap(), b"<p>foreign</p>");
}

#[test]
fn test_missing_bundle_file() {
    let dir = TempDir::new().unwrap();
    let err = read_bundle::<AppDirective>(dir.path().join("absent.wasm.zip")).unwrap_err();

    assert!(err.is_io());
    assert!(!err.is_not_found());
}
