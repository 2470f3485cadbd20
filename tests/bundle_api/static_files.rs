//! Static File Tests
//!
//! Tests for static file lookup: both spellings of a name, not-found
//! reporting and lazy retrieval.

use crate::*;
use wasmbundle::{Error, ReadOptions};

#[test]
fn test_static_file_contents() {
    let sources = create_sources();
    let bundle = write_and_read(&sources);

    assert_eq!(bundle.static_file("index.html").unwrap(), b"<h1>hello</h1>");
    assert_eq!(bundle.static_file("site.css").unwrap(), b"body { margin: 0 }");
}

#[test]
fn test_prefixed_and_bare_names_agree() {
    let sources = create_sources();
    let bundle = write_and_read(&sources);

    assert_eq!(
        bundle.static_file("static/index.html").unwrap(),
        bundle.static_file("index.html").unwrap()
    );
    assert!(bundle.has_static_file("static/site.css"));
    assert!(bundle.has_static_file("site.css"));
}

#[test]
fn test_not_found_is_distinct_from_empty() {
    init_tracing();
    let sources = create_sources();
    let empty = write_source(sources.dir.path(), "public/empty.txt", b"");
    let mut statics = sources.statics.clone();
    statics.push(empty);

    let target = sources.target();
    write_bundle(Some(&app_directive()), &sources.modules, &statics, &target).unwrap();
    let bundle: Bundle<AppDirective> = read_bundle(&target).unwrap();

    assert_eq!(bundle.static_file("empty.txt").unwrap(), Vec::<u8>::new());

    let err = bundle.static_file("missing").unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, Error::StaticFileNotFound(ref name) if name == "missing"));
}

#[test]
fn test_directory_part_is_not_part_of_the_name() {
    let sources = create_sources();
    let bundle = write_and_read(&sources);

    // public/css/site.css is stored under its base name
    assert!(bundle.static_file("css/site.css").unwrap_err().is_not_found());
}

#[test]
fn test_modules_are_not_static_files() {
    let sources = create_sources();
    let bundle = write_and_read(&sources);

    assert!(bundle.static_file("hello.wasm").unwrap_err().is_not_found());
    assert!(bundle.static_file("Directive.yaml").unwrap_err().is_not_found());
}

#[test]
fn test_static_file_read_after_archive_rewrite() {
    let sources = create_sources();
    let bundle = write_and_read(&sources);

    // a fresh build with new contents is picked up by later retrievals
    fs::write(&sources.statics[0], b"<h1>rebuilt</h1>").unwrap();
    write_bundle(
        Some(&app_directive()),
        &sources.modules,
        &sources.statics,
        &sources.target(),
    )
    .unwrap();

    assert_eq!(bundle.static_file("index.html").unwrap(), b"<h1>rebuilt</h1>");
}

#[test]
fn test_vanished_static_file_compat_and_strict() {
    init_tracing();
    let sources = create_sources();
    let target = sources.target();
    write_bundle(
        Some(&app_directive()),
        &sources.modules,
        &sources.statics,
        &target,
    )
    .unwrap();

    let lenient: Bundle<AppDirective> = read_bundle(&target).unwrap();
    let strict: Bundle<AppDirective> =
        BundleReader::read_with_options(&target, &ReadOptions::strict()).unwrap();

    write_bundle(
        Some(&app_directive()),
        &sources.modules,
        &sources.statics[1..],
        &target,
    )
    .unwrap();

    assert_eq!(lenient.static_file("index.html").unwrap(), Vec::<u8>::new());
    assert!(matches!(
        strict.static_file("index.html"),
        Err(Error::StaticFileVanished(_))
    ));
    assert_eq!(strict.static_file("site.css").unwrap(), b"body { margin: 0 }");
}
