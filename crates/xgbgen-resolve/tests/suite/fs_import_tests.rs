use std::fs;
use tempfile::TempDir;
use xgbgen_resolve::{resolve_imports, DocumentSource, FsSource, ResolveError};
use xgbgen_syntax::parse_document;
use super::common::XPROTO;

fn proto_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    for (name, text) in files {
        fs::write(dir.path().join(format!("{}.xml", name)), text)
            .expect("Failed to write description");
    }
    dir
}

#[test]
fn loads_imports_from_the_proto_path() {
    let dir = proto_dir(&[("xproto", XPROTO)]);
    let source = FsSource::new(dir.path());
    assert_eq!(source.path_for("xproto"), dir.path().join("xproto.xml"));

    let mut doc = parse_document(r#"<xcb header="shape"><import>xproto</import></xcb>"#).unwrap();
    resolve_imports(&mut doc, &source).unwrap();
    let xproto = doc.imports[0].document.as_deref().unwrap();
    assert_eq!(xproto.header, "xproto");
    assert_eq!(xproto.resources.len(), 2);
}

#[test]
fn missing_file_is_import_not_found() {
    let dir = proto_dir(&[]);
    let source = FsSource::new(dir.path());
    let mut doc = parse_document(r#"<xcb header="shape"><import>nonexistent</import></xcb>"#).unwrap();

    let err = resolve_imports(&mut doc, &source).unwrap_err();
    match err {
        ResolveError::ImportNotFound { name, path, .. } => {
            assert_eq!(name, "nonexistent");
            assert_eq!(path, dir.path().join("nonexistent.xml"));
        }
        other => panic!("expected ImportNotFound, got {other:?}"),
    }
    assert!(!doc.imports[0].is_bound());
}

#[test]
fn unparsable_file_is_import_malformed() {
    let dir = proto_dir(&[("xproto", "<xcb header=\"xproto\"><struct>")]);
    let err = FsSource::new(dir.path()).load("xproto").unwrap_err();
    assert!(matches!(err, ResolveError::ImportMalformed { ref name, .. } if name == "xproto"));
}

#[test]
fn rereads_storage_on_every_resolution() {
    let dir = proto_dir(&[("xproto", r#"<xcb header="xproto"/>"#)]);
    let source = FsSource::new(dir.path());
    let mut doc = parse_document(r#"<xcb header="shape"><import>xproto</import></xcb>"#).unwrap();

    resolve_imports(&mut doc, &source).unwrap();
    assert!(doc.imports[0].document.as_ref().unwrap().resources.is_empty());

    fs::write(dir.path().join("xproto.xml"), XPROTO).unwrap();
    resolve_imports(&mut doc, &source).unwrap();
    assert_eq!(doc.imports[0].document.as_ref().unwrap().resources.len(), 2);
}
