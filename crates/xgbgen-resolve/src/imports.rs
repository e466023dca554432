//! Import resolution.
//!
//! Loads the documents named by a document's `<import>` declarations and
//! binds them in place. Only direct imports are loaded; a loaded document's
//! own imports stay unbound.

use std::path::{Path, PathBuf};
use fxhash::FxHashMap;
use xgbgen_syntax::{parse_document, Document};
use crate::error::{ResolveError, ResolveResult};

/// Where imported description documents come from.
pub trait DocumentSource {
    /// Loads and parses the description named `name`.
    ///
    /// Implementations read from storage on every call.
    fn load(&self, name: &str) -> ResolveResult<Document>;
}

/// Reads `<proto_path>/<name>.xml` from the filesystem.
#[derive(Debug, Clone)]
pub struct FsSource {
    proto_path: PathBuf,
}

impl FsSource {
    pub fn new(proto_path: impl Into<PathBuf>) -> Self {
        Self {
            proto_path: proto_path.into(),
        }
    }

    pub fn proto_path(&self) -> &Path {
        &self.proto_path
    }

    /// The file a description name maps to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.proto_path.join(format!("{}.xml", name))
    }
}

impl DocumentSource for FsSource {
    fn load(&self, name: &str) -> ResolveResult<Document> {
        let path = self.path_for(name);
        let text = std::fs::read_to_string(&path).map_err(|e| ResolveError::ImportNotFound {
            name: name.to_string(),
            path: path.clone(),
            reason: e.to_string(),
        })?;
        parse_document(&text).map_err(|source| ResolveError::ImportMalformed {
            name: name.to_string(),
            source,
        })
    }
}

/// Description texts held in memory, keyed by description name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: FxHashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.documents.insert(name.into(), text.into());
        self
    }
}

impl DocumentSource for MemorySource {
    fn load(&self, name: &str) -> ResolveResult<Document> {
        let text = self.documents.get(name).ok_or_else(|| ResolveError::ImportNotFound {
            name: name.to_string(),
            path: PathBuf::from(format!("{}.xml", name)),
            reason: "no such description".to_string(),
        })?;
        parse_document(text).map_err(|source| ResolveError::ImportMalformed {
            name: name.to_string(),
            source,
        })
    }
}

/// Loads every import of `document`, in declaration order, and binds it.
///
/// The first import that cannot be loaded aborts the pass; imports before it
/// stay bound, the rest stay unbound. Imports that are already bound are
/// loaded again.
pub fn resolve_imports(document: &mut Document, source: &dyn DocumentSource) -> ResolveResult<()> {
    for import in document.imports.iter_mut() {
        log::debug!("resolving import `{}` of `{}`", import.name, document.header);
        let loaded = source.load(&import.name)?;
        import.bind(loaded);
    }
    Ok(())
}
