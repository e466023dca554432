use std::path::PathBuf;
use xgbgen_codegen::{dispatch, EmitContext, Emitter};
use xgbgen_resolve::{
    assign_enum_values, check_field_types, resolve_imports, DocumentSource, FsSource,
    ResolveError, TypeResolver, WireConfig,
};
use xgbgen_syntax::Document;

use crate::error::{DriverError, DriverResult};

/// Runs the generator passes for description documents read from `S`.
///
/// A run loads the named root description, binds its direct imports,
/// assigns implicit enum values, checks that every field type is defined
/// and finally hands the tree to an emitter. The first failure stops the
/// run and nothing is emitted.
pub struct Generator<S = FsSource> {
    source: S,
    config: WireConfig,
}

impl Generator<FsSource> {
    /// A generator reading `<proto_path>/<name>.xml` files.
    pub fn new(proto_path: impl Into<PathBuf>) -> Self {
        Self::with_source(FsSource::new(proto_path))
    }
}

impl<S: DocumentSource> Generator<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            config: WireConfig::default(),
        }
    }

    /// Replaces the default X11 wire size table.
    pub fn with_config(mut self, config: WireConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Loads `name` and runs every pass up to, but not including, emission.
    pub fn prepare(&self, name: &str) -> DriverResult<Document> {
        let mut document = self.load_root(name)?;
        log::info!("loaded protocol description `{}`", name);

        resolve_imports(&mut document, &self.source)?;
        log::info!("resolved {} imports of `{}`", document.imports.len(), name);

        assign_enum_values(&mut document)?;
        check_field_types(&TypeResolver::new(&document, &self.config))?;
        Ok(document)
    }

    /// Prepares `name` and returns what `emitter` writes for it.
    pub fn generate(&self, name: &str, emitter: &mut dyn Emitter) -> DriverResult<String> {
        let document = self.prepare(name)?;
        let mut ctx = EmitContext::new(TypeResolver::new(&document, &self.config));
        dispatch(emitter, &mut ctx)?;
        log::info!("emitted {} lines for `{}`", ctx.lines().len(), name);
        Ok(ctx.output())
    }

    fn load_root(&self, name: &str) -> DriverResult<Document> {
        self.source.load(name).map_err(|err| match err {
            ResolveError::ImportNotFound { name, path, reason } => {
                DriverError::RootNotFound { name, path, reason }
            }
            ResolveError::ImportMalformed { name, source } => {
                DriverError::RootMalformed { name, source }
            }
            other => DriverError::Resolve(other),
        })
    }
}
