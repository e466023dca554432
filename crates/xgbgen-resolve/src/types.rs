//! The type resolution engine.

use xgbgen_syntax::ast::{Document, Union};
use crate::config::WireConfig;
use crate::error::{ResolveError, ResolveResult};

/// Query surface over one document and the documents bound to its imports.
///
/// A resolver holds shared borrows only, so one value can be handed to every
/// emitter of a run. The four lookups reach into imports differently:
///
/// | query | aliases followed | imports searched |
/// |---|---|---|
/// | [`type_alias`](Self::type_alias) | one hop | direct |
/// | [`union_of`](Self::union_of) | at most one hop | direct |
/// | [`is_resource`](Self::is_resource) | none | all, recursively |
/// | [`has_type`](Self::has_type) | none | none |
/// | [`size_of`](Self::size_of) | full chain | direct, per hop |
pub struct TypeResolver<'a> {
    document: &'a Document,
    config: &'a WireConfig,
}

impl<'a> TypeResolver<'a> {
    pub fn new(document: &'a Document, config: &'a WireConfig) -> Self {
        Self { document, config }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn config(&self) -> &'a WireConfig {
        self.config
    }

    /// The document itself followed by its bound direct imports.
    fn search_scope(&self) -> impl Iterator<Item = &'a Document> {
        std::iter::once(self.document).chain(self.document.imported_documents())
    }

    /// The type `name` is declared as an alias of, looking at local typedefs
    /// first and then at each direct import's typedefs. One hop only.
    pub fn type_alias(&self, name: &str) -> Option<&'a str> {
        self.search_scope()
            .flat_map(|doc| doc.type_aliases.iter())
            .find(|alias| alias.new == name)
            .map(|alias| alias.old.as_str())
    }

    /// The union named `name`.
    ///
    /// If `name` is an alias, the lookup is retried with the alias target,
    /// but only once: a union two alias hops away is not found.
    pub fn union_of(&self, name: &str) -> Option<&'a Union> {
        match self.type_alias(name) {
            Some(target) => self.find_union(target),
            None => self.find_union(name),
        }
    }

    fn find_union(&self, name: &str) -> Option<&'a Union> {
        self.search_scope()
            .flat_map(|doc| doc.unions.iter())
            .find(|union| union.name == name)
    }

    /// True if `name` is declared as a resource type or resource union here
    /// or anywhere in the bound import graph. Aliases are not followed.
    pub fn is_resource(&self, name: &str) -> bool {
        is_resource_in(self.document, name)
    }

    /// True if this document itself declares `name`. Imports are not
    /// searched and base types are not declarations.
    pub fn has_type(&self, name: &str) -> bool {
        has_type_in(self.document, name)
    }

    /// True if `name` is a base type or declared in this document or any
    /// document in its bound import graph.
    pub fn is_defined(&self, name: &str) -> bool {
        self.config.is_base_type(name) || is_defined_in(self.document, name)
    }

    /// Wire size of `name` in bytes.
    ///
    /// Base types come from the configured table and resource types share
    /// the configured handle width. Anything else must be an alias, which is
    /// followed hop by hop until one of those two is reached. An alias chain
    /// that returns to a name it already passed fails with
    /// [`ResolveError::AliasCycle`].
    pub fn size_of(&self, name: &str) -> ResolveResult<u64> {
        let mut chain = Vec::new();
        self.size_along(name, &mut chain)
    }

    fn size_along(&self, name: &str, chain: &mut Vec<String>) -> ResolveResult<u64> {
        if let Some(size) = self.config.base_size(name) {
            return Ok(size);
        }
        if self.is_resource(name) {
            return Ok(self.config.resource_width);
        }
        if chain.iter().any(|seen| seen == name) {
            chain.push(name.to_string());
            return Err(ResolveError::AliasCycle {
                name: name.to_string(),
                chain: std::mem::take(chain),
            });
        }
        match self.type_alias(name) {
            Some(target) => {
                log::trace!("size_of: `{}` aliases `{}`", name, target);
                chain.push(name.to_string());
                self.size_along(target, chain)
            }
            None => Err(ResolveError::TypeUndefined {
                name: name.to_string(),
                reason: "no base size for type".to_string(),
            }),
        }
    }
}

fn is_resource_in(doc: &Document, name: &str) -> bool {
    doc.resources.iter().any(|r| r.name == name)
        || doc.resource_unions.iter().any(|r| r.name == name)
        || doc.imported_documents().any(|imported| is_resource_in(imported, name))
}

fn has_type_in(doc: &Document, name: &str) -> bool {
    doc.enums.iter().any(|d| d.name == name)
        || doc.resources.iter().any(|d| d.name == name)
        || doc.resource_unions.iter().any(|d| d.name == name)
        || doc.type_aliases.iter().any(|d| d.new == name)
        || doc.event_aliases.iter().any(|d| d.name == name)
        || doc.error_aliases.iter().any(|d| d.name == name)
        || doc.structs.iter().any(|d| d.name == name)
        || doc.unions.iter().any(|d| d.name == name)
        || doc.events.iter().any(|d| d.name == name)
        || doc.errors.iter().any(|d| d.name == name)
}

fn is_defined_in(doc: &Document, name: &str) -> bool {
    has_type_in(doc, name)
        || doc.event_structs.iter().any(|d| d.name == name)
        || doc.imported_documents().any(|imported| is_defined_in(imported, name))
}
