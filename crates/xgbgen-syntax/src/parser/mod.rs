pub mod common;
pub mod expr;
pub mod fields;
pub mod items;
pub mod tree;

use crate::ast::document::Document;
use crate::error::SyntaxError;
use common::{flag, is_ignorable, optional_u32, required_attr};
use tree::Element;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses description text into an unresolved [`Document`].
///
/// Runs both phases: the generic element tree read, then the typed build.
/// Imports come back unbound and enum items keep only the expressions that
/// were written in the source.
pub fn parse_document(source: &str) -> ParseResult<Document> {
    let root = tree::parse_tree(source)?;
    build_document(&root)
}

/// Builds a [`Document`] from an already-read element tree.
pub fn build_document(root: &Element) -> ParseResult<Document> {
    if root.name != "xcb" {
        return Err(SyntaxError::UnexpectedRoot {
            found: root.name.clone(),
            span: Some(root.span),
        });
    }

    let mut doc = Document::new(required_attr(root, "header")?);
    doc.extension_xname = root.attr("extension-xname").map(str::to_string);
    doc.extension_name = root.attr("extension-name").map(str::to_string);
    doc.extension_multiword = flag(root, "extension-multiword")?;
    doc.major_version = optional_u32(root, "major-version")?;
    doc.minor_version = optional_u32(root, "minor-version")?;

    for child in root.children.iter().filter(|c| !is_ignorable(c)) {
        match child.name.as_str() {
            "import" => doc.imports.push(items::build_import(child)?),
            "enum" => doc.enums.push(items::build_enum(child)?),
            "xidtype" => doc.resources.push(items::build_resource(child)?),
            "xidunion" => doc.resource_unions.push(items::build_resource_union(child)?),
            "typedef" => doc.type_aliases.push(items::build_type_alias(child)?),
            "eventcopy" => doc.event_aliases.push(items::build_event_alias(child)?),
            "errorcopy" => doc.error_aliases.push(items::build_error_alias(child)?),
            "struct" => doc.structs.push(items::build_struct(child)?),
            "union" => doc.unions.push(items::build_union(child)?),
            "request" => doc.requests.push(items::build_request(child)?),
            "event" => doc.events.push(items::build_event(child)?),
            "error" => doc.errors.push(items::build_error(child)?),
            "eventstruct" => doc.event_structs.push(items::build_event_struct(child)?),
            other => {
                return Err(SyntaxError::UnknownElement {
                    element: other.to_string(),
                    parent: root.name.clone(),
                    span: Some(child.span),
                })
            }
        }
    }

    log::trace!(
        "built document `{}`: {} imports, {} enums, {} structs, {} requests",
        doc.header,
        doc.imports.len(),
        doc.enums.len(),
        doc.structs.len(),
        doc.requests.len()
    );
    Ok(doc)
}
