use super::items::{
    Enum, Error, ErrorAlias, Event, EventAlias, EventStruct, Request, ResourceType, ResourceUnion,
    Struct, TypeAlias, Union,
};

/// A reference to another description document.
///
/// The builder only records the name; the import resolver loads the
/// referenced document and binds it here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub document: Option<Box<Document>>,
}

impl Import {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: None,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.document.is_some()
    }

    pub fn bind(&mut self, document: Document) {
        self.document = Some(Box::new(document));
    }
}

/// The entity tree of one description document.
///
/// Every collection keeps declaration order; emitters rely on it for the
/// layout of generated files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub header: String,
    pub extension_xname: Option<String>,
    pub extension_name: Option<String>,
    pub extension_multiword: bool,
    pub major_version: Option<u32>,
    pub minor_version: Option<u32>,

    pub imports: Vec<Import>,
    pub enums: Vec<Enum>,
    pub resources: Vec<ResourceType>,
    pub resource_unions: Vec<ResourceUnion>,
    pub type_aliases: Vec<TypeAlias>,
    pub event_aliases: Vec<EventAlias>,
    pub error_aliases: Vec<ErrorAlias>,

    pub structs: Vec<Struct>,
    pub unions: Vec<Union>,
    pub requests: Vec<Request>,
    pub events: Vec<Event>,
    pub errors: Vec<Error>,
    pub event_structs: Vec<EventStruct>,
}

impl Document {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// True for extension documents, false for the core protocol.
    pub fn is_extension(&self) -> bool {
        self.extension_xname.is_some()
    }

    /// Documents bound to this document's imports, in declaration order.
    /// Imports that have not been resolved yet are skipped.
    pub fn imported_documents(&self) -> impl Iterator<Item = &Document> {
        self.imports.iter().filter_map(|import| import.document.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_imports_are_skipped() {
        let mut doc = Document::new("shape");
        doc.imports.push(Import::new("xproto"));
        doc.imports.push(Import::new("render"));
        doc.imports[1].bind(Document::new("render"));

        let headers: Vec<_> = doc.imported_documents().map(|d| d.header.as_str()).collect();
        assert_eq!(headers, vec!["render"]);
        assert!(!doc.imports[0].is_bound());
    }
}
