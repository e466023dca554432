use crate::context::EmitContext;
use crate::emitter::Emitter;
use crate::error::CodegenResult;

/// Declaration categories in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Imports,
    Enums,
    Resources,
    ResourceUnions,
    TypeAliases,
    Structs,
    Unions,
    Requests,
    Errors,
    ErrorAliases,
    Events,
    EventAliases,
}

impl Category {
    /// The fixed traversal order.
    pub const ORDER: [Category; 12] = [
        Category::Imports,
        Category::Enums,
        Category::Resources,
        Category::ResourceUnions,
        Category::TypeAliases,
        Category::Structs,
        Category::Unions,
        Category::Requests,
        Category::Errors,
        Category::ErrorAliases,
        Category::Events,
        Category::EventAliases,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Imports => "imports",
            Category::Enums => "enums",
            Category::Resources => "resources",
            Category::ResourceUnions => "resource unions",
            Category::TypeAliases => "type aliases",
            Category::Structs => "structs",
            Category::Unions => "unions",
            Category::Requests => "requests",
            Category::Errors => "errors",
            Category::ErrorAliases => "error aliases",
            Category::Events => "events",
            Category::EventAliases => "event aliases",
        }
    }
}

/// Hands every category of the context's document to `emitter`, in
/// [`Category::ORDER`], with a blank line after each category.
///
/// Performs no resolution itself. The first emitter error stops the walk.
pub fn dispatch(emitter: &mut dyn Emitter, ctx: &mut EmitContext<'_>) -> CodegenResult<()> {
    let doc = ctx.document();
    emitter.preamble(ctx)?;

    for category in Category::ORDER {
        log::trace!("emitting {}", category.name());
        match category {
            Category::Imports => emitter.imports(ctx, &doc.imports)?,
            Category::Enums => emitter.enums(ctx, &doc.enums)?,
            Category::Resources => emitter.resources(ctx, &doc.resources)?,
            Category::ResourceUnions => emitter.resource_unions(ctx, &doc.resource_unions)?,
            Category::TypeAliases => emitter.type_aliases(ctx, &doc.type_aliases)?,
            Category::Structs => emitter.structs(ctx, &doc.structs)?,
            Category::Unions => emitter.unions(ctx, &doc.unions)?,
            Category::Requests => emitter.requests(ctx, &doc.requests)?,
            Category::Errors => emitter.errors(ctx, &doc.errors)?,
            Category::ErrorAliases => emitter.error_aliases(ctx, &doc.error_aliases)?,
            Category::Events => emitter.events(ctx, &doc.events)?,
            Category::EventAliases => emitter.event_aliases(ctx, &doc.event_aliases)?,
        }
        ctx.blank();
    }
    Ok(())
}
