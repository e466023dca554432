use xgbgen_syntax::ast::{
    Enum, Error, ErrorAlias, Event, EventAlias, Import, Request, ResourceType, ResourceUnion,
    Struct, TypeAlias, Union,
};
use crate::context::EmitContext;
use crate::error::CodegenResult;

/// A category-specific printer for resolved documents.
///
/// The dispatcher calls each method once, in a fixed order, with every
/// entity of that category. All methods default to writing nothing, so an
/// emitter only implements the categories it prints.
#[allow(unused_variables)]
pub trait Emitter {
    /// Written before any category, e.g. a file header.
    fn preamble(&mut self, ctx: &mut EmitContext<'_>) -> CodegenResult<()> {
        Ok(())
    }

    fn imports(&mut self, ctx: &mut EmitContext<'_>, imports: &[Import]) -> CodegenResult<()> {
        Ok(())
    }

    fn enums(&mut self, ctx: &mut EmitContext<'_>, enums: &[Enum]) -> CodegenResult<()> {
        Ok(())
    }

    fn resources(&mut self, ctx: &mut EmitContext<'_>, resources: &[ResourceType]) -> CodegenResult<()> {
        Ok(())
    }

    fn resource_unions(
        &mut self,
        ctx: &mut EmitContext<'_>,
        unions: &[ResourceUnion],
    ) -> CodegenResult<()> {
        Ok(())
    }

    fn type_aliases(&mut self, ctx: &mut EmitContext<'_>, aliases: &[TypeAlias]) -> CodegenResult<()> {
        Ok(())
    }

    fn structs(&mut self, ctx: &mut EmitContext<'_>, structs: &[Struct]) -> CodegenResult<()> {
        Ok(())
    }

    fn unions(&mut self, ctx: &mut EmitContext<'_>, unions: &[Union]) -> CodegenResult<()> {
        Ok(())
    }

    fn requests(&mut self, ctx: &mut EmitContext<'_>, requests: &[Request]) -> CodegenResult<()> {
        Ok(())
    }

    fn errors(&mut self, ctx: &mut EmitContext<'_>, errors: &[Error]) -> CodegenResult<()> {
        Ok(())
    }

    fn error_aliases(&mut self, ctx: &mut EmitContext<'_>, aliases: &[ErrorAlias]) -> CodegenResult<()> {
        Ok(())
    }

    fn events(&mut self, ctx: &mut EmitContext<'_>, events: &[Event]) -> CodegenResult<()> {
        Ok(())
    }

    fn event_aliases(&mut self, ctx: &mut EmitContext<'_>, aliases: &[EventAlias]) -> CodegenResult<()> {
        Ok(())
    }
}
