//! A plain-text outline of a resolved document.
//!
//! The outline is not meant to be compiled. It shows what the resolution
//! passes produced: enum items with their final values, aliases and
//! resources with their wire sizes, and every record's field list.

use xgbgen_resolve::evaluate;
use xgbgen_syntax::ast::{
    CaseKind, Document, Enum, Error, ErrorAlias, Event, EventAlias, Field, Import, Request,
    ResourceType, ResourceUnion, Struct, SwitchCase, TypeAlias, Union,
};
use crate::context::EmitContext;
use crate::emitter::Emitter;
use crate::error::{CodegenError, CodegenResult};

/// Writes the outline format.
#[derive(Debug, Default)]
pub struct OutlineEmitter;

impl OutlineEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for OutlineEmitter {
    fn preamble(&mut self, ctx: &mut EmitContext<'_>) -> CodegenResult<()> {
        let doc = ctx.document();
        ctx.putln(format!("// Outline of protocol description '{}.xml'.", doc.header));
        ctx.putln("// This file is automatically generated. Edit at your own peril!");
        if let Some(xname) = &doc.extension_xname {
            ctx.putln(format!(
                "// Extension {} ({}), version {}.{}",
                xname,
                doc.extension_name.as_deref().unwrap_or(&doc.header),
                doc.major_version.unwrap_or(0),
                doc.minor_version.unwrap_or(0),
            ));
        }
        ctx.blank();
        Ok(())
    }

    fn imports(&mut self, ctx: &mut EmitContext<'_>, imports: &[Import]) -> CodegenResult<()> {
        for import in imports {
            ctx.putln(format!("import {}", import.name));
        }
        Ok(())
    }

    fn enums(&mut self, ctx: &mut EmitContext<'_>, enums: &[Enum]) -> CodegenResult<()> {
        for en in enums {
            ctx.putln(format!("enum {}", en.name));
            for item in &en.items {
                let value = match (item.value, &item.expr) {
                    (Some(value), _) => value,
                    (None, Some(expr)) => evaluate(expr)?,
                    (None, None) => {
                        return Err(CodegenError::Emit {
                            category: "enum",
                            name: en.name.clone(),
                            reason: format!("item `{}` has no value", item.name),
                        })
                    }
                };
                ctx.putln(format!("  {} = {}", item.name, value));
            }
        }
        Ok(())
    }

    fn resources(&mut self, ctx: &mut EmitContext<'_>, resources: &[ResourceType]) -> CodegenResult<()> {
        for resource in resources {
            let size = ctx.types().size_of(&resource.name)?;
            ctx.putln(format!("resource {} ({})", resource.name, bytes(size)));
        }
        Ok(())
    }

    fn resource_unions(
        &mut self,
        ctx: &mut EmitContext<'_>,
        unions: &[ResourceUnion],
    ) -> CodegenResult<()> {
        for union in unions {
            let size = ctx.types().size_of(&union.name)?;
            ctx.putln(format!(
                "resource union {} = {} ({})",
                union.name,
                union.members.join(" | "),
                bytes(size)
            ));
        }
        Ok(())
    }

    fn type_aliases(&mut self, ctx: &mut EmitContext<'_>, aliases: &[TypeAlias]) -> CodegenResult<()> {
        for alias in aliases {
            let line = format!("alias {} = {}", alias.new, sized(ctx, &alias.old)?);
            ctx.putln(line);
        }
        Ok(())
    }

    fn structs(&mut self, ctx: &mut EmitContext<'_>, structs: &[Struct]) -> CodegenResult<()> {
        for s in structs {
            ctx.putln(format!("struct {}", s.name));
            put_fields(ctx, &s.fields, 1)?;
        }
        Ok(())
    }

    fn unions(&mut self, ctx: &mut EmitContext<'_>, unions: &[Union]) -> CodegenResult<()> {
        for u in unions {
            ctx.putln(format!("union {}", u.name));
            put_fields(ctx, &u.fields, 1)?;
        }
        Ok(())
    }

    fn requests(&mut self, ctx: &mut EmitContext<'_>, requests: &[Request]) -> CodegenResult<()> {
        for request in requests {
            let combine = if request.combine_adjacent { ", combine-adjacent" } else { "" };
            ctx.putln(format!("request {} (opcode {}{})", request.name, request.opcode, combine));
            put_fields(ctx, &request.fields, 1)?;
            if let Some(reply) = &request.reply {
                ctx.putln("  reply");
                put_fields(ctx, &reply.fields, 2)?;
            }
        }
        Ok(())
    }

    fn errors(&mut self, ctx: &mut EmitContext<'_>, errors: &[Error]) -> CodegenResult<()> {
        for error in errors {
            ctx.putln(format!("error {} (number {})", error.name, error.number));
            put_fields(ctx, &error.fields, 1)?;
        }
        Ok(())
    }

    fn error_aliases(&mut self, ctx: &mut EmitContext<'_>, aliases: &[ErrorAlias]) -> CodegenResult<()> {
        for alias in aliases {
            ctx.putln(format!(
                "error {} = {} (number {})",
                alias.name, alias.reference, alias.number
            ));
        }
        Ok(())
    }

    fn events(&mut self, ctx: &mut EmitContext<'_>, events: &[Event]) -> CodegenResult<()> {
        for event in events {
            let mut flags = String::new();
            if event.no_sequence_number {
                flags.push_str(", no-sequence-number");
            }
            if event.xge {
                flags.push_str(", xge");
            }
            ctx.putln(format!("event {} (number {}{})", event.name, event.number, flags));
            put_fields(ctx, &event.fields, 1)?;
        }
        Ok(())
    }

    fn event_aliases(&mut self, ctx: &mut EmitContext<'_>, aliases: &[EventAlias]) -> CodegenResult<()> {
        for alias in aliases {
            ctx.putln(format!(
                "event {} = {} (number {})",
                alias.name, alias.reference, alias.number
            ));
        }
        Ok(())
    }
}

fn put_fields(ctx: &mut EmitContext<'_>, fields: &[Field], depth: usize) -> CodegenResult<()> {
    let indent = "  ".repeat(depth);
    for field in fields {
        let line = match field {
            Field::Pad { bytes } => format!("pad {}", bytes),
            Field::Field { name, ty } => format!("{}: {}", name, sized(ctx, ty)?),
            Field::List { name, ty, length: Some(length) } => {
                format!("{}: [{}; {}]", name, sized(ctx, ty)?, length)
            }
            Field::List { name, ty, length: None } => format!("{}: [{}]", name, sized(ctx, ty)?),
            Field::ExprField { name, ty, expr } => {
                format!("{}: {} = {}", name, sized(ctx, ty)?, expr)
            }
            Field::ValueParam { mask_type, mask_name, list_name } => format!(
                "{}: {} selects {}",
                mask_name,
                sized(ctx, mask_type)?,
                list_name
            ),
            Field::Fd { name } => format!("{}: fd", name),
            Field::Length(expr) => format!("length = {}", expr),
            Field::Switch { name, expr, cases } => {
                ctx.putln(format!("{}{}: switch on {}", indent, name, expr));
                for case in cases {
                    put_case(ctx, case, depth + 1)?;
                }
                continue;
            }
        };
        ctx.putln(format!("{}{}", indent, line));
    }
    Ok(())
}

fn put_case(ctx: &mut EmitContext<'_>, case: &SwitchCase, depth: usize) -> CodegenResult<()> {
    let kind = match case.kind {
        CaseKind::BitCase => "bitcase",
        CaseKind::Case => "case",
    };
    let values: Vec<String> = case.exprs.iter().map(ToString::to_string).collect();
    let label = match &case.name {
        Some(name) => format!("{} {}", kind, name),
        None => kind.to_string(),
    };
    ctx.putln(format!("{}{} ({})", "  ".repeat(depth), label, values.join(", ")));
    put_fields(ctx, &case.fields, depth + 1)
}

/// `ty` followed by its wire size, or `ty` alone when it names something
/// without a fixed base size: a record, an enum, an event or error, or an
/// alias of one of those.
fn sized(ctx: &EmitContext<'_>, ty: &str) -> CodegenResult<String> {
    if is_unsized(ctx, ty) {
        return Ok(ty.to_string());
    }
    let size = ctx.types().size_of(ty)?;
    Ok(format!("{} ({})", ty, bytes(size)))
}

fn bytes(size: u64) -> String {
    if size == 1 {
        "1 byte".to_string()
    } else {
        format!("{} bytes", size)
    }
}

fn declares_unsized(doc: &Document, name: &str) -> bool {
    doc.structs.iter().any(|d| d.name == name)
        || doc.unions.iter().any(|d| d.name == name)
        || doc.enums.iter().any(|d| d.name == name)
        || doc.events.iter().any(|d| d.name == name)
        || doc.errors.iter().any(|d| d.name == name)
        || doc.event_aliases.iter().any(|d| d.name == name)
        || doc.error_aliases.iter().any(|d| d.name == name)
        || doc.event_structs.iter().any(|d| d.name == name)
}

/// Follows typedefs from `ty` until a declaration without a base size turns
/// up. A cycle is left for `size_of` to report.
fn is_unsized(ctx: &EmitContext<'_>, ty: &str) -> bool {
    let doc = ctx.document();
    let mut seen = Vec::new();
    let mut name = ty;
    loop {
        if declares_unsized(doc, name) || doc.imported_documents().any(|d| declares_unsized(d, name)) {
            return true;
        }
        if seen.contains(&name) {
            return false;
        }
        seen.push(name);
        match ctx.types().type_alias(name) {
            Some(target) => name = target,
            None => return false,
        }
    }
}
