use xgbgen_syntax::ast::Field;
use crate::error::{ResolveError, ResolveResult};
use crate::types::TypeResolver;

/// Checks that every type a field refers to is defined.
///
/// Walks structs, unions, requests (with their replies), events and errors
/// in declaration order and fails on the first field whose type is neither
/// a base type nor declared anywhere in the bound import graph.
pub fn check_field_types(resolver: &TypeResolver<'_>) -> ResolveResult<()> {
    let doc = resolver.document();

    for s in &doc.structs {
        check_fields(resolver, &s.fields, "struct", &s.name)?;
    }
    for u in &doc.unions {
        check_fields(resolver, &u.fields, "union", &u.name)?;
    }
    for r in &doc.requests {
        check_fields(resolver, &r.fields, "request", &r.name)?;
        if let Some(reply) = &r.reply {
            check_fields(resolver, &reply.fields, "reply of request", &r.name)?;
        }
    }
    for e in &doc.events {
        check_fields(resolver, &e.fields, "event", &e.name)?;
    }
    for e in &doc.errors {
        check_fields(resolver, &e.fields, "error", &e.name)?;
    }
    Ok(())
}

fn check_fields(
    resolver: &TypeResolver<'_>,
    fields: &[Field],
    kind: &str,
    owner: &str,
) -> ResolveResult<()> {
    for field in fields {
        if let Field::Switch { cases, .. } = field {
            for case in cases {
                check_fields(resolver, &case.fields, kind, owner)?;
            }
        } else if let Some(ty) = field.type_name() {
            if !resolver.is_defined(ty) {
                return Err(ResolveError::TypeUndefined {
                    name: ty.to_string(),
                    reason: format!(
                        "used by field `{}` of {} `{}`",
                        field.name().unwrap_or("?"),
                        kind,
                        owner
                    ),
                });
            }
        }
    }
    Ok(())
}
