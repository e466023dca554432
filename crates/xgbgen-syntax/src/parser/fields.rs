use crate::ast::fields::{CaseKind, Field, SwitchCase};
use crate::error::SyntaxError;
use super::common::{invalid_attribute, is_ignorable, parse_unsigned, required_attr};
use super::expr::{build_expression, is_expression, nested_expression, EXPRESSION_ELEMENTS};
use super::tree::Element;
use super::ParseResult;
use crate::ast::expr::Expression;

/// Builds the ordered field list of a structure body.
///
/// Children named in `nested` (e.g. `reply` inside a request) belong to the
/// caller and are skipped here.
pub fn build_fields(parent: &Element, nested: &[&str]) -> ParseResult<Vec<Field>> {
    parent
        .children
        .iter()
        .filter(|child| !is_ignorable(child) && !nested.contains(&child.name.as_str()))
        .map(|child| build_field(parent, child))
        .collect()
}

fn build_field(parent: &Element, element: &Element) -> ParseResult<Field> {
    let field = match element.name.as_str() {
        "pad" => {
            let raw = required_attr(element, "bytes")?;
            let bytes = parse_unsigned(raw).ok_or_else(|| invalid_attribute(element, "bytes", raw))?;
            Field::Pad { bytes }
        }
        "field" => Field::Field {
            name: required_attr(element, "name")?.to_string(),
            ty: required_attr(element, "type")?.to_string(),
        },
        "list" => Field::List {
            name: required_attr(element, "name")?.to_string(),
            ty: required_attr(element, "type")?.to_string(),
            length: nested_expression(element)?,
        },
        "exprfield" => Field::ExprField {
            name: required_attr(element, "name")?.to_string(),
            ty: required_attr(element, "type")?.to_string(),
            expr: required_expression(element)?,
        },
        "valueparam" => Field::ValueParam {
            mask_type: required_attr(element, "value-mask-type")?.to_string(),
            mask_name: required_attr(element, "value-mask-name")?.to_string(),
            list_name: required_attr(element, "value-list-name")?.to_string(),
        },
        "fd" => Field::Fd {
            name: required_attr(element, "name")?.to_string(),
        },
        "length" => Field::Length(required_expression(element)?),
        "switch" => build_switch(element)?,
        _ => return Err(unknown_element(parent, element)),
    };
    Ok(field)
}

fn unknown_element(parent: &Element, element: &Element) -> SyntaxError {
    SyntaxError::UnknownElement {
        element: element.name.clone(),
        parent: parent.name.clone(),
        span: Some(element.span),
    }
}

fn required_expression(element: &Element) -> ParseResult<Expression> {
    nested_expression(element)?.ok_or_else(|| SyntaxError::InvalidExpression {
        reason: format!("`{}` requires an expression", element.name),
        span: Some(element.span),
    })
}

/// `<switch>` holds one expression followed by `bitcase` or `case` arms.
fn build_switch(element: &Element) -> ParseResult<Field> {
    let mut expr = None;
    let mut cases = Vec::new();
    for child in element.children.iter().filter(|c| !is_ignorable(c)) {
        match child.name.as_str() {
            "bitcase" => cases.push(build_case(child, CaseKind::BitCase)?),
            "case" => cases.push(build_case(child, CaseKind::Case)?),
            _ if expr.is_none() && cases.is_empty() && is_expression(child) => {
                expr = Some(build_expression(child)?)
            }
            _ => return Err(unknown_element(element, child)),
        }
    }
    let expr = expr.ok_or_else(|| SyntaxError::InvalidExpression {
        reason: "`switch` requires an expression before its cases".to_string(),
        span: Some(element.span),
    })?;
    Ok(Field::Switch {
        name: required_attr(element, "name")?.to_string(),
        expr,
        cases,
    })
}

/// An arm's matched values are its expression children; everything else is
/// its field body, which may hold further switches.
fn build_case(element: &Element, kind: CaseKind) -> ParseResult<SwitchCase> {
    let exprs = element
        .children
        .iter()
        .filter(|child| is_expression(child))
        .map(build_expression)
        .collect::<ParseResult<Vec<_>>>()?;
    if exprs.is_empty() {
        return Err(SyntaxError::InvalidExpression {
            reason: format!("`{}` matches no value", element.name),
            span: Some(element.span),
        });
    }
    Ok(SwitchCase {
        kind,
        name: element.attr("name").map(str::to_string),
        exprs,
        fields: build_fields(element, EXPRESSION_ELEMENTS)?,
    })
}
