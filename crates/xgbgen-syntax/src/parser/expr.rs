use crate::ast::expr::{BinaryOp, Expression, UnaryOp};
use crate::error::SyntaxError;
use super::common::{is_ignorable, parse_unsigned, required_attr};
use super::tree::Element;
use super::ParseResult;

/// Element names that denote an expression rather than a field.
pub const EXPRESSION_ELEMENTS: &[&str] = &[
    "value", "bit", "fieldref", "paramref", "enumref", "op", "unop", "popcount", "sumof",
];

pub fn is_expression(element: &Element) -> bool {
    EXPRESSION_ELEMENTS.contains(&element.name.as_str())
}

fn invalid(element: &Element, reason: impl Into<String>) -> SyntaxError {
    SyntaxError::InvalidExpression {
        reason: reason.into(),
        span: Some(element.span),
    }
}

fn operands(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter(|child| !is_ignorable(child))
}

/// Builds an expression from one expression element.
pub fn build_expression(element: &Element) -> ParseResult<Expression> {
    match element.name.as_str() {
        "value" => parse_unsigned(&element.text)
            .map(Expression::Value)
            .ok_or_else(|| invalid(element, format!("`{}` is not an unsigned literal", element.text))),
        "bit" => element
            .text
            .trim()
            .parse::<u32>()
            .map(Expression::Bit)
            .map_err(|_| invalid(element, format!("`{}` is not a bit position", element.text))),
        "fieldref" => {
            if element.text.is_empty() {
                return Err(invalid(element, "empty field reference"));
            }
            Ok(Expression::FieldRef(element.text.clone()))
        }
        "paramref" => {
            if element.text.is_empty() {
                return Err(invalid(element, "empty parameter reference"));
            }
            Ok(Expression::ParamRef {
                name: element.text.clone(),
                ty: required_attr(element, "type")?.to_string(),
            })
        }
        "enumref" => {
            let enum_name = required_attr(element, "ref")?.to_string();
            if element.text.is_empty() {
                return Err(invalid(element, format!("reference into `{}` names no item", enum_name)));
            }
            Ok(Expression::EnumRef {
                enum_name,
                item: element.text.clone(),
            })
        }
        "op" => {
            let symbol = required_attr(element, "op")?;
            let op = BinaryOp::from_symbol(symbol)
                .ok_or_else(|| invalid(element, format!("unknown binary operator `{}`", symbol)))?;
            let args: Vec<&Element> = operands(element).collect();
            match args.as_slice() {
                [lhs, rhs] => Ok(Expression::binary(op, build_expression(lhs)?, build_expression(rhs)?)),
                _ => Err(invalid(
                    element,
                    format!("operator `{}` takes two operands, found {}", symbol, args.len()),
                )),
            }
        }
        "unop" => {
            let symbol = required_attr(element, "op")?;
            let op = UnaryOp::from_symbol(symbol)
                .ok_or_else(|| invalid(element, format!("unknown unary operator `{}`", symbol)))?;
            Ok(Expression::unary(op, single_operand(element)?))
        }
        "popcount" => Ok(Expression::PopCount(Box::new(single_operand(element)?))),
        "sumof" => Ok(Expression::SumOf(required_attr(element, "ref")?.to_string())),
        other => Err(invalid(element, format!("`{}` is not an expression", other))),
    }
}

fn single_operand(element: &Element) -> ParseResult<Expression> {
    let mut args = operands(element);
    match (args.next(), args.next()) {
        (Some(arg), None) => build_expression(arg),
        _ => Err(invalid(element, format!("`{}` takes exactly one operand", element.name))),
    }
}

/// Builds the expression nested inside `element`, if there is one.
pub fn nested_expression(element: &Element) -> ParseResult<Option<Expression>> {
    let mut args = operands(element);
    match (args.next(), args.next()) {
        (None, _) => Ok(None),
        (Some(arg), None) => build_expression(arg).map(Some),
        (Some(_), Some(extra)) => Err(invalid(
            extra,
            format!("`{}` holds more than one expression", element.name),
        )),
    }
}
