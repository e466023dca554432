//! Constant evaluation of description expressions.

use xgbgen_syntax::ast::{BinaryOp, Expression, UnaryOp};
use crate::error::{ResolveError, ResolveResult};

/// Supplies values for names an expression may refer to.
pub trait EvalScope {
    /// Value of `item` in enum `enum_name`, if already known.
    fn enum_value(&self, enum_name: &str, item: &str) -> Option<u64>;
}

/// A scope that knows no names; only literal arithmetic evaluates.
pub struct EmptyScope;

impl EvalScope for EmptyScope {
    fn enum_value(&self, _enum_name: &str, _item: &str) -> Option<u64> {
        None
    }
}

/// Evaluates a constant expression.
///
/// Arithmetic wraps on overflow. Field references, `sumof`, division by
/// zero and oversized shifts have no constant value and are reported as
/// [`ResolveError::UnsupportedExpression`].
pub fn evaluate(expr: &Expression) -> ResolveResult<u64> {
    evaluate_in(expr, &EmptyScope)
}

/// Evaluates `expr`, resolving enum references through `scope`.
pub fn evaluate_in(expr: &Expression, scope: &dyn EvalScope) -> ResolveResult<u64> {
    match expr {
        Expression::Value(v) => Ok(*v),
        Expression::Bit(bit) => shift_left(1, u64::from(*bit), expr),
        Expression::FieldRef(_) | Expression::ParamRef { .. } => Err(ResolveError::unsupported(
            expr,
            "field references have no constant value",
        )),
        Expression::SumOf(_) => Err(ResolveError::unsupported(
            expr,
            "sums over lists have no constant value",
        )),
        Expression::EnumRef { enum_name, item } => scope
            .enum_value(enum_name, item)
            .ok_or_else(|| ResolveError::unsupported(expr, "enum item has no known value")),
        Expression::Binary { op, lhs, rhs } => {
            let l = evaluate_in(lhs, scope)?;
            let r = evaluate_in(rhs, scope)?;
            match op {
                BinaryOp::Add => Ok(l.wrapping_add(r)),
                BinaryOp::Sub => Ok(l.wrapping_sub(r)),
                BinaryOp::Mul => Ok(l.wrapping_mul(r)),
                BinaryOp::Div => l
                    .checked_div(r)
                    .ok_or_else(|| ResolveError::unsupported(expr, "division by zero")),
                BinaryOp::And => Ok(l & r),
                BinaryOp::Shl => shift_left(l, r, expr),
            }
        }
        Expression::Unary { op, operand } => {
            let v = evaluate_in(operand, scope)?;
            match op {
                UnaryOp::Not => Ok(!v),
            }
        }
        Expression::PopCount(inner) => Ok(u64::from(evaluate_in(inner, scope)?.count_ones())),
    }
}

fn shift_left(value: u64, by: u64, expr: &Expression) -> ResolveResult<u64> {
    u32::try_from(by)
        .ok()
        .and_then(|by| value.checked_shl(by))
        .ok_or_else(|| ResolveError::unsupported(expr, format!("shift by {} bits", by)))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneEnum;

    impl EvalScope for OneEnum {
        fn enum_value(&self, enum_name: &str, item: &str) -> Option<u64> {
            (enum_name == "EventMask" && item == "Exposure").then_some(1 << 15)
        }
    }

    fn value(v: u64) -> Expression {
        Expression::Value(v)
    }

    #[test]
    fn literals_and_bits() {
        assert_eq!(evaluate(&value(7)).unwrap(), 7);
        assert_eq!(evaluate(&Expression::Bit(0)).unwrap(), 1);
        assert_eq!(evaluate(&Expression::Bit(31)).unwrap(), 0x8000_0000);
    }

    #[test]
    fn arithmetic() {
        let expr = Expression::binary(
            BinaryOp::And,
            Expression::binary(BinaryOp::Add, value(6), Expression::binary(BinaryOp::Mul, value(3), value(4))),
            Expression::unary(UnaryOp::Not, value(1)),
        );
        assert_eq!(evaluate(&expr).unwrap(), 18);

        let shifted = Expression::binary(BinaryOp::Shl, value(3), value(2));
        assert_eq!(evaluate(&shifted).unwrap(), 12);

        let divided = Expression::binary(BinaryOp::Div, value(17), value(4));
        assert_eq!(evaluate(&divided).unwrap(), 4);

        let wrapped = Expression::binary(BinaryOp::Sub, value(0), value(1));
        assert_eq!(evaluate(&wrapped).unwrap(), u64::MAX);
    }

    #[test]
    fn popcount_of_constant() {
        let expr = Expression::PopCount(Box::new(value(0b1011)));
        assert_eq!(evaluate(&expr).unwrap(), 3);
    }

    #[test]
    fn enum_references_need_a_scope() {
        let expr = Expression::EnumRef {
            enum_name: "EventMask".to_string(),
            item: "Exposure".to_string(),
        };
        assert!(matches!(evaluate(&expr), Err(ResolveError::UnsupportedExpression { .. })));
        assert_eq!(evaluate_in(&expr, &OneEnum).unwrap(), 32768);
    }

    #[test]
    fn non_constant_expressions_are_unsupported() {
        let err = evaluate(&Expression::FieldRef("length".to_string())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot evaluate `length`: field references have no constant value"
        );
        assert!(evaluate(&Expression::SumOf("lengths".to_string())).is_err());
    }

    #[test]
    fn division_by_zero_and_wide_shifts_fail() {
        let div = Expression::binary(BinaryOp::Div, value(1), value(0));
        assert!(matches!(evaluate(&div), Err(ResolveError::UnsupportedExpression { .. })));
        assert!(evaluate(&Expression::Bit(64)).is_err());
        let shl = Expression::binary(BinaryOp::Shl, value(1), value(1 << 40));
        assert!(evaluate(&shl).is_err());
    }
}
