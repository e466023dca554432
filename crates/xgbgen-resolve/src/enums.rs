use fxhash::FxHashMap;
use xgbgen_syntax::ast::{Document, Expression};
use crate::error::ResolveResult;
use crate::eval::{evaluate_in, EvalScope};

/// Values assigned so far, keyed by enum name then item name.
#[derive(Default)]
struct AssignedValues(FxHashMap<String, FxHashMap<String, u64>>);

impl EvalScope for AssignedValues {
    fn enum_value(&self, enum_name: &str, item: &str) -> Option<u64> {
        self.0.get(enum_name)?.get(item).copied()
    }
}

/// Gives every enum item of `document` a value.
///
/// An item without an expression is one more than the previous item, or 0
/// for the first item. An item with an expression takes its value and
/// restarts the count from there. Implicit items also receive a literal
/// expression so later stages see every item as explicit.
///
/// Only this document's enums are touched; imported documents are left as
/// they are. Explicit values may refer to items of enums declared earlier
/// in the document.
pub fn assign_enum_values(document: &mut Document) -> ResolveResult<()> {
    let mut assigned = AssignedValues::default();

    for en in document.enums.iter_mut() {
        let mut next_value: u64 = 0;
        let mut values = FxHashMap::default();

        for item in en.items.iter_mut() {
            let value = match item.expr.as_ref() {
                Some(expr) => evaluate_in(expr, &assigned)?,
                None => next_value,
            };
            if item.expr.is_none() {
                item.expr = Some(Expression::Value(value));
            }
            item.value = Some(value);
            next_value = value.wrapping_add(1);
            values.insert(item.name.clone(), value);
        }

        log::debug!("assigned {} values in enum `{}`", en.items.len(), en.name);
        assigned.0.insert(en.name.clone(), values);
    }
    Ok(())
}
