use super::expr::Expression;

/// One entry of a structure body (struct, union, request, reply, event, error).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// `<pad bytes="N"/>`
    Pad { bytes: u64 },
    /// `<field type="T" name="n"/>`
    Field { name: String, ty: String },
    /// `<list type="T" name="n">length?</list>`
    List {
        name: String,
        ty: String,
        length: Option<Expression>,
    },
    /// `<exprfield type="T" name="n">expr</exprfield>`
    ExprField {
        name: String,
        ty: String,
        expr: Expression,
    },
    /// `<valueparam value-mask-type="T" value-mask-name="m" value-list-name="l"/>`
    ValueParam {
        mask_type: String,
        mask_name: String,
        list_name: String,
    },
    /// `<fd name="n"/>`: a file descriptor passed beside the wire data.
    Fd { name: String },
    /// `<length>expr</length>`: the byte length of a variable-sized struct.
    Length(Expression),
    /// `<switch name="n">expr cases</switch>`: fields present depending on `expr`.
    Switch {
        name: String,
        expr: Expression,
        cases: Vec<SwitchCase>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    /// `<bitcase>`: present when any of its values is set in the switch mask.
    BitCase,
    /// `<case>`: present when the switch value equals one of its values.
    Case,
}

/// One arm of a `<switch>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwitchCase {
    pub kind: CaseKind,
    pub name: Option<String>,
    /// The values this arm matches. Never empty.
    pub exprs: Vec<Expression>,
    pub fields: Vec<Field>,
}

impl Field {
    /// The type this field refers to, if it refers to one at all.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Field::Pad { .. } => None,
            Field::Field { ty, .. } | Field::List { ty, .. } | Field::ExprField { ty, .. } => {
                Some(ty)
            }
            Field::ValueParam { mask_type, .. } => Some(mask_type),
            Field::Fd { .. } | Field::Length(_) | Field::Switch { .. } => None,
        }
    }

    /// Every type referred to by this field, including the fields nested in
    /// switch arms, in document order.
    pub fn type_names(&self) -> Vec<&str> {
        match self {
            Field::Switch { cases, .. } => cases
                .iter()
                .flat_map(|case| case.fields.iter())
                .flat_map(|field| field.type_names())
                .collect(),
            other => other.type_name().into_iter().collect(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Field::Pad { .. } => None,
            Field::Field { name, .. } | Field::List { name, .. } | Field::ExprField { name, .. } => {
                Some(name)
            }
            Field::ValueParam { mask_name, .. } => Some(mask_name),
            Field::Fd { name } | Field::Switch { name, .. } => Some(name),
            Field::Length(_) => None,
        }
    }
}
