use super::expr::Expression;
use super::fields::Field;

/// A named enumeration. Item values are filled in by the enum value pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub items: Vec<EnumItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    pub name: String,
    /// Expression given in the description, or the synthesized literal
    /// once implicit values have been assigned.
    pub expr: Option<Expression>,
    /// Resolved numeric value, `None` until enum values are assigned.
    pub value: Option<u64>,
}

impl EnumItem {
    pub fn new(name: impl Into<String>, expr: Option<Expression>) -> Self {
        Self {
            name: name.into(),
            expr,
            value: None,
        }
    }
}

/// `<xidtype>`: an opaque server-side handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceType {
    pub name: String,
}

/// `<xidunion>`: a handle that may name any of several resource kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUnion {
    pub name: String,
    pub members: Vec<String>,
}

/// `<typedef oldname=".." newname=".."/>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub name: String,
    pub opcode: u32,
    /// `combine-adjacent`: consecutive requests of this kind may be merged.
    pub combine_adjacent: bool,
    pub fields: Vec<Field>,
    pub reply: Option<Reply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub number: u32,
    pub no_sequence_number: bool,
    /// Generic event carried through the X Generic Event extension.
    pub xge: bool,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub name: String,
    pub number: u32,
    pub fields: Vec<Field>,
}

/// `<eventcopy>`: a new event name and number sharing another event's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAlias {
    pub name: String,
    pub number: u32,
    pub reference: String,
}

/// `<errorcopy>`: a new error name and number sharing another error's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAlias {
    pub name: String,
    pub number: u32,
    pub reference: String,
}

/// `<eventstruct>`: a record holding any one event from the allowed ranges,
/// as sent by requests that forward events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStruct {
    pub name: String,
    pub allowed: Vec<AllowedEvents>,
}

/// `<allowed extension="x" xge="b" opcode-min="n" opcode-max="m"/>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedEvents {
    pub extension: String,
    pub xge: bool,
    pub opcode_min: u32,
    pub opcode_max: u32,
}
