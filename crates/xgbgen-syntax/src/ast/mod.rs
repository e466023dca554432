pub mod document;
pub mod expr;
pub mod fields;
pub mod items;

pub use document::{Document, Import};
pub use expr::{BinaryOp, Expression, UnaryOp};
pub use fields::{CaseKind, Field, SwitchCase};
pub use items::{
    AllowedEvents, Enum, EnumItem, Error, ErrorAlias, Event, EventAlias, EventStruct, Reply,
    Request, ResourceType, ResourceUnion, Struct, TypeAlias, Union,
};
