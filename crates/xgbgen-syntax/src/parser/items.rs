use crate::ast::items::{
    AllowedEvents, Enum, EnumItem, Error, ErrorAlias, Event, EventAlias, EventStruct, Reply,
    Request, ResourceType, ResourceUnion, Struct, TypeAlias, Union,
};
use crate::ast::document::Import;
use crate::error::SyntaxError;
use super::common::{flag, is_ignorable, required_attr, required_u32};
use super::expr::nested_expression;
use super::fields::build_fields;
use super::tree::Element;
use super::ParseResult;

fn name_of(element: &Element) -> ParseResult<String> {
    required_attr(element, "name").map(str::to_string)
}

fn unknown_child(parent: &Element, child: &Element) -> SyntaxError {
    SyntaxError::UnknownElement {
        element: child.name.clone(),
        parent: parent.name.clone(),
        span: Some(child.span),
    }
}

pub fn build_import(element: &Element) -> ParseResult<Import> {
    if element.text.is_empty() {
        return Err(SyntaxError::EmptyImport {
            span: Some(element.span),
        });
    }
    Ok(Import::new(element.text.clone()))
}

pub fn build_enum(element: &Element) -> ParseResult<Enum> {
    let mut items = Vec::new();
    for child in element.children.iter().filter(|c| !is_ignorable(c)) {
        if child.name != "item" {
            return Err(unknown_child(element, child));
        }
        items.push(EnumItem::new(name_of(child)?, nested_expression(child)?));
    }
    Ok(Enum {
        name: name_of(element)?,
        items,
    })
}

pub fn build_resource(element: &Element) -> ParseResult<ResourceType> {
    Ok(ResourceType {
        name: name_of(element)?,
    })
}

pub fn build_resource_union(element: &Element) -> ParseResult<ResourceUnion> {
    let mut members = Vec::new();
    for child in element.children.iter().filter(|c| !is_ignorable(c)) {
        if child.name != "type" {
            return Err(unknown_child(element, child));
        }
        members.push(child.text.clone());
    }
    Ok(ResourceUnion {
        name: name_of(element)?,
        members,
    })
}

pub fn build_type_alias(element: &Element) -> ParseResult<TypeAlias> {
    Ok(TypeAlias {
        old: required_attr(element, "oldname")?.to_string(),
        new: required_attr(element, "newname")?.to_string(),
    })
}

pub fn build_struct(element: &Element) -> ParseResult<Struct> {
    Ok(Struct {
        name: name_of(element)?,
        fields: build_fields(element, &[])?,
    })
}

pub fn build_union(element: &Element) -> ParseResult<Union> {
    Ok(Union {
        name: name_of(element)?,
        fields: build_fields(element, &[])?,
    })
}

pub fn build_request(element: &Element) -> ParseResult<Request> {
    let mut replies = element.children_named("reply");
    let reply = match (replies.next(), replies.next()) {
        (None, _) => None,
        (Some(reply), None) => Some(Reply {
            fields: build_fields(reply, &[])?,
        }),
        (Some(_), Some(extra)) => return Err(unknown_child(element, extra)),
    };
    Ok(Request {
        name: name_of(element)?,
        opcode: required_u32(element, "opcode")?,
        combine_adjacent: flag(element, "combine-adjacent")?,
        fields: build_fields(element, &["reply"])?,
        reply,
    })
}

pub fn build_event(element: &Element) -> ParseResult<Event> {
    Ok(Event {
        name: name_of(element)?,
        number: required_u32(element, "number")?,
        no_sequence_number: flag(element, "no-sequence-number")?,
        xge: flag(element, "xge")?,
        fields: build_fields(element, &[])?,
    })
}

pub fn build_error(element: &Element) -> ParseResult<Error> {
    Ok(Error {
        name: name_of(element)?,
        number: required_u32(element, "number")?,
        fields: build_fields(element, &[])?,
    })
}

pub fn build_event_alias(element: &Element) -> ParseResult<EventAlias> {
    Ok(EventAlias {
        name: name_of(element)?,
        number: required_u32(element, "number")?,
        reference: required_attr(element, "ref")?.to_string(),
    })
}

pub fn build_error_alias(element: &Element) -> ParseResult<ErrorAlias> {
    Ok(ErrorAlias {
        name: name_of(element)?,
        number: required_u32(element, "number")?,
        reference: required_attr(element, "ref")?.to_string(),
    })
}

pub fn build_event_struct(element: &Element) -> ParseResult<EventStruct> {
    let mut allowed = Vec::new();
    for child in element.children.iter().filter(|c| !is_ignorable(c)) {
        if child.name != "allowed" {
            return Err(unknown_child(element, child));
        }
        allowed.push(AllowedEvents {
            extension: required_attr(child, "extension")?.to_string(),
            xge: flag(child, "xge")?,
            opcode_min: required_u32(child, "opcode-min")?,
            opcode_max: required_u32(child, "opcode-max")?,
        });
    }
    Ok(EventStruct {
        name: name_of(element)?,
        allowed,
    })
}
