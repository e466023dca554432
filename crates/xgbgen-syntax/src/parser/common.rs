use crate::error::SyntaxError;
use super::tree::Element;
use super::ParseResult;

/// Returns the value of a required attribute.
pub fn required_attr<'a>(element: &'a Element, attribute: &str) -> ParseResult<&'a str> {
    element.attr(attribute).ok_or_else(|| SyntaxError::MissingAttribute {
        element: element.name.clone(),
        attribute: attribute.to_string(),
        span: Some(element.span),
    })
}

/// Parses a required unsigned attribute (`opcode`, `number`, `bytes`, ...).
pub fn required_u32(element: &Element, attribute: &str) -> ParseResult<u32> {
    let raw = required_attr(element, attribute)?;
    parse_unsigned(raw)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| invalid_attribute(element, attribute, raw))
}

pub fn optional_u32(element: &Element, attribute: &str) -> ParseResult<Option<u32>> {
    match element.attr(attribute) {
        None => Ok(None),
        Some(raw) => parse_unsigned(raw)
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| invalid_attribute(element, attribute, raw)),
    }
}

/// Boolean attributes default to false when absent.
pub fn flag(element: &Element, attribute: &str) -> ParseResult<bool> {
    match element.attr(attribute) {
        None => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(raw) => Err(invalid_attribute(element, attribute, raw)),
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal literal.
pub fn parse_unsigned(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        raw.parse().ok()
    }
}

pub fn invalid_attribute(element: &Element, attribute: &str, value: &str) -> SyntaxError {
    SyntaxError::InvalidAttribute {
        element: element.name.clone(),
        attribute: attribute.to_string(),
        value: value.to_string(),
        span: Some(element.span),
    }
}

/// Elements that carry documentation or alignment hints only.
pub fn is_ignorable(element: &Element) -> bool {
    matches!(element.name.as_str(), "doc" | "required_start_align")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(parse_unsigned("42"), Some(42));
        assert_eq!(parse_unsigned("0x1F"), Some(31));
        assert_eq!(parse_unsigned(" 7 "), Some(7));
        assert_eq!(parse_unsigned("-1"), None);
        assert_eq!(parse_unsigned("abc"), None);
    }

    #[test]
    fn flags_default_to_false() {
        let el = Element::new("request").with_attr("combine-adjacent", "true");
        assert!(flag(&el, "combine-adjacent").unwrap());
        assert!(!flag(&el, "missing").unwrap());

        let bad = Element::new("event").with_attr("xge", "maybe");
        assert!(matches!(flag(&bad, "xge"), Err(SyntaxError::InvalidAttribute { .. })));
    }

    #[test]
    fn missing_attribute_names_element() {
        let el = Element::new("typedef").with_attr("oldname", "CARD32");
        let err = required_attr(&el, "newname").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Element `typedef` is missing required attribute `newname`"
        );
    }
}
