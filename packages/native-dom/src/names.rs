//! Which tag and attribute names the document will construct.
//!
//! These follow the relaxed rules browsers apply in `createElement` and `setAttribute` rather than
//! the full XML name production.

/// Characters that end a tag or attribute name in markup.
fn is_name_breaker(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '\0' | '/' | '>')
}

/// An element name must start with an ASCII letter and contain nothing that would end the tag.
pub(crate) fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| !is_name_breaker(c)),
        _ => false,
    }
}

/// Returns why `name` cannot be used as an attribute name, if it can't.
pub(crate) fn attribute_name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("attribute names cannot be empty");
    }
    if name
        .chars()
        .any(|c| is_name_breaker(c) || matches!(c, '=' | '"' | '\''))
    {
        return Some("attribute name contains a character that is not allowed in names");
    }
    None
}

/// Elements that never have content and are written without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Check whether `tag` names a void element. Expects a lowercased tag.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Returns why `value` cannot be stored as an attribute value, if it can't.
pub(crate) fn attribute_value_problem(value: &str) -> Option<&'static str> {
    value
        .contains('\0')
        .then_some("attribute values cannot contain NUL characters")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_elements() {
        for tag in ["input", "br", "img", "hr"] {
            assert!(is_void_element(tag), "{tag}");
        }
        for tag in ["div", "a", "textarea", "button"] {
            assert!(!is_void_element(tag), "{tag}");
        }
    }

    #[test]
    fn element_names() {
        for name in ["a", "div", "H1", "my-widget", "x:svg", "café"] {
            assert!(is_valid_element_name(name), "{name}");
        }

        for name in ["", "1div", "-x", "di v", "a/b", "a>", "\0"] {
            assert!(!is_valid_element_name(name), "{name:?}");
        }
    }

    #[test]
    fn attribute_names() {
        for name in ["href", "data-id", "aria-label", "xlink:href", "@click"] {
            assert_eq!(attribute_name_problem(name), None, "{name}");
        }
        for name in ["", "a b", "a=b", "a\"", "a'", "a/", "a>"] {
            assert!(attribute_name_problem(name).is_some(), "{name:?}");
        }
    }

    #[test]
    fn attribute_values() {
        assert_eq!(attribute_value_problem("anything <goes> \"here\""), None);
        assert!(attribute_value_problem("nul\0byte").is_some());
    }
}
