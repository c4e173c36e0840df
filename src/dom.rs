use super::html::{is_void_tag, parse_html};
use super::*;

mod form_controls;
mod select;
mod style;
mod tree;

fn is_tag(element: &Element, tag: &str) -> bool {
    element.tag_name.eq_ignore_ascii_case(tag)
}

fn is_checkbox_or_radio_input_element(element: &Element) -> bool {
    if !is_tag(element, "input") {
        return false;
    }
    matches!(
        element
            .attrs
            .get("type")
            .map(|kind| kind.to_ascii_lowercase())
            .as_deref(),
        Some("checkbox") | Some("radio")
    )
}
