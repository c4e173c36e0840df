use serde::Deserialize;

use super::*;

/// Style properties a [`PropertyUpdate`] may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    Display,
    Visibility,
    Color,
    BackgroundColor,
    Width,
    Height,
}

impl StyleProperty {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "display" => Some(Self::Display),
            "visibility" => Some(Self::Visibility),
            "color" => Some(Self::Color),
            "backgroundColor" | "background-color" => Some(Self::BackgroundColor),
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            _ => None,
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Visibility => "visibility",
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// A typed property write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyAssignment {
    Value(String),
    /// Negative indices clear the selection.
    SelectedIndex(i64),
    Disabled(bool),
    Checked(bool),
    ClassName(String),
    Title(String),
    TextContent(String),
    Style(StyleProperty, String),
}

impl PropertyAssignment {
    /// Builds an assignment from a property name as the page configuration
    /// spells it. `style` selects between style and element properties.
    pub fn parse(property: &str, value: &str, style: bool) -> Result<Self> {
        if style {
            return StyleProperty::from_name(property)
                .map(|prop| Self::Style(prop, value.to_string()))
                .ok_or_else(|| Error::UnknownProperty {
                    property: property.to_string(),
                    style,
                });
        }

        let invalid = || Error::InvalidPropertyValue {
            property: property.to_string(),
            value: value.to_string(),
        };
        match property {
            "value" => Ok(Self::Value(value.to_string())),
            "selectedIndex" => value
                .trim()
                .parse::<i64>()
                .map(Self::SelectedIndex)
                .map_err(|_| invalid()),
            "disabled" => parse_flag(value).map(Self::Disabled).ok_or_else(invalid),
            "checked" => parse_flag(value).map(Self::Checked).ok_or_else(invalid),
            "className" => Ok(Self::ClassName(value.to_string())),
            "title" => Ok(Self::Title(value.to_string())),
            "textContent" => Ok(Self::TextContent(value.to_string())),
            _ => Err(Error::UnknownProperty {
                property: property.to_string(),
                style,
            }),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// One property write applied to every element a query resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WirePropertyUpdate")]
pub struct PropertyUpdate {
    pub selector: QueryDescriptor,
    pub assignment: PropertyAssignment,
}

impl PropertyUpdate {
    pub fn new(selector: QueryDescriptor, property: &str, value: &str, style: bool) -> Result<Self> {
        Ok(Self {
            selector,
            assignment: PropertyAssignment::parse(property, value, style)?,
        })
    }
}

#[derive(Deserialize)]
struct WirePropertyUpdate {
    selector: QueryDescriptor,
    property: String,
    #[serde(default)]
    value: Option<WireScalar>,
    #[serde(default)]
    style: Option<WireScalar>,
}

/// Scalars the server writes as strings, numbers or booleans interchangeably.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl WireScalar {
    fn to_text(&self) -> String {
        match self {
            Self::Flag(flag) => flag.to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Integer-prefix truthiness: `"1"` is true, `"0"` and non-numbers are false.
    fn is_set(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Integer(value) => *value != 0,
            Self::Float(value) => value.trunc() != 0.0,
            Self::Text(text) => {
                let trimmed = text.trim_start();
                let sign_len = usize::from(trimmed.starts_with(['-', '+']));
                let digits = trimmed[sign_len..]
                    .bytes()
                    .take_while(u8::is_ascii_digit)
                    .count();
                trimmed[sign_len..sign_len + digits]
                    .bytes()
                    .any(|digit| digit != b'0')
            }
        }
    }
}

impl TryFrom<WirePropertyUpdate> for PropertyUpdate {
    type Error = Error;

    fn try_from(wire: WirePropertyUpdate) -> Result<Self> {
        let value = wire.value.map(|value| value.to_text()).unwrap_or_default();
        let style = wire.style.is_some_and(|style| style.is_set());
        Self::new(wire.selector, &wire.property, &value, style)
    }
}

impl Dom {
    /// Applies `update` to every element its selector resolves to.
    pub fn set_property(&mut self, update: &PropertyUpdate) -> Result<()> {
        for node in self.resolve(&update.selector) {
            self.assign_property(node, &update.assignment)?;
        }
        Ok(())
    }

    fn assign_property(&mut self, node: NodeId, assignment: &PropertyAssignment) -> Result<()> {
        match assignment {
            PropertyAssignment::Value(value) => self.set_value(node, value),
            PropertyAssignment::SelectedIndex(index) => {
                if self.is_select(node) {
                    self.set_selected_index(node, usize::try_from(*index).ok());
                }
                Ok(())
            }
            PropertyAssignment::Disabled(disabled) => self.set_disabled(node, *disabled),
            PropertyAssignment::Checked(checked) => self.set_checked(node, *checked),
            PropertyAssignment::ClassName(value) => self.set_attr(node, "class", value),
            PropertyAssignment::Title(value) => self.set_attr(node, "title", value),
            PropertyAssignment::TextContent(value) => self.set_text_content(node, value),
            PropertyAssignment::Style(prop, value) => self.style_set(node, prop.css_name(), value),
        }
    }
}
