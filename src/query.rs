use serde::Deserialize;

use super::*;

/// Which element(s) an operation targets.
///
/// Without `attr_value` the descriptor names the single element with id
/// `node_id`. With it, the descriptor names every descendant of that element
/// whose `attr_name` attribute equals `attr_value` (optionally restricted to
/// `tag`). A missing `attr_name` means the `class` attribute, matched per
/// class token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    pub node_id: String,
    #[serde(default)]
    pub attr_value: Option<String>,
    #[serde(default)]
    pub attr_name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl QueryDescriptor {
    pub fn by_id(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            attr_value: None,
            attr_name: None,
            tag: None,
        }
    }

    pub fn by_attr(
        node_id: impl Into<String>,
        attr_name: impl Into<String>,
        attr_value: impl Into<String>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            attr_value: Some(attr_value.into()),
            attr_name: Some(attr_name.into()),
            tag: None,
        }
    }

    /// `option` descendants of `select_id` carrying the given value.
    pub fn option_with_value(select_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::by_attr(select_id, "value", value).with_tag("option")
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    fn filter_value(&self) -> Option<&str> {
        // An empty value reads as "no filter", like the falsy check it replaces.
        self.attr_value.as_deref().filter(|value| !value.is_empty())
    }
}

impl Dom {
    /// Resolves a descriptor to matching elements. Missing ids give an empty list.
    pub fn resolve(&self, query: &QueryDescriptor) -> Vec<NodeId> {
        let Some(scope) = self.by_id(&query.node_id) else {
            return Vec::new();
        };
        let Some(wanted) = query.filter_value() else {
            return vec![scope];
        };

        let attr_name = query.attr_name.as_deref().unwrap_or("class");
        let by_class_token = query.attr_name.is_none();
        self.descendant_elements(scope)
            .into_iter()
            .filter(|node| match query.tag.as_deref() {
                Some(tag) if tag != "*" => self.has_tag(*node, tag),
                _ => true,
            })
            .filter(|node| {
                let Some(actual) = self.attr(*node, attr_name) else {
                    return false;
                };
                if by_class_token {
                    actual.split_ascii_whitespace().any(|token| token == wanted)
                } else {
                    actual == wanted
                }
            })
            .collect()
    }

    /// Marks every resolved option selected; other matches are ignored.
    pub fn set_selection(&mut self, query: &QueryDescriptor) {
        for node in self.resolve(query) {
            self.select_option(node);
        }
    }
}
