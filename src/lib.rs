use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

mod cascade;
mod config;
mod dom;
mod html;
mod page;
mod property;
mod query;
mod trace;

pub use cascade::Cascade;
pub use config::{
    ClientState, ExampleData, FormSettings, GraphEntry, MasterOption, MasterSelection,
    OptionSpec, QueryFormData, SubSelectionUpdate,
};
pub use page::ProbePage;
pub use property::{PropertyAssignment, PropertyUpdate, StyleProperty};
pub use query::QueryDescriptor;
pub use trace::TraceLog;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    ConfigParse(String),
    UnknownProperty {
        property: String,
        style: bool,
    },
    InvalidPropertyValue {
        property: String,
        value: String,
    },
    MasterOptionNotFound {
        control_id: String,
        index: usize,
    },
    GraphNotFound(usize),
    DomMutation(String),
    InvalidArgument(String),
    AssertionFailed {
        target: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::UnknownProperty { property, style } => {
                if *style {
                    write!(f, "unknown style property: {property}")
                } else {
                    write!(f, "unknown element property: {property}")
                }
            }
            Self::InvalidPropertyValue { property, value } => {
                write!(f, "invalid value for {property}: {value:?}")
            }
            Self::MasterOptionNotFound { control_id, index } => {
                write!(f, "master option not found: {control_id}[{index}]")
            }
            Self::GraphNotFound(index) => write!(f, "graph not found: {index}"),
            Self::DomMutation(msg) => write!(f, "dom mutation error: {msg}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::AssertionFailed {
                target,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {target}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

/// Handle to a node in a [`Dom`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    attrs: HashMap<String, String>,
    value: String,
    checked: bool,
    disabled: bool,
    // Live selectedness of an <option>; the `selected` attribute is only the default.
    selected: bool,
}

/// In-memory document the cascade operates on.
///
/// Nodes are never freed: removed subtrees stay in the arena detached from
/// the root, so a stale [`NodeId`] is always safe to pass back in. The arena
/// therefore grows with every rebuild, by the rebuilt options and their text
/// nodes; a long-lived document should be reparsed to reclaim them.
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, Vec<NodeId>>,
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut it = value.chars();
    let mut out = String::new();
    for _ in 0..max_chars {
        let Some(ch) = it.next() else {
            return out;
        };
        out.push(ch);
    }
    if it.next().is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests;
