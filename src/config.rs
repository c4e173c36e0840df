use indexmap::IndexMap;
use serde::Deserialize;

use super::*;

/// One `<option>` to create: display text and submitted value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionSpec {
    pub text: String,
    pub value: String,
}

impl OptionSpec {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// A dependent control and the options it is rebuilt with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubSelectionUpdate {
    pub id: String,
    #[serde(rename = "sOpt", default)]
    pub options: Vec<OptionSpec>,
}

/// One choice of a master control together with everything that choosing it
/// rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MasterOption {
    pub text: String,
    pub value: String,
    #[serde(rename = "sSel", default)]
    pub sub_selections: Vec<SubSelectionUpdate>,
    #[serde(rename = "sProp", default)]
    pub properties: Vec<PropertyUpdate>,
}

impl MasterOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            sub_selections: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_sub_selection(mut self, id: impl Into<String>, options: Vec<OptionSpec>) -> Self {
        self.sub_selections.push(SubSelectionUpdate {
            id: id.into(),
            options,
        });
        self
    }

    pub fn with_property(mut self, update: PropertyUpdate) -> Self {
        self.properties.push(update);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MasterSelection {
    #[serde(rename = "mOpt", default)]
    pub options: Vec<MasterOption>,
}

impl MasterSelection {
    pub fn new(options: Vec<MasterOption>) -> Self {
        Self { options }
    }
}

/// State re-applied to the display form whenever it is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormSettings {
    #[serde(rename = "setProp", default)]
    pub properties: Vec<PropertyUpdate>,
    #[serde(rename = "setMaster", default)]
    pub masters: Vec<QueryDescriptor>,
    #[serde(rename = "setSelect", default)]
    pub selections: Vec<QueryDescriptor>,
}

/// Server-rendered configuration of the cascade, read once at page load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientState {
    /// Master controls keyed by element id, in the order the server sent them.
    #[serde(rename = "masterSelections", default)]
    pub master_selections: IndexMap<String, MasterSelection>,
    #[serde(rename = "formSettings", default)]
    pub form_settings: FormSettings,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|err| Error::ConfigParse(err.to_string()))
    }

    pub fn with_master(mut self, control_id: impl Into<String>, master: MasterSelection) -> Self {
        self.master_selections.insert(control_id.into(), master);
        self
    }

    pub fn with_form_settings(mut self, form_settings: FormSettings) -> Self {
        self.form_settings = form_settings;
        self
    }

    pub fn is_master(&self, control_id: &str) -> bool {
        self.master_selections.contains_key(control_id)
    }

    pub fn master_option(&self, control_id: &str, index: usize) -> Option<&MasterOption> {
        self.master_selections.get(control_id)?.options.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphEntry {
    #[serde(default)]
    pub antisinks: String,
}

/// Canned query used by the "fill example" action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleData {
    pub graph: usize,
    /// `(element id, value)` pairs written into the boundary inputs.
    #[serde(default)]
    pub boundary: Vec<(String, String)>,
}

/// Query-form data shipped alongside [`ClientState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryFormData {
    #[serde(default)]
    pub graphs: Vec<GraphEntry>,
    #[serde(default)]
    pub example: Option<ExampleData>,
}

impl QueryFormData {
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|err| Error::ConfigParse(err.to_string()))
    }
}
