use super::*;

const QUERY_FORM: &str = "query_form";
const DISPLAY_FORM: &str = "display_form";
const GRAPH_CONTROL: &str = "graph";
const NETGROUP_CONTROL: &str = "netgroup";
const ANTISINK_FIELD: &str = "antisink_map";

/// The ITM Probe query page: document, cascade configuration and the
/// handlers the page wires to user input.
#[derive(Debug, Clone)]
pub struct ProbePage {
    dom: Dom,
    state: ClientState,
    query_data: QueryFormData,
    trace: TraceLog,
}

impl ProbePage {
    pub fn new(dom: Dom, state: ClientState, query_data: QueryFormData) -> Self {
        Self {
            dom,
            state,
            query_data,
            trace: TraceLog::default(),
        }
    }

    pub fn from_html(html: &str, state: ClientState, query_data: QueryFormData) -> Result<Self> {
        Ok(Self::new(Dom::from_html(html)?, state, query_data))
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn client_state(&self) -> &ClientState {
        &self.state
    }

    pub fn trace_log(&mut self) -> &mut TraceLog {
        &mut self.trace
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace.enable(enabled);
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace.take()
    }

    pub fn cascade(&mut self) -> Cascade<'_> {
        Cascade::new(&self.state, &mut self.dom).with_trace(&mut self.trace)
    }

    /// Page load: populate every master control and its dependents.
    pub fn setup(&mut self) -> Result<()> {
        self.trace.line("[page] setup".to_string());
        self.cascade().synchronize_all()
    }

    /// A user picking option `index` of `control_id`. Master controls cascade;
    /// anything else just changes its selection.
    pub fn choose_option(&mut self, control_id: &str, index: usize) -> Result<()> {
        let Some(node) = self.dom.by_id(control_id) else {
            return Ok(());
        };
        self.dom.set_selected_index(node, Some(index));
        self.trace
            .line(format!("[page] change #{control_id} index={index}"));
        if self.state.is_master(control_id) && self.dom.selected_index(node) == Some(index) {
            self.cascade().propagate(control_id, index)?;
        }
        Ok(())
    }

    /// Resets the display form, then re-applies the configured display state.
    pub fn reset_display(&mut self) -> Result<()> {
        self.reset_form(DISPLAY_FORM)?;
        self.cascade().update_display_options()
    }

    /// Resets the query form back to the first graph, then the display form.
    pub fn reset_params(&mut self) -> Result<()> {
        self.reset_form(QUERY_FORM)?;
        if let Some(graph) = self.dom.by_id(GRAPH_CONTROL) {
            self.dom.set_selected_index(graph, Some(0));
        }
        if !self.query_data.graphs.is_empty() {
            self.graph_change(0)?;
        }
        self.reset_display()
    }

    fn reset_form(&mut self, form_key: &str) -> Result<()> {
        let Some(form) = self.dom.find_form(form_key) else {
            self.trace.line(format!("[reset] no form {form_key}"));
            return Ok(());
        };
        self.trace.line(format!("[reset] form {form_key}"));
        self.dom.reset_form(form)
    }

    /// Copies graph `index`'s antisinks into the antisink field.
    pub fn graph_change(&mut self, index: usize) -> Result<()> {
        let antisinks = self
            .query_data
            .graphs
            .get(index)
            .map(|graph| graph.antisinks.clone())
            .ok_or(Error::GraphNotFound(index))?;
        if let Some(field) = self.dom.by_id(ANTISINK_FIELD) {
            self.dom.set_value(field, &antisinks)?;
        }
        Ok(())
    }

    /// Picks network group `index`: only graphs whose `group` attribute
    /// matches stay displayed, the first of them gets selected and its
    /// antisinks are copied.
    pub fn group_change(&mut self, index: usize) -> Result<()> {
        let Some(netgroup) = self.dom.by_id(NETGROUP_CONTROL) else {
            return Ok(());
        };
        let Some(group_option) = self.dom.select_options(netgroup).get(index).copied() else {
            self.trace
                .line(format!("[page] netgroup index {index} out of range"));
            return Ok(());
        };
        self.dom.set_selected_index(netgroup, Some(index));
        let group = self.dom.option_value(group_option);
        self.trace.line(format!("[page] group {group}"));

        let Some(graph) = self.dom.by_id(GRAPH_CONTROL) else {
            return Ok(());
        };
        let mut first = true;
        for option in self.dom.select_options(graph) {
            if self.dom.attr(option, "group").as_deref() == Some(group.as_str()) {
                self.dom.style_set(option, "display", "block")?;
                if first {
                    self.dom.select_option(option);
                    first = false;
                }
            } else {
                self.dom.style_set(option, "display", "none")?;
            }
        }

        match self.dom.selected_index(graph) {
            Some(selected) => self.graph_change(selected),
            None => Ok(()),
        }
    }

    /// Loads the canned example query, if the page ships one.
    pub fn fill_example(&mut self) -> Result<()> {
        let Some(example) = self.query_data.example.clone() else {
            return Ok(());
        };
        if let Some(graph) = self.dom.by_id(GRAPH_CONTROL) {
            self.dom.set_selected_index(graph, Some(example.graph));
        }
        self.graph_change(example.graph)?;
        for (id, value) in &example.boundary {
            if let Some(node) = self.dom.by_id(id) {
                self.dom.set_value(node, value)?;
            }
        }
        Ok(())
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.dom.by_id(id).map(|node| self.dom.value(node))
    }

    pub fn options(&self, id: &str) -> Vec<(String, String)> {
        self.dom
            .by_id(id)
            .map(|node| self.dom.options(node))
            .unwrap_or_default()
    }

    pub fn selected_index(&self, id: &str) -> Option<usize> {
        self.dom
            .by_id(id)
            .and_then(|node| self.dom.selected_index(node))
    }

    pub fn style(&self, id: &str, property: &str) -> Option<String> {
        self.dom
            .by_id(id)
            .and_then(|node| self.dom.style_get(node, property))
    }

    pub fn assert_value(&self, id: &str, expected: &str) -> Result<()> {
        let actual = self.value(id).unwrap_or_default();
        self.check(id, expected.to_string(), actual)
    }

    pub fn assert_options(&self, id: &str, expected: &[(&str, &str)]) -> Result<()> {
        let expected = format_options(expected.iter().map(|(text, value)| (*text, *value)));
        let options = self.options(id);
        let actual = format_options(
            options
                .iter()
                .map(|(text, value)| (text.as_str(), value.as_str())),
        );
        self.check(id, expected, actual)
    }

    pub fn assert_selected_index(&self, id: &str, expected: Option<usize>) -> Result<()> {
        let actual = self.selected_index(id);
        self.check(id, format!("{expected:?}"), format!("{actual:?}"))
    }

    pub fn assert_style(&self, id: &str, property: &str, expected: &str) -> Result<()> {
        let actual = self.style(id, property).unwrap_or_default();
        self.check(&format!("{id}.style.{property}"), expected.to_string(), actual)
    }

    fn check(&self, target: &str, expected: String, actual: String) -> Result<()> {
        if actual == expected {
            return Ok(());
        }
        let element_id = target.split('.').next().unwrap_or(target);
        let dom_snippet = self
            .dom
            .by_id(element_id)
            .map(|node| truncate_chars(&self.dom.dump_node(node), 200))
            .unwrap_or_else(|| "<missing>".to_string());
        Err(Error::AssertionFailed {
            target: target.to_string(),
            expected,
            actual,
            dom_snippet,
        })
    }
}

fn format_options<'a>(options: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    options
        .map(|(text, value)| format!("{text}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}
