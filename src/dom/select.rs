use super::*;

impl Dom {
    pub(crate) fn is_select(&self, node_id: NodeId) -> bool {
        self.has_tag(node_id, "select")
    }

    pub(crate) fn is_option(&self, node_id: NodeId) -> bool {
        self.has_tag(node_id, "option")
    }

    fn is_multiple_select(&self, select_node: NodeId) -> bool {
        self.element(select_node)
            .map(|element| element.attrs.contains_key("multiple"))
            .unwrap_or(false)
    }

    /// `<option>` descendants of a select in tree order (optgroups included).
    pub(crate) fn select_options(&self, select_node: NodeId) -> Vec<NodeId> {
        if !self.is_select(select_node) {
            return Vec::new();
        }
        self.descendant_elements(select_node)
            .into_iter()
            .filter(|node| self.is_option(*node))
            .collect()
    }

    pub(crate) fn owning_select(&self, option_node: NodeId) -> Option<NodeId> {
        self.find_ancestor_by_tag(option_node, "select")
    }

    pub(crate) fn option_index(&self, option_node: NodeId) -> Option<usize> {
        let select = self.owning_select(option_node)?;
        self.select_options(select)
            .iter()
            .position(|candidate| *candidate == option_node)
    }

    pub(crate) fn option_value(&self, option_node: NodeId) -> String {
        if let Some(value) = self.attr(option_node, "value") {
            return value;
        }
        self.option_text(option_node)
    }

    pub(crate) fn option_text(&self, option_node: NodeId) -> String {
        self.text_content(option_node)
            .split_ascii_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn option_selected(&self, option_node: NodeId) -> bool {
        self.element(option_node)
            .map(|element| element.selected)
            .unwrap_or(false)
    }

    fn set_option_selected(&mut self, option_node: NodeId, selected: bool) {
        if let Some(element) = self.element_mut(option_node) {
            element.selected = selected;
        }
    }

    /// `(text, value)` of every option of a select; empty for anything else.
    pub fn options(&self, select_node: NodeId) -> Vec<(String, String)> {
        self.select_options(select_node)
            .into_iter()
            .map(|option| (self.option_text(option), self.option_value(option)))
            .collect()
    }

    /// Index of the first selected option, `None` when nothing is selected.
    pub fn selected_index(&self, select_node: NodeId) -> Option<usize> {
        self.select_options(select_node)
            .iter()
            .position(|option| self.option_selected(*option))
    }

    pub(crate) fn select_value(&self, select_node: NodeId) -> String {
        self.select_options(select_node)
            .into_iter()
            .find(|option| self.option_selected(*option))
            .map(|option| self.option_value(option))
            .unwrap_or_default()
    }

    /// Out-of-range indices (and `None`) leave the select with no selection.
    pub(crate) fn set_selected_index(&mut self, select_node: NodeId, index: Option<usize>) {
        let options = self.select_options(select_node);
        for (position, option) in options.into_iter().enumerate() {
            self.set_option_selected(option, Some(position) == index);
        }
    }

    pub(crate) fn set_select_value(&mut self, select_node: NodeId, requested: &str) {
        let options = self.select_options(select_node);
        let matched = options
            .iter()
            .copied()
            .find(|option| self.option_value(*option) == requested);
        for option in options {
            self.set_option_selected(option, Some(option) == matched);
        }
    }

    /// Selects every option whose value is exactly `value`, the empty value
    /// included. Matches apply in tree order, so a single select keeps the
    /// last one.
    pub(crate) fn select_by_value(&mut self, select_node: NodeId, value: &str) {
        for option in self.select_options(select_node) {
            if self.option_value(option) == value {
                self.select_option(option);
            }
        }
    }

    /// Marks an option selected. Single selects drop their other selections,
    /// `multiple` selects keep them.
    pub(crate) fn select_option(&mut self, option_node: NodeId) {
        if !self.is_option(option_node) {
            return;
        }
        self.set_option_selected(option_node, true);
        let Some(select) = self.owning_select(option_node) else {
            return;
        };
        if self.is_multiple_select(select) {
            return;
        }
        for option in self.select_options(select) {
            if option != option_node {
                self.set_option_selected(option, false);
            }
        }
    }

    /// Selectedness rules for single selects: at most one selected option
    /// (the last one wins) and, when none is selected, the first enabled option.
    pub(crate) fn normalize_select_selectedness(&mut self, select_node: NodeId) {
        if !self.is_select(select_node) || self.is_multiple_select(select_node) {
            return;
        }
        let options = self.select_options(select_node);
        let selected = options
            .iter()
            .copied()
            .filter(|option| self.option_selected(*option))
            .collect::<Vec<_>>();

        if let Some((keep, rest)) = selected.split_last() {
            for option in rest {
                self.set_option_selected(*option, false);
            }
            self.set_option_selected(*keep, true);
            return;
        }

        let first_enabled = options.into_iter().find(|option| {
            self.element(*option)
                .map(|element| !element.disabled)
                .unwrap_or(false)
        });
        if let Some(option) = first_enabled {
            self.set_option_selected(option, true);
        }
    }

    pub(crate) fn create_option(&mut self, text: &str, value: &str) -> NodeId {
        let option = self.create_detached_element("option");
        if let Some(element) = self.element_mut(option) {
            element.attrs.insert("value".to_string(), value.to_string());
        }
        if !text.is_empty() {
            self.create_text(option, text.to_string());
        }
        option
    }

    /// Select-aware insertion of an option as the last item of `select_node`.
    pub(crate) fn add_option(&mut self, select_node: NodeId, option_node: NodeId) -> Result<()> {
        if !self.is_select(select_node) {
            return Err(Error::DomMutation("add target is not a select".into()));
        }
        if !self.is_option(option_node) {
            return Err(Error::DomMutation("add node is not an option".into()));
        }
        self.append_child(select_node, option_node)?;
        self.normalize_select_selectedness(select_node);
        Ok(())
    }
}
