use super::*;

impl Dom {
    /// Current value of a control. Selects report their selected option's
    /// value, options their effective value. Non-elements read as `""`.
    pub fn value(&self, node_id: NodeId) -> String {
        let Some(element) = self.element(node_id) else {
            return String::new();
        };
        if is_tag(element, "select") {
            return self.select_value(node_id);
        }
        if is_tag(element, "option") {
            return self.option_value(node_id);
        }
        if is_checkbox_or_radio_input_element(element) && !element.attrs.contains_key("value") {
            return "on".to_string();
        }
        element.value.clone()
    }

    pub fn set_value(&mut self, node_id: NodeId, value: &str) -> Result<()> {
        if self.is_select(node_id) {
            self.set_select_value(node_id, value);
            return Ok(());
        }
        if self.is_option(node_id) {
            return self.set_attr(node_id, "value", value);
        }
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomMutation("value target is not an element".into()))?;
        if is_checkbox_or_radio_input_element(element) {
            element
                .attrs
                .insert("value".to_string(), value.to_string());
        }
        element.value = value.to_string();
        Ok(())
    }

    pub fn is_checked(&self, node_id: NodeId) -> bool {
        self.element(node_id)
            .map(|element| element.checked)
            .unwrap_or(false)
    }

    pub(crate) fn set_checked(&mut self, node_id: NodeId, checked: bool) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomMutation("checked target is not an element".into()))?;
        element.checked = checked;
        Ok(())
    }

    pub fn is_disabled(&self, node_id: NodeId) -> bool {
        self.element(node_id)
            .map(|element| element.disabled)
            .unwrap_or(false)
    }

    pub(crate) fn set_disabled(&mut self, node_id: NodeId, disabled: bool) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomMutation("disabled target is not an element".into()))?;
        element.disabled = disabled;
        Ok(())
    }

    /// Looks a form up by id, then by its `name` attribute.
    pub fn find_form(&self, key: &str) -> Option<NodeId> {
        if let Some(node) = self.by_id(key).filter(|node| self.has_tag(*node, "form")) {
            return Some(node);
        }
        self.descendant_elements(self.root).into_iter().find(|node| {
            self.has_tag(*node, "form") && self.attr(*node, "name").as_deref() == Some(key)
        })
    }

    /// Restores every control inside `form` to the default its markup declares.
    pub(crate) fn reset_form(&mut self, form: NodeId) -> Result<()> {
        let controls = self.descendant_elements(form);
        for control in controls {
            let Some(element) = self.element(control) else {
                continue;
            };

            if is_checkbox_or_radio_input_element(element) {
                let default_checked = element.attrs.contains_key("checked");
                self.set_checked(control, default_checked)?;
                continue;
            }

            if is_tag(element, "select") {
                for option in self.select_options(control) {
                    let default_selected = self.attr(option, "selected").is_some();
                    if let Some(option_element) = self.element_mut(option) {
                        option_element.selected = default_selected;
                    }
                }
                self.normalize_select_selectedness(control);
                continue;
            }

            if is_tag(element, "textarea") {
                let text = self.text_content(control);
                if let Some(element) = self.element_mut(control) {
                    element.value = text;
                }
                continue;
            }

            if is_tag(element, "input") {
                let default_value = element.attrs.get("value").cloned().unwrap_or_default();
                if let Some(element) = self.element_mut(control) {
                    element.value = default_value;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn initialize_form_control_values(&mut self) {
        for node in self.descendant_elements(self.root) {
            if self.has_tag(node, "textarea") {
                let text = self.text_content(node);
                if let Some(element) = self.element_mut(node) {
                    element.value = text;
                }
                continue;
            }
            if self.is_select(node) {
                self.normalize_select_selectedness(node);
            }
        }
    }
}
