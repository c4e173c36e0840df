use super::*;

/// Propagates master selections into their dependent controls.
///
/// A `Cascade` is built for one handler invocation: it borrows the read-only
/// [`ClientState`] and the document it mutates, and optionally a trace log.
pub struct Cascade<'a> {
    state: &'a ClientState,
    dom: &'a mut Dom,
    trace: Option<&'a mut TraceLog>,
}

impl<'a> Cascade<'a> {
    pub fn new(state: &'a ClientState, dom: &'a mut Dom) -> Self {
        Self {
            state,
            dom,
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: &'a mut TraceLog) -> Self {
        self.trace = Some(trace);
        self
    }

    fn trace_line(&mut self, line: String) {
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.line(line);
        }
    }

    pub fn set_property(&mut self, update: &PropertyUpdate) -> Result<()> {
        self.dom.set_property(update)
    }

    pub fn set_selection(&mut self, query: &QueryDescriptor) {
        self.dom.set_selection(query);
    }

    /// Selects every resolved option and cascades from its owning select.
    /// Several matches cascade in document order, so the last one wins.
    pub fn set_master(&mut self, query: &QueryDescriptor) -> Result<()> {
        for node in self.dom.resolve(query) {
            if !self.dom.is_option(node) {
                continue;
            }
            self.dom.select_option(node);
            let Some(select) = self.dom.owning_select(node) else {
                continue;
            };
            let Some(control_id) = self.dom.attr(select, "id").filter(|id| !id.is_empty()) else {
                continue;
            };
            let Some(index) = self.dom.option_index(node) else {
                continue;
            };
            self.propagate(&control_id, index)?;
        }
        Ok(())
    }

    /// Rebuilds every dependent of `control_id`'s option `index` and applies
    /// its property updates.
    pub fn propagate(&mut self, control_id: &str, index: usize) -> Result<()> {
        let state = self.state;
        let option = state.master_option(control_id, index).ok_or_else(|| {
            Error::MasterOptionNotFound {
                control_id: control_id.to_string(),
                index,
            }
        })?;
        self.trace_line(format!(
            "[cascade] {control_id}[{index}] value={} subs={} props={}",
            option.value,
            option.sub_selections.len(),
            option.properties.len()
        ));

        for sub in &option.sub_selections {
            self.rebuild_sub_selection(sub)?;
        }
        for update in &option.properties {
            self.dom.set_property(update)?;
        }
        Ok(())
    }

    fn rebuild_sub_selection(&mut self, sub: &SubSelectionUpdate) -> Result<()> {
        let Some(node) = self.dom.by_id(&sub.id) else {
            self.trace_line(format!("[cascade] skip missing #{}", sub.id));
            return Ok(());
        };

        let previous = self.dom.value(node);
        self.dom.remove_children(node)?;
        for option in &sub.options {
            self.append_option_last(node, option)?;
        }
        self.dom.select_by_value(node, &previous);

        self.trace_line(format!(
            "[cascade] rebuilt #{} options={} kept={}",
            sub.id,
            sub.options.len(),
            !previous.is_empty() && self.dom.value(node) == previous
        ));
        Ok(())
    }

    /// Select-aware insertion first; plain child append when the target
    /// refuses it. A failing fallback is returned to the caller.
    fn append_option_last(&mut self, target: NodeId, spec: &OptionSpec) -> Result<()> {
        let option = self.dom.create_option(&spec.text, &spec.value);
        if let Err(err) = self.dom.add_option(target, option) {
            self.trace_line(format!("[cascade] add fallback: {err}"));
            self.dom.append_child(target, option)?;
        }
        Ok(())
    }

    /// Repopulates every master control from configuration, selects its first
    /// option and cascades from it.
    pub fn synchronize_all(&mut self) -> Result<()> {
        let state = self.state;
        for (control_id, master) in &state.master_selections {
            let Some(node) = self.dom.by_id(control_id) else {
                self.trace_line(format!("[cascade] skip missing master #{control_id}"));
                continue;
            };
            self.dom.remove_children(node)?;
            for option in &master.options {
                self.append_option_last(node, &OptionSpec::new(&option.text, &option.value))?;
            }
            self.dom.set_selected_index(node, Some(0));
            if master.options.is_empty() {
                continue;
            }
            self.propagate(control_id, 0)?;
        }
        Ok(())
    }

    /// Re-establishes the display form state: base properties, a full
    /// synchronization, then explicit master and plain selections on top.
    pub fn update_display_options(&mut self) -> Result<()> {
        let state = self.state;
        let settings = &state.form_settings;
        self.trace_line(format!(
            "[reset] display props={} masters={} selections={}",
            settings.properties.len(),
            settings.masters.len(),
            settings.selections.len()
        ));

        for update in &settings.properties {
            self.dom.set_property(update)?;
        }
        self.synchronize_all()?;
        for query in &settings.masters {
            self.set_master(query)?;
        }
        for query in &settings.selections {
            self.dom.set_selection(query);
        }
        Ok(())
    }
}
