use super::*;

const DEFAULT_TRACE_LOG_LIMIT: usize = 10_000;

/// Bounded buffer of trace lines recorded while the cascade runs.
///
/// Every line goes to the `log` facade at debug level; buffering (and the
/// optional stderr echo) only happens after [`TraceLog::enable`].
#[derive(Debug, Clone)]
pub struct TraceLog {
    enabled: bool,
    to_stderr: bool,
    limit: usize,
    lines: Vec<String>,
}

impl Default for TraceLog {
    fn default() -> Self {
        Self {
            enabled: false,
            to_stderr: false,
            limit: DEFAULT_TRACE_LOG_LIMIT,
            lines: Vec::new(),
        }
    }
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_stderr(&mut self, enabled: bool) {
        self.to_stderr = enabled;
    }

    pub fn set_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidArgument(
                "trace log limit requires at least 1 entry".into(),
            ));
        }
        self.limit = max_entries;
        if self.lines.len() > self.limit {
            let excess = self.lines.len() - self.limit;
            self.lines.drain(..excess);
        }
        Ok(())
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub(crate) fn line(&mut self, line: String) {
        log::debug!(target: "select_cascade", "{line}");
        if !self.enabled {
            return;
        }
        if self.to_stderr {
            eprintln!("{line}");
        }
        if self.lines.len() >= self.limit {
            self.lines.remove(0);
        }
        self.lines.push(line);
    }
}
