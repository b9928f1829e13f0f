use crate::{Change, DiffConfig, DiffResult, Severity};

/// Accumulates the changes of a single comparison.
pub(crate) struct DiffState<'a> {
    config: &'a DiffConfig,
    result: DiffResult,
    inside_added_type: bool,
}

impl<'a> DiffState<'a> {
    pub(crate) fn new(config: &'a DiffConfig) -> Self {
        DiffState {
            config,
            result: DiffResult::default(),
            inside_added_type: false,
        }
    }

    pub(crate) fn config(&self) -> &DiffConfig {
        self.config
    }

    pub(crate) fn report(&mut self, mut change: Change) {
        if change.kind.is_description_change() && !self.config.description_changes {
            return;
        }

        if self.inside_added_type {
            change.severity = Severity::non_breaking();
        }

        tracing::trace!(
            path = change.path,
            kind = %change.kind,
            level = %change.severity.level,
            "detected change"
        );

        self.result.push(change);
    }

    /// Report the changes emitted by `f` as non-breaking: they describe the contents of a type
    /// that did not exist before, which no client can depend on.
    pub(crate) fn inside_added_type(&mut self, f: impl FnOnce(&mut Self)) {
        let previous = std::mem::replace(&mut self.inside_added_type, true);
        f(self);
        self.inside_added_type = previous;
    }

    pub(crate) fn into_result(self) -> DiffResult {
        self.result
    }
}
