use crate::{Change, Level};

/// The changes detected by one comparison, bucketed by severity. Within a bucket, changes keep
/// the order they were detected in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffResult {
    breaking: Vec<Change>,
    dangerous: Vec<Change>,
    non_breaking: Vec<Change>,
}

impl DiffResult {
    pub(crate) fn push(&mut self, change: Change) {
        match change.severity.level {
            Level::Breaking => self.breaking.push(change),
            Level::Dangerous => self.dangerous.push(change),
            Level::NonBreaking => self.non_breaking.push(change),
        }
    }

    /// Changes which are not backward compatible.
    pub fn breaking(&self) -> &[Change] {
        &self.breaking
    }

    /// Changes which may break some clients, depending on how they use the schema.
    pub fn dangerous(&self) -> &[Change] {
        &self.dangerous
    }

    /// Changes which are backward compatible.
    pub fn non_breaking(&self) -> &[Change] {
        &self.non_breaking
    }

    /// All changes: breaking first, then dangerous, then non-breaking.
    pub fn changes(&self) -> impl Iterator<Item = &Change> + '_ {
        self.breaking
            .iter()
            .chain(self.dangerous.iter())
            .chain(self.non_breaking.iter())
    }

    /// Same order as [DiffResult::changes()].
    pub fn into_changes(self) -> Vec<Change> {
        let DiffResult {
            mut breaking,
            dangerous,
            non_breaking,
        } = self;

        breaking.extend(dangerous);
        breaking.extend(non_breaking);
        breaking
    }

    /// Total number of changes.
    pub fn len(&self) -> usize {
        self.breaking.len() + self.dangerous.len() + self.non_breaking.len()
    }

    /// True when the two schemas are equivalent.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when at least one change is breaking.
    pub fn has_breaking_changes(&self) -> bool {
        !self.breaking.is_empty()
    }

    /// The worst level among all changes, if any.
    pub fn worst_level(&self) -> Option<Level> {
        [Level::Breaking, Level::Dangerous, Level::NonBreaking]
            .into_iter()
            .find(|level| !self.bucket(*level).is_empty())
    }

    fn bucket(&self, level: Level) -> &[Change] {
        match level {
            Level::Breaking => &self.breaking,
            Level::Dangerous => &self.dangerous,
            Level::NonBreaking => &self.non_breaking,
        }
    }
}
