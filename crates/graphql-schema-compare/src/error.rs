use crate::{RootOperation, TypeKind};
use std::fmt;

/// Errors raised while turning schema text into a [crate::SchemaGraph].
///
/// Differences between the two schemas are never errors: they are reported as
/// [crate::Change]s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The schema is not valid SDL.
    #[error("unable to parse schema: {0}")]
    Parse(#[from] async_graphql_parser::Error),
    /// The schema definition declares the same root operation twice.
    #[error("root type '{0}' already exists")]
    DuplicateRootOperation(RootOperation),
    /// Two directive definitions share a name.
    #[error("directive '{0}' already exists")]
    DuplicateDirective(String),
    /// Two type definitions share a name.
    #[error("{kind} type '{name}' already exists")]
    DuplicateType {
        /// The kind of the second definition.
        kind: TypeKind,
        /// The duplicated name.
        name: String,
    },
    /// One of the two compared schemas could not be processed.
    #[error("unable to process {side} schema: {source}")]
    Schema {
        /// Which schema failed.
        side: SchemaSide,
        /// What went wrong.
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn in_schema(self, side: SchemaSide) -> Self {
        Error::Schema {
            side,
            source: Box::new(self),
        }
    }
}

/// The two sides of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSide {
    /// The schema being compared from, usually the one currently deployed.
    Source,
    /// The schema being compared to, usually the proposed one.
    Target,
}

impl fmt::Display for SchemaSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchemaSide::Source => "source",
            SchemaSide::Target => "target",
        })
    }
}
