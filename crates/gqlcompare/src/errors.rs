use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// returned if a schema file cannot be read
    #[error("could not read the schema at {}: {}", .0.display(), .1)]
    ReadSchema(PathBuf, io::Error),
    /// wraps an error from the comparison, for example an invalid schema
    #[error(transparent)]
    Compare(#[from] graphql_schema_compare::Error),
    /// returned if the changes cannot be written as JSON
    #[error("could not serialize the changes: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// returns the appropriate hint for a [`CliError`]
    pub(crate) fn to_hint(&self) -> Option<&'static str> {
        match self {
            CliError::ReadSchema(_, error) if error.kind() == io::ErrorKind::NotFound => {
                Some("paths are resolved relative to the current directory")
            }
            CliError::Compare(graphql_schema_compare::Error::Schema { .. }) => {
                Some("both schemas must be valid GraphQL SDL without duplicate definitions")
            }
            _ => None,
        }
    }
}
