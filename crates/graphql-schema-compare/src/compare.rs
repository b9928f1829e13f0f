//! Walks two [SchemaGraph]s side by side and reports every difference as a [crate::Change].

mod arguments;
mod directives;
mod enums;
mod fields;
mod inputs;
mod objects;
mod root_operations;
mod types;
mod unions;

use crate::{state::DiffState, DiffConfig, DiffResult, SchemaGraph};

/// Compare two schema graphs with the default [DiffConfig].
pub fn compare_schemas(source: &SchemaGraph, target: &SchemaGraph) -> DiffResult {
    compare_schemas_with_config(source, target, &DiffConfig::default())
}

/// Compare two schema graphs.
///
/// Root operations are compared first, then directives, then types. Directives and types are
/// visited in name order: added ones, removed ones, then the ones present in both schemas.
pub fn compare_schemas_with_config(source: &SchemaGraph, target: &SchemaGraph, config: &DiffConfig) -> DiffResult {
    let mut state = DiffState::new(config);

    root_operations::compare_root_operations(source, target, &mut state);
    directives::compare_directives(source.directives(), target.directives(), &mut state);
    types::compare_types(source.types(), target.types(), &mut state);

    let result = state.into_result();

    tracing::debug!(
        breaking = result.breaking().len(),
        dangerous = result.dangerous().len(),
        non_breaking = result.non_breaking().len(),
        "compared schemas"
    );

    result
}
