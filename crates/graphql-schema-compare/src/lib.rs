//! Compare two GraphQL schemas and classify every difference by its impact on existing clients.
//!
//! The intended workflow is the following:
//!
//! - Parse the two schemas into [SchemaGraph]s, with [SchemaGraph::parse()] or
//!   [SchemaGraph::from_document()].
//! - Compare them with [compare_schemas()], which returns a [DiffResult] where each [Change] is
//!   [Level::Breaking], [Level::Dangerous] or [Level::NonBreaking].
//!
//! [diff()] does both steps from SDL strings.

#![cfg_attr(test, allow(unused_crate_dependencies))]
#![deny(missing_docs)]

mod change;
mod compare;
mod correspondence;
mod diff_config;
mod error;
mod result;
mod schema;
mod state;
mod type_ref;
mod value;

pub use change::{Change, ChangeKind, Level, Severity};
pub use compare::{compare_schemas, compare_schemas_with_config};
pub use correspondence::{match_maps, match_sequences, Correspondence};
pub use diff_config::DiffConfig;
pub use error::{Error, SchemaSide};
pub use result::DiffResult;
pub use schema::{
    ArgumentDeclaration, DirectiveDeclaration, EnumValueDeclaration, FieldDeclaration, RootOperation, SchemaGraph,
    TypeDeclaration, TypeKind,
};
pub use type_ref::{is_breaking_change, type_equals, Position, TypeReference};
pub use value::{value_equals, Value};

/// Diff two GraphQL schemas in SDL with the default [DiffConfig].
pub fn diff(source: &str, target: &str) -> Result<DiffResult, Error> {
    diff_with_config(source, target, DiffConfig::default())
}

/// Diff two GraphQL schemas in SDL.
///
/// Errors name the schema they come from: see [Error::Schema].
pub fn diff_with_config(source: &str, target: &str, config: DiffConfig) -> Result<DiffResult, Error> {
    let _span = tracing::debug_span!("diff").entered();

    let source = SchemaGraph::parse(source).map_err(|err| err.in_schema(SchemaSide::Source))?;
    let target = SchemaGraph::parse(target).map_err(|err| err.in_schema(SchemaSide::Target))?;

    Ok(compare_schemas_with_config(&source, &target, &config))
}
