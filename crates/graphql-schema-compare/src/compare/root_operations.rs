use crate::{state::DiffState, Change, ChangeKind, RootOperation, SchemaGraph};

struct RootOperationKinds {
    added: Option<ChangeKind>,
    changed: ChangeKind,
    removed: Option<ChangeKind>,
}

// A schema always has a query root, so only a renamed one is reported.
fn kinds(operation: RootOperation) -> RootOperationKinds {
    match operation {
        RootOperation::Query => RootOperationKinds {
            added: None,
            changed: ChangeKind::SchemaQueryTypeChanged,
            removed: None,
        },
        RootOperation::Mutation => RootOperationKinds {
            added: Some(ChangeKind::SchemaMutationTypeAdded),
            changed: ChangeKind::SchemaMutationTypeChanged,
            removed: Some(ChangeKind::SchemaMutationTypeRemoved),
        },
        RootOperation::Subscription => RootOperationKinds {
            added: Some(ChangeKind::SchemaSubscriptionTypeAdded),
            changed: ChangeKind::SchemaSubscriptionTypeChanged,
            removed: Some(ChangeKind::SchemaSubscriptionTypeRemoved),
        },
    }
}

pub(super) fn compare_root_operations(source: &SchemaGraph, target: &SchemaGraph, state: &mut DiffState<'_>) {
    for operation in [RootOperation::Query, RootOperation::Mutation, RootOperation::Subscription] {
        let kinds = kinds(operation);

        match (source.root_operation(operation), target.root_operation(operation)) {
            (Some(source_root), Some(target_root)) if source_root != target_root => {
                state.report(Change::breaking(
                    kinds.changed,
                    source_root.to_owned(),
                    format!("Schema {operation} type has changed from '{source_root}' to '{target_root}'."),
                ));
            }
            (Some(source_root), None) => {
                if let Some(kind) = kinds.removed {
                    state.report(Change::breaking(
                        kind,
                        source_root.to_owned(),
                        format!("Schema {operation} type was removed."),
                    ));
                }
            }
            (None, Some(target_root)) => {
                if let Some(kind) = kinds.added {
                    state.report(Change::non_breaking(
                        kind,
                        target_root.to_owned(),
                        format!("Schema {operation} type '{target_root}' was added."),
                    ));
                }
            }
            _ => (),
        }
    }
}
