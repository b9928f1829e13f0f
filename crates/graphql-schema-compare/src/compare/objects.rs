use super::fields::{compare_output_fields, OBJECT_FIELDS};
use crate::{change::path, match_sequences, state::DiffState, Change, ChangeKind, TypeDeclaration};

pub(super) fn compare_object(source: &TypeDeclaration, target: &TypeDeclaration, state: &mut DiffState<'_>) {
    let name = &source.name;
    let interfaces = match_sequences(&source.interfaces, &target.interfaces, |a, b| a == b);

    for interface in interfaces.added {
        state.report(
            Change::dangerous(
                ChangeKind::ObjectTypeInterfaceAdded,
                path([name, interface]),
                format!("'{name}' object type implements interface '{interface}'"),
            )
            .with_reason(
                "Adding an interface to an object type may break existing clients that were not programming defensively against a new possible type.",
            ),
        );
    }

    for interface in interfaces.removed {
        state.report(
            Change::breaking(
                ChangeKind::ObjectTypeInterfaceRemoved,
                path([name, interface]),
                format!("'{name}' object type no longer implements interface '{interface}'"),
            )
            .with_reason(
                "Removing an interface from an object type can cause existing queries that use this in a fragment spread to error.",
            ),
        );
    }

    compare_output_fields(&OBJECT_FIELDS, source, target, state);
}
