use crate::{change::path, match_sequences, state::DiffState, Change, ChangeKind, TypeDeclaration};

pub(super) fn compare_union(source: &TypeDeclaration, target: &TypeDeclaration, state: &mut DiffState<'_>) {
    let name = &source.name;
    let members = match_sequences(&source.members, &target.members, |a, b| a == b);

    for member in members.added {
        state.report(
            Change::dangerous(
                ChangeKind::UnionMemberAdded,
                path([name, member]),
                format!("Union member '{member}' was added to union type '{name}'"),
            )
            .with_reason(
                "Adding a possible type to Unions may break existing clients that were not programming defensively against a new possible type.",
            ),
        );
    }

    for member in members.removed {
        state.report(
            Change::breaking(
                ChangeKind::UnionMemberRemoved,
                path([name, member]),
                format!("Union member '{member}' was removed from union type '{name}'"),
            )
            .with_reason(
                "Removing a union member from a union can cause existing queries that use this union member in a fragment spread to error.",
            ),
        );
    }
}
