use crate::{
    change::{describe, path},
    match_sequences,
    state::DiffState,
    Change, ChangeKind, Correspondence, TypeDeclaration,
};

pub(super) fn compare_enum(source: &TypeDeclaration, target: &TypeDeclaration, state: &mut DiffState<'_>) {
    let name = &source.name;
    let Correspondence { added, removed, common } =
        match_sequences(&source.values, &target.values, |a, b| a.name == b.name);

    for value in added {
        state.report(
            Change::dangerous(
                ChangeKind::EnumValueAdded,
                path([name, &value.name]),
                format!("Enum value '{}' was added to enum '{name}'", value.name),
            )
            .with_reason(
                "Adding an enum value may break existing clients that were not programming defensively against an added case when querying an enum.",
            ),
        );
    }

    for value in removed {
        state.report(
            Change::breaking(
                ChangeKind::EnumValueRemoved,
                path([name, &value.name]),
                format!("Enum value '{}' was removed from enum '{name}'", value.name),
            )
            .with_reason("Removing an enum value will cause existing queries that use this enum value to error."),
        );
    }

    for (source_value, target_value) in common {
        if source_value.description != target_value.description {
            let value_path = path([name, &source_value.name]);

            state.report(Change::non_breaking(
                ChangeKind::EnumValueDescriptionChanged,
                value_path.clone(),
                format!(
                    "Enum value '{value_path}' description changed from '{}' to '{}'",
                    describe(source_value.description.as_deref()),
                    describe(target_value.description.as_deref()),
                ),
            ));
        }
    }
}
