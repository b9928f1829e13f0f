use super::{enums, fields, inputs, objects, unions};
use crate::{
    change::describe, match_maps, state::DiffState, Change, ChangeKind, Correspondence, TypeDeclaration, TypeKind,
};
use std::collections::BTreeMap;

pub(super) fn compare_types(
    source: &BTreeMap<String, TypeDeclaration>,
    target: &BTreeMap<String, TypeDeclaration>,
    state: &mut DiffState<'_>,
) {
    let Correspondence { added, removed, common } = match_maps(source, target);

    for ty in added {
        state.report(Change::non_breaking(
            ChangeKind::TypeAdded,
            ty.name.clone(),
            format!("Type '{}' was added", ty.name),
        ));

        if state.config().additions_inside_type_definitions {
            let shell = ty.shell();
            state.inside_added_type(|state| compare_type_contents(&shell, ty, state));
        }
    }

    for ty in removed {
        state.report(
            Change::breaking(ChangeKind::TypeRemoved, ty.name.clone(), format!("Type '{}' was removed", ty.name))
                .with_reason(
                    "Removing a type is a breaking change. It is preferable to deprecate and remove all references to this type first.",
                ),
        );
    }

    for (source_type, target_type) in common {
        compare_type(source_type, target_type, state);
    }
}

fn compare_type(source: &TypeDeclaration, target: &TypeDeclaration, state: &mut DiffState<'_>) {
    let name = &source.name;

    if source.description != target.description {
        state.report(Change::non_breaking(
            ChangeKind::TypeDescriptionChanged,
            name.clone(),
            format!(
                "Description on type '{name}' has changed from '{}' to '{}'",
                describe(source.description.as_deref()),
                describe(target.description.as_deref()),
            ),
        ));
    }

    if source.kind != target.kind {
        state.report(
            Change::breaking(
                ChangeKind::TypeKindChanged,
                name.clone(),
                format!("'{name}' kind changed from '{}' to '{}'", source.kind, target.kind),
            )
            .with_reason(
                "Changing the kind of a type is a breaking change because it can cause existing queries to error. For example, turning an object type to a scalar type would break queries that define a selection set for this type.",
            ),
        );
        return;
    }

    compare_type_contents(source, target, state);
}

// Both declarations share the same kind.
fn compare_type_contents(source: &TypeDeclaration, target: &TypeDeclaration, state: &mut DiffState<'_>) {
    match source.kind {
        TypeKind::Scalar => (),
        TypeKind::Object => objects::compare_object(source, target, state),
        TypeKind::Interface => fields::compare_output_fields(&fields::INTERFACE_FIELDS, source, target, state),
        TypeKind::Union => unions::compare_union(source, target, state),
        TypeKind::Enum => enums::compare_enum(source, target, state),
        TypeKind::InputObject => inputs::compare_input_object(source, target, state),
    }
}
