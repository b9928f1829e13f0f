//! Fields of object and interface types. Both share the same rules and only differ by the change
//! kinds they report.

use super::arguments::{compare_arguments, ArgumentKinds};
use crate::{
    change::{describe, path},
    match_sequences,
    state::DiffState,
    type_ref::{is_breaking_change, type_equals, Position},
    Change, ChangeKind, Correspondence, FieldDeclaration, Level, TypeDeclaration,
};

pub(super) struct OutputFieldKinds {
    /// How the owner type is named in messages.
    owner: &'static str,
    added: ChangeKind,
    removed: ChangeKind,
    description_changed: ChangeKind,
    type_changed: ChangeKind,
    arguments: ArgumentKinds,
}

pub(super) const OBJECT_FIELDS: OutputFieldKinds = OutputFieldKinds {
    owner: "type",
    added: ChangeKind::ObjectTypeFieldAdded,
    removed: ChangeKind::ObjectTypeFieldRemoved,
    description_changed: ChangeKind::ObjectTypeFieldDescriptionChanged,
    type_changed: ChangeKind::ObjectTypeFieldTypeChanged,
    arguments: ArgumentKinds {
        owner: "field",
        added: ChangeKind::ObjectTypeFieldArgumentAdded,
        removed: ChangeKind::ObjectTypeFieldArgumentRemoved,
        description_changed: ChangeKind::ObjectTypeFieldArgumentDescriptionChanged,
        default_value_changed: ChangeKind::ObjectTypeFieldArgumentDefaultValueChanged,
        type_changed: ChangeKind::ObjectTypeFieldArgumentTypeChanged,
    },
};

pub(super) const INTERFACE_FIELDS: OutputFieldKinds = OutputFieldKinds {
    owner: "interface",
    added: ChangeKind::InterfaceTypeFieldAdded,
    removed: ChangeKind::InterfaceTypeFieldRemoved,
    description_changed: ChangeKind::InterfaceTypeFieldDescriptionChanged,
    type_changed: ChangeKind::InterfaceTypeFieldTypeChanged,
    arguments: ArgumentKinds {
        owner: "field",
        added: ChangeKind::InterfaceTypeFieldArgumentAdded,
        removed: ChangeKind::InterfaceTypeFieldArgumentRemoved,
        description_changed: ChangeKind::InterfaceTypeFieldArgumentDescriptionChanged,
        default_value_changed: ChangeKind::InterfaceTypeFieldArgumentDefaultValueChanged,
        type_changed: ChangeKind::InterfaceTypeFieldArgumentTypeChanged,
    },
};

pub(super) fn compare_output_fields(
    kinds: &OutputFieldKinds,
    source: &TypeDeclaration,
    target: &TypeDeclaration,
    state: &mut DiffState<'_>,
) {
    let type_name = &source.name;
    let Correspondence { added, removed, common } =
        match_sequences(&source.fields, &target.fields, |a, b| a.name == b.name);

    for field in added {
        state.report(Change::non_breaking(
            kinds.added,
            path([type_name, &field.name]),
            format!("Field '{}' was added to {} '{type_name}'", field.name, kinds.owner),
        ));
    }

    for field in removed {
        let reason = if field.deprecation.is_some() {
            "Removing a deprecated field is a breaking change. Before removing it, you may want to look at the field's usage to see the impact of removing the field."
        } else {
            "Removing a field is a breaking change. It is preferable to deprecate the field before removing it."
        };

        state.report(
            Change::breaking(
                kinds.removed,
                path([type_name, &field.name]),
                format!("Field '{}' was removed from {} '{type_name}'", field.name, kinds.owner),
            )
            .with_reason(reason),
        );
    }

    for (source_field, target_field) in common {
        compare_output_field(kinds, type_name, source_field, target_field, state);
    }
}

fn compare_output_field(
    kinds: &OutputFieldKinds,
    type_name: &str,
    source: &FieldDeclaration,
    target: &FieldDeclaration,
    state: &mut DiffState<'_>,
) {
    let field_path = path([type_name, &source.name]);

    if source.description != target.description {
        state.report(Change::non_breaking(
            kinds.description_changed,
            field_path.clone(),
            format!(
                "Field '{field_path}' description changed from '{}' to '{}'",
                describe(source.description.as_deref()),
                describe(target.description.as_deref()),
            ),
        ));
    }

    if !type_equals(Some(&source.ty), Some(&target.ty)) {
        let level = if is_breaking_change(Some(&source.ty), Some(&target.ty), Position::Output) {
            Level::Breaking
        } else {
            Level::NonBreaking
        };

        state.report(Change::new(
            kinds.type_changed,
            level,
            field_path.clone(),
            format!("Field '{field_path}' changed type from '{}' to '{}'", source.ty, target.ty),
        ));
    }

    compare_arguments(&kinds.arguments, &field_path, &source.arguments, &target.arguments, state);
}
