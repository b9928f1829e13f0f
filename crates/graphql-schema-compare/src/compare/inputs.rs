use crate::{
    change::{describe, path},
    match_sequences,
    state::DiffState,
    type_ref::{is_breaking_change, type_equals, Position},
    value::{render, value_equals},
    Change, ChangeKind, Correspondence, FieldDeclaration, Level, TypeDeclaration,
};

pub(super) fn compare_input_object(source: &TypeDeclaration, target: &TypeDeclaration, state: &mut DiffState<'_>) {
    let type_name = &source.name;
    let Correspondence { added, removed, common } =
        match_sequences(&source.fields, &target.fields, |a, b| a.name == b.name);

    for field in added {
        let path = path([type_name, &field.name]);
        let message = format!("Input field '{}' was added to input object type '{type_name}'", field.name);

        let change = if field.is_required() {
            Change::breaking(ChangeKind::InputFieldAdded, path, message).with_reason(
                "Adding a non-null field without a default value to an existing input type will cause existing queries that use this input type to error.",
            )
        } else {
            Change::non_breaking(ChangeKind::InputFieldAdded, path, message)
        };

        state.report(change);
    }

    for field in removed {
        state.report(
            Change::breaking(
                ChangeKind::InputFieldRemoved,
                path([type_name, &field.name]),
                format!("Input field '{}' was removed from input object type '{type_name}'", field.name),
            )
            .with_reason("Removing an input field will cause existing queries that use this input field to error."),
        );
    }

    for (source_field, target_field) in common {
        compare_input_field(type_name, source_field, target_field, state);
    }
}

fn compare_input_field(
    type_name: &str,
    source: &FieldDeclaration,
    target: &FieldDeclaration,
    state: &mut DiffState<'_>,
) {
    let field_path = path([type_name, &source.name]);

    if source.description != target.description {
        state.report(Change::non_breaking(
            ChangeKind::InputFieldDescriptionChanged,
            field_path.clone(),
            format!(
                "Input field '{field_path}' description changed from '{}' to '{}'",
                describe(source.description.as_deref()),
                describe(target.description.as_deref()),
            ),
        ));
    }

    if !type_equals(Some(&source.ty), Some(&target.ty)) {
        let level = if is_breaking_change(Some(&source.ty), Some(&target.ty), Position::Input) {
            Level::Breaking
        } else {
            Level::NonBreaking
        };

        state.report(Change::new(
            ChangeKind::InputFieldTypeChanged,
            level,
            field_path.clone(),
            format!(
                "Input field '{field_path}' changed type from '{}' to '{}'",
                source.ty, target.ty
            ),
        ));
    }

    let (source_default, target_default) = (source.default_value.as_ref(), target.default_value.as_ref());

    if !value_equals(source_default, target_default) {
        state.report(
            Change::dangerous(
                ChangeKind::InputFieldDefaultValueChanged,
                field_path.clone(),
                format!(
                    "Input field '{field_path}' default value changed from '{}' to '{}'",
                    render(source_default),
                    render(target_default),
                ),
            )
            .with_reason(
                "Changing the default value for an input field may change the runtime behaviour of a field if it was never provided.",
            ),
        );
    }
}
