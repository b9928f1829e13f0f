use crate::{
    change::{describe, path},
    match_sequences,
    state::DiffState,
    type_ref::{is_breaking_change, type_equals, Position},
    value::{render, value_equals},
    ArgumentDeclaration, Change, ChangeKind, Correspondence, Level,
};

/// The change kinds reported for the arguments of one kind of owner.
pub(super) struct ArgumentKinds {
    /// How the owner is named in messages.
    pub(super) owner: &'static str,
    pub(super) added: ChangeKind,
    pub(super) removed: ChangeKind,
    pub(super) description_changed: ChangeKind,
    pub(super) default_value_changed: ChangeKind,
    pub(super) type_changed: ChangeKind,
}

/// Compare the arguments of a field or directive found at `owner_path`.
pub(super) fn compare_arguments(
    kinds: &ArgumentKinds,
    owner_path: &str,
    source: &[ArgumentDeclaration],
    target: &[ArgumentDeclaration],
    state: &mut DiffState<'_>,
) {
    let Correspondence { added, removed, common } = match_sequences(source, target, |a, b| a.name == b.name);
    let owner = format!("{} '{owner_path}'", kinds.owner);

    for argument in added {
        let message = format!("Argument '{}' was added to {owner}", argument.name);
        let path = path([owner_path, &argument.name]);

        let change = if argument.is_required() {
            Change::breaking(kinds.added, path, message).with_reason(&format!(
                "Adding a required argument to an existing {} is a breaking change because it will cause existing uses of this {} to error.",
                kinds.owner, kinds.owner
            ))
        } else {
            Change::non_breaking(kinds.added, path, message)
        };

        state.report(change);
    }

    for argument in removed {
        state.report(
            Change::breaking(
                kinds.removed,
                path([owner_path, &argument.name]),
                format!("Argument '{}' was removed from {owner}", argument.name),
            )
            .with_reason(&format!(
                "Removing an argument from a {} is a breaking change because it will cause existing uses of this argument to error.",
                kinds.owner
            )),
        );
    }

    for (source_argument, target_argument) in common {
        compare_argument(kinds, owner_path, &owner, source_argument, target_argument, state);
    }
}

fn compare_argument(
    kinds: &ArgumentKinds,
    owner_path: &str,
    owner: &str,
    source: &ArgumentDeclaration,
    target: &ArgumentDeclaration,
    state: &mut DiffState<'_>,
) {
    let path = path([owner_path, &source.name]);

    if source.description != target.description {
        state.report(Change::non_breaking(
            kinds.description_changed,
            path.clone(),
            format!(
                "Description for argument '{}' on {owner} changed from '{}' to '{}'",
                source.name,
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
            kinds.type_changed,
            level,
            path.clone(),
            format!(
                "Type for argument '{}' on {owner} changed from '{}' to '{}'",
                source.name, source.ty, target.ty
            ),
        ));
    }

    let (source_default, target_default) = (source.default_value.as_ref(), target.default_value.as_ref());

    if !value_equals(source_default, target_default) {
        let message = match (source_default, target_default) {
            (None, Some(value)) => format!("Default value '{value}' was added to argument '{}' on {owner}", source.name),
            (Some(value), None) => format!(
                "Default value '{value}' was removed from argument '{}' on {owner}",
                source.name
            ),
            _ => format!(
                "Default value for argument '{}' on {owner} changed from '{}' to '{}'",
                source.name,
                render(source_default),
                render(target_default),
            ),
        };

        state.report(Change::dangerous(kinds.default_value_changed, path, message).with_reason(&format!(
            "Changing the default value for an argument may change the runtime behaviour of a {} if it was never provided.",
            kinds.owner
        )));
    }
}
