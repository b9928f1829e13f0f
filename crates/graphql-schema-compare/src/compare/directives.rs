use super::arguments::{compare_arguments, ArgumentKinds};
use crate::{
    change::describe, match_maps, match_sequences, state::DiffState, Change, ChangeKind, Correspondence,
    DirectiveDeclaration,
};
use std::collections::BTreeMap;

const DIRECTIVE_ARGUMENTS: ArgumentKinds = ArgumentKinds {
    owner: "directive",
    added: ChangeKind::DirectiveArgumentAdded,
    removed: ChangeKind::DirectiveArgumentRemoved,
    description_changed: ChangeKind::DirectiveArgumentDescriptionChanged,
    default_value_changed: ChangeKind::DirectiveArgumentDefaultValueChanged,
    type_changed: ChangeKind::DirectiveArgumentTypeChanged,
};

pub(super) fn compare_directives(
    source: &BTreeMap<String, DirectiveDeclaration>,
    target: &BTreeMap<String, DirectiveDeclaration>,
    state: &mut DiffState<'_>,
) {
    let Correspondence { added, removed, common } = match_maps(source, target);

    for directive in added {
        state.report(Change::non_breaking(
            ChangeKind::DirectiveAdded,
            directive.name.clone(),
            format!("Directive '{}' was added", directive.name),
        ));
    }

    for directive in removed {
        state.report(Change::breaking(
            ChangeKind::DirectiveRemoved,
            directive.name.clone(),
            format!("Directive '{}' was removed", directive.name),
        ));
    }

    for (source_directive, target_directive) in common {
        compare_directive(source_directive, target_directive, state);
    }
}

fn compare_directive(source: &DirectiveDeclaration, target: &DirectiveDeclaration, state: &mut DiffState<'_>) {
    let name = &source.name;

    if source.description != target.description {
        state.report(Change::non_breaking(
            ChangeKind::DirectiveDescriptionChanged,
            name.clone(),
            format!(
                "Directive '{name}' description changed from '{}' to '{}'",
                describe(source.description.as_deref()),
                describe(target.description.as_deref()),
            ),
        ));
    }

    let locations = match_sequences(&source.locations, &target.locations, |a, b| a == b);

    for location in locations.added {
        state.report(Change::non_breaking(
            ChangeKind::DirectiveLocationAdded,
            name.clone(),
            format!("Location '{location}' was added to directive '{name}'"),
        ));
    }

    for location in locations.removed {
        state.report(Change::breaking(
            ChangeKind::DirectiveLocationRemoved,
            name.clone(),
            format!("Location '{location}' was removed from directive '{name}'"),
        ));
    }

    match (source.repeatable, target.repeatable) {
        (false, true) => state.report(Change::non_breaking(
            ChangeKind::DirectiveRepeatableAdded,
            name.clone(),
            format!("Directive '{name}' became repeatable"),
        )),
        (true, false) => state.report(
            Change::breaking(
                ChangeKind::DirectiveRepeatableRemoved,
                name.clone(),
                format!("Directive '{name}' is no longer repeatable"),
            )
            .with_reason("Documents applying the directive more than once at the same location will fail validation."),
        ),
        _ => (),
    }

    compare_arguments(&DIRECTIVE_ARGUMENTS, name, &source.arguments, &target.arguments, state);
}
