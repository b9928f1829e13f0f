use crate::{
    cli_input::{CompareCommand, InputFormat, OutputFormat},
    errors::CliError,
    output::report,
};
use graphql_schema_compare::{diff_with_config, DiffConfig};
use std::{fs, path::Path};

/// Returns whether the `--fail-on` threshold was reached.
pub(crate) fn compare(command: CompareCommand) -> Result<bool, CliError> {
    let CompareCommand {
        source,
        target,
        input_format,
        output_format,
        fail_on,
        ignore_descriptions,
        verbose_additions,
    } = command;

    let (source_sdl, target_sdl) = match input_format {
        InputFormat::Sdl => (read_schema(&source)?, read_schema(&target)?),
    };

    let config = DiffConfig::default()
        .with_additions_inside_type_definitions(verbose_additions)
        .with_description_changes(!ignore_descriptions);

    let result = diff_with_config(&source_sdl, &target_sdl, config)?;

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        changes = result.len(),
        "compared schemas"
    );

    match output_format {
        OutputFormat::Txt => {
            report::changes_table(&result);
            report::summary(&result);
        }
        OutputFormat::Json => report::changes_json(&result)?,
    }

    Ok(fail_on.is_reached_by(&result))
}

fn read_schema(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|error| CliError::ReadSchema(path.to_owned(), error))
}
