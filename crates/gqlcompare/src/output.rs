pub(crate) mod report {
    use crate::errors::CliError;
    use colored::Colorize;
    use comfy_table::{presets::NOTHING, Cell, Color, Table};
    use graphql_schema_compare::{DiffResult, Level};

    /// reports an error to stderr
    pub(crate) fn error(error: &CliError) {
        eprintln!("{}", format!("error: {error}").bright_red());
        if let Some(hint) = error.to_hint() {
            eprintln!("{}", format!("hint: {hint}").bright_blue());
        }
    }

    /// prints the changes to stdout as an aligned table
    pub(crate) fn changes_table(result: &DiffResult) {
        if !result.is_empty() {
            println!("{}", table(result));
        }
    }

    /// prints the changes to stdout as a JSON array
    pub(crate) fn changes_json(result: &DiffResult) -> Result<(), CliError> {
        let changes = result.changes().collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&changes)?);
        Ok(())
    }

    /// reports how many changes of each severity were found to stderr
    pub(crate) fn summary(result: &DiffResult) {
        eprintln!("{}", summary_line(result));
    }

    pub(super) fn table(result: &DiffResult) -> Table {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(["PATH", "SEVERITY", "TYPE", "DESCRIPTION"]);

        for change in result.changes() {
            table.add_row([
                Cell::new(&change.path),
                Cell::new(change.level()).fg(level_color(change.level())),
                Cell::new(change.kind),
                Cell::new(&change.message),
            ]);
        }

        table
    }

    pub(super) fn summary_line(result: &DiffResult) -> String {
        if result.is_empty() {
            return "no changes detected".green().to_string();
        }

        format!(
            "{}, {} and {}",
            count(result.breaking().len(), "breaking").red(),
            count(result.dangerous().len(), "dangerous").yellow(),
            count(result.non_breaking().len(), "non-breaking").green(),
        )
    }

    fn count(count: usize, level: &str) -> String {
        match count {
            1 => format!("1 {level} change"),
            _ => format!("{count} {level} changes"),
        }
    }

    fn level_color(level: Level) -> Color {
        match level {
            Level::Breaking => Color::Red,
            Level::Dangerous => Color::Yellow,
            Level::NonBreaking => Color::Green,
        }
    }
}
