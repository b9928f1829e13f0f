/// Options for configuring the behavior of [crate::diff_with_config()] and
/// [crate::compare_schemas_with_config()].
#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub(crate) additions_inside_type_definitions: bool,
    pub(crate) description_changes: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        DiffConfig {
            additions_inside_type_definitions: false,
            description_changes: true,
        }
    }
}

impl DiffConfig {
    /// Also emit [crate::Change]s for the contents of added types: fields and implemented
    /// interfaces of added objects, fields of added interfaces and input objects, values of added
    /// enums and members of added unions. These changes cannot affect existing clients, so they
    /// are always [crate::Level::NonBreaking].
    pub fn with_additions_inside_type_definitions(mut self, verbose_additions: bool) -> Self {
        self.additions_inside_type_definitions = verbose_additions;
        self
    }

    /// Emit [crate::Change]s for changed descriptions. Enabled by default.
    pub fn with_description_changes(mut self, description_changes: bool) -> Self {
        self.description_changes = description_changes;
        self
    }
}
