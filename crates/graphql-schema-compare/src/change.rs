/// A change that represents a meaningful difference between the two schemas. Changes have a
/// direction: from source to target. For example, if `kind` is `ObjectTypeFieldAdded`, the field
/// does not exist in the source schema but it does exist in the target schema.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Change {
    /// How the change impacts existing clients.
    pub severity: Severity,
    /// The rule that detected the change.
    pub kind: ChangeKind,
    /// Human readable description of the change.
    pub message: String,
    /// Where the change happened in the schema. It is dot separated where relevant. For example if
    /// the change happened in a field argument, the path will be something like
    /// `ParentTypeName.fieldName.argumentName`.
    pub path: String,
}

impl Change {
    pub(crate) fn new(kind: ChangeKind, level: Level, path: String, message: String) -> Self {
        Change {
            severity: Severity { level, reason: None },
            kind,
            message,
            path,
        }
    }

    pub(crate) fn breaking(kind: ChangeKind, path: String, message: String) -> Self {
        Self::new(kind, Level::Breaking, path, message)
    }

    pub(crate) fn dangerous(kind: ChangeKind, path: String, message: String) -> Self {
        Self::new(kind, Level::Dangerous, path, message)
    }

    pub(crate) fn non_breaking(kind: ChangeKind, path: String, message: String) -> Self {
        Self::new(kind, Level::NonBreaking, path, message)
    }

    pub(crate) fn with_reason(mut self, reason: &str) -> Self {
        self.severity.reason = Some(reason.to_owned());
        self
    }

    /// Shortcut for `self.severity.level`.
    pub fn level(&self) -> Level {
        self.severity.level
    }
}

/// The impact of a [Change], with an optional explanation.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Severity {
    /// Backward compatibility level.
    pub level: Level,
    /// Why this level was chosen, when it is not self-explanatory.
    pub reason: Option<String>,
}

impl Severity {
    pub(crate) fn non_breaking() -> Self {
        Severity {
            level: Level::NonBreaking,
            reason: None,
        }
    }
}

/// Backward compatibility of a change, from worst to harmless.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    /// Existing clients will error.
    Breaking,
    /// Some existing clients may error, depending on how they use the schema.
    Dangerous,
    /// Safe for all clients.
    NonBreaking,
}

/// The rule that fired. Renders as `SCREAMING_SNAKE_CASE`, e.g. `OBJECT_TYPE_FIELD_ADDED`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, strum::Display, strum::IntoStaticStr)]
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    SchemaQueryTypeChanged,
    SchemaMutationTypeAdded,
    SchemaMutationTypeChanged,
    SchemaMutationTypeRemoved,
    SchemaSubscriptionTypeAdded,
    SchemaSubscriptionTypeChanged,
    SchemaSubscriptionTypeRemoved,

    DirectiveAdded,
    DirectiveRemoved,
    DirectiveDescriptionChanged,
    DirectiveLocationAdded,
    DirectiveLocationRemoved,
    DirectiveRepeatableAdded,
    DirectiveRepeatableRemoved,
    DirectiveArgumentAdded,
    DirectiveArgumentRemoved,
    DirectiveArgumentDescriptionChanged,
    DirectiveArgumentDefaultValueChanged,
    DirectiveArgumentTypeChanged,

    TypeAdded,
    TypeRemoved,
    TypeKindChanged,
    TypeDescriptionChanged,

    ObjectTypeInterfaceAdded,
    ObjectTypeInterfaceRemoved,
    ObjectTypeFieldAdded,
    ObjectTypeFieldRemoved,
    ObjectTypeFieldDescriptionChanged,
    ObjectTypeFieldTypeChanged,
    ObjectTypeFieldArgumentAdded,
    ObjectTypeFieldArgumentRemoved,
    ObjectTypeFieldArgumentDescriptionChanged,
    ObjectTypeFieldArgumentDefaultValueChanged,
    ObjectTypeFieldArgumentTypeChanged,

    InterfaceTypeFieldAdded,
    InterfaceTypeFieldRemoved,
    InterfaceTypeFieldDescriptionChanged,
    InterfaceTypeFieldTypeChanged,
    InterfaceTypeFieldArgumentAdded,
    InterfaceTypeFieldArgumentRemoved,
    InterfaceTypeFieldArgumentDescriptionChanged,
    InterfaceTypeFieldArgumentDefaultValueChanged,
    InterfaceTypeFieldArgumentTypeChanged,

    InputFieldAdded,
    InputFieldRemoved,
    InputFieldDescriptionChanged,
    InputFieldDefaultValueChanged,
    InputFieldTypeChanged,

    EnumValueAdded,
    EnumValueRemoved,
    EnumValueDescriptionChanged,

    UnionMemberAdded,
    UnionMemberRemoved,
}

impl ChangeKind {
    /// Whether the change only touches documentation.
    pub fn is_description_change(self) -> bool {
        use ChangeKind::*;

        matches!(
            self,
            DirectiveDescriptionChanged
                | DirectiveArgumentDescriptionChanged
                | TypeDescriptionChanged
                | ObjectTypeFieldDescriptionChanged
                | ObjectTypeFieldArgumentDescriptionChanged
                | InterfaceTypeFieldDescriptionChanged
                | InterfaceTypeFieldArgumentDescriptionChanged
                | InputFieldDescriptionChanged
                | EnumValueDescriptionChanged
        )
    }
}

/// Dot-join the ancestry of a schema element.
pub(crate) fn path<const N: usize>(segments: [&str; N]) -> String {
    segments.join(".")
}

/// Render an optional description for messages, the empty string standing for no description.
pub(crate) fn describe(description: Option<&str>) -> &str {
    description.unwrap_or_default()
}
