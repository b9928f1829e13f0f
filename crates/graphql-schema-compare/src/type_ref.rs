use async_graphql_parser::types as ast;
use std::fmt;

/// A reference to a type from a field, argument or input field, with its list and non-null
/// wrappers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeReference {
    /// `Name` or `Name!`
    Named {
        /// The referenced type.
        name: String,
        /// Whether the `!` modifier is present.
        non_null: bool,
    },
    /// `[Inner]` or `[Inner]!`
    List {
        /// The element type.
        of: Box<TypeReference>,
        /// Whether the `!` modifier is present.
        non_null: bool,
    },
}

impl TypeReference {
    /// A nullable reference to `name`.
    pub fn named(name: impl Into<String>) -> Self {
        TypeReference::Named {
            name: name.into(),
            non_null: false,
        }
    }

    /// A nullable list of `of`.
    pub fn list(of: TypeReference) -> Self {
        TypeReference::List {
            of: Box::new(of),
            non_null: false,
        }
    }

    /// The same reference with the `!` modifier.
    #[must_use]
    pub fn non_null(mut self) -> Self {
        match &mut self {
            TypeReference::Named { non_null, .. } | TypeReference::List { non_null, .. } => *non_null = true,
        }
        self
    }

    /// Whether the outermost wrapper forbids null.
    pub fn is_non_null(&self) -> bool {
        match self {
            TypeReference::Named { non_null, .. } | TypeReference::List { non_null, .. } => *non_null,
        }
    }

    /// The name of the innermost type.
    pub fn inner_name(&self) -> &str {
        match self {
            TypeReference::Named { name, .. } => name,
            TypeReference::List { of, .. } => of.inner_name(),
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let non_null = match self {
            TypeReference::Named { name, non_null } => {
                f.write_str(name)?;
                non_null
            }
            TypeReference::List { of, non_null } => {
                write!(f, "[{of}]")?;
                non_null
            }
        };

        if *non_null {
            f.write_str("!")?;
        }

        Ok(())
    }
}

impl From<&ast::Type> for TypeReference {
    fn from(ty: &ast::Type) -> Self {
        match &ty.base {
            ast::BaseType::Named(name) => TypeReference::Named {
                name: name.to_string(),
                non_null: !ty.nullable,
            },
            ast::BaseType::List(inner) => TypeReference::List {
                of: Box::new(TypeReference::from(inner.as_ref())),
                non_null: !ty.nullable,
            },
        }
    }
}

/// Where a type reference appears. Nullability changes are judged in opposite directions for
/// data the clients send and data the server returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Arguments, input object fields and directive arguments.
    Input,
    /// Object and interface fields.
    Output,
}

/// Two references are equal when their canonical renderings are. Absent references are only equal
/// to each other.
pub fn type_equals(source: Option<&TypeReference>, target: Option<&TypeReference>) -> bool {
    match (source, target) {
        (None, None) => true,
        (Some(source), Some(target)) => source == target,
        _ => false,
    }
}

/// Whether replacing `source` with `target` at the given position breaks existing clients.
///
/// Wrappers are compared from the outside in:
///
/// - a named type must stay a named type with the same name, and its nullability must not change
///   in the direction the position forbids: an input position must not become non-null, an output
///   position must not become nullable,
/// - a list must stay a list, and only its element type is compared, recursively.
pub fn is_breaking_change(source: Option<&TypeReference>, target: Option<&TypeReference>, position: Position) -> bool {
    match (source, target) {
        (None, None) => false,
        (Some(source), Some(target)) => breaks(source, target, position),
        _ => true,
    }
}

fn breaks(source: &TypeReference, target: &TypeReference, position: Position) -> bool {
    match (source, target) {
        (
            TypeReference::Named {
                name: source_name,
                non_null: source_non_null,
            },
            TypeReference::Named {
                name: target_name,
                non_null: target_non_null,
            },
        ) => source_name != target_name || nullability_breaks(*source_non_null, *target_non_null, position),
        // The list's own non-null flag is not judged, only its elements.
        (TypeReference::List { of: source_of, .. }, TypeReference::List { of: target_of, .. }) => {
            breaks(source_of, target_of, position)
        }
        // Named to list, or list to named.
        _ => true,
    }
}

fn nullability_breaks(source_non_null: bool, target_non_null: bool, position: Position) -> bool {
    match (source_non_null, target_non_null) {
        // Clients now have to provide a value they could omit before.
        (false, true) => position == Position::Input,
        // Clients may now receive null where they could not before.
        (true, false) => position == Position::Output,
        _ => false,
    }
}
