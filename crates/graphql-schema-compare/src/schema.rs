//! The declarations of one schema, as compared by [crate::compare_schemas()].

mod ingest;

use crate::{Error, TypeReference, Value};
use async_graphql_parser::types::ServiceDocument;
use std::collections::BTreeMap;

/// A parsed schema, indexed by name. Built once per input and never mutated afterwards.
///
/// Maps are ordered by name so that comparing two graphs always reports changes in the same order.
#[derive(Debug, Default, Clone)]
pub struct SchemaGraph {
    root_operations: BTreeMap<RootOperation, String>,
    directives: BTreeMap<String, DirectiveDeclaration>,
    types: BTreeMap<String, TypeDeclaration>,
}

impl SchemaGraph {
    /// Parse SDL into a graph.
    pub fn parse(sdl: &str) -> Result<Self, Error> {
        let document = async_graphql_parser::parse_schema(sdl)?;
        Self::from_document(&document)
    }

    /// Index an already parsed document. Fails on duplicate root operations, directives or types.
    ///
    /// Schema and type extensions are skipped.
    pub fn from_document(document: &ServiceDocument) -> Result<Self, Error> {
        ingest::ingest_document(document)
    }

    /// The root type name of an operation, when the schema definition declares one.
    pub fn root_operation(&self, operation: RootOperation) -> Option<&str> {
        self.root_operations.get(&operation).map(String::as_str)
    }

    /// Root operation type names declared in the schema definition.
    pub fn root_operations(&self) -> &BTreeMap<RootOperation, String> {
        &self.root_operations
    }

    /// Directive definitions by name.
    pub fn directives(&self) -> &BTreeMap<String, DirectiveDeclaration> {
        &self.directives
    }

    /// Type definitions by name.
    pub fn types(&self) -> &BTreeMap<String, TypeDeclaration> {
        &self.types
    }

    /// Look up a type definition.
    pub fn get_type(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.get(name)
    }
}

/// The operations a schema can define a root type for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum RootOperation {
    Query,
    Mutation,
    Subscription,
}

/// The kind of a type definition. Renders like the introspection `__TypeKind` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

/// A type definition of any kind. Only the collections relevant to `kind` are populated.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    /// The type name.
    pub name: String,
    /// The description, if any.
    pub description: Option<String>,
    /// The kind of type.
    pub kind: TypeKind,
    /// Implemented interfaces, in declaration order. Objects only.
    pub interfaces: Vec<String>,
    /// Fields, in declaration order. Objects, interfaces and input objects.
    pub fields: Vec<FieldDeclaration>,
    /// Values, in declaration order. Enums only.
    pub values: Vec<EnumValueDeclaration>,
    /// Member type names, in declaration order. Unions only.
    pub members: Vec<String>,
}

impl TypeDeclaration {
    /// A declaration without any children.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDeclaration {
            name: name.into(),
            description: None,
            kind,
            interfaces: Vec::new(),
            fields: Vec::new(),
            values: Vec::new(),
            members: Vec::new(),
        }
    }

    /// The same declaration, stripped of its children.
    pub(crate) fn shell(&self) -> Self {
        TypeDeclaration {
            description: self.description.clone(),
            ..TypeDeclaration::new(self.name.clone(), self.kind)
        }
    }
}

/// A field of an object, interface or input object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    /// The field name.
    pub name: String,
    /// The description, if any.
    pub description: Option<String>,
    /// The field type.
    pub ty: TypeReference,
    /// Arguments, in declaration order. Always empty for input object fields.
    pub arguments: Vec<ArgumentDeclaration>,
    /// The default value. Input object fields only.
    pub default_value: Option<Value>,
    /// The `@deprecated` reason, when the field is deprecated.
    pub deprecation: Option<String>,
}

impl FieldDeclaration {
    /// Whether an input field must be provided by clients.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}

/// An argument of a field or a directive.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDeclaration {
    /// The argument name.
    pub name: String,
    /// The description, if any.
    pub description: Option<String>,
    /// The argument type.
    pub ty: TypeReference,
    /// The default value, if any.
    pub default_value: Option<Value>,
}

impl ArgumentDeclaration {
    /// Whether clients must provide the argument.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}

/// A value of an enum.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDeclaration {
    /// The value itself.
    pub name: String,
    /// The description, if any.
    pub description: Option<String>,
}

/// A directive definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDeclaration {
    /// The directive name, without `@`.
    pub name: String,
    /// The description, if any.
    pub description: Option<String>,
    /// Arguments, in declaration order.
    pub arguments: Vec<ArgumentDeclaration>,
    /// Whether the directive is declared `repeatable`.
    pub repeatable: bool,
    /// Locations, rendered like `FIELD_DEFINITION`, in declaration order.
    pub locations: Vec<String>,
}
