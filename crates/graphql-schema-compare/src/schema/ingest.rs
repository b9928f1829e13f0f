use super::*;
use crate::TypeReference;
use async_graphql_parser::{types as ast, Positioned};
use async_graphql_value::ConstValue;
use heck::ToShoutySnakeCase;
use std::collections::btree_map::Entry;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Walk the definitions of a document, populating a fresh `SchemaGraph`.
pub(super) fn ingest_document(document: &ast::ServiceDocument) -> Result<SchemaGraph, Error> {
    let mut graph = SchemaGraph::default();

    for definition in &document.definitions {
        match definition {
            ast::TypeSystemDefinition::Schema(schema) => ingest_schema_definition(&schema.node, &mut graph)?,
            ast::TypeSystemDefinition::Directive(directive) => ingest_directive(&directive.node, &mut graph)?,
            ast::TypeSystemDefinition::Type(ty) => ingest_type(&ty.node, &mut graph)?,
        }
    }

    tracing::trace!(
        root_operations = graph.root_operations.len(),
        directives = graph.directives.len(),
        types = graph.types.len(),
        "ingested schema"
    );

    Ok(graph)
}

fn ingest_schema_definition(schema: &ast::SchemaDefinition, graph: &mut SchemaGraph) -> Result<(), Error> {
    if schema.extend {
        tracing::debug!("skipping schema extension");
        return Ok(());
    }

    let roots = [
        (RootOperation::Query, &schema.query),
        (RootOperation::Mutation, &schema.mutation),
        (RootOperation::Subscription, &schema.subscription),
    ];

    for (operation, name) in roots {
        let Some(name) = name else { continue };

        match graph.root_operations.entry(operation) {
            Entry::Occupied(_) => return Err(Error::DuplicateRootOperation(operation)),
            Entry::Vacant(entry) => {
                entry.insert(name.node.to_string());
            }
        }
    }

    Ok(())
}

fn ingest_directive(directive: &ast::DirectiveDefinition, graph: &mut SchemaGraph) -> Result<(), Error> {
    let declaration = DirectiveDeclaration {
        name: directive.name.node.to_string(),
        description: description(&directive.description),
        arguments: directive
            .arguments
            .iter()
            .map(|argument| ingest_argument(&argument.node))
            .collect(),
        repeatable: directive.is_repeatable,
        locations: directive
            .locations
            .iter()
            .map(|location| render_location(&location.node))
            .collect(),
    };

    match graph.directives.entry(declaration.name.clone()) {
        Entry::Occupied(entry) => Err(Error::DuplicateDirective(entry.key().clone())),
        Entry::Vacant(entry) => {
            entry.insert(declaration);
            Ok(())
        }
    }
}

fn ingest_type(ty: &ast::TypeDefinition, graph: &mut SchemaGraph) -> Result<(), Error> {
    let type_name = ty.name.node.to_string();

    if ty.extend {
        tracing::debug!(name = %type_name, "skipping type extension");
        return Ok(());
    }

    let kind = match &ty.kind {
        ast::TypeKind::Scalar => TypeKind::Scalar,
        ast::TypeKind::Object(_) => TypeKind::Object,
        ast::TypeKind::Interface(_) => TypeKind::Interface,
        ast::TypeKind::Union(_) => TypeKind::Union,
        ast::TypeKind::Enum(_) => TypeKind::Enum,
        ast::TypeKind::InputObject(_) => TypeKind::InputObject,
    };

    let mut declaration = TypeDeclaration::new(type_name, kind);
    declaration.description = description(&ty.description);

    match &ty.kind {
        ast::TypeKind::Scalar => (),
        ast::TypeKind::Object(object) => {
            declaration.interfaces = object.implements.iter().map(|name| name.node.to_string()).collect();
            declaration.fields = object.fields.iter().map(|field| ingest_field(&field.node)).collect();
        }
        ast::TypeKind::Interface(interface) => {
            declaration.fields = interface.fields.iter().map(|field| ingest_field(&field.node)).collect();
        }
        ast::TypeKind::Union(union) => {
            declaration.members = union.members.iter().map(|member| member.node.to_string()).collect();
        }
        ast::TypeKind::Enum(enm) => {
            declaration.values = enm
                .values
                .iter()
                .map(|value| EnumValueDeclaration {
                    name: value.node.value.node.to_string(),
                    description: description(&value.node.description),
                })
                .collect();
        }
        ast::TypeKind::InputObject(input) => {
            declaration.fields = input
                .fields
                .iter()
                .map(|field| ingest_input_field(&field.node))
                .collect();
        }
    }

    match graph.types.entry(declaration.name.clone()) {
        Entry::Occupied(entry) => Err(Error::DuplicateType {
            kind,
            name: entry.key().clone(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(declaration);
            Ok(())
        }
    }
}

fn ingest_field(field: &ast::FieldDefinition) -> FieldDeclaration {
    FieldDeclaration {
        name: field.name.node.to_string(),
        description: description(&field.description),
        ty: TypeReference::from(&field.ty.node),
        arguments: field
            .arguments
            .iter()
            .map(|argument| ingest_argument(&argument.node))
            .collect(),
        default_value: None,
        deprecation: deprecation(&field.directives),
    }
}

fn ingest_input_field(field: &ast::InputValueDefinition) -> FieldDeclaration {
    FieldDeclaration {
        name: field.name.node.to_string(),
        description: description(&field.description),
        ty: TypeReference::from(&field.ty.node),
        arguments: Vec::new(),
        default_value: field.default_value.as_ref().map(|value| Value::from(&value.node)),
        deprecation: deprecation(&field.directives),
    }
}

fn ingest_argument(argument: &ast::InputValueDefinition) -> ArgumentDeclaration {
    ArgumentDeclaration {
        name: argument.name.node.to_string(),
        description: description(&argument.description),
        ty: TypeReference::from(&argument.ty.node),
        default_value: argument.default_value.as_ref().map(|value| Value::from(&value.node)),
    }
}

// Empty descriptions are treated as absent ones.
fn description(description: &Option<Positioned<String>>) -> Option<String> {
    description
        .as_ref()
        .map(|description| &description.node)
        .filter(|description| !description.is_empty())
        .cloned()
}

fn deprecation(directives: &[Positioned<ast::ConstDirective>]) -> Option<String> {
    let deprecated = directives
        .iter()
        .find(|directive| directive.node.name.node.as_str() == "deprecated")?;

    let reason = match deprecated.node.get_argument("reason").map(|reason| &reason.node) {
        Some(ConstValue::String(reason)) => reason.clone(),
        _ => DEFAULT_DEPRECATION_REASON.to_owned(),
    };

    Some(reason)
}

fn render_location(location: &ast::DirectiveLocation) -> String {
    format!("{location:?}").to_shouty_snake_case()
}
