#![allow(unused_crate_dependencies)]

use graphql_schema_compare::{diff, diff_with_config, DiffConfig, DiffResult};

fn summary(result: &DiffResult) -> Vec<String> {
    result
        .changes()
        .map(|change| format!("{} {} {}", change.level(), change.kind, change.path))
        .collect()
}

#[test]
fn added_fields_inside_added_types() {
    let source = r#"
        type Query {
            hello: String!
        }
    "#;

    let target = r#"
        type Query {
            hello: String!
        }

        type Mutation implements Greeter & RootType
            @myDirective
        {
            goodDaySir(name: String!): String!
            goodbye: String!
        }
    "#;

    let diff = diff_with_config(
        source,
        target,
        DiffConfig::default().with_additions_inside_type_definitions(true),
    )
    .unwrap();

    insta::assert_debug_snapshot!(summary(&diff), @r#"
    [
        "NON_BREAKING TYPE_ADDED Mutation",
        "NON_BREAKING OBJECT_TYPE_INTERFACE_ADDED Mutation.Greeter",
        "NON_BREAKING OBJECT_TYPE_INTERFACE_ADDED Mutation.RootType",
        "NON_BREAKING OBJECT_TYPE_FIELD_ADDED Mutation.goodDaySir",
        "NON_BREAKING OBJECT_TYPE_FIELD_ADDED Mutation.goodbye",
    ]
    "#);
}

#[test]
fn added_types_are_opaque_by_default() {
    let source = r#"
        type Query {
            hello: String!
        }
    "#;

    let target = r#"
        type Query {
            hello: String!
        }

        type Mutation implements Greeter {
            goodbye: String!
        }
    "#;

    let diff = diff(source, target).unwrap();

    insta::assert_debug_snapshot!(summary(&diff), @r#"
    [
        "NON_BREAKING TYPE_ADDED Mutation",
    ]
    "#);
}

#[test]
fn added_members_inside_added_unions() {
    let source = r#"
        type Member {
            id: ID!
            nickname: String!
        }

        type Admin {
            id: ID!
            fullName: String!
        }
    "#;

    let target = r#"
        type Member {
            id: ID!
            nickname: String!
        }

        type Admin {
            id: ID!
            fullName: String!
        }

        union MyUnion = Member | Admin
    "#;

    let diff = diff_with_config(
        source,
        target,
        DiffConfig::default().with_additions_inside_type_definitions(true),
    )
    .unwrap();

    insta::assert_debug_snapshot!(summary(&diff), @r#"
    [
        "NON_BREAKING TYPE_ADDED MyUnion",
        "NON_BREAKING UNION_MEMBER_ADDED MyUnion.Member",
        "NON_BREAKING UNION_MEMBER_ADDED MyUnion.Admin",
    ]
    "#);
}

#[test]
fn added_values_inside_added_enums() {
    let source = r#"
        type Query {
            hello: String!
        }
    "#;

    let target = r#"
        enum MyEnum {
            A
            B
            C
            D
        }
    "#;

    let diff = diff_with_config(
        source,
        target,
        DiffConfig::default().with_additions_inside_type_definitions(true),
    )
    .unwrap();

    insta::assert_debug_snapshot!(summary(&diff), @r#"
    [
        "BREAKING TYPE_REMOVED Query",
        "NON_BREAKING TYPE_ADDED MyEnum",
        "NON_BREAKING ENUM_VALUE_ADDED MyEnum.A",
        "NON_BREAKING ENUM_VALUE_ADDED MyEnum.B",
        "NON_BREAKING ENUM_VALUE_ADDED MyEnum.C",
        "NON_BREAKING ENUM_VALUE_ADDED MyEnum.D",
    ]
    "#);
}

#[test]
fn added_fields_inside_input_objects() {
    let source = r#"
        type Query {
            hello: String!
        }
    "#;

    let target = r#"
        input MyInput {
            a: Int!
            b: String!
        }
    "#;

    let diff = diff_with_config(
        source,
        target,
        DiffConfig::default().with_additions_inside_type_definitions(true),
    )
    .unwrap();

    insta::assert_debug_snapshot!(summary(&diff), @r#"
    [
        "BREAKING TYPE_REMOVED Query",
        "NON_BREAKING TYPE_ADDED MyInput",
        "NON_BREAKING INPUT_FIELD_ADDED MyInput.a",
        "NON_BREAKING INPUT_FIELD_ADDED MyInput.b",
    ]
    "#);
}

#[test]
fn added_fields_inside_added_interfaces() {
    let source = r#"
        type Query {
            hello: String!
        }
    "#;

    let target = r#"
        interface MyInterface {
            a: Int!
            b: String!
        }
    "#;

    let diff = diff_with_config(
        source,
        target,
        DiffConfig::default().with_additions_inside_type_definitions(true),
    )
    .unwrap();

    insta::assert_debug_snapshot!(summary(&diff), @r#"
    [
        "BREAKING TYPE_REMOVED Query",
        "NON_BREAKING TYPE_ADDED MyInterface",
        "NON_BREAKING INTERFACE_TYPE_FIELD_ADDED MyInterface.a",
        "NON_BREAKING INTERFACE_TYPE_FIELD_ADDED MyInterface.b",
    ]
    "#);
}

#[test]
fn description_changes_can_be_ignored() {
    let source = r#"
        "Old"
        type Query {
            "Old"
            hello(
                "Old"
                name: String
            ): String!
        }

        enum Role {
            "Old"
            ADMIN
        }

        "Old"
        directive @auth("Old" role: Role) on FIELD_DEFINITION
    "#;

    let target = r#"
        "New"
        type Query {
            "New"
            hello(
                "New"
                name: String
            ): String
        }

        enum Role {
            "New"
            ADMIN
        }

        "New"
        directive @auth("New" role: Role) on FIELD_DEFINITION
    "#;

    let everything = diff(source, target).unwrap();
    let without_descriptions =
        diff_with_config(source, target, DiffConfig::default().with_description_changes(false)).unwrap();

    insta::assert_debug_snapshot!(summary(&everything), @r#"
    [
        "BREAKING OBJECT_TYPE_FIELD_TYPE_CHANGED Query.hello",
        "NON_BREAKING DIRECTIVE_DESCRIPTION_CHANGED auth",
        "NON_BREAKING DIRECTIVE_ARGUMENT_DESCRIPTION_CHANGED auth.role",
        "NON_BREAKING TYPE_DESCRIPTION_CHANGED Query",
        "NON_BREAKING OBJECT_TYPE_FIELD_DESCRIPTION_CHANGED Query.hello",
        "NON_BREAKING OBJECT_TYPE_FIELD_ARGUMENT_DESCRIPTION_CHANGED Query.hello.name",
        "NON_BREAKING ENUM_VALUE_DESCRIPTION_CHANGED Role.ADMIN",
    ]
    "#);

    insta::assert_debug_snapshot!(summary(&without_descriptions), @r#"
    [
        "BREAKING OBJECT_TYPE_FIELD_TYPE_CHANGED Query.hello",
    ]
    "#);
}
