#![allow(unused_crate_dependencies)]

use graphql_schema_compare::{
    compare_schemas, diff, ChangeKind, ChangeKind::*, DiffResult, Level, Level::*, SchemaGraph,
};
use indoc::indoc;
use rstest::rstest;

const SCHEMA: &str = indoc! {r#"
    schema { query: Query mutation: Mutation }

    "Marks fields requiring a role"
    directive @auth(role: Role = ADMIN, "Why" reason: String) repeatable on FIELD_DEFINITION | OBJECT

    interface Node { id: ID! }

    type Query implements Node {
        id: ID!
        user(id: ID!, first: Int = 10): User @auth
        search(filter: Filter): [SearchResult!]!
        legacy: String @deprecated
    }

    type Mutation { createUser(input: CreateUser!): User }

    type User implements Node {
        id: ID!
        "The display name"
        name: String
        roles: [Role!]!
    }

    type Group { members: [User] }

    union SearchResult = User | Group

    enum Role { ADMIN "Can only read" READER }

    input Filter { limit: Int = 20 term: String! }

    input CreateUser { name: String! roles: [Role!] = [READER] }

    scalar DateTime
"#};

fn summary(result: &DiffResult) -> Vec<(ChangeKind, Level, String)> {
    result
        .changes()
        .map(|change| (change.kind, change.level(), change.path.clone()))
        .collect()
}

#[test]
fn diffing_a_schema_against_itself_yields_no_changes() {
    assert!(diff(SCHEMA, SCHEMA).unwrap().is_empty());

    let graph = SchemaGraph::parse(SCHEMA).unwrap();
    assert!(compare_schemas(&graph, &graph.clone()).is_empty());
}

#[test]
fn added_and_removed_declarations_are_reported_once() {
    let source = indoc! {"
        directive @a on FIELD
        directive @b on FIELD
        type A { x: Int y: Int }
        type B { x: Int }
        enum E { X Y }
        union U = A | B
    "};

    let target = indoc! {"
        directive @b on FIELD
        directive @c on FIELD
        type A { y: Int z: Int }
        type C { x: Int }
        enum E { Y Z }
        union U = A | C
    "};

    let result = diff(source, target).unwrap();

    let changes = summary(&result)
        .into_iter()
        .map(|(kind, _, path)| (kind, path))
        .collect::<Vec<_>>();

    let count = |kind: ChangeKind, path: &str| changes.iter().filter(|(k, p)| *k == kind && p == path).count();

    for (kind, path) in [
        (DirectiveRemoved, "a"),
        (DirectiveAdded, "c"),
        (ObjectTypeFieldRemoved, "A.x"),
        (ObjectTypeFieldAdded, "A.z"),
        (TypeRemoved, "B"),
        (TypeAdded, "C"),
        (EnumValueRemoved, "E.X"),
        (EnumValueAdded, "E.Z"),
        (UnionMemberRemoved, "U.B"),
        (UnionMemberAdded, "U.C"),
    ] {
        assert_eq!(count(kind, path), 1, "{kind} {path}");
    }

    assert_eq!(changes.len(), 10, "{changes:#?}");
}

#[rstest]
#[case::object_field("type T { f: String }", "type T { f: String! }", NonBreaking)]
#[case::object_field_loosened("type T { f: String! }", "type T { f: String }", Breaking)]
#[case::interface_field("interface T { f: String }", "interface T { f: String! }", NonBreaking)]
#[case::interface_field_loosened("interface T { f: String! }", "interface T { f: String }", Breaking)]
#[case::input_field("input T { f: String }", "input T { f: String! }", Breaking)]
#[case::input_field_loosened("input T { f: String! }", "input T { f: String }", NonBreaking)]
#[case::argument("type T { f(a: String): Int }", "type T { f(a: String!): Int }", Breaking)]
#[case::argument_loosened("type T { f(a: String!): Int }", "type T { f(a: String): Int }", NonBreaking)]
#[case::directive_argument("directive @d(a: String) on FIELD", "directive @d(a: String!) on FIELD", Breaking)]
#[case::directive_argument_loosened(
    "directive @d(a: String!) on FIELD",
    "directive @d(a: String) on FIELD",
    NonBreaking
)]
fn nullability_verdicts_depend_on_the_position(#[case] source: &str, #[case] target: &str, #[case] level: Level) {
    let changes = diff(source, target).unwrap().into_changes();

    assert_eq!(changes.len(), 1, "{changes:#?}");
    assert_eq!(changes[0].level(), level);
}

#[test]
fn enum_verdicts_do_not_depend_on_other_changes() {
    let result = diff(
        r#"enum E { "A" A B } input I { e: E = A }"#,
        r#"enum E { "Not A" A C } input I { e: E = C }"#,
    )
    .unwrap();

    let enum_changes = summary(&result)
        .into_iter()
        .filter(|(kind, _, _)| matches!(kind, EnumValueAdded | EnumValueRemoved))
        .collect::<Vec<_>>();

    assert_eq!(
        enum_changes,
        [
            (EnumValueRemoved, Breaking, "E.B".to_owned()),
            (EnumValueAdded, Dangerous, "E.C".to_owned()),
        ]
    );
}

#[rstest]
#[case::argument(
    "type T { f(a: Int = 1): Int }",
    "type T { f(a: Int = 2): Int }",
    ObjectTypeFieldArgumentDefaultValueChanged
)]
#[case::argument_default_added(
    "type T { f(a: Int): Int }",
    "type T { f(a: Int = 2): Int }",
    ObjectTypeFieldArgumentDefaultValueChanged
)]
#[case::input_field("input T { f: [Int] = [1] }", "input T { f: [Int] = [2] }", InputFieldDefaultValueChanged)]
#[case::input_field_default_removed("input T { f: String = \"a\" }", "input T { f: String }", InputFieldDefaultValueChanged)]
#[case::directive_argument(
    "directive @d(a: Int = 1) on FIELD",
    "directive @d(a: Int = 2) on FIELD",
    DirectiveArgumentDefaultValueChanged
)]
fn default_value_changes_are_dangerous(#[case] source: &str, #[case] target: &str, #[case] kind: ChangeKind) {
    let changes = diff(source, target).unwrap().into_changes();

    assert_eq!(changes.len(), 1, "{changes:#?}");
    assert_eq!(changes[0].kind, kind);
    assert_eq!(changes[0].level(), Dangerous);
}

#[test]
fn reformatted_default_values_are_equal() {
    let result = diff(
        "input T { f: [Int] = [1, 2] g: Obj = { a: 1 } }",
        "input T { f: [Int] = [1 2] g: Obj = {a:1} }",
    )
    .unwrap();

    assert!(result.is_empty(), "{result:#?}");
}

#[test]
fn output_is_deterministic() {
    let source = indoc! {"
        type Z { a: Int }
        type Y { a: Int }
        directive @z on FIELD
        directive @y on FIELD
        enum X { A }
    "};

    let target = indoc! {"
        enum X { B }
        directive @w on FIELD
        type V { a: Int }
        type W { a: Int }
    "};

    let first = summary(&diff(source, target).unwrap());

    for _ in 0..10 {
        assert_eq!(summary(&diff(source, target).unwrap()), first);
    }

    insta::assert_debug_snapshot!(first, @r#"
    [
        (
            DirectiveRemoved,
            Breaking,
            "y",
        ),
        (
            DirectiveRemoved,
            Breaking,
            "z",
        ),
        (
            TypeRemoved,
            Breaking,
            "Y",
        ),
        (
            TypeRemoved,
            Breaking,
            "Z",
        ),
        (
            EnumValueRemoved,
            Breaking,
            "X.A",
        ),
        (
            EnumValueAdded,
            Dangerous,
            "X.B",
        ),
        (
            DirectiveAdded,
            NonBreaking,
            "w",
        ),
        (
            TypeAdded,
            NonBreaking,
            "V",
        ),
        (
            TypeAdded,
            NonBreaking,
            "W",
        ),
    ]
    "#);
}

#[rstest]
#[case::query_root_changed(
    "schema { query: A } type A { a: String } type B { b: String }",
    "schema { query: B } type A { a: String } type B { b: String }",
    SchemaQueryTypeChanged,
    Breaking
)]
#[case::type_added("type A { a: String }", "type A { a: String } type B { b: Int }", TypeAdded, NonBreaking)]
#[case::required_input_field_added("input I { i: Int }", "input I { i: Int f: Float! }", InputFieldAdded, Breaking)]
#[case::argument_removed(
    "interface I { i(x: Boolean!): String }",
    "interface I { i: String }",
    InterfaceTypeFieldArgumentRemoved,
    Breaking
)]
#[case::union_member_added(
    "union U = A type A { a: String } type B { b: Int }",
    "union U = A | B type A { a: String } type B { b: Int }",
    UnionMemberAdded,
    Dangerous
)]
#[case::argument_default_value_changed(
    "type A { a(x: Boolean = true): String }",
    "type A { a(x: Boolean = false): String }",
    ObjectTypeFieldArgumentDefaultValueChanged,
    Dangerous
)]
fn scenarios(#[case] source: &str, #[case] target: &str, #[case] kind: ChangeKind, #[case] level: Level) {
    let result = diff(source, target).unwrap();

    assert_eq!(result.len(), 1, "{result:#?}");

    let change = result.changes().next().unwrap();
    assert_eq!(change.kind, kind);
    assert_eq!(change.level(), level);
}

#[test]
fn parse_errors_name_the_failing_schema() {
    let error = diff("type A { a: Int }", "type A {").unwrap_err();

    assert!(error.to_string().starts_with("unable to process target schema: unable to parse schema:"));

    let error = diff("scalar A scalar A", "type A { a: Int }").unwrap_err();

    assert_eq!(
        error.to_string(),
        "unable to process source schema: SCALAR type 'A' already exists"
    );
}

#[cfg(feature = "serde")]
#[test]
fn changes_serialize_with_screaming_snake_case() {
    let result = diff("enum E { A B }", "enum E { A }").unwrap();

    insta::assert_json_snapshot!(result.into_changes(), @r#"
    [
      {
        "severity": {
          "level": "BREAKING",
          "reason": "Removing an enum value will cause existing queries that use this enum value to error."
        },
        "kind": "ENUM_VALUE_REMOVED",
        "message": "Enum value 'B' was removed from enum 'E'",
        "path": "E.B"
      }
    ]
    "#);
}
