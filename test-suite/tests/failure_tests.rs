use vartype_errors::{Category, Domain, Span};
use vartype_test_suite::*;

type_test! {
    id: fail_empty_expression,
    name: "Empty Expression",
    purpose: "An empty expression is rejected before any lookup",
    expect_pass: false,
    tags: vec![Tag::Smoke],
    expr: "",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::EmptyExpression { .. }));
        assert_eq!(err.error_code().category, Category::Missing);
    }
}

type_test! {
    id: fail_list_without_element,
    name: "List Without Element",
    purpose: "A bare list marker has nothing to hold",
    expect_pass: false,
    tags: vec![Tag::List],
    expr: "[][]",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::EmptyExpression { .. }));
        assert_eq!(err.span(), Some(Span::new(2, 4)));
    }
}

type_test! {
    id: fail_map_missing_value,
    name: "Map Missing Value",
    purpose: "A map needs both a key and a value",
    expect_pass: false,
    tags: vec![Tag::Map],
    expr: "map<string>",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::InvalidMapSyntax { .. }));
        assert_eq!(err.expr(), "map<string>");
        assert_eq!(err.error_code().to_string(), "VTE0001");
    }
}

type_test! {
    id: fail_map_unclosed,
    name: "Unclosed Map",
    purpose: "A map must end with its closing bracket",
    expect_pass: false,
    tags: vec![Tag::Map],
    expr: "map<string,map<string,uint32>",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::InvalidMapSyntax { .. }));
    }
}

type_test! {
    id: fail_map_float_key,
    name: "Float Map Key",
    purpose: "Only string and integer types may key a map",
    expect_pass: false,
    tags: vec![Tag::Map],
    expr: "map<float64,string>",
    assertions: |_, err: TypeExprError| {
        match &err {
            TypeExprError::InvalidMapKeyType { key, expr, span } => {
                assert_eq!(key, "float64");
                assert_eq!(expr, "map<float64,string>");
                assert_eq!(*span, Some(Span::new(4, 11)));
            },
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.error_code().domain, Domain::TE);
        assert_eq!(err.error_code().category, Category::Validation);
    }
}

type_test! {
    id: fail_map_struct_key,
    name: "Struct Map Key",
    purpose: "A message name is never a valid map key",
    expect_pass: false,
    tags: vec![Tag::Map, Tag::Struct],
    expr: "map<User,string>",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::InvalidMapKeyType { .. }));
    }
}

type_test! {
    id: fail_unknown_message,
    name: "Unknown Message",
    purpose: "Names missing from the catalog are rejected",
    expect_pass: false,
    tags: vec![Tag::Smoke, Tag::Struct],
    expr: "[]Usr",
    assertions: |_, err: TypeExprError| {
        assert_eq!(err.expr(), "Usr");
        assert_eq!(err.span(), Some(Span::new(2, 5)));
        vartype_testing::assert_snapshot!(err.to_string(), @"invalid struct/message type 'Usr'");
    }
}

type_test! {
    id: fail_case_sensitive_names,
    name: "Case Sensitive Lookup",
    purpose: "Neither primitives nor messages fold case",
    expect_pass: false,
    tags: vec![Tag::Primitive, Tag::Struct],
    expr: "map<string,String>",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::UnknownType { .. }));
        assert_eq!(err.expr(), "String");
    }
}

type_test! {
    id: fail_whitespace_is_significant,
    name: "No Whitespace Tolerance",
    purpose: "Spaces around a map comma are part of the names",
    expect_pass: false,
    tags: vec![Tag::Map],
    expr: "map<string, uint32>",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::UnknownType { .. }));
        assert_eq!(err.expr(), " uint32");
    }
}

type_test! {
    id: fail_depth_limit,
    name: "Depth Limit",
    purpose: "Nesting past the configured depth is rejected",
    expect_pass: false,
    tags: vec![Tag::Limits],
    config: ParseConfig { max_depth: 2 },
    expr: "map<string,[][]int>",
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::MaxDepthExceeded { max_depth: 2, .. }));
        assert_eq!(err.expr(), "map<string,[][]int>");
        assert_eq!(err.span(), Some(Span::new(15, 18)));
    }
}

type_test! {
    id: fail_pathological_nesting,
    name: "Pathological Nesting",
    purpose: "Very deep input fails cleanly under the default limit",
    expect_pass: false,
    tags: vec![Tag::Limits],
    expr: format!("{}uint8", "map<string,".repeat(5_000)) + &">".repeat(5_000),
    assertions: |_, err: TypeExprError| {
        assert!(matches!(err, TypeExprError::MaxDepthExceeded { max_depth: 64, .. }));
    }
}

#[test]
fn report_points_into_expression() {
    vartype_testing::logging();
    let schema = fixtures::catalog();
    let expr = "map<string,[]Usr>";

    let report = vartype_core::parse(expr, &schema)
        .unwrap_err()
        .at_source(expr)
        .to_report();

    assert_eq!(
        report.code().map(|c| c.to_string()),
        Some("VTE1001".to_string())
    );
    assert!(report.help().is_some());
    let labels: Vec<_> = report.labels().expect("labelled").collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 13);
    assert_eq!(labels[0].len(), 3);
}

#[test]
fn from_quoted_rejects_unquoted_token() {
    let err = VarType::from_quoted("uint32").unwrap_err();
    assert_eq!(err.error_code().domain, Domain::DC);
    vartype_testing::assert_snapshot!(err.to_string(), @"malformed quoted value uint32: string value is expected");
}
