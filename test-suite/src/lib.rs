pub use vartype_core::{
    DataType, Message, MessageCatalog, MessageField, ParseConfig, Schema, VarKind, VarType,
};
pub use vartype_errors::{SchemaError, TypeExprError};

pub mod fixtures;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    /// Tests that focus on basic functionality and correctness.
    Smoke,

    /// Tests that focus on the canonical spelling of parsed types.
    Canonical,

    /// Tests that focus on primitive lookup.
    Primitive,

    /// Tests that focus on list types.
    List,

    /// Tests that focus on map types and their key whitelist.
    Map,

    /// Tests that focus on resolving message references.
    Struct,

    /// Tests that focus on resource limits.
    Limits,

    /// Tests that focus on whole schema documents.
    Schema,
}

#[derive(Clone, Debug, bon::Builder)]
pub struct TestMetadata {
    #[builder(into)]
    pub id: String,

    #[builder(into)]
    pub name: String,

    #[builder(into)]
    pub purpose: String,
    pub expect_pass: bool,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug)]
pub struct TestResult {
    pub metadata: TestMetadata,
    pub expr: String,
    pub actual_pass: bool,
    pub matches_expectation: bool,
    pub error_message: Option<String>,
}

/// Runs one type expression against a schema's messages.
#[derive(Clone, Debug)]
pub struct TestHarness {
    pub schema: Schema,
    pub config: ParseConfig,
    pub metadata: TestMetadata,
    pub result: Option<TestResult>,
}

impl TestHarness {
    pub fn with_metadata(
        schema: Schema,
        id: impl Into<String>,
        name: impl Into<String>,
        purpose: impl Into<String>,
        expect_pass: bool,
        tags: Vec<Tag>,
    ) -> Self {
        vartype_testing::logging();

        Self {
            schema,
            config: ParseConfig::default(),
            metadata: TestMetadata::builder()
                .id(id)
                .name(name)
                .purpose(purpose)
                .expect_pass(expect_pass)
                .tags(tags)
                .build(),
            result: None,
        }
    }

    pub fn with_config(
        mut self,
        config: ParseConfig,
    ) -> Self {
        self.config = config;
        self
    }

    fn handle_meta(
        &mut self,
        expr: &str,
        result: &Result<VarType, TypeExprError>,
    ) {
        let (actual_pass, error_message) = match &result {
            Ok(_) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        };

        self.result = Some(TestResult {
            metadata: self.metadata.clone(),
            expr: expr.to_string(),
            actual_pass,
            matches_expectation: actual_pass == self.metadata.expect_pass,
            error_message,
        });
    }

    fn id(&self) -> &str {
        &self.metadata.id
    }

    fn name(&self) -> &str {
        &self.metadata.name
    }

    fn expect_pass(&self) -> bool {
        self.metadata.expect_pass
    }

    #[tracing::instrument(skip(self), fields(
        test_id = self.id(),
        test_name = self.name(),
        test_expect_pass = self.expect_pass(),
    ))]
    pub fn parse_pass(
        &mut self,
        expr: &str,
    ) -> VarType {
        let result = vartype_core::parse_with(expr, &self.schema, &self.config);

        self.handle_meta(expr, &result);

        match result {
            Ok(ty) => ty,
            Err(e) => {
                let report = e
                    .at_source(expr)
                    .to_report();
                panic!("Expected '{expr}' to parse, but got error: {report:?}")
            },
        }
    }

    #[tracing::instrument(skip(self), fields(
        test_id = self.id(),
        test_name = self.name(),
        test_expect_pass = self.expect_pass(),
    ))]
    pub fn parse_fail(
        &mut self,
        expr: &str,
    ) -> TypeExprError {
        let result = vartype_core::parse_with(expr, &self.schema, &self.config);

        self.handle_meta(expr, &result);

        match result {
            Err(err) => err,
            Ok(ty) => panic!("Expected '{expr}' to fail, but it parsed as '{ty}'"),
        }
    }

    pub fn result(&self) -> Option<&TestResult> {
        self.result.as_ref()
    }
}

/// Attaches the failing expression so reports can point into it.
pub trait AtSource {
    fn at_source(
        self,
        expr: &str,
    ) -> SchemaError;
}

impl AtSource for TypeExprError {
    fn at_source(
        self,
        expr: &str,
    ) -> SchemaError {
        use vartype_errors::DomainError;

        let span = self.span();
        self.at_opt(span)
            .in_source("expr", expr)
            .build()
    }
}

/// Declares a harness-driven test for a single type expression.
///
/// `expect_pass: true` hands the parsed [`VarType`] to `assertions`, otherwise
/// the [`TypeExprError`] is handed over instead.
#[macro_export]
macro_rules! type_test {
    (
        $(ignore: $ignore: literal,)?
        id: $id: ident,
        name: $name: literal,
        purpose: $purpose: literal,
        expect_pass: true,
        tags: $tags: expr,
        $(config: $config: expr,)?
        expr: $expr: expr,
        assertions: $assertions: expr $(,)?
    ) => {
        #[test]
        $(#[ignore = $ignore])?
        fn $id() {
            let mut harness = $crate::TestHarness::with_metadata(
                $crate::fixtures::catalog(),
                stringify!($id),
                $name,
                $purpose,
                true,
                $tags,
            );
            $(harness = harness.with_config($config);)?
            let expr: &str = &$expr;
            let ty = harness.parse_pass(expr);
            let result = harness.result().expect("result recorded");
            assert!(result.matches_expectation);
            ($assertions)(&harness, ty);
        }
    };
    (
        $(ignore: $ignore: literal,)?
        id: $id: ident,
        name: $name: literal,
        purpose: $purpose: literal,
        expect_pass: false,
        tags: $tags: expr,
        $(config: $config: expr,)?
        expr: $expr: expr,
        assertions: $assertions: expr $(,)?
    ) => {
        #[test]
        $(#[ignore = $ignore])?
        fn $id() {
            let mut harness = $crate::TestHarness::with_metadata(
                $crate::fixtures::catalog(),
                stringify!($id),
                $name,
                $purpose,
                false,
                $tags,
            );
            $(harness = harness.with_config($config);)?
            let expr: &str = &$expr;
            let err = harness.parse_fail(expr);
            let result = harness.result().expect("result recorded");
            assert!(result.matches_expectation);
            assert_eq!(result.error_message.as_deref(), Some(err.to_string().as_str()));
            ($assertions)(&harness, err);
        }
    };
}
