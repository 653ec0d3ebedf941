//! Error system for the vartype type-expression parser.
//!
//! Every error carries a `V[Domain][Category][Sequence]` code, a message, an
//! optional help text and, where it can be located, a byte span into the
//! expression it came from.
//!
//! ```
//! use vartype_errors::{DomainError, SchemaError, Span, TypeExprError};
//!
//! let err: SchemaError = TypeExprError::unknown_type("User")
//!     .at(Span::new(2, 6))
//!     .build();
//!
//! assert_eq!(err.error_code().to_string(), "VTE1001");
//! ```

#[macro_use]
mod macros;
mod builder;
mod code;
mod diagnostic;
mod span;

pub mod domains;

pub use builder::{DomainError, ErrorBuilder, MaybeSpanned, Spanned, Unlocated, Unspanned};
pub use code::{Category, Domain, ErrorCode, Severity};
pub use diagnostic::SpanDiagnostic;
pub use domains::{ConfigError, DocumentError, TypeExprError};
pub use span::Span;

/// Unified error type for everything outside a single expression parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    TypeExpr(TypeExprError),
    Document(DocumentError),
    Config(ConfigError),

    /// Error with the text its span points into.
    WithSource {
        inner: Box<SchemaError>,
        name: String,
        source: String,
    },

    /// Error located at a `Message.field` path of a schema.
    WithPath {
        inner: Box<SchemaError>,
        path: String,
    },

    Multiple(Vec<SchemaError>),
}

impl_domain_error! {
    TypeExprError => TypeExpr,
    DocumentError => Document,
    ConfigError => Config,
}

impl SchemaError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::TypeExpr(e) => e.error_code(),
            Self::Document(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::WithSource { inner, .. } | Self::WithPath { inner, .. } => inner.error_code(),
            Self::Multiple(errs) => {
                errs.first()
                    .map(|e| e.error_code())
                    .unwrap_or_else(|| ErrorCode::new(Domain::TE, Category::Internal, 1))
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::TypeExpr(e) => e.message(),
            Self::Document(e) => e.message(),
            Self::Config(e) => e.message(),
            Self::WithSource { inner, .. } => inner.message(),
            Self::WithPath { inner, path } => format!("{path}: {}", inner.message()),
            Self::Multiple(errs) => {
                if errs.len() == 1 {
                    errs[0].message()
                } else {
                    format!("{} errors occurred", errs.len())
                }
            },
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::TypeExpr(e) => e.severity(),
            Self::Document(e) => e.severity(),
            Self::Config(e) => e.severity(),
            Self::WithSource { inner, .. } | Self::WithPath { inner, .. } => inner.severity(),
            Self::Multiple(errs) => {
                errs.iter()
                    .map(|e| e.severity())
                    .max_by_key(Severity::rank)
                    .unwrap_or(Severity::Error)
            },
        }
    }

    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            Self::TypeExpr(e) => e.help_text(),
            Self::Document(e) => e.help_text(),
            Self::Config(e) => e.help_text(),
            Self::WithSource { inner, .. } | Self::WithPath { inner, .. } => inner.help_text(),
            Self::Multiple(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::TypeExpr(e) => e.span(),
            Self::Document(e) => e.span(),
            Self::Config(e) => e.span(),
            Self::WithSource { inner, .. } | Self::WithPath { inner, .. } => inner.span(),
            Self::Multiple(errs) => errs.first().and_then(|e| e.span()),
        }
    }

    pub fn with_source(
        self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::WithSource {
            inner: Box::new(self),
            name: name.into(),
            source: source.into(),
        }
    }

    pub fn with_path(
        self,
        path: impl Into<String>,
    ) -> Self {
        Self::WithPath {
            inner: Box::new(self),
            path: path.into(),
        }
    }

    /// Innermost `(name, source)` attachment, if any.
    pub fn extract_source(&self) -> Option<(&str, &str)> {
        match self {
            Self::WithSource {
                inner,
                name,
                source,
            } => {
                inner
                    .extract_source()
                    .or(Some((name.as_str(), source.as_str())))
            },
            Self::WithPath { inner, .. } => inner.extract_source(),
            _ => None,
        }
    }

    /// Flattens nested `Multiple` wrappers into the leaf errors.
    pub fn errors(&self) -> Vec<&SchemaError> {
        match self {
            Self::Multiple(errs) => errs.iter().flat_map(|e| e.errors()).collect(),
            other => vec![other],
        }
    }

    /// Converts to a miette Report for display.
    pub fn to_report(&self) -> miette::Report {
        miette::Report::new(SpanDiagnostic::from(self))
    }

    pub fn is_fatal(&self) -> bool {
        self.severity().is_fatal()
    }
}

impl std::fmt::Display for SchemaError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SchemaError {}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
