//! Typestate builder for span attachment.
//!
//! Every error built into a [`SchemaError`] either carries an explicit span or
//! is explicitly marked as unlocated.
//!
//! ```
//! use vartype_errors::{DomainError, Span, TypeExprError};
//!
//! let err = TypeExprError::unknown_type("Userr")
//!     .at(Span::new(2, 7))
//!     .build();
//!
//! assert_eq!(err.span(), Some(Span::new(2, 7)));
//! ```

use crate::{SchemaError, Span};

/// Marker for errors that don't yet have a span decision.
pub struct Unspanned;

/// Marker for errors that have an attached span.
pub struct Spanned(pub(crate) Span);

/// Marker for errors explicitly without location information.
pub struct Unlocated;

/// Marker for errors whose span is only known at runtime.
pub struct MaybeSpanned(pub(crate) Option<Span>);

/// A domain error that can be wrapped into [`SchemaError`].
pub trait DomainError: Sized + Into<SchemaError> {
    fn with_span(
        self,
        span: Span,
    ) -> Self;

    fn into_schema_error(self) -> SchemaError {
        self.into()
    }

    fn at(
        self,
        span: impl Into<Span>,
    ) -> ErrorBuilder<Spanned, Self> {
        ErrorBuilder::new(self).at(span)
    }

    fn unlocated(self) -> ErrorBuilder<Unlocated, Self> {
        ErrorBuilder::new(self).unlocated()
    }

    fn at_opt(
        self,
        span: Option<Span>,
    ) -> ErrorBuilder<MaybeSpanned, Self> {
        ErrorBuilder::new(self).at_opt(span)
    }
}

pub struct ErrorBuilder<S, E> {
    error: E,
    span_state: S,
    source: Option<(String, String)>,
}

impl<E: DomainError> ErrorBuilder<Unspanned, E> {
    pub fn new(error: E) -> Self {
        Self {
            error,
            span_state: Unspanned,
            source: None,
        }
    }

    pub fn at(
        self,
        span: impl Into<Span>,
    ) -> ErrorBuilder<Spanned, E> {
        ErrorBuilder {
            error: self.error,
            span_state: Spanned(span.into()),
            source: self.source,
        }
    }

    /// Attach an optional span. `None` keeps whatever span the error holds.
    pub fn at_opt(
        self,
        span: Option<Span>,
    ) -> ErrorBuilder<MaybeSpanned, E> {
        ErrorBuilder {
            error: self.error,
            span_state: MaybeSpanned(span),
            source: self.source,
        }
    }

    pub fn unlocated(self) -> ErrorBuilder<Unlocated, E> {
        ErrorBuilder {
            error: self.error,
            span_state: Unlocated,
            source: self.source,
        }
    }
}

impl<E: DomainError> ErrorBuilder<Spanned, E> {
    /// Attach the text the span points into.
    pub fn in_source(
        mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.source = Some((name.into(), source.into()));
        self
    }

    pub fn build(self) -> SchemaError {
        let err = self
            .error
            .with_span(self.span_state.0)
            .into_schema_error();

        match self.source {
            Some((name, source)) => err.with_source(name, source),
            None => err,
        }
    }
}

impl<E: DomainError> ErrorBuilder<MaybeSpanned, E> {
    pub fn in_source(
        mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.source = Some((name.into(), source.into()));
        self
    }

    pub fn build(self) -> SchemaError {
        let error = match self.span_state.0 {
            Some(span) => self.error.with_span(span),
            None => self.error,
        };
        let err = error.into_schema_error();

        match self.source {
            Some((name, source)) => err.with_source(name, source),
            None => err,
        }
    }
}

impl<E: DomainError> ErrorBuilder<Unlocated, E> {
    pub fn build(self) -> SchemaError {
        self.error.into_schema_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Domain, TypeExprError};

    #[test]
    fn builder_with_span() {
        let err = TypeExprError::unknown_type("Foo")
            .at(Span::new(10, 13))
            .build();

        assert_eq!(err.error_code().domain, Domain::TE);
        assert_eq!(err.error_code().category, Category::Resolution);
        assert_eq!(err.span(), Some(Span::new(10, 13)));
    }

    #[test]
    fn builder_unlocated() {
        let err = TypeExprError::unknown_type("Bar")
            .unlocated()
            .build();

        assert_eq!(err.error_code().domain, Domain::TE);
        assert_eq!(err.span(), None);
    }

    #[test]
    fn builder_at_opt() {
        let err = TypeExprError::unknown_type("Baz")
            .at_opt(None)
            .build();
        assert_eq!(err.span(), None);
        assert!(matches!(err, SchemaError::TypeExpr(..)));

        let err = TypeExprError::unknown_type("Baz")
            .at_opt(Some(Span::new(2, 5)))
            .in_source("Team.members", "[]Baz")
            .build();
        assert_eq!(err.span(), Some(Span::new(2, 5)));
        assert_eq!(err.extract_source(), Some(("Team.members", "[]Baz")));
    }

    #[test]
    fn builder_at_opt_keeps_existing_span() {
        let located = TypeExprError::unknown_type("Baz").with_span(Span::new(1, 4));
        let err = located
            .at_opt(None)
            .in_source("expr", "[Baz")
            .build();
        assert_eq!(err.span(), Some(Span::new(1, 4)));
        assert!(matches!(err, SchemaError::WithSource { .. }));
    }

    #[test]
    fn builder_with_source() {
        let err = TypeExprError::unknown_type("Foo")
            .at(Span::new(2, 5))
            .in_source("expr", "[]Foo")
            .build();

        assert!(matches!(err, SchemaError::WithSource { .. }));
        assert_eq!(err.extract_source(), Some(("expr", "[]Foo")));
    }
}
