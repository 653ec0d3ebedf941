//! miette view of a [`SchemaError`], labelled over the expression it came from.

use miette::{Diagnostic, NamedSource, SourceSpan};

use crate::{ErrorCode, SchemaError, Severity};

#[derive(Debug)]
pub struct SpanDiagnostic {
    code: ErrorCode,
    message: String,
    severity: Severity,
    help: Option<&'static str>,
    span: Option<SourceSpan>,
    src: Option<NamedSource<String>>,
}

impl From<&SchemaError> for SpanDiagnostic {
    fn from(err: &SchemaError) -> Self {
        Self {
            code: err.error_code(),
            message: err.message(),
            severity: err.severity(),
            help: err.help_text(),
            span: err.span().map(SourceSpan::from),
            src: err
                .extract_source()
                .map(|(name, source)| NamedSource::new(name, source.to_string())),
        }
    }
}

impl std::fmt::Display for SpanDiagnostic {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SpanDiagnostic {}

impl Diagnostic for SpanDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info | Severity::Hint => miette::Severity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.src
            .as_ref()
            .map(|s| s as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(
            miette::LabeledSpan::new_with_span(Some(self.message.clone()), span),
        )))
    }
}
