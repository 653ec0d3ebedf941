/// Declares a domain error enum.
///
/// Each variant carries an error code, a message template, optional help
/// text, an optional severity override and optional fields. Every variant
/// also gets an `Option<Span>` slot filled in by the builder.
#[macro_export]
macro_rules! define_domain_errors {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident {
                    code: ($domain:ident, $category:ident, $seq:literal),
                    message: $msg:literal
                    $(, help: $help:literal)?
                    $(, severity: $severity:ident)?
                    $(, fields: { $($field:ident: $ftype:ty),* $(,)? })?
                    $(,)?
                }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant {
                    $($($field: $ftype,)*)?
                    span: Option<$crate::Span>,
                },
            )*
        }

        impl $name {
            pub const fn error_code(&self) -> $crate::ErrorCode {
                match self {
                    $(
                        Self::$variant { .. } => $crate::ErrorCode::new(
                            $crate::Domain::$domain,
                            $crate::Category::$category,
                            $seq
                        ),
                    )*
                }
            }

            pub fn message(&self) -> String {
                match self {
                    $(
                        Self::$variant { $($($field,)*)? .. } => {
                            format!($msg $(, $($field = $field),*)?)
                        }
                    )*
                }
            }

            pub fn help_text(&self) -> Option<&'static str> {
                match self {
                    $(
                        Self::$variant { .. } => $crate::define_domain_errors!(@help $($help)?),
                    )*
                }
            }

            pub fn severity(&self) -> $crate::Severity {
                match self {
                    $(
                        Self::$variant { .. } => $crate::define_domain_errors!(@severity $($severity)?),
                    )*
                }
            }

            pub fn span(&self) -> Option<$crate::Span> {
                match self {
                    $(Self::$variant { span, .. } => *span,)*
                }
            }

            pub fn with_span(mut self, new_span: $crate::Span) -> Self {
                match &mut self {
                    $(Self::$variant { span, .. } => *span = Some(new_span),)*
                }
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.message())
            }
        }

        impl std::error::Error for $name {}
    };

    (@help) => { None };
    (@help $help:literal) => { Some($help) };
    (@severity) => { $crate::Severity::Error };
    (@severity $severity:ident) => { $crate::Severity::$severity };
}

/// Wires a domain enum into [`SchemaError`](crate::SchemaError).
macro_rules! impl_domain_error {
    ($($name:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$name> for $crate::SchemaError {
                fn from(e: $name) -> Self {
                    Self::$variant(e)
                }
            }

            impl $crate::DomainError for $name {
                fn with_span(
                    self,
                    span: $crate::Span,
                ) -> Self {
                    $name::with_span(self, span)
                }
            }
        )+
    };
}
