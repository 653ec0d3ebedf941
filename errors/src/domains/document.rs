//! Schema document errors (VDC)

define_domain_errors! {
    /// Errors in the document a type expression is embedded in.
    pub enum DocumentError {
        /// VDC0001: Value is not a non-empty quoted string
        MalformedQuotedValue {
            code: (DC, Syntax, 1),
            message: "malformed quoted value {value}: {reason}",
            help: "type expressions are written as non-empty quoted strings, e.g. \"[]uint32\"",
            fields: { value: String, reason: String },
        },
    }
}

impl DocumentError {
    pub fn empty_value(value: impl Into<String>) -> Self {
        Self::MalformedQuotedValue {
            value: value.into(),
            reason: "type cannot be empty".into(),
            span: None,
        }
    }

    pub fn string_expected(value: impl Into<String>) -> Self {
        Self::MalformedQuotedValue {
            value: value.into(),
            reason: "string value is expected".into(),
            span: None,
        }
    }
}
