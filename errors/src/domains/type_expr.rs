//! Type expression errors (VTE)
//! Errors raised while parsing a type expression such as `map<string,[]User>`.

define_domain_errors! {
    /// Type expression errors (VTE domain)
    pub enum TypeExprError {
        /// VTE0001: Malformed map expression
        InvalidMapSyntax {
            code: (TE, Syntax, 1),
            message: "invalid map syntax for '{expr}'",
            help: "write maps as map<key,value> with exactly one top-level comma",
            fields: { expr: String },
        },

        /// VTE1001: Not a primitive, container or known message
        UnknownType {
            code: (TE, Resolution, 1),
            message: "invalid struct/message type '{expr}'",
            help: "use a primitive type or declare a message with this exact name",
            fields: { expr: String },
        },

        /// VTE2001: Map key outside the key whitelist
        InvalidMapKeyType {
            code: (TE, Validation, 1),
            message: "invalid map key type '{key}' for '{expr}'",
            help: "map keys must be string or one of the integer types",
            fields: { key: String, expr: String },
        },

        /// VTE2002: Nesting limit reached
        MaxDepthExceeded {
            code: (TE, Validation, 2),
            message: "type expression '{expr}' nests deeper than {max_depth} levels",
            help: "flatten the type or raise max_depth in the parser configuration",
            fields: { expr: String, max_depth: usize },
        },

        /// VTE4001: Nothing to parse
        EmptyExpression {
            code: (TE, Missing, 1),
            message: "type expression cannot be empty: '{expr}'",
            help: "provide a primitive, list, map or message type",
            fields: { expr: String },
        },
    }
}

impl TypeExprError {
    pub fn empty(expr: impl Into<String>) -> Self {
        Self::EmptyExpression {
            expr: expr.into(),
            span: None,
        }
    }

    pub fn invalid_map_syntax(expr: impl Into<String>) -> Self {
        Self::InvalidMapSyntax {
            expr: expr.into(),
            span: None,
        }
    }

    pub fn invalid_map_key(
        key: impl Into<String>,
        expr: impl Into<String>,
    ) -> Self {
        Self::InvalidMapKeyType {
            key: key.into(),
            expr: expr.into(),
            span: None,
        }
    }

    pub fn unknown_type(expr: impl Into<String>) -> Self {
        Self::UnknownType {
            expr: expr.into(),
            span: None,
        }
    }

    pub fn max_depth(
        expr: impl Into<String>,
        max_depth: usize,
    ) -> Self {
        Self::MaxDepthExceeded {
            expr: expr.into(),
            max_depth,
            span: None,
        }
    }

    /// The offending expression text.
    pub fn expr(&self) -> &str {
        match self {
            Self::InvalidMapSyntax { expr, .. }
            | Self::UnknownType { expr, .. }
            | Self::InvalidMapKeyType { expr, .. }
            | Self::MaxDepthExceeded { expr, .. }
            | Self::EmptyExpression { expr, .. } => expr,
        }
    }
}
