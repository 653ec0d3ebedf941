//! Configuration errors (VCF)

define_domain_errors! {
    pub enum ConfigError {
        /// VCF0001: Configuration sources could not be read or decoded
        LoadFailed {
            code: (CF, Syntax, 1),
            message: "failed to load configuration from {path}: {reason}",
            fields: { path: String, reason: String },
        },

        /// VCF2001: A configuration value is out of range
        InvalidValue {
            code: (CF, Validation, 1),
            message: "invalid configuration in {path}: {reason}",
            help: "max_depth must be between 1 and 4096",
            fields: { path: String, reason: String },
        },
    }
}

impl ConfigError {
    pub fn load_failed(
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::LoadFailed {
            path: path.into(),
            reason: reason.into(),
            span: None,
        }
    }

    pub fn invalid_value(
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            path: path.into(),
            reason: reason.into(),
            span: None,
        }
    }
}
