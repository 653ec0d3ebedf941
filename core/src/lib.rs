//! Parsing and canonicalization of field type expressions.
//!
//! ```
//! use vartype_core::{DataType, Message, parse};
//!
//! let catalog = vec![Message::builder().name("User").build()];
//! let ty = parse("map<string,[]User>", &catalog).unwrap();
//!
//! assert_eq!(ty.expr(), "map<string,[]User>");
//! assert_eq!(ty.as_map().unwrap().key, DataType::String);
//! ```

pub mod canonical;
mod catalog;
mod config;
mod data_type;
mod parse;
mod var_type;

#[cfg(test)]
pub(crate) mod tst;

pub use canonical::serialize;
pub use catalog::{Ident, Message, MessageCatalog, MessageField, MessageId, Schema};
pub use crate::config::{NewForConfig, ParseConfig};
pub use data_type::DataType;
pub use parse::{LIST_MARKER, MAP_MARKER, parse, parse_with};
pub use var_type::{UNKNOWN_SPELLING, VarKind, VarList, VarMap, VarStruct, VarType};

pub use vartype_errors as errors;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("{0}")]
    Validations(#[from] validator::ValidationErrors),

    #[error("[{src}] {error}")]
    SourceFile { error: Box<Self>, src: String },

    #[error("'{0}' is not a primitive type")]
    UnknownDataType(String),
}

impl Error {
    pub fn with_source(
        self,
        src: String,
    ) -> Self {
        Self::SourceFile {
            error: Box::new(self),
            src,
        }
    }

    pub fn with_source_init(src: String) -> impl FnOnce(Self) -> Self {
        |err| err.with_source(src)
    }

    pub fn from_with_source_init<E: Into<Self>>(src: String) -> impl FnOnce(E) -> Self {
        |err| Self::with_source_init(src)(err.into())
    }
}

impl From<Error> for vartype_errors::SchemaError {
    fn from(err: Error) -> Self {
        use vartype_errors::{ConfigError, DomainError, TypeExprError};
        match err {
            Error::Config(e) => {
                ConfigError::load_failed("<config>", e.to_string())
                    .unlocated()
                    .build()
            },
            Error::Validations(e) => {
                ConfigError::invalid_value("<config>", e.to_string())
                    .unlocated()
                    .build()
            },
            Error::SourceFile { error, src } => {
                match *error {
                    Error::Config(e) => {
                        ConfigError::load_failed(src, e.to_string())
                            .unlocated()
                            .build()
                    },
                    Error::Validations(e) => {
                        ConfigError::invalid_value(src, e.to_string())
                            .unlocated()
                            .build()
                    },
                    other => other.into(),
                }
            },
            Error::UnknownDataType(s) => {
                TypeExprError::unknown_type(s)
                    .unlocated()
                    .build()
            },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
