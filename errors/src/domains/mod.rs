pub mod config;
pub mod document;
pub mod type_expr;

pub use config::ConfigError;
pub use document::DocumentError;
pub use type_expr::TypeExprError;
