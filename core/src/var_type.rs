//! Structured form of a type expression.
//!
//! A [`VarType`] starts out holding only the raw text it was written as and
//! an [`VarKind::Unknown`] kind. Parsing fills in the kind exactly once and
//! replaces the text with its canonical spelling.

use std::fmt::Display;

use vartype_errors::{DocumentError, DomainError, SchemaError, TypeExprError};

use crate::{
    DataType, Ident, Message, MessageCatalog, MessageId, ParseConfig, canonical, parse::parse_with,
};

/// Sentinel spelling of a type that never reached a concrete kind.
pub const UNKNOWN_SPELLING: &str = "<unknown>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarType {
    expr: String,
    kind: VarKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarKind {
    Unknown,
    Primitive(DataType),
    List(VarList),
    Map(VarMap),
    Struct(VarStruct),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarList {
    pub elem: Box<VarType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarMap {
    /// Always one of [`DataType::MAP_KEYS`].
    pub key: DataType,
    pub value: Box<VarType>,
}

/// Reference to a message owned by a [`MessageCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarStruct {
    pub name: Ident,
    pub message: MessageId,
}

impl VarType {
    /// An unparsed type holding only its raw text.
    pub fn new<S: Into<String>>(expr: S) -> Self {
        Self {
            expr: expr.into(),
            kind: VarKind::Unknown,
        }
    }

    /// Builds a type from an already-validated kind, spelling it canonically.
    pub(crate) fn from_kind(kind: VarKind) -> Self {
        let expr = kind.to_string();
        Self { expr, kind }
    }

    /// A parsed node still spelled as written.
    pub(crate) fn parsed(
        expr: &str,
        kind: VarKind,
    ) -> Self {
        Self {
            expr: expr.to_string(),
            kind,
        }
    }

    pub fn primitive(ty: DataType) -> Self {
        Self::from_kind(VarKind::Primitive(ty))
    }

    pub fn list(elem: VarType) -> Self {
        Self::from_kind(VarKind::List(VarList {
            elem: Box::new(elem),
        }))
    }

    /// Fails when `key` is not a map key type.
    pub fn map(
        key: DataType,
        value: VarType,
    ) -> Result<Self, TypeExprError> {
        if !key.is_map_key() {
            return Err(TypeExprError::invalid_map_key(
                key.as_str(),
                format!("map<{key},{value}>"),
            ));
        }
        Ok(Self::from_kind(VarKind::Map(VarMap {
            key,
            value: Box::new(value),
        })))
    }

    /// Resolves `name` against `catalog`.
    pub fn message_ref<C: MessageCatalog + ?Sized>(
        name: &str,
        catalog: &C,
    ) -> Result<Self, TypeExprError> {
        let (message, found) = catalog
            .lookup(name)
            .ok_or_else(|| TypeExprError::unknown_type(name))?;
        Ok(Self::from_kind(VarKind::Struct(VarStruct {
            name: found.name.clone(),
            message,
        })))
    }

    /// Accepts a raw document token: a non-empty, double-quoted string.
    ///
    /// Quotes are stripped with no escape processing. The result is unparsed.
    pub fn from_quoted(raw: &str) -> Result<Self, SchemaError> {
        if raw.len() <= 2 {
            return Err(DocumentError::empty_value(raw)
                .unlocated()
                .build());
        }

        raw.strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .map(Self::new)
            .ok_or_else(|| {
                DocumentError::string_expected(raw)
                    .unlocated()
                    .build()
            })
    }

    /// Parses a fresh type from `expr` with the default configuration.
    pub fn parse_expr<C: MessageCatalog + ?Sized>(
        expr: &str,
        catalog: &C,
    ) -> Result<Self, TypeExprError> {
        parse_with(expr, catalog, &ParseConfig::default())
    }

    /// Parses the held raw text in place.
    ///
    /// On error `self` is left untouched.
    pub fn parse<C: MessageCatalog + ?Sized>(
        &mut self,
        catalog: &C,
    ) -> Result<(), TypeExprError> {
        self.parse_with(catalog, &ParseConfig::default())
    }

    pub fn parse_with<C: MessageCatalog + ?Sized>(
        &mut self,
        catalog: &C,
        config: &ParseConfig,
    ) -> Result<(), TypeExprError> {
        *self = parse_with(&self.expr, catalog, config)?;
        Ok(())
    }

    /// Canonical text once parsed, raw text before.
    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn kind(&self) -> &VarKind {
        &self.kind
    }

    pub fn is_parsed(&self) -> bool {
        !matches!(self.kind, VarKind::Unknown)
    }

    pub fn data_type(&self) -> Option<DataType> {
        match &self.kind {
            VarKind::Primitive(ty) => Some(*ty),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&VarList> {
        match &self.kind {
            VarKind::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&VarMap> {
        match &self.kind {
            VarKind::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&VarStruct> {
        match &self.kind {
            VarKind::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up the message a struct reference points at.
    pub fn message<'c, C: MessageCatalog + ?Sized>(
        &self,
        catalog: &'c C,
    ) -> Option<&'c Message> {
        self.as_struct()
            .and_then(|s| catalog.message(s.message))
    }

    pub(crate) fn set_expr(
        &mut self,
        expr: String,
    ) {
        self.expr = expr;
    }
}

impl VarKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Primitive(..) => "primitive",
            Self::List(..) => "list",
            Self::Map(..) => "map",
            Self::Struct(..) => "struct",
        }
    }
}

impl Display for VarType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.expr)
    }
}

impl Display for VarKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&canonical::serialize_kind(self))
    }
}

impl From<&str> for VarType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VarType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl serde::Serialize for VarType {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.expr)
    }
}

impl<'de> serde::Deserialize<'de> for VarType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expr = String::deserialize(deserializer)?;
        if expr.is_empty() {
            return Err(serde::de::Error::custom(DocumentError::empty_value(
                "\"\"",
            )));
        }
        Ok(Self::new(expr))
    }
}
