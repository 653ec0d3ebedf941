//! Messages that struct references resolve against.
//!
//! Type expressions never own the message they name. A struct reference keeps
//! the message's name and its [`MessageId`], the position of the message in
//! the catalog, so a message may refer to itself or to messages declared
//! after it without any ownership cycle.

use std::{fmt::Display, ops::Deref};

use vartype_errors::{DomainError, SchemaError};

use crate::{ParseConfig, VarType, parse::parse_with};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ident(String);

impl Ident {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self::from(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ident {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for Ident {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl Deref for Ident {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Position of a message in its catalog.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(usize);

impl MessageId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Read-only, name-exact message lookup.
pub trait MessageCatalog {
    fn lookup(
        &self,
        name: &str,
    ) -> Option<(MessageId, &Message)>;

    fn message(
        &self,
        id: MessageId,
    ) -> Option<&Message>;
}

impl MessageCatalog for [Message] {
    fn lookup(
        &self,
        name: &str,
    ) -> Option<(MessageId, &Message)> {
        self.iter()
            .enumerate()
            .find(|(_, msg)| msg.name.as_str() == name)
            .map(|(index, msg)| (MessageId::new(index), msg))
    }

    fn message(
        &self,
        id: MessageId,
    ) -> Option<&Message> {
        self.get(id.index())
    }
}

impl MessageCatalog for Vec<Message> {
    fn lookup(
        &self,
        name: &str,
    ) -> Option<(MessageId, &Message)> {
        self.as_slice().lookup(name)
    }

    fn message(
        &self,
        id: MessageId,
    ) -> Option<&Message> {
        self.as_slice().message(id)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, bon::Builder)]
pub struct Message {
    #[builder(into)]
    pub name: Ident,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(default)]
    #[builder(default)]
    pub fields: Vec<MessageField>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, bon::Builder)]
pub struct MessageField {
    #[builder(into)]
    pub name: Ident,

    #[serde(rename = "type")]
    #[builder(into)]
    pub ty: VarType,

    #[serde(default)]
    #[builder(default)]
    pub optional: bool,
}

impl Message {
    pub fn field(
        &self,
        name: &str,
    ) -> Option<&MessageField> {
        self.fields
            .iter()
            .find(|f| f.name.as_str() == name)
    }
}

/// A schema document: its messages are the catalog its own field types
/// resolve against.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default, bon::Builder)]
pub struct Schema {
    #[serde(default)]
    #[builder(into, default)]
    pub name: String,

    #[serde(default)]
    #[builder(into, default)]
    pub version: String,

    #[serde(default)]
    #[builder(default)]
    pub messages: Vec<Message>,
}

impl MessageCatalog for Schema {
    fn lookup(
        &self,
        name: &str,
    ) -> Option<(MessageId, &Message)> {
        self.messages.lookup(name)
    }

    fn message(
        &self,
        id: MessageId,
    ) -> Option<&Message> {
        self.messages.message(id)
    }
}

impl Schema {
    /// Parses every field type against this schema's messages.
    ///
    /// All failing fields are reported, each under its `Message.field` path.
    /// Fields are only updated when every one of them parsed.
    pub fn resolve_types(
        &mut self,
        config: &ParseConfig,
    ) -> Result<(), SchemaError> {
        tracing::debug!(
            schema = self.name,
            messages = self.messages.len(),
            "resolving field types"
        );

        let mut resolved = Vec::new();
        let mut errors = Vec::new();

        for (mi, msg) in self.messages.iter().enumerate() {
            for (fi, field) in msg.fields.iter().enumerate() {
                let path = format!("{}.{}", msg.name, field.name);
                match parse_with(field.ty.expr(), &*self, config) {
                    Ok(ty) => resolved.push((mi, fi, ty)),
                    Err(err) => {
                        let span = err.span();
                        let err = err
                            .at_opt(span)
                            .in_source(&path, field.ty.expr())
                            .build();
                        errors.push(err.with_path(path));
                    },
                }
            }
        }

        if !errors.is_empty() {
            tracing::warn!(
                schema = self.name,
                errors = errors.len(),
                "field types failed to resolve"
            );
            return Err(SchemaError::Multiple(errors));
        }

        for (mi, fi, ty) in resolved {
            self.messages[mi].fields[fi].ty = ty;
        }

        Ok(())
    }
}
