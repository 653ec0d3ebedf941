//! Recursive descent over type expressions.
//!
//! Rules are tried in a fixed order:
//!
//! 1. empty input is rejected
//! 2. an exact primitive spelling is a primitive
//! 3. a `[]` prefix is a list of whatever follows
//! 4. a `map<` prefix is a map, split on its single top-level comma
//! 5. anything else must name a message in the catalog
//!
//! Primitive lookup runs before the message lookup, so a message sharing a
//! primitive's spelling can never be referenced by name.

use vartype_errors::{Span, TypeExprError};

use crate::{
    DataType, MessageCatalog, ParseConfig, VarKind, VarList, VarMap, VarStruct, VarType,
    canonical,
};

pub const LIST_MARKER: &str = "[]";
pub const MAP_MARKER: &str = "map";

const MAP_OPEN: &str = "map<";

/// Parses `expr` with the default configuration.
pub fn parse<C: MessageCatalog + ?Sized>(
    expr: &str,
    catalog: &C,
) -> Result<VarType, TypeExprError> {
    parse_with(expr, catalog, &ParseConfig::default())
}

/// Parses `expr`, resolving message names against `catalog`.
///
/// The first error at any depth aborts the whole parse; nothing partial is
/// returned.
pub fn parse_with<C: MessageCatalog + ?Sized>(
    expr: &str,
    catalog: &C,
    config: &ParseConfig,
) -> Result<VarType, TypeExprError> {
    tracing::debug!(expr, "parsing type expression");

    let parser = Parser {
        root: expr,
        catalog,
        config,
    };

    let mut ty = parser
        .parse_at(expr, 0, 0)
        .inspect_err(|err| tracing::debug!(expr, code = %err.error_code(), "{err}"))?;

    ty.set_expr(canonical::serialize(&ty));
    tracing::trace!(expr, kind = ty.kind().name(), "parsed type expression");

    Ok(ty)
}

struct Parser<'a, C: ?Sized> {
    root: &'a str,
    catalog: &'a C,
    config: &'a ParseConfig,
}

impl<C: MessageCatalog + ?Sized> Parser<'_, C> {
    /// `offset` is where `expr` starts inside the root expression.
    fn parse_at(
        &self,
        expr: &str,
        offset: usize,
        depth: usize,
    ) -> Result<VarType, TypeExprError> {
        let span = Span::at(offset, expr.len());

        if depth > self.config.max_depth {
            return Err(TypeExprError::max_depth(self.root, self.config.max_depth).with_span(span));
        }

        if expr.trim().is_empty() {
            return Err(TypeExprError::empty(expr).with_span(span));
        }

        if let Some(ty) = DataType::from_spelling(expr) {
            tracing::trace!(expr, "primitive");
            return Ok(VarType::parsed(expr, VarKind::Primitive(ty)));
        }

        if let Some(rest) = expr.strip_prefix(LIST_MARKER) {
            tracing::trace!(expr, "list");
            if rest.is_empty() {
                return Err(TypeExprError::empty(expr).with_span(span));
            }

            let elem = self.parse_at(rest, offset + LIST_MARKER.len(), depth + 1)?;
            return Ok(VarType::parsed(
                expr,
                VarKind::List(VarList {
                    elem: Box::new(elem),
                }),
            ));
        }

        if expr.starts_with(MAP_OPEN) {
            tracing::trace!(expr, "map");
            let parts = split_map(expr)
                .ok_or_else(|| TypeExprError::invalid_map_syntax(expr).with_span(span))?;

            let key = DataType::map_key_from_spelling(parts.key).ok_or_else(|| {
                TypeExprError::invalid_map_key(parts.key, expr)
                    .with_span(Span::at(offset + MAP_OPEN.len(), parts.key.len()))
            })?;

            let value = self.parse_at(parts.value, offset + parts.value_offset, depth + 1)?;
            return Ok(VarType::parsed(
                expr,
                VarKind::Map(VarMap {
                    key,
                    value: Box::new(value),
                }),
            ));
        }

        tracing::trace!(expr, "message reference");
        let (message, found) = self
            .catalog
            .lookup(expr)
            .ok_or_else(|| TypeExprError::unknown_type(expr).with_span(span))?;

        Ok(VarType::parsed(
            expr,
            VarKind::Struct(VarStruct {
                name: found.name.clone(),
                message,
            }),
        ))
    }
}

#[derive(Debug, PartialEq)]
struct MapParts<'e> {
    key: &'e str,
    value: &'e str,
    /// Byte offset of `value` inside the whole map expression.
    value_offset: usize,
}

/// Splits `map<K,V>` at its only top-level comma.
///
/// Angle brackets are tracked just far enough to ignore commas belonging to a
/// nested map value; the value itself is handed back whole for the recursive
/// parse to take apart.
fn split_map(expr: &str) -> Option<MapParts<'_>> {
    let inner = expr
        .strip_prefix(MAP_OPEN)?
        .strip_suffix('>')?;

    let mut depth = 0usize;
    let mut comma = None;

    for (i, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                if comma.replace(i).is_some() {
                    return None;
                }
            },
            _ => {},
        }
    }

    if depth != 0 {
        return None;
    }

    let at = comma?;
    let (key, value) = (&inner[..at], &inner[at + 1..]);
    if value.is_empty() {
        return None;
    }

    Some(MapParts {
        key,
        value,
        value_offset: MAP_OPEN.len() + at + 1,
    })
}
