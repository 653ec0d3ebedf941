use crate::{LIST_MARKER, MAP_MARKER, UNKNOWN_SPELLING, VarKind, VarType};

/// Canonical spelling of a type, rebuilt from its structure.
///
/// Assumes a well-formed type; never fails.
pub fn serialize(ty: &VarType) -> String {
    serialize_kind(ty.kind())
}

pub(crate) fn serialize_kind(kind: &VarKind) -> String {
    let mut w = CanonicalWriter::default();
    w.write_kind(kind);
    w.buf
}

#[derive(Default, Debug)]
struct CanonicalWriter {
    buf: String,
}

impl CanonicalWriter {
    fn word(
        &mut self,
        s: &str,
    ) {
        self.buf.push_str(s);
    }

    fn write_kind(
        &mut self,
        kind: &VarKind,
    ) {
        match kind {
            VarKind::Unknown => self.word(UNKNOWN_SPELLING),
            VarKind::Primitive(ty) => self.word(ty.as_str()),
            VarKind::List(list) => {
                self.word(LIST_MARKER);
                self.write_kind(list.elem.kind());
            },
            VarKind::Map(map) => {
                self.word(MAP_MARKER);
                self.buf.push('<');
                self.word(map.key.as_str());
                self.buf.push(',');
                self.write_kind(map.value.kind());
                self.buf.push('>');
            },
            VarKind::Struct(s) => self.word(s.name.as_str()),
        }
    }
}
