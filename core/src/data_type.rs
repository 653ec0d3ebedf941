use std::{fmt::Display, str::FromStr};

macro_rules! data_types {
    ($($variant: ident => $spelling: literal), + $(,)?) => {
        /// Scalar types a type expression can name directly.
        #[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum DataType {
            $(
                #[serde(rename = $spelling)]
                $variant,
            )*
        }

        impl DataType {
            /// Every primitive, in declaration order.
            pub const ALL: &'static [DataType] = &[
                $(Self::$variant,)*
            ];

            /// Canonical spelling. Every variant has exactly one.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $spelling,
                    )*
                }
            }

            /// Exact, case-sensitive lookup. No aliases.
            pub fn from_spelling(s: &str) -> Option<Self> {
                match s {
                    $(
                        $spelling => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }
        }
    };
}

data_types! {
    Null => "null",
    Any => "any",
    Byte => "byte",
    Bool => "bool",

    Uint => "uint",
    Uint8 => "uint8",
    Uint16 => "uint16",
    Uint32 => "uint32",
    Uint64 => "uint64",

    Int => "int",
    Int8 => "int8",
    Int16 => "int16",
    Int32 => "int32",
    Int64 => "int64",

    Float32 => "float32",
    Float64 => "float64",

    String => "string",
    Timestamp => "timestamp",
}

impl DataType {
    /// Types allowed as a map key, in order.
    pub const MAP_KEYS: &'static [DataType] = &[
        Self::String,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
    ];

    pub const INTEGERS: &'static [DataType] = &[
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
    ];

    pub fn is_map_key(&self) -> bool {
        Self::MAP_KEYS.contains(self)
    }

    pub fn is_integer(&self) -> bool {
        Self::INTEGERS.contains(self)
    }

    /// Spelling lookup restricted to the map key whitelist.
    pub fn map_key_from_spelling(s: &str) -> Option<Self> {
        Self::from_spelling(s).filter(Self::is_map_key)
    }
}

impl Display for DataType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_spelling(s).ok_or_else(|| crate::Error::UnknownDataType(s.to_string()))
    }
}
