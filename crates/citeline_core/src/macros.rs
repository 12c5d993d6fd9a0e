/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Declarative macros for the citeline crates.

/// Generates a string-identified option enum.
///
/// Every variant maps to one canonical identifier (plus optional aliases).
/// Parsing never fails: unrecognized identifiers resolve to the `fallback`
/// variant, which is also the `Default`. Serde (de)serializes the canonical
/// identifier, so option files written by hand stay forgiving.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident (fallback = $fallback:ident) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            #[doc = "Returns the canonical identifier for this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }

            /// Parse an identifier, returning `None` when it is not recognized.
            pub fn parse_known(id: &str) -> Option<Self> {
                let id = id.trim().to_ascii_lowercase();
                match id.as_str() {
                    $( $val $(| $alias)* => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Parse an identifier, falling back to the default variant.
            pub fn from_id(id: &str) -> Self {
                Self::parse_known(id).unwrap_or(Self::$fallback)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_id(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let id = String::deserialize(deserializer)?;
                Ok(Self::from_id(&id))
            }
        }

        #[cfg(feature = "schema")]
        impl schemars::JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_string()
            }

            fn json_schema(_gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
                schemars::schema::SchemaObject {
                    instance_type: Some(schemars::schema::InstanceType::String.into()),
                    enum_values: Some(vec![$( serde_json::Value::from($val), )+]),
                    ..Default::default()
                }
                .into()
            }
        }
    };
}

/// Builds an [`Entry`](crate::Entry) from a type, a key and `field = value`
/// pairs. Field names are the [`Field`](crate::Field) variants.
///
/// ```
/// use citeline_core::{entry, Field};
///
/// let e = entry!("article", "smith2020", Author = "Jane Smith", Year = "2020");
/// assert_eq!(e.get(Field::Year), Some("2020"));
/// ```
#[macro_export]
macro_rules! entry {
    ($ty:expr, $key:expr $(, $field:ident = $val:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut e = $crate::Entry::new($ty, $key);
        $( e.insert($crate::Field::$field, $val); )*
        e
    }};
}
