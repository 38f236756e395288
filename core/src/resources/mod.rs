//! Symbolic keys for localized resource strings.
//!
//! Every key maps one-to-one onto an entry of a resource namespace; the
//! key's name is the lookup key, so variants must never be renamed without
//! renaming the resource entry too.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generates a closed key enum with its name table, `Display` and `FromStr`.
macro_rules! resource_keys {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every key, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Symbolic name, used verbatim as the resource lookup key
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::resources::UnknownResourceKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    _ => Err($crate::resources::UnknownResourceKey(s.to_string())),
                }
            }
        }
    };
}

pub mod error_keys;
pub mod label_keys;

pub use error_keys::ErrorMessageKey;
pub use label_keys::LabelKey;

/// A string that names no key of the requested key set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource key: {0}")]
pub struct UnknownResourceKey(pub String);

/// Independent key/string tables, one per kind of localized text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceNamespace {
    /// Page and widget captions
    Ui,
    /// User facing error messages, keyed by [`ErrorMessageKey`]
    Error,
    /// Field labels, keyed by [`LabelKey`]
    Label,
    /// Informational messages
    Message,
}

impl ResourceNamespace {
    pub const ALL: [ResourceNamespace; 4] = [
        ResourceNamespace::Ui,
        ResourceNamespace::Error,
        ResourceNamespace::Label,
        ResourceNamespace::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceNamespace::Ui => "ui",
            ResourceNamespace::Error => "error",
            ResourceNamespace::Label => "label",
            ResourceNamespace::Message => "message",
        }
    }
}

impl std::fmt::Display for ResourceNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
