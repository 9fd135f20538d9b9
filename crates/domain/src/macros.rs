//! Macro for implementing Display and FromStr for wire-name enums
//!
//! Several closed vocabularies in the SDK (log levels, event names) travel
//! as plain strings. This macro gives each enum a single table mapping
//! variants to their wire names and derives `as_str`, `ALL`, `Display` and
//! `FromStr` from it.
//!
//! # Example
//!
//! ```rust
//! use forte_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Stable,
//!     Beta,
//! }
//!
//! impl_wire_name_conversions!(Channel {
//!     Stable => "stable",
//!     Beta => "beta",
//! });
//!
//! assert_eq!(Channel::ALL.len(), 2);
//! assert_eq!("beta".parse::<Channel>(), Ok(Channel::Beta));
//! ```

/// Implements `as_str`, `ALL`, Display and FromStr for wire-name enums
///
/// Parsing is exact: the API treats `"Info"` and `"info"` as different
/// values, so no case folding happens here. `ALL` preserves declaration
/// order.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
