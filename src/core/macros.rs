//! Declarative helpers shared across the data model

/// Declares a fieldless enum whose variants map one-to-one onto the stable
/// camelCase string keys used in catalogs and decision logs.
///
/// Generates serde renames, `as_str`, `Display`, `FromStr` and an `ALL`
/// slice in declaration order.
#[macro_export]
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable string key
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::error::LifeSimError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err($crate::core::error::LifeSimError::UnknownKey {
                        kind: stringify!($name),
                        key: other.to_string(),
                    }),
                }
            }
        }
    };
}
