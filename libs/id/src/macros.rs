//! Macros for defining typed ID types.

/// Macro to define a typed ID wrapping a random [`Uuid`](crate::Uuid).
///
/// This generates a `Copy` newtype with:
/// - `new()` / `generate()` for a fresh random (v4) ID and a `NIL` constant
/// - `from_uuid()` / `uuid()` and `From` conversions in both directions
/// - byte-wise total ordering plus `compare()` and `compare_to_any()`
/// - `Display` in the canonical hyphenated layout, `format()` for other layouts
/// - `format_to()` / `format_to_utf8()` writing into caller buffers
/// - `parse()` / `try_parse()` and their UTF-8 byte variants, `FromStr`
/// - `convert_from()` for loosely-typed input and a `type_converter()` adapter
/// - `Serialize` / `Deserialize` delegating to the underlying UUID
///
/// # Example
///
/// ```
/// objid::define_id!(
///     /// Identifier of an order.
///     OrderId
/// );
///
/// let id = OrderId::new();
/// let parsed: OrderId = id.to_string().parse()?;
/// assert_eq!(id, parsed);
/// # Ok::<(), objid::IdError>(())
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Uuid);

        impl $name {
            /// Name of this ID type, used in error messages.
            pub const NAME: &'static str = stringify!($name);

            /// The all-zero ID.
            pub const NIL: Self = Self($crate::Uuid::nil());

            /// Creates a new ID with a fresh random UUID.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::Uuid::new_v4())
            }

            /// Alias for [`new`](Self::new).
            #[must_use]
            pub fn generate() -> Self {
                Self::new()
            }

            /// Creates an ID from a raw UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }

            /// Creates an ID from its 16 raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 16]) -> Self {
                Self($crate::Uuid::from_bytes(bytes))
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::Uuid {
                self.0
            }

            #[must_use]
            pub const fn as_uuid(&self) -> &$crate::Uuid {
                &self.0
            }

            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }

            #[must_use]
            pub const fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            /// Compares two IDs by the bytes of their UUIDs.
            #[must_use]
            pub fn compare(&self, other: &Self) -> ::std::cmp::Ordering {
                ::std::cmp::Ord::cmp(self, other)
            }

            /// Compares against an untyped value.
            ///
            /// `None` sorts before every ID. A value of any other type is
            /// rejected with `IdError::InvalidArgument`.
            pub fn compare_to_any(
                &self,
                other: ::std::option::Option<&dyn ::std::any::Any>,
            ) -> ::std::result::Result<::std::cmp::Ordering, $crate::IdError> {
                match other {
                    None => Ok(::std::cmp::Ordering::Greater),
                    Some(other) => other
                        .downcast_ref::<Self>()
                        .map(|other| self.compare(other))
                        .ok_or($crate::IdError::InvalidArgument {
                            expected: Self::NAME,
                        }),
                }
            }

            /// Parses an ID from text in any supported layout.
            pub fn parse(s: &str) -> ::std::result::Result<Self, $crate::IdError> {
                $crate::format::parse_str(s).map(Self)
            }

            /// Parses an ID from text, returning `None` if it is invalid.
            #[must_use]
            pub fn try_parse(s: &str) -> ::std::option::Option<Self> {
                Self::parse(s).ok()
            }

            /// Parses an ID from UTF-8 encoded text.
            pub fn parse_utf8(bytes: &[u8]) -> ::std::result::Result<Self, $crate::IdError> {
                $crate::format::parse_utf8(bytes).map(Self)
            }

            #[must_use]
            pub fn try_parse_utf8(bytes: &[u8]) -> ::std::option::Option<Self> {
                Self::parse_utf8(bytes).ok()
            }

            /// Formats the ID using a format token (`D`, `N`, `B`, `P`, `U`, `X`).
            pub fn format(&self, token: &str) -> ::std::result::Result<String, $crate::IdError> {
                Ok($crate::FormatSpec::parse(token)?.render(&self.0))
            }

            /// Formats the ID with an already parsed layout.
            #[must_use]
            pub fn format_with(&self, spec: $crate::FormatSpec) -> String {
                spec.render(&self.0)
            }

            /// Writes the ID into a character buffer, returning the count written.
            pub fn format_to(
                &self,
                dest: &mut [char],
                token: &str,
            ) -> ::std::result::Result<usize, $crate::IdError> {
                $crate::FormatSpec::parse(token)?.encode_chars(&self.0, dest)
            }

            /// Writes the ID as UTF-8 into a byte buffer, returning the count written.
            pub fn format_to_utf8(
                &self,
                dest: &mut [u8],
                token: &str,
            ) -> ::std::result::Result<usize, $crate::IdError> {
                $crate::FormatSpec::parse(token)?.encode_utf8(&self.0, dest)
            }

            /// Converts a loosely-typed value into an ID.
            pub fn convert_from<'a>(
                value: impl Into<$crate::ConvertInput<'a>>,
            ) -> ::std::result::Result<Self, $crate::IdError> {
                Self::convert_from_with(value, None)
            }

            /// Like [`convert_from`](Self::convert_from), carrying a culture
            /// name for the text branches.
            pub fn convert_from_with<'a>(
                value: impl Into<$crate::ConvertInput<'a>>,
                culture: ::std::option::Option<&str>,
            ) -> ::std::result::Result<Self, $crate::IdError> {
                $crate::convert::convert_uuid(value.into(), culture, Self::NAME).map(Self)
            }

            /// Returns the generic conversion adapter for this ID type.
            #[must_use]
            pub const fn type_converter() -> $crate::UuidConverter<Self> {
                $crate::UuidConverter::new(Self::NAME)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::IdError;

            fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl From<$crate::Uuid> for $name {
            fn from(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for $crate::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<$crate::Uuid> for $name {
            fn as_ref(&self) -> &$crate::Uuid {
                &self.0
            }
        }

        // Written through the UUID's own serializer rather than `Display`:
        // the hyphenated string for human-readable formats, raw bytes otherwise.
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::Uuid as $crate::__private::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )
                .map(Self)
            }
        }
    };
}
