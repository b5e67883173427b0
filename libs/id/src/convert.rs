//! Conversion of loosely-typed input into IDs.
//!
//! [`ConvertInput`] names the runtime shapes a value can arrive in from an
//! untyped boundary (form fields, config values, raw column bytes). The
//! dispatch in [`convert_uuid`] checks them in a fixed precedence order and
//! the first matching branch wins:
//!
//! 1. a byte array of exactly 16 bytes is the raw value, never text
//! 2. a longer byte array that parses as UTF-8 identifier text
//! 3. a character array of at least 16 chars that parses as text
//! 4. a string that parses as text
//! 5. a raw [`Uuid`], passed through
//! 6. any other displayable value whose string form parses
//!
//! Everything else, including [`ConvertInput::Null`], is rejected with
//! [`IdError::UnsupportedConversion`].
//!
//! [`TypeConverter`] and [`ConverterRegistry`] form the generic conversion
//! adapter: converters are registered explicitly at startup and looked up by
//! target type.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::{format, IdError};

/// Runtime shape of a [`ConvertInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Null,
    Bytes,
    Chars,
    Str,
    Uuid,
    Other,
}

impl SourceKind {
    /// Human-readable name used in errors and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            SourceKind::Null => "null",
            SourceKind::Bytes => "byte array",
            SourceKind::Chars => "character array",
            SourceKind::Str => "string",
            SourceKind::Uuid => "uuid",
            SourceKind::Other => "value",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A loosely-typed value to convert into an ID.
#[derive(Clone, Copy)]
pub enum ConvertInput<'a> {
    Null,
    Bytes(&'a [u8]),
    Chars(&'a [char]),
    Str(&'a str),
    Uuid(Uuid),
    Other(&'a dyn fmt::Display),
}

impl<'a> ConvertInput<'a> {
    /// Wraps an arbitrary displayable value.
    pub fn other(value: &'a dyn fmt::Display) -> Self {
        ConvertInput::Other(value)
    }

    /// Returns the runtime shape of this input.
    pub const fn kind(&self) -> SourceKind {
        match self {
            ConvertInput::Null => SourceKind::Null,
            ConvertInput::Bytes(_) => SourceKind::Bytes,
            ConvertInput::Chars(_) => SourceKind::Chars,
            ConvertInput::Str(_) => SourceKind::Str,
            ConvertInput::Uuid(_) => SourceKind::Uuid,
            ConvertInput::Other(_) => SourceKind::Other,
        }
    }
}

impl fmt::Debug for ConvertInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertInput::Null => f.write_str("Null"),
            ConvertInput::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            ConvertInput::Chars(chars) => f.debug_tuple("Chars").field(chars).finish(),
            ConvertInput::Str(s) => f.debug_tuple("Str").field(s).finish(),
            ConvertInput::Uuid(uuid) => f.debug_tuple("Uuid").field(uuid).finish(),
            ConvertInput::Other(value) => f
                .debug_tuple("Other")
                .field(&format_args!("{value}"))
                .finish(),
        }
    }
}

impl<'a> From<&'a [u8]> for ConvertInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ConvertInput::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ConvertInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        ConvertInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ConvertInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        ConvertInput::Bytes(bytes)
    }
}

impl<'a> From<&'a [char]> for ConvertInput<'a> {
    fn from(chars: &'a [char]) -> Self {
        ConvertInput::Chars(chars)
    }
}

impl<'a> From<&'a Vec<char>> for ConvertInput<'a> {
    fn from(chars: &'a Vec<char>) -> Self {
        ConvertInput::Chars(chars)
    }
}

impl<'a> From<&'a str> for ConvertInput<'a> {
    fn from(s: &'a str) -> Self {
        ConvertInput::Str(s)
    }
}

impl<'a> From<&'a String> for ConvertInput<'a> {
    fn from(s: &'a String) -> Self {
        ConvertInput::Str(s)
    }
}

impl From<Uuid> for ConvertInput<'_> {
    fn from(uuid: Uuid) -> Self {
        ConvertInput::Uuid(uuid)
    }
}

impl<'a, T> From<Option<T>> for ConvertInput<'a>
where
    T: Into<ConvertInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ConvertInput::Null, Into::into)
    }
}

/// Converts a loosely-typed value into a raw [`Uuid`].
///
/// `culture` only reaches the text branches. Identifier text is
/// locale-invariant, so it never changes the outcome and is only recorded in
/// trace output. `target` names the ID type in errors.
pub fn convert_uuid(
    value: ConvertInput<'_>,
    culture: Option<&str>,
    target: &'static str,
) -> Result<Uuid, IdError> {
    let kind = value.kind();
    let culture = culture.unwrap_or("invariant");

    let converted = match value {
        ConvertInput::Bytes(bytes) if bytes.len() == 16 => Uuid::from_slice(bytes).ok(),
        ConvertInput::Bytes(bytes) if bytes.len() > 16 => format::parse_utf8(bytes).ok(),
        ConvertInput::Chars(chars) if chars.len() >= 16 => {
            let text: String = chars.iter().collect();
            format::parse_str(&text).ok()
        }
        ConvertInput::Str(s) => format::parse_str(s).ok(),
        ConvertInput::Uuid(uuid) => Some(uuid),
        ConvertInput::Other(value) => format::parse_str(&value.to_string()).ok(),
        _ => None,
    };

    match converted {
        Some(uuid) => {
            trace!(target_type = target, source = %kind, culture, "converted value to id");
            Ok(uuid)
        }
        None => {
            debug!(target_type = target, source = %kind, culture, "rejected id conversion");
            Err(IdError::UnsupportedConversion {
                source_kind: kind.name(),
                target,
            })
        }
    }
}

/// Adapter through which generic infrastructure produces typed values from
/// loosely-typed input.
pub trait TypeConverter: Send + Sync {
    /// The produced type.
    type Output: Send + 'static;

    /// Name of the produced type.
    fn target_name(&self) -> &'static str;

    /// Whether input of this shape can be handed to [`convert_from`](Self::convert_from).
    fn can_convert_from(&self, kind: SourceKind) -> bool;

    fn convert_from(
        &self,
        culture: Option<&str>,
        value: ConvertInput<'_>,
    ) -> Result<Self::Output, IdError>;
}

/// Object-safe view of a [`TypeConverter`] used for storage in the registry.
trait ErasedConverter: Send + Sync {
    fn name(&self) -> &'static str;

    fn accepts(&self, kind: SourceKind) -> bool;

    fn convert_boxed(
        &self,
        culture: Option<&str>,
        value: ConvertInput<'_>,
    ) -> Result<Box<dyn Any + Send>, IdError>;
}

impl<C: TypeConverter> ErasedConverter for C {
    fn name(&self) -> &'static str {
        self.target_name()
    }

    fn accepts(&self, kind: SourceKind) -> bool {
        self.can_convert_from(kind)
    }

    fn convert_boxed(
        &self,
        culture: Option<&str>,
        value: ConvertInput<'_>,
    ) -> Result<Box<dyn Any + Send>, IdError> {
        let converted = self.convert_from(culture, value)?;
        Ok(Box::new(converted))
    }
}

/// [`TypeConverter`] for any ID type that wraps a [`Uuid`].
///
/// ID types created with [`define_id!`](crate::define_id) hand these out
/// through their `type_converter()` constructor.
pub struct UuidConverter<T> {
    target: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> UuidConverter<T> {
    pub const fn new(target: &'static str) -> Self {
        Self {
            target,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for UuidConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UuidConverter")
            .field("target", &self.target)
            .finish()
    }
}

impl<T> TypeConverter for UuidConverter<T>
where
    T: From<Uuid> + Send + 'static,
{
    type Output = T;

    fn target_name(&self) -> &'static str {
        self.target
    }

    fn can_convert_from(&self, kind: SourceKind) -> bool {
        matches!(
            kind,
            SourceKind::Bytes | SourceKind::Chars | SourceKind::Str | SourceKind::Uuid
        )
    }

    fn convert_from(
        &self,
        culture: Option<&str>,
        value: ConvertInput<'_>,
    ) -> Result<T, IdError> {
        convert_uuid(value, culture, self.target).map(T::from)
    }
}

/// Converters keyed by the type they produce.
///
/// Built once at startup with explicit [`register`](Self::register) calls and
/// read-only afterwards.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, Box<dyn ErasedConverter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `converter` under the type it produces.
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register<C>(&mut self, converter: C) -> &mut Self
    where
        C: TypeConverter + 'static,
    {
        let target = converter.target_name();
        if self
            .converters
            .insert(TypeId::of::<C::Output>(), Box::new(converter))
            .is_some()
        {
            warn!(target_type = target, "replaced existing type converter");
        } else {
            debug!(target_type = target, "registered type converter");
        }
        self
    }

    /// Returns true if a converter producing `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    /// Returns true if `T` can be produced from input of shape `kind`.
    pub fn can_convert<T: 'static>(&self, kind: SourceKind) -> bool {
        self.converters
            .get(&TypeId::of::<T>())
            .is_some_and(|converter| converter.accepts(kind))
    }

    /// Converts `value` into `T` through the registered converter.
    pub fn convert<'a, T: 'static>(
        &self,
        value: impl Into<ConvertInput<'a>>,
        culture: Option<&str>,
    ) -> Result<T, IdError> {
        let value = value.into();
        let kind = value.kind();
        let unsupported = || IdError::UnsupportedConversion {
            source_kind: kind.name(),
            target: type_name::<T>(),
        };

        let Some(converter) = self.converters.get(&TypeId::of::<T>()) else {
            debug!(target_type = type_name::<T>(), "no type converter registered");
            return Err(unsupported());
        };

        if !converter.accepts(kind) {
            return Err(unsupported());
        }

        converter
            .convert_boxed(culture, value)?
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| unsupported())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.converters.values().map(|c| c.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn sample() -> Uuid {
        Uuid::parse_str(SAMPLE).unwrap()
    }

    fn convert<'a>(value: impl Into<ConvertInput<'a>>) -> Result<Uuid, IdError> {
        convert_uuid(value.into(), None, "TestId")
    }

    #[test]
    fn test_raw_bytes() {
        let uuid = sample();
        assert_eq!(convert(uuid.as_bytes()).unwrap(), uuid);
    }

    #[test]
    fn test_sixteen_text_shaped_bytes_are_raw() {
        let bytes = *b"0123456789abcdef";
        let uuid = convert(&bytes).unwrap();
        assert_eq!(uuid.as_bytes(), &bytes);

        // The same digits as text are not an identifier.
        assert!(convert("0123456789abcdef").is_err());
        let chars: Vec<char> = "0123456789abcdef".chars().collect();
        assert!(convert(&chars).is_err());
    }

    #[test]
    fn test_utf8_text_bytes() {
        assert_eq!(convert(SAMPLE.as_bytes()).unwrap(), sample());
    }

    #[test]
    fn test_short_or_invalid_bytes_rejected() {
        assert!(convert(&[1u8, 2, 3][..]).unwrap_err().is_unsupported());
        assert!(convert(&[0u8; 20]).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_chars() {
        let chars: Vec<char> = SAMPLE.chars().collect();
        assert_eq!(convert(&chars).unwrap(), sample());

        let short: Vec<char> = "3fa85f64".chars().collect();
        assert!(convert(&short).is_err());
    }

    #[test]
    fn test_string_and_uuid() {
        assert_eq!(convert(SAMPLE).unwrap(), sample());
        assert_eq!(convert(&format!("{{{SAMPLE}}}")).unwrap(), sample());
        assert_eq!(convert(sample()).unwrap(), sample());
        assert!(convert("not-an-id").is_err());
    }

    #[test]
    fn test_displayable_value() {
        struct Wrapped;

        impl fmt::Display for Wrapped {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(SAMPLE)
            }
        }

        assert_eq!(convert(ConvertInput::other(&Wrapped)).unwrap(), sample());
        assert!(convert(ConvertInput::other(&42)).is_err());
    }

    #[test]
    fn test_null_rejected() {
        let err = convert(ConvertInput::Null).unwrap_err();
        assert_eq!(
            err,
            IdError::UnsupportedConversion {
                source_kind: "null",
                target: "TestId"
            }
        );
        assert!(convert(None::<&str>).is_err());
        assert_eq!(convert(Some(SAMPLE)).unwrap(), sample());
    }

    #[test]
    fn test_culture_does_not_change_result() {
        let a = convert_uuid(ConvertInput::Str(SAMPLE), Some("tr-TR"), "TestId").unwrap();
        let b = convert_uuid(ConvertInput::Str(SAMPLE), None, "TestId").unwrap();
        assert_eq!(a, b);
    }

    #[derive(Debug, PartialEq)]
    struct Wrapper(Uuid);

    impl From<Uuid> for Wrapper {
        fn from(uuid: Uuid) -> Self {
            Self(uuid)
        }
    }

    #[test]
    fn test_uuid_converter_source_kinds() {
        let converter = UuidConverter::<Wrapper>::new("Wrapper");
        assert!(converter.can_convert_from(SourceKind::Bytes));
        assert!(converter.can_convert_from(SourceKind::Chars));
        assert!(converter.can_convert_from(SourceKind::Str));
        assert!(converter.can_convert_from(SourceKind::Uuid));
        assert!(!converter.can_convert_from(SourceKind::Other));
        assert!(!converter.can_convert_from(SourceKind::Null));
    }

    #[test]
    fn test_registry_convert() {
        let mut registry = ConverterRegistry::new();
        assert!(registry.is_empty());
        registry.register(UuidConverter::<Wrapper>::new("Wrapper"));

        assert!(registry.contains::<Wrapper>());
        assert_eq!(registry.len(), 1);
        assert!(registry.can_convert::<Wrapper>(SourceKind::Str));

        let wrapped: Wrapper = registry.convert(SAMPLE, None).unwrap();
        assert_eq!(wrapped, Wrapper(sample()));
    }

    #[test]
    fn test_registry_unregistered_type() {
        let registry = ConverterRegistry::new();
        let result = registry.convert::<Wrapper>(SAMPLE, None);
        assert!(result.unwrap_err().is_unsupported());
        assert!(!registry.can_convert::<Wrapper>(SourceKind::Str));
    }

    #[test]
    fn test_registry_refuses_unadvertised_kind() {
        let mut registry = ConverterRegistry::new();
        registry.register(UuidConverter::<Wrapper>::new("Wrapper"));
        let result = registry.convert::<Wrapper>(ConvertInput::other(&SAMPLE), None);
        assert!(result.unwrap_err().is_unsupported());
    }

    #[test]
    fn test_registry_keys_by_output_type() {
        let mut registry = ConverterRegistry::new();
        registry.register(UuidConverter::<Wrapper>::new("Wrapper"));

        assert!(registry.contains::<Wrapper>());
        assert!(!registry.contains::<String>());
        assert!(!registry.contains::<Uuid>());
        assert!(registry.convert::<String>(SAMPLE, None).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_registry_replaces_converter_for_same_output() {
        let mut registry = ConverterRegistry::new();
        registry
            .register(UuidConverter::<Wrapper>::new("Wrapper"))
            .register(UuidConverter::<Wrapper>::new("Wrapper"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_uuid_converter_produces_output_type() {
        let converter = UuidConverter::<Wrapper>::new("Wrapper");
        let wrapped: Wrapper = converter.convert_from(None, ConvertInput::Str(SAMPLE)).unwrap();
        assert_eq!(wrapped, Wrapper(sample()));
    }
}
