//! # objid
//!
//! Strongly-typed, UUID-backed identifiers.
//!
//! ## Design Principles
//!
//! - One type per entity: a `UserId` can never be passed where an `OrderId`
//!   is expected
//! - IDs are immutable `Copy` values wrapping a random 128-bit UUID
//! - Formatting and parsing are locale-invariant and roundtrip
//!   (format → parse → equal)
//! - Ordering is byte-wise over the UUID, matching the order of the
//!   canonical text
//!
//! ## Defining IDs
//!
//! ```
//! objid::define_id!(
//!     /// Identifier of a user account.
//!     UserId
//! );
//!
//! let id = UserId::new();
//! assert_eq!(UserId::parse(&id.to_string())?, id);
//! # Ok::<(), objid::IdError>(())
//! ```
//!
//! ## Text Format
//!
//! `Display` prints the canonical hyphenated layout:
//! `3fa85f64-5717-4562-b3fc-2c963f66afa6`. Parsing also accepts the simple,
//! braced, parenthesized and URN layouts in either case. See [`FormatSpec`].
//!
//! ## Adapters
//!
//! - Serde: IDs serialize through the UUID's own implementation (a string for
//!   human-readable formats, 16 raw bytes for binary formats)
//! - Generic conversion: every ID exposes a [`TypeConverter`] via
//!   `type_converter()`, registered explicitly in a [`ConverterRegistry`]

pub mod convert;
mod error;
pub mod format;
mod macros;
mod types;

pub use convert::{ConvertInput, ConverterRegistry, SourceKind, TypeConverter, UuidConverter};
pub use error::IdError;
pub use format::{FormatSpec, Layout};
pub use types::*;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
