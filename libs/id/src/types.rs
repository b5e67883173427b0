//! Built-in ID definitions.

use crate::define_id;

define_id!(
    /// Represents a unique identifier for an object.
    ///
    /// The general-purpose ID. Entity-specific IDs are declared with
    /// [`define_id!`](crate::define_id) so that they cannot be mixed up.
    ObjectId
);

// =============================================================================
// Tests
// =============================================================================
