//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One person record.
///
/// Records are always re-read from the store; nothing mutates a `User` after
/// it has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier.
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 1))]
    pub id: UserId,

    /// Display name. Not unique.
    #[cfg_attr(feature = "openapi", schema(example = "Luke Skywalker"))]
    pub name: String,
}

impl User {
    /// Creates a user record from a raw store id.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
        }
    }

    /// Orders two users by name, ascending, by code point.
    ///
    /// Meant for `sort_by`, which is stable, so equal names keep their
    /// original relative order.
    #[must_use]
    pub fn by_name(a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name)
    }
}
