//! Book (catalog entry) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A book in the catalog.
///
/// The id is assigned by the caller before insertion and acts as the primary
/// key; the service never generates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    /// Unique identifier (UUID), chosen by the caller
    pub id: Uuid,
    /// Title; must be non-empty when updating through the API
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    /// Author name
    pub author: String,
    /// Publication timestamp (UTC)
    pub published_date: DateTime<Utc>,
}
