//! Plain record types returned by the data layer
//!
//! Each query result type converts from a `tokio_postgres` row by column
//! name; a missing or mistyped column surfaces as a query error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Primary key
    pub id: i32,
    /// Display name
    pub name: String,
    /// Login email, unique per user
    pub email: String,
    /// Stored password hash
    pub password: String,
}

impl TryFrom<&Row> for User {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
        })
    }
}

/// Fields required to insert a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Password hash
    pub password: String,
}

/// A rental property, with its average review rating attached
///
/// `cost_per_night` is stored in minor currency units (cents).
/// `average_rating` is `None` for rows where no rating was aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Primary key
    pub id: i32,
    /// Owning user's id
    pub owner_id: i32,
    /// Listing title
    pub title: String,
    /// Listing description
    pub description: String,
    /// Thumbnail image URL
    pub thumbnail_photo_url: String,
    /// Cover image URL
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    /// Number of parking spaces
    pub parking_spaces: i32,
    /// Number of bathrooms
    pub number_of_bathrooms: i32,
    /// Number of bedrooms
    pub number_of_bedrooms: i32,
    /// Country
    pub country: String,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// Province or state
    pub province: String,
    /// Postal code
    pub post_code: String,
    /// Whether the listing is active
    pub active: bool,
    /// Mean of associated review ratings, when present in the row
    pub average_rating: Option<f64>,
}

impl TryFrom<&Row> for Property {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            thumbnail_photo_url: row.try_get("thumbnail_photo_url")?,
            cover_photo_url: row.try_get("cover_photo_url")?,
            cost_per_night: row.try_get("cost_per_night")?,
            parking_spaces: row.try_get("parking_spaces")?,
            number_of_bathrooms: row.try_get("number_of_bathrooms")?,
            number_of_bedrooms: row.try_get("number_of_bedrooms")?,
            country: row.try_get("country")?,
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            province: row.try_get("province")?,
            post_code: row.try_get("post_code")?,
            active: row.try_get("active")?,
            average_rating: row.try_get("average_rating")?,
        })
    }
}

/// Fields required to insert a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    /// Owning user's id
    pub owner_id: i32,
    /// Listing title
    pub title: String,
    /// Listing description
    pub description: String,
    /// Thumbnail image URL
    pub thumbnail_photo_url: String,
    /// Cover image URL
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    /// Number of parking spaces
    pub parking_spaces: i32,
    /// Number of bathrooms
    pub number_of_bathrooms: i32,
    /// Number of bedrooms
    pub number_of_bedrooms: i32,
    /// Country
    pub country: String,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// Province or state
    pub province: String,
    /// Postal code
    pub post_code: String,
}

/// A past reservation together with its property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Primary key (aliased as `reservation_id` in the listing query)
    pub id: i32,
    /// First night of the stay
    pub start_date: NaiveDate,
    /// Checkout date
    pub end_date: NaiveDate,
    /// Reserving user's id
    pub guest_id: i32,
    /// The reserved property, average rating attached
    pub property: Property,
}

impl TryFrom<&Row> for Reservation {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.try_get("reservation_id")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            guest_id: row.try_get("guest_id")?,
            property: Property::try_from(row)?,
        })
    }
}
