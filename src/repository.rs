//! Application-facing queries over the connection pool
//!
//! Thin parameterized-query wrappers around [`DatabasePool::query`], plus the
//! filtered property listing built by [`crate::filter::build_property_query`].
//! Execution failures propagate to the caller; nothing is swallowed or
//! retried here.

use crate::database::DatabasePool;
use crate::error::{DbError, Result};
use crate::filter::{borrow_params, build_property_query, PropertyFilter};
use crate::models::{NewProperty, NewUser, Property, Reservation, User};
use tracing::debug;

/// Query surface exposed to the web application
#[derive(Clone)]
pub struct Repository {
    pool: DatabasePool,
}

impl Repository {
    /// Wrap a connection pool
    #[must_use]
    pub const fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Look up a single user by email
    pub async fn user_with_email(&self, email: &str) -> Result<Option<User>> {
        let rows = self
            .pool
            .query("SELECT * FROM users WHERE email = $1", &[&email])
            .await?;
        rows.first().map(User::try_from).transpose().map_err(Into::into)
    }

    /// Look up a single user by id
    pub async fn user_with_id(&self, id: i32) -> Result<Option<User>> {
        let rows = self
            .pool
            .query("SELECT * FROM users WHERE id = $1", &[&id])
            .await?;
        rows.first().map(User::try_from).transpose().map_err(Into::into)
    }

    /// Insert a user and return the stored row
    pub async fn add_user(&self, user: &NewUser) -> Result<User> {
        let rows = self
            .pool
            .query(
                "INSERT INTO users (name, email, password)\n\
                 VALUES ($1, $2, $3)\n\
                 RETURNING *",
                &[&user.name, &user.email, &user.password],
            )
            .await?;
        let row = rows
            .first()
            .ok_or_else(|| DbError::Config("INSERT returned no row".to_string()))?;
        User::try_from(row).map_err(Into::into)
    }

    /// List a guest's past reservations ordered by start date, with each
    /// property's average rating attached
    pub async fn reservations_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<Reservation>> {
        debug!("Listing past reservations for guest {}", guest_id);
        let rows = self
            .pool
            .query(
                "SELECT reservations.id AS reservation_id,\n\
                        reservations.start_date, reservations.end_date,\n\
                        reservations.guest_id,\n\
                        properties.*,\n\
                        avg(property_reviews.rating)::float8 AS average_rating\n\
                 FROM reservations\n\
                 JOIN properties ON reservations.property_id = properties.id\n\
                 JOIN property_reviews ON property_reviews.property_id = properties.id\n\
                 WHERE reservations.guest_id = $1 AND reservations.end_date < now()::date\n\
                 GROUP BY reservations.id, properties.id\n\
                 ORDER BY reservations.start_date\n\
                 LIMIT $2",
                &[&guest_id, &limit],
            )
            .await?;
        rows.iter()
            .map(|row| Reservation::try_from(row).map_err(Into::into))
            .collect()
    }

    /// List properties matching the filter, up to `limit` rows
    pub async fn properties(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> Result<Vec<Property>> {
        let (query, params) = build_property_query(filter, limit);
        debug!("Property listing query:\n{}", query);
        let rows = self.pool.query(&query, &borrow_params(&params)).await?;
        rows.iter()
            .map(|row| Property::try_from(row).map_err(Into::into))
            .collect()
    }

    /// Insert a property and return the stored row
    ///
    /// New listings are active immediately; `average_rating` is absent until
    /// the property has reviews.
    pub async fn add_property(&self, property: &NewProperty) -> Result<Property> {
        let rows = self
            .pool
            .query(
                "INSERT INTO properties\n\
                   (owner_id, title, description, thumbnail_photo_url, cover_photo_url,\n\
                    cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,\n\
                    country, street, city, province, post_code, active)\n\
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, true)\n\
                 RETURNING *, NULL::float8 AS average_rating",
                &[
                    &property.owner_id,
                    &property.title,
                    &property.description,
                    &property.thumbnail_photo_url,
                    &property.cover_photo_url,
                    &property.cost_per_night,
                    &property.parking_spaces,
                    &property.number_of_bathrooms,
                    &property.number_of_bedrooms,
                    &property.country,
                    &property.street,
                    &property.city,
                    &property.province,
                    &property.post_code,
                ],
            )
            .await?;
        let row = rows
            .first()
            .ok_or_else(|| DbError::Config("INSERT returned no row".to_string()))?;
        Property::try_from(row).map_err(Into::into)
    }
}
