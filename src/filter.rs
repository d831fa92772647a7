//! Property listing filter and dynamic query construction
//!
//! The builder turns an optional filter set into a parameterized query string
//! plus its ordered parameter list. Placeholders are positional (`$1`, `$2`,
//! ...) and every placeholder index is rendered from the parameter vector's
//! length at the moment the value is pushed, so the Nth placeholder always
//! refers to the Nth bound value by construction.

use tokio_postgres::types::ToSql;

/// Row limit applied when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Optional criteria for listing properties.
///
/// Any subset of fields may be set; prices are in major currency units
/// (dollars) and are converted to stored minor units (cents) when bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Substring match against the property's city.
    pub city: Option<String>,
    /// Lower bound on nightly price, in dollars.
    pub minimum_price_per_night: Option<f64>,
    /// Upper bound on nightly price, in dollars.
    pub maximum_price_per_night: Option<f64>,
    /// Lower bound on the property's average review rating (1-5 scale).
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    /// True when no filter field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
            && self.minimum_rating.is_none()
    }
}

/// An owned value bound to a positional query placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Text value (e.g. a wildcard-wrapped city pattern).
    Text(String),
    /// Integer value (cents amounts, row limits).
    Int(i64),
    /// Floating-point value (rating thresholds).
    Float(f64),
}

impl SqlParam {
    /// Borrow the value in the form `tokio_postgres` binds.
    #[must_use]
    pub fn as_to_sql(&self) -> &(dyn ToSql + Sync) {
        match self {
            Self::Text(v) => v,
            Self::Int(v) => v,
            Self::Float(v) => v,
        }
    }
}

/// Borrow a whole parameter list for execution.
#[must_use]
pub fn borrow_params(params: &[SqlParam]) -> Vec<&(dyn ToSql + Sync)> {
    params.iter().map(SqlParam::as_to_sql).collect()
}

/// Convert a major-unit price (dollars) into stored minor units (cents).
#[allow(clippy::cast_possible_truncation)]
fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Build the property listing query for the given filter and row limit.
///
/// The returned string and parameter list are executable through the generic
/// parameterized-query interface; all caller-controlled values are bound,
/// never interpolated.
///
/// Shape, in order:
/// 1. properties joined to their reviews, with a per-property average rating
/// 2. a `WHERE` clause only when at least one of city / min price / max price
///    is set (predicates joined with `AND`, in that fixed field order)
/// 3. `GROUP BY` on the property id
/// 4. a `HAVING` threshold on the aggregated average when `minimum_rating`
///    is set
/// 5. `ORDER BY cost_per_night` and a `LIMIT` bound as the final parameter
///
/// Note: the inner join drops properties with zero reviews, so a rating
/// filter (or the listing itself) never returns review-less properties.
/// Faithful to the existing result semantics; flagged for product review
/// rather than changed here.
#[must_use]
pub fn build_property_query(filter: &PropertyFilter, limit: i64) -> (String, Vec<SqlParam>) {
    // Row-level predicates accumulate as (fragment, value) pairs first;
    // placeholder indexes are rendered only when the values are pushed.
    let mut conditions: Vec<(&str, SqlParam)> = Vec::new();

    if let Some(city) = &filter.city {
        conditions.push(("city LIKE", SqlParam::Text(format!("%{city}%"))));
    }
    if let Some(min_price) = filter.minimum_price_per_night {
        conditions.push(("cost_per_night >=", SqlParam::Int(to_cents(min_price))));
    }
    if let Some(max_price) = filter.maximum_price_per_night {
        conditions.push(("cost_per_night <=", SqlParam::Int(to_cents(max_price))));
    }

    let mut params: Vec<SqlParam> = Vec::new();
    let mut query = String::from(
        "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating\n\
         FROM properties\n\
         JOIN property_reviews ON property_reviews.property_id = properties.id\n",
    );

    if !conditions.is_empty() {
        let predicates: Vec<String> = conditions
            .into_iter()
            .map(|(fragment, value)| {
                params.push(value);
                format!("{fragment} ${}", params.len())
            })
            .collect();
        query.push_str("WHERE ");
        query.push_str(&predicates.join(" AND "));
        query.push('\n');
    }

    query.push_str("GROUP BY properties.id\n");

    if let Some(min_rating) = filter.minimum_rating {
        params.push(SqlParam::Float(min_rating));
        query.push_str(&format!(
            "HAVING avg(property_reviews.rating) >= ${}\n",
            params.len()
        ));
    }

    params.push(SqlParam::Int(limit));
    query.push_str(&format!(
        "ORDER BY cost_per_night\nLIMIT ${}",
        params.len()
    ));

    (query, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cents_whole_dollars() {
        assert_eq!(to_cents(50.0), 5000);
    }

    #[test]
    fn test_to_cents_fractional() {
        assert_eq!(to_cents(99.99), 9999);
        assert_eq!(to_cents(0.01), 1);
    }

    #[test]
    fn test_empty_filter_reports_empty() {
        assert!(PropertyFilter::default().is_empty());
        let filter = PropertyFilter {
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_borrow_params_length() {
        let params = vec![
            SqlParam::Text("%Vancouver%".to_string()),
            SqlParam::Int(10),
        ];
        assert_eq!(borrow_params(&params).len(), 2);
    }
}
