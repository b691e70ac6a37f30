//! Predictive search over `/search/suggest.json`.
//!
//! The platform wraps product hits two envelopes deep
//! (`resources.results.products`); an absent envelope or empty hit list is
//! a normal no-results outcome, not an error. Queries shorter than two
//! characters after trimming are never sent; the search box clears its
//! results instead.

use serde::Deserialize;

use super::{ApiError, CommerceClient};

pub const SUGGEST_PATH: &str = "/search/suggest.json";

/// Minimum trimmed query length worth sending.
pub const MIN_QUERY_LEN: usize = 2;

/// Suggestion page size requested from the platform.
pub const SUGGEST_LIMIT: u32 = 6;

/// A product hit, reduced to the fields the dropdown renders.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ProductSuggestion {
    pub title: String,
    pub url: String,
    /// Price in integer cents.
    pub price: i64,
    pub featured_image: String,
}

#[derive(Debug, Default, Deserialize)]
struct SuggestEnvelope {
    #[serde(default)]
    resources: Resources,
}

#[derive(Debug, Default, Deserialize)]
struct Resources {
    #[serde(default)]
    results: Results,
}

#[derive(Debug, Default, Deserialize)]
struct Results {
    #[serde(default)]
    products: Vec<ProductSuggestion>,
}

/// Whether `query` is long enough to send upstream.
#[must_use]
pub fn should_query(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

impl CommerceClient {
    /// Fetch product suggestions for `query`.
    ///
    /// Callers are expected to gate on [`should_query`] and debounce input;
    /// this method sends whatever it is given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an unparsable payload. An empty suggestion list is `Ok(vec![])`.
    pub async fn suggest(&self, query: &str) -> Result<Vec<ProductSuggestion>, ApiError> {
        let limit = SUGGEST_LIMIT.to_string();
        let response = self
            .http()
            .get(self.url(SUGGEST_PATH))
            .query(&[
                ("q", query),
                ("resources[type]", "product"),
                ("resources[limit]", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Status {
                endpoint: SUGGEST_PATH,
                status,
                body: text,
            });
        }
        parse_suggestions(&text)
    }
}

/// Parse a suggest payload into its product hits.
fn parse_suggestions(json: &str) -> Result<Vec<ProductSuggestion>, ApiError> {
    let envelope: SuggestEnvelope = serde_json::from_str(json).map_err(|source| ApiError::Parse {
        endpoint: SUGGEST_PATH,
        source,
    })?;
    Ok(envelope.resources.results.products)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
