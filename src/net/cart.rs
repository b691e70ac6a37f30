//! Cart endpoints: add, change, read-back.
//!
//! Wire contract (platform-fixed): mutations POST `{"id": ..., "quantity": ...}`
//! to `/cart/add.js` and `/cart/change.js`; `/cart.js` reads the cart back.
//! The theme consumes only `item_count` and `total_price` (integer cents)
//! from cart payloads; everything else is tolerated and ignored. Parsing is
//! pure and kept apart from transport.

use serde::{Deserialize, Serialize};

use super::{ApiError, CommerceClient};

pub const CART_ADD_PATH: &str = "/cart/add.js";
pub const CART_CHANGE_PATH: &str = "/cart/change.js";
pub const CART_PATH: &str = "/cart.js";

/// Body shared by both cart mutation endpoints.
#[derive(Debug, Serialize)]
pub struct CartMutation<'a> {
    /// Variant id for `add`, line key for `change`.
    pub id: &'a str,
    pub quantity: u32,
}

/// The slice of the cart payload the theme renders from.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    pub item_count: u32,
    /// Cart total in integer cents.
    pub total_price: i64,
}

impl CommerceClient {
    /// Add `quantity` of `variant_id` to the cart.
    ///
    /// The endpoint echoes the added line; the theme ignores it and re-reads
    /// the cart for its counters, so success carries no payload here.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn cart_add(&self, variant_id: &str, quantity: u32) -> Result<(), ApiError> {
        let body = CartMutation {
            id: variant_id,
            quantity,
        };
        let response = self
            .http()
            .post(self.url(CART_ADD_PATH))
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                endpoint: CART_ADD_PATH,
                status,
                body,
            });
        }
        Ok(())
    }

    /// Set the quantity of the cart line identified by `line_key`.
    /// Quantity 0 removes the line. Returns the updated cart summary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or a
    /// payload missing the summary fields.
    pub async fn cart_change(&self, line_key: &str, quantity: u32) -> Result<CartSummary, ApiError> {
        let body = CartMutation {
            id: line_key,
            quantity,
        };
        let response = self
            .http()
            .post(self.url(CART_CHANGE_PATH))
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Status {
                endpoint: CART_CHANGE_PATH,
                status,
                body: text,
            });
        }
        parse_cart(CART_CHANGE_PATH, &text)
    }

    /// Read the current cart summary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or a
    /// payload missing the summary fields.
    pub async fn cart(&self) -> Result<CartSummary, ApiError> {
        let response = self.http().get(self.url(CART_PATH)).send().await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Status {
                endpoint: CART_PATH,
                status,
                body: text,
            });
        }
        parse_cart(CART_PATH, &text)
    }
}

/// Parse a cart payload into the summary the theme renders from.
fn parse_cart(endpoint: &'static str, json: &str) -> Result<CartSummary, ApiError> {
    serde_json::from_str(json).map_err(|source| ApiError::Parse { endpoint, source })
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
