//! Card endpoints.

use super::{body_with, owned_query, parse, Fields};
use crate::client::Client;
use crate::error::Result;
use crate::models::Card;
use crate::pagination::Pages;
use crate::validate::require_present;
use serde_json::json;

impl Client {
    /// List the cards in a column as a lazy paginated sequence. `query`
    /// pairs are forwarded as-is for server-side filtering. No request is
    /// issued until the first page is pulled.
    ///
    /// `GET /buckets/{bucket_id}/card_tables/lists/{column_id}/cards`
    pub fn card_table_cards(
        &self,
        bucket_id: u64,
        column_id: u64,
        query: &[(&str, &str)],
    ) -> Pages<Card> {
        let path = format!("/buckets/{bucket_id}/card_tables/lists/{column_id}/cards");
        Pages::new(self.transport().clone(), path, owned_query(query))
    }

    /// Fetch a card by id.
    ///
    /// `GET /buckets/{bucket_id}/card_tables/cards/{card_id}`
    pub async fn card_table_card(&self, bucket_id: u64, card_id: u64) -> Result<Card> {
        let path = format!("/buckets/{bucket_id}/card_tables/cards/{card_id}");
        parse(self.transport().get(&path, &[]).await?)
    }

    /// Create a card in a column. `title` must be non-blank; `options`
    /// (e.g. `content`, `due_on`, `notify`) pass through verbatim.
    ///
    /// `POST /buckets/{bucket_id}/card_tables/lists/{column_id}/cards`
    pub async fn create_card_table_card(
        &self,
        bucket_id: u64,
        column_id: u64,
        title: &str,
        options: Fields,
    ) -> Result<Card> {
        require_present(&[("title", title)])?;
        let path = format!("/buckets/{bucket_id}/card_tables/lists/{column_id}/cards");
        let body = body_with(&[("title", json!(title))], options);
        parse(self.transport().post(&path, Some(body)).await?)
    }

    /// Update a card's fields.
    ///
    /// `PUT /buckets/{bucket_id}/card_tables/cards/{card_id}`
    pub async fn update_card_table_card(
        &self,
        bucket_id: u64,
        card_id: u64,
        options: Fields,
    ) -> Result<Card> {
        let path = format!("/buckets/{bucket_id}/card_tables/cards/{card_id}");
        parse(
            self.transport()
                .put(&path, Some(serde_json::Value::Object(options)))
                .await?,
        )
    }
}
