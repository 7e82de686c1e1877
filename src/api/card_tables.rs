//! Card table endpoints.
//!
//! Card tables are read-only from this surface: boards are provisioned by
//! the service when a bucket enables the tool, so there is no create here.

use super::parse;
use crate::client::Client;
use crate::error::Result;
use crate::models::CardTable;

impl Client {
    /// Fetch a card table by id.
    ///
    /// `GET /buckets/{bucket_id}/card_tables/{card_table_id}`
    pub async fn card_table(&self, bucket_id: u64, card_table_id: u64) -> Result<CardTable> {
        let path = format!("/buckets/{bucket_id}/card_tables/{card_table_id}");
        parse(self.transport().get(&path, &[]).await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Client;
    use crate::transport::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_card_table_issues_single_get() {
        let mock = Arc::new(MockTransport::new());
        mock.respond_with(json!({
            "id": 5,
            "title": "Launch board",
            "lists": [{"id": 7, "title": "Doing"}]
        }));
        let client = Client::with_transport(mock.clone());

        let table = client.card_table(42, 5).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/buckets/42/card_tables/5");
        assert!(requests[0].body.is_none());

        assert_eq!(table.id, 5);
        assert_eq!(table.columns[0].id, 7);
    }
}
