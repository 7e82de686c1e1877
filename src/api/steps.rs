//! Step endpoints.

use super::{body_with, parse, Fields};
use crate::client::Client;
use crate::error::Result;
use crate::models::Step;
use crate::validate::{require_min_position, require_present};
use serde_json::json;

impl Client {
    /// Create a step on a card. `title` must be non-blank; `options`
    /// (e.g. `due_on`, `assignees`) pass through verbatim.
    ///
    /// `POST /buckets/{bucket_id}/card_tables/cards/{card_id}/steps`
    pub async fn create_card_table_step(
        &self,
        bucket_id: u64,
        card_id: u64,
        title: &str,
        options: Fields,
    ) -> Result<Step> {
        require_present(&[("title", title)])?;
        let path = format!("/buckets/{bucket_id}/card_tables/cards/{card_id}/steps");
        let body = body_with(&[("title", json!(title))], options);
        parse(self.transport().post(&path, Some(body)).await?)
    }

    /// Update a step's fields.
    ///
    /// `PUT /buckets/{bucket_id}/card_tables/steps/{step_id}`
    pub async fn update_card_table_step(
        &self,
        bucket_id: u64,
        step_id: u64,
        options: Fields,
    ) -> Result<Step> {
        let path = format!("/buckets/{bucket_id}/card_tables/steps/{step_id}");
        parse(
            self.transport()
                .put(&path, Some(serde_json::Value::Object(options)))
                .await?,
        )
    }

    /// Mark a step completed.
    ///
    /// `PUT /buckets/{bucket_id}/card_tables/steps/{step_id}/completions`
    pub async fn complete_card_table_step(&self, bucket_id: u64, step_id: u64) -> Result<()> {
        self.put_step_completion(bucket_id, step_id).await
    }

    /// Mark a step not completed.
    ///
    /// Upstream quirk, preserved on purpose: the service client issues the
    /// exact same request as [`complete_card_table_step`] — a PUT to
    /// `.../completions` with no body. A future correction (likely DELETE)
    /// must be a deliberate change; see the pinning test below.
    pub async fn uncomplete_card_table_step(&self, bucket_id: u64, step_id: u64) -> Result<()> {
        self.put_step_completion(bucket_id, step_id).await
    }

    async fn put_step_completion(&self, bucket_id: u64, step_id: u64) -> Result<()> {
        let path = format!("/buckets/{bucket_id}/card_tables/steps/{step_id}/completions");
        self.transport().put(&path, None).await?;
        Ok(())
    }

    /// Move a step to `position` within its card. Positions are 0-based for
    /// steps, unlike columns.
    ///
    /// `POST /buckets/{bucket_id}/card_tables/cards/{card_id}/positions`
    pub async fn reposition_card_table_step(
        &self,
        bucket_id: u64,
        card_id: u64,
        step_id: u64,
        position: i64,
    ) -> Result<()> {
        require_min_position(position, 0)?;
        let path = format!("/buckets/{bucket_id}/card_tables/cards/{card_id}/positions");
        let body = json!({"step_id": step_id, "position": position});
        self.transport().post(&path, Some(body)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::Fields;
    use crate::client::Client;
    use crate::error::Error;
    use crate::transport::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn client() -> (Arc<MockTransport>, Client) {
        let mock = Arc::new(MockTransport::new());
        let client = Client::with_transport(mock.clone());
        (mock, client)
    }

    #[tokio::test]
    async fn test_create_step_posts_title_and_options() {
        let (mock, client) = client();
        mock.respond_with(json!({"id": 99, "title": "Write changelog"}));

        let mut options = Fields::new();
        options.insert("due_on".to_string(), json!("2025-12-30"));
        let step = client
            .create_card_table_step(42, 101, "Write changelog", options)
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/buckets/42/card_tables/cards/101/steps");
        assert_eq!(
            requests[0].body,
            Some(json!({"title": "Write changelog", "due_on": "2025-12-30"}))
        );
        assert_eq!(step.id, 99);
    }

    #[tokio::test]
    async fn test_create_step_blank_title_issues_no_request() {
        let (mock, client) = client();

        let err = client
            .create_card_table_step(42, 101, "", Fields::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_step_puts_options() {
        let (mock, client) = client();
        mock.respond_with(json!({"id": 99, "title": "Write changelog", "completed": true}));

        let mut options = Fields::new();
        options.insert("assignees".to_string(), json!([4, 9]));
        client.update_card_table_step(42, 99, options).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/buckets/42/card_tables/steps/99");
        assert_eq!(requests[0].body, Some(json!({"assignees": [4, 9]})));
    }

    /// Complete and uncomplete issue byte-identical requests. That mirrors
    /// the upstream client today; if uncomplete ever grows its own endpoint
    /// or verb, this test must change with it.
    #[tokio::test]
    async fn test_uncomplete_step_issues_identical_request() {
        let (mock, client) = client();

        client.complete_card_table_step(42, 99).await.unwrap();
        client.uncomplete_card_table_step(42, 99).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/buckets/42/card_tables/steps/99/completions");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_reposition_step_position_floor_is_zero() {
        let (mock, client) = client();

        let err = client
            .reposition_card_table_step(42, 101, 99, -1)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "position must be greater than or equal to 0"
        );
        assert!(mock.requests().is_empty());

        client
            .reposition_card_table_step(42, 101, 99, 0)
            .await
            .unwrap();
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/buckets/42/card_tables/cards/101/positions");
        assert_eq!(requests[0].body, Some(json!({"step_id": 99, "position": 0})));
    }
}
