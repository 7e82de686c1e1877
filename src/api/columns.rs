//! Column endpoints.
//!
//! Some paths address columns as `columns/{id}`, others as `lists/{id}`;
//! the split follows the service's routes, not ours.

use super::{body_with, parse, Fields};
use crate::client::Client;
use crate::error::Result;
use crate::models::{Color, Column};
use crate::validate::{require_min_position, require_present};
use serde_json::json;

impl Client {
    /// Fetch a column by id.
    ///
    /// `GET /buckets/{bucket_id}/card_tables/columns/{column_id}`
    pub async fn card_table_column(&self, bucket_id: u64, column_id: u64) -> Result<Column> {
        let path = format!("/buckets/{bucket_id}/card_tables/columns/{column_id}");
        parse(self.transport().get(&path, &[]).await?)
    }

    /// Create a column on a card table. `title` must be non-blank; `options`
    /// (e.g. `description`) pass through verbatim.
    ///
    /// `POST /buckets/{bucket_id}/card_tables/{card_table_id}/columns`
    pub async fn create_card_table_column(
        &self,
        bucket_id: u64,
        card_table_id: u64,
        title: &str,
        options: Fields,
    ) -> Result<Column> {
        require_present(&[("title", title)])?;
        let path = format!("/buckets/{bucket_id}/card_tables/{card_table_id}/columns");
        let body = body_with(&[("title", json!(title))], options);
        parse(self.transport().post(&path, Some(body)).await?)
    }

    /// Update a column's fields.
    ///
    /// `PUT /buckets/{bucket_id}/card_tables/columns/{column_id}`
    pub async fn update_card_table_column(
        &self,
        bucket_id: u64,
        column_id: u64,
        options: Fields,
    ) -> Result<Column> {
        let path = format!("/buckets/{bucket_id}/card_tables/columns/{column_id}");
        parse(
            self.transport()
                .put(&path, Some(serde_json::Value::Object(options)))
                .await?,
        )
    }

    /// Move a column to `position` within its card table. Positions are
    /// 1-based for columns.
    ///
    /// `POST /buckets/{bucket_id}/card_tables/{card_table_id}/moves`
    pub async fn move_card_table_column(
        &self,
        bucket_id: u64,
        card_table_id: u64,
        column_id: u64,
        position: i64,
    ) -> Result<()> {
        require_min_position(position, 1)?;
        let path = format!("/buckets/{bucket_id}/card_tables/{card_table_id}/moves");
        let body = json!({"column_id": column_id, "position": position});
        self.transport().post(&path, Some(body)).await?;
        Ok(())
    }

    /// Subscribe the current user to a column's notifications.
    ///
    /// `POST /buckets/{bucket_id}/card_tables/lists/{column_id}/subscription`
    pub async fn subscribe_card_table_column(
        &self,
        bucket_id: u64,
        column_id: u64,
    ) -> Result<()> {
        let path = format!("/buckets/{bucket_id}/card_tables/lists/{column_id}/subscription");
        self.transport().post(&path, None).await?;
        Ok(())
    }

    /// Unsubscribe the current user from a column's notifications.
    ///
    /// `DELETE /buckets/{bucket_id}/card_tables/lists/{column_id}/subscription`
    pub async fn unsubscribe_card_table_column(
        &self,
        bucket_id: u64,
        column_id: u64,
    ) -> Result<()> {
        let path = format!("/buckets/{bucket_id}/card_tables/lists/{column_id}/subscription");
        self.transport().delete(&path).await?;
        Ok(())
    }

    /// Mark a column as on hold.
    ///
    /// `POST /buckets/{bucket_id}/card_tables/columns/{column_id}/on_hold`
    pub async fn put_card_table_column_on_hold(
        &self,
        bucket_id: u64,
        column_id: u64,
    ) -> Result<()> {
        let path = format!("/buckets/{bucket_id}/card_tables/columns/{column_id}/on_hold");
        self.transport().post(&path, None).await?;
        Ok(())
    }

    /// Take a column off hold.
    ///
    /// `DELETE /buckets/{bucket_id}/card_tables/columns/{column_id}/on_hold`
    pub async fn remove_card_table_column_on_hold(
        &self,
        bucket_id: u64,
        column_id: u64,
    ) -> Result<()> {
        let path = format!("/buckets/{bucket_id}/card_tables/columns/{column_id}/on_hold");
        self.transport().delete(&path).await?;
        Ok(())
    }

    /// Change a column's color. `color` must name one of the palette entries
    /// (`white red orange yellow green blue aqua purple gray pink brown`).
    ///
    /// `PUT /buckets/{bucket_id}/card_tables/columns/{column_id}/color`
    pub async fn change_card_table_column_color(
        &self,
        bucket_id: u64,
        column_id: u64,
        color: &str,
    ) -> Result<Column> {
        require_present(&[("color", color)])?;
        let color: Color = color.parse()?;
        let path = format!("/buckets/{bucket_id}/card_tables/columns/{column_id}/color");
        let body = json!({"color": color.as_str()});
        parse(self.transport().put(&path, Some(body)).await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::Fields;
    use crate::client::Client;
    use crate::error::Error;
    use crate::models::Color;
    use crate::transport::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn client() -> (Arc<MockTransport>, Client) {
        let mock = Arc::new(MockTransport::new());
        let client = Client::with_transport(mock.clone());
        (mock, client)
    }

    #[tokio::test]
    async fn test_create_column_posts_title_and_options() {
        let (mock, client) = client();
        mock.respond_with(json!({"id": 7, "title": "Doing"}));

        let mut options = Fields::new();
        options.insert("description".to_string(), json!("In flight"));
        let column = client
            .create_card_table_column(42, 5, "Doing", options)
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/buckets/42/card_tables/5/columns");
        assert_eq!(
            requests[0].body,
            Some(json!({"title": "Doing", "description": "In flight"}))
        );
        assert_eq!(column.id, 7);
    }

    #[tokio::test]
    async fn test_create_column_blank_title_issues_no_request() {
        let (mock, client) = client();

        let err = client
            .create_card_table_column(42, 5, "", Fields::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidParameter(_)));
        assert_eq!(err.to_string(), "title cannot be blank");
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_column_puts_options_verbatim() {
        let (mock, client) = client();
        mock.respond_with(json!({"id": 7, "title": "Done"}));

        let mut options = Fields::new();
        options.insert("title".to_string(), json!("Done"));
        client.update_card_table_column(42, 7, options).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/buckets/42/card_tables/columns/7");
        assert_eq!(requests[0].body, Some(json!({"title": "Done"})));
    }

    #[tokio::test]
    async fn test_move_column_position_floor_is_one() {
        let (mock, client) = client();

        let err = client.move_card_table_column(42, 5, 7, 0).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "position must be greater than or equal to 1"
        );
        assert!(mock.requests().is_empty());

        client.move_card_table_column(42, 5, 7, 1).await.unwrap();
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/buckets/42/card_tables/5/moves");
        assert_eq!(requests[0].body, Some(json!({"column_id": 7, "position": 1})));
    }

    #[tokio::test]
    async fn test_subscription_verbs() {
        let (mock, client) = client();

        client.subscribe_card_table_column(42, 7).await.unwrap();
        client.unsubscribe_card_table_column(42, 7).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[1].method, "DELETE");
        for request in &requests {
            assert_eq!(request.path, "/buckets/42/card_tables/lists/7/subscription");
            assert!(request.body.is_none());
        }
    }

    #[tokio::test]
    async fn test_on_hold_verbs() {
        let (mock, client) = client();

        client.put_card_table_column_on_hold(42, 7).await.unwrap();
        client.remove_card_table_column_on_hold(42, 7).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[1].method, "DELETE");
        for request in &requests {
            assert_eq!(request.path, "/buckets/42/card_tables/columns/7/on_hold");
        }
    }

    #[tokio::test]
    async fn test_change_color_accepts_whole_palette() {
        let (mock, client) = client();

        for color in Color::ALL {
            mock.respond_with(json!({"id": 7, "color": color.as_str()}));
            let column = client
                .change_card_table_column_color(42, 7, color.as_str())
                .await
                .unwrap();
            assert_eq!(column.color, Some(color));
        }

        let requests = mock.requests();
        assert_eq!(requests.len(), Color::ALL.len());
        for request in &requests {
            assert_eq!(request.method, "PUT");
            assert_eq!(request.path, "/buckets/42/card_tables/columns/7/color");
        }
        assert_eq!(requests[1].body, Some(json!({"color": "red"})));
    }

    #[tokio::test]
    async fn test_change_color_rejects_off_palette_values() {
        let (mock, client) = client();

        for bad in ["magenta", "RED", "turquoise", " "] {
            let err = client
                .change_card_table_column_color(42, 7, bad)
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)), "{bad:?} accepted");
        }
        assert!(mock.requests().is_empty());
    }
}
