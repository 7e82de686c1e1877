//! Card table API client.
//!
//! An async client for the card table (kanban board) feature of a
//! project-management service: tables, columns, cards, and steps. Each
//! method maps one-to-one onto a REST endpoint rooted at
//! `/buckets/{bucket_id}/card_tables/...` — it validates its arguments,
//! composes the path and body, performs a single HTTP call, and returns the
//! deserialized resource. There is no retry logic, caching, or local state:
//! every call is a stateless round trip.
//!
//! # Quick Start
//!
//! ```no_run
//! use cardtable::{Client, Fields};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> cardtable::Result<()> {
//!     // Reads CARDTABLE_BASE_URL and CARDTABLE_ACCESS_TOKEN
//!     let client = Client::from_env()?;
//!
//!     // Fetch a board
//!     let table = client.card_table(42, 5).await?;
//!     println!("{} has {} columns", table.title, table.columns.len());
//!
//!     // Create a card with an optional due date
//!     let mut options = Fields::new();
//!     options.insert("due_on".to_string(), json!("2025-12-31"));
//!     let card = client.create_card_table_card(42, 7, "Ship it", options).await?;
//!     println!("created card {}", card.id);
//!
//!     // List a column lazily - pages are fetched as consumed
//!     let mut cards = client.card_table_cards(42, 7, &[]);
//!     while let Some(page) = cards.try_next_page().await? {
//!         for card in page {
//!             println!("- {}", card.title);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Client`] — the entry point; a cheap-to-clone handle over an injected
//!   transport, with one async method per endpoint.
//! - [`Transport`] — the HTTP boundary as a capability set
//!   `{get, post, put, delete}`. [`HttpTransport`] is the shipped reqwest
//!   implementation; tests inject a recording double instead.
//! - [`Pages`] — lazy pagination for list endpoints, following
//!   `Link: rel="next"` headers one page at a time.
//!
//! Validation failures ([`Error::InvalidParameter`]) are raised before any
//! request is issued; HTTP and decode failures pass through unchanged.

mod api;
mod client;
mod error;
mod models;
mod pagination;
mod transport;
mod validate;

pub use api::Fields;
pub use client::{Client, ClientBuilder, ENV_ACCESS_TOKEN, ENV_BASE_URL, VERSION};
pub use error::{Error, Result};
pub use models::{Card, CardTable, Color, Column, Step};
pub use pagination::Pages;
pub use transport::{HttpTransport, Payload, Transport, DEFAULT_TIMEOUT};
