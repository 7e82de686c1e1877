// Lazy pagination
//
// List endpoints answer one page at a time and point at the rest through a
// `Link: rel="next"` header. `Pages` holds the pending request and only hits
// the wire when a page is actually pulled, so constructing a listing is free
// and consuming half of it costs half the requests.

use crate::error::{Error, Result};
use crate::transport::Transport;
use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

enum PageRequest {
    /// The initial listing request: service path plus caller query.
    First {
        path: String,
        query: Vec<(String, String)>,
    },
    /// A follow-up fetch of the absolute URL the previous page linked to.
    Follow(String),
}

/// A lazily-fetched sequence of resource pages.
///
/// Nothing is requested until [`try_next_page`](Pages::try_next_page) is
/// called; each call issues exactly one GET. Iteration ends when a page
/// arrives without a next link.
pub struct Pages<T> {
    transport: Arc<dyn Transport>,
    pending: Option<PageRequest>,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Pages<T>
where
    T: DeserializeOwned,
{
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        path: String,
        query: Vec<(String, String)>,
    ) -> Self {
        Pages {
            transport,
            pending: Some(PageRequest::First { path, query }),
            _resource: PhantomData,
        }
    }

    /// Fetch the next page, or `Ok(None)` once the listing is exhausted.
    pub async fn try_next_page(&mut self) -> Result<Option<Vec<T>>> {
        let Some(request) = self.pending.take() else {
            return Ok(None);
        };

        let payload = match request {
            PageRequest::First { path, query } => self.transport.get(&path, &query).await?,
            PageRequest::Follow(url) => {
                tracing::debug!(%url, "following pagination link");
                self.transport.get(&url, &[]).await?
            }
        };

        self.pending = payload.next.map(PageRequest::Follow);
        let items: Vec<T> = serde_json::from_value(payload.body)?;
        Ok(Some(items))
    }

    /// Drain every remaining page into one vector.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while let Some(page) = self.try_next_page().await? {
            all.extend(page);
        }
        Ok(all)
    }
}

impl<T> Pages<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Flatten the pages into a stream of individual resources. Pages are
    /// still fetched one at a time, as the stream is consumed.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        stream::try_unfold(self, |mut pages| async move {
            let page = pages.try_next_page().await?;
            Ok::<_, Error>(page.map(|items| {
                let items = stream::iter(items.into_iter().map(Ok::<T, Error>));
                (items, pages)
            }))
        })
        .try_flatten()
    }
}
