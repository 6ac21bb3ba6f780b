//! Pagination envelope and helpers shared by every list endpoint.
//!
//! All list endpoints answer with the same shape:
//! `{ data: T[], total, limit, offset }`. [`sweep_pages`] is the
//! fetch-every-page loop behind search mode and line-item totals.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The `{data, total, limit, offset}` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// `limit`/`offset` window for a list query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: usize,
    pub offset: usize,
}

impl PageQuery {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// The first window of a given size.
    pub fn first(limit: usize) -> Self {
        Self { limit, offset: 0 }
    }
}

/// Fetch an entire collection by advancing `offset` until the reported
/// total is covered.
///
/// The empty-page guard keeps a backend that under-reports from trapping
/// the loop forever.
pub async fn sweep_pages<T, F, Fut>(page_size: usize, mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(PageQuery) -> Fut,
    Fut: Future<Output = Result<Paginated<T>, ApiError>>,
{
    debug_assert!(page_size > 0);
    let mut items = Vec::new();
    let mut offset = 0;
    loop {
        let page = fetch(PageQuery::new(page_size, offset)).await?;
        let fetched = page.data.len();
        let total = page.total;
        items.extend(page.data);
        offset += page_size;
        if offset >= total || fetched == 0 {
            break;
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_deserializes() {
        let page: Paginated<String> = serde_json::from_value(json!({
            "data": ["a", "b"],
            "total": 12,
            "limit": 2,
            "offset": 4
        }))
        .unwrap();
        assert_eq!(page.data, vec!["a", "b"]);
        assert_eq!(page.total, 12);
        assert_eq!(page.offset, 4);
    }

    #[tokio::test]
    async fn sweep_collects_every_page() {
        let all: Vec<usize> = (0..25).collect();
        let calls = std::cell::Cell::new(0usize);

        let swept = sweep_pages(10, |q: PageQuery| {
            calls.set(calls.get() + 1);
            let chunk: Vec<usize> = all
                .iter()
                .copied()
                .skip(q.offset)
                .take(q.limit)
                .collect();
            async move {
                Ok(Paginated {
                    data: chunk,
                    total: 25,
                    limit: q.limit,
                    offset: q.offset,
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(swept, all);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn sweep_stops_on_empty_page() {
        // Backend claims more rows than it ever delivers.
        let swept = sweep_pages(10, |q: PageQuery| async move {
            Ok(Paginated::<usize> {
                data: Vec::new(),
                total: 100,
                limit: q.limit,
                offset: q.offset,
            })
        })
        .await
        .unwrap();
        assert!(swept.is_empty());
    }

    #[tokio::test]
    async fn sweep_propagates_failures() {
        let result: Result<Vec<usize>, _> = sweep_pages(10, |_q| async move {
            Err(ApiError::network("offline"))
        })
        .await;
        assert!(result.unwrap_err().is_network());
    }
}
