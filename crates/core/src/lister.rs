//! Pagination driver for bucket listings
//!
//! `BucketLister` walks a paginated listing to exhaustion, following each
//! continuation token exactly once, then issues the bucket-metadata probe.
//! Pagination is exposed both as a lazy record stream (memory stays
//! bounded for large buckets) and as an eager one-call form that also
//! distinguishes an empty bucket from an exhausted listing.

use futures::Stream;
use futures::TryStreamExt;
use futures::stream;

use crate::error::{Error, Result};
use crate::types::{BucketMetadata, BucketStore, ObjectRecord};

/// Outcome of a full listing: the records, or an explicit empty marker
///
/// The marker lets callers report "bucket is empty" distinctly from "no
/// more entries".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Objects(Vec<ObjectRecord>),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

/// Result of `list_bucket`: the listing plus the metadata probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReport {
    pub listing: Listing,
    pub metadata: BucketMetadata,
}

/// Enumerates all objects in a named bucket over a `BucketStore`
///
/// Each call is independent and idempotent; no state is shared between
/// calls and nothing is retried here. Transient-error retry, if any,
/// belongs to the underlying transport.
pub struct BucketLister<S> {
    store: S,
}

impl<S: BucketStore> BucketLister<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lazily stream every object record in the bucket
    ///
    /// Pages are fetched on demand as the stream is polled; each
    /// continuation token is consumed exactly once and no page is
    /// re-fetched or skipped. The first error ends the stream.
    pub fn records<'a>(
        &'a self,
        bucket: &'a str,
    ) -> impl Stream<Item = Result<ObjectRecord>> + 'a {
        // State is Some(token-to-send) while pages remain, None once the
        // final page (no continuation token) has been served.
        stream::try_unfold(Some(None::<String>), move |state| async move {
            let Some(token) = state else {
                return Ok(None);
            };
            let page = self.store.list_page(bucket, token.as_deref()).await?;
            tracing::debug!(
                bucket,
                records = page.records.len(),
                truncated = page.continuation_token.is_some(),
                "fetched listing page"
            );
            let next = page.continuation_token.clone().map(Some);
            Ok(Some((page, next)))
        })
        .map_ok(|page| stream::iter(page.records.into_iter().map(Ok::<_, Error>)))
        .try_flatten()
    }

    /// Probe the bucket for existence/access and capture its request ID
    ///
    /// Shares the listing's credentials and bucket, so it fails the same
    /// way a listing-permission failure would.
    pub async fn probe_metadata(&self, bucket: &str) -> Result<BucketMetadata> {
        self.store.head_bucket(bucket).await
    }

    /// List the whole bucket, then probe its metadata
    ///
    /// Eager form of `records` for callers that want the complete set:
    /// follows continuation tokens until exhaustion, then issues the head
    /// probe. The probe intentionally runs only after enumeration and is
    /// not reconciled with it if the bucket changes in between.
    pub async fn list_bucket(&self, bucket: &str) -> Result<BucketReport> {
        let mut records = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self.store.list_page(bucket, token.as_deref()).await?;
            tracing::debug!(
                bucket,
                records = page.records.len(),
                truncated = page.continuation_token.is_some(),
                "fetched listing page"
            );
            records.extend(page.records);
            match page.continuation_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        let metadata = self.store.head_bucket(bucket).await?;

        let listing = if records.is_empty() {
            Listing::Empty
        } else {
            Listing::Objects(records)
        };

        Ok(BucketReport { listing, metadata })
    }
}
