use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};
use shopfinder_core::ProductDetails;

use crate::client::{ShopLookup, ShopLookupClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Completed(ShopLookup),
    /// A newer search started before this one finished.
    Superseded,
}

/// Serializes user-driven searches: starting a search aborts the one still
/// in flight, so a stale response can never replace a newer one.
#[derive(Debug)]
pub struct SearchSession {
    client: Arc<ShopLookupClient>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl SearchSession {
    #[must_use]
    pub fn new(client: Arc<ShopLookupClient>) -> Self {
        Self {
            client,
            in_flight: Mutex::new(None),
        }
    }

    pub async fn search(&self, product: &ProductDetails, location: &str) -> SearchOutcome {
        let (handle, registration) = AbortHandle::new_pair();
        let previous = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }

        match Abortable::new(self.client.lookup(product, location), registration).await {
            Ok(lookup) => SearchOutcome::Completed(lookup),
            Err(_aborted) => {
                tracing::debug!(location, "search superseded by a newer one");
                SearchOutcome::Superseded
            }
        }
    }

    /// Aborts the in-flight search, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }

    #[must_use]
    pub fn client(&self) -> &Arc<ShopLookupClient> {
        &self.client
    }
}
