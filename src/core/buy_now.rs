use crate::core::{ComicLookup, PageRouter};
use crate::domain::model::{Comic, Route};
use crate::utils::error::{Result, StorefrontError};
use std::sync::atomic::{AtomicBool, Ordering};

pub fn route_for(comic: &Comic) -> Route {
    decide_route(comic.id, comic.stock)
}

fn decide_route(comic_id: u64, stock: i64) -> Route {
    if stock > 0 {
        Route::Checkout { comic_id }
    } else {
        Route::ComicDetails { comic_id }
    }
}

/// Handles activations of the "Buy Now" control.
///
/// Each activation re-fetches the comic, because the stock shown on the page
/// may be stale, and pushes exactly one route. While an activation is
/// pending, further activations are dropped without navigating.
pub struct BuyNowNavigator<L: ComicLookup, R: PageRouter> {
    lookup: L,
    router: R,
    in_flight: AtomicBool,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<L: ComicLookup, R: PageRouter> BuyNowNavigator<L, R> {
    pub fn new(lookup: L, router: R) -> Self {
        Self {
            lookup,
            router,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn activate(&self, comic_id: u64) -> Result<Route> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Ignoring buy-now for comic {}: activation pending", comic_id);
            return Err(StorefrontError::ActivationInFlight { id: comic_id });
        }
        let _pending = InFlight(&self.in_flight);

        tracing::debug!("Re-fetching comic {} before buy-now", comic_id);
        let comic = match self.lookup.get_comic_by_id(comic_id).await {
            Ok(comic) => comic,
            Err(e) => {
                tracing::warn!("Buy-now for comic {} aborted: {}", comic_id, e);
                return Err(e);
            }
        };

        if comic.id != comic_id {
            tracing::warn!(
                "Lookup for comic {} returned comic {}, routing by requested id",
                comic_id,
                comic.id
            );
        }

        let route = decide_route(comic_id, comic.stock);
        tracing::info!(stock = comic.stock, "Buy-now for comic {} -> {}", comic_id, route);
        self.router.push(&route.path());
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::router::RecordingRouter;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct MockLookup {
        comic: Option<Comic>,
    }

    #[async_trait]
    impl ComicLookup for MockLookup {
        async fn get_comic_by_id(&self, id: u64) -> Result<Comic> {
            self.comic
                .clone()
                .ok_or(StorefrontError::ComicNotFound { id })
        }
    }

    struct GatedLookup {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl ComicLookup for GatedLookup {
        async fn get_comic_by_id(&self, id: u64) -> Result<Comic> {
            self.gate.notified().await;
            Ok(Comic::new(id, 1))
        }
    }

    #[test]
    fn test_route_for_stock() {
        assert_eq!(route_for(&Comic::new(5, 2)), Route::Checkout { comic_id: 5 });
        assert_eq!(route_for(&Comic::new(5, 0)), Route::ComicDetails { comic_id: 5 });
    }

    #[tokio::test]
    async fn test_in_stock_navigates_to_checkout() {
        let router = RecordingRouter::new();
        let lookup = MockLookup {
            comic: Some(Comic::new(82967, 405)),
        };
        let navigator = BuyNowNavigator::new(lookup, router.clone());

        let route = navigator.activate(82967).await.unwrap();

        assert_eq!(route, Route::Checkout { comic_id: 82967 });
        assert_eq!(router.paths(), vec!["/checkout?comicId=82967".to_string()]);
    }

    #[tokio::test]
    async fn test_out_of_stock_navigates_to_details() {
        let router = RecordingRouter::new();
        let lookup = MockLookup {
            comic: Some(Comic::new(82967, 0)),
        };
        let navigator = BuyNowNavigator::new(lookup, router.clone());

        navigator.activate(82967).await.unwrap();

        assert_eq!(router.paths(), vec!["/comics/82967".to_string()]);
    }

    #[tokio::test]
    async fn test_lookup_failure_does_not_navigate() {
        let router = RecordingRouter::new();
        let navigator = BuyNowNavigator::new(MockLookup { comic: None }, router.clone());

        let result = navigator.activate(3).await;

        assert!(matches!(result, Err(StorefrontError::ComicNotFound { id: 3 })));
        assert!(router.paths().is_empty());
        assert!(!navigator.is_pending());
    }

    #[tokio::test]
    async fn test_second_activation_while_pending_is_dropped() {
        let gate = Arc::new(Notify::new());
        let router = RecordingRouter::new();
        let navigator = BuyNowNavigator::new(GatedLookup { gate: gate.clone() }, router.clone());

        let (first, second) = tokio::join!(navigator.activate(9), async {
            let result = navigator.activate(9).await;
            gate.notify_one();
            result
        });

        assert_eq!(first.unwrap(), Route::Checkout { comic_id: 9 });
        assert!(matches!(second, Err(StorefrontError::ActivationInFlight { id: 9 })));
        assert_eq!(router.len(), 1);

        // released once the first activation resolved
        gate.notify_one();
        assert!(navigator.activate(9).await.is_ok());
        assert_eq!(router.len(), 2);
    }
}
