//! Delayed, cancellable recipe generation.
//!
//! Generation waits a fixed delay before touching the store so callers can
//! show a loading state. The pending mutation is dropped, not applied, when
//! either the request is cancelled or the store's provider goes away first.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::context::StoreHandle;

pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Recipes were appended to the store.
    Applied { recipe_ids: Vec<String> },
    /// The request was cancelled before the delay elapsed.
    Cancelled,
    /// The store's provider was dropped before the recipes could be applied.
    ProviderGone,
    /// Nothing was selected; no work was done.
    Skipped,
}

/// An in-flight generation request.
pub struct RecipeGeneration {
    task: JoinHandle<GenerationOutcome>,
    cancel: CancellationToken,
}

impl RecipeGeneration {
    /// Spawn onto the current tokio runtime.
    pub fn spawn(store: StoreHandle, ingredients: Vec<String>, delay: Duration) -> Self {
        Self::spawn_with_token(store, ingredients, delay, CancellationToken::new())
    }

    /// Like [`spawn`](Self::spawn), cancelled together with `cancel`.
    pub fn spawn_with_token(
        store: StoreHandle,
        ingredients: Vec<String>,
        delay: Duration,
        cancel: CancellationToken,
    ) -> Self {
        let task = tokio::spawn(generate_after_delay(store, ingredients, delay, cancel.clone()));
        Self { task, cancel }
    }

    /// True until the request has resolved one way or another.
    pub fn is_pending(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub async fn outcome(self) -> GenerationOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("recipe generation task did not complete: {err}");
                GenerationOutcome::Cancelled
            }
        }
    }
}

async fn generate_after_delay(
    store: StoreHandle,
    ingredients: Vec<String>,
    delay: Duration,
    cancel: CancellationToken,
) -> GenerationOutcome {
    if ingredients.is_empty() {
        debug!("no ingredients selected; skipping generation");
        return GenerationOutcome::Skipped;
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            info!("recipe generation cancelled");
            return GenerationOutcome::Cancelled;
        }
        _ = store.detached() => {
            info!("store provider gone; dropping recipe generation");
            return GenerationOutcome::ProviderGone;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    if cancel.is_cancelled() {
        return GenerationOutcome::Cancelled;
    }

    match store.write(|s| s.generate_recipes(&ingredients)) {
        Ok(recipe_ids) => {
            info!(count = recipe_ids.len(), "recipes generated");
            GenerationOutcome::Applied { recipe_ids }
        }
        Err(err) => {
            info!("dropping recipe generation: {err}");
            GenerationOutcome::ProviderGone
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StoreProvider;
    use crate::recipe::RecipeVariant;
    use crate::store::InventoryStore;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn applies_after_delay() {
        let provider = StoreProvider::new(InventoryStore::new().with_seed());
        let request = RecipeGeneration::spawn(
            provider.handle(),
            names(&["Apples", "Milk"]),
            DEFAULT_GENERATION_DELAY,
        );
        assert!(request.is_pending());

        let GenerationOutcome::Applied { recipe_ids } = request.outcome().await else {
            panic!("expected recipes to be applied");
        };
        assert_eq!(recipe_ids.len(), 2);
        provider.read(|s| {
            assert_eq!(s.recipes().len(), 3);
            assert_eq!(s.recipes()[1].variant, RecipeVariant::Core);
            assert_eq!(s.recipes()[2].variant, RecipeVariant::Extended);
            assert_eq!(s.recipes()[1].id, recipe_ids[0]);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_happens_before_the_delay() {
        let provider = StoreProvider::new(InventoryStore::new());
        let request = RecipeGeneration::spawn(provider.handle(), names(&["Rice"]), DEFAULT_GENERATION_DELAY);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(request.is_pending());
        assert!(provider.read(|s| s.recipes().is_empty()));

        assert!(matches!(request.outcome().await, GenerationOutcome::Applied { .. }));
        assert_eq!(provider.read(|s| s.recipes().len()), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_request_leaves_store_untouched() {
        let provider = StoreProvider::new(InventoryStore::new());
        let request = RecipeGeneration::spawn(provider.handle(), names(&["Rice"]), DEFAULT_GENERATION_DELAY);

        tokio::time::sleep(Duration::from_millis(200)).await;
        request.cancel();

        assert_eq!(request.outcome().await, GenerationOutcome::Cancelled);
        tokio::time::sleep(DEFAULT_GENERATION_DELAY).await;
        assert!(provider.read(|s| s.recipes().is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_provider_abandons_the_request() {
        let provider = StoreProvider::new(InventoryStore::new());
        let handle = provider.handle();
        let request = RecipeGeneration::spawn(handle.clone(), names(&["Rice"]), DEFAULT_GENERATION_DELAY);

        drop(provider);

        assert_eq!(request.outcome().await, GenerationOutcome::ProviderGone);
        assert!(handle.read(|s| s.recipes().len()).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn linked_token_cancels_request() {
        let provider = StoreProvider::new(InventoryStore::new());
        let view = CancellationToken::new();
        let request = RecipeGeneration::spawn_with_token(
            provider.handle(),
            names(&["Rice"]),
            DEFAULT_GENERATION_DELAY,
            view.child_token(),
        );

        view.cancel();
        assert_eq!(request.outcome().await, GenerationOutcome::Cancelled);
    }

    #[tokio::test]
    async fn empty_selection_is_skipped() {
        let provider = StoreProvider::new(InventoryStore::new());
        let request = RecipeGeneration::spawn(provider.handle(), Vec::new(), DEFAULT_GENERATION_DELAY);
        assert_eq!(request.outcome().await, GenerationOutcome::Skipped);
        assert!(provider.read(|s| s.recipes().is_empty()));
    }
}
