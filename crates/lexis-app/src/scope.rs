use std::future::Future;

use lexis_types::ScopeId;
use tokio_util::sync::CancellationToken;

/// Lifetime of one mounted screen.
///
/// Tasks started through [`ScreenScope::spawn`] race the scope's token and are
/// dropped when the screen unmounts. Dropping the scope cancels it.
#[derive(Debug)]
pub struct ScreenScope {
    id: ScopeId,
    token: CancellationToken,
}

impl ScreenScope {
    pub fn new(parent: &CancellationToken) -> Self {
        Self {
            id: ScopeId::new(),
            token: parent.child_token(),
        }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn spawn<F>(&self, task: &'static str, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.token.clone();
        let scope = self.id;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(%scope, task, "scoped task cancelled");
                }
                _ = fut => {}
            }
        });
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn test_cancel_stops_pending_task() {
        let parent = CancellationToken::new();
        let scope = ScreenScope::new(&parent);
        let (tx, rx) = kanal::unbounded_async::<u8>();

        scope.spawn("late", async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = tx.send(1).await;
        });
        scope.cancel();

        // sender dropped with the cancelled task
        let result = timeout(Duration::from_secs(1), rx.recv()).await;
        assert!(matches!(result, Ok(Err(_))));
    }

    #[tokio::test]
    async fn test_parent_cancels_children() {
        let parent = CancellationToken::new();
        let first = ScreenScope::new(&parent);
        let second = ScreenScope::new(&parent);
        assert_ne!(first.id(), second.id());

        let (tx, rx) = kanal::unbounded_async::<ScopeId>();
        for scope in [&first, &second] {
            let tx = tx.clone();
            let id = scope.id();
            scope.spawn("late", async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                let _ = tx.send(id).await;
            });
        }
        drop(tx);
        parent.cancel();

        let result = timeout(Duration::from_secs(1), rx.recv()).await;
        assert!(matches!(result, Ok(Err(_))));
    }
}
