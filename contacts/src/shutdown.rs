//! Cooperative shutdown controller.
//!
//! `server::run` waits on this alongside OS signals.

use std::sync::Arc;
use tokio::sync::watch;

/// Cooperative shutdown signal shared by every clone.
///
/// A request made before anyone waits is not lost: the flag is latched.
#[derive(Clone, Debug)]
pub struct ShutdownController {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for ShutdownController {
    fn default() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }
}

impl ShutdownController {
    /// Returns true if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        *self.tx.borrow()
    }

    /// Request shutdown and wake all waiters.
    pub fn request_shutdown(&self) {
        self.tx.send_replace(true);
    }

    /// Wait until shutdown is requested.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // Sender は self が保持しているため Err にはならない
        let _ = rx.wait_for(|requested| *requested).await;
    }
}
