//! Form lifetimes.

use std::future::Future;

use tokio::sync::watch;

/// Lifetime of one form instance.
///
/// Every suspension point of a form runs under a [`LifetimeToken`]; once the
/// lifetime ends (explicitly or because the form was dropped) outstanding
/// results are discarded instead of being applied to a defunct form.
#[derive(Debug)]
pub struct FormLifetime {
    ended: watch::Sender<bool>,
}

impl FormLifetime {
    /// Start a new, live lifetime.
    #[must_use]
    pub fn new() -> Self {
        let (ended, _) = watch::channel(false);

        Self { ended }
    }

    /// Token observing this lifetime.
    #[must_use]
    pub fn token(&self) -> LifetimeToken {
        LifetimeToken {
            ended: self.ended.subscribe(),
        }
    }

    /// Ends the lifetime; idempotent.
    pub fn end(&self) {
        self.ended.send_replace(true);
    }

    /// Whether [`end`](Self::end) has been called.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        *self.ended.borrow()
    }
}

impl Default for FormLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FormLifetime {
    fn drop(&mut self) {
        self.end();
    }
}

/// Observer of a [`FormLifetime`], cheap to clone into detached work.
#[derive(Debug, Clone)]
pub struct LifetimeToken {
    ended: watch::Receiver<bool>,
}

impl LifetimeToken {
    /// Whether the owning form has gone away.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        *self.ended.borrow() || self.ended.has_changed().is_err()
    }

    /// Resolves once the owning form has gone away.
    pub async fn ended(&mut self) {
        // A dropped sender counts as ended too.
        _ = self.ended.wait_for(|ended| *ended).await;
    }

    /// Runs `work` unless the lifetime ends first.
    ///
    /// Returns `None` when the lifetime ended before `work` settled; the
    /// output of `work` is then dropped unseen.
    pub async fn guard<F: Future>(mut self, work: F) -> Option<F::Output> {
        if self.has_ended() {
            return None;
        }

        tokio::select! {
            biased;

            () = self.ended() => None,
            output = work => Some(output),
        }
    }
}
