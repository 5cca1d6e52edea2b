use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{application::ApplicationError, error::BlockgenResult};

/// Shared interrupt flag.
///
/// Set asynchronously (typically from a signal handler) and polled by the
/// collector and the generator at their checkpoints. Setting it never
/// preempts work in progress.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing flag, e.g. one already registered with a handler.
    pub fn from_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// The underlying flag, for handing to a signal handler.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// `Err(CancelledByOperator)` once the flag is set.
    pub fn checkpoint(&self) -> BlockgenResult<()> {
        if self.is_cancelled() {
            Err(ApplicationError::CancelledByOperator.into())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancellationToken::new();
        let observer = token.clone();

        assert!(observer.checkpoint().is_ok());
        token.cancel();
        assert!(observer.is_cancelled());
        assert!(observer.checkpoint().unwrap_err().is_cancellation());
    }

    #[test]
    fn from_flag_observes_external_writes() {
        let flag = Arc::new(AtomicBool::new(false));
        let token = CancellationToken::from_flag(Arc::clone(&flag));

        flag.store(true, Ordering::SeqCst);
        assert!(token.is_cancelled());
    }
}
