use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A single-permit token serializing request issuance.
///
/// Acquire before issuing a request, reject acquisition while held, release
/// unconditionally when the guard drops — completion, failure or panic all
/// release the same way. Clones share the same permit.
#[derive(Debug, Clone, Default)]
pub struct FetchPermit {
    held: Arc<AtomicBool>,
}

impl FetchPermit {
    /// Create a new, unheld permit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the permit, or `None` if it's already held.
    pub fn try_acquire(&self) -> Option<PermitGuard> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PermitGuard {
                held: self.held.clone(),
            })
    }

    /// Whether the permit is currently held.
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// Releases the owning [`FetchPermit`] on drop.
#[derive(Debug)]
pub struct PermitGuard {
    held: Arc<AtomicBool>,
}

impl Drop for PermitGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}
