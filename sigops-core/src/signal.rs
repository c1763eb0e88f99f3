use std::fmt;
use std::sync::Arc;

/// A continuous signal evaluated pointwise.
///
/// Cloning shares the underlying function and keeps its identity, so two
/// clones compare equal under [`SignalFn::same_as`]. Building a new signal,
/// even from an identical closure, always produces a new identity. The plot
/// view relies on this to decide when a redraw is due.
#[derive(Clone)]
pub struct SignalFn {
    inner: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl SignalFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Evaluates the signal at time `t`.
    pub fn eval(&self, t: f64) -> f64 {
        (self.inner)(t)
    }

    pub fn same_as(&self, other: &SignalFn) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.inner) as *const (),
            Arc::as_ptr(&other.inner) as *const (),
        )
    }
}

impl From<fn(f64) -> f64> for SignalFn {
    fn from(f: fn(f64) -> f64) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for SignalFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalFn")
            .field("ptr", &(Arc::as_ptr(&self.inner) as *const ()))
            .finish()
    }
}
