//! Payload-free "cart changed" notification.
//!
//! The signal carries no diff: subscribers re-read the cart through
//! `items()`/`total()`/`count()` on receipt. The notifier is owned by the
//! engine and injected alongside it, not an ambient global event bus.

/// Subscriber registry for cart change signals.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Box<dyn Fn()>>,
}

impl ChangeNotifier {
    /// Create a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, called once per successful cart persist.
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Signal all listeners.
    pub fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether any listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
