//! Container size notifications for mounted plots.
//!
//! The host reports the plot container's width and display scale every
//! frame; listeners only hear about actual changes. Dropping the returned
//! [`ResizeSubscription`] detaches the listener, so an unmounted plot never
//! receives another callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Width of the plot container in logical pixels and the display scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: u32,
    pub scale: f64,
}

impl ContainerSize {
    pub fn new(width: u32, scale: f64) -> Self {
        Self { width, scale }
    }
}

type Listener = Rc<dyn Fn(ContainerSize)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    last: Option<ContainerSize>,
}

#[derive(Clone, Default)]
pub struct ResizeNotifier {
    registry: Rc<RefCell<Registry>>,
}

impl ResizeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(ContainerSize) + 'static) -> ResizeSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        ResizeSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Reports the current container size. Listeners run only when it
    /// differs from the last reported size. Returns whether they ran.
    pub fn notify(&self, size: ContainerSize) -> bool {
        let listeners: Vec<Listener> = {
            let mut registry = self.registry.borrow_mut();
            if registry.last == Some(size) {
                return false;
            }
            registry.last = Some(size);
            registry.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(size);
        }
        true
    }

    /// Last reported size, used to size a plot when it mounts.
    pub fn current(&self) -> Option<ContainerSize> {
        self.registry.borrow().last
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a listener registered; dropping it unregisters.
pub struct ResizeSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = match registry.try_borrow_mut() {
            Ok(mut registry) => {
                let index = registry.listeners.iter().position(|(id, _)| *id == self.id);
                index.map(|i| registry.listeners.remove(i))
            }
            Err(_) => {
                log::warn!("resize listener {} still registered: notifier busy", self.id);
                None
            }
        };
        // Released outside the borrow: the listener may own subscriptions too.
        drop(removed);
    }
}
