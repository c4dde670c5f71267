//! Layout-change notifications.
//!
//! Geometry setters report what changed through an injected
//! [`AlertDispatch`]. The container never knows who listens: an
//! [`AlertManager`] fans alerts out to subscribed callbacks, and an
//! `mpsc::Sender` forwards them to another part of the host.
//!
//! Delivery is synchronous. Every callback registered at the time of the
//! dispatch runs before the setter returns.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc;

use strum_macros::{Display, EnumString};

/// Name under which layout changes are published.
pub const ALERT_LAYOUT_CHANGE: &str = "layout-change";

/// Which part of a container's geometry changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LayoutChange {
    /// Width.
    Width,
    /// Height.
    Height,
    /// `pos_x` or `pos_y`.
    Position,
    /// Any margin side.
    Margin,
    /// Any padding side.
    Padding,
}

/// An alert published under [`ALERT_LAYOUT_CHANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAlert {
    /// What changed.
    pub change: LayoutChange,
}

impl LayoutAlert {
    /// Alert name used to route this alert to subscribers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        ALERT_LAYOUT_CHANGE
    }
}

/// Something a container can report layout changes to.
pub trait AlertDispatch {
    /// Deliver `change` to every current observer.
    fn dispatch(&mut self, change: LayoutChange);
}

/// Handle returned by [`AlertManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&LayoutAlert)>;

/// Callback registry keyed by alert name.
#[derive(Default)]
pub struct AlertManager {
    next_id: u64,
    binds: HashMap<String, Vec<(SubscriptionId, Callback)>>,
}

impl AlertManager {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` for every alert named `alert_name` until unsubscribed.
    pub fn subscribe(
        &mut self,
        alert_name: &str,
        callback: impl FnMut(&LayoutAlert) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.binds
            .entry(alert_name.to_string())
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for callbacks in self.binds.values_mut() {
            if let Some(index) = callbacks.iter().position(|(bound, _)| *bound == id) {
                drop(callbacks.remove(index));
                return true;
            }
        }
        false
    }

    /// Number of callbacks subscribed to `alert_name`.
    #[must_use]
    pub fn subscriber_count(&self, alert_name: &str) -> usize {
        self.binds.get(alert_name).map_or(0, Vec::len)
    }

    /// Run every callback subscribed to the alert's name, in subscription
    /// order.
    pub fn dispatch_alert(&mut self, alert: &LayoutAlert) {
        if let Some(callbacks) = self.binds.get_mut(alert.name()) {
            for (_, callback) in callbacks.iter_mut() {
                callback(alert);
            }
        }
    }
}

impl fmt::Debug for AlertManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .binds
            .iter()
            .map(|(name, callbacks)| (name.as_str(), callbacks.len()))
            .collect();
        f.debug_struct("AlertManager")
            .field("next_id", &self.next_id)
            .field("subscribers", &counts)
            .finish()
    }
}

impl AlertDispatch for AlertManager {
    fn dispatch(&mut self, change: LayoutChange) {
        self.dispatch_alert(&LayoutAlert { change });
    }
}

/// A manager shared by several containers.
impl<T: AlertDispatch> AlertDispatch for Rc<RefCell<T>> {
    fn dispatch(&mut self, change: LayoutChange) {
        match self.try_borrow_mut() {
            Ok(mut inner) => inner.dispatch(change),
            // A callback changed geometry while the manager was dispatching.
            Err(_) => log::debug!(target: "layout", "dropped re-entrant {change} alert"),
        }
    }
}

impl AlertDispatch for mpsc::Sender<LayoutChange> {
    fn dispatch(&mut self, change: LayoutChange) {
        if self.send(change).is_err() {
            log::debug!(target: "layout", "{change} alert not delivered: receiver dropped");
        }
    }
}
