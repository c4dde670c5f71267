//! Layout warnings routed through the `log` facade.
//!
//! Provides deduplication so a malformed attribute that is re-applied on
//! every update tick is reported once, not once per frame. Used by the unit
//! parser, the container setters and the layout pass.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about rejected input or a degraded layout (emitted once per unique message)
///
/// The message is logged at `warn` level with `component` as the log target,
/// so hosts can filter `layout` warnings separately from `units` ones.
///
/// Every distinct message is remembered until [`clear_warnings`], so the set
/// only grows while a host keeps feeding new malformed text. Hosts that build
/// trees from untrusted input should clear it when they rebuild.
///
/// # Example
/// ```ignore
/// warn_once("units", "unknown unit 'em' in \"1.5em\"");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = {
        let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
        guard.get_or_insert_with(HashSet::new).insert(key)
    };

    if first_time {
        log::warn!(target: component, "{message}");
    }
}

/// Whether `message` has been reported for `component` since the last
/// [`clear_warnings`].
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings, so each message is reported again on its
/// next occurrence. Hosts call this when they rebuild a layout tree.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
