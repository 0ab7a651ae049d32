//! Wrap-around focus stepping over an ordered set of focusable ids.
//!
//! There is no persisted cursor: each step is a pure function of the
//! current focus and the ordered id list, so the focusable set can change
//! between calls (rows added, toggled across panes, deleted) without any
//! state to repair. Used for task rows (pending-then-completed order) and
//! for tabs alike.

/// The element after `current`, wrapping to the first. With no current
/// focus, or a current id no longer in the set, the first element.
pub fn next<T: Copy + Eq>(current: Option<T>, order: &[T]) -> Option<T> {
    if order.is_empty() {
        return None;
    }
    let Some(cur) = current else {
        return order.first().copied();
    };
    match order.iter().position(|id| *id == cur) {
        Some(i) => Some(order[(i + 1) % order.len()]),
        None => order.first().copied(),
    }
}

/// The element before `current`, wrapping to the last. With no current
/// focus, or a current id no longer in the set, the last element.
pub fn prev<T: Copy + Eq>(current: Option<T>, order: &[T]) -> Option<T> {
    if order.is_empty() {
        return None;
    }
    let Some(cur) = current else {
        return order.last().copied();
    };
    match order.iter().position(|id| *id == cur) {
        Some(i) => Some(order[(i + order.len() - 1) % order.len()]),
        None => order.last().copied(),
    }
}
