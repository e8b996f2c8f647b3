//! Notification payloads shared by the app shell and the toast host.

use std::rc::Rc;
use yew::functional::Reducible;

/// Maximum number of toasts kept on screen.
pub const MAX_TOASTS: usize = 4;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    /// Visible toasts.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

/// Changes to the toast list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    /// Show a new toast.
    Push {
        /// Severity.
        kind: ToastKind,
        /// Display message.
        message: String,
    },
    /// Remove a toast by id.
    Dismiss(u64),
}

impl ToastList {
    /// Apply an action in place.
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push { kind, message } => {
                self.next_id += 1;
                self.toasts.push(Toast {
                    id: self.next_id,
                    message,
                    kind,
                });
                if self.toasts.len() > MAX_TOASTS {
                    let overflow = self.toasts.len() - MAX_TOASTS;
                    self.toasts.drain(0..overflow);
                }
            }
            ToastAction::Dismiss(id) => self.toasts.retain(|toast| toast.id != id),
        }
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: &mut ToastList, message: &str) {
        list.apply(ToastAction::Push {
            kind: ToastKind::Success,
            message: message.to_string(),
        });
    }

    #[test]
    fn oldest_toasts_are_dropped() {
        let mut list = ToastList::default();
        for n in 1..=6 {
            push(&mut list, &format!("toast {n}"));
        }
        let ids: Vec<u64> = list.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, [3, 4, 5, 6]);
        assert_eq!(list.toasts[0].message, "toast 3");
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut list = ToastList::default();
        push(&mut list, "a");
        push(&mut list, "b");
        list.apply(ToastAction::Dismiss(1));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].id, 2);

        let list = Rc::new(list).reduce(ToastAction::Dismiss(99));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(ToastKind::Success.class(), "success");
    }
}
