use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::tracking::TrackError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Normal,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Normal,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn from_error(err: &TrackError) -> Self {
        Self::destructive(err.title(), &err.to_string())
    }

    /// Toast shown once a tracking request settles.
    pub fn for_tracking_result(result: &Result<(), TrackError>) -> Self {
        match result {
            Ok(()) => Self::success("Success!", "Price tracking started for this product"),
            Err(err) => Self::from_error(err),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: ToastMessage,
}

pub enum ToastAction {
    Push(ToastMessage),
    Dismiss(u32),
}

/// The visible toast stack, newest last, capped at `limit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toasts {
    next_id: u32,
    limit: usize,
    items: VecDeque<Toast>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_limit(config::TOAST_LIMIT)
    }
}

impl Toasts {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            next_id: 0,
            limit: limit.max(1),
            items: VecDeque::new(),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn push(&mut self, message: ToastMessage) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push_back(Toast { id, message });
        while self.items.len() > self.limit {
            self.items.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(message) => {
                next.push(message);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Toasts,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toast-viewport">
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 380px;
                        width: calc(100% - 3rem);
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #fff;
                        border: 1px solid rgba(0, 0, 0, 0.08);
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                        animation: toastIn 0.25s ease-out;
                    }
                    .toast.destructive {
                        background: #dc2626;
                        border-color: #b91c1c;
                        color: #fff;
                    }
                    .toast-body { flex: 1; }
                    .toast-title { font-weight: 600; font-size: 0.95rem; }
                    .toast-description { font-size: 0.85rem; opacity: 0.85; margin-top: 0.25rem; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font-size: 1rem;
                        opacity: 0.6;
                    }
                    .toast-close:hover { opacity: 1; }
                    @keyframes toastIn {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.toasts.items().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    // Auto-dismiss; the timeout is dropped (cancelled) if the toast goes first.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DISMISS_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let message = &props.toast.message;
    html! {
        <div class={classes!("toast", (message.variant == ToastVariant::Destructive).then(|| "destructive"))} role="status">
            <div class="toast-body">
                <div class="toast-title">{&message.title}</div>
                <div class="toast-description">{&message.description}</div>
            </div>
            <button class="toast-close" aria-label="Close" {onclick}>{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastMessage::success("a", ""));
        let b = toasts.push(ToastMessage::success("b", ""));
        assert!(b > a);
        assert_eq!(toasts.items().count(), 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut toasts = Toasts::with_limit(3);
        for title in ["1", "2", "3", "4"] {
            toasts.push(ToastMessage::destructive(title, "x"));
        }
        let titles: Vec<_> = toasts.items().map(|t| t.message.title.as_str()).collect();
        assert_eq!(titles, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut toasts = Toasts::default();
        let keep = toasts.push(ToastMessage::success("keep", ""));
        let gone = toasts.push(ToastMessage::success("gone", ""));
        toasts.dismiss(gone);
        toasts.dismiss(999);
        let ids: Vec<_> = toasts.items().map(|t| t.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn test_rejected_link_toast_is_destructive() {
        let toast = ToastMessage::from_error(&TrackError::UnsupportedUrl);
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.title, "Invalid URL");
        assert_eq!(toast.description, "Please enter a valid Amazon or Flipkart product URL");
    }

    #[test]
    fn test_tracking_success_toast() {
        let toast = ToastMessage::for_tracking_result(&Ok(()));
        assert_eq!(toast.variant, ToastVariant::Normal);
        assert_eq!(toast.title, "Success!");
        assert_eq!(toast.description, "Price tracking started for this product");
    }

    #[test]
    fn test_tracking_failure_toast() {
        let toast = ToastMessage::for_tracking_result(&Err(TrackError::Failed));
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Failed to start price tracking. Please try again.");
    }

    #[test]
    fn test_reducer() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(ToastMessage::destructive("Invalid URL", "nope")));
        let toast = toasts.items().next().cloned().unwrap();
        assert_eq!(toast.message.variant, ToastVariant::Destructive);
        let toasts = toasts.reduce(ToastAction::Dismiss(toast.id));
        assert_eq!(toasts.items().count(), 0);
    }
}
