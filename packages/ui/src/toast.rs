use crate::flow::{Notice, NoticeKind};
use crate::timer::sleep;
use dioxus::prelude::*;
use std::time::Duration;

/// How long a toast stays up unless dismissed earlier.
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    text: String,
    kind: NoticeKind,
    armed: bool,
}

/// Toasts on screen. Expiry timers are armed by [`ToastProvider`], never by
/// whoever raised the toast, so they outlive the page that raised it.
#[derive(Clone, PartialEq, Default)]
struct ToastStack {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    fn push(&mut self, notice: &Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            text: notice.text.clone(),
            kind: notice.kind,
            armed: false,
        });
        id
    }

    fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    fn has_unarmed(&self) -> bool {
        self.items.iter().any(|toast| !toast.armed)
    }

    /// Ids whose expiry still needs a timer; each id is handed out once.
    fn take_unarmed(&mut self) -> Vec<u64> {
        self.items
            .iter_mut()
            .filter(|toast| !toast.armed)
            .map(|toast| {
                toast.armed = true;
                toast.id
            })
            .collect()
    }
}

/// Handle to the toast stack provided by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    stack: Signal<ToastStack>,
}

impl Toasts {
    /// Show a notice; it disappears on its own after a few seconds.
    pub fn notify(&self, notice: &Notice) -> u64 {
        let mut stack = self.stack;
        let id = stack.write().push(notice);
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut stack = self.stack;
        stack.write().dismiss(id);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut stack = use_signal(ToastStack::default);
    let toasts = use_context_provider(|| Toasts { stack });

    // Runs in the provider's scope: expiry tasks survive page navigation.
    use_effect(move || {
        if !stack.read().has_unarmed() {
            return;
        }
        let fresh = stack.write().take_unarmed();
        for id in fresh {
            spawn(async move {
                sleep(TOAST_LIFETIME).await;
                toasts.dismiss(id);
            });
        }
    });

    rsx! {
        {children}
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in stack().items {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        NoticeKind::Success => "toast toast_success",
                        NoticeKind::Error => "toast toast_error",
                    },
                    span { class: "toast_text", "{toast.text}" }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
