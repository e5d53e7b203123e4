//! Transient notification banners. Pushed from event handlers, cleared
//! automatically after a few seconds or via the close button.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast_success",
            ToastKind::Info => "toast toast_info",
            ToastKind::Error => "toast toast_error",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    title: String,
    body: Option<String>,
}

/// Handle for pushing banners; provided as context by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    counter: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, title: String, body: Option<String>) {
        self.push(ToastKind::Success, title, body);
    }

    pub fn info(&self, title: String, body: Option<String>) {
        self.push(ToastKind::Info, title, body);
    }

    pub fn error(&self, title: String, body: Option<String>) {
        self.push(ToastKind::Error, title, body);
    }

    fn push(&self, kind: ToastKind, title: String, body: Option<String>) {
        let mut counter = self.counter;
        let id = counter() + 1;
        counter.set(id);

        let mut entries = self.entries;
        entries.with_mut(|list| {
            list.push(Toast {
                id,
                kind,
                title,
                body,
            })
        });

        spawn(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            remove(entries, id);
        });
    }
}

fn remove(mut entries: Signal<Vec<Toast>>, id: u64) {
    entries.with_mut(|list| list.retain(|toast| toast.id != id));
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let entries = use_signal(Vec::new);
    let counter = use_signal(|| 0_u64);
    use_context_provider(|| Toasts { entries, counter });

    let visible = entries();
    rsx! {
        {children}
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in visible.iter() {
                div { key: "{toast.id}", class: toast.kind.css_class(),
                    div { class: "toast_title", "{toast.title}" }
                    if let Some(body) = &toast.body {
                        div { class: "toast_body", "{body}" }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            move |_| remove(entries, id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_border_class() {
        assert_eq!(ToastKind::Success.css_class(), "toast toast_success");
        assert_eq!(ToastKind::Info.css_class(), "toast toast_info");
        assert_eq!(ToastKind::Error.css_class(), "toast toast_error");
    }
}
