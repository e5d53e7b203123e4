//! Floating chat widget backed by the server's keyword assistant.

use dioxus::prelude::*;

const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Message history for one widget session. Kept separate from the component
/// so the ordering rules are testable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text,
        });
    }

    pub fn push_bot(&mut self, text: String) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text,
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// Bot text for a finished request. Failures become a localized apology
/// rather than surfacing the transport error in the panel.
fn bot_reply(result: Result<api::types::ChatReply, ServerFnError>, lang: crate::Lang) -> String {
    match result {
        Ok(reply) => reply.response,
        Err(_) => crate::t(lang, "chat.error"),
    }
}

#[component]
pub fn ChatWidget() -> Element {
    let lang = crate::use_lang()();
    let profile = crate::use_session().profile;

    let mut open = use_signal(|| false);
    let mut typing = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut transcript = use_signal(Transcript::default);

    let mut send = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() || typing() {
            return;
        }
        transcript.with_mut(|t| t.push_user(text.clone()));
        draft.set(String::new());
        typing.set(true);

        let category = profile()
            .and_then(|p| p.category)
            .map(|c| c.as_db().to_string());
        spawn(async move {
            let result = api::chat(text, lang.code().to_string(), category).await;
            transcript.with_mut(|t| t.push_bot(bot_reply(result, lang)));
            typing.set(false);
        });
    };

    let quick_suggestions = [
        ("chat.quick.student", "student schemes"),
        ("chat.quick.farmer", "farmer schemes"),
        ("chat.quick.women", "women schemes"),
        ("chat.quick.housing", "housing schemes"),
    ];

    let type_ph = crate::t(lang, "chat.type_ph");
    let history = transcript();

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        div { class: "chat_widget",
            if open() {
                div { class: "chat_panel",
                    div { class: "chat_header",
                        span { {crate::t(lang, "chat.title")} }
                        button { class: "chat_close", onclick: move |_| open.set(false), "×" }
                    }
                    div { class: "chat_messages",
                        for (i, message) in history.messages().iter().enumerate() {
                            div {
                                key: "{i}",
                                class: match message.sender {
                                    Sender::User => "chat_msg chat_user",
                                    Sender::Bot => "chat_msg chat_bot",
                                },
                                "{message.text}"
                            }
                        }
                        if typing() {
                            div { class: "chat_msg chat_bot chat_typing", "…" }
                        }
                    }
                    div { class: "chat_suggestions",
                        for (key, prompt) in quick_suggestions {
                            button {
                                class: "chip",
                                onclick: move |_| send(prompt.to_string()),
                                {crate::t(lang, key)}
                            }
                        }
                    }
                    div { class: "chat_input_row",
                        input {
                            value: "{draft}",
                            placeholder: "{type_ph}",
                            oninput: move |e| draft.set(e.value()),
                            onkeydown: move |e| {
                                if e.key() == Key::Enter {
                                    send(draft());
                                }
                            },
                        }
                        button {
                            class: "btn primary",
                            onclick: move |_| send(draft()),
                            {crate::t(lang, "chat.send")}
                        }
                    }
                }
            }
            button {
                class: "chat_toggle",
                onclick: move |_| {
                    let opening = !open();
                    // Greet in the active language on first open.
                    if opening && transcript().messages().is_empty() {
                        transcript.with_mut(|t| t.push_bot(crate::t(lang, "chat.welcome")));
                    }
                    open.set(opening);
                },
                "💬"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_starts_empty() {
        assert!(Transcript::default().messages().is_empty());
    }

    #[test]
    fn failed_request_becomes_localized_apology() {
        use api::types::ChatReply;
        use crate::{t, Lang};

        let ok = Ok(ChatReply {
            response: "PM Kisan provides ₹6000 per year.".into(),
            language: "en".into(),
        });
        assert_eq!(bot_reply(ok, Lang::En), "PM Kisan provides ₹6000 per year.");

        let err: Result<ChatReply, ServerFnError> = Err(ServerFnError::new("connection reset"));
        assert_eq!(bot_reply(err, Lang::Hi), t(Lang::Hi, "chat.error"));
        // The raw error never leaks into the panel.
        let err: Result<ChatReply, ServerFnError> = Err(ServerFnError::new("connection reset"));
        assert!(!bot_reply(err, Lang::En).contains("connection reset"));
    }

    #[test]
    fn transcript_keeps_send_order() {
        let mut t = Transcript::default();
        t.push_bot("Namaste!".into());
        t.push_user("farmer schemes".into());
        t.push_bot("PM Kisan...".into());
        let senders: Vec<_> = t.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
    }
}
