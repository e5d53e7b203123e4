//! Browser-held user state: the demographic profile and the anonymous
//! session token that keys saved schemes and reminders on the server.
//!
//! Both live in localStorage (`userProfile` as JSON, `sessionId` as an
//! opaque string). The server never sees the profile except as a request
//! parameter.

use api::types::UserProfile;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionState {
    pub profile: Signal<Option<UserProfile>>,
    pub session_id: Signal<Option<String>>,
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Load profile and session id from the browser after mount, creating the
/// session id on first visit.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut profile = use_signal(|| None::<UserProfile>);
    let mut session_id = use_signal(|| None::<String>);
    use_context_provider(|| SessionState {
        profile,
        session_id,
    });

    use_effect(move || {
        if let Some(stored) = storage_get("userProfile") {
            if let Ok(parsed) = serde_json::from_str::<UserProfile>(&stored) {
                profile.set(Some(parsed));
            }
        }

        spawn(async move {
            // Same shape the portal has always generated, so returning
            // visitors keep their saved schemes.
            let js = r#"
            (function(){
              try {
                let id = localStorage.getItem("sessionId");
                if(!id || id.length === 0){
                  id = "user_" + Math.random().toString(36).substr(2, 9);
                  localStorage.setItem("sessionId", id);
                }
                return id;
              } catch(e) { return "user_anonymous"; }
            })()
            "#;
            if let Ok(v) = document::eval(js).await {
                if let Some(id) = v.as_str() {
                    session_id.set(Some(id.to_string()));
                }
            }
        });
    });

    rsx! { {children} }
}

/// Persist the profile and publish it to the component tree. Callable from
/// event handlers, so this consumes the context instead of hooking it.
pub fn save_profile(profile: UserProfile) {
    let mut state = consume_context::<SessionState>();
    if let Ok(json) = serde_json::to_string(&profile) {
        storage_set("userProfile", &json);
    }
    state.profile.set(Some(profile));
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

// On the server there is no browser storage; state only lives for the
// render.
#[cfg(not(target_arch = "wasm32"))]
fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_set(_key: &str, _value: &str) {}
