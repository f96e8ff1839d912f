use crate::ai::ChatClient;
use crate::config::WidgetConfig;
use crate::storage::PreferenceStore;
use crate::theme::{ThemeMode, theme_definition, toggle_dark_mode};
use crate::widget::ChatSession;
use dioxus::events::Key;
use dioxus::prelude::*;

const CHAT_CONTAINER_ID: &str = "chat-container";

#[component]
pub fn App() -> Element {
    let config = use_context_provider(WidgetConfig::load);
    use_context_provider(|| ChatClient::for_endpoint(config.chat_endpoint.clone()));
    let prefs = use_context_provider(PreferenceStore::open);

    // Applied once, before any interaction.
    let theme = use_signal(|| ThemeMode::load(&prefs));
    let session = use_signal(ChatSession::new);

    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: "{definition.css}" }
        div { class: "{definition.root_class}",
            Toolbar { theme, session }
            Transcript { session }
            Composer { session }
        }
    }
}

#[component]
fn Toolbar(theme: Signal<ThemeMode>, session: Signal<ChatSession>) -> Element {
    let prefs = use_context::<PreferenceStore>();
    let config = use_context::<WidgetConfig>();
    let mut theme = theme;
    let mut session = session;

    rsx! {
        div { class: "toolbar",
            button {
                id: "dark-mode-toggle",
                class: "btn",
                r#type: "button",
                onclick: move |_| {
                    let next = toggle_dark_mode(theme(), &prefs);
                    theme.set(next);
                },
                if theme().is_dark() { "Light mode" } else { "Dark mode" }
            }
            button {
                id: "clear-chat",
                class: "btn",
                r#type: "button",
                onclick: move |_| session.with_mut(ChatSession::clear),
                "Clear chat"
            }
            button {
                id: "download-template",
                class: "btn",
                r#type: "button",
                onclick: move |_| navigate_to(&config.template_path),
                "Download template"
            }
        }
    }
}

#[component]
fn Transcript(session: Signal<ChatSession>) -> Element {
    use_effect(move || {
        let _ = session.read().messages().len();
        scroll_to_bottom();
    });

    let snapshot = session();
    rsx! {
        div { id: CHAT_CONTAINER_ID, class: "chat-container",
            for (i, message) in snapshot.messages().iter().enumerate() {
                div {
                    key: "{i}",
                    class: format_args!("message {}", message.sender.css_class()),
                    "{message.text}"
                }
            }
        }
        if snapshot.is_typing() {
            div { id: "typing-indicator", class: "typing-indicator", "Bot is typing..." }
        }
    }
}

#[component]
fn Composer(session: Signal<ChatSession>) -> Element {
    let client = use_context::<ChatClient>();
    // Held in a signal so the send closure stays `Copy` for both handlers.
    let client = use_signal(move || client);
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut session = session;
        move |raw: String| {
            let Some(text) = session.with_mut(|s| s.submit(&raw)) else {
                return;
            };
            input.set(String::new());

            let client = client();
            spawn(async move {
                let outcome = client.reply(&text).await;
                session.with_mut(|s| s.receive(outcome));
            });
        }
    };

    rsx! {
        div { class: "composer",
            input {
                id: "user-input",
                r#type: "text",
                placeholder: "Type your message...",
                value: "{input}",
                oninput: move |ev| input.set(ev.value()),
                onkeydown: move |ev| {
                    if ev.key() == Key::Enter {
                        ev.prevent_default();
                        send_message(input());
                    }
                },
            }
            button {
                id: "send-button",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| send_message(input()),
                "Send"
            }
        }
    }
}

fn scroll_to_bottom() {
    let script = format!(
        "const el = document.getElementById('{CHAT_CONTAINER_ID}'); if (el) {{ el.scrollTop = el.scrollHeight; }}"
    );
    let _ = document::eval(&script);
}

/// Full-page navigation; the server answers with the file attachment.
fn navigate_to(path: &str) {
    match serde_json::to_string(path) {
        Ok(quoted) => {
            let _ = document::eval(&format!("window.location.href = {quoted};"));
        }
        Err(err) => tracing::warn!(error = %err, "could not encode navigation path"),
    }
}
