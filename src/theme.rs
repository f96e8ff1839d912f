use crate::storage::PreferenceStore;

/// Storage key holding `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Read the stored preference once. Only the exact string `"true"` selects
    /// dark mode; anything else, including a missing entry, is light.
    pub fn load(store: &PreferenceStore) -> Self {
        match store.get(DARK_MODE_KEY).as_deref() {
            Some("true") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Flip the theme and persist the new state. A failed write is logged and
/// the flipped mode is still returned.
pub fn toggle_dark_mode(current: ThemeMode, store: &PreferenceStore) -> ThemeMode {
    let next = current.toggled();
    let flag = if next.is_dark() { "true" } else { "false" };
    if let Err(err) = store.set(DARK_MODE_KEY, flag) {
        tracing::warn!(error = %err, "failed to persist dark mode preference");
    }
    next
}

pub struct ThemeDefinition {
    pub root_class: &'static str,
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            root_class: "chat-app dark-mode",
            css: BASE_CSS,
        },
        ThemeMode::Light => ThemeDefinition {
            root_class: "chat-app",
            css: BASE_CSS,
        },
    }
}

const BASE_CSS: &str = r#"
.chat-app {
    --color-bg-primary: #ffffff;
    --color-text-primary: #111111;
    --color-border: #d0d0d0;
    --color-user-bg: #111111;
    --color-user-text: #ffffff;
    --color-bot-bg: #f0f0f0;
    --color-bot-text: #111111;
    background: var(--color-bg-primary);
    color: var(--color-text-primary);
    min-height: 100vh;
}
.chat-app.dark-mode {
    --color-bg-primary: #000000;
    --color-text-primary: #ffffff;
    --color-border: #2a2a2a;
    --color-user-bg: #ffffff;
    --color-user-text: #000000;
    --color-bot-bg: #111111;
    --color-bot-text: #ffffff;
}
.chat-container { height: 70vh; overflow-y: auto; border: 1px solid var(--color-border); padding: 0.5rem; }
.message { margin: 0.25rem 0; padding: 0.5rem 0.75rem; border-radius: 0.5rem; white-space: pre-wrap; }
.user-message { background: var(--color-user-bg); color: var(--color-user-text); margin-left: 20%; }
.bot-message { background: var(--color-bot-bg); color: var(--color-bot-text); margin-right: 20%; }
.typing-indicator { font-style: italic; opacity: 0.7; }
"#;
