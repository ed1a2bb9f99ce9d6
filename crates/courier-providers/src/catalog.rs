//! Static catalog of supported messaging providers.
//!
//! The catalog is data: each entry bundles the provider's fixed metadata
//! with two optional capabilities — a read-only unread probe (a JS boolean
//! expression evaluated inside the provider's view) and a one-shot page-load
//! automation script. Adding a provider means adding a table row; nothing in
//! the view management core needs to change.

use serde::Serialize;

/// Fixed metadata for one supported messaging service.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderType {
    /// Stable string key, referenced by account records.
    pub id: &'static str,
    pub display_name: &'static str,
    /// URL loaded when a view for this provider is created.
    pub entry_url: &'static str,
    /// Icon asset name for the side menu.
    pub icon: &'static str,
    /// Custom user agent, for providers that gate their web client on it.
    pub user_agent: Option<&'static str>,
    /// JS boolean expression detecting unread messages. `None` means the
    /// provider always reports no unread.
    #[serde(skip)]
    pub unread_probe: Option<&'static str>,
    /// JS run once per view after its first page load.
    #[serde(skip)]
    pub on_load_script: Option<&'static str>,
}

/// All supported providers.
pub const PROVIDER_TYPES: &[ProviderType] = &[
    ProviderType {
        id: "FacebookMessenger",
        display_name: "Facebook Messenger",
        entry_url: "https://www.messenger.com",
        icon: "messenger-icon.png",
        user_agent: None,
        // The unread badge SVG inside the chats sidebar button.
        unread_probe: Some(
            r##"!!document.querySelector("#left-sidebar-button-chats > div > div > div > div > div > div > div > div > svg")"##,
        ),
        on_load_script: Some(
            r#"
            (function() {
                // Auto-click "Keep me signed in" on the login page.
                try {
                    const persistentCheckbox = document.querySelector('input[name="persistent"][type="checkbox"]');
                    if (persistentCheckbox && !persistentCheckbox.checked) {
                        persistentCheckbox.click();
                    }
                } catch (e) {
                    // The checkbox only exists pre-login.
                }
            })();
            "#,
        ),
    },
    ProviderType {
        id: "GoogleMessages",
        display_name: "Google Messages",
        entry_url: "https://messages.google.com/web/conversations",
        icon: "google-messages-icon.png",
        user_agent: None,
        unread_probe: None,
        on_load_script: None,
    },
    ProviderType {
        id: "WhatsApp",
        display_name: "WhatsApp",
        entry_url: "https://web.whatsapp.com",
        icon: "whatsapp-icon.png",
        // WhatsApp Web refuses unrecognized embedded browsers.
        user_agent: Some(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
        ),
        unread_probe: None,
        on_load_script: None,
    },
];

/// Look up a provider type by its stable id.
pub fn get(id: &str) -> Option<&'static ProviderType> {
    PROVIDER_TYPES.iter().find(|t| t.id == id)
}

/// All provider types, for the transport's `list_provider_types`.
pub fn all() -> &'static [ProviderType] {
    PROVIDER_TYPES
}

// =============================================================================
// TESTS
// =============================================================================
