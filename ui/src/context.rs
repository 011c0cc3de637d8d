//! Shared reactive state provided once by each platform's root component.

use dioxus::prelude::*;

use crate::core::{storage, CampaignSession};

/// Restore the campaign session from the platform store and expose it to
/// every view below the caller. Call from the root `App` only.
pub fn use_session_provider() -> Signal<CampaignSession> {
    let session = use_signal(|| CampaignSession::restore(storage::default_store()));
    use_context_provider(|| session)
}

/// The session installed by [`use_session_provider`].
pub fn use_session() -> Signal<CampaignSession> {
    use_context::<Signal<CampaignSession>>()
}

/// Global language code signal (provided by the platform root).
pub fn use_language_provider() -> Signal<String> {
    let lang_code = use_signal(crate::i18n::current_language);
    use_context_provider(|| lang_code)
}
