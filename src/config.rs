//! Host Page Configuration
//!
//! Reads the optional `<script id="workshop-config" type="application/json">`
//! element from the document.

use workshop_state::{ConfigError, WorkshopConfig};

/// Id of the script element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "workshop-config";

/// Read the configuration embedded in the page.
///
/// `Ok(None)` means the page carries no configuration and defaults apply.
pub fn read_config() -> Result<Option<WorkshopConfig>, ConfigError> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => WorkshopConfig::from_json(&raw).map(Some),
        _ => Ok(None),
    }
}
