use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::host::HostApi;

/// Reads a bundled SVG and wraps it in a data URI for command autocomplete.
///
/// Returns the empty string when the asset cannot be read; a missing icon
/// must never block command registration.
pub fn autocomplete_icon_data(api: &dyn HostApi, icon_name: &str) -> String {
    let bundle_path = match api.bundle_path() {
        Ok(path) => path,
        Err(e) => {
            log::error!("Couldn't get bundle path: {}", e);
            return String::new();
        }
    };

    let icon = match std::fs::read(bundle_path.join("assets").join(icon_name)) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to open icon {}: {}", icon_name, e);
            return String::new();
        }
    };

    format!("data:image/svg+xml;base64,{}", STANDARD.encode(icon))
}
