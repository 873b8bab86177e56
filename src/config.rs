use wasm_bindgen::JsValue;

/// Deployment default (replace for your deployment).
pub const DEFAULT_ENDPOINT: &str = "https://oz5ieiw1zb.execute-api.us-east-1.amazonaws.com/chat";

/// Window global the hosting page may set to point the widget elsewhere.
pub const ENDPOINT_GLOBAL: &str = "ASSISTIQ_API_ENDPOINT";

/// Reads the chat endpoint from `window.ASSISTIQ_API_ENDPOINT`. An absent
/// global falls back to the compiled default; a blank value means the page
/// explicitly opted out and sends are answered locally.
pub fn resolve_endpoint() -> Option<String> {
    let configured = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(ENDPOINT_GLOBAL)).ok())
        .and_then(|v| v.as_string());
    endpoint_or_default(configured)
}

pub fn endpoint_or_default(configured: Option<String>) -> Option<String> {
    match configured {
        Some(url) if !url.trim().is_empty() => Some(url),
        Some(_) => None,
        None => Some(DEFAULT_ENDPOINT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_global_falls_back_to_default() {
        assert_eq!(endpoint_or_default(None), Some(DEFAULT_ENDPOINT.to_string()));
    }

    #[test]
    fn test_configured_url_wins() {
        assert_eq!(
            endpoint_or_default(Some("https://example.test/chat".to_string())),
            Some("https://example.test/chat".to_string())
        );
    }

    #[test]
    fn test_blank_value_means_unconfigured() {
        assert_eq!(endpoint_or_default(Some(String::new())), None);
        assert_eq!(endpoint_or_default(Some("   ".to_string())), None);
    }
}
