use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::types::ChatRequest;

/// Local reply when the page explicitly cleared the endpoint global.
pub const NOT_CONFIGURED_REPLY: &str = "API not configured. Set window.ASSISTIQ_API_ENDPOINT.";

/// Reply when the request could not complete at all.
pub const NETWORK_ERROR_REPLY: &str = "Network error. Please try again later.";

/// Placeholder when a success response carries no usable answer field.
pub const FALLBACK_ANSWER: &str = "…";

const EMPTY_ERROR_BODY_HINT: &str = "Please try later.";

/// Runs one send exchange and collapses every outcome into the bot reply
/// text. Success, server error and network failure are mutually exclusive;
/// there are no retries.
pub async fn send_chat_message(endpoint: &str, request: &ChatRequest) -> String {
    match post_chat(endpoint, request).await {
        Ok(reply) => reply,
        Err(err) => {
            web_sys::console::log_1(&format!("Chat request failed: {:?}", err).into());
            NETWORK_ERROR_REPLY.to_string()
        }
    }
}

async fn post_chat(endpoint: &str, request: &ChatRequest) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or("window not available")?;
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let req = web_sys::Request::new_with_str_and_init(endpoint, &opts)?;
    req.headers().set("Content-Type", "application/json")?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
    let resp: web_sys::Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let body_text = response_text(&resp).await.unwrap_or_default();
        return Ok(server_error_reply(resp.status(), &body_text));
    }

    // A malformed success body reads as an empty object and surfaces the
    // placeholder answer.
    let body = response_json(&resp)
        .await
        .unwrap_or_else(|_| Value::Object(Default::default()));
    Ok(extract_answer(&body))
}

async fn response_text(resp: &web_sys::Response) -> Result<String, JsValue> {
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

async fn response_json(resp: &web_sys::Response) -> Result<Value, JsValue> {
    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Bot reply for a non-success HTTP status.
pub fn server_error_reply(status: u16, body: &str) -> String {
    let detail = if body.is_empty() {
        EMPTY_ERROR_BODY_HINT
    } else {
        body
    };
    format!("Server error ({}). {}", status, detail)
}

/// Pulls the answer out of a success body: a non-empty `answer` field, then a
/// non-empty `message` field, then the placeholder. Non-string fields are
/// treated as absent rather than stringified.
pub fn extract_answer(body: &Value) -> String {
    body.get("answer")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            body.get("message")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or(FALLBACK_ANSWER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_error_reply_includes_status_and_body() {
        assert_eq!(
            server_error_reply(500, "internal error"),
            "Server error (500). internal error"
        );
    }

    #[test]
    fn test_server_error_reply_with_empty_body_uses_hint() {
        assert_eq!(server_error_reply(503, ""), "Server error (503). Please try later.");
    }

    #[test]
    fn test_network_failure_reply_is_the_fixed_message() {
        assert_eq!(NETWORK_ERROR_REPLY, "Network error. Please try again later.");
    }

    #[test]
    fn test_extract_answer_prefers_answer_field() {
        let body = json!({"answer": "Try restarting your VPN client.", "message": "ignored"});
        assert_eq!(extract_answer(&body), "Try restarting your VPN client.");
    }

    #[test]
    fn test_extract_answer_falls_back_to_message() {
        let body = json!({"message": "Hello from the bot"});
        assert_eq!(extract_answer(&body), "Hello from the bot");
    }

    #[test]
    fn test_empty_answer_falls_through_to_message() {
        let body = json!({"answer": "", "message": "still here"});
        assert_eq!(extract_answer(&body), "still here");
    }

    #[test]
    fn test_missing_fields_yield_placeholder() {
        assert_eq!(extract_answer(&json!({})), FALLBACK_ANSWER);
        assert_eq!(extract_answer(&json!({"answer": null})), FALLBACK_ANSWER);
        assert_eq!(extract_answer(&json!({"answer": 42})), FALLBACK_ANSWER);
        assert_eq!(extract_answer(&json!("not an object")), FALLBACK_ANSWER);
    }
}
