use std::cell::RefCell;
use std::collections::HashMap;

/// Typed key set for everything the widget keeps in session storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreKey {
    SessionId,
    ChatHistory,
}

impl StoreKey {
    pub const ALL: [StoreKey; 2] = [StoreKey::SessionId, StoreKey::ChatHistory];

    pub fn name(self) -> &'static str {
        match self {
            StoreKey::SessionId => "assistiq_sessionId",
            StoreKey::ChatHistory => "assistiq_chat_history",
        }
    }
}

/// Tab-session-scoped key/value store. Writes are best effort: quota or
/// availability failures are swallowed and the widget keeps working without
/// persistence.
pub trait SessionStore {
    fn get(&self, key: StoreKey) -> Option<String>;
    fn set(&self, key: StoreKey, value: &str);
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: StoreKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: StoreKey, value: &str) {
        (**self).set(key, value)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// `sessionStorage`-backed store. If storage is unavailable (disabled,
/// sandboxed iframe) every operation degrades to a no-op.
pub struct BrowserSessionStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserSessionStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::log_1(&"sessionStorage unavailable; chat history will not persist".into());
        }
        BrowserSessionStore { storage }
    }
}

impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        self.storage.as_ref()?.get_item(key.name()).ok().flatten()
    }

    fn set(&self, key: StoreKey, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key.name(), value);
        }
    }

    fn clear(&self) {
        if let Some(storage) = &self.storage {
            for key in StoreKey::ALL {
                let _ = storage.remove_item(key.name());
            }
        }
    }
}

/// In-memory fake with the same contract, for driving the controller and
/// transcript logic in tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<StoreKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        self.values.borrow().get(&key).cloned()
    }

    fn set(&self, key: StoreKey, value: &str) {
        self.values.borrow_mut().insert(key, value.to_string());
    }

    fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

/// Returns the tab's session identifier, generating and persisting one on
/// first use. The identifier is never mutated afterwards.
pub fn session_id(store: &impl SessionStore) -> String {
    if let Some(id) = store.get(StoreKey::SessionId) {
        return id;
    }
    let id = generate_session_id();
    store.set(StoreKey::SessionId, &id);
    id
}

fn generate_session_id() -> String {
    match web_sys::window().and_then(|w| w.crypto().ok()) {
        Some(crypto) => crypto.random_uuid(),
        None => fallback_session_id(js_sys::Math::random()),
    }
}

// Mirrors `"sess-" + Math.random().toString(36).substr(2, 9)`: nine base-36
// digits of the fractional seed.
fn fallback_session_id(seed: f64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut frac = seed.abs().fract();
    let mut id = String::from("sess-");
    for _ in 0..9 {
        frac *= 36.0;
        let digit = (frac as usize).min(35);
        id.push(DIGITS[digit] as char);
        frac = frac.fract();
    }
    id
}
