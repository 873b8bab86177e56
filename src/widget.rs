use crate::api;
use crate::session::SessionStore;
use crate::transcript;
use crate::types::{ChatRequest, TranscriptEntry};

/// Widget lifecycle. Built lazily on the first open and never destroyed;
/// minimizing only flips `Open` back to `Closed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Unbuilt,
    Open,
    Closed,
}

impl WidgetState {
    pub fn is_built(self) -> bool {
        self != WidgetState::Unbuilt
    }

    pub fn is_open(self) -> bool {
        self == WidgetState::Open
    }
}

/// What the caller has to do after handing user input to `begin_send`.
#[derive(Clone, Debug, PartialEq)]
pub enum SendAction {
    /// Blank input; nothing happened.
    Ignored,
    /// A send is already in flight; input is kept out of the transcript.
    Busy,
    /// Answered locally (endpoint unconfigured); transcript already updated.
    Replied,
    /// Issue this request and report the reply via `finish_send`.
    Request {
        endpoint: String,
        request: ChatRequest,
    },
}

/// DOM-free core of the chat widget: lifecycle state, the visible transcript,
/// the persistence store and the single-flight send gate. The rendering layer
/// maps user events onto these methods.
pub struct ChatController<S: SessionStore> {
    store: S,
    endpoint: Option<String>,
    session_id: String,
    state: WidgetState,
    entries: Vec<TranscriptEntry>,
    pending: bool,
}

impl<S: SessionStore> ChatController<S> {
    pub fn new(store: S, endpoint: Option<String>, session_id: String) -> Self {
        ChatController {
            store,
            endpoint,
            session_id,
            state: WidgetState::Unbuilt,
            entries: Vec::new(),
            pending: false,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Opens the dialog, restoring the persisted transcript on the first
    /// build. Restoring does not re-persist. Idempotent while open.
    pub fn open(&mut self) {
        if self.state == WidgetState::Unbuilt {
            self.entries = transcript::load_history(&self.store);
        }
        self.state = WidgetState::Open;
    }

    /// Minimizes an open dialog; a no-op before the first build and
    /// idempotent while closed.
    pub fn minimize(&mut self) {
        if self.state.is_built() {
            self.state = WidgetState::Closed;
        }
    }

    /// FAB behavior: open ⇒ minimize, anything else ⇒ open. Returns true when
    /// the dialog opened, so the caller can schedule composer focus.
    pub fn toggle(&mut self) -> bool {
        if self.state.is_open() {
            self.minimize();
            false
        } else {
            self.open();
            true
        }
    }

    /// Takes raw composer input and either answers locally or hands back the
    /// request to issue. Appends and persists the user entry before any
    /// network work; at most one send is in flight at a time.
    pub fn begin_send(&mut self, raw: &str) -> SendAction {
        if self.pending {
            return SendAction::Busy;
        }
        let text = raw.trim();
        if text.is_empty() {
            return SendAction::Ignored;
        }

        self.push_entry(TranscriptEntry::user(text));

        match &self.endpoint {
            None => {
                self.push_entry(TranscriptEntry::bot(api::NOT_CONFIGURED_REPLY));
                SendAction::Replied
            }
            Some(endpoint) => {
                self.pending = true;
                SendAction::Request {
                    endpoint: endpoint.clone(),
                    request: ChatRequest {
                        text: text.to_string(),
                        session_id: self.session_id.clone(),
                    },
                }
            }
        }
    }

    /// Lands the reply of the in-flight exchange as a bot entry and reopens
    /// the send gate.
    pub fn finish_send(&mut self, reply: String) {
        self.pending = false;
        self.push_entry(TranscriptEntry::bot(reply));
    }

    fn push_entry(&mut self, entry: TranscriptEntry) {
        transcript::persist_entry(&self.store, &entry);
        self.entries.push(entry);
    }
}
