use crate::session::{SessionStore, StoreKey};
use crate::types::TranscriptEntry;

/// Loads the persisted transcript. Missing or malformed payloads read as an
/// empty transcript; loading never writes back.
pub fn load_history(store: &impl SessionStore) -> Vec<TranscriptEntry> {
    store
        .get(StoreKey::ChatHistory)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Appends one entry to the persisted transcript, preserving order. A
/// serialization failure leaves the stored transcript untouched.
pub fn persist_entry(store: &impl SessionStore, entry: &TranscriptEntry) {
    let mut history = load_history(store);
    history.push(entry.clone());
    if let Ok(raw) = serde_json::to_string(&history) {
        store.set(StoreKey::ChatHistory, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    #[test]
    fn test_empty_store_loads_empty_history() {
        let store = MemoryStore::new();
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn test_persist_then_load_preserves_order() {
        let store = MemoryStore::new();
        persist_entry(&store, &TranscriptEntry::user("reset my password"));
        persist_entry(&store, &TranscriptEntry::bot("Have you tried the portal?"));
        persist_entry(&store, &TranscriptEntry::user("yes"));

        let history = load_history(&store);
        assert_eq!(
            history,
            vec![
                TranscriptEntry::user("reset my password"),
                TranscriptEntry::bot("Have you tried the portal?"),
                TranscriptEntry::user("yes"),
            ]
        );
    }

    #[test]
    fn test_malformed_history_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(StoreKey::ChatHistory, "{not json");
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn test_load_does_not_write_back() {
        let store = MemoryStore::new();
        assert!(load_history(&store).is_empty());
        assert_eq!(store.get(StoreKey::ChatHistory), None);
    }

    #[test]
    fn test_append_recovers_after_corruption() {
        let store = MemoryStore::new();
        store.set(StoreKey::ChatHistory, "[[[");
        persist_entry(&store, &TranscriptEntry::user("hello"));
        assert_eq!(load_history(&store), vec![TranscriptEntry::user("hello")]);
    }
}
