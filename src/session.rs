use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// The last successful query/response pair, kept so the detail view can
/// render without re-querying the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuerySnapshot {
    pub query: String,
    pub response: String,
    pub pdf_id: String,
    pub filename: Option<String>,
}

/// A destructive action staged for confirmation. It only executes when the
/// caller presents the token handed out at staging time.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Upload { path: PathBuf, filename: String },
    Delete { pdf_id: String },
}

/// Tab-session-scoped state shared across the UI. Holds the active document
/// id, the last query snapshot and the pending-confirmation slot; nothing
/// here survives process exit.
#[derive(Default)]
pub struct SessionState {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    active_document: Option<String>,
    last_query: Option<QuerySnapshot>,
    pending: Option<(String, PendingAction)>,
}

impl SessionState {
    pub fn active_document(&self) -> Option<String> {
        self.inner.lock().unwrap().active_document.clone()
    }

    pub fn set_active_document(&self, id: &str) {
        self.inner.lock().unwrap().active_document = Some(id.to_string());
    }

    pub fn last_query(&self) -> Option<QuerySnapshot> {
        self.inner.lock().unwrap().last_query.clone()
    }

    pub fn set_last_query(&self, snapshot: QuerySnapshot) {
        self.inner.lock().unwrap().last_query = Some(snapshot);
    }

    /// Drop both session keys. Used when the active document is deleted;
    /// the next query submission then fails the missing-document guard
    /// instead of reusing a stale id.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.active_document = None;
        inner.last_query = None;
    }

    /// Stage an action and return its confirmation token. Replaces any
    /// previously staged action.
    pub fn stage(&self, action: PendingAction) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.inner.lock().unwrap().pending = Some((token.clone(), action));
        token
    }

    /// Consume the pending action if `token` matches. A mismatched token
    /// leaves the staged action in place and returns `None`.
    pub fn take_pending(&self, token: &str) -> Option<PendingAction> {
        let mut inner = self.inner.lock().unwrap();
        let matches = inner
            .pending
            .as_ref()
            .is_some_and(|(staged, _)| staged == token);
        if matches {
            inner.pending.take().map(|(_, action)| action)
        } else {
            None
        }
    }

    pub fn cancel_pending(&self) {
        self.inner.lock().unwrap().pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_document_roundtrip() {
        let session = SessionState::default();
        assert_eq!(session.active_document(), None);
        session.set_active_document("abc123");
        assert_eq!(session.active_document(), Some("abc123".to_string()));
    }

    #[test]
    fn test_clear_drops_both_keys() {
        let session = SessionState::default();
        session.set_active_document("abc123");
        session.set_last_query(QuerySnapshot {
            query: "What is the total revenue?".into(),
            response: "$4.2M".into(),
            pdf_id: "abc123".into(),
            filename: None,
        });
        session.clear();
        assert_eq!(session.active_document(), None);
        assert_eq!(session.last_query(), None);
    }

    #[test]
    fn test_snapshot_matches_submission() {
        let session = SessionState::default();
        let snapshot = QuerySnapshot {
            query: "What is the total revenue?".into(),
            response: "$4.2M".into(),
            pdf_id: "abc123".into(),
            filename: None,
        };
        session.set_last_query(snapshot.clone());
        assert_eq!(session.last_query(), Some(snapshot));
    }

    #[test]
    fn test_pending_requires_matching_token() {
        let session = SessionState::default();
        let token = session.stage(PendingAction::Delete {
            pdf_id: "abc123".into(),
        });

        assert_eq!(session.take_pending("wrong-token"), None);
        // Still staged after the refused attempt.
        assert_eq!(
            session.take_pending(&token),
            Some(PendingAction::Delete {
                pdf_id: "abc123".into()
            })
        );
        // Consumed: the same token no longer works.
        assert_eq!(session.take_pending(&token), None);
    }

    #[test]
    fn test_cancel_pending() {
        let session = SessionState::default();
        let token = session.stage(PendingAction::Delete {
            pdf_id: "abc123".into(),
        });
        session.cancel_pending();
        assert_eq!(session.take_pending(&token), None);
    }

    #[test]
    fn test_staging_replaces_previous_action() {
        let session = SessionState::default();
        let first = session.stage(PendingAction::Delete {
            pdf_id: "one".into(),
        });
        let second = session.stage(PendingAction::Delete {
            pdf_id: "two".into(),
        });
        assert_eq!(session.take_pending(&first), None);
        assert!(session.take_pending(&second).is_some());
    }
}
