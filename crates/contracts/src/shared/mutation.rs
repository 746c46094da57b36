//! State machines behind create/edit modals, delete confirmation and
//! duplicate-submit protection.
//!
//! ```text
//! Closed ─open_*─▶ Open ─begin_submit─▶ Submitting ─settle(Ok)──────▶ Closed (+refetch)
//!                   ▲  │                     │
//!                   │  └─close──▶ Closed      ├─settle(auth error)──▶ Closed (+logout)
//!                   └─────────────────────────┴─settle(other error)─▶ Open + error
//! ```

use std::collections::HashSet;

use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
}

/// A modal holding a pending draft `D`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState<D> {
    #[default]
    Closed,
    Open {
        mode: ModalMode,
        draft: D,
        error: Option<String>,
    },
    Submitting {
        mode: ModalMode,
        draft: D,
    },
}

/// What the owning page must do once a submit settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Saved: reload the collection.
    Refetch,
    /// Token rejected: log out, nothing is refetched.
    Logout,
    /// Server rejected the draft: keep the modal open with the message.
    StayOpen,
    /// No submit was in flight.
    Ignored,
}

impl<D: Clone> ModalState<D> {
    pub fn open_create(draft: D) -> Self {
        ModalState::Open {
            mode: ModalMode::Create,
            draft,
            error: None,
        }
    }

    pub fn open_edit(draft: D) -> Self {
        ModalState::Open {
            mode: ModalMode::Edit,
            draft,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalState::Submitting { .. })
    }

    pub fn mode(&self) -> Option<ModalMode> {
        match self {
            ModalState::Closed => None,
            ModalState::Open { mode, .. } | ModalState::Submitting { mode, .. } => Some(*mode),
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            ModalState::Closed => None,
            ModalState::Open { draft, .. } | ModalState::Submitting { draft, .. } => Some(draft),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ModalState::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Edit the draft. Ignored unless the modal is open and idle.
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut D)) {
        if let ModalState::Open { draft, .. } = self {
            f(draft);
        }
    }

    /// Close and discard the draft. Not allowed while submitting.
    pub fn close(&mut self) -> bool {
        match self {
            ModalState::Submitting { .. } => false,
            _ => {
                *self = ModalState::Closed;
                true
            }
        }
    }

    /// Run client-side validation and enter `Submitting`.
    ///
    /// Returns the draft to send, or `None` when validation failed (the
    /// message is stored on the modal) or the modal was not open.
    pub fn begin_submit<F>(&mut self, validate: F) -> Option<D>
    where
        F: FnOnce(&D) -> Result<(), String>,
    {
        let ModalState::Open { mode, draft, error } = self else {
            return None;
        };
        if let Err(message) = validate(draft) {
            *error = Some(message);
            return None;
        }
        let submitted = draft.clone();
        *self = ModalState::Submitting {
            mode: *mode,
            draft: submitted.clone(),
        };
        Some(submitted)
    }

    pub fn settle(&mut self, result: Result<(), ApiError>) -> AfterSubmit {
        let ModalState::Submitting { mode, draft } = self else {
            return AfterSubmit::Ignored;
        };
        match result {
            Ok(()) => {
                *self = ModalState::Closed;
                AfterSubmit::Refetch
            }
            Err(e) if e.is_auth() => {
                *self = ModalState::Closed;
                AfterSubmit::Logout
            }
            Err(e) => {
                *self = ModalState::Open {
                    mode: *mode,
                    draft: draft.clone(),
                    error: Some(e.user_message()),
                };
                AfterSubmit::StayOpen
            }
        }
    }
}

/// Two-step confirmation before a destructive call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Idle,
    Pending {
        id: String,
        label: String,
    },
}

impl ConfirmState {
    pub fn request(id: impl Into<String>, label: impl Into<String>) -> Self {
        ConfirmState::Pending {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ConfirmState::Pending { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ConfirmState::Pending { label, .. } => Some(label),
            ConfirmState::Idle => None,
        }
    }

    /// Confirmed: back to `Idle`, returning the id to act on.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            ConfirmState::Pending { id, .. } => Some(id),
            ConfirmState::Idle => None,
        }
    }

    /// Cancelled: back to `Idle`, nothing to do.
    pub fn cancel(&mut self) {
        *self = ConfirmState::Idle;
    }
}

/// Record ids with a mutation in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight(HashSet<String>);

impl InFlight {
    /// `false` when a mutation for this id has not settled yet.
    pub fn try_begin(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Draft {
        name: String,
    }

    fn required(d: &Draft) -> Result<(), String> {
        if d.name.trim().is_empty() {
            Err("Name is required".into())
        } else {
            Ok(())
        }
    }

    fn submitting(name: &str) -> ModalState<Draft> {
        let mut modal = ModalState::open_edit(Draft { name: name.into() });
        assert!(modal.begin_submit(required).is_some());
        modal
    }

    #[test]
    fn test_close_discards_draft() {
        let mut modal = ModalState::open_edit(Draft { name: "Asha".into() });
        modal.edit_draft(|d| d.name = "Asha K".into());
        assert!(modal.close());
        assert_eq!(modal, ModalState::Closed);
        assert_eq!(modal.draft(), None);
    }

    #[test]
    fn test_validation_blocks_submit() {
        let mut modal = ModalState::open_create(Draft::default());
        assert_eq!(modal.begin_submit(required), None);
        assert_eq!(modal.error(), Some("Name is required"));
        assert!(!modal.is_submitting());
    }

    #[test]
    fn test_success_closes_and_refetches() {
        let mut modal = submitting("Asha");
        assert!(modal.is_submitting());
        assert!(!modal.close());
        assert_eq!(modal.settle(Ok(())), AfterSubmit::Refetch);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_unauthorized_logs_out_without_refetch() {
        let mut modal = submitting("Asha");
        let after = modal.settle(Err(ApiError::from_status(401, "")));
        assert_eq!(after, AfterSubmit::Logout);
        assert_eq!(modal, ModalState::Closed);
        assert_eq!(modal.draft(), None);
    }

    #[test]
    fn test_server_error_keeps_modal_open() {
        let mut modal = submitting("Asha");
        let after = modal.settle(Err(ApiError::from_status(
            409,
            r#"{"message":"Email already in use"}"#,
        )));
        assert_eq!(after, AfterSubmit::StayOpen);
        assert_eq!(modal.error(), Some("Email already in use"));
        assert_eq!(modal.draft().map(|d| d.name.as_str()), Some("Asha"));
        assert_eq!(modal.mode(), Some(ModalMode::Edit));

        let mut modal = submitting("Asha");
        modal.settle(Err(ApiError::from_status(500, "")));
        assert_eq!(modal.error(), Some("Request failed with status 500"));
    }

    #[test]
    fn test_settle_without_submit_is_ignored() {
        let mut modal: ModalState<Draft> = ModalState::Closed;
        assert_eq!(modal.settle(Ok(())), AfterSubmit::Ignored);
    }

    #[test]
    fn test_confirm_flow() {
        let mut confirm = ConfirmState::request("promo-1", "DIWALI50");
        assert!(confirm.is_pending());
        assert_eq!(confirm.label(), Some("DIWALI50"));
        assert_eq!(confirm.confirm(), Some("promo-1".to_string()));
        assert_eq!(confirm, ConfirmState::Idle);
        assert_eq!(confirm.confirm(), None);

        let mut confirm = ConfirmState::request("promo-2", "HOLI10");
        confirm.cancel();
        assert_eq!(confirm, ConfirmState::Idle);
        assert_eq!(confirm.confirm(), None);
    }

    #[test]
    fn test_in_flight_rejects_reentrant_calls() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.try_begin("order-1"));
        assert!(!in_flight.try_begin("order-1"));
        assert!(in_flight.try_begin("order-2"));
        in_flight.finish("order-1");
        assert!(in_flight.try_begin("order-1"));
    }
}
