//! Glue between the pure modal/confirm/in-flight state machines and the
//! network: spawn the call, settle the state, then refetch or log out.

use std::future::Future;

use contracts::shared::api_error::ApiError;
use contracts::shared::mutation::{AfterSubmit, ConfirmState, InFlight, ModalState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::session::Session;

/// Validates the modal draft and, if it passes, sends it.
///
/// A validation failure stays in the modal and makes no network call. On
/// success `on_saved` runs (normally a full reload); an auth failure closes
/// the modal and signs out instead.
pub fn submit_modal<D, V, S, Fut, Done>(
    session: Session,
    modal: RwSignal<ModalState<D>>,
    validate: V,
    send: S,
    on_saved: Done,
) where
    D: Clone + Send + Sync + 'static,
    V: FnOnce(&D) -> Result<(), String>,
    S: FnOnce(Session, D) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    Done: FnOnce() + 'static,
{
    let Some(draft) = modal.try_update(|m| m.begin_submit(validate)).flatten() else {
        return;
    };

    spawn_local(async move {
        let result = send(session, draft).await;
        let after = modal
            .try_update(|m| m.settle(result))
            .unwrap_or(AfterSubmit::Ignored);
        match after {
            AfterSubmit::Refetch => on_saved(),
            AfterSubmit::Logout => session.expire(),
            AfterSubmit::StayOpen | AfterSubmit::Ignored => {}
        }
    });
}

/// Runs one mutation for `id` unless another is still running for it.
///
/// Auth failures sign out and skip `done`.
pub fn run_guarded<Fut, Done>(
    session: Session,
    in_flight: RwSignal<InFlight>,
    id: String,
    call: Fut,
    done: Done,
) where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    Done: FnOnce(Result<(), ApiError>) + 'static,
{
    let started = in_flight.try_update(|f| f.try_begin(&id)).unwrap_or(false);
    if !started {
        log::debug!("mutation for '{}' already in flight, ignoring", id);
        return;
    }

    spawn_local(async move {
        let result = call.await;
        in_flight.update(|f| f.finish(&id));
        if let Err(err) = &result {
            if session.handle_error(err) {
                return;
            }
        }
        done(result);
    });
}

/// Confirmation, then DELETE. Only a confirmed id is ever sent.
pub fn confirm_delete<S, Fut, Done>(
    session: Session,
    confirm: RwSignal<ConfirmState>,
    in_flight: RwSignal<InFlight>,
    delete: S,
    done: Done,
) where
    S: FnOnce(Session, String) -> Fut,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    Done: FnOnce(Result<(), ApiError>) + 'static,
{
    let Some(id) = confirm.try_update(|c| c.confirm()).flatten() else {
        return;
    };
    let call = delete(session, id.clone());
    run_guarded(session, in_flight, id, call, done);
}
