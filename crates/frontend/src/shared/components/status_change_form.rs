//! Status + remark modal shared by orders, tickets, product review and
//! the SME/FPO profile pages.

use std::future::Future;

use contracts::domain::common::{status_label, StatusChange, StatusUpdateDto};
use contracts::shared::api_error::ApiError;
use contracts::shared::mutation::ModalState;
use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;
use crate::shared::mutation_flow::submit_modal;
use crate::system::auth::context::use_session;
use crate::system::auth::session::Session;

#[component]
pub fn StatusChangeForm<S, Fut>(
    modal: RwSignal<ModalState<StatusChange>>,
    /// Statuses offered in the select, in display order.
    #[prop(into)]
    statuses: Vec<&'static str>,
    validate: fn(&StatusUpdateDto) -> Result<(), String>,
    send: S,
    on_saved: Callback<()>,
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional, into)]
    save_text: Option<String>,
) -> impl IntoView
where
    S: Fn(Session, StatusChange) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let session = use_session();
    let draft = modal.with_untracked(|m| m.draft().cloned()).unwrap_or_default();

    let status = RwSignal::new(draft.update.status.clone());
    let remark = RwSignal::new(draft.update.remark.clone().unwrap_or_default());

    let saving = Signal::derive(move || modal.with(|m| m.is_submitting()));
    let error = Signal::derive(move || modal.with(|m| m.error().map(str::to_string)));

    let heading = format!("{}: {}", title.unwrap_or_else(|| "Update status".into()), draft.label);
    let save_text = save_text.unwrap_or_else(|| "Save".into());

    let on_close = Callback::new(move |_| {
        modal.update(|m| {
            m.close();
        });
    });

    let on_save = move |_| {
        modal.update(|m| {
            m.edit_draft(|d| {
                d.update.status = status.get_untracked();
                d.set_remark(&remark.get_untracked());
            })
        });
        submit_modal(
            session,
            modal,
            move |change: &StatusChange| validate(&change.update),
            send,
            move || on_saved.run(()),
        );
    };

    view! {
        <Modal title=heading on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Status"</Label>
                <Select value=status disabled=saving>
                    <option value="">"Select status"</option>
                    {statuses
                        .into_iter()
                        .map(|s| view! { <option value=s>{status_label(s)}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form__group">
                <Label>"Remark"</Label>
                <Textarea value=remark disabled=saving placeholder="Optional unless rejecting" />
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=saving>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {move || if saving.get() { "Saving...".to_string() } else { save_text.clone() }}
                </Button>
            </div>
        </Modal>
    }
}
