//! Customer detail (read only) and edit modals.

use contracts::domain::a001_customer::{Customer, CustomerUpdateDto};
use contracts::domain::common::status_label;
use contracts::shared::data_view::placeholder;
use contracts::shared::mutation::ModalState;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_customer::api;
use crate::shared::components::detail_field::DetailField;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::modal::Modal;
use crate::shared::mutation_flow::submit_modal;
use crate::system::auth::context::use_session;

#[component]
pub fn CustomerDetails(customer: Customer, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Customer: {}", customer.display_name());
    view! {
        <Modal title=title on_close=on_close>
            <div class="detail-grid">
                <DetailField label="Name" value=customer.display_name() />
                <DetailField label="Email" value=placeholder(customer.email.as_deref()) />
                <DetailField label="Mobile" value=placeholder(customer.mobile.as_deref()) />
                <DetailField label="Gender" value=placeholder(customer.gender.as_deref()) />
                <DetailField label="Occupation" value=placeholder(customer.occupation.as_deref()) />
                <DetailField label="Company" value=placeholder(customer.company.as_deref()) />
                <DetailField label="Status" value=status_label(customer.status.as_deref().unwrap_or_default()) />
                <DetailField label="Address" value=customer.address_text() />
                <DetailField
                    label="Orders"
                    value=customer.total_orders.map(|n| n.to_string()).unwrap_or_else(|| placeholder(None))
                />
                <DetailField label="Joined" value=format_optional_datetime(customer.created_at.as_deref()) />
            </div>
        </Modal>
    }
}

/// Edit form bound to the page's modal state. `on_saved` runs after a
/// successful PUT.
#[component]
pub fn CustomerEditForm(
    modal: RwSignal<ModalState<CustomerUpdateDto>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let draft = modal.with_untracked(|m| m.draft().cloned()).unwrap_or_default();

    let status_options = draft.status_options();
    let name = RwSignal::new(draft.name);
    let email = RwSignal::new(draft.email);
    let mobile = RwSignal::new(draft.mobile);
    let status = RwSignal::new(draft.status);

    let saving = Signal::derive(move || modal.with(|m| m.is_submitting()));
    let error = Signal::derive(move || modal.with(|m| m.error().map(str::to_string)));

    let on_close = Callback::new(move |_| {
        modal.update(|m| {
            m.close();
        });
    });

    let on_save = move |_| {
        modal.update(|m| {
            m.edit_draft(|d| {
                d.name = name.get_untracked().trim().to_string();
                d.email = email.get_untracked().trim().to_string();
                d.mobile = mobile.get_untracked().trim().to_string();
                d.status = status.get_untracked();
            })
        });
        submit_modal(
            session,
            modal,
            CustomerUpdateDto::validate,
            api::update_customer,
            move || on_saved.run(()),
        );
    };

    view! {
        <Modal title="Edit customer".to_string() on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=name disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=email input_type=InputType::Email disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Mobile"</Label>
                <Input value=mobile disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Status"</Label>
                <Select value=status disabled=saving>
                    {status_options
                        .into_iter()
                        .map(|s| {
                            let label = status_label(&s);
                            view! { <option value=s>{label}</option> }
                        })
                        .collect_view()}
                </Select>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=saving>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </Modal>
    }
}
