use contracts::domain::a005_promo_code::PromoCodeForm;
use contracts::domain::common::status_label;
use contracts::shared::mutation::{ModalMode, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_promo_code::api;
use crate::shared::modal::Modal;
use crate::shared::mutation_flow::submit_modal;
use crate::system::auth::context::use_session;

/// Create/edit modal. The draft is copied into local signals and written
/// back on save, so a failed submit keeps what was typed.
#[component]
pub fn PromoCodeEditForm(
    modal: RwSignal<ModalState<PromoCodeForm>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let draft = modal.with_untracked(|m| m.draft().cloned()).unwrap_or_default();
    let is_create = modal.with_untracked(|m| m.mode()) == Some(ModalMode::Create);

    let discount_types = draft.discount_type_options();
    let code = RwSignal::new(draft.code);
    let description = RwSignal::new(draft.description);
    let discount_type = RwSignal::new(draft.discount_type);
    let discount_value = RwSignal::new(draft.discount_value);
    let min_order_amount = RwSignal::new(draft.min_order_amount);
    let max_discount = RwSignal::new(draft.max_discount);
    let valid_from = RwSignal::new(draft.valid_from);
    let valid_to = RwSignal::new(draft.valid_to);
    let usage_limit = RwSignal::new(draft.usage_limit);
    let is_active = RwSignal::new(draft.is_active);

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
                d.code = code.get_untracked();
                d.description = description.get_untracked();
                d.discount_type = discount_type.get_untracked();
                d.discount_value = discount_value.get_untracked();
                d.min_order_amount = min_order_amount.get_untracked();
                d.max_discount = max_discount.get_untracked();
                d.valid_from = valid_from.get_untracked();
                d.valid_to = valid_to.get_untracked();
                d.usage_limit = usage_limit.get_untracked();
                d.is_active = is_active.get_untracked();
            })
        });
        submit_modal(
            session,
            modal,
            PromoCodeForm::validate,
            api::save_promo_code,
            move || on_saved.run(()),
        );
    };

    let title = if is_create { "New promo code" } else { "Edit promo code" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <div class="form__group">
                    <Label>"Code"</Label>
                    <Input value=code disabled=saving placeholder="KHARIF25" />
                </div>
                <div class="form__group">
                    <Label>"Discount type"</Label>
                    <Select value=discount_type disabled=saving>
                        {discount_types
                            .into_iter()
                            .map(|t| {
                                let label = status_label(&t);
                                view! { <option value=t>{label}</option> }
                            })
                            .collect_view()}
                    </Select>
                </div>
            </div>
            <div class="form__group">
                <Label>"Description"</Label>
                <Input value=description disabled=saving />
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Discount"</Label>
                    <Input value=discount_value disabled=saving />
                </div>
                <div class="form__group">
                    <Label>"Min order"</Label>
                    <Input value=min_order_amount disabled=saving />
                </div>
                <div class="form__group">
                    <Label>"Max discount"</Label>
                    <Input value=max_discount disabled=saving />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Valid from"</Label>
                    <Input value=valid_from input_type=InputType::Date disabled=saving />
                </div>
                <div class="form__group">
                    <Label>"Valid to"</Label>
                    <Input value=valid_to input_type=InputType::Date disabled=saving />
                </div>
                <div class="form__group">
                    <Label>"Usage limit"</Label>
                    <Input value=usage_limit disabled=saving placeholder="Unlimited" />
                </div>
            </div>
            <Checkbox checked=is_active label="Active" />

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
