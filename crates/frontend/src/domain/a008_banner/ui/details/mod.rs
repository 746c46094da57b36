use contracts::domain::a008_banner::{BannerForm, BANNER_POSITIONS};
use contracts::domain::common::status_label;
use contracts::shared::mutation::{ModalMode, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_banner::api;
use crate::shared::modal::Modal;
use crate::shared::mutation_flow::submit_modal;
use crate::system::auth::context::use_session;

#[component]
pub fn BannerEditForm(modal: RwSignal<ModalState<BannerForm>>, on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let draft = modal.with_untracked(|m| m.draft().cloned()).unwrap_or_default();
    let is_create = modal.with_untracked(|m| m.mode()) == Some(ModalMode::Create);

    let title = RwSignal::new(draft.title);
    let image_url = RwSignal::new(draft.image_url);
    let link = RwSignal::new(draft.link);
    let position = RwSignal::new(draft.position);
    let sort_order = RwSignal::new(draft.sort_order);
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
                d.title = title.get_untracked();
                d.image_url = image_url.get_untracked();
                d.link = link.get_untracked();
                d.position = position.get_untracked();
                d.sort_order = sort_order.get_untracked();
                d.is_active = is_active.get_untracked();
            })
        });
        submit_modal(session, modal, BannerForm::validate, api::save_banner, move || on_saved.run(()));
    };

    let heading = if is_create { "New banner" } else { "Edit banner" };

    view! {
        <Modal title=heading.to_string() on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Title"</Label>
                <Input value=title disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Image URL"</Label>
                <Input value=image_url disabled=saving placeholder="https://" />
            </div>
            {move || {
                let src = image_url.get();
                (src.starts_with("http://") || src.starts_with("https://"))
                    .then(|| view! { <img class="banner-preview" src=src alt="Preview" /> })
            }}
            <div class="form__group">
                <Label>"Link"</Label>
                <Input value=link disabled=saving placeholder="/offers/monsoon" />
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Position"</Label>
                    <Select value=position disabled=saving>
                        {BANNER_POSITIONS
                            .iter()
                            .map(|p| view! { <option value=*p>{status_label(p)}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Display order"</Label>
                    <Input value=sort_order disabled=saving />
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
