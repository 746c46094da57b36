use contracts::domain::a007_fpo_profile::FpoProfile;
use contracts::domain::common::status_label;
use contracts::shared::data_view::placeholder;
use leptos::prelude::*;

use crate::shared::components::detail_field::DetailField;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::modal::Modal;

#[component]
pub fn FpoProfileDetails(profile: FpoProfile, on_close: Callback<()>) -> impl IntoView {
    let title = format!("FPO: {}", profile.display_name());
    let members = profile
        .member_count
        .map(|n| n.to_string())
        .unwrap_or_else(|| placeholder(None));

    view! {
        <Modal title=title on_close=on_close>
            <div class="detail-grid">
                <DetailField label="Name" value=profile.display_name() />
                <DetailField label="Contact person" value=placeholder(profile.contact_person.as_deref()) />
                <DetailField label="Email" value=placeholder(profile.email.as_deref()) />
                <DetailField label="Mobile" value=placeholder(profile.mobile.as_deref()) />
                <DetailField label="Registration no." value=placeholder(profile.registration_number.as_deref()) />
                <DetailField label="Members" value=members />
                <DetailField label="Status" value=status_label(profile.status_or_pending()) />
                <DetailField label="Address" value=profile.address_text() />
                <DetailField label="Registered" value=format_optional_datetime(profile.created_at.as_deref()) />
            </div>
        </Modal>
    }
}
