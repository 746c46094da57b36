use contracts::domain::a006_sme_profile::SmeProfile;
use contracts::domain::common::status_label;
use contracts::shared::data_view::placeholder;
use leptos::prelude::*;

use crate::shared::components::detail_field::DetailField;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::modal::Modal;

#[component]
pub fn SmeProfileDetails(profile: SmeProfile, on_close: Callback<()>) -> impl IntoView {
    let title = format!("SME: {}", profile.display_name());
    view! {
        <Modal title=title on_close=on_close>
            <div class="detail-grid">
                <DetailField label="Business" value=placeholder(profile.business_name.as_deref()) />
                <DetailField label="Owner" value=placeholder(profile.owner_name.as_deref()) />
                <DetailField label="Email" value=placeholder(profile.email.as_deref()) />
                <DetailField label="Mobile" value=placeholder(profile.mobile.as_deref()) />
                <DetailField label="Category" value=placeholder(profile.category.as_deref()) />
                <DetailField label="GST" value=placeholder(profile.gst_number.as_deref()) />
                <DetailField label="Status" value=status_label(profile.status_or_pending()) />
                <DetailField label="Address" value=profile.address_text() />
                <DetailField label="Registered" value=format_optional_datetime(profile.created_at.as_deref()) />
            </div>
        </Modal>
    }
}
