use leptos::prelude::*;

/// Label/value row inside a detail modal.
#[component]
pub fn DetailField(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__label">{label}</span>
            <span class="detail-field__value">{value}</span>
        </div>
    }
}
