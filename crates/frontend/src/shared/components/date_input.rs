use chrono::NaiveDate;
use leptos::prelude::*;

/// Native date picker bound to an optional `NaiveDate`.
/// An empty or invalid value reports `None`.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    on_change: impl Fn(Option<NaiveDate>) + 'static,
    #[prop(optional)]
    title: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            title=title
            prop:value=move || value.get().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                on_change(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok());
            }
        />
    }
}
