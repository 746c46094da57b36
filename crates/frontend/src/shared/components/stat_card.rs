use crate::shared::icons::icon;
use leptos::prelude::*;

/// Clickable dashboard tile.
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    icon_name: &'static str,
    #[prop(into)]
    value: String,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="stat-card stat-card--clickable" on:click=move |_| on_click.run(())>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}
