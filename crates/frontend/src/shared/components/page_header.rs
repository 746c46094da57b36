use leptos::prelude::*;
use thaw::*;

/// Title row of a list page: title, record count and action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Records after filtering
    #[prop(into)]
    count: Signal<usize>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {move || count.get().to_string()}
                </Badge>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
