pub mod tab_strip;

use leptos::prelude::*;
use tab_strip::TabStrip;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs">
            <TabStrip />
            <div class="app-tabs__content">
                {children()}
            </div>
        </div>
    }
}
