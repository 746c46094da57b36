//! Tab content registry: the single mapping from tab.key to its page view.

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_order::ui::list::OrderList;
use crate::domain::a003_product::ui::list::ProductReviewList;
use crate::domain::a004_support_ticket::ui::list::SupportTicketList;
use crate::domain::a005_promo_code::ui::list::PromoCodeList;
use crate::domain::a006_sme_profile::ui::list::SmeProfileList;
use crate::domain::a007_fpo_profile::ui::list::FpoProfileList;
use crate::domain::a008_banner::ui::list::BannerList;
use leptos::prelude::*;

/// Renders the page behind a tab key; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_order" => view! { <OrderList /> }.into_any(),
        "a003_product" => view! { <ProductReviewList /> }.into_any(),
        "a004_support_ticket" => view! { <SupportTicketList /> }.into_any(),
        "a005_promo_code" => view! { <PromoCodeList /> }.into_any(),
        "a006_sme_profile" => view! { <SmeProfileList /> }.into_any(),
        "a007_fpo_profile" => view! { <FpoProfileList /> }.into_any(),
        "a008_banner" => view! { <BannerList /> }.into_any(),

        _ => {
            log::warn!("no page registered for tab '{}'", key);
            let key = key.to_string();
            view! {
                <div class="placeholder">{format!("Unknown page: {}", key)}</div>
            }
            .into_any()
        }
    }
}
