use contracts::dashboards::d400_overview::{format_inr, ChartSeries, DashboardStats};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;

fn icon_for_tab(tab: &str) -> &'static str {
    match tab {
        "a001_customer" => "users",
        "a002_order" => "shopping-cart",
        "a003_product" => "package",
        "a004_support_ticket" => "message-square",
        "a006_sme_profile" => "store",
        "a007_fpo_profile" => "building",
        _ => "bar-chart",
    }
}

fn format_count(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Overview tab: headline counters linking to their list pages and the
/// monthly orders/revenue chart.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let session = use_session();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let stats = RwSignal::new(Option::<DashboardStats>::None);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let series = RwSignal::new(ChartSeries::Orders);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_stats(session).await {
                Ok(data) => stats.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load dashboard stats: {}", e);
                    if !session.handle_error(&e) {
                        error.set(Some(e.user_message()));
                    }
                }
            }
            loading.set(false);
        });
    };
    load();

    let bars = Signal::derive(move || {
        let series = series.get();
        stats.with(|s| s.as_ref().map(|s| s.chart_bars(series)).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <div class="stat-grid">
                {move || {
                    stats
                        .get()
                        .map(|s| s.cards())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|card| {
                            let tab = card.tab;
                            view! {
                                <StatCard
                                    label=card.title
                                    icon_name=icon_for_tab(tab)
                                    value=card.value
                                    on_click=Callback::new(move |_| tabs_store.open_tab(tab))
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="chart-panel">
                <div class="chart-panel__header">
                    <h2 class="chart-panel__title">"Monthly trend"</h2>
                    <Flex gap=FlexGap::Small>
                        <Button
                            size=ButtonSize::Small
                            appearance=Signal::derive(move || {
                                if series.get() == ChartSeries::Orders {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            })
                            on_click=move |_| series.set(ChartSeries::Orders)
                        >
                            "Orders"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=Signal::derive(move || {
                                if series.get() == ChartSeries::Revenue {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            })
                            on_click=move |_| series.set(ChartSeries::Revenue)
                        >
                            "Revenue"
                        </Button>
                    </Flex>
                </div>
                {move || match series.get() {
                    ChartSeries::Orders => view! { <BarChart bars=bars format_value=format_count /> },
                    ChartSeries::Revenue => view! { <BarChart bars=bars format_value=format_inr /> },
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::tab_label_for_key;

    #[test]
    fn test_cards_open_known_tabs() {
        for card in DashboardStats::default().cards() {
            assert!(tab_label_for_key(card.tab).is_some(), "{}", card.title);
        }
        assert_eq!(icon_for_tab("a002_order"), "shopping-cart");
        assert_eq!(format_count(12.4), "12");
    }
}
