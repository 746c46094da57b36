use contracts::dashboards::d400_overview::ChartBar;
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 220.0;
const LABEL_SPACE: f64 = 24.0;
const GAP: f64 = 8.0;

/// Plain SVG column chart; bar heights arrive pre-scaled to `0.0..=1.0`.
#[component]
pub fn BarChart(
    #[prop(into)]
    bars: Signal<Vec<ChartBar>>,
    /// Renders the value shown in each bar's tooltip.
    format_value: fn(f64) -> String,
) -> impl IntoView {
    view! {
        <svg class="bar-chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none">
            {move || {
                let bars = bars.get();
                if bars.is_empty() {
                    return view! {
                        <text x=WIDTH / 2.0 y=HEIGHT / 2.0 text-anchor="middle" class="bar-chart__empty">
                            "No monthly data"
                        </text>
                    }
                    .into_any();
                }
                let slot = WIDTH / bars.len() as f64;
                let plot = HEIGHT - LABEL_SPACE;
                bars.into_iter()
                    .enumerate()
                    .map(|(i, bar)| {
                        let h = (bar.height * plot).max(1.0);
                        let x = i as f64 * slot + GAP / 2.0;
                        let tooltip = format!("{}: {}", bar.label, format_value(bar.value));
                        view! {
                            <g class="bar-chart__bar">
                                <rect x=x y=plot - h width=(slot - GAP).max(1.0) height=h rx="3">
                                    <title>{tooltip}</title>
                                </rect>
                                <text x=x + (slot - GAP) / 2.0 y=HEIGHT - 6.0 text-anchor="middle" class="bar-chart__label">
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </svg>
    }
}
