//! Table cell for rupee amounts.
//!
//! ```rust,ignore
//! <TableCellMoney value=order.total_amount />
//! <TableCellMoney value=order.total_amount bold=true />
//! ```

use contracts::dashboards::d400_overview::format_inr;
use contracts::shared::data_view::PLACEHOLDER;
use leptos::prelude::*;
use thaw::*;

/// `₹1,234.50`, or `N/A` when the amount is missing.
pub fn money_text(value: Option<f64>) -> String {
    value.map(format_inr).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Right-aligned, tabular figures, `N/A` when the amount is missing.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || money_text(value.get());

    let cell_style = if bold {
        "text-align: right; font-variant-numeric: tabular-nums; font-weight: 600;"
    } else {
        "text-align: right; font-variant-numeric: tabular-nums;"
    };

    view! {
        <TableCell>
            <TableCellLayout>
                <span style=cell_style>{formatted_text}</span>
            </TableCellLayout>
        </TableCell>
    }
}
