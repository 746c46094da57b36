use contracts::domain::common::status_label;
use leptos::prelude::*;
use thaw::*;

fn color_for(status: &str) -> BadgeColor {
    match status.trim().to_lowercase().as_str() {
        "approved" | "active" | "delivered" | "paid" | "resolved" | "closed" => BadgeColor::Success,
        "rejected" | "cancelled" | "failed" | "suspended" | "blocked" | "inactive" => {
            BadgeColor::Danger
        }
        "pending" | "processing" | "open" | "in_progress" | "shipped" | "high" => {
            BadgeColor::Warning
        }
        _ => BadgeColor::Informative,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let color = color_for(&status);
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status_label(&status)}
        </Badge>
    }
}
