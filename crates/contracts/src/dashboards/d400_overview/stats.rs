use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// Payload of `GET /admin/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, alias = "totalUsers", deserialize_with = "lenient::opt_i64")]
    pub total_customers: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_orders: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub pending_orders: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_products: Option<i64>,
    #[serde(default, alias = "pendingReviews", deserialize_with = "lenient::opt_i64")]
    pub pending_products: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub open_tickets: Option<i64>,
    #[serde(default, alias = "totalSme", deserialize_with = "lenient::opt_i64")]
    pub total_smes: Option<i64>,
    #[serde(default, alias = "totalFpo", deserialize_with = "lenient::opt_i64")]
    pub total_fpos: Option<i64>,
    #[serde(default, alias = "revenue", deserialize_with = "lenient::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(default, alias = "monthlyStats")]
    pub monthly: Vec<MonthlyPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// `"2024-05"` or a short label such as `"May"`
    #[serde(default, alias = "label", alias = "_id", deserialize_with = "lenient::opt_string")]
    pub month: Option<String>,
    #[serde(default, alias = "orderCount", alias = "count", deserialize_with = "lenient::opt_i64")]
    pub orders: Option<i64>,
    #[serde(default, alias = "total", deserialize_with = "lenient::opt_f64")]
    pub revenue: Option<f64>,
}

/// One stat card on the overview page.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// Tab key the card links to.
    pub tab: &'static str,
}

/// A scaled bar for the SVG chart; `height` is in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub height: f64,
}

/// Which series of the monthly data the chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartSeries {
    #[default]
    Orders,
    Revenue,
}

fn count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "0".into())
}

/// `1234567.5` → `"₹12,34,567.50"` (Indian digit grouping)
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.iter().enumerate() {
        grouped.push(*c);
        let remaining = len - i - 1;
        if remaining > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
    }

    format!("{}₹{}.{}", if negative { "-" } else { "" }, grouped, frac)
}

impl DashboardStats {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Customers",
                value: count(self.total_customers),
                tab: "a001_customer",
            },
            StatCard {
                title: "Orders",
                value: count(self.total_orders),
                tab: "a002_order",
            },
            StatCard {
                title: "Pending orders",
                value: count(self.pending_orders),
                tab: "a002_order",
            },
            StatCard {
                title: "Products awaiting review",
                value: count(self.pending_products),
                tab: "a003_product",
            },
            StatCard {
                title: "Open tickets",
                value: count(self.open_tickets),
                tab: "a004_support_ticket",
            },
            StatCard {
                title: "SMEs",
                value: count(self.total_smes),
                tab: "a006_sme_profile",
            },
            StatCard {
                title: "FPOs",
                value: count(self.total_fpos),
                tab: "a007_fpo_profile",
            },
            StatCard {
                title: "Revenue",
                value: format_inr(self.total_revenue.unwrap_or(0.0)),
                tab: "a002_order",
            },
        ]
    }

    /// Bars scaled against the largest value; an all-zero series yields
    /// zero-height bars rather than dividing by zero.
    pub fn chart_bars(&self, series: ChartSeries) -> Vec<ChartBar> {
        let values: Vec<(String, f64)> = self
            .monthly
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let label = lenient::non_empty(p.month.as_deref())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", i + 1));
                let value = match series {
                    ChartSeries::Orders => p.orders.unwrap_or(0) as f64,
                    ChartSeries::Revenue => p.revenue.unwrap_or(0.0),
                };
                (label, value.max(0.0))
            })
            .collect();

        let max = values.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        values
            .into_iter()
            .map(|(label, value)| ChartBar {
                label,
                value,
                height: if max > 0.0 { value / max } else { 0.0 },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_partial_stats() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalUsers":"152","totalOrders":48,"revenue":"98500.5",
                "monthlyStats":[{"_id":"2024-04","count":10,"total":20000},{"month":"2024-05","orders":20}]}"#,
        )
        .unwrap();
        assert_eq!(stats.total_customers, Some(152));
        assert_eq!(stats.open_tickets, None);
        assert_eq!(stats.monthly.len(), 2);

        let cards = stats.cards();
        assert_eq!(cards[0].value, "152");
        assert_eq!(cards[4].value, "0");
        assert_eq!(cards[7].value, "₹98,500.50");
    }

    #[test]
    fn test_chart_bars_scale() {
        let stats = DashboardStats {
            monthly: vec![
                MonthlyPoint {
                    month: Some("Apr".into()),
                    orders: Some(10),
                    revenue: Some(500.0),
                },
                MonthlyPoint {
                    month: None,
                    orders: Some(20),
                    revenue: None,
                },
            ],
            ..Default::default()
        };
        let bars = stats.chart_bars(ChartSeries::Orders);
        assert_eq!(bars[0].height, 0.5);
        assert_eq!(bars[1].height, 1.0);
        assert_eq!(bars[1].label, "#2");

        let revenue = stats.chart_bars(ChartSeries::Revenue);
        assert_eq!(revenue[0].height, 1.0);
        assert_eq!(revenue[1].height, 0.0);

        let empty = DashboardStats::default();
        assert!(empty.chart_bars(ChartSeries::Orders).is_empty());
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(123456.0), "₹1,23,456.00");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_inr(-1500.0), "-₹1,500.00");
    }
}
