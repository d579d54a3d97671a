//! Campaign metrics records and their display formatting.

use serde::Deserialize;

/// One per-campaign daily aggregate from `/metrics/summary`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryRecord {
    /// Calendar date of the aggregate, as supplied by the backend.
    pub date: String,
    /// Opaque campaign identifier.
    pub campaign_id: String,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub total_spend: f64,
    /// Click-through rate, already expressed as a percentage.
    pub avg_ctr: f64,
    /// Cost per click in currency units.
    pub avg_cpc: f64,
}

/// One per-minute aggregate from `/metrics/realtime`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RealtimeRecord {
    /// Minute bucket timestamp, as supplied by the backend.
    pub minute: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    /// Click-through rate, already expressed as a percentage.
    pub avg_ctr: f64,
}

/// A full refresh of both metric series, applied wholesale to the dashboard.
///
/// Records keep the order the backend returned them in; nothing here sorts,
/// merges, or deduplicates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsSnapshot {
    pub summary: Vec<SummaryRecord>,
    pub realtime: Vec<RealtimeRecord>,
}

impl SummaryRecord {
    /// Table cells for this record, in display column order:
    /// date, campaign, impressions, clicks, CTR, CPC, spend.
    pub fn table_cells(&self) -> [String; 7] {
        [
            self.date.clone(),
            self.campaign_id.clone(),
            format_grouped(self.total_impressions),
            format_grouped(self.total_clicks),
            format_percent(self.avg_ctr),
            format_currency(self.avg_cpc),
            format_spend(self.total_spend),
        ]
    }
}

/// Format a non-negative integer with comma-grouped digits (1000 -> "1,000").
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a percentage with two decimal places (3.5 -> "3.50%").
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a currency amount with two decimal places (1.2 -> "$1.20").
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a spend amount with grouped digits and a `$` prefix. Whole amounts
/// render without decimals (12345 -> "$12,345"), fractional amounts keep
/// two (120.5 -> "$120.50").
pub fn format_spend(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    if cents % 100 == 0 {
        format!("${}", format_grouped(cents / 100))
    } else {
        format!("${}.{:02}", format_grouped(cents / 100), cents % 100)
    }
}
