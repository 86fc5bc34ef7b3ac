//! Models for the posting log and campaign metrics tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One manual posting, logged by the user after pasting a variant into a
/// site. `site` is a free string with no referential integrity to the site
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingLogEntry {
    pub time: DateTime<Utc>,
    pub site: String,
    pub note: String,
    pub link: String,
}

/// One row of campaign metrics for a site at a point in time.
/// `EPC` and `Conv%` are derived server-side, never accepted from clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub time: DateTime<Utc>,
    pub site: String,
    pub impressions: u64,
    pub clicks: u64,
    pub leads: u64,
    pub sales: u64,
    pub revenue: f64,
    /// Earnings per click: revenue / clicks, 0 when there are no clicks.
    #[serde(rename = "EPC")]
    pub epc: f64,
    /// Conversion rate: sales / clicks * 100, 0 when there are no clicks.
    #[serde(rename = "Conv%")]
    pub conversion_pct: f64,
}

impl CampaignSnapshot {
    /// Builds a snapshot, computing the derived metrics rounded to 2 decimals.
    pub fn derive(
        time: DateTime<Utc>,
        site: String,
        impressions: u64,
        clicks: u64,
        leads: u64,
        sales: u64,
        revenue: f64,
    ) -> Self {
        let (epc, conversion_pct) = if clicks > 0 {
            (
                round2(revenue / clicks as f64),
                round2(sales as f64 / clicks as f64 * 100.0),
            )
        } else {
            (0.0, 0.0)
        };

        CampaignSnapshot {
            time,
            site,
            impressions,
            clicks,
            leads,
            sales,
            revenue,
            epc,
            conversion_pct,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(clicks: u64, sales: u64, revenue: f64) -> CampaignSnapshot {
        CampaignSnapshot::derive(Utc::now(), "Craigslist".to_string(), 100, clicks, 5, sales, revenue)
    }

    #[test]
    fn test_epc_is_revenue_per_click() {
        assert_eq!(snapshot(40, 2, 90.0).epc, 2.25);
    }

    #[test]
    fn test_conversion_is_sales_per_click_percent() {
        assert_eq!(snapshot(40, 2, 90.0).conversion_pct, 5.0);
    }

    #[test]
    fn test_zero_clicks_yields_zero_derived_metrics() {
        let snap = snapshot(0, 3, 250.0);
        assert_eq!(snap.epc, 0.0);
        assert_eq!(snap.conversion_pct, 0.0);
    }

    #[test]
    fn test_derived_metrics_round_to_two_decimals() {
        // 100 / 3 = 33.333... and 1/3*100 = 33.333...
        let snap = snapshot(3, 1, 100.0);
        assert_eq!(snap.epc, 33.33);
        assert_eq!(snap.conversion_pct, 33.33);
    }

    #[test]
    fn test_snapshot_serializes_renamed_keys() {
        let json = serde_json::to_value(snapshot(10, 1, 20.0)).unwrap();
        assert!(json.get("EPC").is_some());
        assert!(json.get("Conv%").is_some());
        assert!(json.get("epc").is_none());
    }

    #[test]
    fn test_posting_log_entry_round_trips() {
        let entry = PostingLogEntry {
            time: Utc::now(),
            site: "Locanto".to_string(),
            note: "Berlin, services".to_string(),
            link: "https://locanto.example/ad/1".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let recovered: PostingLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, entry);
    }
}
