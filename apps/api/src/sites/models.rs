//! Site directory models and the built-in seed list.

use serde::{Deserialize, Serialize};

/// One classified-ad site in the directory. `name` is the directory key.
/// Entries are immutable once added; the only bulk mutation is a full
/// replace-on-import. There is no delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub name: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub needs_account: bool,
    pub url: String,
    pub notes: String,
}

/// Built-in directory loaded at session start.
pub fn seed_sites() -> Vec<SiteEntry> {
    let raw: [(&str, &str, &str, bool, &str, &str); 5] = [
        (
            "Craigslist",
            "Global/US",
            "General",
            true,
            "https://www.craigslist.org",
            "Local posting; manual; strict rules.",
        ),
        (
            "Facebook Marketplace",
            "Global",
            "General",
            true,
            "https://www.facebook.com/marketplace",
            "High reach; FB account required.",
        ),
        (
            "Locanto",
            "Global",
            "General",
            true,
            "https://www.locanto.com",
            "Many city-based pages; text + images.",
        ),
        (
            "ClassifiedAds",
            "US",
            "General",
            true,
            "https://www.classifiedads.com",
            "Free general classifieds.",
        ),
        (
            "OfferUp",
            "US",
            "Local Apps",
            true,
            "https://offerup.com",
            "Mobile-first local marketplace.",
        ),
    ];

    raw.into_iter()
        .map(
            |(name, region, category, needs_account, url, notes)| SiteEntry {
                name: name.to_string(),
                region: region.to_string(),
                category: Some(category.to_string()),
                needs_account,
                url: url.to_string(),
                notes: notes.to_string(),
            },
        )
        .collect()
}

/// Filters the directory by exact region/category and a case-insensitive
/// name substring. `None` filters match everything.
pub fn filter_sites(
    sites: &[SiteEntry],
    region: Option<&str>,
    category: Option<&str>,
    name_query: Option<&str>,
) -> Vec<SiteEntry> {
    sites
        .iter()
        .filter(|s| region.map_or(true, |r| s.region == r))
        .filter(|s| category.map_or(true, |c| s.category.as_deref() == Some(c)))
        .filter(|s| {
            name_query
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map_or(true, |q| {
                    s.name.to_lowercase().contains(&q.to_lowercase())
                })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list_has_five_unique_names() {
        let sites = seed_sites();
        assert_eq!(sites.len(), 5);
        let mut names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_filter_by_region_is_exact() {
        let sites = seed_sites();
        let us = filter_sites(&sites, Some("US"), None, None);
        assert_eq!(us.len(), 2);
        assert!(us.iter().all(|s| s.region == "US"));
        // "Global/US" is a distinct region string, not a US match.
        assert!(filter_sites(&sites, Some("Global/US"), None, None).len() == 1);
    }

    #[test]
    fn test_filter_by_category() {
        let sites = seed_sites();
        let apps = filter_sites(&sites, None, Some("Local Apps"), None);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "OfferUp");
    }

    #[test]
    fn test_name_search_is_case_insensitive_substring() {
        let sites = seed_sites();
        let hits = filter_sites(&sites, None, None, Some("craigs"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Craigslist");
    }

    #[test]
    fn test_blank_name_query_matches_everything() {
        let sites = seed_sites();
        assert_eq!(filter_sites(&sites, None, None, Some("  ")).len(), 5);
    }

    #[test]
    fn test_combined_filters() {
        let sites = seed_sites();
        let hits = filter_sites(&sites, Some("US"), Some("General"), Some("classified"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ClassifiedAds");
    }

    #[test]
    fn test_missing_category_key_deserializes_as_none() {
        let json = r#"{"name":"X","region":"EU","needs_account":false,"url":"https://x.example","notes":""}"#;
        let site: SiteEntry = serde_json::from_str(json).unwrap();
        assert_eq!(site.category, None);
    }

    #[test]
    fn test_json_round_trip_preserves_entries_and_order() {
        let sites = seed_sites();
        let json = serde_json::to_string_pretty(&sites).unwrap();
        let recovered: Vec<SiteEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, sites);
    }
}
