//! Session-scoped state. Everything here is ephemeral: seeded at startup,
//! discarded at shutdown, never persisted.

use serde::{Deserialize, Serialize};

use crate::copy::generator::AdVariant;
use crate::sites::models::{seed_sites, SiteEntry};
use crate::tracking::models::{CampaignSnapshot, PostingLogEntry};

/// The full brief and output of the most recent generation run.
/// Carried in the webhook payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAd {
    pub product: String,
    pub audience: String,
    pub benefit: String,
    pub cta: String,
    pub style: String,
    pub body_extra: String,
    pub variants: Vec<AdVariant>,
}

/// All mutable session state, held behind `Arc<RwLock<_>>` in `AppState`.
///
/// `history` and `campaign` are append-only; `sites` only grows or is
/// replaced wholesale by an import. Posting log entries reference sites by
/// name with no referential integrity — a loose reference by design.
#[derive(Debug, Clone)]
pub struct Session {
    pub sites: Vec<SiteEntry>,
    pub variants: Vec<AdVariant>,
    pub ad_saved: Option<SavedAd>,
    pub history: Vec<PostingLogEntry>,
    pub campaign: Vec<CampaignSnapshot>,
    pub webhook_url: String,
}

impl Session {
    pub fn new(webhook_url: Option<String>) -> Self {
        Session {
            sites: seed_sites(),
            variants: Vec::new(),
            ad_saved: None,
            history: Vec::new(),
            campaign: Vec::new(),
            webhook_url: webhook_url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded_and_otherwise_empty() {
        let session = Session::new(None);
        assert_eq!(session.sites.len(), 5);
        assert!(session.variants.is_empty());
        assert!(session.ad_saved.is_none());
        assert!(session.history.is_empty());
        assert!(session.campaign.is_empty());
        assert!(session.webhook_url.is_empty());
    }

    #[test]
    fn test_new_session_takes_webhook_seed() {
        let session = Session::new(Some("https://hooks.example/abc".to_string()));
        assert_eq!(session.webhook_url, "https://hooks.example/abc");
    }
}
