//! Site profile loading.

use portfolio_types::SiteProfile;

const SITE_JSON: &str = include_str!("../site.json");

/// Load the embedded site profile, falling back to defaults if it is malformed.
pub fn site_profile() -> SiteProfile {
    parse_or_default(SITE_JSON)
}

fn parse_or_default(json: &str) -> SiteProfile {
    match SiteProfile::from_json(json) {
        Ok(profile) => profile,
        Err(e) => {
            log::warn!("Invalid site.json, using default profile: {}", e);
            SiteProfile::default()
        }
    }
}
