// Indicator predicates for ShieldSentry
// Case-insensitive substring checks against the loaded rule set

use crate::rules::RuleSet;
use url::Url;

/// Which of the three indicator rules matched a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorHits {
    pub known_domain: bool,
    pub redirection: bool,
    pub keyword: bool,
}

impl IndicatorHits {
    pub fn any(&self) -> bool {
        self.known_domain || self.redirection || self.keyword
    }
}

/// Extract the host portion of a URL-like string.
///
/// Inputs that do not parse as a URL (or parse without a host, like
/// `mailto:` links) degrade to the raw input so matching still works.
pub fn extract_host(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => parsed
            .host_str()
            .map(str::to_string)
            .unwrap_or_else(|| input.to_string()),
        Err(_) => input.to_string(),
    }
}

/// True when the host contains a known look-alike phishing domain.
pub fn is_known_phishing_domain(host: &str, rules: &RuleSet) -> bool {
    let host = host.to_lowercase();
    rules
        .domains
        .iter()
        .any(|d| host.contains(&d.to_lowercase()))
}

/// True when the URL contains a shortener host or other redirection marker.
pub fn has_redirection_pattern(url: &str, rules: &RuleSet) -> bool {
    let url = url.to_lowercase();
    rules
        .patterns
        .iter()
        .any(|p| url.contains(&p.to_lowercase()))
}

/// True when the URL embeds a lure phrase.
///
/// Phrases are compared with their spaces stripped, so the rule
/// "verify your account" matches `.../verifyyouraccount`.
pub fn has_suspicious_keywords(url: &str, rules: &RuleSet) -> bool {
    let url = url.to_lowercase();
    rules.keywords.iter().any(|k| {
        let needle = k.to_lowercase().replace(' ', "");
        !needle.is_empty() && url.contains(&needle)
    })
}

/// Evaluate all three predicates against one URL.
pub fn evaluate(url: &str, rules: &RuleSet) -> IndicatorHits {
    let host = extract_host(url);
    IndicatorHits {
        known_domain: is_known_phishing_domain(&host, rules),
        redirection: has_redirection_pattern(url, rules),
        keyword: has_suspicious_keywords(url, rules),
    }
}
