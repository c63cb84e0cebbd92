// Rule tables for ShieldSentry
// Loads, merges, and validates the phishing indicator lists used by the scorer

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

lazy_static! {
    // A matchable domain entry: at least one dot, label characters only
    static ref DOMAIN_ENTRY: Regex = Regex::new(r"(?i)^[a-z0-9-]+(\.[a-z0-9-]+)+$").unwrap();
}

/// Immutable phishing indicator lists consumed by the scorer.
///
/// The three lists mirror the scoring rules: `domains` are matched against
/// the extracted host, `patterns` and `keywords` against the full URL.
/// Keywords may contain spaces; they are stripped at match time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Look-alike spellings of well-known service domains
    #[serde(default)]
    pub domains: Vec<String>,
    /// Lure phrases commonly planted in phishing URLs
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Shortener hostnames and other redirection markers
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl RuleSet {
    /// The built-in indicator lists shipped with the scanner.
    pub fn builtin() -> Self {
        Self {
            domains: vec![
                "paypa1.com".to_string(),
                "g00gle.com".to_string(),
                "faceb00k.com".to_string(),
                "amaz0n.com".to_string(),
                "micros0ft.com".to_string(),
                "appl3.com".to_string(),
                "netfl1x.com".to_string(),
                "bank0famerica.com".to_string(),
                "wellsfarg0.com".to_string(),
                "chas3bank.com".to_string(),
            ],
            keywords: vec![
                "verify your account".to_string(),
                "confirm your details".to_string(),
                "urgent action required".to_string(),
                "suspicious activity".to_string(),
                "your account has been limited".to_string(),
                "password reset".to_string(),
                "security alert".to_string(),
                "login attempt".to_string(),
                "update your payment".to_string(),
                "document shared with you".to_string(),
            ],
            patterns: vec![
                "http://".to_string(), // non-HTTPS URL
                "bit.ly".to_string(),
                "tinyurl.com".to_string(),
                "goo.gl".to_string(),
                "t.co".to_string(),
                "is.gd".to_string(),
                "shorturl.at".to_string(),
                "rebrand.ly".to_string(),
                "ow.ly".to_string(),
                "clck.ru".to_string(),
            ],
        }
    }

    /// An empty rule set, useful as a merge accumulator.
    pub fn empty() -> Self {
        Self {
            domains: Vec::new(),
            keywords: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Total number of entries across all three lists.
    pub fn len(&self) -> usize {
        self.domains.len() + self.keywords.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load a rule set from a single JSON file.
    pub fn from_json_file(path: &str) -> Result<RuleSet, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path, e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path, e))
    }

    /// Load and merge every `.json` rule file under a feed directory.
    ///
    /// Files are visited in name order so repeated loads of the same
    /// directory produce the same rule set. Entries already present
    /// (case-insensitively) are dropped.
    pub fn load_dir(dir: &str) -> Result<RuleSet, String> {
        let mut merged = RuleSet::empty();
        let mut loaded = 0usize;

        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().map_or(false, |ext| ext == "json") {
                let path = entry.path().to_string_lossy().to_string();
                let rules = RuleSet::from_json_file(&path)?;
                merged.merge(rules);
                loaded += 1;
            }
        }

        if loaded == 0 {
            return Err(format!("No .json rule files found under {}", dir));
        }
        Ok(merged)
    }

    /// Append entries from another rule set, skipping case-insensitive
    /// duplicates. First occurrence wins, so merge order is significant.
    pub fn merge(&mut self, other: RuleSet) {
        for entry in other.domains {
            push_unique(&mut self.domains, entry);
        }
        for entry in other.keywords {
            push_unique(&mut self.keywords, entry);
        }
        for entry in other.patterns {
            push_unique(&mut self.patterns, entry);
        }
    }

    /// Check every entry for problems that would make it unmatchable or
    /// overly broad, returning human-readable warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for domain in &self.domains {
            if domain.trim().is_empty() {
                warnings.push("Empty domain entry matches every host".to_string());
            } else if !DOMAIN_ENTRY.is_match(domain) {
                warnings.push(format!("Domain entry does not look like a domain: {:?}", domain));
            }
        }

        for keyword in &self.keywords {
            if keyword.trim().is_empty() {
                warnings.push("Empty keyword entry matches every URL".to_string());
            }
        }

        for pattern in &self.patterns {
            if pattern.trim().is_empty() {
                warnings.push("Empty pattern entry matches every URL".to_string());
            } else if pattern.contains(char::is_whitespace) {
                warnings.push(format!(
                    "Pattern entry contains whitespace and cannot match a URL: {:?}",
                    pattern
                ));
            }
        }

        warnings
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::builtin()
    }
}

fn push_unique(list: &mut Vec<String>, entry: String) {
    if !list.iter().any(|e| e.eq_ignore_ascii_case(&entry)) {
        list.push(entry);
    }
}
