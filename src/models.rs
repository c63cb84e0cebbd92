// Core data models for ShieldSentry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-way threat classification derived from the risk score.
///
/// `Unknown` exists for compatibility with results recorded by other
/// components; the scorer never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Safe,
    Suspicious,
    Dangerous,
    Unknown,
}

impl ThreatLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThreatLevel::Safe => "safe",
            ThreatLevel::Suspicious => "suspicious",
            ThreatLevel::Dangerous => "dangerous",
            ThreatLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreatLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" => Ok(ThreatLevel::Safe),
            "suspicious" => Ok(ThreatLevel::Suspicious),
            "dangerous" => Ok(ThreatLevel::Dangerous),
            "unknown" => Ok(ThreatLevel::Unknown),
            other => Err(format!(
                "Invalid threat level: {} (expected safe|suspicious|dangerous|unknown)",
                other
            )),
        }
    }
}

/// Scoring breakdown attached to a scan result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanDetails {
    /// Risk score in 0..=100
    pub score: u8,
    /// Contributing factors in fixed order; empty for a safe result
    pub indicators: Vec<String>,
    /// One-sentence summary matching the classification
    pub description: String,
}

/// Outcome of scanning a single URL. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub threat_level: ThreatLevel,
    pub details: ScanDetails,
}

impl ScanResult {
    /// Create a result stamped with the current time
    pub fn new(url: &str, threat_level: ThreatLevel, details: ScanDetails) -> Self {
        Self {
            url: url.to_string(),
            timestamp: Utc::now(),
            threat_level,
            details,
        }
    }
}
