// Quick domain triage for ShieldSentry
// The hosted scan endpoint's lightweight hostname check, as a pure function

use url::Url;

/// Hostname keywords the hosted endpoint treats as suspicious.
const TRIAGE_PATTERNS: [&str; 11] = [
    "phish", "scam", "free", "win", "prize", "verify", "account", "secure", "login", "bank",
    "paypal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageRisk {
    High,
    Low,
}

impl TriageRisk {
    pub const fn as_str(self) -> &'static str {
        match self {
            TriageRisk::High => "high",
            TriageRisk::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageStatus {
    Blocked,
    Allowed,
}

impl TriageStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            TriageStatus::Blocked => "blocked",
            TriageStatus::Allowed => "allowed",
        }
    }
}

/// Verdict of the quick hostname check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageVerdict {
    pub domain: String,
    pub risk: TriageRisk,
    pub status: TriageStatus,
}

/// Split the hostname on dots and flag any part containing a triage keyword.
///
/// Unlike the scorer, this requires a well-formed absolute URL; the endpoint
/// it mirrors rejects anything else. Note the keyword list is blunt on
/// purpose: `paypal.com` itself comes back blocked.
pub fn triage_url(url: &str) -> Result<TriageVerdict, String> {
    let parsed = Url::parse(url).map_err(|e| format!("Invalid URL {}: {}", url, e))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| format!("URL has no host: {}", url))?;

    let suspicious = host.split('.').any(|part| {
        let part = part.to_lowercase();
        TRIAGE_PATTERNS.iter().any(|p| part.contains(p))
    });

    let (risk, status) = if suspicious {
        (TriageRisk::High, TriageStatus::Blocked)
    } else {
        (TriageRisk::Low, TriageStatus::Allowed)
    };

    Ok(TriageVerdict {
        domain: host.to_string(),
        risk,
        status,
    })
}
