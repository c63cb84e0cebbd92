// Demo scan layer for ShieldSentry
// Jitter, random downgrades, and simulated latency on top of the
// deterministic scorer

use crate::detection::{base_score, build_details, classify, evaluate, MAX_SCORE};
use crate::models::{ScanDetails, ScanResult, ThreatLevel};
use crate::rules::RuleSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Upper bound (exclusive) for the random score jitter.
pub const JITTER_RANGE: u8 = 15;
/// Probability that an otherwise-safe result is reported as suspicious.
pub const DOWNGRADE_CHANCE: f64 = 0.2;
/// Minimum score assigned by a random downgrade.
pub const DOWNGRADE_FLOOR: u8 = 25;
/// Default simulated network latency in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Wraps the deterministic scorer with demo-mode randomness and simulated
/// network latency.
///
/// Scanning the same URL twice may yield different classifications; that is
/// the point of this layer, not a bug. Use [`crate::detection::Scorer`]
/// whenever reproducibility matters.
pub struct DemoScanner {
    rules: RuleSet,
    rng: StdRng,
    delay: Duration,
}

impl DemoScanner {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            rng: StdRng::from_entropy(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Seeded construction, for reproducing a run or testing distributions.
    pub fn with_seed(rules: RuleSet, seed: u64) -> Self {
        Self {
            rules,
            rng: StdRng::seed_from_u64(seed),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Change the simulated latency applied by [`DemoScanner::scan`].
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Scan after the simulated latency. No timeout guards the sleep; a
    /// second scan issued while one is pending simply races it.
    pub async fn scan(&mut self, url: &str) -> ScanResult {
        tokio::time::sleep(self.delay).await;
        self.scan_now(url)
    }

    /// The same evaluation without the artificial delay.
    pub fn scan_now(&mut self, url: &str) -> ScanResult {
        let hits = evaluate(url, &self.rules);

        let jitter: u8 = self.rng.gen_range(0..JITTER_RANGE);
        let score = base_score(&hits).saturating_add(jitter).min(MAX_SCORE);
        let threat_level = classify(score);

        // Occasionally flag a clean URL anyway, so the demo looks dynamic
        if threat_level == ThreatLevel::Safe && self.rng.gen_bool(DOWNGRADE_CHANCE) {
            let details = ScanDetails {
                score: score.max(DOWNGRADE_FLOOR),
                indicators: vec!["Unusual URL structure".to_string()],
                description: "This link has some minor suspicious characteristics. \
                              Likely safe but proceed with awareness."
                    .to_string(),
            };
            return ScanResult::new(url, ThreatLevel::Suspicious, details);
        }

        let details = build_details(score, threat_level, &hits);
        ScanResult::new(url, threat_level, details)
    }
}
