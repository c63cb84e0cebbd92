/// Report export tests for ShieldSentry
/// Covers CSV injection protection and the Markdown/JSON shapes
use shieldsentry::models::{ScanDetails, ScanResult, ThreatLevel};
use shieldsentry::reporting::{export_csv, export_json, export_markdown};
use std::fs;

fn result(url: &str, level: ThreatLevel, score: u8, indicators: &[&str], description: &str) -> ScanResult {
    ScanResult::new(
        url,
        level,
        ScanDetails {
            score,
            indicators: indicators.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        },
    )
}

#[test]
fn test_csv_injection_protection() {
    // URLs are attacker-controlled input and land in spreadsheet cells
    let results = vec![
        result(
            "=HYPERLINK(\"http://evil.com\")",
            ThreatLevel::Dangerous,
            100,
            &["Known phishing domain detected"],
            "bad",
        ),
        result("+cmd|'/C calc'!A1", ThreatLevel::Suspicious, 30, &[], "odd"),
        result("@SUM(1+1)", ThreatLevel::Safe, 0, &[], "ok"),
        result("\t=1+1", ThreatLevel::Safe, 0, &[], "ok"),
        result(
            "https://example.com/about",
            ThreatLevel::Safe,
            0,
            &[],
            "This link appears to be safe. No phishing indicators detected.",
        ),
    ];

    let filename = export_csv(&results).expect("CSV export should succeed");
    let content = fs::read_to_string(&filename).expect("Should be able to read CSV file");

    // Dangerous prefixes get the single-quote escape
    assert!(content.contains("\"'=HYPERLINK"), "CSV should escape = prefix");
    assert!(content.contains("\"'+cmd"), "CSV should escape + prefix");
    assert!(content.contains("\"'@SUM"), "CSV should escape @ prefix");
    assert!(content.contains("\"'\t=1+1"), "CSV should escape tab prefix");

    // Plain URLs pass through untouched
    assert!(content.contains("https://example.com/about,safe,0,"));

    // Header intact
    assert!(content.starts_with("URL,ThreatLevel,Score,Indicators,Description\n"));

    let _ = fs::remove_file(&filename);
}

#[test]
fn test_markdown_report_lists_results_with_indicators() {
    let results = vec![
        result(
            "https://paypa1.com/login",
            ThreatLevel::Dangerous,
            70,
            &[
                "Known phishing domain detected",
                "Multiple high-risk factors detected",
            ],
            "This link is likely a phishing attempt. We strongly recommend not visiting this website.",
        ),
        result("https://example.com", ThreatLevel::Safe, 0, &[], "fine"),
    ];

    let filename = export_markdown(&results).expect("Markdown export should succeed");
    let content = fs::read_to_string(&filename).expect("Should be able to read Markdown file");

    assert!(content.starts_with("# ShieldSentry Report\n"));
    assert!(content.contains("- **dangerous** (70/100) https://paypa1.com/login:"));
    assert!(content.contains("  - Known phishing domain detected"));
    assert!(content.contains("- **safe** (0/100) https://example.com: fine"));

    let _ = fs::remove_file(&filename);
}

#[test]
fn test_json_report_round_trips() {
    let results = vec![
        result(
            "https://bit.ly/abc123",
            ThreatLevel::Suspicious,
            30,
            &[
                "Uses URL shortener or redirection service",
                "Some suspicious patterns detected",
            ],
            "This link has some suspicious characteristics. Proceed with caution.",
        ),
    ];

    let filename = export_json(&results).expect("JSON export should succeed");
    let content = fs::read_to_string(&filename).expect("Should be able to read JSON file");

    let back: Vec<ScanResult> = serde_json::from_str(&content).expect("report should parse back");
    assert_eq!(back, results);

    let _ = fs::remove_file(&filename);
}
