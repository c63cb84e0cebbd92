// Reporting and output for ShieldSentry
// Supports CSV, Markdown, and JSON export

use crate::models::ScanResult;
use chrono::Local;
use std::fs::File;
use std::io::Write;

/// Escape CSV field to prevent formula injection attacks
/// Cells starting with =, +, -, @, or tab are prefixed with single quote
fn escape_csv_field(field: &str) -> String {
    if field.is_empty() {
        return String::new();
    }

    let first_char = field.chars().next().unwrap();
    let needs_escaping = matches!(first_char, '=' | '+' | '-' | '@' | '\t');

    // Also escape if field contains comma or quotes
    if needs_escaping || field.contains(',') || field.contains('"') {
        if needs_escaping {
            // Prefix with single quote to prevent formula injection
            format!("\"'{}\"", field.replace('"', "\"\""))
        } else {
            // Standard CSV escaping
            format!("\"{}\"", field.replace('"', "\"\""))
        }
    } else {
        field.to_string()
    }
}

pub fn export_csv(results: &[ScanResult]) -> Result<String, std::io::Error> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("shieldsentry_report_{}.csv", timestamp);
    let mut file = File::create(&filename)?;

    writeln!(file, "URL,ThreatLevel,Score,Indicators,Description")?;
    for result in results {
        writeln!(
            file,
            "{},{},{},{},{}",
            escape_csv_field(&result.url),
            result.threat_level,
            result.details.score,
            escape_csv_field(&result.details.indicators.join("; ")),
            escape_csv_field(&result.details.description)
        )?;
    }

    Ok(filename)
}

pub fn export_markdown(results: &[ScanResult]) -> Result<String, std::io::Error> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("shieldsentry_report_{}.md", timestamp);
    let mut file = File::create(&filename)?;

    writeln!(file, "# ShieldSentry Report\n")?;
    for result in results {
        writeln!(
            file,
            "- **{}** ({}/100) {}: {}",
            result.threat_level, result.details.score, result.url, result.details.description
        )?;
        for indicator in &result.details.indicators {
            writeln!(file, "  - {}", indicator)?;
        }
    }

    Ok(filename)
}

pub fn export_json(results: &[ScanResult]) -> Result<String, std::io::Error> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("shieldsentry_report_{}.json", timestamp);
    let mut file = File::create(&filename)?;

    let json = serde_json::to_string_pretty(results)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    file.write_all(json.as_bytes())?;

    Ok(filename)
}
