// Main CLI entry point for ShieldSentry
// Uses clap for argument parsing

use clap::{Arg, Command};
use shieldsentry::demo::DemoScanner;
use shieldsentry::detection::Scorer;
use shieldsentry::history::ScanHistory;
use shieldsentry::models::ScanResult;
use shieldsentry::remote::RemoteSubmitter;
use shieldsentry::reporting::{export_csv, export_json, export_markdown};
use shieldsentry::rules::RuleSet;
use shieldsentry::triage::triage_url;
use std::time::Duration;

/// Prepend https:// when the input carries no scheme.
fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Read one URL per line; blank lines and `#` comments are skipped.
fn read_url_file(path: &str) -> Result<Vec<String>, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_https_when_scheme_missing() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("bit.ly/abc"), "https://bit.ly/abc");
    }

    #[test]
    fn normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }
}

#[tokio::main]
async fn main() {
    let matches = Command::new("shieldsentry")
        .version("0.1.0")
        .about("Rule-driven phishing URL risk scanner")
        .after_help("EXAMPLES:\n  shieldsentry --url https://paypa1.com/login\n  shieldsentry -i urls.txt --rules-dir feeds/ --csv-report\n  shieldsentry -u bit.ly/abc123 --demo --delay-ms 500\n  shieldsentry -u example.com --triage --endpoint https://api.example.net/scan-url --source cli\n\nOPTIONS:\n  --demo              Enable jitter, random downgrades, and simulated latency\n  --triage            Also print the quick blocked/allowed verdict\n  --csv-report        Output CSV report (default: on)\n  --markdown-report   Output Markdown report (default: on)\n  --json-report       Output JSON report (default: off)")
        .arg(Arg::new("url")
            .short('u')
            .long("url")
            .num_args(1)
            .action(clap::ArgAction::Append)
            .help("URL to scan (repeatable)"))
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .num_args(1)
            .help("File with one URL per line"))
        .arg(Arg::new("rules")
            .long("rules")
            .num_args(1)
            .help("JSON rule set replacing the builtin indicator lists"))
        .arg(Arg::new("rules_dir")
            .long("rules-dir")
            .num_args(1)
            .conflicts_with("rules")
            .help("Directory of JSON rule files, merged in name order"))
        .arg(Arg::new("demo")
            .long("demo")
            .action(clap::ArgAction::SetTrue)
            .help("Enable jitter, random downgrades, and simulated latency"))
        .arg(Arg::new("delay_ms")
            .long("delay-ms")
            .num_args(1)
            .default_value("2000")
            .help("Simulated latency per scan in demo mode (milliseconds)"))
        .arg(Arg::new("triage")
            .long("triage")
            .action(clap::ArgAction::SetTrue)
            .help("Also print the quick blocked/allowed triage verdict"))
        .arg(Arg::new("endpoint")
            .long("endpoint")
            .num_args(1)
            .help("Submit each URL to this scan-url endpoint"))
        .arg(Arg::new("source")
            .long("source")
            .num_args(1)
            .default_value("cli")
            .help("Source label sent with remote submissions"))
        .arg(Arg::new("history_limit")
            .long("history-limit")
            .num_args(1)
            .default_value("10")
            .help("Keep at most this many results for reporting"))
        .arg(Arg::new("csv_report")
            .long("csv-report")
            .action(clap::ArgAction::SetTrue)
            .help("Output CSV report (default: on)"))
        .arg(Arg::new("markdown_report")
            .long("markdown-report")
            .action(clap::ArgAction::SetTrue)
            .help("Output Markdown report (default: on)"))
        .arg(Arg::new("json_report")
            .long("json-report")
            .action(clap::ArgAction::SetTrue)
            .help("Output JSON report (default: off)"))
        .get_matches();

    let mut urls: Vec<String> = matches
        .get_many::<String>("url")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    if let Some(path) = matches.get_one::<String>("input") {
        match read_url_file(path) {
            Ok(more) => urls.extend(more),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
    if urls.is_empty() {
        eprintln!("No URLs to scan. Pass --url or --input.");
        std::process::exit(2);
    }

    let rules = if let Some(path) = matches.get_one::<String>("rules") {
        RuleSet::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load rules: {}", e);
            std::process::exit(1);
        })
    } else if let Some(dir) = matches.get_one::<String>("rules_dir") {
        RuleSet::load_dir(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load rules: {}", e);
            std::process::exit(1);
        })
    } else {
        RuleSet::builtin()
    };
    for warning in rules.validate() {
        eprintln!("Warning: {}", warning);
    }
    println!("Loaded {} rule entries.", rules.len());

    let delay_ms: u64 = matches
        .get_one::<String>("delay_ms")
        .expect("has default")
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("--delay-ms expects a number of milliseconds");
            std::process::exit(2);
        });
    let history_limit: usize = matches
        .get_one::<String>("history_limit")
        .expect("has default")
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("--history-limit expects a number");
            std::process::exit(2);
        });
    let csv_report = matches.get_flag("csv_report")
        || (!matches.get_flag("markdown_report") && !matches.get_flag("json_report"));
    let markdown_report = matches.get_flag("markdown_report")
        || (!matches.get_flag("csv_report") && !matches.get_flag("json_report"));
    let json_report = matches.get_flag("json_report");

    let scorer = Scorer::new(rules.clone());
    let mut demo_scanner = if matches.get_flag("demo") {
        Some(DemoScanner::new(rules).delay(Duration::from_millis(delay_ms)))
    } else {
        None
    };
    let submitter = matches
        .get_one::<String>("endpoint")
        .map(|endpoint| RemoteSubmitter::new(endpoint.clone()));
    let source = matches.get_one::<String>("source").expect("has default");
    let mut history = ScanHistory::capped(history_limit);

    for raw in &urls {
        let target = normalize_url(raw);
        let result = match demo_scanner.as_mut() {
            Some(scanner) => scanner.scan(&target).await,
            None => scorer.scan(&target),
        };

        println!(
            "[{} {}] {}",
            result.threat_level.as_str().to_uppercase(),
            result.details.score,
            result.url
        );
        for indicator in &result.details.indicators {
            println!("    - {}", indicator);
        }
        println!("    {}", result.details.description);

        if matches.get_flag("triage") {
            match triage_url(&target) {
                Ok(verdict) => println!(
                    "    triage: {} (risk {})",
                    verdict.status.as_str(),
                    verdict.risk.as_str()
                ),
                Err(e) => eprintln!("    triage failed: {}", e),
            }
        }

        if let Some(ref submitter) = submitter {
            match submitter.submit(&target, source).await {
                Ok(outcome) => {
                    println!("    remote: {} (risk {})", outcome.status, outcome.risk_level)
                }
                Err(e) => eprintln!("    remote submission failed: {}", e),
            }
        }

        history.record(result);
    }

    let results: Vec<ScanResult> = history.iter().cloned().collect();
    if csv_report {
        match export_csv(&results) {
            Ok(filename) => println!("Wrote {}", filename),
            Err(e) => eprintln!("CSV export failed: {}", e),
        }
    }
    if markdown_report {
        match export_markdown(&results) {
            Ok(filename) => println!("Wrote {}", filename),
            Err(e) => eprintln!("Markdown export failed: {}", e),
        }
    }
    if json_report {
        match export_json(&results) {
            Ok(filename) => println!("Wrote {}", filename),
            Err(e) => eprintln!("JSON export failed: {}", e),
        }
    }
}
