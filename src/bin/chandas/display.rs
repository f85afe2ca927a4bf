//! Terminal rendering of verification reports

use chandas_wasm::{LineOutcome, MeterInfo, RawPattern, VerificationReport};
use crossterm::style::Stylize;

const RULE_WIDTH: usize = 60;

pub fn print_header(text: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule.as_str().magenta().bold());
    println!("{}", format!("{:^width$}", text, width = RULE_WIDTH).magenta().bold());
    println!("{}\n", rule.as_str().magenta().bold());
}

pub fn print_section(text: &str) {
    println!("\n{}", text.blue().bold());
    println!("{}", "-".repeat(text.chars().count()).blue());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_warning(text: &str) {
    println!("{}", text.yellow());
}

/// Warning on stderr, for notices that must stay out of report output
pub fn notify_warning(text: &str) {
    eprintln!("{}", text.yellow());
}

pub fn print_error(text: &str) {
    println!("{}", text.red());
}

pub fn print_report(report: &VerificationReport) {
    print_section("Input Verse");
    println!("{}", report.cleaned_verse);

    print_section("Syllable Breakdown");
    if report.syllable_info.is_empty() {
        print_warning("No analyzable lines");
    }
    for (i, line) in report.syllable_info.iter().enumerate() {
        println!("Line {}: {}", i + 1, line.text);
        match &line.outcome {
            LineOutcome::Parsed { syllables, pattern, .. } => {
                println!("  Syllables ({}): {}", syllables.len(), syllables.join(", ").bold());
                println!("  Pattern: {}", pattern.to_string().cyan());
            }
            LineOutcome::Failed { error } => print_error(&format!("  Error: {}", error)),
        }
        println!();
    }

    let details = &report.verification_details;
    let stats = &details.pattern_statistics;
    print_section("Metrical Statistics");
    println!("Total syllables: {}", stats.total_syllables.to_string().bold());
    println!("Guru (heavy) syllables: {}", stats.guru_count.to_string().bold());
    println!("Laghu (light) syllables: {}", stats.laghu_count.to_string().bold());
    println!("Guru percentage: {}", format!("{:.2}%", stats.guru_percentage).bold());

    print_section("Meter Identification");
    let meters = details.matched_meters.join(", ");
    if details.is_valid_meter {
        print_success(&format!("Valid meter detected: {}", meters));
        print_success(&format!("Confidence: {:.0}%", details.confidence_score));
    } else if !details.matched_meters.is_empty() {
        print_warning(&format!("Partial match: {}", meters));
        print_warning(&format!("Confidence: {:.2}%", details.confidence_score));
        if let Some(best) = details.best_match_percentage {
            print_warning(&format!("Best positional match: {:.2}%", best));
        }
    } else {
        print_warning("No known meter matched");
    }

    if !details.deviation_analysis.is_empty() {
        print_section("Deviations");
        for analysis in &details.deviation_analysis {
            println!(
                "{} ({:.2}% match, {} deviation(s))",
                analysis.meter.as_str().bold(),
                analysis.match_percentage,
                analysis.deviations.len()
            );
            for d in &analysis.deviations {
                println!(
                    "  line {}, syllable {}: found {}, expected {}",
                    d.line,
                    d.position_in_line,
                    d.actual.to_string().red(),
                    d.expected.to_string().green()
                );
            }
        }
    }

    for fault in &details.catalog_faults {
        print_error(&format!("Catalog error for {}: {}", fault.meter, fault.message));
    }
}

pub fn print_meter_list(names: &[String]) {
    print_section(&format!("Available Meters ({})", names.len()));
    for name in names {
        println!("  {}", name);
    }
}

pub fn print_meter_info(meter: &MeterInfo) {
    print_section(&meter.name);
    match &meter.pattern {
        RawPattern::Single(p) => println!("Pattern: {}", p.as_str().cyan()),
        RawPattern::List(list) => {
            for (i, p) in list.iter().enumerate() {
                println!("Pattern {}: {}", i + 1, p.as_str().cyan());
            }
        }
    }
    match meter.shape {
        Some(shape) => println!("Shape: {}", shape.as_str()),
        None => print_error("Shape: invalid catalog entry"),
    }
    println!("Syllables per verse: {}", meter.syllable_count);
    if !meter.description.is_empty() {
        println!("{}", meter.description);
    }
}
