//! Phonetic accuracy runner over a structured TOML corpus.

use std::collections::BTreeMap;
use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use olelo_core::phonetic;

use super::die;

#[derive(Debug, Deserialize)]
struct AccuracyCorpus {
    cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
struct AccuracyCase {
    word: String,
    expected: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    skip: bool,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct AccuracyResult {
    word: String,
    expected: String,
    actual: String,
    status: AccuracyStatus,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
struct AccuracySummary {
    total: usize,
    pass: usize,
    fail: usize,
    skip: usize,
    pass_rate: String,
}

#[derive(Debug, Serialize)]
struct AccuracyReport {
    results: Vec<AccuracyResult>,
    summary: AccuracySummary,
}

pub struct AccuracyOptions {
    pub tag: Option<String>,
    pub category: Option<String>,
    pub verbose: bool,
    pub json: bool,
}

pub fn run(corpus_file: &str, opts: &AccuracyOptions) {
    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus: AccuracyCorpus = die!(toml::from_str(&content), "Failed to parse corpus TOML: {}");

    let cases: Vec<&AccuracyCase> = corpus
        .cases
        .iter()
        .filter(|c| {
            if let Some(ref t) = opts.tag {
                if !c.tags.contains(t) {
                    return false;
                }
            }
            if let Some(ref cat) = opts.category {
                if c.category != *cat {
                    return false;
                }
            }
            true
        })
        .collect();

    if cases.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    let mut results: Vec<AccuracyResult> = Vec::with_capacity(cases.len());
    for case in &cases {
        if case.skip {
            results.push(AccuracyResult {
                word: case.word.clone(),
                expected: case.expected.clone(),
                actual: String::new(),
                status: AccuracyStatus::Skip,
                category: case.category.clone(),
                note: case.note.clone(),
            });
            continue;
        }

        let actual = phonetic(&case.word);
        let status = if actual == case.expected {
            AccuracyStatus::Pass
        } else {
            AccuracyStatus::Fail
        };
        results.push(AccuracyResult {
            word: case.word.clone(),
            expected: case.expected.clone(),
            actual,
            status,
            category: case.category.clone(),
            note: case.note.clone(),
        });
    }

    let total = results.len();
    let pass = results
        .iter()
        .filter(|r| r.status == AccuracyStatus::Pass)
        .count();
    let fail = results
        .iter()
        .filter(|r| r.status == AccuracyStatus::Fail)
        .count();
    let skip = results
        .iter()
        .filter(|r| r.status == AccuracyStatus::Skip)
        .count();
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    let summary = AccuracySummary {
        total,
        pass,
        fail,
        skip,
        pass_rate: format!("{rate:.1}%"),
    };

    if opts.json {
        let report = AccuracyReport { results, summary };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
        for r in &results {
            grouped.entry(&r.category).or_default().push(r);
        }

        for (cat, group) in &grouped {
            println!("\n=== {} ({} cases) ===", cat, group.len());
            for r in group {
                match r.status {
                    AccuracyStatus::Pass => {
                        if opts.verbose {
                            println!("  \u{2713} {} \u{2192} {}", r.word, r.expected);
                        }
                    }
                    AccuracyStatus::Fail => {
                        println!(
                            "  \u{2717} {} \u{2192} {} (got: {})",
                            r.word, r.expected, r.actual
                        );
                    }
                    AccuracyStatus::Skip => {
                        let reason = r.note.as_deref().unwrap_or("known failure");
                        println!("  - {} [skip: {}]", r.word, reason);
                    }
                }
            }
        }

        println!();
        println!("=== Summary ===");
        println!("  Total:     {}", summary.total);
        println!("  Pass:      {:>3}", summary.pass);
        println!("  Fail:      {:>3}", summary.fail);
        println!("  Skip:      {:>3}", summary.skip);
        println!(
            "  Pass rate: {} ({}/{})",
            summary.pass_rate, summary.pass, tested
        );
    }

    if fail > 0 {
        process::exit(1);
    }
}
