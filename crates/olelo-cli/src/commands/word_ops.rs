use std::io::{self, BufRead};
use std::process;

use olelo_core::{ipa, pronounce, split_syllables, tips};

/// Words from the command line, or stdin lines when none were given.
/// Blank lines and `#`-comments are skipped.
pub fn resolve_words(args: &[String]) -> Vec<String> {
    if !args.is_empty() {
        return args.to_vec();
    }
    io::stdin()
        .lock()
        .lines()
        .map(|l| {
            l.unwrap_or_else(|e| {
                eprintln!("Failed to read stdin: {e}");
                process::exit(1);
            })
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

pub fn say(word: &str, json: bool) {
    let p = pronounce(word);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&p).expect("JSON serialization failed")
        );
        return;
    }

    println!("{}", p.word);
    println!("  phonetic:  {}", p.phonetic);
    println!("  ipa:       {}", p.ipa);
    println!("  syllables: {}", p.syllables.join("·"));
    match &p.audio {
        Some(file) => println!("  audio:     {file}"),
        None => println!("  audio:     (no native recording)"),
    }
    if !p.tips.is_empty() {
        println!("  tips:");
        for tip in &p.tips {
            println!("    - {tip}");
        }
    }
}

pub fn syllables(args: &[String]) {
    for word in resolve_words(args) {
        let lower = word.to_lowercase();
        println!("{} -> {}", word, split_syllables(&lower).join("-"));
    }
}

pub fn ipa_words(args: &[String]) {
    for word in resolve_words(args) {
        println!("{} -> {}", word, ipa(&word));
    }
}

pub fn tips_words(args: &[String]) {
    for word in resolve_words(args) {
        let word_tips = tips(&word);
        if word_tips.is_empty() {
            println!("{word}: (no tips)");
            continue;
        }
        println!("{word}:");
        for tip in word_tips {
            println!("  - {tip}");
        }
    }
}
