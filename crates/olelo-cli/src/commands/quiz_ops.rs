//! Terminal walk-through of a lesson deck.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use olelo_core::curriculum::Slide;
use olelo_core::progress::{now_epoch, ProgressStore};
use olelo_session::LessonSession;

use super::die;

/// Walk a lesson's slides, asking the practice questions on stdin.
/// With `progress_file`, the result is recorded on completion.
pub fn run(lesson_id: u32, progress_file: Option<&str>) {
    let mut session = LessonSession::start(lesson_id).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "Lesson {}: {}\n",
        session.lesson().id,
        session.lesson().title
    );

    loop {
        show_slide(session.current());

        let option_count = match session.current() {
            Slide::Practice { options, .. } => Some(options.len()),
            _ => None,
        };
        if let Some(option_count) = option_count {
            match read_answer(&mut lines, option_count) {
                Some(choice) => match session.answer(choice) {
                    Ok(feedback) if feedback.correct => println!("  Correct!\n"),
                    Ok(feedback) => {
                        println!("  Not quite, the answer was {}.\n", feedback.correct_answer + 1)
                    }
                    Err(e) => println!("  ({e})\n"),
                },
                None => println!("  (skipped)\n"),
            }
        }

        if session.at_complete() {
            break;
        }
        session.advance();
    }

    let result = session.finish().expect("at complete slide");
    println!(
        "\nScore: {}% ({}/{} correct), {} points",
        result.score_percent, result.correct, result.total_questions, result.points_earned
    );

    if let Some(file) = progress_file {
        let path = Path::new(file);
        let mut store = die!(
            ProgressStore::open(path),
            "Failed to open progress file {file}: {}"
        );
        store.record_completion(
            result.lesson_id,
            result.score_percent,
            result.points_earned,
            now_epoch(),
        );
        die!(store.save(path), "Failed to save progress file {file}: {}");
        println!("Progress saved to {file}");
    }
}

/// Read a 1-based answer number from stdin. Returns `None` on EOF or
/// non-numeric input (the question is skipped).
fn read_answer(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    option_count: usize,
) -> Option<usize> {
    print!("  answer [1-{option_count}]: ");
    io::stdout().flush().ok();
    let line = lines.next()?.ok()?;
    let n: usize = line.trim().parse().ok()?;
    n.checked_sub(1).filter(|i| *i < option_count)
}

fn show_slide(slide: &Slide) {
    match slide {
        Slide::Intro { title, content, .. } => println!("== {title} ==\n{content}\n"),
        Slide::Culture {
            title,
            content,
            cultural_note,
        } => {
            println!("== {title} ==\n{content}");
            if let Some(note) = cultural_note {
                println!("({note})");
            }
            println!();
        }
        Slide::Vocabulary {
            word,
            translation,
            pronunciation,
            example,
            example_translation,
            cultural_note,
        } => {
            print!("{word}");
            if let Some(t) = translation {
                print!(" - {t}");
            }
            println!();
            if let Some(p) = pronunciation {
                println!("  say: {p}");
            }
            if let Some(e) = example {
                print!("  e.g. {e}");
                if let Some(et) = example_translation {
                    print!(" ({et})");
                }
                println!();
            }
            if let Some(note) = cultural_note {
                println!("  {note}");
            }
            println!();
        }
        Slide::Grammar {
            grammar_point,
            explanation,
            examples,
        } => {
            println!("== {grammar_point} ==\n{explanation}");
            for ex in examples {
                println!("  {} - {}", ex.hawaiian, ex.english);
            }
            println!();
        }
        Slide::Practice {
            question, options, ..
        } => {
            println!("? {question}");
            for (i, opt) in options.iter().enumerate() {
                println!("  {}. {opt}", i + 1);
            }
        }
        Slide::Complete { message, points } => {
            println!("{message} (+{points} points)");
        }
    }
}
