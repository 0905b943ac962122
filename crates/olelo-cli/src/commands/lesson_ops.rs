use std::process;

use unicode_width::UnicodeWidthStr;

use olelo_core::curriculum::{Curriculum, Level, Slide};

/// Pad to a display width; ʻokina and kahakō vowels are single columns but
/// multiple bytes, so byte-based padding would misalign the table.
fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    let mut out = s.to_string();
    for _ in current..width {
        out.push(' ');
    }
    out
}

pub fn list(level: Option<&str>) {
    let curriculum = Curriculum::global();

    let level = level.map(|s| {
        s.parse::<Level>().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        })
    });

    let lessons: Vec<_> = match level {
        Some(l) => curriculum.by_level(l).collect(),
        None => curriculum.lessons().iter().collect(),
    };

    let title_width = lessons
        .iter()
        .map(|l| UnicodeWidthStr::width(l.title.as_str()))
        .max()
        .unwrap_or(0);
    let hawaiian_width = lessons
        .iter()
        .map(|l| {
            UnicodeWidthStr::width(l.title_hawaiian.as_deref().unwrap_or(""))
        })
        .max()
        .unwrap_or(0);

    for lesson in &lessons {
        let deck = if curriculum.content(lesson.id).is_some() {
            "deck"
        } else {
            "    "
        };
        println!(
            "{:>3}  {}  {}  {:<12}  {:<12}  {:>3} min  {:>4} pts  {}",
            lesson.id,
            pad(&lesson.title, title_width),
            pad(lesson.title_hawaiian.as_deref().unwrap_or(""), hawaiian_width),
            lesson.level.to_string(),
            lesson.category,
            lesson.duration_minutes,
            lesson.points,
            deck,
        );
    }
    println!();
    println!(
        "{} lessons, {} points total",
        lessons.len(),
        lessons.iter().map(|l| l.points).sum::<u32>()
    );
}

pub fn show(id: u32, with_deck: bool) {
    let curriculum = Curriculum::global();
    let Some(lesson) = curriculum.lesson(id) else {
        eprintln!("Error: unknown lesson id {id}");
        process::exit(1);
    };

    println!("Lesson {}: {}", lesson.id, lesson.title);
    if let Some(hawaiian) = &lesson.title_hawaiian {
        println!("  {hawaiian}");
    }
    println!("  {}", lesson.description);
    println!(
        "  level: {}  category: {}  duration: {} min  points: {}",
        lesson.level, lesson.category, lesson.duration_minutes, lesson.points
    );
    if !lesson.prerequisites.is_empty() {
        let prereqs: Vec<String> = lesson.prerequisites.iter().map(u32::to_string).collect();
        println!("  prerequisites: {}", prereqs.join(", "));
    }
    if let Some(note) = &lesson.cultural_note {
        println!("  cultural note: {note}");
    }

    if !with_deck {
        return;
    }

    match curriculum.content(id) {
        None => println!("\n(no slide deck authored yet)"),
        Some(deck) => {
            println!("\n{} slides:", deck.slides.len());
            for (i, slide) in deck.slides.iter().enumerate() {
                print!("{:>3}. ", i + 1);
                print_slide(slide);
            }
        }
    }
}

fn print_slide(slide: &Slide) {
    match slide {
        Slide::Intro { title, content, .. } => {
            println!("[intro] {title}");
            println!("       {content}");
        }
        Slide::Culture {
            title,
            content,
            cultural_note,
        } => {
            println!("[culture] {title}");
            println!("       {content}");
            if let Some(note) = cultural_note {
                println!("       note: {note}");
            }
        }
        Slide::Vocabulary {
            word,
            translation,
            pronunciation,
            example,
            example_translation,
            ..
        } => {
            print!("[vocab] {word}");
            if let Some(t) = translation {
                print!(" = {t}");
            }
            if let Some(p) = pronunciation {
                print!("  ({p})");
            }
            println!();
            if let Some(e) = example {
                print!("       e.g. {e}");
                if let Some(et) = example_translation {
                    print!(" ({et})");
                }
                println!();
            }
        }
        Slide::Grammar {
            grammar_point,
            explanation,
            examples,
        } => {
            println!("[grammar] {grammar_point}");
            println!("       {explanation}");
            for ex in examples {
                println!("       {} - {}", ex.hawaiian, ex.english);
            }
        }
        Slide::Practice {
            question, options, ..
        } => {
            println!("[practice] {question}");
            for (i, opt) in options.iter().enumerate() {
                println!("       {}. {opt}", i + 1);
            }
        }
        Slide::Complete { message, points } => {
            println!("[complete] {message} (+{points} pts)");
        }
    }
}
