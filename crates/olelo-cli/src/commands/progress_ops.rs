use std::path::Path;
use std::process;

use olelo_core::curriculum::Curriculum;
use olelo_core::progress::{format_epoch, now_epoch, ProgressStore};

use super::die;

pub fn show(file: &str) {
    let store = die!(
        ProgressStore::open(Path::new(file)),
        "Failed to open progress file {file}: {}"
    );
    let curriculum = Curriculum::global();

    if store.is_empty() {
        println!("No progress recorded yet.");
        return;
    }

    let completed = store.completed_ids();
    for id in &completed {
        let progress = store.get(*id).expect("completed id");
        let title = curriculum
            .lesson(*id)
            .map(|l| l.title.as_str())
            .unwrap_or("(unknown lesson)");
        let when = progress
            .completed_at
            .map(format_epoch)
            .unwrap_or_default();
        println!(
            "{id:>3}  {title}  best {}%  {} attempt(s)  {when}",
            progress.best_score, progress.attempts
        );
    }

    println!();
    println!(
        "Completed: {}/{} lessons ({:.0}%)",
        completed.len(),
        curriculum.lessons().len(),
        store.completion_fraction(curriculum) * 100.0
    );
    println!(
        "Points:    {}/{}",
        store.total_points(),
        curriculum.total_points()
    );

    let next: Vec<u32> = curriculum
        .lessons()
        .iter()
        .filter(|l| !completed.contains(&l.id) && curriculum.is_unlocked(l.id, &completed))
        .map(|l| l.id)
        .collect();
    if !next.is_empty() {
        let ids: Vec<String> = next.iter().map(u32::to_string).collect();
        println!("Unlocked:  {}", ids.join(", "));
    }
}

pub fn complete(file: &str, lesson_id: u32, score: u8) {
    let curriculum = Curriculum::global();
    let Some(lesson) = curriculum.lesson(lesson_id) else {
        eprintln!("Error: unknown lesson id {lesson_id}");
        process::exit(1);
    };

    let path = Path::new(file);
    let mut store = die!(
        ProgressStore::open(path),
        "Failed to open progress file {file}: {}"
    );

    let completed = store.completed_ids();
    if !curriculum.is_unlocked(lesson_id, &completed) {
        let missing: Vec<String> = lesson
            .prerequisites
            .iter()
            .filter(|p| !completed.contains(p))
            .map(u32::to_string)
            .collect();
        eprintln!(
            "Error: lesson {lesson_id} is locked (missing prerequisites: {})",
            missing.join(", ")
        );
        process::exit(1);
    }

    store.record_completion(lesson_id, score, lesson.points, now_epoch());
    die!(store.save(path), "Failed to save progress file {file}: {}");

    let progress = store.get(lesson_id).expect("just recorded");
    println!(
        "Recorded lesson {lesson_id} ({}): best {}%, {} attempt(s)",
        lesson.title, progress.best_score, progress.attempts
    );
}
