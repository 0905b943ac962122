use olelo_core::curriculum::Slide;

use super::make_test_lesson;
use crate::{LessonSession, SessionError};

#[test]
fn test_start_from_global_curriculum() {
    let session = LessonSession::start(1).unwrap();
    assert!(matches!(session.current(), Slide::Intro { .. }));
    let (index, total) = session.position();
    assert_eq!(index, 0);
    assert!(total > 1);
}

#[test]
fn test_start_unknown_lesson() {
    assert_eq!(
        LessonSession::start(999).unwrap_err(),
        SessionError::UnknownLesson(999)
    );
}

#[test]
fn test_start_lesson_without_content() {
    // Lesson 30 exists in the curriculum but ships no deck
    assert_eq!(
        LessonSession::start(30).unwrap_err(),
        SessionError::NoContent(30)
    );
}

#[test]
fn test_advance_clamps_at_end() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    for _ in 0..20 {
        session.advance();
    }
    let (index, total) = session.position();
    assert_eq!(index, total - 1);
    assert!(session.at_complete());
}

#[test]
fn test_back_clamps_at_start() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    session.back();
    assert_eq!(session.position().0, 0);
    session.advance();
    session.back();
    assert_eq!(session.position().0, 0);
}

#[test]
fn test_answer_on_non_practice_slide() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    assert_eq!(session.answer(0).unwrap_err(), SessionError::NotPractice);
}

#[test]
fn test_answer_out_of_range() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    session.advance();
    session.advance(); // first practice slide, 2 options
    assert_eq!(
        session.answer(5).unwrap_err(),
        SessionError::ChoiceOutOfRange {
            choice: 5,
            options: 2
        }
    );
}

#[test]
fn test_answer_feedback_and_single_attempt() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    session.advance();
    session.advance();

    let feedback = session.answer(1).unwrap();
    assert!(!feedback.correct);
    assert_eq!(feedback.correct_answer, 0);

    // Second attempt is rejected and the wrong first answer stands
    assert_eq!(session.answer(0).unwrap_err(), SessionError::AlreadyAnswered);
    assert_eq!(session.correct_count(), 0);
    assert_eq!(session.answered_count(), 1);
}

#[test]
fn test_full_run_scoring() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);

    session.advance(); // vocabulary
    session.advance(); // Q1
    assert!(session.answer(0).unwrap().correct);
    session.advance(); // Q2
    assert!(session.answer(2).unwrap().correct);
    session.advance(); // Q3
    assert!(!session.answer(0).unwrap().correct);

    assert!(session.finish().is_none());
    let response = session.advance(); // complete
    let result = response.result.expect("at complete slide");
    assert_eq!(result.lesson_id, 42);
    assert_eq!(result.total_questions, 3);
    assert_eq!(result.correct, 2);
    assert_eq!(result.score_percent, 66);
    assert_eq!(result.points_earned, 100);
}

#[test]
fn test_skipped_questions_score_zero() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    for _ in 0..deck.slides.len() {
        session.advance();
    }
    let result = session.finish().unwrap();
    assert_eq!(result.correct, 0);
    assert_eq!(result.score_percent, 0);
}

#[test]
fn test_restart_clears_answers() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    session.advance();
    session.advance();
    session.answer(0).unwrap();

    session.restart();
    assert_eq!(session.position().0, 0);
    assert_eq!(session.answered_count(), 0);
    // The question is answerable again after restart
    session.advance();
    session.advance();
    assert!(session.answer(0).is_ok());
}

#[test]
fn test_progress_fraction_monotonic() {
    let (lesson, deck) = make_test_lesson();
    let mut session = LessonSession::with_content(&lesson, &deck);
    let mut last = session.progress_fraction();
    for _ in 0..deck.slides.len() {
        session.advance();
        let now = session.progress_fraction();
        assert!(now >= last);
        last = now;
    }
    assert!((last - 1.0).abs() < 1e-9);
}
