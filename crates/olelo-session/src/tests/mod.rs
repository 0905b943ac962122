mod basic;

use olelo_core::curriculum::{Lesson, LessonContent, Level, Slide};

/// A small three-question deck exercising every slide type.
pub(crate) fn make_test_lesson() -> (Lesson, LessonContent) {
    let lesson = Lesson {
        id: 42,
        title: "Test Lesson".to_string(),
        title_hawaiian: None,
        description: "test".to_string(),
        level: Level::Beginner,
        category: "Test".to_string(),
        duration_minutes: 5,
        points: 100,
        prerequisites: vec![],
        cultural_note: None,
    };
    let deck = LessonContent {
        lesson: 42,
        title: "Test Lesson".to_string(),
        slides: vec![
            Slide::Intro {
                title: "Intro".to_string(),
                content: "Welcome".to_string(),
                image: None,
            },
            Slide::Vocabulary {
                word: "aloha".to_string(),
                translation: Some("hello".to_string()),
                pronunciation: Some("ah-LOH-hah".to_string()),
                example: None,
                example_translation: None,
                cultural_note: None,
            },
            Slide::Practice {
                question: "Q1".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer: 0,
            },
            Slide::Practice {
                question: "Q2".to_string(),
                options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                correct_answer: 2,
            },
            Slide::Practice {
                question: "Q3".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer: 1,
            },
            Slide::Complete {
                message: "done".to_string(),
                points: 100,
            },
        ],
    };
    (lesson, deck)
}
