use serde::Serialize;

use olelo_core::curriculum::Slide;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown lesson id: {0}")]
    UnknownLesson(u32),
    #[error("no slide content for lesson {0}")]
    NoContent(u32),
    #[error("current slide is not a practice question")]
    NotPractice,
    #[error("choice {choice} out of range for {options} options")]
    ChoiceOutOfRange { choice: usize, options: usize },
    #[error("this question was already answered")]
    AlreadyAnswered,
}

/// Outcome of one answered practice slide. Only first answers are kept.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnswerOutcome {
    pub correct: bool,
}

/// Feedback for an answer, for immediate display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub chosen: usize,
    pub correct_answer: usize,
}

/// Response to a cursor movement: the slide now in view plus position, and
/// the run result once the complete slide is reached.
#[derive(Debug)]
pub struct StepResponse<'a> {
    pub slide: &'a Slide,
    pub index: usize,
    pub total: usize,
    pub result: Option<LessonResult>,
}

/// Result of a finished lesson run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonResult {
    pub lesson_id: u32,
    pub total_questions: usize,
    pub correct: usize,
    /// Percentage of practice questions answered correctly on first try.
    pub score_percent: u8,
    pub points_earned: u32,
}
