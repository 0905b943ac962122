//! Stateful lesson session managing the slide walk, quiz answers, and
//! scoring.
//!
//! `LessonSession` owns the cursor into a lesson's slide deck and processes
//! each learner action, returning responses that a rendering frontend
//! translates into display updates. The session itself performs no I/O;
//! callers persist results through `olelo_core::progress`.

pub(crate) mod types;

#[cfg(test)]
mod tests;

use olelo_core::curriculum::{Curriculum, Lesson, LessonContent, Slide};

pub use types::{AnswerFeedback, LessonResult, SessionError, StepResponse};

use types::AnswerOutcome;

/// Stateful walk through one lesson's slide deck.
#[derive(Debug)]
pub struct LessonSession<'a> {
    lesson: &'a Lesson,
    deck: &'a LessonContent,
    cursor: usize,
    /// Parallel to the deck's slides; `Some` only at answered practice slides.
    answers: Vec<Option<AnswerOutcome>>,
}

impl LessonSession<'static> {
    /// Start a session for a lesson in the global curriculum.
    pub fn start(lesson_id: u32) -> Result<Self, SessionError> {
        let curriculum = Curriculum::global();
        let lesson = curriculum
            .lesson(lesson_id)
            .ok_or(SessionError::UnknownLesson(lesson_id))?;
        let deck = curriculum
            .content(lesson_id)
            .ok_or(SessionError::NoContent(lesson_id))?;
        Ok(LessonSession::with_content(lesson, deck))
    }
}

impl<'a> LessonSession<'a> {
    /// Build a session over explicit lesson data. Deck validation (non-empty,
    /// terminal complete slide) has already happened at curriculum load.
    pub fn with_content(lesson: &'a Lesson, deck: &'a LessonContent) -> Self {
        Self {
            lesson,
            deck,
            cursor: 0,
            answers: vec![None; deck.slides.len()],
        }
    }

    pub fn lesson(&self) -> &Lesson {
        self.lesson
    }

    pub fn current(&self) -> &Slide {
        &self.deck.slides[self.cursor]
    }

    /// (current index, slide count).
    pub fn position(&self) -> (usize, usize) {
        (self.cursor, self.deck.slides.len())
    }

    /// Fraction of the deck seen so far, 0.0..=1.0.
    pub fn progress_fraction(&self) -> f64 {
        (self.cursor + 1) as f64 / self.deck.slides.len() as f64
    }

    pub fn at_complete(&self) -> bool {
        matches!(self.current(), Slide::Complete { .. })
    }

    /// Move to the next slide, clamping at the end of the deck.
    pub fn advance(&mut self) -> StepResponse<'_> {
        if self.cursor + 1 < self.deck.slides.len() {
            self.cursor += 1;
            tracing::debug!(lesson = self.lesson.id, cursor = self.cursor, "advance");
        }
        self.step_response()
    }

    /// Move to the previous slide, clamping at the start.
    pub fn back(&mut self) -> StepResponse<'_> {
        self.cursor = self.cursor.saturating_sub(1);
        tracing::debug!(lesson = self.lesson.id, cursor = self.cursor, "back");
        self.step_response()
    }

    /// Answer the current practice slide.
    ///
    /// Only the first answer per slide counts toward the score; answering
    /// again is an error so the frontend can't farm retries.
    pub fn answer(&mut self, choice: usize) -> Result<AnswerFeedback, SessionError> {
        let Slide::Practice {
            options,
            correct_answer,
            ..
        } = self.current()
        else {
            return Err(SessionError::NotPractice);
        };
        if choice >= options.len() {
            return Err(SessionError::ChoiceOutOfRange {
                choice,
                options: options.len(),
            });
        }
        if self.answers[self.cursor].is_some() {
            return Err(SessionError::AlreadyAnswered);
        }

        let correct = choice == *correct_answer;
        let correct_answer = *correct_answer;
        self.answers[self.cursor] = Some(AnswerOutcome { correct });
        tracing::debug!(
            lesson = self.lesson.id,
            cursor = self.cursor,
            correct,
            "answer"
        );
        Ok(AnswerFeedback {
            correct,
            chosen: choice,
            correct_answer,
        })
    }

    /// Number of practice slides answered so far.
    pub fn answered_count(&self) -> usize {
        self.answers.iter().flatten().count()
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().flatten().filter(|a| a.correct).count()
    }

    /// Quiz score as a percentage of the deck's practice slides. A deck with
    /// no questions scores 100.
    pub fn score_percent(&self) -> u8 {
        let total = self.deck.question_count();
        if total == 0 {
            return 100;
        }
        (self.correct_count() * 100 / total) as u8
    }

    /// Result of the run, available once the complete slide is reached.
    pub fn finish(&self) -> Option<LessonResult> {
        let Slide::Complete { points, .. } = self.current() else {
            return None;
        };
        Some(LessonResult {
            lesson_id: self.lesson.id,
            total_questions: self.deck.question_count(),
            correct: self.correct_count(),
            score_percent: self.score_percent(),
            points_earned: *points,
        })
    }

    /// Reset the cursor and all recorded answers.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.answers = vec![None; self.deck.slides.len()];
        tracing::debug!(lesson = self.lesson.id, "restart");
    }

    fn step_response(&self) -> StepResponse<'_> {
        StepResponse {
            slide: self.current(),
            index: self.cursor,
            total: self.deck.slides.len(),
            result: self.finish(),
        }
    }
}
