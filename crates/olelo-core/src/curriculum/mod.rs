//! The lesson curriculum: metadata for every lesson plus slide decks for
//! interactive lessons. Static data loaded from embedded TOML, the same
//! OnceLock pattern as the rule table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRICULUM_TOML: &str = include_str!("default_curriculum.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(format!(
                "unknown level {other:?} (expected beginner, intermediate, or advanced)"
            )),
        }
    }
}

/// Lesson metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub title_hawaiian: Option<String>,
    pub description: String,
    pub level: Level,
    pub category: String,
    pub duration_minutes: u32,
    pub points: u32,
    #[serde(default)]
    pub prerequisites: Vec<u32>,
    #[serde(default)]
    pub cultural_note: Option<String>,
}

/// One slide of an interactive lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Intro {
        title: String,
        content: String,
        #[serde(default)]
        image: Option<String>,
    },
    Culture {
        title: String,
        content: String,
        #[serde(default)]
        cultural_note: Option<String>,
    },
    Vocabulary {
        word: String,
        #[serde(default)]
        translation: Option<String>,
        #[serde(default)]
        pronunciation: Option<String>,
        #[serde(default)]
        example: Option<String>,
        #[serde(default)]
        example_translation: Option<String>,
        #[serde(default)]
        cultural_note: Option<String>,
    },
    Grammar {
        grammar_point: String,
        explanation: String,
        #[serde(default)]
        examples: Vec<GrammarExample>,
    },
    Practice {
        question: String,
        options: Vec<String>,
        correct_answer: usize,
    },
    Complete {
        message: String,
        points: u32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarExample {
    pub hawaiian: String,
    pub english: String,
}

/// A lesson's full slide deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonContent {
    pub lesson: u32,
    pub title: String,
    pub slides: Vec<Slide>,
}

impl LessonContent {
    /// Number of practice slides in the deck.
    pub fn question_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|s| matches!(s, Slide::Practice { .. }))
            .count()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CurriculumError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no lessons defined")]
    Empty,
    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(u32),
    #[error("lesson {lesson} lists unknown prerequisite {prerequisite}")]
    UnknownPrerequisite { lesson: u32, prerequisite: u32 },
    #[error("lesson {0} lists itself as a prerequisite")]
    SelfPrerequisite(u32),
    #[error("deck references unknown lesson {0}")]
    UnknownDeckLesson(u32),
    #[error("duplicate deck for lesson {0}")]
    DuplicateDeck(u32),
    #[error("deck for lesson {0} has no slides")]
    EmptyDeck(u32),
    #[error("deck for lesson {0} does not end with a complete slide")]
    NoCompleteSlide(u32),
    #[error("deck for lesson {lesson}, slide {slide}: answer index {answer} out of range for {options} options")]
    AnswerOutOfRange {
        lesson: u32,
        slide: usize,
        answer: usize,
        options: usize,
    },
    #[error("curriculum already initialized")]
    AlreadyInitialized,
}

#[derive(Deserialize)]
struct CurriculumConfig {
    lessons: Vec<Lesson>,
    #[serde(default)]
    decks: Vec<LessonContent>,
}

#[derive(Debug)]
pub struct Curriculum {
    lessons: Vec<Lesson>,
    decks: HashMap<u32, LessonContent>,
}

impl Curriculum {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), CurriculumError> {
        parse_curriculum_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| CurriculumError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Curriculum {
        static INSTANCE: OnceLock<Curriculum> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_CURRICULUM_TOML);
            parse_curriculum_toml(toml_str).expect("curriculum TOML must be valid")
        })
    }

    /// All lessons, in curriculum order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lesson(&self, id: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// Slide deck for a lesson, when content has been authored.
    pub fn content(&self, id: u32) -> Option<&LessonContent> {
        self.decks.get(&id)
    }

    pub fn by_level(&self, level: Level) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter().filter(move |l| l.level == level)
    }

    /// Whether a lesson's prerequisites are all among `completed`.
    pub fn is_unlocked(&self, id: u32, completed: &[u32]) -> bool {
        match self.lesson(id) {
            Some(lesson) => lesson
                .prerequisites
                .iter()
                .all(|p| completed.contains(p)),
            None => false,
        }
    }

    /// Sum of points across all lessons.
    pub fn total_points(&self) -> u32 {
        self.lessons.iter().map(|l| l.points).sum()
    }
}

/// Parse and validate curriculum TOML.
pub fn parse_curriculum_toml(toml_str: &str) -> Result<Curriculum, CurriculumError> {
    let config: CurriculumConfig =
        toml::from_str(toml_str).map_err(|e| CurriculumError::Parse(e.to_string()))?;

    if config.lessons.is_empty() {
        return Err(CurriculumError::Empty);
    }

    let mut ids = std::collections::HashSet::new();
    for lesson in &config.lessons {
        if !ids.insert(lesson.id) {
            return Err(CurriculumError::DuplicateLesson(lesson.id));
        }
    }

    for lesson in &config.lessons {
        for &p in &lesson.prerequisites {
            if p == lesson.id {
                return Err(CurriculumError::SelfPrerequisite(lesson.id));
            }
            if !ids.contains(&p) {
                return Err(CurriculumError::UnknownPrerequisite {
                    lesson: lesson.id,
                    prerequisite: p,
                });
            }
        }
    }

    let mut decks = HashMap::new();
    for deck in config.decks {
        if !ids.contains(&deck.lesson) {
            return Err(CurriculumError::UnknownDeckLesson(deck.lesson));
        }
        if deck.slides.is_empty() {
            return Err(CurriculumError::EmptyDeck(deck.lesson));
        }
        if !matches!(deck.slides.last(), Some(Slide::Complete { .. })) {
            return Err(CurriculumError::NoCompleteSlide(deck.lesson));
        }
        for (i, slide) in deck.slides.iter().enumerate() {
            if let Slide::Practice {
                options,
                correct_answer,
                ..
            } = slide
            {
                if *correct_answer >= options.len() {
                    return Err(CurriculumError::AnswerOutOfRange {
                        lesson: deck.lesson,
                        slide: i,
                        answer: *correct_answer,
                        options: options.len(),
                    });
                }
            }
        }
        let id = deck.lesson;
        if decks.insert(id, deck).is_some() {
            return Err(CurriculumError::DuplicateDeck(id));
        }
    }

    Ok(Curriculum {
        lessons: config.lessons,
        decks,
    })
}
