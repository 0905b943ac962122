pub mod curriculum;
pub mod ipa;
pub mod lexicon;
pub mod phonetic;
pub mod phonology;
pub mod progress;
pub mod pronounce;
pub mod syllable;
pub mod tips;

pub use ipa::ipa;
pub use phonetic::phonetic;
pub use pronounce::{pronounce, Pronunciation};
pub use syllable::split_syllables;
pub use tips::tips;
