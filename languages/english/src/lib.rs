pub mod dictionary;
pub mod lexicon;
pub mod sentence;
pub mod tagger;

pub use tagger::EnglishTagger;
