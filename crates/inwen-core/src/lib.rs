pub mod language;
pub mod preprocess;
pub mod selection;

pub use language::{Tag, Tagger, Term};
pub use preprocess::{BlockTextPreprocessor, Preprocessor};
pub use selection::{Rejection, Selection, SelectionValidator};
