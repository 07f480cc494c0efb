pub mod message;
pub mod types;

pub use message::{LookupReply, LookupResponse, PageMessage, Sequence};
pub use types::{Explanation, LookupRequest, Provider, WordPair};
