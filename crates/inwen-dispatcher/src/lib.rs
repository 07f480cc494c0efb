pub mod client;
pub mod dispatcher;
pub mod error;
pub mod normalize;

pub use client::{WebhookClient, WebhookPayload};
pub use dispatcher::{LookupDispatcher, ProviderConfig};
pub use error::{LookupError, LookupErrorKind};

use inwen_types::{Explanation, LookupRequest};

/// Turns a lookup request into an explanation.
///
/// Implementations return exactly one outcome per call and never retry.
#[async_trait::async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, request: LookupRequest) -> Result<Explanation, LookupError>;
}
