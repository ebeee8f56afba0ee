//! Model traits

use super::types::{CompletionError, CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// The single capability the chat service needs from an upstream provider:
/// attempt one completion against one model.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

#[async_trait]
impl<C> CompletionClient for Arc<C>
where
    C: CompletionClient + ?Sized,
{
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        (**self).complete(request).await
    }
}
