//! The text generator trait every model backend implements.
//!
//! The engine only ever sees this seam: one request in, raw reply text out.
//! Everything provider-specific (wire format, endpoints, auth headers) stays
//! behind it, which is also what makes the engine testable with fakes.

use crate::error::Result;
use crate::request::GenerationRequest;
use async_trait::async_trait;
use std::time::Duration;

/// Trait that all model backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Arc<dyn TextGenerator>` for dynamic dispatch).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Check whether the backend is configured and could accept a request.
    async fn is_available(&self) -> bool;

    /// Run one generation call and return the raw reply text.
    ///
    /// The reply is returned untrimmed and undecoded; whether it satisfies
    /// the blueprint contract is the caller's concern.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Per-request timeout for this backend.
    fn timeout(&self) -> Duration;
}
