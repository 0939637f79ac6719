//! Generative model integration
//!
//! The itinerary service talks to the model through [`GenerativeModel`], so
//! the HTTP transport and vendor payloads stay in the implementing client.

pub mod vertex;

pub use vertex::VertexModel;

use async_trait::async_trait;

/// A hosted model that answers a prompt with JSON text
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one prompt, asking for `application/json` output, and return the
    /// text of the first candidate. Each call is independent.
    async fn generate_json(&self, prompt: &str) -> crate::Result<String>;
}
