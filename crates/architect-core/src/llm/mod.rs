//! Model access: the generator seam and the Gemini implementation.

pub mod gemini;
pub mod provider;

pub use gemini::GeminiModel;
pub use provider::TextGenerator;
