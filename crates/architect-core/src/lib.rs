//! Architect Core - Embeddable prompt blueprint library.
//!
//! Architect turns a raw idea and/or one media attachment into a structured
//! prompt blueprint (analysis, optimized prompt, pro tip) through a single
//! structured generation call against Gemini.
//!
//! # Architecture
//!
//! One request, one call, one decoded blueprint:
//!
//! ```text
//! Idea/Media → Credential → Validate → Build Request → Generate → Decode → Blueprint
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use architect_core::{Architect, Category, Config};
//!
//! #[tokio::main]
//! async fn main() -> architect_core::Result<()> {
//!     let config = Config::load()?;
//!     let architect = Architect::from_config(&config);
//!
//!     let blueprint = architect
//!         .architect(Category::Image, "a lighthouse at dusk", None)
//!         .await?;
//!     println!("{}", blueprint.optimized_prompt);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod architect;
pub mod config;
pub mod credentials;
pub mod error;
pub mod export;
pub mod llm;
pub mod media;
pub mod parse;
pub mod request;
pub mod schema;
pub mod session;
pub mod types;

// Re-exports for convenient access
pub use architect::Architect;
pub use config::Config;
pub use credentials::{CredentialSource, EnvCredential, StaticCredential};
pub use error::{ArchitectError, ConfigError, Result};
pub use export::{render_export, ExportFormat};
pub use session::{Phase, Session};
pub use types::{ArchitectResult, Category, MediaAttachment, MediaKind};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
