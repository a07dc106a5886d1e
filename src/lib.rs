//! # wikigen
//!
//! Generates a structured, footnoted HTML wiki page for a (possibly
//! fictional) historical event from a short free-text description,
//! using a text-generation API as the content source.
//!
//! ## Pipeline
//!
//! - One prompt-and-parse call extracts keyword lists for seven fixed
//!   categories (Overview, Background, Development, Outcome, Impact,
//!   Trivia, Media coverage)
//! - Seven independent prompt-and-generate calls expand each category
//!   into prose
//! - Bracketed terms and parenthesized asides in the prose become
//!   keyword spans and numbered footnotes
//! - The result is assembled into a single self-contained HTML document
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use wikigen::{Settings, generate_wiki, provider_for, write_page};
//!
//! let mut settings = Settings::default();
//! settings.api_key = "YOUR_API_KEY".to_string();
//!
//! let provider = provider_for(&settings).unwrap();
//! let html = generate_wiki(
//!     provider.as_ref(),
//!     "The Winter War of 1884",
//!     "A fictional war at the end of the 19th century involving several nations.",
//!     &settings,
//! )
//! .unwrap();
//! write_page(&html, Path::new("wiki.html")).unwrap();
//! ```

pub mod article;
pub mod category;
pub mod error;
pub mod html;
pub mod llm;
pub mod outline;
pub mod pipeline;
pub mod settings;

pub use article::ArticleSet;
pub use category::Category;
pub use error::{Error, Result};
pub use html::{render_page, write_page};
pub use llm::{GenerationParams, TextGenerator, provider_for};
pub use outline::EventOutline;
pub use pipeline::generate_wiki;
pub use settings::Settings;
