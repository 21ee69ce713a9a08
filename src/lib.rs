//! Async client for the Freshdesk helpdesk REST API (v2).
//!
//! Every endpoint of the v2 API is a method on [`Freshdesk`]; every method
//! builds a [`Request`] descriptor and forwards it through one shared
//! executor that handles Basic auth, query-string assembly, JSON bodies,
//! and status-to-error mapping. There is no state between calls: no
//! retries, no caching, no pagination engine.
//!
//! ## Features
//!
//! - **Typed endpoint surface**: serde models for tickets, contacts,
//!   agents, companies, groups, time entries, the knowledge base, and more
//! - **Async-first HTTP client**: built on `reqwest` with `tokio`
//! - **Layered error handling**: transport errors carry no HTTP status,
//!   API rejections carry the exact status plus the server's message
//! - **Escape hatch**: [`Freshdesk::execute`] accepts hand-built
//!   [`Request`] descriptors for endpoints without a dedicated method
//!
//! ## Example
//!
//! ```rust,ignore
//! use freshdesk::Freshdesk;
//! use freshdesk::api::tickets::CreateTicket;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), freshdesk::FreshdeskError> {
//!     let client = Freshdesk::new("https://yourcompany.freshdesk.com", "api-key")?;
//!
//!     let ticket = client
//!         .create_ticket(&CreateTicket {
//!             email: Some("user@example.com".into()),
//!             subject: Some("Printer on fire".into()),
//!             description: Some("<p>It is quite warm.</p>".into()),
//!             status: Some(2),
//!             priority: Some(4),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("created ticket {}", ticket.id);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod method;
pub mod request;

// Re-exports for convenience
pub use auth::Credential;
pub use client::{Freshdesk, FreshdeskBuilder};
pub use error::{ClientError, ConfigError, FieldError, FreshdeskError, ValidationError};
pub use method::RestMethod;
pub use request::Request;
