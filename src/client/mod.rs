//! HTTP client module.
//!
//! This module provides the async client for executing Freshdesk API
//! requests with Basic-auth handling and tracing instrumentation.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use freshdesk::Freshdesk;
//! use freshdesk::api::tickets::ListTicketsQuery;
//!
//! let client = Freshdesk::new("https://yourcompany.freshdesk.com", "api-key")?;
//!
//! let query = ListTicketsQuery {
//!     company_id: Some(7),
//!     ..Default::default()
//! };
//! let tickets = client.list_tickets(&query).await?;
//! ```

mod executor;

pub use executor::{Freshdesk, FreshdeskBuilder};
