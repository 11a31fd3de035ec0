//! Roppou resolver - Resolve Japanese statute citations to article text.
//!
//! This crate takes a free-text citation such as `民法709条` or
//! `憲法第二一条`, works out which law and article it names, and fetches the
//! article text from the e-Gov law API.
//!
//! # Example
//!
//! ```
//! use roppou_resolver::{citation, numeral};
//!
//! let parsed = citation::parse("民法第７０９条").unwrap();
//! assert_eq!(parsed.law_name_candidate, "民法");
//!
//! let article = numeral::normalize(&parsed.raw_article_token).unwrap();
//! assert_eq!(article.to_string(), "709");
//! ```
//!
//! # Architecture
//!
//! - [`numeral`]: Article number normalization
//! - [`citation`]: Citation parsing
//! - [`registry`]: Law name to law id lookup
//! - [`adapter`]: Extraction from the API's document shapes
//! - [`source`]: Law data sources (HTTP and test doubles)
//! - [`resolver`]: The tiered resolution pipeline
//! - [`reply`]: Reply text for each outcome
//! - [`config`]: Configuration constants, environment and URL builders
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client helpers
//! - [`xml`]: XML utilities
//! - [`types`]: Shared data types
//! - [`cli`]: Command-line interface

pub mod adapter;
pub mod citation;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod numeral;
pub mod registry;
pub mod reply;
pub mod resolver;
pub mod source;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use config::ResolverConfig;
pub use error::{ResolverError, Result};
pub use registry::{LawRegistry, RegistryEntry};
pub use reply::ReplyFormatter;
pub use resolver::Resolver;
pub use source::{HttpLawSource, LawSource};
pub use types::{ArticleText, ResolutionOutcome, SourceTier};
