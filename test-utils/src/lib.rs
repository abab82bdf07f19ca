//! Warboard Test Utils
//!
//! Provides shared testing utilities for the warboard bot. The Clash of Clans API is
//! never contacted in tests; instead this crate builds the JSON payloads the API would
//! return so tests can deserialize them into the bot's models or feed them to an
//! in-memory API implementation.
//!
//! # Overview
//!
//! - **factory**: Builders for `currentwar`, `warlog` and `players` payloads
//! - **TestContext**: Scratch directory for tests touching the filesystem
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::war::WarFactory;
//!
//! #[tokio::test]
//! async fn test_in_war() {
//!     let payload = WarFactory::in_war(Utc::now()).ends_in_hours(1.0).build();
//!     let war: War = serde_json::from_value(payload).unwrap();
//!     // ...
//! }
//! ```

pub mod context;
pub mod error;
pub mod factory;
