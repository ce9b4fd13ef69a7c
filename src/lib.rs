//! # nagiosxi - Nagios XI REST API client for Rust
//!
//! A typed client for managing Nagios XI configuration objects over the
//! REST API: create, read, update and delete operations plus the
//! "apply configuration" step that commits pending changes and restarts
//! the monitoring core.
//!
//! ## Features
//!
//! - Typed configuration records encoded as URL-encoded form fields
//! - Correct handling of the server's success/error envelope, which is
//!   returned inside 200-OK responses regardless of outcome
//! - Fully percent-encoded URLs, including object identifiers with spaces
//! - Distinct error types for transport failures, API-reported errors and
//!   missing objects
//!
//! ## Basic Usage
//!
//! ```no_run
//! use nagiosxi::{Client, Host};
//!
//! fn main() -> Result<(), nagiosxi::NagiosError> {
//!     let client = Client::new("https://nagios.example.com", "api-token");
//!
//!     let host = Host {
//!         host_name: "host1".to_string(),
//!         address: "127.0.0.1".to_string(),
//!         max_check_attempts: "5".to_string(),
//!         check_period: "24x7".to_string(),
//!         notification_interval: "10".to_string(),
//!         notification_period: "24x7".to_string(),
//!         contacts: Some(vec!["nagiosadmin".to_string()]),
//!         templates: Some(vec!["generic-host".to_string()]),
//!         ..Host::default()
//!     };
//!
//!     client.create_host(&host)?;
//!
//!     let fetched = client.get_host("host1")?;
//!     println!("monitoring {} at {}", fetched.host_name, fetched.address);
//!
//!     client.delete_host("host1")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The server reports application errors inside the response body, so the
//! HTTP status alone is never trusted. A missing object is distinguishable
//! from other failures:
//!
//! ```no_run
//! use nagiosxi::Client;
//!
//! let client = Client::new("https://nagios.example.com", "api-token");
//!
//! match client.get_host("host1") {
//!     Ok(host) => println!("found {}", host.host_name),
//!     Err(e) if e.is_not_found() => println!("no such host"),
//!     Err(e) => eprintln!("request failed: {}", e),
//! }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod host;
pub mod params;
pub mod response;

// Re-export main types for convenience
pub use client::Client;
pub use endpoint::{build_url, Category};
pub use error::{NagiosError, Result};
pub use host::Host;
pub use params::{Params, ToParams};
pub use response::Envelope;
