#![deny(missing_docs)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Client-side endpoint discovery and selection for RPC load balancing.
//!
//! An RPC client that can talk to any of several interchangeable servers needs
//! to decide which one to use for the next call. This crate keeps that
//! decision out of the client: a [`Discovery`] holds the candidate endpoints
//! and picks one per call under a [`SelectMode`] policy.
//!
//! # Features
//!
//! - **Static multi-server discovery**: an explicit, replaceable endpoint list
//! - **Selection policies**: uniform-random and round-robin
//! - **Thread-safe**: one instance can serve any number of concurrent callers
//!
//! # Usage
//!
//! ```
//! use rpc_lb_discovery::{Discovery, MultiServerDiscovery, SelectMode};
//!
//! let discovery = MultiServerDiscovery::new(vec![
//!     "10.0.0.1:9999".to_string(),
//!     "10.0.0.2:9999".to_string(),
//! ]);
//!
//! // Pick an endpoint for the next call, then dial it with your transport.
//! let addr = discovery.get(SelectMode::RoundRobin)?;
//! assert!(addr.starts_with("10.0.0."));
//!
//! // Replace the list when configuration changes.
//! discovery.update(vec!["10.0.0.3:9999".to_string()])?;
//! assert_eq!(discovery.get_all()?, vec!["10.0.0.3:9999".to_string()]);
//! # Ok::<(), rpc_lb_discovery::Error>(())
//! ```

mod discovery;
mod error;
mod mode;

pub use discovery::{Discovery, DiscoveryConfig, MultiServerDiscovery};
pub use error::{Error, Result};
pub use mode::SelectMode;
