//! Endpoint discovery contract and the static multi-server implementation.
//!
//! A [`Discovery`] knows which server endpoints exist and which one a caller
//! should use next. [`MultiServerDiscovery`] is backed by an explicit list
//! supplied by the caller; there is no registry behind it.
//!
//! # Example
//!
//! ```
//! use rpc_lb_discovery::{Discovery, MultiServerDiscovery, SelectMode};
//!
//! let discovery = MultiServerDiscovery::new(vec!["a:1".into(), "b:2".into()]);
//!
//! let first = discovery.get(SelectMode::RoundRobin)?;
//! let second = discovery.get(SelectMode::RoundRobin)?;
//! assert_ne!(first, second);
//!
//! discovery.update(vec!["x:1".into()])?;
//! assert_eq!(discovery.get(SelectMode::Random)?, "x:1");
//! # Ok::<(), rpc_lb_discovery::Error>(())
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::mode::SelectMode;

/// Capability set every endpoint source implements.
///
/// The static list is the only implementation shipped here. A registry-backed
/// source would implement the same operations with [`refresh`](Self::refresh)
/// querying the registry.
pub trait Discovery: Send + Sync {
    /// Re-synchronizes the endpoint list from the authoritative source.
    ///
    /// # Errors
    ///
    /// Implementations backed by a remote registry return an error when the
    /// registry cannot be reached.
    fn refresh(&self) -> Result<()>;

    /// Atomically replaces the endpoint list. An empty list is legal.
    ///
    /// # Errors
    ///
    /// Implementations may reject the list; the static list never does.
    fn update(&self, servers: Vec<String>) -> Result<()>;

    /// Returns one endpoint chosen according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEndpointsAvailable`] when the list is empty.
    fn get(&self, mode: SelectMode) -> Result<String>;

    /// Returns a snapshot copy of the current endpoint list.
    ///
    /// # Errors
    ///
    /// Implementations backed by a remote registry may fail to produce a list.
    fn get_all(&self) -> Result<Vec<String>>;
}

impl<D: Discovery + ?Sized> Discovery for Arc<D> {
    fn refresh(&self) -> Result<()> {
        (**self).refresh()
    }

    fn update(&self, servers: Vec<String>) -> Result<()> {
        (**self).update(servers)
    }

    fn get(&self, mode: SelectMode) -> Result<String> {
        (**self).get(mode)
    }

    fn get_all(&self) -> Result<Vec<String>> {
        (**self).get_all()
    }
}

/// Configuration for a [`MultiServerDiscovery`].
#[derive(Clone, Debug, Default)]
pub struct DiscoveryConfig {
    /// The initial endpoint list.
    pub endpoints: Vec<String>,

    /// Fixed seed for the random source.
    /// If `None`, the random source is seeded from OS entropy.
    pub seed: Option<u64>,
}

impl DiscoveryConfig {
    /// Creates a new configuration with the given initial endpoints.
    #[must_use]
    pub fn new<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            endpoints: endpoints.into_iter().map(Into::into).collect(),
            seed: None,
        }
    }

    /// Sets a fixed seed so selection sequences are reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl From<Vec<String>> for DiscoveryConfig {
    fn from(endpoints: Vec<String>) -> Self {
        Self::new(endpoints)
    }
}

/// State guarded by the discovery lock.
///
/// The list, cursor and random source form one unit: the cursor is read
/// modulo the list length and neither the cursor nor the RNG may be touched
/// concurrently.
#[derive(Debug)]
struct State {
    servers: Vec<String>,
    cursor: usize,
    rng: StdRng,
}

impl State {
    fn select(&mut self, mode: SelectMode) -> Result<String> {
        let n = self.servers.len();
        if n == 0 {
            return Err(Error::NoEndpointsAvailable);
        }

        let position = match mode {
            SelectMode::Random => self.rng.gen_range(0..n),
            SelectMode::RoundRobin => {
                let position = self.cursor % n;
                self.cursor = (position + 1) % n;
                position
            }
        };

        Ok(self.servers[position].clone())
    }
}

/// Discovery over an explicit list of servers, with no registry behind it.
///
/// All operations run under a single lock and never block on I/O, so the
/// instance can be shared freely between threads (wrap it in an [`Arc`]).
#[derive(Debug)]
pub struct MultiServerDiscovery {
    state: Mutex<State>,
}

impl MultiServerDiscovery {
    /// Creates a discovery over `servers` with an entropy-seeded random source.
    #[must_use]
    pub fn new(servers: Vec<String>) -> Self {
        Self::with_config(DiscoveryConfig::new(servers))
    }

    /// Creates a discovery from a [`DiscoveryConfig`].
    ///
    /// The round-robin cursor starts at a random position so instances created
    /// together do not rotate in lockstep.
    #[must_use]
    pub fn with_config(config: DiscoveryConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cursor: usize = rng.r#gen();

        tracing::debug!(
            "created static discovery with {} endpoints",
            config.endpoints.len()
        );

        Self {
            state: Mutex::new(State {
                servers: config.endpoints,
                cursor,
                rng,
            }),
        }
    }

    /// Returns one endpoint using a raw numeric mode (`0` random, `1` round-robin).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSelectionMode`] for any other code, whatever
    /// the list holds, and [`Error::NoEndpointsAvailable`] when the list is empty.
    pub fn get_by_code(&self, code: i32) -> Result<String> {
        let mode = SelectMode::try_from(code)?;
        self.get(mode)
    }

    /// Returns the number of endpoints currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().servers.len()
    }

    /// Returns `true` if no endpoints are currently held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().servers.is_empty()
    }
}

impl Default for MultiServerDiscovery {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: Into<String>> FromIterator<S> for MultiServerDiscovery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::with_config(DiscoveryConfig::new(iter))
    }
}

impl Discovery for MultiServerDiscovery {
    /// No registry backs a static list, so there is nothing to refresh.
    fn refresh(&self) -> Result<()> {
        Ok(())
    }

    fn update(&self, servers: Vec<String>) -> Result<()> {
        let mut state = self.state.lock();

        tracing::debug!(
            "updating static discovery: {} -> {} endpoints",
            state.servers.len(),
            servers.len()
        );

        state.servers = servers;
        Ok(())
    }

    fn get(&self, mode: SelectMode) -> Result<String> {
        let selected = self.state.lock().select(mode)?;
        tracing::trace!("selected endpoint {selected} ({mode})");
        Ok(selected)
    }

    fn get_all(&self) -> Result<Vec<String>> {
        Ok(self.state.lock().servers.clone())
    }
}
