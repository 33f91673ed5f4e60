//! Keyed client registry.
//!
//! Provider adapters cache one configured client per API key. The registry
//! stores clients behind a SHA-256 fingerprint of the key, hands out shared
//! handles, and tears down only when explicitly released or drained. There
//! is no finalizer-based cleanup: callers run their own shutdown on the
//! handles they get back.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sha2::{Digest, Sha256};
use tracing::debug;

/// Hex length of the stored key fingerprint.
const FINGERPRINT_LEN: usize = 16;

/// Computes the fingerprint under which a client is cached.
///
/// Raw API keys are never stored; only this prefix of their SHA-256 digest.
fn fingerprint(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    let digest = hasher.finalize();

    digest
        .iter()
        .take(FINGERPRINT_LEN / 2)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Registry of per-key clients with an explicit lifecycle.
///
/// [`acquire_with`](Self::acquire_with) gets or creates,
/// [`release`](Self::release) removes one entry, and
/// [`drain`](Self::drain) removes everything, returning the clients so the
/// caller can run provider-specific shutdown. The client type is opaque to
/// the registry.
///
/// # Examples
///
/// ```
/// use jsonsieve::registry::ClientRegistry;
///
/// struct FakeClient {
///     base_url: String,
/// }
///
/// let registry = ClientRegistry::new();
/// let client = registry.acquire_with("sk-123", || FakeClient {
///     base_url: "http://localhost:11434/v1".into(),
/// });
/// assert_eq!(client.base_url, "http://localhost:11434/v1");
///
/// let drained = registry.drain();
/// assert_eq!(drained.len(), 1);
/// assert!(registry.is_empty());
/// ```
#[derive(Debug)]
pub struct ClientRegistry<C> {
    clients: Mutex<HashMap<String, Arc<C>>>,
}

impl<C> Default for ClientRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ClientRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the client cached for `api_key`, building it on first use.
    pub fn acquire_with(&self, api_key: &str, build: impl FnOnce() -> C) -> Arc<C> {
        let key = fingerprint(api_key);
        let mut clients = self.clients.lock().expect("registry lock poisoned");

        let client = clients.entry(key).or_insert_with(|| {
            debug!("building client for new key fingerprint");
            Arc::new(build())
        });

        Arc::clone(client)
    }

    /// Removes the client cached for `api_key`, if any.
    ///
    /// The handle is returned so the caller can run its shutdown once other
    /// holders drop their references.
    pub fn release(&self, api_key: &str) -> Option<Arc<C>> {
        let key = fingerprint(api_key);
        let removed = self
            .clients
            .lock()
            .expect("registry lock poisoned")
            .remove(&key);

        if removed.is_some() {
            debug!(key = %key, "released client");
        }
        removed
    }

    /// Removes every cached client, returning them for shutdown.
    pub fn drain(&self) -> Vec<Arc<C>> {
        let mut clients = self.clients.lock().expect("registry lock poisoned");
        let drained: Vec<_> = clients.drain().map(|(_, client)| client).collect();

        debug!(count = drained.len(), "drained client registry");
        drained
    }

    /// Returns the number of cached clients.
    pub fn len(&self) -> usize {
        self.clients.lock().expect("registry lock poisoned").len()
    }

    /// Returns `true` if no clients are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
