//! In-memory resource bridge.
//!
//! Holds a tree of paths and lets callers inject failures per path, which makes
//! it the bridge of choice for tests and demos.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use salvo::async_trait;
use tokio::sync::RwLock;

use super::bridge::{BridgeError, ResourceBridge};
use super::resource::{ChildOutcome, Resource};

#[derive(Debug, Default)]
struct State {
    /// Normalized path -> is collection. The root is the empty string.
    nodes: BTreeMap<String, bool>,
    failures: HashMap<String, BridgeError>,
}

/// ## Summary
/// A `ResourceBridge` over an in-memory tree.
///
/// An injected failure on the addressed resource fails the whole operation.
/// An injected failure on a collection member is reported as that member's
/// outcome; the member, its ancestors and the collection itself are kept and
/// every other member is removed.
#[derive(Debug)]
pub struct MemoryBridge {
    state: RwLock<State>,
}

impl Default for MemoryBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBridge {
    /// Creates a bridge containing only the root collection.
    #[must_use]
    pub fn new() -> Self {
        let mut state = State::default();
        state.nodes.insert(String::new(), true);
        Self {
            state: RwLock::new(state),
        }
    }

    /// Adds a collection and any missing ancestors.
    #[must_use]
    pub fn with_collection(mut self, path: &str) -> Self {
        let key = normalize(path);
        let nodes = &mut self.state.get_mut().nodes;
        insert_ancestors(nodes, &key);
        nodes.insert(key, true);
        self
    }

    /// Adds a file and any missing ancestor collections.
    #[must_use]
    pub fn with_file(mut self, path: &str) -> Self {
        let key = normalize(path);
        let nodes = &mut self.state.get_mut().nodes;
        insert_ancestors(nodes, &key);
        nodes.insert(key, false);
        self
    }

    /// Makes every deletion touching `path` fail with `error`.
    #[must_use]
    pub fn with_failure(mut self, path: &str, error: BridgeError) -> Self {
        self.state.get_mut().failures.insert(normalize(path), error);
        self
    }

    /// Returns whether anything exists at `path`.
    pub async fn contains(&self, path: &str) -> bool {
        self.state.read().await.nodes.contains_key(&normalize(path))
    }

    /// Returns the number of stored resources, root included.
    pub async fn resource_count(&self) -> usize {
        self.state.read().await.nodes.len()
    }
}

#[async_trait]
impl ResourceBridge for MemoryBridge {
    async fn resolve(&self, path: &str) -> Result<Option<Resource>, BridgeError> {
        let key = normalize(path);
        let state = self.state.read().await;
        Ok(state.nodes.get(&key).map(|&is_collection| {
            if is_collection {
                Resource::collection(href_for(&key, true))
            } else {
                Resource::file(href_for(&key, false))
            }
        }))
    }

    async fn delete_file(&self, resource: &Resource) -> Result<(), BridgeError> {
        let key = normalize(resource.href.as_str());
        let mut state = self.state.write().await;

        if let Some(error) = state.failures.get(&key) {
            return Err(error.clone());
        }

        match state.nodes.get(&key).copied() {
            Some(false) => {
                state.nodes.remove(&key);
                Ok(())
            }
            Some(true) => Err(BridgeError::with_status(409, "Resource is a collection")),
            None => Err(BridgeError::with_status(404, "Resource not found")),
        }
    }

    async fn delete_collection(
        &self,
        resource: &Resource,
    ) -> Result<Vec<ChildOutcome>, BridgeError> {
        let key = normalize(resource.href.as_str());
        let mut state = self.state.write().await;

        if let Some(error) = state.failures.get(&key) {
            return Err(error.clone());
        }
        if state.nodes.get(&key) != Some(&true) {
            return Err(BridgeError::with_status(404, "Collection not found"));
        }

        let prefix = format!("{key}/");
        let members: Vec<(String, bool)> = state
            .nodes
            .iter()
            .filter(|(path, _)| path.starts_with(&prefix))
            .map(|(path, &is_collection)| (path.clone(), is_collection))
            .collect();

        let mut outcomes = Vec::new();
        let mut kept = BTreeSet::new();
        for (path, is_collection) in &members {
            if let Some(error) = state.failures.get(path) {
                outcomes.push(ChildOutcome::new(
                    href_for(path, *is_collection),
                    error.status_code().as_u16(),
                ));
                kept.extend(ancestors_within(path, &key));
                kept.insert(path.clone());
            }
        }

        for (path, _) in members {
            if !kept.contains(&path) {
                state.nodes.remove(&path);
            }
        }
        if outcomes.is_empty() && !key.is_empty() {
            state.nodes.remove(&key);
        }

        Ok(outcomes)
    }
}

/// Strips trailing slashes and guarantees a leading one; the root becomes "".
fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn href_for(key: &str, is_collection: bool) -> String {
    if is_collection {
        format!("{key}/")
    } else {
        key.to_string()
    }
}

fn insert_ancestors(nodes: &mut BTreeMap<String, bool>, key: &str) {
    let mut current = key;
    while let Some((parent, _)) = current.rsplit_once('/') {
        nodes.entry(parent.to_string()).or_insert(true);
        current = parent;
    }
}

/// Ancestors of `path` strictly below `root`.
fn ancestors_within(path: &str, root: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = path;
    while let Some((parent, _)) = current.rsplit_once('/') {
        if parent.len() <= root.len() {
            break;
        }
        out.push(parent.to_string());
        current = parent;
    }
    out
}
