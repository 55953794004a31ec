//! Filesystem-backed resource bridge.

use std::io;
use std::path::{Path, PathBuf};

use salvo::async_trait;
use tessen_rfc::rfc::dav::core::Href;

use super::bridge::{BridgeError, ResourceBridge};
use super::resource::{ChildOutcome, Resource};

/// ## Summary
/// A `ResourceBridge` mapping request paths below `mount` onto files below `root`.
///
/// Symbolic links are never followed: a link is deleted as a file.
#[derive(Debug, Clone)]
pub struct FsBridge {
    root: PathBuf,
    mount: String,
    #[cfg(test)]
    faults: std::collections::HashMap<PathBuf, io::ErrorKind>,
}

/// One collection member discovered while walking.
struct Entry {
    path: PathBuf,
    href: Href,
    is_dir: bool,
    parent: Option<usize>,
}

/// One directory entry as read from disk.
struct Child {
    /// Display name, lossy for names that are not UTF-8. Only used for hrefs.
    name: String,
    path: PathBuf,
    is_dir: bool,
}

impl FsBridge {
    /// Creates a bridge serving `root` at `/`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mount: String::new(),
            #[cfg(test)]
            faults: std::collections::HashMap::new(),
        }
    }

    /// Serves `root` below `mount` (for example `/dav`) instead of `/`.
    #[must_use]
    pub fn with_mount(mut self, mount: &str) -> Self {
        self.mount = mount.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// ## Summary
    /// Maps a request href onto a path below the storage root.
    ///
    /// `Ok(None)` means the href lies outside the mount.
    ///
    /// ## Errors
    /// Returns a 403 for `.`/`..` segments and segments containing a
    /// backslash or NUL.
    fn local_path(&self, href: &str) -> Result<Option<PathBuf>, BridgeError> {
        let Some(rest) = href.strip_prefix(self.mount.as_str()) else {
            return Ok(None);
        };
        if !rest.is_empty() && !rest.starts_with('/') {
            return Ok(None);
        }

        let decoded = Href::new(rest).decode();
        let mut path = self.root.clone();
        for segment in decoded.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." || segment.contains(['\\', '\0']) {
                return Err(BridgeError::with_status(403, "Path segment not allowed"));
            }
            path.push(segment);
        }
        Ok(Some(path))
    }

    fn require_path(&self, resource: &Resource) -> Result<PathBuf, BridgeError> {
        self.local_path(resource.href.as_str())?
            .ok_or_else(|| BridgeError::with_status(404, "Resource not found"))
    }

    /// ## Summary
    /// Lists everything below `dir` in pre-order: each member is followed by
    /// its own subtree before its next sibling, siblings sorted by name.
    ///
    /// A member directory that cannot be read is reported in `outcomes` and
    /// marked blocked so neither it nor its ancestors are removed.
    ///
    /// ## Errors
    /// Fails if `dir` itself cannot be read.
    async fn walk(
        &self,
        dir: &Path,
        href: &Href,
        outcomes: &mut Vec<(usize, ChildOutcome)>,
        blocked: &mut Vec<bool>,
    ) -> Result<Vec<Entry>, BridgeError> {
        let top = self
            .read_children(dir)
            .await
            .map_err(|e| io_error(&e, "Failed to read collection"))?;

        let mut entries: Vec<Entry> = Vec::new();
        let mut pending: Vec<(Child, Href, Option<usize>)> = top
            .into_iter()
            .rev()
            .map(|child| (child, href.clone(), None))
            .collect();

        while let Some((child, parent_href, parent)) = pending.pop() {
            let index = entries.len();
            let href = if child.is_dir {
                parent_href.join_segment(&child.name).with_trailing_slash()
            } else {
                parent_href.join_segment(&child.name)
            };
            entries.push(Entry {
                path: child.path,
                href,
                is_dir: child.is_dir,
                parent,
            });
            blocked.push(false);

            let entry = &entries[index];
            if !entry.is_dir {
                continue;
            }
            match self.read_children(&entry.path).await {
                Ok(members) => pending.extend(
                    members
                        .into_iter()
                        .rev()
                        .map(|member| (member, entry.href.clone(), Some(index))),
                ),
                Err(e) => {
                    tracing::debug!(error = %e, href = %entry.href, "Failed to read member collection");
                    outcomes.push((index, ChildOutcome::new(entry.href.as_str(), status_for(&e))));
                    block_with_ancestors(&entries, blocked, index);
                }
            }
        }

        Ok(entries)
    }

    /// Reads one directory level, sorted by name.
    ///
    /// Paths come straight from the directory entries so names that are not
    /// valid UTF-8 still address the right file.
    #[cfg_attr(
        not(test),
        expect(clippy::unused_self, reason = "fault injection reads self in tests")
    )]
    async fn read_children(&self, dir: &Path) -> io::Result<Vec<Child>> {
        #[cfg(test)]
        self.injected_fault(dir)?;

        let mut reader = tokio::fs::read_dir(dir).await?;
        let mut children = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let is_dir = entry.file_type().await?.is_dir();
            children.push(Child {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                is_dir,
            });
        }
        children.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(children)
    }

    #[cfg_attr(
        not(test),
        expect(clippy::unused_self, reason = "fault injection reads self in tests")
    )]
    async fn remove_entry(&self, entry: &Entry) -> io::Result<()> {
        #[cfg(test)]
        self.injected_fault(&entry.path)?;

        if entry.is_dir {
            tokio::fs::remove_dir(&entry.path).await
        } else {
            tokio::fs::remove_file(&entry.path).await
        }
    }

    /// Makes every filesystem operation on `path` fail with `kind`.
    #[cfg(test)]
    fn with_fault(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.faults.insert(path.into(), kind);
        self
    }

    #[cfg(test)]
    fn injected_fault(&self, path: &Path) -> io::Result<()> {
        match self.faults.get(path) {
            Some(kind) => Err(io::Error::from(*kind)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResourceBridge for FsBridge {
    async fn resolve(&self, path: &str) -> Result<Option<Resource>, BridgeError> {
        let Some(local) = self.local_path(path)? else {
            return Ok(None);
        };

        match tokio::fs::symlink_metadata(&local).await {
            Ok(meta) if meta.is_dir() => Ok(Some(Resource::collection(path))),
            Ok(_) => Ok(Some(Resource::file(path))),
            Err(e) if is_missing(&e) => Ok(None),
            Err(e) => Err(io_error(&e, "Failed to stat resource")),
        }
    }

    #[tracing::instrument(skip_all, fields(href = %resource.href))]
    async fn delete_file(&self, resource: &Resource) -> Result<(), BridgeError> {
        let path = self.require_path(resource)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| io_error(&e, "Failed to delete file"))
    }

    #[tracing::instrument(skip_all, fields(href = %resource.href))]
    async fn delete_collection(
        &self,
        resource: &Resource,
    ) -> Result<Vec<ChildOutcome>, BridgeError> {
        let path = self.require_path(resource)?;
        if path == self.root {
            return Err(BridgeError::with_status(
                403,
                "Refusing to delete the storage root",
            ));
        }

        let mut outcomes = Vec::new();
        let mut blocked = Vec::new();
        let entries = self
            .walk(&path, &resource.href, &mut outcomes, &mut blocked)
            .await?;

        for (index, entry) in entries.iter().enumerate().rev() {
            if blocked[index] {
                continue;
            }
            match self.remove_entry(entry).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::debug!(error = %e, href = %entry.href, "Failed to delete member");
                    outcomes.push((index, ChildOutcome::new(entry.href.as_str(), status_for(&e))));
                    block_with_ancestors(&entries, &mut blocked, index);
                }
            }
        }

        if !outcomes.is_empty() {
            outcomes.sort_by_key(|(index, _)| *index);
            return Ok(outcomes.into_iter().map(|(_, outcome)| outcome).collect());
        }

        match tokio::fs::remove_dir(&path).await {
            Ok(()) => Ok(Vec::new()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(io_error(&e, "Failed to delete collection")),
        }
    }
}

fn block_with_ancestors(entries: &[Entry], blocked: &mut [bool], index: usize) {
    let mut current = Some(index);
    while let Some(i) = current {
        blocked[i] = true;
        current = entries.get(i).and_then(|entry| entry.parent);
    }
}

fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

fn status_for(e: &io::Error) -> u16 {
    match e.kind() {
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => 403,
        io::ErrorKind::NotFound => 404,
        io::ErrorKind::DirectoryNotEmpty => 409,
        io::ErrorKind::StorageFull => 507,
        _ => 500,
    }
}

fn io_error(e: &io::Error, context: &str) -> BridgeError {
    BridgeError::with_status(status_for(e), format!("{context}: {e}"))
}
