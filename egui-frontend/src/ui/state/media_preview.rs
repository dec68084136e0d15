//! # Media Preview Module
//!
//! Local, in-memory references to video files the caregiver picked for an entry.
//!
//! ## Key Types:
//! - `PreviewStore` - Hands out references and tracks which ones are still live
//! - `PreviewReference` - A single live reference, released when dropped
//!
//! ## Lifecycle:
//! A reference is acquired when a file is picked and released as soon as the
//! owning `Option<PreviewReference>` is replaced, cleared, or dropped with the
//! rest of the journal state. The file itself is never opened or uploaded; only
//! its metadata is read for display.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

type LiveReferences = Rc<RefCell<BTreeSet<u64>>>;

/// Issues preview references and keeps the set of unreleased ones
#[derive(Debug, Default)]
pub struct PreviewStore {
    next_id: u64,
    live: LiveReferences,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new reference for the given file
    pub fn acquire(&mut self, path: &Path) -> PreviewReference {
        self.next_id += 1;
        let id = self.next_id;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "clip".to_string());
        let size_bytes = std::fs::metadata(path).ok().map(|metadata| metadata.len());
        let url = format!("preview://{}/{}", id, file_name);

        self.live.borrow_mut().insert(id);
        log::info!("🎬 Acquired preview {} for {:?}", url, path);

        PreviewReference {
            id,
            url,
            path: path.to_path_buf(),
            file_name,
            size_bytes,
            registry: Rc::downgrade(&self.live),
        }
    }

    /// Number of references that have not been released yet
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

/// A live reference to a locally selected media file
#[derive(Debug)]
pub struct PreviewReference {
    id: u64,
    url: String,
    path: PathBuf,
    file_name: String,
    size_bytes: Option<u64>,
    registry: Weak<RefCell<BTreeSet<u64>>>,
}

impl PreviewReference {
    /// Display-only reference, e.g. `preview://3/park.mp4`
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Human readable file size, or "size unknown" if metadata was unavailable
    pub fn size_label(&self) -> String {
        match self.size_bytes {
            Some(bytes) => format_size(bytes),
            None => "size unknown".to_string(),
        }
    }
}

impl Drop for PreviewReference {
    fn drop(&mut self) {
        if let Some(live) = self.registry.upgrade() {
            live.borrow_mut().remove(&self.id);
        }
        log::info!("🧹 Released preview {}", self.url);
    }
}

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= GB {
        format!("{:.1} GB", bytes_f / GB)
    } else if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_acquire_registers_reference() {
        let mut store = PreviewStore::new();
        let reference = store.acquire(Path::new("/tmp/clips/park.mp4"));

        assert_eq!(reference.url(), "preview://1/park.mp4");
        assert_eq!(reference.file_name(), "park.mp4");
        assert_eq!(store.live_count(), 1);
        assert!(store.live.borrow().contains(&1));
    }

    #[test]
    fn test_same_file_gets_distinct_references() {
        let mut store = PreviewStore::new();
        let first = store.acquire(Path::new("swing.mp4"));
        let second = store.acquire(Path::new("swing.mp4"));

        assert_ne!(first.url(), second.url());
        assert_eq!(store.live_count(), 2);

        drop(first);
        assert_eq!(*store.live.borrow(), BTreeSet::from([2]));
        drop(second);
    }

    #[test]
    fn test_drop_releases_reference() {
        let mut store = PreviewStore::new();
        let first = store.acquire(Path::new("a.mov"));
        let second = store.acquire(Path::new("b.mov"));
        assert_eq!(store.live_count(), 2);

        drop(first);
        assert_eq!(store.live_count(), 1);
        drop(second);
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_reference_outliving_store() {
        let mut store = PreviewStore::new();
        let reference = store.acquire(Path::new("late.webm"));
        drop(store);
        // Nothing left to release into; dropping must still be fine
        drop(reference);
    }

    #[test]
    fn test_size_label_reads_metadata() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        file.flush().unwrap();

        let mut store = PreviewStore::new();
        let reference = store.acquire(file.path());
        assert_eq!(reference.size_label(), "2.0 KB");

        let missing = store.acquire(Path::new("/definitely/not/here.mp4"));
        assert_eq!(missing.size_label(), "size unknown");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
