use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use sysdeps::prelude::*;

/// Mock PomReader serving POM documents from memory, keyed by path
#[derive(Default, Clone)]
pub struct MockPomReader {
    documents: HashMap<PathBuf, String>,
    reads: Arc<AtomicUsize>,
}

impl MockPomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, xml: impl Into<String>) -> Self {
        self.insert(path, xml);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, xml: impl Into<String>) {
        self.documents.insert(path.into(), xml.into());
    }

    /// Number of `read_pom` calls so far, shared between clones.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl PomReader for MockPomReader {
    fn read_pom(&self, path: &Path) -> Result<PomModel> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let Some(xml) = self.documents.get(path) else {
            anyhow::bail!("Mock POM not found: {}", path.display());
        };
        PomFileReader::parse_document(path, xml)
    }
}
