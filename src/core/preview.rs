use crate::domain::model::ImageAttachment;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub file_name: String,
    pub mime_type: String,
    pub size: usize,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    live: HashMap<u64, PreviewEntry>,
}

/// Issues `blob:` style preview references for selected images.
///
/// Entries stay registered until their [`PreviewHandle`] is dropped.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, image: &ImageAttachment) -> PreviewHandle {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.next_id += 1;
        let id = inner.next_id;
        inner.live.insert(
            id,
            PreviewEntry {
                file_name: image.file_name.clone(),
                mime_type: image.mime_type.clone(),
                size: image.size(),
            },
        );
        tracing::debug!("Preview {} acquired for {}", id, image.file_name);

        PreviewHandle {
            id,
            url: format!("blob:mural/{}", id),
            registry: self.clone(),
        }
    }

    pub fn live_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .live
            .len()
    }

    pub fn lookup(&self, url: &str) -> Option<PreviewEntry> {
        let id = url.strip_prefix("blob:mural/")?.parse::<u64>().ok()?;
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .live
            .get(&id)
            .cloned()
    }

    fn release(&self, id: u64) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.live.remove(&id).is_some() {
            tracing::debug!("Preview {} released", id);
        }
    }
}

/// Owned preview reference; releasing happens on drop.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    url: String,
    registry: PreviewRegistry,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}
