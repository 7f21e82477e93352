use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ImageHost, ImageHostError, UploadFile, UploadedImage, GALLERY_FOLDER};

/// Base URL of images served by [`MemoryImageHost`].
pub const MEMORY_URL_BASE: &str = "http://localhost/images";

/// In-process image host. Stores sizes only, never the bytes.
#[derive(Default)]
pub struct MemoryImageHost {
    files: Mutex<HashMap<String, usize>>,
    failing: AtomicBool,
}

impl MemoryImageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with a 503 until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn contains(&self, file_id: &str) -> bool {
        self.files().contains_key(file_id)
    }

    pub fn len(&self) -> usize {
        self.files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn files(&self) -> std::sync::MutexGuard<'_, HashMap<String, usize>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), ImageHostError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ImageHostError::Api {
                status: 503,
                body: "memory image host is failing".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ImageHost for MemoryImageHost {
    async fn upload(&self, file: UploadFile) -> Result<UploadedImage, ImageHostError> {
        self.check_available()?;
        let file_id = uuid::Uuid::new_v4().simple().to_string();
        let url = format!("{MEMORY_URL_BASE}{GALLERY_FOLDER}/{file_id}/{}", file.file_name);
        self.files().insert(file_id.clone(), file.bytes.len());
        tracing::debug!(%file_id, "Stored image in memory host");
        Ok(UploadedImage { url, file_id })
    }

    async fn delete(&self, file_id: &str) -> Result<(), ImageHostError> {
        self.check_available()?;
        match self.files().remove(file_id) {
            Some(_) => Ok(()),
            None => Err(ImageHostError::Api {
                status: 404,
                body: format!("file {file_id} not found"),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
