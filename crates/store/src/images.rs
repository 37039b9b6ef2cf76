//! Session image references
//!
//! A diagram attached to a question is stored in the document as an opaque
//! reference of the form `session-image://<uuid>/<file name>`. The registry
//! maps references back to the selected files until the session ends. No
//! image bytes are read or transformed.

use crate::{Result, StoreError};
use exam_model::ImageRef;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Scheme of session image references
pub const IMAGE_SCHEME: &str = "session-image://";

/// Selected images of one editing session
#[derive(Debug, Default)]
pub struct ImageRegistry {
    images: HashMap<Uuid, PathBuf>,
}

fn reference_id(image: &ImageRef) -> Option<Uuid> {
    let rest = image.as_str().strip_prefix(IMAGE_SCHEME)?;
    let (id, _name) = rest.split_once('/')?;
    Uuid::parse_str(id).ok()
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a selected file and hand back its reference
    pub fn register(&mut self, path: impl AsRef<Path>) -> Result<ImageRef> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(StoreError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let id = Uuid::new_v4();
        self.images.insert(id, path.to_path_buf());

        tracing::debug!("Registered image {} as {}", path.display(), id);
        Ok(ImageRef::new(format!("{IMAGE_SCHEME}{id}/{name}")))
    }

    /// The file behind a reference, if it belongs to this session
    pub fn resolve(&self, image: &ImageRef) -> Option<&Path> {
        let id = reference_id(image)?;
        self.images.get(&id).map(PathBuf::as_path)
    }

    pub fn contains(&self, image: &ImageRef) -> bool {
        self.resolve(image).is_some()
    }

    /// Drop every reference at session teardown; returns how many were held
    pub fn release_all(&mut self) -> usize {
        let released = self.images.len();
        self.images.clear();
        if released > 0 {
            tracing::debug!("Released {} session images", released);
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn image_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).unwrap();
        path
    }

    #[test]
    fn test_register_and_resolve() {
        let temp_dir = TempDir::new().unwrap();
        let path = image_file(&temp_dir, "circuit.png");
        let mut registry = ImageRegistry::new();

        let image = registry.register(&path).unwrap();
        assert!(image.as_str().starts_with("session-image://"));
        assert!(image.as_str().ends_with("/circuit.png"));
        assert_eq!(registry.resolve(&image), Some(path.as_path()));
    }

    #[test]
    fn test_same_file_gets_distinct_references() {
        let temp_dir = TempDir::new().unwrap();
        let path = image_file(&temp_dir, "map.png");
        let mut registry = ImageRegistry::new();

        let first = registry.register(&path).unwrap();
        let second = registry.register(&path).unwrap();
        assert_ne!(first, second);
        assert_eq!(registry.resolve(&first), registry.resolve(&second));
        assert_eq!(registry.release_all(), 2);
    }

    #[test]
    fn test_missing_file() {
        let mut registry = ImageRegistry::new();
        assert!(matches!(
            registry.register("/nonexistent/diagram.png"),
            Err(StoreError::FileNotFound(_))
        ));
        assert_eq!(registry.release_all(), 0);
    }

    #[test]
    fn test_foreign_references_do_not_resolve() {
        let registry = ImageRegistry::new();
        assert!(!registry.contains(&ImageRef::new("https://example.com/fig.png")));
        assert!(!registry.contains(&ImageRef::new("session-image://not-a-uuid/fig.png")));
    }

    #[test]
    fn test_release_all() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = ImageRegistry::new();
        let image = registry.register(image_file(&temp_dir, "a.png")).unwrap();

        assert_eq!(registry.release_all(), 1);
        assert!(!registry.contains(&image));
        assert_eq!(registry.release_all(), 0);
    }
}
