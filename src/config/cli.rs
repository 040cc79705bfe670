use crate::domain::model::ImageAttachment;
use crate::utils::error::{MuralError, Result};
use std::path::{Path, PathBuf};

/// Loads cover images from the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalImageSource {
    base_path: PathBuf,
}

impl LocalImageSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub async fn load(&self, path: &str) -> Result<ImageAttachment> {
        let full_path = self.base_path.join(path);
        let file_name = full_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| MuralError::FormError {
                message: format!("Not a file path: {}", path),
            })?
            .to_string();

        let bytes = tokio::fs::read(&full_path).await?;
        let mime_type = mime_for_path(&full_path);
        tracing::debug!("Loaded image {} ({} bytes, {})", file_name, bytes.len(), mime_type);

        Ok(ImageAttachment::new(file_name, mime_type, bytes))
    }
}

/// MIME type from the file extension; the schema decides whether it is accepted.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("capa.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("capa.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("capa.gif")), "image/gif");
        assert_eq!(mime_for_path(Path::new("capa")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_load_image() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("capa.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let source = LocalImageSource::new(temp_dir.path());
        let image = source.load("capa.png").await.unwrap();

        assert_eq!(image.file_name, "capa.png");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.size(), 4);
    }

    #[tokio::test]
    async fn test_load_missing_image() {
        let temp_dir = TempDir::new().unwrap();
        let source = LocalImageSource::new(temp_dir.path());

        let err = source.load("nada.png").await.unwrap_err();
        assert!(matches!(err, MuralError::IoError(_)));
    }
}
