use crate::core::preview::{PreviewHandle, PreviewRegistry};
use crate::domain::model::{FormField, ImageAttachment, SubmissionDraft};
use crate::utils::error::{MuralError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
struct SelectedImage {
    attachment: ImageAttachment,
    // 被取代或清除時 drop 即釋放
    preview: PreviewHandle,
}

/// Value holder behind the submission form. Performs no validation.
#[derive(Debug)]
pub struct FormState {
    values: SubmissionDraft,
    image: Option<SelectedImage>,
    previews: PreviewRegistry,
    in_flight: AtomicBool,
}

impl FormState {
    pub fn new(previews: PreviewRegistry) -> Self {
        Self {
            values: SubmissionDraft::default(),
            image: None,
            previews,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            FormField::Title => self.values.title = value,
            FormField::Description => self.values.description = value,
            FormField::Author => self.values.author = value,
            FormField::GithubUrl => self.values.github_url = value,
            FormField::Status => self.values.status = value,
            FormField::Image => {
                return Err(MuralError::FormError {
                    message: "The image field is set through set_image".to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => Some(&self.values.title),
            FormField::Description => Some(&self.values.description),
            FormField::Author => Some(&self.values.author),
            FormField::GithubUrl => Some(&self.values.github_url),
            FormField::Status => Some(&self.values.status),
            FormField::Image => self.image.as_ref().map(|img| img.attachment.file_name.as_str()),
        }
    }

    /// Replaces the selection; the previous preview is released.
    pub fn set_image(&mut self, attachment: ImageAttachment) -> &str {
        let preview = self.previews.acquire(&attachment);
        let selected = self.image.insert(SelectedImage { attachment, preview });
        selected.preview.url()
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref().map(|img| &img.attachment)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.image.as_ref().map(|img| img.preview.url())
    }

    /// Snapshot of the current values for validation.
    pub fn draft(&self) -> SubmissionDraft {
        SubmissionDraft {
            image: self.image().cloned(),
            ..self.values.clone()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Raises the in-flight flag, or returns `None` if it is already raised.
    /// The flag drops back when the guard goes out of scope.
    pub fn begin_submission(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.in_flight,
            })
    }
}

#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> ImageAttachment {
        ImageAttachment::new(name, "image/webp", vec![0; 16])
    }

    #[test]
    fn test_defaults() {
        let form = FormState::new(PreviewRegistry::new());
        let draft = form.draft();

        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.author, "");
        assert_eq!(draft.github_url, "");
        assert_eq!(draft.status, "EM DESENVOLVIMENTO");
        assert!(draft.image.is_none());
        assert!(form.preview_url().is_none());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_set_field_overwrites_only_that_field() {
        let mut form = FormState::new(PreviewRegistry::new());
        form.set_field(FormField::Title, "Primeiro").unwrap();
        form.set_field(FormField::Author, "Amanda").unwrap();
        form.set_field(FormField::Title, "Segundo").unwrap();

        assert_eq!(form.field(FormField::Title), Some("Segundo"));
        assert_eq!(form.field(FormField::Author), Some("Amanda"));
        assert_eq!(form.field(FormField::Status), Some("EM DESENVOLVIMENTO"));
    }

    #[test]
    fn test_set_field_refuses_image() {
        let mut form = FormState::new(PreviewRegistry::new());
        assert!(form.set_field(FormField::Image, "capa.png").is_err());
    }

    #[test]
    fn test_replacing_image_releases_old_preview() {
        let registry = PreviewRegistry::new();
        let mut form = FormState::new(registry.clone());

        let first_url = form.set_image(image("a.webp")).to_string();
        let second_url = form.set_image(image("b.webp")).to_string();

        assert_ne!(first_url, second_url);
        assert_eq!(registry.live_count(), 1);
        assert!(registry.lookup(&first_url).is_none());
        assert!(registry.lookup(&second_url).is_some());
        assert_eq!(form.field(FormField::Image), Some("b.webp"));
    }

    #[test]
    fn test_clear_and_drop_release_preview() {
        let registry = PreviewRegistry::new();
        let mut form = FormState::new(registry.clone());

        form.set_image(image("a.webp"));
        form.clear_image();
        assert_eq!(registry.live_count(), 0);
        assert!(form.image().is_none());

        form.set_image(image("b.webp"));
        assert_eq!(registry.live_count(), 1);
        drop(form);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_in_flight_guard() {
        let form = FormState::new(PreviewRegistry::new());

        let guard = form.begin_submission().unwrap();
        assert!(form.is_submitting());
        assert!(form.begin_submission().is_none());

        drop(guard);
        assert!(!form.is_submitting());
        assert!(form.begin_submission().is_some());
    }
}
