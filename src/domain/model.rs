use crate::utils::error::{MuralError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MAX_DESCRIPTION_CHARS: usize = 60;
pub const GENERIC_SUBMISSION_ERROR: &str = "Erro ao enviar projeto. Tente novamente.";

/// Status chosen on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[serde(rename = "FINALIZADO")]
    Finalizado,
    #[default]
    #[serde(rename = "EM DESENVOLVIMENTO")]
    EmDesenvolvimento,
    #[serde(rename = "AO VIVO")]
    AoVivo,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::Finalizado,
        SubmissionStatus::EmDesenvolvimento,
        SubmissionStatus::AoVivo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Finalizado => "FINALIZADO",
            SubmissionStatus::EmDesenvolvimento => "EM DESENVOLVIMENTO",
            SubmissionStatus::AoVivo => "AO VIVO",
        }
    }

    /// Exact literal match, no case folding.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Author,
    GithubUrl,
    Status,
    Image,
}

impl FormField {
    /// Multipart key and form input name.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Author => "author",
            FormField::GithubUrl => "githubUrl",
            FormField::Status => "status",
            FormField::Image => "image",
        }
    }
}

impl FromStr for FormField {
    type Err = MuralError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "title" => Ok(FormField::Title),
            "description" => Ok(FormField::Description),
            "author" => Ok(FormField::Author),
            "githubUrl" => Ok(FormField::GithubUrl),
            "status" => Ok(FormField::Status),
            "image" => Ok(FormField::Image),
            other => Err(MuralError::FormError {
                message: format!("Unknown form field: {}", other),
            }),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Raw, unvalidated form values as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub title: String,
    pub description: String,
    pub author: String,
    pub github_url: String,
    pub status: String,
    pub image: Option<ImageAttachment>,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            github_url: String::new(),
            status: SubmissionStatus::default().as_str().to_string(),
            image: None,
        }
    }
}

/// A draft that passed every rule of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Exactly as typed; only checked to parse.
    pub github_url: String,
    pub status: SubmissionStatus,
    pub image: Option<ImageAttachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidUrl,
    NotGithub,
    InvalidEnum,
    TooLarge { max_bytes: usize },
    UnsupportedType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: FormField,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: FormField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }

    pub fn message(&self) -> String {
        match (self.field, self.kind) {
            (FormField::Title, ViolationKind::Required) => "Título é obrigatório".to_string(),
            (FormField::Author, ViolationKind::Required) => "Autor é obrigatório".to_string(),
            (_, ViolationKind::Required) => format!("Campo {} é obrigatório", self.field),
            (_, ViolationKind::TooShort { min }) => {
                format!("Descrição deve ter ao menos {} caracteres", min)
            }
            (_, ViolationKind::TooLong { max }) => {
                format!("Descrição deve ter no máximo {} caracteres", max)
            }
            (_, ViolationKind::InvalidUrl) => "URL inválida".to_string(),
            (_, ViolationKind::NotGithub) => "A URL deve ser do GitHub".to_string(),
            (_, ViolationKind::InvalidEnum) => "Status inválido".to_string(),
            (_, ViolationKind::TooLarge { max_bytes }) => {
                format!("A imagem deve ter no máximo {}MB", max_bytes / (1024 * 1024))
            }
            (_, ViolationKind::UnsupportedType) => {
                "Tipos de imagem aceitos: JPEG, JPG, PNG, WEBP".to_string()
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Transport-neutral multipart body handed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub fields: Vec<(&'static str, String)>,
    pub image: Option<ImageAttachment>,
}

impl SubmissionPayload {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<ProjectSubmission> for SubmissionPayload {
    fn from(submission: ProjectSubmission) -> Self {
        let fields = vec![
            (FormField::Title.name(), submission.title),
            (FormField::Description.name(), submission.description),
            (FormField::Author.name(), submission.author),
            (FormField::GithubUrl.name(), submission.github_url),
            (FormField::Status.name(), submission.status.as_str().to_string()),
        ];

        Self {
            fields,
            image: submission.image,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Backend answer, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendReply {
    Accepted,
    Rejected { message: Option<String> },
    Malformed,
}

impl BackendReply {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Envelope>(body) {
            Ok(Envelope { success: true, .. }) => BackendReply::Accepted,
            Ok(Envelope { success: false, error }) => BackendReply::Rejected { message: error },
            Err(e) => {
                tracing::debug!("Envelope could not be parsed: {}", e);
                BackendReply::Malformed
            }
        }
    }

    /// `None` when accepted; otherwise the message to show, falling back to the generic one.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            BackendReply::Accepted => None,
            BackendReply::Rejected { message: Some(message) } if !message.trim().is_empty() => {
                Some(message.clone())
            }
            BackendReply::Rejected { .. } | BackendReply::Malformed => {
                Some(GENERIC_SUBMISSION_ERROR.to_string())
            }
        }
    }
}

/// Stages of one submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Status of a card on the gallery. Not derived from `SubmissionStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Featured,
    Live,
    Development,
}

impl ProjectStatus {
    /// Badge text shown on the card.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Featured => "EM DESTAQUE",
            ProjectStatus::Live => "AO VIVO",
            ProjectStatus::Development => "EM DESENVOLVIMENTO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub github_url: String,
    pub status: ProjectStatus,
    pub image_url: String,
}
