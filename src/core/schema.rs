//! Field rules for a project submission.
//!
//! Every rule runs on every call so the form can show all problems at once.
//! Each `check_*` function is a standalone predicate returning the normalized
//! value or the reason it was refused; [`validate`] composes them.

use crate::domain::model::{
    FormField, ImageAttachment, ProjectSubmission, SubmissionDraft, SubmissionStatus, Violation,
    ViolationKind, ACCEPTED_IMAGE_TYPES, MAX_DESCRIPTION_CHARS, MAX_IMAGE_BYTES,
    MIN_DESCRIPTION_CHARS,
};
use url::Url;

type RuleResult<T> = std::result::Result<T, ViolationKind>;

pub fn validate(draft: &SubmissionDraft) -> std::result::Result<ProjectSubmission, Vec<Violation>> {
    let mut violations = Vec::new();

    let title = record(&mut violations, FormField::Title, check_required(&draft.title));
    let description = record(
        &mut violations,
        FormField::Description,
        check_description(&draft.description),
    );
    let author = record(&mut violations, FormField::Author, check_non_empty(&draft.author));
    let github_url = record(
        &mut violations,
        FormField::GithubUrl,
        check_github_url(&draft.github_url),
    );
    let status = record(&mut violations, FormField::Status, check_status(&draft.status));

    violations.extend(
        check_image(draft.image.as_ref())
            .into_iter()
            .map(|kind| Violation::new(FormField::Image, kind)),
    );

    if !violations.is_empty() {
        tracing::debug!("Draft rejected with {} violation(s)", violations.len());
        return Err(violations);
    }

    match (title, description, author, github_url, status) {
        (Some(title), Some(description), Some(author), Some(_), Some(status)) => {
            Ok(ProjectSubmission {
                title,
                description,
                author,
                // 送出使用者輸入的原字串，不用 Url 重新序列化的結果
                github_url: draft.github_url.clone(),
                status,
                image: draft.image.clone(),
            })
        }
        // 沒有違規時每個欄位都有值
        _ => Err(violations),
    }
}

fn record<T>(violations: &mut Vec<Violation>, field: FormField, outcome: RuleResult<T>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(kind) => {
            violations.push(Violation::new(field, kind));
            None
        }
    }
}

/// Non-empty after trimming; yields the trimmed text.
pub fn check_required(value: &str) -> RuleResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ViolationKind::Required);
    }
    Ok(trimmed.to_string())
}

/// Non-empty as typed; whitespace counts as content.
pub fn check_non_empty(value: &str) -> RuleResult<String> {
    if value.is_empty() {
        return Err(ViolationKind::Required);
    }
    Ok(value.to_string())
}

/// Length in characters, bounds inclusive.
pub fn check_description(value: &str) -> RuleResult<String> {
    let length = value.chars().count();
    if length < MIN_DESCRIPTION_CHARS {
        return Err(ViolationKind::TooShort {
            min: MIN_DESCRIPTION_CHARS,
        });
    }
    if length > MAX_DESCRIPTION_CHARS {
        return Err(ViolationKind::TooLong {
            max: MAX_DESCRIPTION_CHARS,
        });
    }
    Ok(value.to_string())
}

pub fn check_github_url(value: &str) -> RuleResult<Url> {
    let url = Url::parse(value).map_err(|_| ViolationKind::InvalidUrl)?;

    let on_github = url.host_str().is_some_and(|host| host.contains("github.com"))
        || url.path().contains("github.com");
    if !on_github {
        return Err(ViolationKind::NotGithub);
    }
    Ok(url)
}

pub fn check_status(value: &str) -> RuleResult<SubmissionStatus> {
    SubmissionStatus::parse(value).ok_or(ViolationKind::InvalidEnum)
}

/// Reports every failing image constraint, not just the first.
pub fn check_image(image: Option<&ImageAttachment>) -> Vec<ViolationKind> {
    let Some(image) = image else {
        return Vec::new();
    };

    let mut kinds = Vec::new();
    if image.size() > MAX_IMAGE_BYTES {
        kinds.push(ViolationKind::TooLarge {
            max_bytes: MAX_IMAGE_BYTES,
        });
    }
    if !ACCEPTED_IMAGE_TYPES.contains(&image.mime_type.as_str()) {
        kinds.push(ViolationKind::UnsupportedType);
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SubmissionDraft {
        SubmissionDraft {
            title: "Mural de Projetos".to_string(),
            description: "Mural digital de projetos".to_string(),
            author: "Wesley, Amanda e Josias".to_string(),
            github_url: "https://github.com/seal-ufpe/mural-projetos".to_string(),
            status: "AO VIVO".to_string(),
            image: None,
        }
    }

    fn kinds_for(violations: &[Violation], field: FormField) -> Vec<ViolationKind> {
        violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.kind)
            .collect()
    }

    #[test]
    fn test_valid_draft_passes() {
        let submission = validate(&valid_draft()).unwrap();
        assert_eq!(submission.status, SubmissionStatus::AoVivo);
        assert_eq!(submission.github_url, "https://github.com/seal-ufpe/mural-projetos");
        assert!(submission.image.is_none());
    }

    #[test]
    fn test_title_is_trimmed_author_is_not() {
        let mut draft = valid_draft();
        draft.title = "  Mural  ".to_string();
        draft.author = " Amanda ".to_string();

        let submission = validate(&draft).unwrap();
        assert_eq!(submission.title, "Mural");
        assert_eq!(submission.author, " Amanda ");
    }

    #[test]
    fn test_author_required_only_when_empty() {
        let mut draft = valid_draft();
        draft.author = "   ".to_string();
        assert!(validate(&draft).is_ok());

        draft.author = String::new();
        assert_eq!(
            validate(&draft).unwrap_err(),
            vec![Violation::new(FormField::Author, ViolationKind::Required)]
        );

        draft.title = "   ".to_string();
        assert_eq!(
            validate(&draft).unwrap_err(),
            vec![
                Violation::new(FormField::Title, ViolationKind::Required),
                Violation::new(FormField::Author, ViolationKind::Required),
            ]
        );
    }

    #[test]
    fn test_github_url_kept_as_typed() {
        let mut draft = valid_draft();
        draft.github_url = "https://GitHub.com".to_string();

        let submission = validate(&draft).unwrap();
        assert_eq!(submission.github_url, "https://GitHub.com");
    }

    #[test]
    fn test_missing_title_reports_only_required() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();

        let violations = validate(&draft).unwrap_err();
        assert_eq!(violations, vec![Violation::new(FormField::Title, ViolationKind::Required)]);
    }

    #[test]
    fn test_missing_author_independent_of_other_failures() {
        let mut draft = valid_draft();
        draft.author = String::new();
        draft.github_url = "not-a-url".to_string();

        let violations = validate(&draft).unwrap_err();
        assert_eq!(kinds_for(&violations, FormField::Author), vec![ViolationKind::Required]);
        assert_eq!(kinds_for(&violations, FormField::GithubUrl), vec![ViolationKind::InvalidUrl]);
    }

    #[test]
    fn test_description_boundaries() {
        let cases = [
            (9, Some(ViolationKind::TooShort { min: 10 })),
            (10, None),
            (60, None),
            (61, Some(ViolationKind::TooLong { max: 60 })),
        ];

        for (length, expected) in cases {
            let mut draft = valid_draft();
            draft.description = "a".repeat(length);
            match expected {
                None => assert!(validate(&draft).is_ok(), "length {} should pass", length),
                Some(kind) => assert_eq!(
                    kinds_for(&validate(&draft).unwrap_err(), FormField::Description),
                    vec![kind],
                    "length {}",
                    length
                ),
            }
        }
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        // 10 個字元, 超過 10 bytes
        assert!(check_description("ççççççççç ").is_ok());
    }

    #[test]
    fn test_github_url_rules() {
        assert_eq!(check_github_url("https://gitlab.com/x/y").unwrap_err(), ViolationKind::NotGithub);
        assert_eq!(check_github_url("not-a-url").unwrap_err(), ViolationKind::InvalidUrl);
        assert_eq!(check_github_url("").unwrap_err(), ViolationKind::InvalidUrl);
        assert!(check_github_url("https://github.com/seal-ufpe/mural-projetos").is_ok());
        assert!(check_github_url("https://gist.github.com/someone/abc").is_ok());
    }

    #[test]
    fn test_status_must_be_a_form_literal() {
        assert_eq!(check_status("EM DESENVOLVIMENTO").unwrap(), SubmissionStatus::EmDesenvolvimento);
        assert_eq!(check_status("FINALIZADO").unwrap(), SubmissionStatus::Finalizado);
        assert_eq!(check_status("development").unwrap_err(), ViolationKind::InvalidEnum);
        assert_eq!(check_status("").unwrap_err(), ViolationKind::InvalidEnum);
    }

    #[test]
    fn test_image_size_and_type() {
        let exact = ImageAttachment::new("capa.png", "image/png", vec![0; MAX_IMAGE_BYTES]);
        assert!(check_image(Some(&exact)).is_empty());

        let over = ImageAttachment::new("capa.png", "image/png", vec![0; MAX_IMAGE_BYTES + 1]);
        assert_eq!(
            check_image(Some(&over)),
            vec![ViolationKind::TooLarge { max_bytes: MAX_IMAGE_BYTES }]
        );

        let gif = ImageAttachment::new("capa.gif", "image/gif", vec![0; 128]);
        assert_eq!(check_image(Some(&gif)), vec![ViolationKind::UnsupportedType]);

        assert!(check_image(None).is_empty());
    }

    #[test]
    fn test_every_field_is_checked() {
        let draft = SubmissionDraft {
            title: String::new(),
            description: "curta".to_string(),
            author: String::new(),
            github_url: "https://gitlab.com/x/y".to_string(),
            status: "live".to_string(),
            image: Some(ImageAttachment::new("big.gif", "image/gif", vec![0; MAX_IMAGE_BYTES + 1])),
        };

        let violations = validate(&draft).unwrap_err();
        let fields: Vec<FormField> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                FormField::Title,
                FormField::Description,
                FormField::Author,
                FormField::GithubUrl,
                FormField::Status,
                FormField::Image,
                FormField::Image,
            ]
        );
    }
}
