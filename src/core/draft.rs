//! # Form Draft
//!
//! The unsaved values the user is typing, plus the validation that runs
//! before anything touches the network.
//!
//! ```text
//! FormDraft
//! ├── title       (required)
//! ├── body        (optional, "" when empty)
//! ├── image_url   (optional, "" when empty)
//! └── subreddit   (required unless the form is pinned to a topic)
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Body,
    Subreddit,
    Image,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Body => "Body",
            Field::Subreddit => "Subreddit",
            Field::Image => "Image URL",
        }
    }
}

/// A field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldError {
    TitleRequired,
    SubredditRequired,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::TitleRequired => Field::Title,
            FieldError::SubredditRequired => Field::Subreddit,
        }
    }

    /// The inline text shown under the form.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::TitleRequired => "- A Post Title is Required",
            FieldError::SubredditRequired => "A Subreddit is Required",
        }
    }
}

/// The set of errors from the last submit attempt, kept in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeSet<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error);
    }

    pub fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }

    /// Drops whatever error is attached to `field`.
    pub fn clear_field(&mut self, field: Field) {
        self.0.retain(|e| e.field() != field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.iter().map(FieldError::message).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// A draft that passed validation, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub body: String,
    pub image: String,
    /// The effective topic: the pinned topic if there is one, else the field.
    pub topic: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub subreddit: String,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gates the rest of the form: body, topic, image and the submit control
    /// only appear once a title has been typed.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
            Field::Subreddit => &self.subreddit,
            Field::Image => &self.image_url,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Body => self.body = value,
            Field::Subreddit => self.subreddit = value,
            Field::Image => self.image_url = value,
        }
    }

    /// Resets all four fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks required fields. Only an empty value is missing; whitespace
    /// counts as typed, matching [`has_title`](Self::has_title). A blank
    /// `fixed_subreddit` counts as absent.
    pub fn validate(&self, fixed_subreddit: Option<&str>) -> Result<ValidDraft, ValidationErrors> {
        let fixed = fixed_subreddit.filter(|s| !s.trim().is_empty());
        let mut errors = ValidationErrors::new();

        if !self.has_title() {
            errors.insert(FieldError::TitleRequired);
        }
        if fixed.is_none() && self.subreddit.is_empty() {
            errors.insert(FieldError::SubredditRequired);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidDraft {
            title: self.title.clone(),
            body: self.body.clone(),
            image: self.image_url.clone(),
            topic: fixed.unwrap_or(&self.subreddit).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, subreddit: &str) -> FormDraft {
        FormDraft {
            title: title.to_string(),
            subreddit: subreddit.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let errors = draft("", "reactjs").validate(None).unwrap_err();
        assert!(errors.contains(FieldError::TitleRequired));
        assert!(!errors.contains(FieldError::SubredditRequired));
    }

    #[test]
    fn test_missing_topic_is_rejected_without_fixed_topic() {
        let errors = draft("Hello", "").validate(None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FieldError::SubredditRequired));
    }

    #[test]
    fn test_both_errors_reported_together() {
        let errors = FormDraft::new().validate(None).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "- A Post Title is Required, A Subreddit is Required"
        );
    }

    #[test]
    fn test_fixed_topic_overrides_field() {
        let valid = draft("Hello", "ignored").validate(Some("rust")).unwrap();
        assert_eq!(valid.topic, "rust");
    }

    #[test]
    fn test_fixed_topic_satisfies_topic_requirement() {
        let valid = draft("Hello", "").validate(Some("rust")).unwrap();
        assert_eq!(valid.topic, "rust");
        assert_eq!(valid.body, "");
        assert_eq!(valid.image, "");
    }

    #[test]
    fn test_blank_fixed_topic_counts_as_absent() {
        let errors = draft("Hello", "").validate(Some("  ")).unwrap_err();
        assert!(errors.contains(FieldError::SubredditRequired));
    }

    #[test]
    fn test_whitespace_title_counts_as_present() {
        let d = draft("   ", "reactjs");
        assert!(d.has_title());
        let valid = d.validate(None).unwrap();
        assert_eq!(valid.title, "   ");
        assert_eq!(valid.topic, "reactjs");
    }

    #[test]
    fn test_has_title_and_clear() {
        let mut d = draft("Hello", "reactjs");
        d.set(Field::Image, "http://x/y.png".to_string());
        assert!(d.has_title());
        assert_eq!(d.get(Field::Image), "http://x/y.png");
        d.clear();
        assert_eq!(d, FormDraft::new());
        assert!(!d.has_title());
    }

    #[test]
    fn test_clear_field_removes_only_that_error() {
        let mut errors = FormDraft::new().validate(None).unwrap_err();
        errors.clear_field(Field::Title);
        assert!(!errors.contains(FieldError::TitleRequired));
        assert!(errors.contains(FieldError::SubredditRequired));
    }
}
