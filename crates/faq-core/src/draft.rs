use crate::error::ValidationError;
use faq_api_types::CreateItemRequest;

/// Raw add-question form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemDraft {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl NewItemDraft {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }

    /// Trim and check the draft, then attach `uid`.
    pub fn into_request(&self, uid: String) -> Result<CreateItemRequest, ValidationError> {
        let question = self.question.trim();
        let answer = self.answer.trim();
        if question.is_empty() {
            return Err(ValidationError::MissingQuestion);
        }
        if answer.is_empty() {
            return Err(ValidationError::MissingAnswer);
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        Ok(CreateItemRequest {
            uid,
            question: question.to_owned(),
            answer: answer.to_owned(),
            category: self.category.clone(),
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.into_request(String::new()).map(|_| ())
    }
}

pub fn validate_category_name(raw: &str) -> Result<&str, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyCategoryName);
    }
    Ok(name)
}

/// Time-based item ids (`q<epoch-millis>`), strictly increasing per source.
#[derive(Debug, Clone, Default)]
pub struct UidSource {
    last: u64,
}

impl UidSource {
    pub fn next(&mut self, now_ms: u64) -> String {
        let stamp = now_ms.max(self.last + 1);
        self.last = stamp;
        format!("q{stamp}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_trimmed_into_request() {
        let req = NewItemDraft::new("  What is X? ", "\tX is Y\n", "Basics")
            .into_request("q1".to_owned())
            .unwrap();
        assert_eq!(req.question, "What is X?");
        assert_eq!(req.answer, "X is Y");
        assert_eq!(req.category, "Basics");
        assert_eq!(req.uid, "q1");
    }

    #[test]
    fn each_missing_field_is_reported() {
        assert_eq!(
            NewItemDraft::new(" ", "a", "c").validate(),
            Err(ValidationError::MissingQuestion)
        );
        assert_eq!(
            NewItemDraft::new("q", "   ", "c").validate(),
            Err(ValidationError::MissingAnswer)
        );
        assert_eq!(
            NewItemDraft::new("q", "a", "").validate(),
            Err(ValidationError::MissingCategory)
        );
        assert_eq!(NewItemDraft::new("q", "a", "c").validate(), Ok(()));
    }

    #[test]
    fn category_name_must_not_be_blank() {
        assert_eq!(validate_category_name("  Basics "), Ok("Basics"));
        assert_eq!(
            validate_category_name("   "),
            Err(ValidationError::EmptyCategoryName)
        );
    }

    #[test]
    fn uids_stay_unique_within_one_millisecond() {
        let mut uids = UidSource::default();
        assert_eq!(uids.next(1_700_000_000_000), "q1700000000000");
        assert_eq!(uids.next(1_700_000_000_000), "q1700000000001");
        assert_eq!(uids.next(1_699_999_999_999), "q1700000000002");
        assert_eq!(uids.next(1_700_000_000_010), "q1700000000010");
    }
}
