use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::form::{check_max_chars, clean_required_text, FormErrors};

pub const TOPIC_TEXT_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct TopicForm {
    #[schema(example = "Chess")]
    #[serde(default)]
    pub text: String,
}

impl TopicForm {
    /// Returns the cleaned topic text.
    pub fn validate(&self) -> Result<String, FormErrors> {
        let mut errors = FormErrors::new();

        let text = clean_required_text("text", &self.text, &mut errors);
        check_max_chars("text", &text, TOPIC_TEXT_MAX_CHARS, &mut errors);

        errors.into_result(text)
    }
}
