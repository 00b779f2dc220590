use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::form::{clean_required_text, FormErrors};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct EntryForm {
    #[schema(example = "Opened with e4")]
    #[serde(default)]
    pub text: String,
}

impl EntryForm {
    /// Entry text has no length cap.
    pub fn validate(&self) -> Result<String, FormErrors> {
        let mut errors = FormErrors::new();
        let text = clean_required_text("text", &self.text, &mut errors);
        errors.into_result(text)
    }
}
