//! Recipe drafting error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DraftError {
    #[error("recipe field `{field}` is missing")]
    MissingField { field: String },

    #[error("recipe template failed: {message}")]
    TemplateFailed { message: String },

    #[error("PKGBUILD does exist in {path}")]
    RecipeExists { path: String },
}

impl UserFacingError for DraftError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::RecipeExists { .. } => {
                Some("Remove or rename the existing PKGBUILD to generate a fresh one.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::MissingField { .. } => "draft.missing_field",
            Self::TemplateFailed { .. } => "draft.template_failed",
            Self::RecipeExists { .. } => "draft.recipe_exists",
        };
        Some(code)
    }
}
