//! Template rendering for recipe generation

use crate::RecipeMetadata;
use pypi2pkgbuild_errors::{DraftError, Error};
use serde::Serialize;
use tera::{Context, Tera};

/// Embedded PKGBUILD template
pub const RECIPE_TEMPLATE: &str = include_str!("../templates/PKGBUILD.in");

const TEMPLATE_NAME: &str = "PKGBUILD";

/// Values available to the template
#[derive(Serialize)]
struct TemplateContext<'a> {
    name: &'a str,
    version: &'a str,
    runtime: &'a str,
    summary: &'a str,
    home_page: &'a str,
    license: &'a str,
    download_url: &'a str,
    md5: &'a str,
}

impl<'a> From<&'a RecipeMetadata> for TemplateContext<'a> {
    fn from(metadata: &'a RecipeMetadata) -> Self {
        Self {
            name: &metadata.name,
            version: &metadata.version,
            runtime: metadata.runtime.as_str(),
            summary: metadata.description.as_deref().unwrap_or_default(),
            home_page: metadata.homepage.as_deref().unwrap_or_default(),
            license: &metadata.license,
            download_url: metadata.source_url.as_deref().unwrap_or_default(),
            md5: &metadata.source_md5,
        }
    }
}

/// Render the PKGBUILD for `metadata`
///
/// # Errors
///
/// Returns `DraftError::TemplateFailed` if the template does not render.
pub fn render(metadata: &RecipeMetadata) -> Result<String, Error> {
    render_template(RECIPE_TEMPLATE, metadata)
}

/// Render an arbitrary template source against `metadata`
///
/// # Errors
///
/// Returns `DraftError::TemplateFailed` if the source is not a valid
/// template or uses a placeholder with no value.
pub fn render_template(source: &str, metadata: &RecipeMetadata) -> Result<String, Error> {
    // Named without an .html/.xml suffix, so nothing gets autoescaped
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, source)
        .map_err(|e| template_failed(format!("Failed to load template: {e}")))?;

    let context = Context::from_serialize(TemplateContext::from(metadata))
        .map_err(|e| template_failed(format!("Failed to serialize template context: {e}")))?;

    tera.render(TEMPLATE_NAME, &context)
        .map_err(|e| template_failed(format!("Failed to render template: {e}")))
}

fn template_failed(message: String) -> Error {
    DraftError::TemplateFailed { message }.into()
}
