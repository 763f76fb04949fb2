//! Render documentation templates into a ball.
use anyhow::{Context as _, Result};
use handlebars::Handlebars;
use serde::Serialize;

use super::Ball;
use super::scaffold::unlink_non_dir;
use crate::payload::Payload;

/// Variables available to documentation templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DocVars {
    /// Ball name.
    pub name: String,
    /// Name of the user creating the ball.
    pub username: String,
}

/// Turns template text plus [`DocVars`] into rendered text.
pub trait Render: std::fmt::Debug {
    /// Render `template` with `vars`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed.
    fn render(&self, template: &str, vars: &DocVars) -> Result<String>;
}

/// [`Render`] backed by Handlebars, with HTML escaping disabled.
#[derive(Debug)]
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Create a renderer.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        // Templates produce Markdown, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for HandlebarsRenderer {
    fn render(&self, template: &str, vars: &DocVars) -> Result<String> {
        let data = serde_json::to_value(vars).context("serializing template variables")?;
        self.handlebars
            .render_template(template, &data)
            .context("rendering template")
    }
}

/// Render every payload template into the ball root.
///
/// # Errors
///
/// Returns an error if a template cannot be read, rendered, or written.
pub fn write_docs(
    payload: &Payload,
    ball: &Ball,
    renderer: &dyn Render,
    vars: &DocVars,
) -> Result<()> {
    for template in payload.templates()? {
        let source = std::fs::read_to_string(&template.source)
            .with_context(|| format!("reading template {}", template.source.display()))?;
        let rendered = renderer
            .render(&source, vars)
            .with_context(|| format!("rendering {}", template.source.display()))?;
        let target = ball.root().join(&template.output);
        unlink_non_dir(&target)?;
        std::fs::write(&target, rendered)
            .with_context(|| format!("writing {}", target.display()))?;
        tracing::debug!("wrote {}", target.display());
    }
    Ok(())
}
