//! Rendering seam for step content.

use async_trait::async_trait;

use stepway_wizard::Step;

use crate::error::Result;

/// Produces the HTML body for a step. Templating and theming belong to
/// the presentation layer; the gateway only carries the markup through.
#[async_trait]
pub trait StepRenderer: Send + Sync {
    async fn render(&self, step: &Step) -> Result<String>;
}

/// Renderer used until a real presentation collaborator is wired in.
/// Returns an empty body for every step.
pub struct NoopStepRenderer;

#[async_trait]
impl StepRenderer for NoopStepRenderer {
    async fn render(&self, _step: &Step) -> Result<String> {
        Ok(String::new())
    }
}
