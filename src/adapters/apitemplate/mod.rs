//! Document renderer adapters.
//!
//! ## Available Adapters
//!
//! - `ApiTemplateRenderer` - apitemplate.io over HTTPS
//! - `MockTripDocumentRenderer` - Scripted renderer for testing

mod api_template_renderer;
mod mock_renderer;

pub use api_template_renderer::{ApiTemplateConfig, ApiTemplateRenderer, DEFAULT_BASE_URL};
pub use mock_renderer::MockTripDocumentRenderer;
