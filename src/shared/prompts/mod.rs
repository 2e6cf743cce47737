//! Prompt template management.
//!
//! Templates use Jinja2 syntax and live in `templates/prompts/`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::shared::prompts::render_geo_analyst_prompt;
//!
//! let prompt = render_geo_analyst_prompt(&input)?;
//! ```

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::Value;
use serde::Serialize;
use std::collections::HashMap;

/// Render the geo analyst prompt for the external document model.
///
/// `input` is embedded as pretty-printed JSON (two-space indent, non-ASCII
/// kept as is).
pub fn render_geo_analyst_prompt<T: Serialize>(input: &T) -> Result<String, TemplateError> {
    let json_input = serde_json::to_string_pretty(input)
        .map_err(|e| TemplateError::RenderError(e.to_string()))?;

    let mut ctx: HashMap<&str, Value> = HashMap::new();
    ctx.insert("json_input", Value::from(json_input));

    render_template("geo_analyst/analyze.jinja", &ctx)
}
