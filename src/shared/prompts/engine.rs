//! Template engine for prompts using Jinja2 syntax.
//!
//! Templates ship inside the binary; a file with the same relative name under
//! `templates/prompts/` replaces the built-in copy at startup.

use minijinja::{Environment, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template directory relative to the project root
const TEMPLATE_DIR: &str = "templates/prompts";

/// Templates compiled into the binary, by name relative to `TEMPLATE_DIR`
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[(
    "geo_analyst/analyze.jinja",
    include_str!("../../../templates/prompts/geo_analyst/analyze.jinja"),
)];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Builds the environment: built-in templates first, then any `.jinja`
/// files found under `templates/prompts/`.
fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for (name, source) in BUILTIN_TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load built-in template {}: {}", name, e);
        }
    }

    let template_path = Path::new(TEMPLATE_DIR);
    if template_path.exists() {
        load_templates_recursive(&mut env, template_path, template_path);
    }

    env
}

/// Recursively load all .jinja templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    let Ok(entries) = std::fs::read_dir(current_path) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            load_templates_recursive(env, base_path, &path);
        } else if path.extension().is_some_and(|ext| ext == "jinja") {
            let Ok(relative) = path.strip_prefix(base_path) else {
                continue;
            };
            // Template names always use forward slashes
            let template_name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    // Leaked once at startup; the environment lives for the whole process
                    let static_name: &'static str =
                        Box::leak(template_name.clone().into_boxed_str());
                    let static_content: &'static str = Box::leak(content.into_boxed_str());
                    if let Err(e) = env.add_template(static_name, static_content) {
                        tracing::warn!("Failed to load template {}: {}", template_name, e);
                    } else {
                        tracing::debug!("Loaded template: {}", template_name);
                    }
                }
                Err(e) => tracing::warn!("Failed to read template {}: {}", template_name, e),
            }
        }
    }
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Arguments
/// * `template_name` - Path relative to `templates/prompts/`, e.g. "geo_analyst/analyze.jinja"
/// * `ctx` - Variable names to values
pub fn render_template(
    template_name: &str,
    ctx: &HashMap<&str, Value>,
) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    let render_ctx = Value::from_iter(ctx.iter().map(|(k, v)| (*k, v.clone())));

    template
        .render(render_ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a template exists
#[cfg(test)]
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_template() {
        let ctx = HashMap::new();
        let result = render_template("nonexistent.jinja", &ctx);
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
        assert!(!template_exists("definitely_not_a_real_template.jinja"));
    }

    #[test]
    fn test_builtin_template_is_registered() {
        assert!(template_exists("geo_analyst/analyze.jinja"));
    }

    #[test]
    fn test_render_inserts_variable_verbatim() {
        let mut ctx = HashMap::new();
        ctx.insert("json_input", Value::from("{\"address\": \"Hà Tĩnh\"}"));

        let rendered = render_template("geo_analyst/analyze.jinja", &ctx).unwrap();
        assert!(rendered.contains("{\"address\": \"Hà Tĩnh\"}"));
        assert!(rendered.contains("AI Insurance Geo-Analyst"));
    }
}
