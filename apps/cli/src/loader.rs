//! Input loading: schemas through figment, data files as JSON.
//!
//! Schema files can be overridden from the environment with `REEL_`
//! variables, nesting on `__`:
//!
//! ```text
//! REEL_CONFIG__SUBMIT_TIMEOUT_MS=500 reel submit form.toml data.json
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use reel_form::{FormSchema, Submission};

/// Loads a form schema: TOML file first, then `REEL_` environment overrides.
pub fn load_schema(path: &Path) -> Result<FormSchema> {
    ensure!(path.is_file(), "schema file not found: {}", path.display());

    let schema: FormSchema = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("REEL_").split("__"))
        .extract()
        .with_context(|| format!("invalid schema {}", path.display()))?;

    schema
        .check()
        .with_context(|| format!("invalid schema {}", path.display()))?;

    tracing::debug!(form = %schema.id, fields = schema.fields.len(), "schema loaded");
    Ok(schema)
}

/// Reads a flat JSON object of field values.
pub fn load_data(path: &Path) -> Result<Submission> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {} as a JSON object", path.display()))
}
