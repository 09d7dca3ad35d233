use crate::Result;
use chrono::{DateTime, Utc};
use core::fmt::Write;
use serde::Serialize;
use serde_json::json;

/// Write a JSON document wrapping `data` under `section`, tagged with the repository and generation time.
pub fn generate<W: Write, T: Serialize>(repository: &str, section: &str, data: &T, generated_at: DateTime<Utc>, writer: &mut W) -> Result<()> {
    let mut document = serde_json::Map::new();
    let _ = document.insert("repository".to_string(), json!(repository));
    let _ = document.insert("generated_at".to_string(), json!(generated_at.to_rfc3339()));
    let _ = document.insert(section.to_string(), serde_json::to_value(data)?);

    write!(writer, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}
