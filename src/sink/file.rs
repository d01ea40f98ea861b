//! JSON file implementation of the form sink

use super::traits::{FormSink, SinkError};
use crate::state::FormData;
use async_trait::async_trait;
use std::path::PathBuf;

/// Saves the form document as pretty-printed JSON at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl FormSink for JsonFileSink {
    async fn save(&self, form: &FormData) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(form)?;
        tokio::fs::write(&self.path, content).await?;
        tracing::info!(path = %self.path.display(), "form saved");
        Ok(())
    }

    async fn load(&self) -> Result<Option<FormData>, SinkError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        let form: FormData = serde_json::from_str(&content)?;
        Ok(Some(form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{new_field, FieldType};
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("formdeck-test-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_none() {
        let sink = JsonFileSink::new(temp_path("missing"));
        let loaded = sink.load().await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let path = temp_path("round-trip");
        let sink = JsonFileSink::new(path.clone());

        let row = new_field(FieldType::TwoColumnRow);
        let form = FormData::default()
            .insert_top_level(new_field(FieldType::Text))
            .insert_top_level(row);

        sink.save(&form).await.unwrap();
        let loaded = sink.load().await.unwrap().unwrap();
        assert_eq!(loaded, form);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_json() {
        let path = temp_path("malformed");
        std::fs::write(&path, "not json").unwrap();
        let sink = JsonFileSink::new(path.clone());

        let result = sink.load().await;
        assert!(matches!(result, Err(SinkError::Serde(_))));

        let _ = std::fs::remove_file(path);
    }
}
