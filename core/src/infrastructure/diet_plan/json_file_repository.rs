use std::path::PathBuf;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{entities::PlanDocument, ports::DietPlanRepository},
};

/// File-backed document store. The document is re-read on every call so
/// external edits are picked up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileDietPlanRepository {
    path: PathBuf,
}

impl JsonFileDietPlanRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Raw-text fallbacks land next to the document with a .txt extension.
    fn raw_text_path(&self) -> PathBuf {
        self.path.with_extension("txt")
    }
}

impl DietPlanRepository for JsonFileDietPlanRepository {
    async fn load(&self) -> Result<PlanDocument, CoreError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!("failed to read diet plan from {}: {}", self.path.display(), e);
            CoreError::Document(format!("failed to read diet plan: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            tracing::error!("failed to parse diet plan from {}: {}", self.path.display(), e);
            CoreError::Document(format!("failed to parse diet plan: {}", e))
        })
    }

    async fn save(&self, document: &PlanDocument) -> Result<(), CoreError> {
        let contents = serde_json::to_string_pretty(document)
            .map_err(|e| CoreError::Document(format!("failed to serialize diet plan: {}", e)))?;

        tokio::fs::write(&self.path, contents).await.map_err(|e| {
            tracing::error!("failed to write diet plan to {}: {}", self.path.display(), e);
            CoreError::Document(format!("failed to write diet plan: {}", e))
        })
    }

    async fn save_raw_text(&self, text: &str) -> Result<(), CoreError> {
        let path = self.raw_text_path();

        tokio::fs::write(&path, text).await.map_err(|e| {
            tracing::error!("failed to write raw plan text to {}: {}", path.display(), e);
            CoreError::Document(format!("failed to write raw plan text: {}", e))
        })
    }
}
