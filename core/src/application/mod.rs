use crate::{
    domain::common::{DietwatchConfig, services::Service},
    infrastructure::{diet_plan::JsonFileDietPlanRepository, text_processing::CedricClient},
};

pub type DietwatchService = Service<JsonFileDietPlanRepository, CedricClient>;

pub async fn create_service(config: DietwatchConfig) -> Result<DietwatchService, anyhow::Error> {
    let repository = JsonFileDietPlanRepository::new(config.document.path.clone());
    let client = CedricClient::new(config.cedric.clone())?;

    Ok(Service::new(repository, client))
}
