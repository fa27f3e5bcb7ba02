// src/services/prediction_service.rs

use crate::{
    api::ApiClient,
    common::AppError,
    models::prediction::{PredictionOutcome, PredictionRequest},
};

#[derive(Clone)]
pub struct PredictionService {
    api: ApiClient,
}

impl PredictionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // Uma consulta, sem retry e sem cancelamento. O resultado separa a
    // falha de domínio (campo `error` no JSON) do sucesso; falha de
    // transporte sobe como Err.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome, AppError> {
        let response = self.api.post_demand(request).await?;
        Ok(response.into())
    }
}
