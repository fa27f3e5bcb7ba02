// src/config.rs

use std::{env, time::Duration};

use crate::{
    api::ApiClient,
    services::{DashboardService, PredictionService},
};

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub dashboard_service: DashboardService,
    pub prediction_service: PredictionService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let state = Self::with_base_url(&base_url)?;

        // Sonda de partida. Uma API fora do ar vira aviso, nunca derruba
        // o painel: cada refresh tenta de novo por conta própria.
        match state.api.check_health().await {
            Ok(()) => tracing::info!("✅ API Insight-PYME acessível em {base_url}"),
            Err(err) => tracing::warn!("⚠ A API não respondeu ao health check: {err}"),
        }

        Ok(state)
    }

    // --- Monta o gráfico de dependências ---
    // Separado do `new` para os testes apontarem direto para a API stub.
    pub fn with_base_url(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(30))
            .build()?;
        let api = ApiClient::new(http, base_url);

        Ok(Self {
            dashboard_service: DashboardService::new(api.clone()),
            prediction_service: PredictionService::new(api.clone()),
            api,
        })
    }
}
