// src/api/client.rs

use crate::{
    common::AppError,
    models::{
        dashboard::{KpiSnapshot, SalesByDayRow, SalesByHourRow, SalesPoint, TopProductEntry},
        filters::FilterState,
        prediction::{DateRange, DemandResponse, PredictionRequest, ProductOption},
    },
};

// Camada de acesso aos dados remotos. Um único `reqwest::Client`
// compartilhado (vem do AppState) e a URL base da API.
//
// Nenhum GET checa o status HTTP antes de decodificar: um corpo que não
// é o JSON esperado vira erro de transporte, e um JSON com campos
// faltando vira valor default. É o contrato observado da API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn filtered_url(&self, path: &str, filters: &FilterState) -> String {
        format!("{}{}{}", self.base_url, path, filters.to_query_suffix())
    }

    pub async fn fetch_kpis(&self, filters: &FilterState) -> Result<KpiSnapshot, AppError> {
        let url = self.filtered_url("/api/kpis", filters);
        Ok(self.http.get(url).send().await?.json().await?)
    }

    // `limit` é obrigatório neste endpoint; a composição funciona com o
    // sufixo do filtro vazio ou não.
    pub async fn fetch_top_products(
        &self,
        filters: &FilterState,
        limit: u32,
    ) -> Result<Vec<TopProductEntry>, AppError> {
        let suffix = filters.to_query_suffix();
        let url = if suffix.is_empty() {
            format!("{}/api/top-products?limit={limit}", self.base_url)
        } else {
            format!("{}/api/top-products{suffix}&limit={limit}", self.base_url)
        };
        Ok(self.http.get(url).send().await?.json().await?)
    }

    pub async fn fetch_sales_by_hour(
        &self,
        filters: &FilterState,
    ) -> Result<Vec<SalesPoint>, AppError> {
        let url = self.filtered_url("/api/sales-by-hour", filters);
        let rows: Vec<SalesByHourRow> = self.http.get(url).send().await?.json().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn fetch_sales_by_day(
        &self,
        filters: &FilterState,
    ) -> Result<Vec<SalesPoint>, AppError> {
        let url = self.filtered_url("/api/sales-by-day", filters);
        let rows: Vec<SalesByDayRow> = self.http.get(url).send().await?.json().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn post_demand(
        &self,
        request: &PredictionRequest,
    ) -> Result<DemandResponse, AppError> {
        let url = format!("{}/api/demand", self.base_url);
        Ok(self.http.post(url).json(request).send().await?.json().await?)
    }

    // --- Dados de apoio do front (carregados uma vez na partida) ---

    pub async fn fetch_products(&self) -> Result<Vec<ProductOption>, AppError> {
        let url = format!("{}/api/products", self.base_url);
        Ok(self.http.get(url).send().await?.json().await?)
    }

    pub async fn fetch_date_range(&self) -> Result<DateRange, AppError> {
        let url = format!("{}/api/date-range", self.base_url);
        Ok(self.http.get(url).send().await?.json().await?)
    }

    pub async fn check_health(&self) -> Result<(), AppError> {
        let url = format!("{}/api/health", self.base_url);
        self.http.get(url).send().await?.error_for_status()?;
        Ok(())
    }
}
