// src/services/dashboard_service.rs

use crate::{
    api::ApiClient,
    common::AppError,
    models::{
        dashboard::{KpiSnapshot, SalesPoint, TopProductEntry},
        filters::FilterState,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_kpis(&self, filters: &FilterState) -> Result<KpiSnapshot, AppError> {
        self.api.fetch_kpis(filters).await
    }

    pub async fn get_top_products(
        &self,
        filters: &FilterState,
        limit: u32,
    ) -> Result<Vec<TopProductEntry>, AppError> {
        self.api.fetch_top_products(filters, limit).await
    }

    // As duas séries formam uma operação única: se qualquer uma falhar,
    // nenhum gráfico atualiza neste ciclo. Diferente dos painéis, que
    // degradam um a um. As duas buscas sempre correm até o fim (não
    // existe cancelamento); o erro só é combinado depois.
    pub async fn get_sales_charts(
        &self,
        filters: &FilterState,
    ) -> Result<(Vec<SalesPoint>, Vec<SalesPoint>), AppError> {
        let (hour, day) = tokio::join!(
            self.api.fetch_sales_by_hour(filters),
            self.api.fetch_sales_by_day(filters),
        );
        Ok((hour?, day?))
    }
}
