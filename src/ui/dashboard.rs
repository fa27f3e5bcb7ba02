// src/ui/dashboard.rs

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    models::{dashboard::TopProductsOutcome, filters::FilterState},
    services::DashboardService,
};

use super::charts::ChartManager;
use super::render;
use super::screen::{Screen, Slot};

// Mesmo limite que a página sempre pediu ao ranking.
pub const TOP_PRODUCTS_LIMIT: u32 = 10;

// Orquestra o ciclo de refresh do painel: dispara os galhos em paralelo
// e espera todos assentarem. Não interpreta resultado nenhum; cada galho
// cuida do próprio erro e escreve na própria região.
pub struct Dashboard {
    service: DashboardService,
    filters: FilterState,
    charts: ChartManager,
    screen: Arc<dyn Screen>,
}

impl Dashboard {
    pub fn new(service: DashboardService, screen: Arc<dyn Screen>) -> Self {
        Self {
            service,
            filters: FilterState::default(),
            charts: ChartManager::default(),
            screen,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub async fn apply_filters(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filters.apply(from, to);
        if self.filters.is_inverted() {
            // Não bloqueamos: a API é quem rejeita intervalos inválidos.
            tracing::warn!("⚠ Intervalo de datas invertido; a API pode devolver vazio.");
        }
        self.refresh_all().await;
    }

    pub async fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh_all().await;
    }

    // Fan-out/fan-in, sem fail-fast: a falha de um galho não cancela nem
    // atrasa os irmãos. Chamadas sobrepostas não são deduplicadas; quem
    // resolver por último escreve por cima (last-write-wins documentado).
    pub async fn refresh_all(&mut self) {
        tokio::join!(
            refresh_kpis(&self.service, &self.filters, self.screen.as_ref()),
            refresh_top_products(&self.service, &self.filters, self.screen.as_ref()),
            refresh_charts(&self.service, &self.filters, &mut self.charts, self.screen.as_ref()),
        );
    }
}

async fn refresh_kpis(service: &DashboardService, filters: &FilterState, screen: &dyn Screen) {
    match service.get_kpis(filters).await {
        Ok(snapshot) => {
            for (slot, text) in render::kpi_slots(&snapshot) {
                screen.set_slot(slot, text);
            }
        }
        Err(err) => {
            tracing::error!("Falha ao carregar os KPIs: {err}");
            for (slot, text) in render::kpi_degraded() {
                screen.set_slot(slot, text);
            }
        }
    }
}

async fn refresh_top_products(
    service: &DashboardService,
    filters: &FilterState,
    screen: &dyn Screen,
) {
    screen.set_slot(Slot::TopProducts, render::LOADING_PLACEHOLDER.to_string());

    let result = service.get_top_products(filters, TOP_PRODUCTS_LIMIT).await;
    if let Err(err) = &result {
        tracing::error!("Falha ao carregar o top de produtos: {err}");
    }
    let outcome = TopProductsOutcome::from(result);
    screen.set_slot(Slot::TopProducts, render::top_products_text(&outcome));
}

async fn refresh_charts(
    service: &DashboardService,
    filters: &FilterState,
    charts: &mut ChartManager,
    screen: &dyn Screen,
) {
    match service.get_sales_charts(filters).await {
        Ok((hour_series, day_series)) => charts.rebind(screen, hour_series, day_series),
        Err(err) => {
            // Par de gráficos falha junto: nenhum canvas atualiza neste
            // ciclo e o conteúdo anterior permanece.
            tracing::error!("Falha ao carregar as séries dos gráficos: {err}");
        }
    }
}
