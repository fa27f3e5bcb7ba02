// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::common::AppError;

// 1. KPIs (os cards do topo)
// Todos os campos podem faltar ou vir null; nesse caso valem 0 na tela.
#[derive(Debug, Default, Deserialize)]
pub struct KpiSnapshot {
    #[serde(default)]
    pub monthly_sales: Option<Decimal>,
    #[serde(default)]
    pub growth_percent: Option<f64>,
    #[serde(default)]
    pub average_ticket: Option<Decimal>,
    #[serde(default)]
    pub unique_customers: Option<u64>,
}

// 2. Top produtos
// A API histórica responde ora `name`/`amount`, ora `product`/`revenue`.
// A normalização acontece uma única vez aqui, na fronteira do serde;
// ninguém mais a jusante conhece os apelidos.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TopProductEntry {
    #[serde(alias = "product", default)]
    pub name: String,
    #[serde(alias = "revenue", default)]
    pub amount: Decimal,
}

// Os três estados que o painel de top produtos distingue na tela:
// lista com dados, lista vazia (não é erro) e falha de transporte.
#[derive(Debug, PartialEq)]
pub enum TopProductsOutcome {
    Listed(Vec<TopProductEntry>),
    Empty,
    Unavailable,
}

impl From<Result<Vec<TopProductEntry>, AppError>> for TopProductsOutcome {
    fn from(result: Result<Vec<TopProductEntry>, AppError>) -> Self {
        match result {
            Ok(entries) if entries.is_empty() => Self::Empty,
            Ok(entries) => Self::Listed(entries),
            Err(_) => Self::Unavailable,
        }
    }
}

// 3. Séries temporais dos gráficos
// Forma canônica única para a série por hora e a série por dia.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct SalesByHourRow {
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub sales: f64,
}

impl From<SalesByHourRow> for SalesPoint {
    fn from(row: SalesByHourRow) -> Self {
        Self { label: row.hour, value: row.sales }
    }
}

#[derive(Debug, Deserialize)]
pub struct SalesByDayRow {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub sales: f64,
}

impl From<SalesByDayRow> for SalesPoint {
    fn from(row: SalesByDayRow) -> Self {
        Self { label: row.day, value: row.sales }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpis_com_campos_ausentes_ou_null() {
        let snapshot: KpiSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.monthly_sales, None);
        assert_eq!(snapshot.unique_customers, None);

        let snapshot: KpiSnapshot =
            serde_json::from_str(r#"{"monthly_sales": null, "growth_percent": 4.2}"#).unwrap();
        assert_eq!(snapshot.monthly_sales, None);
        assert_eq!(snapshot.growth_percent, Some(4.2));
    }

    #[test]
    fn top_produtos_aceita_os_dois_pares_de_nomes() {
        let canonical: TopProductEntry =
            serde_json::from_str(r#"{"name": "Café", "amount": 1200.5}"#).unwrap();
        let aliased: TopProductEntry =
            serde_json::from_str(r#"{"product": "Café", "revenue": 1200.5}"#).unwrap();
        assert_eq!(canonical, aliased);
        assert_eq!(canonical.name, "Café");
    }

    #[test]
    fn outcome_distingue_vazio_de_erro() {
        let empty: Result<Vec<TopProductEntry>, AppError> = Ok(vec![]);
        assert_eq!(TopProductsOutcome::from(empty), TopProductsOutcome::Empty);

        let entry = TopProductEntry { name: "Pan".into(), amount: Decimal::from(10) };
        let listed: Result<Vec<TopProductEntry>, AppError> = Ok(vec![entry.clone()]);
        assert_eq!(
            TopProductsOutcome::from(listed),
            TopProductsOutcome::Listed(vec![entry]),
        );
    }

    #[test]
    fn series_por_hora_e_dia_viram_a_mesma_forma() {
        let hour: SalesByHourRow =
            serde_json::from_str(r#"{"hour": "09:00", "sales": 120.0}"#).unwrap();
        let day: SalesByDayRow =
            serde_json::from_str(r#"{"day": "Lunes", "sales": 80.5}"#).unwrap();
        let hour: SalesPoint = hour.into();
        let day: SalesPoint = day.into();
        assert_eq!(hour.label, "09:00");
        assert_eq!(day.value, 80.5);
    }
}
