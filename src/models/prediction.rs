// src/models/prediction.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// Consulta de previsão de demanda enviada no POST /api/demand.
#[derive(Debug, Serialize, Validate)]
pub struct PredictionRequest {
    #[validate(range(min = 1, message = "Seleccione un producto válido."))]
    pub product_id: i64,
    #[validate(range(min = 1, message = "El horizonte debe ser de al menos 1 día."))]
    pub days_ahead: i64,
}

// Corpo cru da resposta. A API sinaliza falha de domínio com um campo
// `error` no próprio JSON (mesmo com status 200), então todos os campos
// são opcionais e a separação acontece na conversão abaixo.
// `horizon_days` vem da API mas a tela não o exibe.
#[derive(Debug, Deserialize)]
pub struct DemandResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub estimated_demand: Option<i64>,
    #[serde(default)]
    pub average_daily: Option<f64>,
    #[serde(default)]
    pub horizon_days: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum PredictionOutcome {
    Success { estimated_demand: i64, average_daily: f64 },
    Failure { message: String },
}

impl From<DemandResponse> for PredictionOutcome {
    fn from(response: DemandResponse) -> Self {
        match response.error {
            Some(message) => Self::Failure { message },
            None => Self::Success {
                estimated_demand: response.estimated_demand.unwrap_or(0),
                average_daily: response.average_daily.unwrap_or(0.0),
            },
        }
    }
}

// Opção do seletor de produtos do formulário (GET /api/products).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductOption {
    pub id: i64,
    pub name: String,
}

// Intervalo de datas com vendas registradas (GET /api/date-range),
// usado só como dica para preencher o filtro.
#[derive(Debug, Default, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resposta_com_error_vira_failure_mesmo_com_demais_campos() {
        let response: DemandResponse = serde_json::from_str(
            r#"{"error": "sin datos", "estimated_demand": 7}"#,
        )
        .unwrap();
        assert_eq!(
            PredictionOutcome::from(response),
            PredictionOutcome::Failure { message: "sin datos".into() },
        );
    }

    #[test]
    fn resposta_normal_vira_success() {
        let response: DemandResponse = serde_json::from_str(
            r#"{"estimated_demand": 140, "average_daily": 10, "horizon_days": 14}"#,
        )
        .unwrap();
        assert_eq!(
            PredictionOutcome::from(response),
            PredictionOutcome::Success { estimated_demand: 140, average_daily: 10.0 },
        );
    }

    #[test]
    fn consulta_invalida_reprovada_antes_da_rede() {
        let request = PredictionRequest { product_id: 0, days_ahead: 14 };
        assert!(request.validate().is_err());

        let request = PredictionRequest { product_id: 7, days_ahead: 14 };
        assert!(request.validate().is_ok());
    }
}
