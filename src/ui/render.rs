// src/ui/render.rs

// Funções puras de renderização: resultado tipado entra, texto sai.
// Toda a lógica de exibição fica testável sem tela e sem rede.

use crate::{
    common::AppError,
    common::format::{fmt_count, fmt_money, fmt_percent},
    models::{
        dashboard::{KpiSnapshot, TopProductsOutcome},
        prediction::PredictionOutcome,
    },
};

use super::screen::Slot;

pub const LOADING_PLACEHOLDER: &str = "Cargando…";
pub const EMPTY_PLACEHOLDER: &str = "Sin datos";
pub const ERROR_PLACEHOLDER: &str = "Error";
pub const CONNECTION_ERROR: &str = "Error de conexión";

const BAR_WIDTH: usize = 24;

pub fn kpi_slots(snapshot: &KpiSnapshot) -> [(Slot, String); 4] {
    [
        (Slot::KpiMonthlySales, fmt_money(snapshot.monthly_sales)),
        (Slot::KpiGrowth, fmt_percent(snapshot.growth_percent)),
        (Slot::KpiAverageTicket, fmt_money(snapshot.average_ticket)),
        (Slot::KpiUniqueCustomers, fmt_count(snapshot.unique_customers)),
    ]
}

// Indicação degradada por slot quando o fetch dos KPIs falha; o resto
// do painel não é afetado.
pub fn kpi_degraded() -> [(Slot, String); 4] {
    [
        (Slot::KpiMonthlySales, ERROR_PLACEHOLDER.to_string()),
        (Slot::KpiGrowth, ERROR_PLACEHOLDER.to_string()),
        (Slot::KpiAverageTicket, ERROR_PLACEHOLDER.to_string()),
        (Slot::KpiUniqueCustomers, ERROR_PLACEHOLDER.to_string()),
    ]
}

// As linhas saem na ordem em que a API mandou; não reordenamos aqui.
pub fn top_products_text(outcome: &TopProductsOutcome) -> String {
    match outcome {
        TopProductsOutcome::Listed(entries) => entries
            .iter()
            .map(|entry| format!("{:<24} {}", entry.name, fmt_money(Some(entry.amount))))
            .collect::<Vec<_>>()
            .join("\n"),
        TopProductsOutcome::Empty => EMPTY_PLACEHOLDER.to_string(),
        TopProductsOutcome::Unavailable => ERROR_PLACEHOLDER.to_string(),
    }
}

pub fn bar_chart(labels: &[String], values: &[f64]) -> String {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let width = BAR_WIDTH;
    labels
        .iter()
        .zip(values)
        .map(|(label, value)| {
            let filled = if max > 0.0 {
                ((value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!("{label:>9} |{:<width$}| {value:.0}", "█".repeat(filled))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn warning(message: &str) -> String {
    format!("⚠ {message}")
}

// O texto do resultado é contrato observável: ordem dos campos e
// redação exatas.
pub fn prediction_text(result: &Result<PredictionOutcome, AppError>) -> String {
    match result {
        Ok(PredictionOutcome::Success { estimated_demand, average_daily }) => {
            format!("Demanda estimada: {estimated_demand} (promedio diario: {average_daily})")
        }
        Ok(PredictionOutcome::Failure { message }) => warning(message),
        Err(_) => CONNECTION_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::TopProductEntry;
    use rust_decimal::Decimal;

    #[test]
    fn tres_estados_do_top_produtos_sao_distintos() {
        let listed = TopProductsOutcome::Listed(vec![TopProductEntry {
            name: "Café".into(),
            amount: Decimal::from(1200),
        }]);
        let listed = top_products_text(&listed);
        let empty = top_products_text(&TopProductsOutcome::Empty);
        let error = top_products_text(&TopProductsOutcome::Unavailable);

        assert!(listed.contains("Café"));
        assert!(listed.contains("$ 1.200"));
        assert_eq!(empty, "Sin datos");
        assert_eq!(error, "Error");
        assert_ne!(empty, error);
    }

    #[test]
    fn kpis_degradados_marcam_os_quatro_slots() {
        for (_, text) in kpi_degraded() {
            assert_eq!(text, ERROR_PLACEHOLDER);
        }
    }

    #[test]
    fn redacao_exata_do_sucesso_da_predicao() {
        let result: Result<PredictionOutcome, AppError> = Ok(PredictionOutcome::Success {
            estimated_demand: 140,
            average_daily: 10.0,
        });
        assert_eq!(
            prediction_text(&result),
            "Demanda estimada: 140 (promedio diario: 10)",
        );
    }

    #[test]
    fn falha_de_dominio_vira_aviso_sem_frase_de_demanda() {
        let result: Result<PredictionOutcome, AppError> =
            Ok(PredictionOutcome::Failure { message: "sin datos".into() });
        let text = prediction_text(&result);
        assert!(text.starts_with('⚠'));
        assert!(text.contains("sin datos"));
        assert!(!text.contains("Demanda estimada"));
    }

    #[test]
    fn grafico_sem_valores_positivos_fica_sem_barras() {
        let labels = vec!["00:00".to_string(), "01:00".to_string()];
        let values = vec![0.0, 0.0];
        let chart = bar_chart(&labels, &values);
        assert!(!chart.contains('█'));
        assert!(chart.contains("00:00"));
    }

    #[test]
    fn grafico_escala_pela_maior_barra() {
        let labels = vec!["Lunes".to_string(), "Martes".to_string()];
        let values = vec![50.0, 100.0];
        let chart = bar_chart(&labels, &values);
        let lines: Vec<&str> = chart.lines().collect();
        let bars = |line: &str| line.matches('█').count();
        assert_eq!(bars(lines[1]), 2 * bars(lines[0]));
    }
}
