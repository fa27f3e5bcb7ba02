// src/ui/prediction.rs

use validator::{Validate, ValidationErrors};

use crate::{models::prediction::PredictionRequest, services::PredictionService};

use super::render;
use super::screen::{Screen, Slot};

// Fluxo guardado do formulário de previsão: trava o gatilho, mostra o
// indicador de espera, uma única consulta, e restaura os controles em
// qualquer desfecho. A reentrada só é desencorajada pelo gatilho
// desabilitado; não existe trava explícita nem cancelamento.
pub struct PredictionForm {
    service: PredictionService,
}

impl PredictionForm {
    pub fn new(service: PredictionService) -> Self {
        Self { service }
    }

    pub async fn submit(&self, screen: &dyn Screen, request: PredictionRequest) {
        screen.set_control_enabled(false);
        screen.set_busy(true);

        let text = match request.validate() {
            // Consulta inválida nem chega na rede.
            Err(errors) => render::warning(&validation_message(&errors)),
            Ok(()) => {
                let result = self.service.predict(&request).await;
                if let Err(err) = &result {
                    tracing::error!("Falha ao consultar a previsão de demanda: {err}");
                }
                render::prediction_text(&result)
            }
        };
        screen.set_slot(Slot::PredictionResult, text);

        // Restauração incondicional, aconteça o que acontecer acima.
        screen.set_busy(false);
        screen.set_control_enabled(true);
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();
    for (_field, field_errors) in errors.field_errors() {
        messages.extend(
            field_errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string())),
        );
    }
    if messages.is_empty() {
        "Solicitud inválida".to_string()
    } else {
        messages.join(" ")
    }
}
