// src/main.rs

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::NaiveDate;

use insight_dashboard::{
    config::AppState,
    models::prediction::{PredictionRequest, ProductOption},
    ui::{Dashboard, PredictionForm, TerminalScreen},
};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não
    // deve iniciar.
    let state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    let screen = Arc::new(TerminalScreen::new());
    let mut dashboard = Dashboard::new(state.dashboard_service.clone(), screen.clone());
    let form = PredictionForm::new(state.prediction_service.clone());

    // Dados de apoio do formulário e do filtro; ausência não é fatal.
    let products = match state.api.fetch_products().await {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!("Não foi possível carregar a lista de produtos: {err}");
            Vec::new()
        }
    };
    if let Ok(range) = state.api.fetch_date_range().await {
        if let (Some(min), Some(max)) = (range.min, range.max) {
            tracing::info!("📅 Vendas registradas de {min} a {max}");
        }
    }

    // Primeira carga
    dashboard.refresh_all().await;
    screen.draw();
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("aplicar") => {
                let from = parts.next().and_then(parse_date);
                let to = parts.next().and_then(parse_date);
                dashboard.apply_filters(from, to).await;
                screen.draw();
            }
            Some("limpiar") => {
                dashboard.clear_filters().await;
                screen.draw();
            }
            Some("refrescar") => {
                dashboard.refresh_all().await;
                screen.draw();
            }
            Some("predecir") => {
                // O gatilho desabilitado é a única guarda contra
                // reentrada; não há trava além dela.
                if !screen.is_control_enabled() {
                    println!("Consulta en curso…");
                    continue;
                }
                let product_id = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
                // Mesmo horizonte default da API quando não informado.
                let days_ahead = parts.next().and_then(|v| v.parse().ok()).unwrap_or(30);
                form.submit(screen.as_ref(), PredictionRequest { product_id, days_ahead })
                    .await;
                screen.draw();
            }
            Some("productos") => print_products(&products),
            Some("ayuda") => print_help(),
            Some("salir") => break,
            Some(other) => println!("Comando desconocido: {other} (escriba `ayuda`)"),
            None => {}
        }
    }
}

// Data mal formada conta como ausente, igual ao comportamento histórico
// do filtro.
fn parse_date(value: &str) -> Option<NaiveDate> {
    value.parse().ok()
}

fn print_help() {
    println!();
    println!("Comandos:");
    println!("  aplicar [desde] [hasta]   filtra por fechas YYYY-MM-DD y refresca");
    println!("  limpiar                   quita el filtro y refresca");
    println!("  refrescar                 vuelve a cargar todos los paneles");
    println!("  predecir <id> [días]      consulta la demanda estimada");
    println!("  productos                 lista los productos disponibles");
    println!("  salir                     termina");
}

fn print_products(products: &[ProductOption]) {
    if products.is_empty() {
        println!("Sin productos cargados.");
        return;
    }
    for product in products {
        println!("  {:>4}  {}", product.id, product.name);
    }
}
