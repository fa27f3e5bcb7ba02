// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Falha de rede, status HTTP inesperado e corpo não-JSON chegam todos
// como `reqwest::Error`; para o painel são o mesmo evento: a região
// afetada degrada e o resto da tela continua interativa.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Falha de transporte ao consultar a API: {0}")]
    Transport(#[from] reqwest::Error),
}
