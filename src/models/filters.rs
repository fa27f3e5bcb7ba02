// src/models/filters.rs

use chrono::NaiveDate;
use url::form_urlencoded;

// Estado do filtro de período. Só muda por ação explícita do usuário
// (aplicar/limpar); cada ciclo de refresh apenas lê.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterState {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl FilterState {
    // Substitui os dois campos de uma vez (qualquer um pode vir ausente).
    pub fn apply(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.from = from;
        self.to = to;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // Intervalo invertido (from > to). Não bloqueamos o apply: a API é
    // quem rejeita intervalos inválidos; o chamador só loga um aviso.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(f), Some(t)) if f > t)
    }

    // Sufixo canônico de query string: só os campos definidos, sempre na
    // ordem `from` depois `to`, URL-encoded. String vazia sem filtro.
    pub fn to_query_suffix(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        if let Some(from) = self.from {
            pairs.append_pair("from", &from.to_string());
        }
        if let Some(to) = self.to {
            pairs.append_pair("to", &to.to_string());
        }
        let query = pairs.finish();
        if query.is_empty() {
            String::new()
        } else {
            format!("?{query}")
        }
    }
}
