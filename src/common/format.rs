// src/common/format.rs

use rust_decimal::{Decimal, RoundingStrategy};

// Formatadores numéricos no estilo es-CO usado pela interface:
// ponto como separador de milhar, moeda sem casas decimais.
// Todos tratam valor ausente/null como 0.

pub fn fmt_money(value: Option<Decimal>) -> String {
    let rounded = value
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let plain = rounded.to_string();
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    format!("$ {sign}{}", group_thousands(digits))
}

pub fn fmt_percent(value: Option<f64>) -> String {
    format!("{:.1}%", value.unwrap_or(0.0))
}

pub fn fmt_count(value: Option<u64>) -> String {
    group_thousands(&value.unwrap_or(0).to_string())
}

// Insere o separador de milhar a cada três dígitos, da direita para a
// esquerda. Recebe apenas dígitos (sinal já removido pelo chamador).
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
