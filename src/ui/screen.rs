// src/ui/screen.rs

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

// Regiões visíveis do painel. Cada slot lógico mapeia para exatamente
// uma região na tela.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    KpiMonthlySales,
    KpiGrowth,
    KpiAverageTicket,
    KpiUniqueCustomers,
    TopProducts,
    HourChart,
    DayChart,
    PredictionResult,
}

impl Slot {
    pub fn label(&self) -> &'static str {
        match self {
            Slot::KpiMonthlySales => "Ventas del mes",
            Slot::KpiGrowth => "Crecimiento",
            Slot::KpiAverageTicket => "Ticket promedio",
            Slot::KpiUniqueCustomers => "Clientes únicos",
            Slot::TopProducts => "Top productos",
            Slot::HourChart => "Ventas por hora",
            Slot::DayChart => "Ventas por día",
            Slot::PredictionResult => "Predicción de demanda",
        }
    }
}

// Saída do painel, desacoplada da apresentação. Os métodos recebem
// `&self` porque os galhos concorrentes de um refresh escrevem cada um
// na sua região assim que terminam.
pub trait Screen: Send + Sync {
    fn set_slot(&self, slot: Slot, text: String);
    fn clear_slot(&self, slot: Slot);
    fn set_busy(&self, busy: bool);
    fn set_control_enabled(&self, enabled: bool);
}

// Implementação de terminal usada pelo binário: guarda o conteúdo por
// slot e imprime tudo sob demanda.
pub struct TerminalScreen {
    slots: Mutex<HashMap<Slot, String>>,
    busy: AtomicBool,
    control_enabled: AtomicBool,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            busy: AtomicBool::new(false),
            control_enabled: AtomicBool::new(true),
        }
    }

    pub fn slot_text(&self, slot: Slot) -> Option<String> {
        self.slots.lock().unwrap().get(&slot).cloned()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Relaxed)
    }

    pub fn is_control_enabled(&self) -> bool {
        self.control_enabled.load(Ordering::Relaxed)
    }

    pub fn draw(&self) {
        let slots = self.slots.lock().unwrap();
        let text = |slot: Slot| slots.get(&slot).map(String::as_str).unwrap_or("…");

        println!();
        println!("══ Insight PYME ══");
        for slot in [
            Slot::KpiMonthlySales,
            Slot::KpiGrowth,
            Slot::KpiAverageTicket,
            Slot::KpiUniqueCustomers,
        ] {
            println!("{:<16} {}", slot.label(), text(slot));
        }

        for slot in [Slot::TopProducts, Slot::HourChart, Slot::DayChart] {
            println!();
            println!("── {} ──", slot.label());
            println!("{}", text(slot));
        }

        if let Some(result) = slots.get(&Slot::PredictionResult) {
            println!();
            println!("── {} ──", Slot::PredictionResult.label());
            println!("{result}");
        }

        if self.is_busy() {
            println!("(consultando…)");
        }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn set_slot(&self, slot: Slot, text: String) {
        self.slots.lock().unwrap().insert(slot, text);
    }

    fn clear_slot(&self, slot: Slot) {
        self.slots.lock().unwrap().remove(&slot);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::Relaxed);
    }

    fn set_control_enabled(&self, enabled: bool) {
        self.control_enabled.store(enabled, Ordering::Relaxed);
    }
}
