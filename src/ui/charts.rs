// src/ui/charts.rs

use crate::models::dashboard::SalesPoint;

use super::render;
use super::screen::{Screen, Slot};

// Vínculo vivo entre um canvas (slot de gráfico) e a série desenhada
// nele. É dono dos labels e valores; nunca é alterado no lugar, só
// destruído e recriado.
pub struct ChartHandle {
    slot: Slot,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartHandle {
    fn bind(slot: Slot, series: Vec<SalesPoint>) -> Self {
        let (labels, values): (Vec<String>, Vec<f64>) = series
            .into_iter()
            .map(|point| (point.label, point.value))
            .unzip();
        Self { slot, labels, values }
    }

    fn draw(&self, screen: &dyn Screen) {
        screen.set_slot(self.slot, render::bar_chart(&self.labels, &self.values));
    }

    fn release(self, screen: &dyn Screen) {
        screen.clear_slot(self.slot);
    }
}

// Dono exclusivo dos dois gráficos do painel. Nenhum outro componente
// enxerga os handles.
#[derive(Default)]
pub struct ChartManager {
    hour: Option<ChartHandle>,
    day: Option<ChartHandle>,
}

impl ChartManager {
    pub fn rebind(
        &mut self,
        screen: &dyn Screen,
        hour_series: Vec<SalesPoint>,
        day_series: Vec<SalesPoint>,
    ) {
        Self::rebind_slot(&mut self.hour, screen, Slot::HourChart, hour_series);
        Self::rebind_slot(&mut self.day, screen, Slot::DayChart, day_series);
    }

    // Invariante rígido: destrói o handle anterior ANTES de criar o
    // novo. Pular essa ordem deixa dois vínculos vivos no mesmo canvas.
    fn rebind_slot(
        state: &mut Option<ChartHandle>,
        screen: &dyn Screen,
        slot: Slot,
        series: Vec<SalesPoint>,
    ) {
        if let Some(previous) = state.take() {
            previous.release(screen);
        }
        let handle = ChartHandle::bind(slot, series);
        handle.draw(screen);
        *state = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    enum Event {
        Set(Slot),
        Clear(Slot),
    }

    #[derive(Default)]
    struct EventLog {
        events: Mutex<Vec<Event>>,
    }

    impl Screen for EventLog {
        fn set_slot(&self, slot: Slot, _text: String) {
            self.events.lock().unwrap().push(Event::Set(slot));
        }

        fn clear_slot(&self, slot: Slot) {
            self.events.lock().unwrap().push(Event::Clear(slot));
        }

        fn set_busy(&self, _busy: bool) {}

        fn set_control_enabled(&self, _enabled: bool) {}
    }

    fn series(n: usize) -> Vec<SalesPoint> {
        (0..n)
            .map(|i| SalesPoint { label: format!("{i:02}:00"), value: i as f64 })
            .collect()
    }

    #[test]
    fn primeiro_bind_nao_destroi_nada() {
        let log = EventLog::default();
        let mut charts = ChartManager::default();
        charts.rebind(&log, series(2), series(3));

        let events = log.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![Event::Set(Slot::HourChart), Event::Set(Slot::DayChart)],
        );
    }

    #[test]
    fn rebind_destroi_antes_de_recriar_em_cada_canvas() {
        let log = EventLog::default();
        let mut charts = ChartManager::default();
        charts.rebind(&log, series(2), series(3));
        charts.rebind(&log, series(4), series(1));

        let events = log.events.lock().unwrap();
        for slot in [Slot::HourChart, Slot::DayChart] {
            let per_canvas: Vec<&Event> = events
                .iter()
                .filter(|e| matches!(e, Event::Set(s) | Event::Clear(s) if *s == slot))
                .collect();
            assert_eq!(
                per_canvas,
                vec![&Event::Set(slot), &Event::Clear(slot), &Event::Set(slot)],
            );
        }
    }

    #[test]
    fn nunca_ha_dois_vinculos_vivos_no_mesmo_canvas() {
        let log = EventLog::default();
        let mut charts = ChartManager::default();
        for round in 1..=4 {
            charts.rebind(&log, series(round), series(round));
        }

        // Em qualquer prefixo da história, destruições >= criações - 1.
        let events = log.events.lock().unwrap();
        for slot in [Slot::HourChart, Slot::DayChart] {
            let mut created = 0i32;
            let mut destroyed = 0i32;
            for event in events.iter() {
                match event {
                    Event::Set(s) if *s == slot => created += 1,
                    Event::Clear(s) if *s == slot => destroyed += 1,
                    _ => {}
                }
                assert!(destroyed >= created - 1);
            }
        }
    }
}
