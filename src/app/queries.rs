use super::*;
use crate::query::BankCounts;
use crate::view_models::breakdown_rows;

impl QuizApp {
    pub fn bank(&self) -> &[Question] {
        self.bank
    }

    /// Se recalcula cada vez: el banco es estático y pequeño
    pub fn bank_counts(&self) -> BankCounts {
        BankCounts::compute(self.bank)
    }

    /// Cuántas preguntas tendría un test con la configuración actual
    pub fn selection_size(&self) -> usize {
        let available = self.bank.iter().filter(|q| self.setup.matches(q)).count();
        if self.setup.count > 0 {
            available.min(self.setup.count as usize)
        } else {
            available
        }
    }

    /// Vuelve a leer el historial guardado (fichero o localStorage).
    pub fn refrescar_historial(&mut self) {
        self.history_cache = self
            .history
            .read_newest_first()
            .iter()
            .map(HistoryRow::from_result)
            .collect();
    }

    /// Del más reciente al más antiguo, sin tocar el almacenamiento
    pub fn history_rows(&self) -> &[HistoryRow] {
        &self.history_cache
    }

    pub fn last_saved_score(&self) -> Option<u32> {
        self.history_cache.first().map(|r| r.score)
    }

    pub fn last_breakdown_rows(&self) -> Vec<BreakdownRow> {
        self.last_result
            .as_ref()
            .map(breakdown_rows)
            .unwrap_or_default()
    }
}
