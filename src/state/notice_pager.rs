// ============================================================================
// NOTICE PAGER - paginación en cliente de la lista de avisos
// ============================================================================

use crate::models::NoticeSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct NoticePager {
    notices: Vec<NoticeSummary>,
    page_size: usize,
}

impl NoticePager {
    pub fn new(page_size: usize) -> Self {
        Self {
            notices: Vec::new(),
            page_size: page_size.max(1),
        }
    }

    /// Se conserva el orden del servidor
    pub fn set_notices(&mut self, notices: Vec<NoticeSummary>) {
        self.notices = notices;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.notices.len().div_ceil(self.page_size)
    }

    /// Avisos de la página `page` (1-based). Página < 1 cuenta como 1;
    /// más allá del final -> vacío.
    pub fn page_slice(&self, page: usize) -> &[NoticeSummary] {
        let start = (page.max(1) - 1).saturating_mul(self.page_size);
        if start >= self.notices.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.notices.len());
        &self.notices[start..end]
    }

    /// Número de fila mostrado en la tabla
    pub fn row_number(&self, page: usize, index: usize) -> usize {
        (page.max(1) - 1) * self.page_size + index + 1
    }
}
