use crate::engine::{self, SortMode, Sortable};

/// Holds the canonical rows of one data load and the ordering currently on display.
///
/// The view is stored as indices into the canonical rows and is always recomputed from
/// them, never from the previous view.
#[derive(Debug, Clone)]
pub struct ListStore<R: Sortable> {
    canonical: Vec<R>,
    view: Vec<usize>,
    mode: SortMode<R::Field>,
    error: Option<String>,
}

impl<R: Sortable> Default for ListStore<R> {
    fn default() -> Self {
        Self {
            canonical: Vec::new(),
            view: Vec::new(),
            mode: SortMode::Original,
            error: None,
        }
    }
}

impl<R: Sortable> ListStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the canonical rows after a successful fetch and shows them in load order.
    pub fn load(&mut self, records: Vec<R>) {
        tracing::debug!(rows = records.len(), "List loaded");
        self.view = (0..records.len()).collect();
        self.canonical = records;
        self.mode = SortMode::Original;
        self.error = None;
    }

    /// Records a failed fetch. Nothing stale stays on display.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "List load failed");
        self.canonical.clear();
        self.view.clear();
        self.mode = SortMode::Original;
        self.error = Some(message);
    }

    /// Activates `mode` and reorders the view from the canonical rows.
    pub fn select_sort(&mut self, mode: SortMode<R::Field>) {
        tracing::debug!(?mode, "Sort mode selected");
        self.view = engine::order(&self.canonical, mode);
        self.mode = mode;
    }

    /// The rows in display order.
    pub fn current_view(&self) -> Vec<&R> {
        self.view.iter().map(|&i| &self.canonical[i]).collect()
    }

    /// The rows in load order.
    pub fn canonical(&self) -> &[R] {
        &self.canonical
    }

    pub fn mode(&self) -> SortMode<R::Field> {
        self.mode
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
