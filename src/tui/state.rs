use crate::model::{RepoFilter, Snapshot};

pub struct TuiState {
    /// Index into the heatmap's calendar-day series.
    pub selected: usize,
    pub view_mode: ViewMode,
    pub tab_index: usize,
    pub show_help: bool,
    /// 0 = all repositories, otherwise 1-based index into `Snapshot::repos`.
    pub filter_index: usize,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ViewMode {
    Heatmap,
    Charts,
    Insights,
}

impl TuiState {
    /// The repository filter currently cycled to; applies to the heatmap
    /// view only.
    pub fn filter(&self, snapshot: &Snapshot) -> RepoFilter {
        if self.filter_index == 0 {
            RepoFilter::All
        } else {
            RepoFilter::Repo(snapshot.repos[self.filter_index - 1].name.clone())
        }
    }

    pub fn cycle_filter_forward(&mut self, snapshot: &Snapshot) {
        self.filter_index = (self.filter_index + 1) % (snapshot.repos.len() + 1);
    }

    pub fn cycle_filter_back(&mut self, snapshot: &Snapshot) {
        self.filter_index = if self.filter_index == 0 {
            snapshot.repos.len()
        } else {
            self.filter_index - 1
        };
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            selected: 0,
            view_mode: ViewMode::Heatmap,
            tab_index: 0,
            show_help: false,
            filter_index: 0,
        }
    }
}
