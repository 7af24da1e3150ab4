use std::path::PathBuf;

use crate::data::store::TeamRecordStore;
use crate::kpi::{Comparison, resolve_comparison};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded season records.
    pub dataset: TeamRecordStore,

    /// Where `dataset` was read from.
    pub dataset_path: PathBuf,

    /// Selected season.
    pub year: Option<i32>,

    /// Team picked in the first selector.
    pub first_team: Option<String>,

    /// Team picked in the second selector.
    pub second_team: Option<String>,

    /// Last successful comparison (None until the first one).
    pub comparison: Option<Comparison>,

    /// Error from the last compare request, shown in a modal until dismissed.
    pub error_message: Option<String>,

    /// Status / error message shown in the menu bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: TeamRecordStore, dataset_path: PathBuf) -> Self {
        let mut state = Self {
            dataset: TeamRecordStore::default(),
            dataset_path: PathBuf::new(),
            year: None,
            first_team: None,
            second_team: None,
            comparison: None,
            error_message: None,
            status_message: None,
        };
        state.set_dataset(dataset, dataset_path);
        state
    }

    /// Ingest a newly loaded dataset and reset every selection.
    pub fn set_dataset(&mut self, dataset: TeamRecordStore, path: PathBuf) {
        // Most recent season first.
        self.year = dataset.list_years().first().copied();
        self.first_team = None;
        self.second_team = None;
        self.comparison = None;
        self.error_message = None;
        self.status_message = None;

        self.dataset = dataset;
        self.dataset_path = path;
    }

    /// Handle the compare trigger.  On failure the previous comparison stays
    /// on screen and the error is queued for the user.
    pub fn compare_selected(&mut self) {
        match resolve_comparison(
            &self.dataset,
            self.year,
            self.first_team.as_deref(),
            self.second_team.as_deref(),
        ) {
            Ok(comparison) => {
                log::debug!("{}", comparison.title());
                self.comparison = Some(comparison);
                self.error_message = None;
            }
            Err(e) => {
                log::info!("Comparison rejected: {e}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn state() -> AppState {
        let store = TeamRecordStore::from_records(vec![
            record("Bears", 2020),
            record("Lions", 2021),
            record("Bears", 2021),
        ]);
        AppState::new(store, PathBuf::from("team_stats.csv"))
    }

    #[test]
    fn defaults_to_most_recent_year() {
        let s = state();
        assert_eq!(s.year, Some(2021));
        assert!(s.first_team.is_none());
        assert!(s.comparison.is_none());
    }

    #[test]
    fn compare_without_teams_reports_error() {
        let mut s = state();
        s.first_team = Some("Bears".into());
        s.compare_selected();
        assert_eq!(s.error_message.as_deref(), Some("Please select both teams."));
        assert!(s.comparison.is_none());
    }

    #[test]
    fn failed_compare_keeps_previous_result() {
        let mut s = state();
        s.first_team = Some("Bears".into());
        s.second_team = Some("Lions".into());
        s.compare_selected();
        let first = s.comparison.clone().unwrap();
        assert_eq!(first.rows.len(), 6);
        assert!(s.error_message.is_none());

        s.year = Some(2020);
        s.compare_selected();
        assert_eq!(s.comparison, Some(first));
        assert_eq!(s.error_message.as_deref(), Some("Data not found for Lions in 2020."));

        s.dismiss_error();
        assert!(s.error_message.is_none());
    }

    #[test]
    fn new_dataset_resets_selection() {
        let mut s = state();
        s.first_team = Some("Bears".into());
        s.second_team = Some("Bears".into());
        s.compare_selected();
        assert!(s.comparison.is_some());

        let store = TeamRecordStore::from_records(vec![record("Jets", 2015)]);
        s.set_dataset(store, PathBuf::from("other.csv"));
        assert_eq!(s.year, Some(2015));
        assert!(s.first_team.is_none());
        assert!(s.comparison.is_none());
        assert_eq!(s.dataset_path, PathBuf::from("other.csv"));
    }
}
