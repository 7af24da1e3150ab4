use std::collections::{BTreeSet, HashMap};

use super::model::TeamSeasonRecord;

// ---------------------------------------------------------------------------
// TeamRecordStore – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All loaded season records with pre-computed lookup indices.
///
/// Built once; never mutated afterwards. When the source holds more than one
/// row for the same (team, year) pair the first row wins.
#[derive(Debug, Clone, Default)]
pub struct TeamRecordStore {
    records: Vec<TeamSeasonRecord>,
    /// year → team → index of the first matching row.
    index: HashMap<i32, HashMap<String, usize>>,
    teams: Vec<String>,
    years: Vec<i32>,
    duplicates: usize,
}

impl TeamRecordStore {
    /// Build lookup indices from the loaded records.
    pub fn from_records(records: Vec<TeamSeasonRecord>) -> Self {
        let mut index: HashMap<i32, HashMap<String, usize>> = HashMap::new();
        let mut teams: BTreeSet<String> = BTreeSet::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut duplicates = 0;

        for (i, rec) in records.iter().enumerate() {
            teams.insert(rec.team.clone());
            years.insert(rec.year);

            let by_team = index.entry(rec.year).or_default();
            if by_team.contains_key(&rec.team) {
                log::warn!(
                    "Duplicate row {i} for {} in {}; keeping the first one",
                    rec.team,
                    rec.year
                );
                duplicates += 1;
            } else {
                by_team.insert(rec.team.clone(), i);
            }
        }

        TeamRecordStore {
            records,
            index,
            teams: teams.into_iter().collect(),
            years: years.into_iter().rev().collect(),
            duplicates,
        }
    }

    /// Distinct team identifiers, ascending.
    pub fn list_teams(&self) -> &[String] {
        &self.teams
    }

    /// Distinct seasons, most recent first.
    pub fn list_years(&self) -> &[i32] {
        &self.years
    }

    /// The record for `team` in `year`, if the dataset has one.
    pub fn find_record(&self, team: &str, year: i32) -> Option<&TeamSeasonRecord> {
        let idx = *self.index.get(&year)?.get(team)?;
        self.records.get(idx)
    }

    /// Rows shadowed by an earlier row with the same team and year.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn sample_rows() -> Vec<TeamSeasonRecord> {
        vec![
            record("Lions", 2020),
            record("Bears", 2021),
            record("Packers", 2019),
            record("Bears", 2020),
            record("Lions", 2021),
        ]
    }

    fn sample_store() -> TeamRecordStore {
        TeamRecordStore::from_records(sample_rows())
    }

    #[test]
    fn lists_teams_sorted_and_distinct() {
        let store = sample_store();
        assert_eq!(store.list_teams(), ["Bears", "Lions", "Packers"]);
    }

    #[test]
    fn lists_years_descending_and_distinct() {
        let store = sample_store();
        assert_eq!(store.list_years(), [2021, 2020, 2019]);
    }

    #[test]
    fn empty_dataset_has_no_teams_or_years() {
        let store = TeamRecordStore::from_records(Vec::new());
        assert!(store.is_empty());
        assert!(store.list_teams().is_empty());
        assert!(store.list_years().is_empty());
        assert!(store.find_record("Bears", 2021).is_none());
    }

    #[test]
    fn finds_exact_team_and_year() {
        let store = sample_store();
        let rec = store.find_record("Bears", 2020).unwrap();
        assert_eq!(rec.team, "Bears");
        assert_eq!(rec.year, 2020);
    }

    #[test]
    fn absent_pairs_return_none() {
        let store = sample_store();
        assert!(store.find_record("Packers", 2021).is_none());
        assert!(store.find_record("Vikings", 2020).is_none());
        assert!(store.find_record("bears", 2020).is_none());
        assert!(store.find_record("Bears", 1900).is_none());
    }

    #[test]
    fn lookup_agrees_with_linear_scan() {
        let rows = sample_rows();
        let store = TeamRecordStore::from_records(rows.clone());
        for team in ["Bears", "Lions", "Packers", "Vikings"] {
            for year in 2018..=2022 {
                let scanned = rows.iter().find(|r| r.team == team && r.year == year);
                assert_eq!(store.find_record(team, year), scanned);
            }
        }
    }

    #[test]
    fn first_duplicate_row_wins() {
        let mut second = record("Bears", 2021);
        second.wins = 3;
        second.losses = 14;
        let store = TeamRecordStore::from_records(vec![record("Bears", 2021), second]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.duplicate_count(), 1);
        assert_eq!(store.list_teams(), ["Bears"]);
        assert_eq!(store.find_record("Bears", 2021).unwrap().wins, 10);
    }
}
