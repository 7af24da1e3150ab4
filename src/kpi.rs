use std::fmt;

use thiserror::Error;

use crate::data::model::TeamSeasonRecord;
use crate::data::store::TeamRecordStore;

// ---------------------------------------------------------------------------
// Kpi – the fixed comparison set
// ---------------------------------------------------------------------------

/// Offensive indicators compared between two teams, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kpi {
    WinLossRecord,
    PointsPerGame,
    TotalYards,
    PassingYards,
    RushingYards,
    Turnovers,
}

impl Kpi {
    pub const ALL: [Kpi; 6] = [
        Kpi::WinLossRecord,
        Kpi::PointsPerGame,
        Kpi::TotalYards,
        Kpi::PassingYards,
        Kpi::RushingYards,
        Kpi::Turnovers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Kpi::WinLossRecord => "Win/Loss Record",
            Kpi::PointsPerGame => "Points Per Game",
            Kpi::TotalYards => "Total Yards",
            Kpi::PassingYards => "Passing Yards",
            Kpi::RushingYards => "Rushing Yards",
            Kpi::Turnovers => "Turnovers",
        }
    }

    /// Whether the indicator is numeric and gets a bar chart.
    pub fn is_charted(self) -> bool {
        !matches!(self, Kpi::WinLossRecord)
    }

    fn value_for(self, rec: &TeamSeasonRecord) -> KpiValue {
        match self {
            Kpi::WinLossRecord => KpiValue::Record(rec.win_loss_record()),
            Kpi::PointsPerGame => KpiValue::Ratio(rec.points_per_game()),
            Kpi::TotalYards => KpiValue::Count(rec.total_yards),
            Kpi::PassingYards => KpiValue::Count(rec.pass_yards),
            Kpi::RushingYards => KpiValue::Count(rec.rush_yards),
            Kpi::Turnovers => KpiValue::Count(rec.turnovers),
        }
    }
}

impl fmt::Display for Kpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// KpiValue – one side of a comparison row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum KpiValue {
    /// `"<wins>-<losses>"`.
    Record(String),
    /// Already rounded to two decimals.
    Ratio(f64),
    Count(u32),
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiValue::Record(s) => write!(f, "{s}"),
            KpiValue::Ratio(v) => write!(f, "{v:.2}"),
            KpiValue::Count(n) => write!(f, "{n}"),
        }
    }
}

impl KpiValue {
    /// Numeric value for charting; `None` for the win-loss string.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            KpiValue::Ratio(v) => Some(*v),
            KpiValue::Count(n) => Some(*n as f64),
            KpiValue::Record(_) => None,
        }
    }
}

/// One indicator evaluated for both teams.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiComparisonRow {
    pub kpi: Kpi,
    pub first: KpiValue,
    pub second: KpiValue,
}

/// Evaluate every [`Kpi`] for two records, in [`Kpi::ALL`] order.
pub fn compare(first: &TeamSeasonRecord, second: &TeamSeasonRecord) -> Vec<KpiComparisonRow> {
    Kpi::ALL
        .iter()
        .map(|&kpi| KpiComparisonRow {
            kpi,
            first: kpi.value_for(first),
            second: kpi.value_for(second),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Comparison request handling
// ---------------------------------------------------------------------------

/// Why a comparison request produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("Please select both teams.")]
    SelectionIncomplete,
    #[error("Data not found for {team} in {year}.")]
    RecordNotFound { team: String, year: i32 },
}

/// A finished comparison between two teams for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub year: i32,
    pub first_team: String,
    pub second_team: String,
    pub rows: Vec<KpiComparisonRow>,
}

impl Comparison {
    pub fn title(&self) -> String {
        format!(
            "Comparison of {} vs {} ({}):",
            self.first_team, self.second_team, self.year
        )
    }

    /// Title, a rule, then `"<KPI>: <team1> (<v1>) vs <team2> (<v2>)"` per row.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.title());
        lines.push("-".repeat(50));
        lines.extend(self.rows.iter().map(|row| {
            format!(
                "{}: {} ({}) vs {} ({})",
                row.kpi, self.first_team, row.first, self.second_team, row.second
            )
        }));
        lines
    }

    /// Numeric rows with their values, in display order.
    pub fn charted_rows(&self) -> impl Iterator<Item = (Kpi, f64, f64)> + '_ {
        self.rows
            .iter()
            .filter(|row| row.kpi.is_charted())
            .filter_map(|row| Some((row.kpi, row.first.as_f64()?, row.second.as_f64()?)))
    }
}

/// Resolve both selections against `store` and compare them.
///
/// Nothing is computed unless the year and both teams are chosen and each
/// (team, year) pair exists in the dataset.
pub fn resolve_comparison(
    store: &TeamRecordStore,
    year: Option<i32>,
    first_team: Option<&str>,
    second_team: Option<&str>,
) -> Result<Comparison, CompareError> {
    let (Some(year), Some(first_team), Some(second_team)) = (year, first_team, second_team) else {
        return Err(CompareError::SelectionIncomplete);
    };
    if first_team.is_empty() || second_team.is_empty() {
        return Err(CompareError::SelectionIncomplete);
    }

    let lookup = |team: &str| {
        store
            .find_record(team, year)
            .ok_or_else(|| CompareError::RecordNotFound {
                team: team.to_string(),
                year,
            })
    };
    let first = lookup(first_team)?;
    let second = lookup(second_team)?;

    Ok(Comparison {
        year,
        first_team: first_team.to_string(),
        second_team: second_team.to_string(),
        rows: compare(first, second),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn other() -> TeamSeasonRecord {
        TeamSeasonRecord {
            year: 2021,
            team: "B".to_string(),
            wins: 4,
            losses: 13,
            points_for: 253,
            total_yards: 4900,
            pass_yards: 3100,
            rush_yards: 1800,
            turnovers: 27,
        }
    }

    fn store() -> TeamRecordStore {
        TeamRecordStore::from_records(vec![record("A", 2021), other(), record("A", 2020)])
    }

    #[test]
    fn produces_six_rows_in_fixed_order() {
        let rows = compare(&record("A", 2021), &other());
        let kpis: Vec<Kpi> = rows.iter().map(|r| r.kpi).collect();
        assert_eq!(kpis, Kpi::ALL);

        assert_eq!(rows[0].first, KpiValue::Record("10-7".into()));
        assert_eq!(rows[0].second, KpiValue::Record("4-13".into()));
        assert_eq!(rows[1].first, KpiValue::Ratio(22.0));
        assert_eq!(rows[1].second, KpiValue::Ratio(14.88));
        assert_eq!(rows[2].first, KpiValue::Count(5600));
        assert_eq!(rows[3].second, KpiValue::Count(3100));
        assert_eq!(rows[4].first, KpiValue::Count(1800));
        assert_eq!(rows[5].second, KpiValue::Count(27));
        assert!(rows[1..].iter().all(|r| r.first.as_f64().is_some()));
    }

    #[test]
    fn compare_is_idempotent() {
        let a = record("A", 2021);
        let b = other();
        assert_eq!(compare(&a, &b), compare(&a, &b));
    }

    #[test]
    fn only_record_row_is_not_charted() {
        let charted: Vec<Kpi> = Kpi::ALL.into_iter().filter(|k| k.is_charted()).collect();
        assert_eq!(charted.len(), 5);
        assert!(!charted.contains(&Kpi::WinLossRecord));
        assert_eq!(KpiValue::Record("1-0".into()).as_f64(), None);
    }

    #[test]
    fn ratio_displays_two_decimals() {
        assert_eq!(KpiValue::Ratio(22.0).to_string(), "22.00");
        assert_eq!(KpiValue::Ratio(14.88).to_string(), "14.88");
        assert_eq!(KpiValue::Count(12).to_string(), "12");
    }

    #[test]
    fn resolves_and_formats_summary() {
        let cmp = resolve_comparison(&store(), Some(2021), Some("A"), Some("B")).unwrap();
        let lines = cmp.summary_lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Comparison of A vs B (2021):");
        assert_eq!(lines[1].len(), 50);
        assert_eq!(lines[2], "Win/Loss Record: A (10-7) vs B (4-13)");
        assert_eq!(lines[3], "Points Per Game: A (22.00) vs B (14.88)");
        assert_eq!(lines[7], "Turnovers: A (12) vs B (27)");
    }

    #[test]
    fn charted_rows_follow_kpi_order() {
        let cmp = resolve_comparison(&store(), Some(2021), Some("A"), Some("B")).unwrap();
        let charted: Vec<(Kpi, f64, f64)> = cmp.charted_rows().collect();
        assert_eq!(
            charted,
            vec![
                (Kpi::PointsPerGame, 22.0, 14.88),
                (Kpi::TotalYards, 5600.0, 4900.0),
                (Kpi::PassingYards, 3800.0, 3100.0),
                (Kpi::RushingYards, 1800.0, 1800.0),
                (Kpi::Turnovers, 12.0, 27.0),
            ]
        );
    }

    #[test]
    fn team_may_be_compared_with_itself() {
        let cmp = resolve_comparison(&store(), Some(2021), Some("A"), Some("A")).unwrap();
        assert!(cmp.rows.iter().all(|r| r.first == r.second));
    }

    #[test]
    fn missing_selection_is_rejected() {
        let s = store();
        assert_eq!(
            resolve_comparison(&s, Some(2021), None, Some("B")),
            Err(CompareError::SelectionIncomplete)
        );
        assert_eq!(
            resolve_comparison(&s, Some(2021), Some("A"), Some("")),
            Err(CompareError::SelectionIncomplete)
        );
        assert_eq!(
            resolve_comparison(&s, None, Some("A"), Some("B")),
            Err(CompareError::SelectionIncomplete)
        );
    }

    #[test]
    fn absent_record_produces_no_comparison() {
        let err = resolve_comparison(&store(), Some(2020), Some("A"), Some("B")).unwrap_err();
        assert_eq!(
            err,
            CompareError::RecordNotFound {
                team: "B".into(),
                year: 2020
            }
        );

        let err = resolve_comparison(&store(), Some(2021), Some("Z"), Some("B")).unwrap_err();
        assert!(matches!(err, CompareError::RecordNotFound { ref team, .. } if team == "Z"));
    }
}
