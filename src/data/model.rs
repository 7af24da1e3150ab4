use serde::Deserialize;

// ---------------------------------------------------------------------------
// Season length
// ---------------------------------------------------------------------------

/// First season played on the 17-game schedule.
pub const SEVENTEEN_GAME_SEASON_START: i32 = 2021;

/// Number of regular-season games a team played in `year`.
pub fn games_in_season(year: i32) -> u32 {
    if year >= SEVENTEEN_GAME_SEASON_START {
        17
    } else {
        16
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// TeamSeasonRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// One team's offensive output over one season.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamSeasonRecord {
    pub year: i32,
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    /// Stored as `total_yards_offense` in the source table.
    #[serde(rename = "total_yards_offense")]
    pub total_yards: u32,
    pub pass_yards: u32,
    pub rush_yards: u32,
    pub turnovers: u32,
}

impl TeamSeasonRecord {
    /// `"<wins>-<losses>"`.
    pub fn win_loss_record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    /// Scoring per game, normalised by the schedule length of the record's
    /// own season.
    pub fn points_per_game(&self) -> f64 {
        round_to_hundredths(self.points_for as f64 / games_in_season(self.year) as f64)
    }
}

#[cfg(test)]
pub(crate) fn record(team: &str, year: i32) -> TeamSeasonRecord {
    TeamSeasonRecord {
        year,
        team: team.to_string(),
        wins: 10,
        losses: 7,
        points_for: 374,
        total_yards: 5600,
        pass_yards: 3800,
        rush_yards: 1800,
        turnovers: 12,
    }
}
