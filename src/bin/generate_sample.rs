use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const TEAMS: [&str; 12] = [
    "Bears", "Bengals", "Bills", "Chiefs", "Cowboys", "Eagles", "Lions", "Packers", "Rams",
    "Ravens", "Steelers", "49ers",
];
const FIRST_YEAR: i64 = 2015;
const LAST_YEAR: i64 = 2024;

/// SplitMix64: small, seedable, good enough for sample data.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// One synthetic season; better teams score more and turn it over less.
struct Season {
    year: i64,
    team: &'static str,
    wins: i64,
    losses: i64,
    points_for: i64,
    total_yards: i64,
    pass_yards: i64,
    rush_yards: i64,
    turnovers: i64,
}

fn generate_season(year: i64, team: &'static str, rng: &mut SplitMix64) -> Season {
    let games = if year >= 2021 { 17 } else { 16 };
    let strength = rng.next_f64();

    let wins = ((games as f64) * (0.15 + 0.7 * strength + rng.range(-0.1, 0.1)))
        .round()
        .clamp(0.0, games as f64) as i64;
    let points_per_game = 16.0 + 14.0 * strength + rng.range(-2.0, 2.0);
    let pass_per_game = 190.0 + 90.0 * strength + rng.range(-20.0, 20.0);
    let rush_per_game = 95.0 + 40.0 * rng.next_f64();
    let turnovers = 32.0 - 18.0 * strength + rng.range(-3.0, 3.0);

    let pass_yards = (pass_per_game * games as f64).round() as i64;
    let rush_yards = (rush_per_game * games as f64).round() as i64;
    Season {
        year,
        team,
        wins,
        losses: games - wins,
        points_for: (points_per_game * games as f64).round() as i64,
        total_yards: pass_yards + rush_yards,
        pass_yards,
        rush_yards,
        turnovers: turnovers.round().max(0.0) as i64,
    }
}

/// The viewer reads its dataset from beside its own executable, which shares
/// a target directory with this one.
fn output_dir() -> PathBuf {
    std::env::current_exe()
        .expect("Failed to locate executable")
        .parent()
        .expect("Executable has no parent directory")
        .to_path_buf()
}

fn main() {
    let out_dir = output_dir();

    let mut rng = SplitMix64(42);

    let seasons: Vec<Season> = (FIRST_YEAR..=LAST_YEAR)
        .flat_map(|year| TEAMS.iter().map(move |&team| (year, team)))
        .map(|(year, team)| generate_season(year, team, &mut rng))
        .collect();

    // Write CSV
    let csv_path = out_dir.join("team_stats.csv");
    let mut writer = csv::Writer::from_path(&csv_path).expect("Failed to create CSV file");
    writer
        .write_record([
            "year",
            "team",
            "wins",
            "losses",
            "points_for",
            "total_yards_offense",
            "pass_yards",
            "rush_yards",
            "turnovers",
        ])
        .expect("Failed to write CSV header");
    for s in &seasons {
        writer
            .write_record([
                s.year.to_string(),
                s.team.to_string(),
                s.wins.to_string(),
                s.losses.to_string(),
                s.points_for.to_string(),
                s.total_yards.to_string(),
                s.pass_yards.to_string(),
                s.rush_yards.to_string(),
                s.turnovers.to_string(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV file");

    // Build Arrow arrays
    let int_column = |f: fn(&Season) -> i64| -> ArrayRef {
        Arc::new(Int64Array::from(seasons.iter().map(f).collect::<Vec<_>>()))
    };
    let team_array = StringArray::from(seasons.iter().map(|s| s.team).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("year", DataType::Int64, false),
        Field::new("team", DataType::Utf8, false),
        Field::new("wins", DataType::Int64, false),
        Field::new("losses", DataType::Int64, false),
        Field::new("points_for", DataType::Int64, false),
        Field::new("total_yards_offense", DataType::Int64, false),
        Field::new("pass_yards", DataType::Int64, false),
        Field::new("rush_yards", DataType::Int64, false),
        Field::new("turnovers", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            int_column(|s| s.year),
            Arc::new(team_array) as ArrayRef,
            int_column(|s| s.wins),
            int_column(|s| s.losses),
            int_column(|s| s.points_for),
            int_column(|s| s.total_yards),
            int_column(|s| s.pass_yards),
            int_column(|s| s.rush_yards),
            int_column(|s| s.turnovers),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let parquet_path = out_dir.join("team_stats.parquet");
    let file = std::fs::File::create(&parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} team seasons ({} teams, {FIRST_YEAR}-{LAST_YEAR}) to {} and {}",
        seasons.len(),
        TEAMS.len(),
        csv_path.display(),
        parquet_path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons_fill_the_schedule() {
        let mut rng = SplitMix64(7);
        for (year, games) in [(2020, 16), (2021, 17)] {
            for _ in 0..50 {
                let s = generate_season(year, "Bears", &mut rng);
                assert_eq!(s.wins + s.losses, games);
                assert_eq!(s.total_yards, s.pass_yards + s.rush_yards);
                assert!(s.wins >= 0 && s.turnovers >= 0);
            }
        }
    }

    #[test]
    fn writes_beside_the_executable() {
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(output_dir().as_path()), exe.parent());
    }
}
