use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::TeamSeasonRecord;
use super::store::TeamRecordStore;

/// File expected next to the executable.
pub const DATASET_FILE_NAME: &str = "team_stats.csv";

/// Columns every source table must carry.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "year",
    "team",
    "wins",
    "losses",
    "points_for",
    "total_yards_offense",
    "pass_yards",
    "rush_yards",
    "turnovers",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Location of the default dataset: `team_stats.csv` beside the running binary.
pub fn resolve_dataset_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.join(DATASET_FILE_NAME))
}

/// Load a season table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row + one row per team season (recommended)
/// * `.json`    – `[{ "year": 2021, "team": "...", ... }, ...]`
/// * `.parquet` – one column per field, integer or float counts
pub fn load_file(path: &Path) -> Result<TeamRecordStore> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    Ok(TeamRecordStore::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<TeamSeasonRecord>> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Header row with column names, one record per line.  Columns beyond
/// [`REQUIRED_COLUMNS`] are ignored.
fn read_csv<R: Read>(input: R) -> Result<Vec<TeamSeasonRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?;
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    reader
        .deserialize::<TeamSeasonRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, i.e. `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Vec<TeamSeasonRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Vec<TeamSeasonRecord>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(text).context("parsing JSON")?;
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value::<TeamSeasonRecord>(row).with_context(|| format!("JSON row {i}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); counts stored as floats are accepted
/// as long as every value is a whole number.
fn load_parquet(path: &Path) -> Result<Vec<TeamSeasonRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut offset = 0;
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        records.extend(records_from_batch(&batch, offset)?);
        offset += batch.num_rows();
    }
    Ok(records)
}

fn records_from_batch(batch: &RecordBatch, offset: usize) -> Result<Vec<TeamSeasonRecord>> {
    let teams = column(batch, "team", &DataType::Utf8, offset)?;
    let teams = teams.as_string::<i32>();

    let [years, wins, losses, points_for, total_yards, pass_yards, rush_yards, turnovers] = [
        "year",
        "wins",
        "losses",
        "points_for",
        "total_yards_offense",
        "pass_yards",
        "rush_yards",
        "turnovers",
    ]
    .map(|name| column(batch, name, &DataType::Int64, offset).map(|c| (name, c)));
    let years = years?;
    let counts = [wins?, losses?, points_for?, total_yards?, pass_yards?, rush_yards?, turnovers?];

    (0..batch.num_rows())
        .map(|row| -> Result<TeamSeasonRecord> {
            let row_no = offset + row;
            if teams.is_null(row) {
                bail!("Row {row_no}: 'team' is null");
            }
            let year = i32::try_from(int_at(&years, row, row_no)?)
                .with_context(|| format!("Row {row_no}: 'year' out of range"))?;

            let mut values = [0u32; 7];
            for (slot, count) in values.iter_mut().zip(&counts) {
                let raw = int_at(count, row, row_no)?;
                *slot = u32::try_from(raw).with_context(|| {
                    format!("Row {row_no}: '{}' must be a non-negative count, got {raw}", count.0)
                })?;
            }
            let [wins, losses, points_for, total_yards, pass_yards, rush_yards, turnovers] = values;

            Ok(TeamSeasonRecord {
                year,
                team: teams.value(row).trim().to_string(),
                wins,
                losses,
                points_for,
                total_yards,
                pass_yards,
                rush_yards,
                turnovers,
            })
        })
        .collect()
}

// -- Parquet / Arrow helpers --

/// Fetch a column by name and cast it to `target`.  Float columns headed for
/// an integer type must hold whole numbers; `cast` would truncate them.
fn column(
    batch: &RecordBatch,
    name: &str,
    target: &DataType,
    offset: usize,
) -> Result<ArrayRef> {
    let col = batch
        .column_by_name(name)
        .with_context(|| format!("Parquet file missing '{name}' column"))?;

    if matches!(target, DataType::Int64) && col.data_type().is_floating() {
        let floats = cast(col.as_ref(), &DataType::Float64)
            .with_context(|| format!("column '{name}' cannot be read as Float64"))?;
        let fractional = floats
            .as_primitive::<Float64Type>()
            .iter()
            .enumerate()
            .find_map(|(row, v)| v.filter(|v| v.fract() != 0.0).map(|v| (row, v)));
        if let Some((row, v)) = fractional {
            bail!("Row {}: '{name}' must be a whole number, got {v}", offset + row);
        }
    }

    cast(col.as_ref(), target)
        .with_context(|| format!("column '{name}' cannot be read as {target:?}"))
}

fn int_at((name, col): &(&str, ArrayRef), row: usize, row_no: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("Row {row_no}: '{name}' is null");
    }
    Ok(col.as_primitive::<Int64Type>().value(row))
}
