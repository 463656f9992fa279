//! Python bindings for the presentation layer.
//!
//! The Python side owns names, form inputs and rendering; it calls in with a
//! list of display names and gets back grid rows.

use pyo3::prelude::*;
use rand::rngs::StdRng;

use crate::config::{CapKey, SearchConfig};
use crate::generator::{generate_schedule, ShuffledOrder};
use crate::grid::{GridCell, ScheduleGrid};
use crate::roster::Roster;
use crate::search::search;

/// One filled grid cell (Python view).
#[pyclass(name = "GridCell")]
#[derive(Clone, Debug)]
pub struct PyGridCell {
    #[pyo3(get)]
    pub round: usize,
    #[pyo3(get)]
    pub from_id: u32,
    #[pyo3(get)]
    pub from_name: String,
    #[pyo3(get)]
    pub to_id: u32,
    #[pyo3(get)]
    pub to_name: String,
    #[pyo3(get)]
    pub flagged: bool,
}

#[pymethods]
impl PyGridCell {
    fn __repr__(&self) -> String {
        format!(
            "GridCell(round={}, {:?}->{:?}, flagged={})",
            self.round, self.from_name, self.to_name, self.flagged
        )
    }
}

impl From<GridCell> for PyGridCell {
    fn from(cell: GridCell) -> Self {
        Self {
            round: cell.round,
            from_id: cell.from.0,
            from_name: cell.from_name,
            to_id: cell.to.0,
            to_name: cell.to_name,
            flagged: cell.flagged,
        }
    }
}

type PyRows = Vec<Vec<Option<PyGridCell>>>;

fn to_py_rows(grid: ScheduleGrid) -> PyRows {
    grid.rows()
        .iter()
        .map(|row| row.iter().map(|c| c.clone().map(PyGridCell::from)).collect())
        .collect()
}

fn order_for(seed: Option<u64>) -> ShuffledOrder<StdRng> {
    match seed {
        Some(s) => ShuffledOrder::seeded(s),
        None => ShuffledOrder::from_entropy(),
    }
}

/// Result of a search (Python view).
#[pyclass(name = "SearchResult")]
#[derive(Clone, Debug)]
pub struct PySearchResult {
    /// "perfect", "best_effort" or "none_found".
    #[pyo3(get)]
    pub status: String,
    #[pyo3(get)]
    pub tries: usize,
    #[pyo3(get)]
    pub missing: Option<usize>,
    #[pyo3(get)]
    pub max_per_round: Option<usize>,
    /// Empty when nothing qualified.
    #[pyo3(get)]
    pub rows: PyRows,
}

#[pymethods]
impl PySearchResult {
    fn __repr__(&self) -> String {
        format!(
            "SearchResult(status={:?}, tries={}, missing={:?})",
            self.status, self.tries, self.missing
        )
    }
}

/// Generate a single schedule without searching.
#[pyfunction]
#[pyo3(name = "generate_schedule", signature = (names, rounds, seed=None, verbosity=0))]
fn py_generate_schedule(
    names: Vec<String>,
    rounds: usize,
    seed: Option<u64>,
    verbosity: u8,
) -> PyRows {
    let roster = Roster::from_names(names);
    let schedule = generate_schedule(&roster.ids(), rounds, &mut order_for(seed), verbosity);
    to_py_rows(ScheduleGrid::build(
        &schedule,
        &roster,
        rounds,
        CapKey::default(),
    ))
}

/// Run the best-of-N search.
///
/// # Raises
/// * ValueError if `cap_key` is not "recipient" or "sender"
#[pyfunction]
#[pyo3(
    name = "search_schedule",
    signature = (names, rounds, submission_cap, max_tries=2000, cap_key="recipient", seed=None, verbosity=0)
)]
#[allow(clippy::too_many_arguments)]
fn py_search_schedule(
    names: Vec<String>,
    rounds: usize,
    submission_cap: usize,
    max_tries: usize,
    cap_key: &str,
    seed: Option<u64>,
    verbosity: u8,
) -> PyResult<PySearchResult> {
    let cap_key: CapKey = cap_key
        .parse()
        .map_err(|e: crate::config::ConfigError| {
            pyo3::exceptions::PyValueError::new_err(e.to_string())
        })?;
    let config = SearchConfig {
        rounds,
        submission_cap,
        max_tries,
        cap_key,
        verbosity,
    };
    let roster = Roster::from_names(names);
    let report = search(&roster.ids(), &config, &mut order_for(seed));

    let status = report.outcome.status().to_string();
    let (missing, max_per_round, rows) = match report.outcome.into_candidate() {
        Some(c) => (
            Some(c.score.missing),
            Some(c.score.max_per_round),
            to_py_rows(ScheduleGrid::build(&c.schedule, &roster, rounds, cap_key)),
        ),
        None => (None, None, Vec::new()),
    };

    Ok(PySearchResult {
        status,
        tries: report.tries,
        missing,
        max_per_round,
        rows,
    })
}

/// The pass_schedule Python module.
#[pymodule]
fn pass_schedule(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGridCell>()?;
    m.add_class::<PySearchResult>()?;

    m.add_function(wrap_pyfunction!(py_generate_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_search_schedule, m)?)?;

    Ok(())
}
