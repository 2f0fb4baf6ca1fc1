//! Session bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::games::{self, GAME_NAMES};
use crate::options::{AttributeKey, OptionId};
use crate::round::{RoundController, SessionStatus};

use super::py_core::{PyOption, PyVerdict};
use super::to_py_err;

/// Names accepted by `Session(name, seed)`.
#[pyfunction]
pub fn game_names() -> Vec<&'static str> {
    GAME_NAMES.to_vec()
}

/// Python wrapper for RoundController.
///
/// One player session of a bundled game.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: RoundController,
}

#[pymethods]
impl PySession {
    /// Start a session.
    ///
    /// # Arguments
    /// - name: One of `game_names()`
    /// - seed: RNG seed for target draws and random dials
    #[new]
    #[pyo3(signature = (name, seed = 42))]
    fn new(name: &str, seed: u64) -> PyResult<Self> {
        let game = games::by_name(name).map_err(to_py_err)?;
        let inner = RoundController::new(game, seed).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Rebuild a session from `snapshot()` bytes.
    #[staticmethod]
    fn restore(name: &str, data: &[u8]) -> PyResult<Self> {
        let game = games::by_name(name).map_err(to_py_err)?;
        let inner = RoundController::restore(game, data).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn game(&self) -> String {
        self.inner.game().name().to_string()
    }

    #[getter]
    fn round(&self) -> u32 {
        self.inner.round()
    }

    #[getter]
    fn target_key(&self) -> PyResult<String> {
        Ok(self.inner.target().map_err(to_py_err)?.key.clone())
    }

    #[getter]
    fn target_title(&self) -> PyResult<String> {
        Ok(self.inner.target().map_err(to_py_err)?.title.clone())
    }

    #[getter]
    fn balance(&self) -> i64 {
        self.inner.ledger().balance
    }

    #[getter]
    fn reputation(&self) -> Option<i64> {
        self.inner.ledger().reputation
    }

    /// Title earned by the current balance, for games that rank players.
    #[getter]
    fn rank(&self) -> Option<String> {
        let rules = &self.inner.game().config.session;
        self.inner.ledger().rank(rules).map(str::to_owned)
    }

    #[getter]
    fn level(&self) -> u32 {
        self.inner.ledger().level()
    }

    /// Why the session ended, or None while it is active.
    #[getter]
    fn ended(&self) -> Option<String> {
        match self.inner.status() {
            SessionStatus::Active => None,
            SessionStatus::Ended(reason) => Some(reason.to_string()),
        }
    }

    /// Every option in the game catalog.
    fn options(&self) -> Vec<PyOption> {
        self.inner.game().options.iter().cloned().map(PyOption).collect()
    }

    /// IDs currently in the build, in pick order.
    fn selected(&self) -> Vec<String> {
        self.inner
            .build()
            .picks()
            .iter()
            .map(|p| p.option.as_str().to_string())
            .collect()
    }

    /// Current dial setting, or None if the game has no such dial.
    fn dial(&self, key: &str) -> Option<i64> {
        self.inner.build().dial(&AttributeKey::from(key))
    }

    fn select(&mut self, id: &str) -> PyResult<()> {
        self.inner.select(&OptionId::new(id)).map_err(to_py_err)
    }

    fn deselect(&mut self, id: &str) -> bool {
        self.inner.deselect(&OptionId::new(id))
    }

    fn toggle(&mut self, id: &str) -> PyResult<bool> {
        self.inner.toggle(&OptionId::new(id)).map_err(to_py_err)
    }

    /// Set a player dial. Returns the clamped value.
    fn set_dial(&mut self, key: &str, value: i64) -> PyResult<i64> {
        self.inner.set_dial(key, value).map_err(to_py_err)
    }

    fn preview(&self) -> PyResult<PyVerdict> {
        self.inner.preview().map(PyVerdict).map_err(to_py_err)
    }

    fn submit(&mut self) -> PyResult<PyVerdict> {
        self.inner.submit().map(PyVerdict).map_err(to_py_err)
    }

    fn abandon(&mut self) {
        self.inner.abandon();
    }

    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.inner.snapshot().map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn __repr__(&self) -> String {
        let target = self
            .inner
            .target()
            .map(|t| t.key.clone())
            .unwrap_or_else(|_| self.inner.target_id().to_string());
        format!(
            "Session({}, round={}, target={}, balance={})",
            self.inner.game().name(),
            self.inner.round(),
            target,
            self.inner.ledger().balance
        )
    }
}
