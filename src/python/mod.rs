//! Python bindings for the lab-rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import lab_rules as lab
//!
//! print(lab.game_names())
//!
//! session = lab.Session("battery-baron", seed=42)
//! print(session.target_title)
//!
//! session.select("nmc")
//! session.select("liquid")
//! session.select("silicon")
//!
//! verdict = session.submit()
//! print(verdict.outcome, verdict.score, verdict.reason)
//!
//! saved = session.snapshot()
//! restored = lab.Session.restore("battery-baron", saved)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

pub(crate) fn to_py_err(err: crate::error::LabError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// lab_rules: rule matching and scoring for lab-simulation mini-games.
#[pymodule]
fn lab_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOption>()?;
    m.add_class::<PyVerdict>()?;
    m.add_class::<PySession>()?;
    m.add_function(wrap_pyfunction!(game_names, m)?)?;
    Ok(())
}
