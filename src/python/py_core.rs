//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::options::OptionDef;
use crate::rules::{Outcome, Verdict};

/// Read-only view of one option in a game catalog.
#[pyclass(name = "Option")]
#[derive(Clone, Debug)]
pub struct PyOption(pub OptionDef);

#[pymethods]
impl PyOption {
    #[getter]
    fn id(&self) -> String {
        self.0.id.as_str().to_string()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    /// Raw slot index.
    #[getter]
    fn slot(&self) -> u16 {
        self.0.slot.0
    }

    #[getter]
    fn cost(&self) -> i64 {
        self.0.cost
    }

    #[getter]
    fn blurb(&self) -> String {
        self.0.blurb.clone()
    }

    /// Integer attribute, or `default` when absent.
    #[pyo3(signature = (key, default = 0))]
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.0.get_int(key, default)
    }

    fn get_text(&self, key: &str) -> Option<String> {
        self.0.get_text(key).map(str::to_string)
    }

    fn __repr__(&self) -> String {
        format!("Option({}, cost={})", self.0.id, self.0.cost)
    }
}

/// Python wrapper for Verdict.
#[pyclass(name = "Verdict")]
#[derive(Clone, Debug)]
pub struct PyVerdict(pub Verdict);

#[pymethods]
impl PyVerdict {
    /// "success", "failure" or "incomplete".
    #[getter]
    fn outcome(&self) -> &'static str {
        match self.0.outcome {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Incomplete(_) => "incomplete",
        }
    }

    #[getter]
    fn score(&self) -> i64 {
        self.0.score
    }

    #[getter]
    fn reason(&self) -> Option<String> {
        self.0.reason()
    }

    /// Each violated requirement, in report order.
    #[getter]
    fn reasons(&self) -> Vec<String> {
        self.0.reasons.iter().map(ToString::to_string).collect()
    }

    #[getter]
    fn label(&self) -> Option<String> {
        self.0.label.clone()
    }

    #[getter]
    fn remark(&self) -> Option<String> {
        self.0.remark.clone()
    }

    #[getter]
    fn shortfall(&self) -> Option<i64> {
        self.0.shortfall()
    }

    fn is_success(&self) -> bool {
        self.0.is_success()
    }

    fn __repr__(&self) -> String {
        format!("Verdict({}, score={})", self.outcome(), self.0.score)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
