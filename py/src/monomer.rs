use pyo3::{exceptions::PyValueError, prelude::*};

use rs_grm_hor::Monomer;

#[pyclass(name = "Monomer")]
#[derive(Clone)]
/// A Python wrapper class for [`Monomer`]
pub(crate) struct PyMonomer(pub(crate) Monomer);

#[pymethods]
impl PyMonomer {
    #[new]
    fn new(value: &str) -> PyResult<Self> {
        Monomer::new(value)
            .map_err(|err| PyValueError::new_err(err.to_string()))
            .map(PyMonomer)
    }

    fn __str__(slf: PyRef<'_, Self>) -> String {
        format!("{}", slf.0)
    }

    #[getter]
    fn pos(&self) -> usize {
        self.0.pos
    }

    #[getter]
    fn dst(&self) -> usize {
        self.0.dst
    }

    #[getter]
    fn div(&self) -> f64 {
        self.0.div
    }

    #[getter]
    fn div2(&self) -> u32 {
        self.0.div2
    }

    #[getter]
    fn ort(&self) -> String {
        self.0.ort.to_string()
    }

    #[getter]
    fn seq(&self) -> String {
        self.0.seq_str().into_owned()
    }
}

pub(crate) fn unwrap_monomers(monomers: Vec<PyMonomer>) -> Vec<Monomer> {
    monomers.into_iter().map(|mon| mon.0).collect()
}

pub(crate) fn wrap_monomers(monomers: Vec<Monomer>) -> Vec<PyMonomer> {
    monomers.into_iter().map(PyMonomer).collect()
}
