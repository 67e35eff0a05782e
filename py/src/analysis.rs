use pyo3::{exceptions::PyValueError, prelude::*};

use rs_grm_hor::{analyse_monomers, Analysis, FamilyConfig, GrmConfig};

use crate::monomer::{unwrap_monomers, PyMonomer};

#[pyclass]
struct PyMonomerIterator {
    iter: std::vec::IntoIter<PyMonomer>,
}

#[pymethods]
impl PyMonomerIterator {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }
    fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<PyMonomer> {
        slf.iter.next()
    }
}

#[pyclass(name = "Analysis")]
/// A Python wrapper class for [`Analysis`]
pub(crate) struct PyAnalysis(Analysis);

#[pymethods]
impl PyAnalysis {
    #[new]
    #[pyo3(signature = (monomers, divergence_limit=5.0, max_period=60, min_gap=1000))]
    fn new(
        monomers: Vec<PyMonomer>,
        divergence_limit: f64,
        max_period: usize,
        min_gap: usize,
    ) -> PyResult<Self> {
        let family_config = FamilyConfig::default().with_divergence_limit(divergence_limit);
        let grm_config = GrmConfig::default()
            .with_max_period(max_period)
            .with_min_gap(min_gap);
        analyse_monomers(unwrap_monomers(monomers), &family_config, &grm_config)
            .map_err(|err| PyValueError::new_err(err.to_string()))
            .map(PyAnalysis)
    }

    fn __len__(slf: PyRef<'_, Self>) -> usize {
        slf.0.monomers.len()
    }

    fn __iter__(slf: PyRef<'_, Self>) -> PyMonomerIterator {
        // Expensive.
        PyMonomerIterator {
            iter: slf
                .0
                .monomers
                .iter()
                .map(|monomer| PyMonomer(monomer.clone()))
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }

    /// Family of each representative monomer. Empty for all others.
    #[getter]
    fn families(&self) -> Vec<Vec<usize>> {
        (0..self.0.families.len())
            .map(|i| self.0.families.family(i).to_vec())
            .collect()
    }

    #[getter]
    fn labels(&self) -> Vec<i64> {
        self.0.labels.clone()
    }

    #[getter]
    fn frequencies(&self) -> Vec<usize> {
        self.0.grm.frequencies.clone()
    }

    #[getter]
    fn fragments(&self) -> Vec<usize> {
        self.0.grm.fragments.clone()
    }

    /// `(index, length)` of each gap.
    #[getter]
    fn gaps(&self) -> Vec<(usize, usize)> {
        self.0
            .grm
            .gap_indices
            .iter()
            .copied()
            .zip(self.0.grm.gap_lengths.iter().copied())
            .collect()
    }

    /// `(column, row, repeated)` of each monomer in the HOR scheme.
    #[getter]
    fn scheme(&self) -> Vec<(i64, usize, bool)> {
        self.0
            .scheme
            .cells
            .iter()
            .map(|cell| (cell.column, cell.row, cell.repeated))
            .collect()
    }

    #[getter]
    fn row_starts(&self) -> Vec<usize> {
        self.0.scheme.row_starts.clone()
    }

    #[pyo3(signature = (n=7))]
    fn top_periods(&self, n: usize) -> Vec<(usize, usize)> {
        self.0.grm.top_periods(n)
    }
}
