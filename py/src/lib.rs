pub use pyo3::prelude::*;

use std::{fs::File, io::BufWriter};

use pyo3::exceptions::{PyIOError, PyValueError};
use rs_grm_hor::{DetectorConfig, Orientation, ALPHA_SATELLITE_CONSENSUS};

mod analysis;
mod monomer;

use analysis::PyAnalysis;
use monomer::{unwrap_monomers, wrap_monomers, PyMonomer};

fn detector_config(max_divergence: f64, unit_len: usize) -> DetectorConfig {
    DetectorConfig::default()
        .with_max_divergence(max_divergence)
        .with_unit_len(unit_len)
}

/// Find monomers on one strand of `seq`.
#[pyfunction]
#[pyo3(signature = (seq, consensus=None, reverse=false, max_divergence=30.0, unit_len=171))]
fn find_monomers(
    seq: &str,
    consensus: Option<&str>,
    reverse: bool,
    max_divergence: f64,
    unit_len: usize,
) -> PyResult<Vec<PyMonomer>> {
    let consensus = consensus.map_or(ALPHA_SATELLITE_CONSENSUS, |cons| cons.as_bytes());
    let ort = if reverse {
        Orientation::ReverseComplement
    } else {
        Orientation::Direct
    };
    rs_grm_hor::find_monomers_with_config(
        &seq.to_ascii_uppercase().into_bytes(),
        consensus,
        ort,
        &detector_config(max_divergence, unit_len),
    )
    .map_err(|err| PyValueError::new_err(err.to_string()))
    .map(wrap_monomers)
}

/// Find monomers on both strands of `seq`.
#[pyfunction]
#[pyo3(signature = (seq, consensus=None, max_divergence=30.0, unit_len=171))]
fn find_all_monomers(
    seq: &str,
    consensus: Option<&str>,
    max_divergence: f64,
    unit_len: usize,
) -> PyResult<Vec<PyMonomer>> {
    let consensus = consensus.map_or(ALPHA_SATELLITE_CONSENSUS, |cons| cons.as_bytes());
    rs_grm_hor::find_all_monomers(
        &seq.to_ascii_uppercase().into_bytes(),
        consensus,
        &detector_config(max_divergence, unit_len),
    )
    .map_err(|err| PyValueError::new_err(err.to_string()))
    .map(wrap_monomers)
}

#[pyfunction]
#[pyo3(signature = (path, start=0))]
fn read_monomers(path: &str, start: usize) -> PyResult<Vec<PyMonomer>> {
    rs_grm_hor::read_monomers(path, start)
        .map_err(|err| PyValueError::new_err(err.to_string()))
        .map(wrap_monomers)
}

#[pyfunction]
fn write_monomers(path: &str, monomers: Vec<PyMonomer>) -> PyResult<()> {
    let file = File::create(path).map_err(|err| PyIOError::new_err(err.to_string()))?;
    rs_grm_hor::write_monomers(&mut BufWriter::new(file), &unwrap_monomers(monomers))
        .map_err(|err| PyIOError::new_err(err.to_string()))
}

#[pyfunction]
fn join_orientations(direct: Vec<PyMonomer>, reverse: Vec<PyMonomer>) -> Vec<PyMonomer> {
    wrap_monomers(rs_grm_hor::join_orientations(
        unwrap_monomers(direct),
        unwrap_monomers(reverse),
    ))
}

#[pymodule]
fn grm_hor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMonomer>()?;
    m.add_class::<PyAnalysis>()?;
    m.add_function(wrap_pyfunction!(find_monomers, m)?)?;
    m.add_function(wrap_pyfunction!(find_all_monomers, m)?)?;
    m.add_function(wrap_pyfunction!(join_orientations, m)?)?;
    m.add_function(wrap_pyfunction!(read_monomers, m)?)?;
    m.add_function(wrap_pyfunction!(write_monomers, m)?)?;
    Ok(())
}
