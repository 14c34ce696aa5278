//! Python bindings
//!
//! Python callers can hand us anything, so this is where the input-type
//! errors (`InvalidSource`, `NotAString`) are raised.

use pyo3::prelude::*;
use pyo3::types::PyString;

use crate::error::HousesError;
use crate::houses::{self, HousesParser};

/// Python type name of `obj`, for error messages
fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "object".to_string())
}

fn extract_str(obj: &Bound<'_, PyAny>, err: fn(String) -> HousesError) -> PyResult<String> {
    match obj.downcast::<PyString>() {
        Ok(s) => Ok(s.to_str()?.to_owned()),
        Err(_) => Err(err(type_name(obj)).into()),
    }
}

/// Street segment description compiled once and queried many times
#[pyclass(name = "HousesParser", frozen)]
pub struct PyHousesParser {
    inner: HousesParser,
}

#[pymethods]
impl PyHousesParser {
    /// Compile a description
    ///
    /// # Raises
    /// TypeError if `source` is not a string,
    /// ValueError if it has no house information
    #[new]
    fn new(source: &Bound<'_, PyAny>) -> PyResult<Self> {
        let source = extract_str(source, HousesError::InvalidSource)?;
        Ok(Self {
            inner: HousesParser::new(&source)?,
        })
    }

    /// Whether `house_number` belongs to the segment
    ///
    /// # Raises
    /// TypeError if `house_number` is not a string,
    /// ValueError if it is malformed or fractional
    fn is_included(&self, house_number: &Bound<'_, PyAny>) -> PyResult<bool> {
        let house_number = extract_str(house_number, HousesError::NotAString)?;
        Ok(self.inner.is_included(&house_number)?)
    }

    /// Compiled rules as a JSON string
    fn describe(&self) -> String {
        self.inner.describe().to_string()
    }

    #[getter]
    fn source(&self) -> &str {
        self.inner.source()
    }

    fn __repr__(&self) -> String {
        format!("HousesParser({:?})", self.inner.source())
    }
}

/// Check a house number against a description using the shared compile cache
///
/// # Example (Python)
/// ```python
/// is_house_included("нечетные 1-21, четные 2-28", "17/1")  # True
/// ```
#[pyfunction]
fn is_house_included(source: &Bound<'_, PyAny>, house_number: &Bound<'_, PyAny>) -> PyResult<bool> {
    let source = extract_str(source, HousesError::InvalidSource)?;
    let house_number = extract_str(house_number, HousesError::NotAString)?;
    Ok(houses::check_house(&source, &house_number)?)
}

/// Python module definition
#[pymodule]
fn street_houses(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHousesParser>()?;
    m.add_function(wrap_pyfunction!(is_house_included, m)?)?;
    Ok(())
}
