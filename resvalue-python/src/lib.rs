use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use resvalue_codec::IndexError;

fn index_error_to_py(e: IndexError) -> PyErr {
    PyIndexError::new_err(e.to_string())
}

/// Byte offset of the `index`-th code point; `index == len` maps to the end.
fn byte_offset(s: &str, index: usize) -> Option<usize> {
    s.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .nth(index)
}

#[pyfunction]
fn escape_native(raw: &str) -> String {
    resvalue_codec::escape(raw).into_owned()
}

#[pyfunction]
#[pyo3(signature = (text, resolve_entities = false, trim = true))]
fn unescape_native(text: &str, resolve_entities: bool, trim: bool) -> String {
    resvalue_codec::unescape(text, resolve_entities, trim).into_owned()
}

/// `index` counts code points, like Python string indexing.
#[pyfunction]
fn is_escaped_native(text: &str, index: usize) -> PyResult<bool> {
    let offset = byte_offset(text, index).ok_or_else(|| {
        PyIndexError::new_err(format!(
            "index {index} out of range for string of {} characters",
            text.chars().count()
        ))
    })?;
    resvalue_codec::try_is_escaped(text, offset).map_err(index_error_to_py)
}

#[pymodule]
fn _resvalue_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(escape_native, m)?)?;
    m.add_function(wrap_pyfunction!(unescape_native, m)?)?;
    m.add_function(wrap_pyfunction!(is_escaped_native, m)?)?;
    Ok(())
}
