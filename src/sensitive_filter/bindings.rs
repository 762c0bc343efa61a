// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the sensitive word filter

use log::debug;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::config::FilterConfig;
use super::filter::SensitiveFilter;

/// Sensitive word filter exposed to Python
///
/// # Example (Python)
/// ```python
/// from sensitive_filter_rust import SensitiveFilterRust
///
/// config = {"keywords": ["gamble", "drugs"], "wordlist_path": "sensitive-words.txt"}
/// sf = SensitiveFilterRust(config)
///
/// print(sf.filter("no g-a-m-b-l-e here"))  # "no *** here"
/// print(sf.filter("   "))                  # None
/// ```
#[pyclass(frozen)]
pub struct SensitiveFilterRust {
    filter: SensitiveFilter,
}

#[pymethods]
impl SensitiveFilterRust {
    /// Create a new filter
    ///
    /// # Configuration Keys
    /// * `keywords` (list[str]): Keywords to load inline
    /// * `wordlist_path` (str): File with one keyword per line; read errors are logged, not raised
    /// * `replacement` (str): Marker for matched keywords (default: "***")
    #[new]
    #[pyo3(signature = (config_dict=None))]
    pub fn new(config_dict: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => FilterConfig::from_py_dict(dict).map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid config: {}", e))
            })?,
            None => FilterConfig::default(),
        };

        Ok(Self {
            filter: SensitiveFilter::from_config(&config),
        })
    }

    /// Mask sensitive words; returns None for None, empty or blank text
    #[pyo3(signature = (text))]
    pub fn filter(&self, text: Option<&str>) -> Option<String> {
        text.and_then(|t| self.filter.filter(t))
    }

    /// List matched spans as dicts with `value`, `start` and `end` (character offsets)
    pub fn find_matches(&self, py: Python<'_>, text: &str) -> PyResult<Py<PyAny>> {
        let py_list = PyList::empty(py);

        for m in self.filter.find_matches(text) {
            let item_dict = PyDict::new(py);
            item_dict.set_item("value", m.value)?;
            item_dict.set_item("start", m.start)?;
            item_dict.set_item("end", m.end)?;
            py_list.append(item_dict)?;
        }

        Ok(py_list.into_any().unbind())
    }

    pub fn contains_sensitive(&self, text: &str) -> bool {
        self.filter.contains_sensitive(text)
    }

    /// Filter every string inside nested dicts and lists
    ///
    /// # Returns
    /// Tuple of (modified: bool, new_data: Any)
    #[pyo3(signature = (data, path=""))]
    pub fn filter_nested(
        &self,
        py: Python<'_>,
        data: &Bound<'_, PyAny>,
        path: &str,
    ) -> PyResult<(bool, Py<PyAny>)> {
        if let Ok(text) = data.extract::<String>() {
            return match self.filter.filter(&text) {
                Some(masked) if masked != text => {
                    debug!("Masked sensitive words at '{}'", path);
                    Ok((true, masked.into_pyobject(py)?.into_any().unbind()))
                }
                _ => Ok((false, data.clone().unbind())),
            };
        }

        if let Ok(dict) = data.downcast::<PyDict>() {
            let mut modified = false;
            let new_dict = PyDict::new(py);

            for (key, value) in dict.iter() {
                let key_str: String = key.str()?.extract()?;
                let new_path = if path.is_empty() {
                    key_str
                } else {
                    format!("{}.{}", path, key_str)
                };

                let (val_modified, new_value) = self.filter_nested(py, &value, &new_path)?;
                modified |= val_modified;
                new_dict.set_item(key, new_value.bind(py))?;
            }

            return Ok((modified, new_dict.into_any().unbind()));
        }

        if let Ok(list) = data.downcast::<PyList>() {
            let mut modified = false;
            let new_list = PyList::empty(py);

            for (idx, item) in list.iter().enumerate() {
                let new_path = format!("{}[{}]", path, idx);
                let (item_modified, new_item) = self.filter_nested(py, &item, &new_path)?;
                modified |= item_modified;
                new_list.append(new_item.bind(py))?;
            }

            return Ok((modified, new_list.into_any().unbind()));
        }

        // Other types: no processing
        Ok((false, data.clone().unbind()))
    }

    #[getter]
    pub fn keyword_count(&self) -> usize {
        self.filter.keyword_count()
    }

    #[getter]
    pub fn replacement(&self) -> String {
        self.filter.replacement().to_string()
    }
}
