//! Reading points from disk.

use std::path::Path;

use ndarray::Array2;

/// Reads a 2-d array of `f64` from a `.npy` file, one point per row.
pub fn read_npy<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>, String> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("npy") => {
            let array: Array2<f64> = ndarray_npy::read_npy(path).map_err(|e| e.to_string())?;
            Ok(array.outer_iter().map(|row| row.to_vec()).collect())
        }
        Some(ext) => Err(format!("Unknown data format {ext} for path: {}", path.display())),
        None => Err(format!(
            "Could not determine data format without extension for path: {}",
            path.display()
        )),
    }
}
