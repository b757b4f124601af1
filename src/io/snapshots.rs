//! Reader of the solver's snapshot files
//!
//! Layout of a file:
//!
//! | dataset              | shape             |
//! |----------------------|-------------------|
//! | `tasks/<name>`       | (writes, nx, nz)  |
//! | `scales/sim_time`    | (writes)          |
//! | `scales/write_number`| (writes)          |
//! | `scales/x/1.0`       | (nx)              |
//! | `scales/z/1.0`       | (nz)              |
use super::read_write_hdf5::{read_from_hdf5, read_slice_from_hdf5};
use crate::error::{Error, Result};
use ndarray::{s, Array1, Array2, Array3, Axis, Ix1, Ix3};
use std::path::{Path, PathBuf};

/// Name of simulation time dataset
pub const SIM_TIME: &str = "scales/sim_time";
/// Name of write number dataset
pub const WRITE_NUMBER: &str = "scales/write_number";
/// Name of horizontal grid dataset
pub const X_SCALE: &str = "scales/x/1.0";
/// Name of vertical grid dataset
pub const Z_SCALE: &str = "scales/z/1.0";

/// Dataset name of a task
pub fn task_name(name: &str) -> String {
    format!("tasks/{}", name)
}

/// Single snapshot file, the time scales are read on opening,
/// tasks are read on demand.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    filename: PathBuf,
    sim_time: Array1<f64>,
    write_number: Array1<i64>,
}

impl SnapshotFile {
    /// Open snapshot file
    ///
    /// # Errors
    /// File or scales do not exist, or number of times
    /// and write numbers differ.
    pub fn open<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let filename = filename.as_ref().to_path_buf();
        let sim_time = read_from_hdf5::<f64, Ix1, _>(&filename, SIM_TIME)?;
        let write_number = read_from_hdf5::<i64, Ix1, _>(&filename, WRITE_NUMBER)?;
        if sim_time.len() != write_number.len() {
            return Err(Error::shape(
                format!("{} write numbers", sim_time.len()),
                write_number.shape(),
            ));
        }
        Ok(Self {
            filename,
            sim_time,
            write_number,
        })
    }

    /// Path of file
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Number of writes in this file
    pub fn len(&self) -> usize {
        self.sim_time.len()
    }

    /// File contains no writes
    pub fn is_empty(&self) -> bool {
        self.sim_time.is_empty()
    }

    /// Simulation time of write `i`
    pub fn sim_time(&self, i: usize) -> Option<f64> {
        self.sim_time.get(i).copied()
    }

    /// Global write number of write `i`
    pub fn write_number(&self, i: usize) -> Option<i64> {
        self.write_number.get(i).copied()
    }

    /// Horizontal grid points
    ///
    /// # Errors
    /// Dataset missing or not one dimensional
    pub fn x(&self) -> Result<Array1<f64>> {
        read_from_hdf5::<f64, Ix1, _>(&self.filename, X_SCALE)
    }

    /// Vertical grid points
    ///
    /// # Errors
    /// Dataset missing or not one dimensional
    pub fn z(&self) -> Result<Array1<f64>> {
        read_from_hdf5::<f64, Ix1, _>(&self.filename, Z_SCALE)
    }

    /// All writes of a task, shape (writes, nx, nz)
    ///
    /// # Errors
    /// Task missing or not three dimensional
    pub fn task(&self, name: &str) -> Result<Array3<f64>> {
        read_from_hdf5::<f64, Ix3, _>(&self.filename, &task_name(name))
    }

    /// Write `i` of a task, shape (nx, nz)
    ///
    /// # Errors
    /// Task missing, not three dimensional or `i` out of range
    pub fn task_slice(&self, name: &str, i: usize) -> Result<Array2<f64>> {
        if i >= self.len() {
            return Err(Error::shape(format!("write < {}", self.len()), i));
        }
        let data = read_slice_from_hdf5::<f64, _, _, _>(
            &self.filename,
            &task_name(name),
            s![i..i + 1, .., ..],
        )?;
        Ok(data.index_axis_move(Axis(0), 0))
    }

    /// Names of all tasks in the file
    ///
    /// # Errors
    /// No tasks group
    pub fn task_names(&self) -> Result<Vec<String>> {
        let file = hdf5::File::open(&self.filename)?;
        Ok(file.group("tasks")?.member_names()?)
    }
}

/// Call `f` for every write of every file, in order.
///
/// `f` receives the opened file and the index of the write
/// inside this file.
///
/// # Errors
/// A file can not be opened, or `f` fails.
pub fn visit_writes<P, F>(files: &[P], mut f: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&SnapshotFile, usize) -> Result<()>,
{
    for filename in files {
        let file = SnapshotFile::open(filename)?;
        log::debug!("Visit {:?} with {} writes", file.filename(), file.len());
        for i in 0..file.len() {
            f(&file, i)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_write_hdf5::write_to_hdf5;
    use ndarray::{array, Array};

    fn snapshot(name: &str, nt: usize) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "stratwave_snap_{}_{}.h5",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let (nx, nz) = (4, 3);
        let w = Array::from_shape_fn((nt, nx, nz), |(t, i, k)| (t * 100 + i * 10 + k) as f64);
        write_to_hdf5(&path, &task_name("w"), &w).unwrap();
        let times = Array1::from_shape_fn(nt, |t| 0.25 * t as f64);
        let writes = Array1::from_shape_fn(nt, |t| t as i64 + 1);
        write_to_hdf5(&path, SIM_TIME, &times).unwrap();
        write_to_hdf5(&path, WRITE_NUMBER, &writes).unwrap();
        write_to_hdf5(&path, X_SCALE, &Array1::linspace(0., 0.75, nx)).unwrap();
        write_to_hdf5(&path, Z_SCALE, &array![-1., -0.5, 0.]).unwrap();
        path
    }

    #[test]
    fn test_open_and_slice() {
        let path = snapshot("open", 3);
        let file = SnapshotFile::open(&path).unwrap();
        assert_eq!(file.len(), 3);
        assert_eq!(file.sim_time(2), Some(0.5));
        assert_eq!(file.write_number(0), Some(1));
        assert_eq!(file.sim_time(3), None);
        assert_eq!(file.x().unwrap().len(), 4);
        assert_eq!(file.z().unwrap()[0], -1.);
        let w = file.task_slice("w", 1).unwrap();
        assert_eq!(w.shape(), &[4, 3]);
        assert_eq!(w[[2, 1]], 121.);
        assert_eq!(file.task("w").unwrap().shape(), &[3, 4, 3]);
        assert_eq!(file.task_names().unwrap(), vec!["w".to_owned()]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_task_and_write() {
        let path = snapshot("missing", 2);
        let file = SnapshotFile::open(&path).unwrap();
        assert!(matches!(file.task_slice("b", 0), Err(Error::Hdf5(_))));
        assert!(matches!(file.task_slice("w", 2), Err(Error::Shape { .. })));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_visit_writes() {
        let a = snapshot("visit_a", 2);
        let b = snapshot("visit_b", 3);
        let mut times = vec![];
        visit_writes(&[&a, &b], |file, i| {
            times.push(file.sim_time(i).unwrap());
            Ok(())
        })
        .unwrap();
        assert_eq!(times, vec![0., 0.25, 0., 0.25, 0.5]);
        assert!(visit_writes(&["does_not_exist.h5"], |_, _| Ok(())).is_err());
        let _ = std::fs::remove_file(&a);
        let _ = std::fs::remove_file(&b);
    }
}
