//! `ReadWrite` trait
use super::read_write_hdf5::{read_from_hdf5, write_to_hdf5};
use super::Result;
use crate::error::Error;
use ndarray::{ArrayBase, Data, DataMut, Dimension};

/// Read and write data (hdf5)
pub trait ReadWrite {
    /// Read data from hdf5 file
    ///
    /// # Errors
    /// Can't read file
    fn read(&mut self, filename: &str, varname: &str) -> Result<()>;
    /// Read data from hdf5 file and handle result
    fn read_unwrap(&mut self, filename: &str, varname: &str) {
        match self.read(filename, varname) {
            Ok(_) => log::info!("Reading file {:?} was successfull.", filename),
            Err(e) => log::error!("Error while reading file {:?}. Error: {}", filename, e),
        }
    }
    /// Write data to hdf5 file
    ///
    /// # Errors
    /// Can't write file
    fn write(&self, filename: &str, varname: &str) -> Result<()>;
    /// Write data to hdf5 file and handle result
    fn write_unwrap(&self, filename: &str, varname: &str) {
        if let Err(e) = self.write(filename, varname) {
            log::error!("Error while writing file {:?}. Error: {}", filename, e);
        }
    }
}

/// Implement on real type arrays
macro_rules! impl_read_write_real {
    ($a: ty) => {
        impl<S, D> ReadWrite for ArrayBase<S, D>
        where
            S: Data<Elem = $a> + DataMut,
            D: Dimension,
        {
            fn read(&mut self, filename: &str, varname: &str) -> Result<()> {
                let data = read_from_hdf5::<$a, D, _>(filename, varname)?;
                if data.shape() == self.shape() {
                    self.assign(&data);
                    Ok(())
                } else {
                    Err(Error::shape(format!("{:?}", self.shape()), data.shape()))
                }
            }

            fn write(&self, filename: &str, varname: &str) -> Result<()> {
                write_to_hdf5(filename, varname, self)
            }
        }
    };
}

impl_read_write_real!(f64);
