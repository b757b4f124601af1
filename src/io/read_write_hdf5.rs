//! `Hdf5` functions to read and write ndarrays
use super::H5Type;
use crate::error::{Error, Result};
use hdf5::types::VarLenUnicode;
use ndarray::{Array, Array1, ArrayBase, ArrayD, Dimension};
use std::path::Path;
use std::str::FromStr;

/// Open file for writing, create it if it does not exist
fn open_or_create<P: AsRef<Path>>(filename: P) -> hdf5::Result<hdf5::File> {
    if filename.as_ref().exists() {
        hdf5::File::append(filename)
    } else {
        hdf5::File::create(filename)
    }
}

/// Read scalar from hdf5
///
/// # Errors
/// When file or variable does not exists, or when
/// the variable is not of size 1.
pub fn read_scalar_from_hdf5<T, P>(filename: P, name: &str) -> Result<T>
where
    T: H5Type + Clone + Copy,
    P: AsRef<Path>,
{
    let file = hdf5::File::open(filename)?;
    let dset = file.dataset(name)?;
    let scalar: Array1<T> = dset.read_1d()?;
    if scalar.len() != 1 {
        return Err(Error::shape("[1]", scalar.shape()));
    }
    Ok(scalar[0])
}

/// Interface to write scalar to hdf5 file
///
/// # Errors
/// When file can not be created.
pub fn write_scalar_to_hdf5<T, P>(filename: P, name: &str, scalar: T) -> Result<()>
where
    T: H5Type + Copy,
    P: AsRef<Path>,
{
    let x = Array1::<T>::from_elem(1, scalar);
    write_to_hdf5(filename, name, &x)
}

/// Write string to hdf5 file, e.g. a solver expression
///
/// # Errors
/// When file can not be created or the string contains
/// a null byte.
pub fn write_string_to_hdf5<P: AsRef<Path>>(filename: P, name: &str, value: &str) -> Result<()> {
    let s = VarLenUnicode::from_str(value)
        .map_err(|e| hdf5::Error::Internal(format!("Invalid string {:?}: {}", value, e)))?;
    write_to_hdf5(filename, name, &Array1::from_elem(1, s))
}

/// Read string written by [`write_string_to_hdf5`]
///
/// # Errors
/// When file or variable does not exists.
pub fn read_string_from_hdf5<P: AsRef<Path>>(filename: P, name: &str) -> Result<String> {
    let file = hdf5::File::open(filename)?;
    let data: Array1<VarLenUnicode> = file.dataset(name)?.read_1d()?;
    data.get(0)
        .map(|s| s.as_str().to_owned())
        .ok_or_else(|| Error::shape("[1]", data.shape()))
}

/// Read ndarray from hdf5 file
///
/// # Errors
/// Errors when file/variable does not exist and
/// when the dimensionality does not match `D`.
pub fn read_from_hdf5<A, D, P>(filename: P, varname: &str) -> Result<Array<A, D>>
where
    A: H5Type,
    D: Dimension,
    P: AsRef<Path>,
{
    // Open file
    let file = hdf5::File::open(filename)?;

    //Read dataset
    let data = file.dataset(varname)?;
    let y: ArrayD<A> = data.read_dyn::<A>()?;

    // Dyn to static
    let shape = y.shape().to_vec();
    y.into_dimensionality::<D>()
        .map_err(|_| Error::shape(format!("{:?} dimensions", D::NDIM), shape))
}

/// Read slice of ndarray from hdf5 file.
///
/// # Errors
/// Non-existing file or dataset, or a slice
/// out of bounds.
pub fn read_slice_from_hdf5<A, D, T, P>(
    filename: P,
    varname: &str,
    slice: ndarray::SliceInfo<T, D, D>,
) -> Result<Array<A, D>>
where
    A: H5Type,
    D: Dimension,
    T: AsRef<[ndarray::SliceInfoElem]>,
    P: AsRef<Path>,
{
    // Open file
    let file = hdf5::File::open(filename)?;
    //Read dataset
    let data = file.dataset(varname)?;
    let y: ArrayD<A> = data.read_slice(slice)?;
    // Dyn to static
    let shape = y.shape().to_vec();
    y.into_dimensionality::<D>()
        .map_err(|_| Error::shape(format!("{:?} dimensions", D::NDIM), shape))
}

/// Write ndarray to hdf5 file
///
/// # Errors
/// When file can not be created or when file and
/// variable exists, but variable has different
/// shape than input array (assign new value will fail).
pub fn write_to_hdf5<A, S, D, P>(
    filename: P,
    varname: &str,
    array: &ArrayBase<S, D>,
) -> Result<()>
where
    A: H5Type,
    S: ndarray::Data<Elem = A>,
    D: ndarray::Dimension,
    P: AsRef<Path>,
{
    // Open file
    let file = open_or_create(filename)?;

    //Write dataset
    let dset = match file.dataset(varname) {
        // Overwrite
        Ok(dset) => dset,
        // Create new dataset
        std::prelude::v1::Err(..) => file
            .new_dataset::<A>()
            .no_chunk()
            .shape(array.shape())
            .create(varname)?,
    };
    dset.write(&array.view())?;
    Ok(())
}
