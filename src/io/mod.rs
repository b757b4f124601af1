//! # Input / Output of hdf5 files
//!
//! - Generic read and write of ndarrays, see [`read_write_hdf5`]
//! - [`ReadWrite`] trait for types that persist themselves
//! - Reader of the solver's snapshot files, see [`SnapshotFile`]
pub mod read_write_hdf5;
pub mod snapshots;
pub mod traits;
pub use crate::error::Result;
pub use hdf5::H5Type;
pub use read_write_hdf5::{
    read_from_hdf5, read_scalar_from_hdf5, read_slice_from_hdf5,
    read_string_from_hdf5, write_scalar_to_hdf5, write_string_to_hdf5, write_to_hdf5,
};
pub use snapshots::{visit_writes, SnapshotFile};
pub use traits::ReadWrite;
