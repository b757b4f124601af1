//! Implement io routines for `Problem`
//!
//! Layout of the setup file:
//! - `grid/x`, `grid/z`
//! - `profiles/BP`, `profiles/SL`, `profiles/RF`, `profiles/window`
//! - `initial/b`
//! - `parameters/<name>`
//! - `substitutions/<name>`, `equations/<i>`, `bcs/<i>` as strings
use super::Problem;
use crate::io::read_write_hdf5::{
    read_scalar_from_hdf5, read_string_from_hdf5, write_scalar_to_hdf5, write_string_to_hdf5,
};
use crate::io::traits::ReadWrite;
use crate::io::Result;

impl Problem {
    /// Read profiles and parameters from a setup file into
    /// a problem of the same size
    ///
    /// # Errors
    /// Failed to read, or grid sizes differ
    pub fn read(&mut self, filename: &str) -> Result<()> {
        self.grid.x.read(filename, "grid/x")?;
        self.grid.z.read(filename, "grid/z")?;
        self.bp.read(filename, "profiles/BP")?;
        self.sl.read(filename, "profiles/SL")?;
        self.rf.read(filename, "profiles/RF")?;
        self.window.read(filename, "profiles/window")?;
        self.initial_b.read(filename, "initial/b")?;
        for (name, value) in &mut self.parameters {
            *value = read_scalar_from_hdf5::<f64, _>(filename, &format!("parameters/{}", name))?;
        }
        for (name, expr) in &mut self.substitutions {
            *expr = read_string_from_hdf5(filename, &format!("substitutions/{}", name))?;
        }
        log::info!(" <== {:?}", filename);
        Ok(())
    }

    /// Read setup file, and handle error
    pub fn read_unwrap(&mut self, filename: &str) {
        match self.read(filename) {
            Ok(_) => log::info!("Reading file {:?} was successfull.", filename),
            Err(e) => log::error!("Error while reading file {:?}. Error: {}", filename, e),
        }
    }

    /// Write setup file
    ///
    /// # Errors
    /// Failed to write
    pub fn write(&self, filename: &str) -> Result<()> {
        self.grid.x.write(filename, "grid/x")?;
        self.grid.z.write(filename, "grid/z")?;
        for (name, profile) in self.ncc() {
            profile.write(filename, &format!("profiles/{}", name))?;
        }
        self.window.write(filename, "profiles/window")?;
        self.initial_b.write(filename, "initial/b")?;
        // Write scalars
        for (name, value) in &self.parameters {
            write_scalar_to_hdf5(filename, &format!("parameters/{}", name), *value)?;
        }
        // Write expressions
        for (name, expr) in &self.substitutions {
            write_string_to_hdf5(filename, &format!("substitutions/{}", name), expr)?;
        }
        for (i, eq) in self.equations.iter().enumerate() {
            write_string_to_hdf5(filename, &format!("equations/{}", i), eq)?;
        }
        for (i, bc) in self.boundary_conditions.iter().enumerate() {
            write_string_to_hdf5(filename, &format!("bcs/{}", i), bc)?;
        }
        log::info!(" ==> {:?}", filename);
        Ok(())
    }

    /// Write setup file, and handle error
    pub fn write_unwrap(&self, filename: &str) {
        if let Err(e) = self.write(filename) {
            log::error!("Error while writing file {:?}. Error: {}", filename, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::io::read_write_hdf5::read_string_from_hdf5;
    use crate::switchboard::{Experiment, Switchboard};

    #[test]
    fn test_write_read_problem() {
        let path = std::env::temp_dir().join(format!("stratwave_setup_{}.h5", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let filename = path.to_str().unwrap();

        let mut sb = Switchboard::default();
        sb.simulation.n_x = 8;
        sb.simulation.n_z = 9;
        sb.simulation.noise_amplitude = 1e-3;
        sb.damping.use_sponge = true;
        let problem = Experiment::from_switchboard(sb).unwrap().problem().unwrap();
        problem.write(filename).unwrap();

        let mut back = problem.clone();
        back.sl.fill(0.);
        back.initial_b.fill(0.);
        back.parameters.iter_mut().for_each(|(_, v)| *v = 0.);
        back.read(filename).unwrap();
        assert_eq!(back, problem);
        assert_eq!(
            read_string_from_hdf5(&path, "equations/0").unwrap(),
            "dx(u) + wz = 0"
        );
        assert_eq!(
            read_string_from_hdf5(&path, "bcs/2").unwrap(),
            "left(w) = 0 if (nx != 0)"
        );
        let _ = std::fs::remove_file(&path);
    }
}
