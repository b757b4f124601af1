//! # Frames
//! Render the wave field of snapshot files into png frames,
//! one frame per write.
//!
//! Each task gets a panel, coloured with a diverging map whose
//! scale is symmetric around zero. Title and colour bar ticks
//! are stored as text chunks of the png.
pub mod color;
pub mod frame;
use crate::error::Result;
use crate::io::{visit_writes, SnapshotFile};
use crate::switchboard::{Geometry, Plotting};
pub use frame::{panel_position, savename, tasks_for, title, ColorScale, Frame, Panel};
use std::path::Path;

/// Renders the writes of snapshot files
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRenderer {
    /// Name of experiment, shown in the title
    pub name: String,
    /// Tasks to plot
    pub tasks: Vec<&'static str>,
    /// Rows of panels
    pub nrows: usize,
    /// Columns of panels
    pub ncols: usize,
    /// Size of a panel in pixels (width, height)
    pub panel_size: (usize, usize),
    /// Horizontal display limits
    pub x_limits: (f64, f64),
    /// Vertical display limits
    pub z_limits: (f64, f64),
    /// Number of colour bar ticks
    pub n_clrbar_ticks: usize,
}

impl FrameRenderer {
    /// Renderer for the display domain of an experiment
    pub fn new(name: &str, plotting: &Plotting, geometry: &Geometry) -> Self {
        let (tasks, nrows, ncols) = tasks_for(plotting.plot_all_variables);
        let aspect = geometry.l_x_dis / geometry.l_z_dis;
        let height = (plotting.scale * plotting.dpi).round().max(1.) as usize;
        let width = (aspect * plotting.scale * plotting.dpi).round().max(1.) as usize;
        Self {
            name: name.to_owned(),
            tasks,
            nrows,
            ncols,
            panel_size: (width, height),
            x_limits: geometry.x_limits(),
            z_limits: geometry.z_limits(),
            n_clrbar_ticks: plotting.n_clrbar_ticks,
        }
    }

    /// Render write `index` of `file`
    ///
    /// # Errors
    /// A task or the grid can not be read, or the task does not
    /// match the grid
    pub fn render(&self, file: &SnapshotFile, index: usize) -> Result<Frame> {
        let (x, z) = (file.x()?, file.z()?);
        let sim_time = file.sim_time(index).unwrap_or(f64::NAN);
        let mut frame = Frame::new(
            self.nrows,
            self.ncols,
            self.panel_size,
            &title(&self.name, sim_time),
        );
        for (n, task) in self.tasks.iter().enumerate() {
            let data = file.task_slice(task, index)?;
            let panel = Panel::resample(
                task,
                &data,
                &x,
                &z,
                self.x_limits,
                self.z_limits,
                self.panel_size,
            )?;
            frame.draw(&panel, panel_position(n, self.ncols), self.n_clrbar_ticks);
        }
        Ok(frame)
    }

    /// Render every write of `files` into `output`, which is
    /// created if needed. Returns the number of frames.
    ///
    /// # Errors
    /// Reading a snapshot or writing a frame fails
    pub fn render_all<P, Q>(&self, files: &[P], output: Q) -> Result<usize>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let output = output.as_ref();
        if !output.exists() {
            std::fs::create_dir_all(output)?;
        }
        let mut count = 0;
        visit_writes(files, |file, index| {
            let frame = self.render(file, index)?;
            let write = file.write_number(index).unwrap_or(index as i64);
            let path = output.join(savename(write));
            log::debug!("Save frame {:?}", path);
            frame.save(&path)?;
            count += 1;
            Ok(())
        })?;
        log::info!("Saved {} frames to {:?}", count, output);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switchboard::Domain;

    #[test]
    fn test_renderer_layout() {
        let geometry = Domain::default().derive().unwrap();
        let mut plotting = Plotting::default();
        let renderer = FrameRenderer::new("exp", &plotting, &geometry);
        assert_eq!(renderer.panel_size, (250, 250));
        assert_eq!((renderer.nrows, renderer.ncols), (1, 2));
        assert_eq!(renderer.x_limits, (0., 0.5));
        assert_eq!(renderer.z_limits, (-0.5, 0.));

        plotting.plot_all_variables = true;
        let geometry = Domain {
            l_x_dis: 1.0,
            ..Domain::default()
        }
        .derive()
        .unwrap();
        let renderer = FrameRenderer::new("exp", &plotting, &geometry);
        assert_eq!(renderer.panel_size, (500, 250));
        assert_eq!(renderer.tasks.len(), 4);
    }
}
