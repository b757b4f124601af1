//! Layout of a single frame
use super::color::{map_to_rgb, WHITE};
use crate::error::{Error, Result};
use ndarray::{Array1, ArrayBase, Data, Ix2};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Tasks to plot and the panel grid (nrows, ncols)
pub fn tasks_for(plot_all_variables: bool) -> (Vec<&'static str>, usize, usize) {
    if plot_all_variables {
        (vec!["b", "p", "u", "w"], 2, 2)
    } else {
        (vec!["w"], 1, 2)
    }
}

/// Title of a frame
pub fn title(name: &str, sim_time: f64) -> String {
    format!("{}, t = {:2.3}", name, sim_time)
}

/// File name of a frame
pub fn savename(write_number: i64) -> String {
    format!("write_{:06}.png", write_number)
}

/// Row and column of panel `n`
pub fn panel_position(n: usize, ncols: usize) -> (usize, usize) {
    (n / ncols, n % ncols)
}

/// Colour scale of a panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl ColorScale {
    /// Symmetric scale `+- max|v|`
    pub fn even<'a, I: IntoIterator<Item = &'a f64>>(values: I) -> Self {
        let max = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(0., |a: f64, b| a.max(b.abs()));
        Self { min: -max, max }
    }

    /// Map `v` onto \[0, 1\], a degenerate scale maps everything to 0.5
    pub fn normalize(&self, v: f64) -> f64 {
        if self.max > self.min {
            (v - self.min) / (self.max - self.min)
        } else {
            0.5
        }
    }

    /// `n` evenly spaced ticks
    pub fn ticks(&self, n: usize) -> Array1<f64> {
        Array1::linspace(self.min, self.max, n)
    }
}

/// Index of the coordinate closest to `v`
fn nearest(coords: &Array1<f64>, v: f64) -> usize {
    let mut best = 0;
    let mut dist = f64::INFINITY;
    for (i, c) in coords.iter().enumerate() {
        let d = (c - v).abs();
        if d < dist {
            best = i;
            dist = d;
        }
    }
    best
}

/// Indices of coordinates inside `[lo, hi]`
pub fn inside(coords: &Array1<f64>, (lo, hi): (f64, f64)) -> Vec<usize> {
    coords
        .iter()
        .enumerate()
        .filter(|(_, c)| **c >= lo && **c <= hi)
        .map(|(i, _)| i)
        .collect()
}

/// Field resampled onto a pixel grid, row 0 is the top
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Name of task
    pub task: String,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Colour scale
    pub scale: ColorScale,
    /// Values, row major
    pub values: Vec<f64>,
}

impl Panel {
    /// Nearest neighbour resampling of `data` (shape (nx, nz)) on the
    /// display window `x_limits` x `z_limits`. The colour scale is even
    /// over the grid points inside the window.
    ///
    /// # Errors
    /// Shape of `data` differs from (`x.len()`, `z.len()`), or a
    /// grid is empty
    pub fn resample<S: Data<Elem = f64>>(
        task: &str,
        data: &ArrayBase<S, Ix2>,
        x: &Array1<f64>,
        z: &Array1<f64>,
        x_limits: (f64, f64),
        z_limits: (f64, f64),
        (width, height): (usize, usize),
    ) -> Result<Self> {
        if x.is_empty() || z.is_empty() || data.dim() != (x.len(), z.len()) {
            return Err(Error::shape(
                format!("[{}, {}] (grid of {})", x.len(), z.len(), task),
                data.shape(),
            ));
        }
        let (ix_in, iz_in) = (inside(x, x_limits), inside(z, z_limits));
        let scale = if ix_in.is_empty() || iz_in.is_empty() {
            log::warn!("Display window of {} contains no grid points", task);
            ColorScale::even(data.iter())
        } else {
            ColorScale::even(
                ix_in
                    .iter()
                    .flat_map(|i| iz_in.iter().map(move |k| &data[[*i, *k]])),
            )
        };
        let cols: Vec<usize> = (0..width)
            .map(|px| {
                let s = (px as f64 + 0.5) / width as f64;
                nearest(x, x_limits.0 + s * (x_limits.1 - x_limits.0))
            })
            .collect();
        let rows: Vec<usize> = (0..height)
            .map(|py| {
                let s = (py as f64 + 0.5) / height as f64;
                nearest(z, z_limits.1 - s * (z_limits.1 - z_limits.0))
            })
            .collect();
        let mut values = Vec::with_capacity(width * height);
        for k in &rows {
            for i in &cols {
                values.push(data[[*i, *k]]);
            }
        }
        Ok(Self {
            task: task.to_owned(),
            width,
            height,
            scale,
            values,
        })
    }
}

/// Rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// RGB pixels, row major
    pub pixels: Vec<u8>,
    /// Text chunks (keyword, text)
    pub text: Vec<(String, String)>,
}

impl Frame {
    /// White frame with `nrows` x `ncols` panels of `panel_size`
    pub fn new(nrows: usize, ncols: usize, (pw, ph): (usize, usize), title: &str) -> Self {
        let (width, height) = (ncols * pw, nrows * ph);
        let mut pixels = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&WHITE);
        }
        Self {
            width,
            height,
            pixels,
            text: vec![("Title".to_owned(), title.to_owned())],
        }
    }

    /// Colour map `panel` into row `i` and column `j`
    pub fn draw(&mut self, panel: &Panel, (i, j): (usize, usize), n_ticks: usize) {
        let (x0, y0) = (j * panel.width, i * panel.height);
        for py in 0..panel.height {
            let y = y0 + py;
            if y >= self.height {
                break;
            }
            for px in 0..panel.width {
                let x = x0 + px;
                if x >= self.width {
                    break;
                }
                let v = panel.values[py * panel.width + px];
                let rgb = map_to_rgb(panel.scale.normalize(v));
                let offset = (y * self.width + x) * 3;
                self.pixels[offset..offset + 3].copy_from_slice(&rgb);
            }
        }
        let ticks = panel
            .scale
            .ticks(n_ticks)
            .iter()
            .map(|t| format!("{:.3e}", t))
            .collect::<Vec<_>>()
            .join(" ");
        self.text.push((format!("Panel {} {}", i, j), panel.task.clone()));
        self.text.push((format!("Ticks {}", panel.task), ticks));
    }

    /// Colour of pixel at column `x` and row `y`
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let offset = (y * self.width + x) * 3;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ]
    }

    /// Encode frame as png
    ///
    /// # Errors
    /// File can not be created or encoding fails
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let w = BufWriter::new(file);
        let mut encoder = png::Encoder::new(w, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        for (keyword, text) in &self.text {
            encoder.add_text_chunk(keyword.clone(), text.clone())?;
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_tasks_for() {
        assert_eq!(tasks_for(true), (vec!["b", "p", "u", "w"], 2, 2));
        assert_eq!(tasks_for(false), (vec!["w"], 1, 2));
    }

    #[test]
    fn test_names() {
        assert_eq!(title("exp", 1.23456), "exp, t = 1.235");
        assert_eq!(savename(7), "write_000007.png");
        assert_eq!(panel_position(3, 2), (1, 1));
        assert_eq!(panel_position(0, 2), (0, 0));
    }

    #[test]
    fn test_even_scale() {
        let scale = ColorScale::even([1.0, -3.0, 2.0].iter());
        assert_eq!(scale, ColorScale { min: -3.0, max: 3.0 });
        assert_eq!(scale.normalize(0.), 0.5);
        assert_eq!(scale.ticks(3).to_vec(), vec![-3.0, 0.0, 3.0]);
        let zero = ColorScale::even([0.0, 0.0].iter());
        assert_eq!(zero.normalize(0.), 0.5);
    }

    #[test]
    fn test_resample_window() {
        // field is x outside the window, so only the window sets the scale
        let x = Array1::linspace(-1., 2., 31);
        let z = Array1::linspace(-2., 1., 31);
        let data = Array2::from_shape_fn((31, 31), |(i, k)| {
            let (xi, zk) = (x[i], z[k]);
            if (0. ..=1.).contains(&xi) && (-1. ..=0.).contains(&zk) {
                xi - 0.5
            } else {
                100.
            }
        });
        let panel = Panel::resample("w", &data, &x, &z, (0., 1.), (-1., 0.), (10, 5)).unwrap();
        assert_eq!(panel.values.len(), 50);
        assert!((panel.scale.max - 0.5).abs() < 1e-12);
        // left is negative, right positive
        assert!(panel.values[0] < 0.);
        assert!(panel.values[9] > 0.);
    }

    #[test]
    fn test_draw_leaves_empty_panel_white() {
        let x = Array1::linspace(0., 1., 4);
        let z = Array1::linspace(-1., 0., 4);
        let data = Array2::from_elem((4, 4), 1.0);
        let panel = Panel::resample("w", &data, &x, &z, (0., 1.), (-1., 0.), (4, 3)).unwrap();
        let mut frame = Frame::new(1, 2, (4, 3), "exp, t = 0.000");
        frame.draw(&panel, (0, 0), 3);
        assert_eq!(frame.width, 8);
        assert_eq!(frame.pixel(0, 0), map_to_rgb(1.0));
        assert_eq!(frame.pixel(7, 2), WHITE);
        assert_eq!(frame.text[0].1, "exp, t = 0.000");
        assert_eq!(frame.text.len(), 3);
    }

    #[test]
    fn test_resample_grid_mismatch() {
        let data = Array2::from_elem((4, 4), 1.0);
        let z = Array1::linspace(-1., 0., 4);
        let x = Array1::linspace(0., 1., 6);
        let res = Panel::resample("w", &data, &x, &z, (0., 1.), (-1., 0.), (4, 3));
        assert!(matches!(res, Err(Error::Shape { .. })));
        let empty = Array1::<f64>::zeros(0);
        let res = Panel::resample("w", &data, &empty, &z, (0., 1.), (-1., 0.), (4, 3));
        assert!(matches!(res, Err(Error::Shape { .. })));
    }
}
