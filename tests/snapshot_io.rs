//! Render frames from a synthetic snapshot file
use ndarray::{Array1, Array3};
use stratwave::forcing::Field;
use stratwave::io::snapshots::{task_name, SIM_TIME, WRITE_NUMBER, X_SCALE, Z_SCALE};
use stratwave::io::{write_to_hdf5, SnapshotFile};
use stratwave::plot::FrameRenderer;
use stratwave::switchboard::{Experiment, Switchboard};
use stratwave::Error;

fn tmp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("stratwave_it_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Evaluate the boundary forcing on the whole grid and
/// store it in the layout of the solver
fn write_snapshot(path: &std::path::Path, experiment: &Experiment, times: &[f64]) {
    let grid = experiment.grid().unwrap();
    let (nx, nz) = (grid.x.len(), grid.z.len());
    for field in [Field::B, Field::P, Field::U, Field::W] {
        let data = Array3::from_shape_fn((times.len(), nx, nz), |(t, i, k)| {
            experiment
                .forcing
                .value_at(field, grid.x[i], grid.z[k], times[t])
                .unwrap_or(0.)
        });
        write_to_hdf5(path, &task_name(field.name()), &data).unwrap();
    }
    write_to_hdf5(path, SIM_TIME, &Array1::from(times.to_vec())).unwrap();
    let writes = Array1::from_shape_fn(times.len(), |t| t as i64 + 1);
    write_to_hdf5(path, WRITE_NUMBER, &writes).unwrap();
    write_to_hdf5(path, X_SCALE, &grid.x).unwrap();
    write_to_hdf5(path, Z_SCALE, &grid.z).unwrap();
}

#[test]
fn test_render_frames() {
    let dir = tmp_dir("frames");
    let mut sb = Switchboard::default();
    sb.simulation.n_x = 32;
    sb.simulation.n_z = 24;
    sb.plotting.plot_all_variables = true;
    sb.plotting.scale = 0.2;
    let experiment = Experiment::from_switchboard(sb).unwrap();
    let period = experiment.forcing.wave.period;
    let snapshot = dir.join("snapshots_s1.h5");
    write_snapshot(&snapshot, &experiment, &[period, 2. * period, 3. * period]);

    let file = SnapshotFile::open(&snapshot).unwrap();
    assert_eq!(file.len(), 3);
    assert_eq!(file.write_number(2), Some(3));
    assert_eq!(file.task_slice("w", 1).unwrap().shape(), &[32, 24]);

    let renderer = FrameRenderer::new(
        "test",
        &experiment.switchboard.plotting,
        &experiment.geometry,
    );
    let output = dir.join("frames");
    let count = renderer.render_all(&[&snapshot], &output).unwrap();
    assert_eq!(count, 3);
    for write in 1..=3 {
        assert!(output.join(format!("write_{:06}.png", write)).exists());
    }
    let frame = renderer.render(&file, 0).unwrap();
    assert_eq!((frame.width, frame.height), (40, 40));
    assert!(frame.text[0].1.starts_with("test, t = "));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_task() {
    let dir = tmp_dir("missing");
    let path = dir.join("empty.h5");
    write_to_hdf5(&path, SIM_TIME, &Array1::from(vec![0.5])).unwrap();
    write_to_hdf5(&path, WRITE_NUMBER, &Array1::from(vec![1_i64])).unwrap();
    let file = SnapshotFile::open(&path).unwrap();
    assert!(file.task_slice("w", 0).is_err());
    assert!(SnapshotFile::open(dir.join("nothing.h5")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_task_does_not_match_grid() {
    let dir = tmp_dir("mismatch");
    let path = dir.join("snapshots_s1.h5");
    write_to_hdf5(&path, &task_name("w"), &Array3::<f64>::ones((1, 4, 4))).unwrap();
    write_to_hdf5(&path, SIM_TIME, &Array1::from(vec![0.5])).unwrap();
    write_to_hdf5(&path, WRITE_NUMBER, &Array1::from(vec![1_i64])).unwrap();
    write_to_hdf5(&path, X_SCALE, &Array1::linspace(0., 0.5, 6)).unwrap();
    write_to_hdf5(&path, Z_SCALE, &Array1::linspace(-0.5, 0., 4)).unwrap();

    let experiment = Experiment::from_switchboard(Switchboard::default()).unwrap();
    let renderer = FrameRenderer::new(
        "test",
        &experiment.switchboard.plotting,
        &experiment.geometry,
    );
    let file = SnapshotFile::open(&path).unwrap();
    assert!(matches!(renderer.render(&file, 0), Err(Error::Shape { .. })));
    assert!(renderer.render_all(&[&path], dir.join("frames")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
