//! Snapshot tasks evaluated by the solver
//!
//! Vertical energy flux, horizontally integrated and split into
//! advective, pressure and viscous parts, plus the profiles that
//! are constant in time.

/// Task of a file handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotTask {
    /// Record this task
    pub enabled: bool,
    /// Expression evaluated by the solver
    pub task: String,
    /// Name of dataset in the snapshot file
    pub name: String,
}

impl SnapshotTask {
    fn new(enabled: bool, task: &str, name: &str) -> Self {
        Self {
            enabled,
            task: task.to_owned(),
            name: name.to_owned(),
        }
    }
}

/// Energy flux tasks: components `ef_advec`, `ef_press`, `ef_visc`
/// and their sum `ef`.
///
/// * `components` - Record energy flux terms separately
///
/// * `total` - Record total energy flux
pub fn energy_flux_tasks(components: bool, total: bool) -> Vec<SnapshotTask> {
    let mut tasks = vec![
        SnapshotTask::new(components, "integ(0.5*(w*u**2 + w**3), 'x')", "ef_advec"),
        SnapshotTask::new(components, "integ(p*w, 'x')", "ef_press"),
        SnapshotTask::new(components, "integ(-NU*(u*uz + w*wz), 'x')", "ef_visc"),
    ];
    let total_task = tasks
        .iter()
        .map(|t| t.task.as_str())
        .collect::<Vec<_>>()
        .join("+");
    tasks.push(SnapshotTask::new(total, &total_task, "ef"));
    tasks
}

/// Vertical profile tasks: background profile, sponge layer
/// and Rayleigh friction.
pub fn vertical_profile_tasks(bp: bool, sl: bool, rf: bool) -> Vec<SnapshotTask> {
    vec![
        SnapshotTask::new(bp, "N0*BP", "bp"),
        SnapshotTask::new(sl, "SL", "sl"),
        SnapshotTask::new(rf, "RF", "rf"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_flux_total() {
        let tasks = energy_flux_tasks(false, true);
        assert_eq!(tasks.len(), 4);
        assert!(tasks[..3].iter().all(|t| !t.enabled));
        let total = &tasks[3];
        assert!(total.enabled);
        assert_eq!(total.name, "ef");
        assert_eq!(
            total.task,
            "integ(0.5*(w*u**2 + w**3), 'x')+integ(p*w, 'x')+integ(-NU*(u*uz + w*wz), 'x')"
        );
    }

    #[test]
    fn test_vertical_profile_tasks() {
        let tasks = vertical_profile_tasks(true, false, true);
        let names: Vec<_> = tasks.iter().filter(|t| t.enabled).map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["bp", "rf"]);
    }
}
