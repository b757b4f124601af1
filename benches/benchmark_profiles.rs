use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use ndarray::Array1;
use stratwave::forcing::forcing_window;
use stratwave::profiles::{BackgroundProfile, BottomRamp, BuildProfile, StaircaseProfile};

const SIZES: [usize; 4] = [128, 256, 512, 1024];

pub fn bench_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("Profiles");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let z = Array1::linspace(-1.2, 0.0, *n);
        let staircase = BackgroundProfile::from(StaircaseProfile {
            n: 4,
            ..StaircaseProfile::default()
        });
        let ramp = BottomRamp::new(-1.0, 0.2, 20.0, 0.6);
        let name = format!("Staircase Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| staircase.build(&z)));
        let name = format!("BottomRamp Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| ramp.build(&z)));
        let name = format!("Window Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| forcing_window(&z, 15., -0.5, -0.3)));
    }
    group.finish();
}

criterion_group!(benches, bench_profiles);
criterion_main!(benches);
