//! Per-frame cost of event dispatch and idle updates for each controller.
#![allow(missing_docs)]

use camrig::controller::{
    Controller, Displacement2dController, FirstPersonEulerController,
    OrbitController, OrbitEulerController,
};
use camrig::input::{InputEvent, MouseButton};
use camrig::options::Options;
use camrig::shell::Shell;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn drive<C: Controller>(shell: &mut Shell<C>, step: u32) {
    let t = step as f32 * 0.01;
    shell.handle_event(InputEvent::CursorMoved {
        x: 640.0 + 200.0 * t.sin(),
        y: 360.0 + 120.0 * t.cos(),
    });
    let _ = black_box(shell.frame_with_interval(1.0 / 60.0));
}

fn held_shell<C: Controller>(controller: C) -> Shell<C> {
    let mut shell = Shell::new(&Options::default(), controller);
    shell.handle_event(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    });
    shell.handle_event(InputEvent::Key {
        name: "KeyW".to_owned(),
        pressed: true,
    });
    shell
}

fn controller_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_frame");

    let mut orbit_euler = held_shell(OrbitEulerController::new());
    let mut step = 0;
    group.bench_function("orbit_euler", |b| {
        b.iter(|| {
            step += 1;
            drive(&mut orbit_euler, step);
        });
    });

    let mut orbit = held_shell(OrbitController::new());
    group.bench_function("orbit_trackball", |b| {
        b.iter(|| {
            step += 1;
            drive(&mut orbit, step);
        });
    });

    let mut first_person = held_shell(FirstPersonEulerController::new());
    group.bench_function("first_person", |b| {
        b.iter(|| {
            step += 1;
            drive(&mut first_person, step);
        });
    });

    let mut planar = held_shell(Displacement2dController::new());
    group.bench_function("displacement_2d", |b| {
        b.iter(|| {
            step += 1;
            drive(&mut planar, step);
        });
    });

    group.finish();
}

criterion_group!(benches, controller_frame_benchmark);
criterion_main!(benches);
