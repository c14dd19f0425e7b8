//! Headless camrig demo.
//!
//! Drives an orbit-Euler controller through a scripted session (orbit drag,
//! zoom drag, held twist keys, scroll) and logs the pose after each step.
//!
//! Usage: `RUST_LOG=info camrig [options.toml]`

use std::path::Path;

use camrig::camera::CameraPose;
use camrig::controller::{Controller, OrbitEulerController};
use camrig::error::CamrigError;
use camrig::input::{InputEvent, MouseButton};
use camrig::options::Options;
use camrig::shell::Shell;
use glam::Vec3;

const FRAME: f32 = 1.0 / 60.0;

fn key(name: &str, pressed: bool) -> InputEvent {
    InputEvent::Key {
        name: name.to_owned(),
        pressed,
    }
}

fn button(button: MouseButton, pressed: bool) -> InputEvent {
    InputEvent::MouseButton { button, pressed }
}

fn drag(
    from: (f32, f32),
    to: (f32, f32),
    steps: u32,
    with: MouseButton,
) -> Vec<InputEvent> {
    let mut events = vec![
        InputEvent::CursorMoved {
            x: from.0,
            y: from.1,
        },
        button(with, true),
    ];
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        events.push(InputEvent::CursorMoved {
            x: from.0 + (to.0 - from.0) * t,
            y: from.1 + (to.1 - from.1) * t,
        });
    }
    events.push(button(with, false));
    events
}

fn script() -> Vec<(&'static str, Vec<InputEvent>)> {
    vec![
        ("orbit", drag((640.0, 360.0), (840.0, 300.0), 8, MouseButton::Left)),
        ("zoom out", drag((640.0, 360.0), (640.0, 460.0), 4, MouseButton::Right)),
        (
            "twist",
            vec![
                InputEvent::ModifiersChanged {
                    shift: true,
                    ctrl: false,
                },
                key("ArrowLeft", true),
            ],
        ),
        ("twist", Vec::new()),
        ("twist", Vec::new()),
        (
            "release",
            vec![
                key("ArrowLeft", false),
                key("KeyV", true),
                key("KeyV", false),
                InputEvent::ModifiersChanged {
                    shift: false,
                    ctrl: false,
                },
            ],
        ),
        ("scroll", vec![InputEvent::Scroll { delta: 2.0 }]),
    ]
}

fn main() -> Result<(), CamrigError> {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let controller =
        OrbitEulerController::with_options(&options.camera, &options.keybindings);
    let mut shell = Shell::new(&options, controller);
    shell.controller_mut().set_rotation_axis_z();
    shell
        .controller_mut()
        .look_at(Vec3::new(3.0, -2.0, 1.5), Vec3::ZERO, Vec3::Z)?;
    log::info!("{}", shell.controller().usage());

    for (label, events) in script() {
        for event in events {
            shell.handle_event(event);
        }
        let out = shell.frame_with_interval(FRAME);
        let pose = &shell.controller().camera_model;
        log::info!(
            "{label:>8}: position {} distance {:.3} axis {}",
            out.position,
            pose.distance(),
            pose.axis(),
        );
        log::debug!("{label:>8}: forward {}", pose.forward());
    }
    Ok(())
}
