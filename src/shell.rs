//! Frame-driven host for a camera controller.
//!
//! The shell owns the input snapshot and the window descriptor, folds raw
//! [`InputEvent`]s into the snapshot and calls the controller's hooks. Once
//! per frame it runs [`Controller::on_idle`] and reads the pose back for
//! the renderer.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use glam::{Mat4, Vec3};

use crate::controller::{Controller, SharedInput, SharedWindow};
use crate::input::{InputEvent, InputSnapshot, MouseButton};
use crate::options::{CameraAction, KeybindingOptions, Options, ShellOptions};
use crate::util::frame_timing::FrameTiming;
use crate::window::WindowDescriptor;

/// Pose matrices handed to the renderer after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-world transform.
    pub frame: Mat4,
    /// World-space camera position.
    pub position: Vec3,
    /// Seconds the frame's idle step covered.
    pub time_interval: f32,
}

/// Owner of the shared input state and driver of one controller.
pub struct Shell<C: Controller> {
    input: SharedInput,
    window: SharedWindow,
    keys: KeybindingOptions,
    settings: ShellOptions,
    timing: FrameTiming,
    controller: C,
}

impl<C: Controller> Shell<C> {
    /// Create the snapshot and window from `options` and bind `controller`
    /// to them.
    pub fn new(options: &Options, mut controller: C) -> Self {
        let input = Rc::new(RefCell::new(InputSnapshot::new()));
        let window = Rc::new(RefCell::new(WindowDescriptor::new(
            options.shell.window_width,
            options.shell.window_height,
        )));
        controller.initialize(&input, &window);
        log::info!(
            "{} controller ready ({}x{}, fps target {})",
            controller.title(),
            options.shell.window_width,
            options.shell.window_height,
            options.shell.target_fps(),
        );
        Self {
            input,
            window,
            keys: options.keybindings.clone(),
            settings: options.shell.clone(),
            timing: FrameTiming::new(options.shell.target_fps()),
            controller,
        }
    }

    /// Fold a platform event into the snapshot and dispatch the matching
    /// controller hook.
    ///
    /// The snapshot is never borrowed while a hook runs.
    ///
    /// # Example
    ///
    /// ```ignore
    /// shell.handle_event(InputEvent::CursorMoved { x, y });
    /// shell.handle_event(InputEvent::Scroll { delta: 1.0 });
    /// ```
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let position = self.window.borrow().pixel_to_relative(x, y);
                let shift = {
                    let mut input = self.input.borrow_mut();
                    input.mouse.position.update(position);
                    input.keyboard.shift
                };
                // Shift belongs to the twist and pose-dump keys.
                if !shift {
                    self.controller.on_mouse_move();
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                {
                    let mut input = self.input.borrow_mut();
                    match button {
                        MouseButton::Left => input.mouse.click.left = pressed,
                        MouseButton::Right => input.mouse.click.right = pressed,
                        MouseButton::Middle => return,
                    }
                }
                self.controller.on_mouse_click();
            }
            InputEvent::Scroll { delta } => {
                self.input.borrow_mut().mouse.scroll = delta;
                self.controller.on_mouse_scroll();
            }
            InputEvent::ModifiersChanged { shift, ctrl } => {
                {
                    let mut input = self.input.borrow_mut();
                    input.keyboard.shift = shift;
                    input.keyboard.ctrl = ctrl;
                }
                self.controller.on_keyboard();
            }
            InputEvent::Key { name, pressed } => {
                let shift = {
                    let mut input = self.input.borrow_mut();
                    input.keyboard.set_pressed(&name, pressed);
                    input.keyboard.shift
                };
                if pressed && shift && self.keys.is_bound(CameraAction::DebugPose, &name)
                {
                    self.log_pose();
                }
                self.controller.on_keyboard();
            }
            InputEvent::Resized { width, height } => {
                *self.window.borrow_mut() = WindowDescriptor::new(width, height);
                log::debug!("viewport resized to {width}x{height}");
            }
        }
    }

    /// Mark whether a GUI widget currently owns the pointer. Mouse hooks
    /// are no-ops while set.
    pub fn set_gui_capture(&mut self, on_gui: bool) {
        self.input.borrow_mut().mouse.on_gui = on_gui;
    }

    /// Forget held keys and buttons (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        let mut input = self.input.borrow_mut();
        input.keyboard.release_all();
        input.mouse.click = Default::default();
    }

    /// Whether enough time passed since the last frame to render another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.timing.should_render()
    }

    /// Switch fps limiting on or off at runtime.
    pub fn set_fps_limiting(&mut self, enabled: bool) {
        self.settings.fps_limiting = enabled;
        self.timing.set_target_fps(self.settings.target_fps());
        log::debug!("fps target now {}", self.settings.target_fps());
    }

    /// Change the frame-rate cap used while limiting is enabled.
    pub fn set_fps_max(&mut self, fps_max: u32) {
        self.settings.fps_max = fps_max;
        self.timing.set_target_fps(self.settings.target_fps());
    }

    /// Current shell settings, including the presentation values
    /// (`vsync`, `gui_scale`) the embedding application applies.
    #[must_use]
    pub fn shell_options(&self) -> &ShellOptions {
        &self.settings
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Run one frame with the measured wall-clock interval.
    pub fn frame(&mut self) -> FrameOutput {
        let dt = self.timing.end_frame();
        self.frame_with_interval(dt)
    }

    /// Run one frame covering `dt` seconds. Negative or non-finite
    /// intervals count as zero.
    pub fn frame_with_interval(&mut self, dt: f32) -> FrameOutput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.input.borrow_mut().time_interval = dt;
        self.controller.on_idle();
        self.input.borrow_mut().mouse.scroll = 0.0;

        let pose = self.controller.pose();
        FrameOutput {
            view: pose.matrix_view(),
            frame: pose.matrix_frame(),
            position: pose.position(),
            time_interval: dt,
        }
    }

    /// The driven controller.
    #[must_use]
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// The driven controller, e.g. for `look_at` or axis changes.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Current viewport descriptor.
    #[must_use]
    pub fn window(&self) -> WindowDescriptor {
        *self.window.borrow()
    }

    /// Read access to the snapshot the controller sees.
    #[must_use]
    pub fn input(&self) -> Ref<'_, InputSnapshot> {
        self.input.borrow()
    }

    fn log_pose(&self) {
        let pose = self.controller.pose();
        log::info!(
            "{} camera pose\n  position: {}\n  frame: {}\n  view: {}",
            self.controller.title(),
            pose.position(),
            pose.matrix_frame(),
            pose.matrix_view(),
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::CameraPose;
    use crate::controller::{FirstPersonEulerController, OrbitEulerController};

    fn orbit_shell() -> Shell<OrbitEulerController> {
        let mut shell = Shell::new(&Options::default(), OrbitEulerController::new());
        shell.controller_mut().set_rotation_axis_z();
        shell
            .controller_mut()
            .look_at(Vec3::new(3.0, -2.0, 1.5), Vec3::ZERO, Vec3::Z)
            .unwrap();
        shell
    }

    #[test]
    fn new_binds_controller() {
        let shell = orbit_shell();
        assert!(shell.controller().is_active());
        assert_eq!(shell.window(), WindowDescriptor::new(1280, 720));
    }

    #[test]
    fn cursor_events_are_converted_to_relative() {
        let mut shell = orbit_shell();
        shell.handle_event(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
        shell.handle_event(InputEvent::CursorMoved { x: 1280.0, y: 0.0 });
        let cursor = shell.input().mouse.position;
        assert_eq!(cursor.previous, Vec2::ZERO);
        assert_eq!(cursor.current, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn left_drag_through_events_rotates() {
        let mut shell = orbit_shell();
        let before = *shell.controller().camera_model.euler();
        shell.handle_event(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
        shell.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        shell.handle_event(InputEvent::CursorMoved { x: 704.0, y: 360.0 });
        let after = *shell.controller().camera_model.euler();
        // 64 px of a 1280 px viewport is 0.1 relative units
        assert!((after.yaw() - (before.yaw() - 0.1)).abs() < 1e-4);
        assert_eq!(after.pitch(), before.pitch());
    }

    #[test]
    fn gui_capture_suppresses_drag() {
        let mut shell = orbit_shell();
        let before = shell.controller().camera_model;
        shell.set_gui_capture(true);
        shell.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        shell.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        shell.handle_event(InputEvent::Scroll { delta: 3.0 });
        assert_eq!(shell.controller().camera_model, before);
    }

    #[test]
    fn frame_runs_idle_and_reports_pose() {
        let mut shell = orbit_shell();
        let before = shell.controller().camera_model;
        shell.handle_event(InputEvent::ModifiersChanged {
            shift: true,
            ctrl: false,
        });
        shell.handle_event(InputEvent::Key {
            name: "ArrowLeft".to_owned(),
            pressed: true,
        });
        let out = shell.frame_with_interval(0.5);

        let after = shell.controller().camera_model;
        assert!(after.axis() != before.axis());
        assert_eq!(after.distance(), before.distance());
        assert_eq!(out.position, after.position());
        assert_eq!(out.view, after.matrix_view());
        assert_eq!(out.frame, after.matrix_frame());
        assert_eq!(out.time_interval, 0.5);
    }

    #[test]
    fn bad_intervals_count_as_zero() {
        let mut shell = Shell::new(&Options::default(), FirstPersonEulerController::new());
        shell.handle_event(InputEvent::Key {
            name: "KeyW".to_owned(),
            pressed: true,
        });
        assert_eq!(shell.frame_with_interval(f32::NAN).time_interval, 0.0);
        assert_eq!(shell.frame_with_interval(-1.0).time_interval, 0.0);
        assert_eq!(shell.controller().camera_model.position(), Vec3::ZERO);
        let out = shell.frame_with_interval(0.5);
        assert!(out.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    }

    #[test]
    fn scroll_is_consumed_by_frame() {
        let mut shell = orbit_shell();
        shell.handle_event(InputEvent::Scroll { delta: 1.0 });
        assert_eq!(shell.input().mouse.scroll, 1.0);
        let _ = shell.frame_with_interval(0.0);
        assert_eq!(shell.input().mouse.scroll, 0.0);
    }

    #[test]
    fn resize_updates_window() {
        let mut shell = orbit_shell();
        shell.handle_event(InputEvent::Resized {
            width: 800,
            height: 600,
        });
        assert_eq!(shell.window(), WindowDescriptor::new(800, 600));
    }

    #[test]
    fn release_all_clears_held_state() {
        let mut shell = orbit_shell();
        shell.handle_event(InputEvent::Key {
            name: "KeyK".to_owned(),
            pressed: true,
        });
        shell.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        shell.release_all();
        let input = shell.input();
        assert!(!input.keyboard.is_pressed("KeyK"));
        assert!(!input.mouse.click.right);
    }

    #[test]
    fn debug_key_leaves_pose_alone() {
        let mut shell = orbit_shell();
        let before = shell.controller().camera_model;
        shell.handle_event(InputEvent::ModifiersChanged {
            shift: true,
            ctrl: false,
        });
        shell.handle_event(InputEvent::Key {
            name: "KeyV".to_owned(),
            pressed: true,
        });
        assert_eq!(shell.controller().camera_model, before);
    }

    #[test]
    fn shift_drag_does_not_move_camera() {
        let mut shell = orbit_shell();
        let before = shell.controller().camera_model;
        shell.handle_event(InputEvent::ModifiersChanged {
            shift: true,
            ctrl: false,
        });
        shell.handle_event(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
        shell.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        shell.handle_event(InputEvent::CursorMoved { x: 704.0, y: 360.0 });
        assert_eq!(shell.controller().camera_model, before);
        // The cursor is still tracked, so releasing shift resumes smoothly.
        assert!(shell
            .input()
            .mouse
            .position
            .current
            .abs_diff_eq(Vec2::new(0.1, 0.0), 1e-6));

        shell.handle_event(InputEvent::ModifiersChanged {
            shift: false,
            ctrl: false,
        });
        shell.handle_event(InputEvent::CursorMoved { x: 768.0, y: 360.0 });
        let yaw = shell.controller().camera_model.euler().yaw();
        assert!((yaw - (before.euler().yaw() - 0.1)).abs() < 1e-4);
    }

    #[test]
    fn fps_limit_can_be_toggled() {
        let mut shell = orbit_shell();
        assert_eq!(shell.shell_options().target_fps(), 0);
        assert!(shell.should_render());
        shell.set_fps_max(30);
        shell.set_fps_limiting(true);
        assert_eq!(shell.shell_options().target_fps(), 30);
        shell.set_fps_limiting(false);
        assert_eq!(shell.shell_options().target_fps(), 0);
        assert!(shell.should_render());
        assert!(shell.shell_options().vsync);
    }
}
