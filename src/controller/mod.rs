//! Camera controllers: turn the input snapshot into pose updates.
//!
//! Every controller implements [`Controller`] and owns exactly one pose
//! model by composition. The shell owns the [`InputSnapshot`] and
//! [`WindowDescriptor`]; controllers keep only [`Weak`] handles to them,
//! set once by [`Controller::initialize`] and re-validated on every hook.
//!
//! Hooks run synchronously on the shell's thread. Within one frame the
//! shell delivers at most one each of mouse-move, click, scroll and
//! keyboard dispatch, followed by exactly one [`Controller::on_idle`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::camera::CameraPose;
use crate::input::InputSnapshot;
use crate::window::WindowDescriptor;

/// Free-fly controller over the Euler pose.
pub mod first_person;
/// Orbit controller over the quaternion pose.
pub mod orbit;
/// Orbit controller over the Euler pose.
pub mod orbit_euler;
/// Planar displacement controller (specialized first person).
pub mod planar;

pub use first_person::FirstPersonEulerController;
pub use orbit::OrbitController;
pub use orbit_euler::OrbitEulerController;
pub use planar::Displacement2dController;

/// Shell-owned input snapshot.
pub type SharedInput = Rc<RefCell<InputSnapshot>>;
/// Shell-owned window descriptor.
pub type SharedWindow = Rc<RefCell<WindowDescriptor>>;

/// Lifecycle of a controller. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// `initialize` has not been called; hooks are contract violations.
    Unbound,
    /// Bound but switched off; hooks are no-ops.
    BoundInactive,
    /// Bound and reacting to input.
    BoundActive,
}

/// Binding and activation state shared by all controllers.
#[derive(Debug, Default)]
pub struct ControllerBase {
    input: Option<Weak<RefCell<InputSnapshot>>>,
    window: Option<Weak<RefCell<WindowDescriptor>>>,
    active: bool,
}

impl ControllerBase {
    /// An unbound, inactive base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to the shell's snapshot and window and activate.
    pub fn bind(&mut self, input: &SharedInput, window: &SharedWindow) {
        self.input = Some(Rc::downgrade(input));
        self.window = Some(Rc::downgrade(window));
        self.active = true;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        match (self.input.is_some(), self.active) {
            (false, _) => ControllerState::Unbound,
            (true, false) => ControllerState::BoundInactive,
            (true, true) => ControllerState::BoundActive,
        }
    }

    /// Whether hooks currently have an effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state() == ControllerState::BoundActive
    }

    /// Switch between the bound states. Takes effect on the next hook.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            log::debug!(
                "camera controller {}",
                if active { "activated" } else { "deactivated" }
            );
        }
        self.active = active;
    }

    /// Snapshot for a keyboard or idle hook, or `None` when inactive.
    ///
    /// # Panics
    ///
    /// Panics when called before [`bind`](Self::bind) or after the shell
    /// dropped its snapshot or window: that is a wiring bug, not a runtime
    /// condition.
    #[must_use]
    pub fn input(&self) -> Option<SharedInput> {
        let input = self.bound_input()?;
        self.active.then_some(input)
    }

    /// Snapshot for a mouse hook: additionally `None` while a GUI widget
    /// owns the pointer.
    ///
    /// # Panics
    ///
    /// Same contract as [`input`](Self::input).
    #[must_use]
    pub fn mouse_input(&self) -> Option<SharedInput> {
        let input = self.input()?;
        let on_gui = input.borrow().mouse.on_gui;
        (!on_gui).then_some(input)
    }

    /// The bound window descriptor, if the binding is still alive.
    #[must_use]
    pub fn window(&self) -> Option<SharedWindow> {
        self.window.as_ref().and_then(Weak::upgrade)
    }

    fn bound_input(&self) -> Option<SharedInput> {
        assert!(
            self.input.is_some() && self.window.is_some(),
            "camera controller hook called before initialize()"
        );
        let input = self.input.as_ref().and_then(Weak::upgrade);
        assert!(
            input.is_some(),
            "camera controller input snapshot was dropped by its owner"
        );
        assert!(
            self.window.as_ref().is_some_and(|w| w.strong_count() > 0),
            "camera controller window descriptor was dropped by its owner"
        );
        input
    }
}

/// Capability every camera controller provides to the shell.
pub trait Controller {
    /// Shared binding/activation state.
    fn base(&self) -> &ControllerBase;

    /// Mutable binding/activation state.
    fn base_mut(&mut self) -> &mut ControllerBase;

    /// Short human-readable name.
    fn title(&self) -> &'static str;

    /// Help text describing the key and mouse bindings.
    fn usage(&self) -> &'static str;

    /// The pose driven by this controller, for the renderer's queries.
    fn pose(&self) -> &dyn CameraPose;

    /// Cursor moved.
    fn on_mouse_move(&mut self);

    /// Once per rendered frame; continuous motion scales with the
    /// snapshot's `time_interval`.
    fn on_idle(&mut self);

    /// Mouse button pressed or released.
    fn on_mouse_click(&mut self) {
        let _ = self.base().mouse_input();
    }

    /// Scroll wheel moved.
    fn on_mouse_scroll(&mut self) {
        let _ = self.base().mouse_input();
    }

    /// Key or modifier state changed.
    fn on_keyboard(&mut self) {
        let _ = self.base().input();
    }

    /// Bind to the shell's snapshot and window. Moves the controller from
    /// [`ControllerState::Unbound`] to [`ControllerState::BoundActive`].
    fn initialize(&mut self, input: &SharedInput, window: &SharedWindow) {
        self.base_mut().bind(input, window);
        log::debug!("{} camera controller bound", self.title());
    }

    /// Current lifecycle state.
    fn state(&self) -> ControllerState {
        self.base().state()
    }

    /// Whether hooks currently have an effect.
    fn is_active(&self) -> bool {
        self.base().is_active()
    }

    /// Switch between the bound states.
    fn set_active(&mut self, active: bool) {
        self.base_mut().set_active(active);
    }
}
