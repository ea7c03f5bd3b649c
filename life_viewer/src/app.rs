// app.rs - Viewer state: the grid, the view, and what the user can do to them

use std::time::{Duration, Instant};

use egui::{Color32, Key, Vec2, vec2};
use life_core::{GridState, Transition};
use tracing::{info, trace};

use crate::config::{ViewerConfig, ViewerError};
use crate::patterns;
use crate::view::{MOVEMENT_STEP, View};

/// What a click or drag over the canvas does to the cell under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brush {
    Birth,
    Kill,
}

/// Keyboard commands; arrows move the grid the way the key points
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    ToggleRunning,
    Step,
    Restart,
    Center,
    Quit,
    Pan(Vec2),
}

pub const BOUND_KEYS: [Key; 10] = [
    Key::Space,
    Key::N,
    Key::R,
    Key::C,
    Key::Escape,
    Key::Q,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
];

pub fn key_action(key: Key, shift: bool) -> Option<KeyAction> {
    let action = match key {
        Key::Space if shift => KeyAction::Step,
        Key::Space => KeyAction::ToggleRunning,
        Key::N => KeyAction::Step,
        Key::R => KeyAction::Restart,
        Key::C => KeyAction::Center,
        Key::Escape | Key::Q => KeyAction::Quit,
        Key::ArrowUp => KeyAction::Pan(vec2(0.0, MOVEMENT_STEP)),
        Key::ArrowDown => KeyAction::Pan(vec2(0.0, -MOVEMENT_STEP)),
        Key::ArrowLeft => KeyAction::Pan(vec2(MOVEMENT_STEP, 0.0)),
        Key::ArrowRight => KeyAction::Pan(vec2(-MOVEMENT_STEP, 0.0)),
        _ => return None,
    };
    Some(action)
}

pub struct LifeViewer {
    pub state: GridState,
    pub view: View,
    pub center_pending: bool,           // Re-center once the canvas size is known
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub random_density: f64,
    random_seed: u64,
}

impl LifeViewer {
    pub fn new(config: &ViewerConfig) -> Result<Self, ViewerError> {
        config.validate()?;
        Ok(Self {
            state: GridState::new(config.grid)?,
            view: View::new(config.cell_size),
            center_pending: true,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.update_interval(),
            live_color: Color32::WHITE,
            dead_color: Color32::from_rgb(20, 20, 20),
            selected_pattern: 0,
            random_density: config.random_density,
            random_seed: 0,
        })
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
        }
        info!("{} simulation", if self.is_running { "Starting" } else { "Stopping" });
    }

    /// One generation while running; stops once nothing is left alive.
    pub fn run_generation(&mut self) -> Transition {
        let transition = self.state.step();
        if transition.population == 0 {
            self.is_running = false;
            info!("No population, stopping simulation at generation {}", transition.generation);
        }
        transition
    }

    /// Single manual step, allowed while paused.
    pub fn step_once(&mut self) -> Transition {
        let transition = self.state.step();
        info!(
            "Stepped to generation {} (population {})",
            transition.generation, transition.population
        );
        transition
    }

    pub fn restart(&mut self) {
        self.is_running = false;
        self.state.restart();
        info!("Restarting");
    }

    pub fn request_center(&mut self) {
        self.center_pending = true;
        info!("Centering grid");
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.is_running = false;
            let placed = patterns::apply_pattern(&mut self.state, pattern);
            info!("Placed {} ({placed} cells)", pattern.name);
        }
    }

    pub fn apply_random_pattern(&mut self) {
        self.is_running = false;
        let placed = patterns::apply_random_pattern(&mut self.state, self.random_seed, self.random_density);
        info!("Random fill #{} placed {placed} cells", self.random_seed);
        self.random_seed += 1;
    }

    /// Runs a keyboard command. `Quit` needs the window and is handled by the UI.
    pub fn apply_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::ToggleRunning => self.toggle_running(),
            KeyAction::Step => {
                self.step_once();
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Center => self.request_center(),
            KeyAction::Pan(delta) => self.view.pan(delta),
            KeyAction::Quit => {}
        }
    }

    /// Applies `brush` to the cell at `index`; rejected indices are only traced.
    pub fn paint(&mut self, index: i64, brush: Brush) {
        let result = match brush {
            Brush::Birth => self.state.give_birth(index),
            Brush::Kill => self.state.kill(index),
        };
        if let Err(err) = result {
            trace!("Ignored {brush:?}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(width: usize) -> LifeViewer {
        let mut config = ViewerConfig::default();
        config.grid.width = width;
        LifeViewer::new(&config).unwrap()
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut config = ViewerConfig::default();
        config.grid.width = 0;
        assert!(LifeViewer::new(&config).is_err());
    }

    #[test]
    fn painting_births_and_kills() {
        let mut app = viewer(10);
        app.paint(5, Brush::Birth);
        app.paint(5, Brush::Birth);
        app.paint(-3, Brush::Birth);
        app.paint(100, Brush::Kill);
        assert_eq!(app.state.population(), 1);
        app.paint(5, Brush::Kill);
        assert_eq!(app.state.population(), 0);
    }

    #[test]
    fn running_stops_when_population_dies_out() {
        let mut app = viewer(10);
        app.paint(55, Brush::Birth);
        app.toggle_running();
        assert!(app.is_running);

        let transition = app.run_generation();
        assert_eq!(transition.population, 0);
        assert!(!app.is_running);
    }

    #[test]
    fn patterns_and_restart() {
        let mut app = viewer(50);
        app.selected_pattern = patterns::find("Glider").unwrap();
        app.apply_selected_pattern();
        assert_eq!(app.state.population(), 5);

        app.step_once();
        assert_eq!(app.state.generation(), 1);
        assert_eq!(app.state.population(), 5);

        app.restart();
        assert_eq!(app.state.population(), 0);
        assert_eq!(app.state.generation(), 0);
    }

    #[test]
    fn escape_and_q_quit() {
        assert_eq!(key_action(Key::Escape, false), Some(KeyAction::Quit));
        assert_eq!(key_action(Key::Q, false), Some(KeyAction::Quit));
        assert_eq!(key_action(Key::Q, true), Some(KeyAction::Quit));
    }

    #[test]
    fn every_bound_key_has_an_action() {
        for key in BOUND_KEYS {
            assert!(key_action(key, false).is_some(), "{key:?}");
        }
        assert_eq!(key_action(Key::A, false), None);
    }

    #[test]
    fn shift_space_steps_instead_of_running() {
        let mut app = viewer(20);
        app.apply_key(key_action(Key::Space, true).unwrap());
        assert_eq!(app.state.generation(), 1);
        assert!(!app.is_running);

        app.apply_key(key_action(Key::Space, false).unwrap());
        assert!(app.is_running);
    }

    #[test]
    fn arrows_pan_the_view() {
        let mut app = viewer(20);
        let before = app.view.offset;
        app.apply_key(key_action(Key::ArrowLeft, false).unwrap());
        assert_eq!(app.view.offset, before + vec2(MOVEMENT_STEP, 0.0));
        app.apply_key(key_action(Key::ArrowRight, false).unwrap());
        assert_eq!(app.view.offset, before);
    }

    #[test]
    fn random_fills_differ_between_clicks() {
        let mut app = viewer(30);
        app.apply_random_pattern();
        let first = app.state.cells().to_vec();
        app.apply_random_pattern();
        assert_ne!(app.state.cells(), &first[..]);
    }
}
