use std::rc::Rc;

use yew::prelude::Reducible;

use crate::config::{INITIAL_REVEAL_POSITION, KEY_STEP};

pub const MIN_POSITION: f64 = 0.0;
pub const MAX_POSITION: f64 = 100.0;

pub fn clamp_position(value: f64) -> f64 {
    value.clamp(MIN_POSITION, MAX_POSITION)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// `None` for a collapsed container.
    pub fn position_at(&self, pointer_x: f64) -> Option<f64> {
        if self.width.is_nan() || self.width <= 0.0 {
            return None;
        }
        let percentage = (pointer_x - self.left) / self.width * 100.0;
        if percentage.is_nan() {
            return None;
        }
        Some(clamp_position(percentage))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    Decrease,
    Increase,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Step(StepDirection),
    Jump(f64),
}

impl KeyAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowDown" => Some(KeyAction::Step(StepDirection::Decrease)),
            "ArrowRight" | "ArrowUp" => Some(KeyAction::Step(StepDirection::Increase)),
            "Home" => Some(KeyAction::Jump(MIN_POSITION)),
            "End" => Some(KeyAction::Jump(MAX_POSITION)),
            _ => None,
        }
    }
}

pub fn key_step(current: f64, direction: StepDirection, step: f64) -> f64 {
    match direction {
        StepDirection::Decrease => clamp_position(current - step),
        StepDirection::Increase => clamp_position(current + step),
    }
}

// The after layer covers [position%, 100%]; before shows on the left.
pub fn after_clip_path(position: f64) -> String {
    format!("inset(0 0 0 {:.2}%)", clamp_position(position))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    pub reveal_position: f64,
    pub is_dragging: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            reveal_position: INITIAL_REVEAL_POSITION,
            is_dragging: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderAction {
    Grab(Option<f64>),
    Reveal(f64),
    Key(KeyAction),
    // Carries a position that was queued but not yet painted
    Release(Option<f64>),
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SliderAction::Grab(position) => {
                next.is_dragging = true;
                if let Some(position) = position {
                    next.reveal_position = clamp_position(position);
                }
            }
            SliderAction::Reveal(position) => {
                if !next.is_dragging {
                    return self;
                }
                next.reveal_position = clamp_position(position);
            }
            SliderAction::Key(KeyAction::Step(direction)) => {
                next.reveal_position = key_step(next.reveal_position, direction, KEY_STEP);
            }
            SliderAction::Key(KeyAction::Jump(position)) => {
                next.reveal_position = clamp_position(position);
            }
            SliderAction::Release(position) => {
                next.is_dragging = false;
                if let Some(position) = position {
                    next.reveal_position = clamp_position(position);
                }
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: SliderState, action: SliderAction) -> SliderState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn pointer_outside_container_is_clamped() {
        let bounds = ContainerBounds::new(0.0, 400.0);
        assert_eq!(bounds.position_at(-50.0), Some(0.0));
        assert_eq!(bounds.position_at(450.0), Some(100.0));
        assert_eq!(bounds.position_at(100.0), Some(25.0));
    }

    #[test]
    fn pointer_is_relative_to_container_left() {
        let bounds = ContainerBounds::new(200.0, 400.0);
        assert_eq!(bounds.position_at(400.0), Some(50.0));
        assert_eq!(bounds.position_at(150.0), Some(0.0));
    }

    #[test]
    fn any_pointer_lands_in_range() {
        let bounds = ContainerBounds::new(13.0, 377.0);
        for x in (-2000..2000).step_by(37) {
            let position = bounds.position_at(x as f64).unwrap();
            assert!((MIN_POSITION..=MAX_POSITION).contains(&position), "{x} -> {position}");
        }
        assert_eq!(bounds.position_at(f64::INFINITY), Some(100.0));
        assert_eq!(bounds.position_at(f64::NEG_INFINITY), Some(0.0));
    }

    #[test]
    fn collapsed_container_yields_nothing() {
        assert_eq!(ContainerBounds::new(0.0, 0.0).position_at(10.0), None);
        assert_eq!(ContainerBounds::new(0.0, -5.0).position_at(10.0), None);
        assert_eq!(ContainerBounds::new(0.0, f64::NAN).position_at(10.0), None);
        assert_eq!(ContainerBounds::new(0.0, 100.0).position_at(f64::NAN), None);
    }

    #[test]
    fn one_decrease_from_the_middle() {
        assert_eq!(key_step(50.0, StepDirection::Decrease, KEY_STEP), 45.0);
        assert_eq!(key_step(50.0, StepDirection::Increase, KEY_STEP), 55.0);
        assert_eq!(key_step(3.0, StepDirection::Decrease, KEY_STEP), 0.0);
    }

    #[test]
    fn repeated_key_presses_stay_in_range() {
        let mut state = SliderState::default();
        for _ in 0..50 {
            state = reduce(state, SliderAction::Key(KeyAction::Step(StepDirection::Decrease)));
            assert!(state.reveal_position >= MIN_POSITION);
        }
        assert_eq!(state.reveal_position, 0.0);
        for _ in 0..50 {
            state = reduce(state, SliderAction::Key(KeyAction::Step(StepDirection::Increase)));
            assert!(state.reveal_position <= MAX_POSITION);
        }
        assert_eq!(state.reveal_position, 100.0);
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(KeyAction::from_key("ArrowLeft"), Some(KeyAction::Step(StepDirection::Decrease)));
        assert_eq!(KeyAction::from_key("ArrowUp"), Some(KeyAction::Step(StepDirection::Increase)));
        assert_eq!(KeyAction::from_key("End"), Some(KeyAction::Jump(100.0)));
        assert_eq!(KeyAction::from_key("Enter"), None);
    }

    #[test]
    fn reveal_is_ignored_outside_a_drag() {
        let state = reduce(SliderState::default(), SliderAction::Reveal(10.0));
        assert_eq!(state.reveal_position, INITIAL_REVEAL_POSITION);

        let state = reduce(state, SliderAction::Grab(Some(20.0)));
        assert!(state.is_dragging);
        let state = reduce(state, SliderAction::Reveal(30.0));
        assert_eq!(state.reveal_position, 30.0);

        let state = reduce(state, SliderAction::Release(Some(35.0)));
        assert!(!state.is_dragging);
        assert_eq!(state.reveal_position, 35.0);
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let state = Rc::new(SliderState::default());
        let next = Rc::clone(&state).reduce(SliderAction::Reveal(10.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn after_layer_clip_starts_at_divider() {
        assert_eq!(after_clip_path(50.0), "inset(0 0 0 50.00%)");
        assert_eq!(after_clip_path(120.0), "inset(0 0 0 100.00%)");
    }
}
