/// The five logical buttons the controller cares about, plus quit.
/// Buttons are sampled as level state only; there are no press/release
/// edges at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Forward,
    Backward,
    Sprint,
    TurnLeft,
    TurnRight,
    Quit,
}

const ACTION_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::Forward => 0,
            InputAction::Backward => 1,
            InputAction::Sprint => 2,
            InputAction::TurnLeft => 3,
            InputAction::TurnRight => 4,
            InputAction::Quit => 5,
        }
    }
}

/// Immutable per-tick view of the input state. The collector owns the live
/// state; scenes only ever see this snapshot, so they can be driven in tests
/// without a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, actions: ActionStates) -> Self {
        Self {
            quit_requested,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_set_action_defaults_to_up() {
        let states = ActionStates::default();
        assert!(!states.is_down(InputAction::Forward));
        assert!(!states.is_down(InputAction::Sprint));
    }

    #[test]
    fn is_down_reflects_only_the_most_recent_set() {
        let mut states = ActionStates::default();
        states.set(InputAction::Forward, true);
        states.set(InputAction::Forward, true);
        assert!(states.is_down(InputAction::Forward));

        states.set(InputAction::Forward, false);
        assert!(!states.is_down(InputAction::Forward));

        states.set(InputAction::Forward, true);
        assert!(states.is_down(InputAction::Forward));
    }

    #[test]
    fn actions_are_independent() {
        let mut states = ActionStates::default();
        states.set(InputAction::TurnLeft, true);
        assert!(states.is_down(InputAction::TurnLeft));
        assert!(!states.is_down(InputAction::TurnRight));
        assert!(!states.is_down(InputAction::Backward));
    }

    #[test]
    fn snapshot_builder_sets_action_state() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::Forward, true)
            .with_action_down(InputAction::Sprint, true);
        assert!(snapshot.is_down(InputAction::Forward));
        assert!(snapshot.is_down(InputAction::Sprint));
        assert!(!snapshot.is_down(InputAction::Backward));
        assert!(!snapshot.quit_requested());
    }
}
