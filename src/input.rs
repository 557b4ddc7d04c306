//! Per-frame input model.
//!
//! The front end reduces whatever device it polls into an [`InputSnapshot`]
//! of held actions.  The core pairs it with the previous frame's snapshot in
//! an [`InputFrame`] so one-shot actions (fire, confirm) can be recognised
//! only on the released → pressed transition.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Confirm,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub confirm: bool,
}

impl InputSnapshot {
    pub fn is_down(&self, action: Action) -> bool {
        match action {
            Action::Up => self.up,
            Action::Down => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Fire => self.fire,
            Action::Confirm => self.confirm,
        }
    }

    /// Snapshot with exactly the given actions held.
    pub fn with(actions: &[Action]) -> Self {
        let mut snapshot = InputSnapshot::default();
        for action in actions {
            match action {
                Action::Up => snapshot.up = true,
                Action::Down => snapshot.down = true,
                Action::Left => snapshot.left = true,
                Action::Right => snapshot.right = true,
                Action::Fire => snapshot.fire = true,
                Action::Confirm => snapshot.confirm = true,
            }
        }
        snapshot
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub previous: InputSnapshot,
    pub current: InputSnapshot,
}

impl InputFrame {
    pub fn new(previous: InputSnapshot, current: InputSnapshot) -> Self {
        InputFrame { previous, current }
    }

    pub fn held(&self, action: Action) -> bool {
        self.current.is_down(action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.current.is_down(action) && !self.previous.is_down(action)
    }
}
