//! Screen flow: main menu → how to play → gameplay → game over → gameplay.
//!
//! Menus advance on the confirm press edge, gameplay ends when the player
//! dies.  Each `update` only runs the screen that was current when it was
//! called, so a transition takes effect on the following frame.

use rand::Rng;

use crate::highscore::ScoreStore;
use crate::input::{Action, InputFrame, InputSnapshot};
use crate::session::{FrameReport, GameplaySession};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    MainMenu,
    HowToPlay,
    Gameplay,
    GameOver,
}

/// Result of a finished round, shown on the game-over screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameOverSummary {
    pub final_score: u32,
    pub high_score: u32,
    pub is_new_high_score: bool,
}

#[derive(Debug, Default)]
pub struct ScreenMachine {
    pub screen: Screen,
    pub session: GameplaySession,
    pub summary: GameOverSummary,
    /// Best score known so far, for the menu.
    pub high_score: u32,
    /// Tally of the last gameplay frame; cleared on every new round.
    pub last_report: FrameReport,
    previous_input: InputSnapshot,
}

impl ScreenMachine {
    pub fn new(high_score: u32) -> Self {
        ScreenMachine {
            high_score,
            ..ScreenMachine::default()
        }
    }

    /// Run one frame of whichever screen is current.  Returns the screen
    /// that will be current next frame.
    pub fn update(
        &mut self,
        snapshot: InputSnapshot,
        dt: f32,
        rng: &mut impl Rng,
        store: &mut impl ScoreStore,
    ) -> Screen {
        let input = InputFrame::new(self.previous_input, snapshot);
        self.previous_input = snapshot;
        let confirm = input.just_pressed(Action::Confirm);

        match self.screen {
            Screen::MainMenu => {
                if confirm {
                    self.transition(Screen::HowToPlay);
                }
            }
            Screen::HowToPlay => {
                if confirm {
                    self.transition(Screen::Gameplay);
                }
            }
            Screen::Gameplay => {
                self.last_report = self.session.advance(&input, dt, rng);
                if self.last_report != FrameReport::default() {
                    log::debug!("frame: {:?}", self.last_report);
                }
                if self.session.is_over() {
                    self.finish_round(store);
                    self.transition(Screen::GameOver);
                }
            }
            Screen::GameOver => {
                if confirm {
                    self.session.reset();
                    self.last_report = FrameReport::default();
                    self.transition(Screen::Gameplay);
                }
            }
        }

        self.screen
    }

    fn finish_round(&mut self, store: &mut impl ScoreStore) {
        let score = self.session.score;
        let mut high_score = store.load();
        let is_new_high_score = score > high_score;
        if is_new_high_score {
            store.save(score);
            high_score = score;
            log::info!("new high score: {}", score);
        }
        self.high_score = high_score;
        self.summary = GameOverSummary {
            final_score: score,
            high_score,
            is_new_high_score,
        };
    }

    fn transition(&mut self, to: Screen) {
        log::info!("screen {:?} -> {:?}", self.screen, to);
        self.screen = to;
    }
}
