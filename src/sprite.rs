//! Drawable capability shared by every on-screen entity.
//!
//! Rendering is not part of the library: a sprite only reports where it is,
//! which glyph frame to show and how to tint it.  Entities that animate
//! expose an [`Animation`] through [`Sprite::animation`]; static ones keep
//! the default `None`, and the renderer then always draws frame 0.

use crate::entities::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    White,
    Red,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

pub trait Sprite {
    fn position(&self) -> Vec2;

    /// Glyph for the given animation frame.
    fn glyph(&self, frame: usize) -> &'static str;

    fn tint(&self) -> Tint {
        Tint::White
    }

    fn animation(&self) -> Option<&Animation> {
        None
    }

    /// Frame the renderer should draw right now.
    fn current_frame(&self) -> usize {
        self.animation().map(Animation::frame).unwrap_or(0)
    }
}

// ── Animation component ──────────────────────────────────────────────────────

/// Frame counter for a strip of `frames` equally sized frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    frames: usize,
    frame: usize,
    seconds_per_frame: f32,
    elapsed: f32,
    pub looping: bool,
}

impl Animation {
    pub fn new(frames: usize, fps: u32) -> Self {
        Animation {
            frames: frames.max(1),
            frame: 0,
            seconds_per_frame: 1.0 / fps.max(1) as f32,
            elapsed: 0.0,
            looping: true,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Move at most one frame forward per call, carrying the leftover time.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed > self.seconds_per_frame {
            self.elapsed -= self.seconds_per_frame;
            if self.frame + 1 < self.frames {
                self.frame += 1;
            } else if self.looping {
                self.frame = 0;
            }
        }
    }

    /// Out-of-range frames are clamped to the last one.
    pub fn set_frame(&mut self, frame: usize) {
        self.frame = frame.min(self.frames - 1);
    }
}
