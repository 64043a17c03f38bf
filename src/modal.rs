// src/modal.rs
//
// Full-entry viewer state: Closed or Open(position), with wraparound
// movement over the current filtered view. Host input (buttons, keys,
// swipes) is translated into `ModalCommand`s by the front end.

use crate::{
    card::{display_name, location_label},
    config::consts::{NO_OFFERING_TEXT, SWIPE_MIN_DISTANCE},
    model::Offering,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalCommand {
    Prev,
    Next,
    Close,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    state: ModalState,
}

impl Navigator {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> ModalState { self.state }
    pub fn is_open(&self) -> bool { matches!(self.state, ModalState::Open(_)) }

    pub fn position(&self) -> Option<usize> {
        match self.state {
            ModalState::Open(p) => Some(p),
            ModalState::Closed => None,
        }
    }

    /// Open at `index` of a view with `len` records. Out-of-range indexes
    /// (and any index into an empty view) are refused.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            logw!("Modal: Refused open at {} (view len {})", index, len);
            return false;
        }
        self.state = ModalState::Open(index);
        true
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Step one record, wrapping at both ends. No-op while closed.
    pub fn navigate(&mut self, dir: Direction, len: usize) -> Option<usize> {
        let ModalState::Open(p) = self.state else { return None };
        if len == 0 {
            self.close();
            return None;
        }
        let next = (p as isize + dir.step()).rem_euclid(len as isize) as usize;
        self.state = ModalState::Open(next);
        Some(next)
    }

    /// Move an open navigator to `position`, or close it on None.
    pub fn retarget(&mut self, position: Option<usize>) {
        if self.is_open() {
            self.state = position.map_or(ModalState::Closed, ModalState::Open);
        }
    }
}

/// Full-detail fields for the open record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalDetail {
    pub name: String,
    pub location: String,
    pub body: String,
}

pub fn detail(o: &Offering) -> ModalDetail {
    ModalDetail {
        name: display_name(o),
        location: location_label(o.city(), o.country()),
        body: s!(o.body().unwrap_or(NO_OFFERING_TEXT)),
    }
}

/// Horizontal swipe detector: press, release, compare.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    min_distance: f32,
    start_x: Option<f32>,
}

impl Default for SwipeTracker {
    fn default() -> Self { Self::new(SWIPE_MIN_DISTANCE) }
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        Self { min_distance: min_distance.abs(), start_x: None }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Rightward swipe → previous, leftward → next; short travel → None.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        let distance = x - start;
        if distance.abs() <= self.min_distance {
            return None;
        }
        Some(if distance > 0.0 { Direction::Prev } else { Direction::Next })
    }
}
