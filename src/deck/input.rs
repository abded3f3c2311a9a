// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input adapters.
//!
//! Each adapter turns raw device events from one channel into at most one [`NavIntent`] per
//! event. Gesture thresholds live here; the navigator only ever sees intents.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Default swipe distance, in terminal rows, a gesture must exceed to count.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
}

/// Translates one channel's raw events into navigation intents.
pub trait InputAdapter {
    type Event;

    fn translate(&mut self, event: Self::Event) -> Option<NavIntent>;
}

/// Discrete key presses.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyAdapter;

impl InputAdapter for KeyAdapter {
    type Event = KeyEvent;

    fn translate(&mut self, key: KeyEvent) -> Option<NavIntent> {
        if key.kind != KeyEventKind::Press
            || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        key_intent(key.code)
    }
}

pub fn key_intent(code: KeyCode) -> Option<NavIntent> {
    match code {
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char(' ')
        | KeyCode::Enter
        | KeyCode::PageDown
        | KeyCode::Char('j')
        | KeyCode::Char('l') => Some(NavIntent::Advance),
        KeyCode::Left | KeyCode::Up | KeyCode::PageUp | KeyCode::Char('k') | KeyCode::Char('h') => {
            Some(NavIntent::Retreat)
        }
        _ => None,
    }
}

/// Wheel/scroll events. Only the sign of the delta matters; one event is at most one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelAdapter;

impl InputAdapter for WheelAdapter {
    type Event = f64;

    fn translate(&mut self, delta_y: f64) -> Option<NavIntent> {
        if delta_y > 0.0 {
            Some(NavIntent::Advance)
        } else if delta_y < 0.0 {
            Some(NavIntent::Retreat)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchPhase {
    Start { y: f64 },
    End { y: f64 },
}

/// Start/end gesture recognition.
///
/// A gesture fires once on its end event if the vertical displacement `start - end` exceeds the
/// threshold: upward (positive) advances, downward retreats.
#[derive(Debug, Clone, Copy)]
pub struct TouchAdapter {
    threshold: f64,
    start_y: Option<f64>,
}

impl Default for TouchAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl TouchAdapter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.abs(), start_y: None }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn gesture_open(&self) -> bool {
        self.start_y.is_some()
    }
}

impl InputAdapter for TouchAdapter {
    type Event = TouchPhase;

    fn translate(&mut self, phase: TouchPhase) -> Option<NavIntent> {
        match phase {
            TouchPhase::Start { y } => {
                self.start_y = Some(y);
                None
            }
            TouchPhase::End { y } => {
                let start_y = self.start_y.take()?;
                let displacement = start_y - y;
                if displacement > self.threshold {
                    Some(NavIntent::Advance)
                } else if -displacement > self.threshold {
                    Some(NavIntent::Retreat)
                } else {
                    None
                }
            }
        }
    }
}

/// A raw event on one of the three channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Wheel { delta_y: f64 },
    Touch(TouchPhase),
}

impl InputEvent {
    /// Maps terminal events onto the three channels.
    ///
    /// Scrolling is the wheel channel; a left-button press/release pair is the touch channel with
    /// the row as `y`. Drags, moves and everything else are ignored.
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(Self::Key(*key)),
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            _ => None,
        }
    }

    fn from_mouse(mouse: &MouseEvent) -> Option<Self> {
        let y = f64::from(mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Self::Wheel { delta_y: 1.0 }),
            MouseEventKind::ScrollUp => Some(Self::Wheel { delta_y: -1.0 }),
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Touch(TouchPhase::Start { y })),
            MouseEventKind::Up(MouseButton::Left) => Some(Self::Touch(TouchPhase::End { y })),
            _ => None,
        }
    }
}

/// Fans all three channels into one intent stream.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    keys: KeyAdapter,
    wheel: WheelAdapter,
    touch: TouchAdapter,
}

impl InputRouter {
    pub fn new(swipe_threshold: f64) -> Self {
        Self { keys: KeyAdapter, wheel: WheelAdapter, touch: TouchAdapter::new(swipe_threshold) }
    }

    pub fn route(&mut self, event: InputEvent) -> Option<NavIntent> {
        match event {
            InputEvent::Key(key) => self.keys.translate(key),
            InputEvent::Wheel { delta_y } => self.wheel.translate(delta_y),
            InputEvent::Touch(phase) => self.touch.translate(phase),
        }
    }

    pub fn touch(&self) -> &TouchAdapter {
        &self.touch
    }
}
