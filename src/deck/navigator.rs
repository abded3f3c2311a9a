// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{SlideDescriptor, SlideSequence};

use super::input::NavIntent;

/// The navigator's only mutable state.
///
/// `Showing` always holds a non-empty sequence and an in-bounds cursor; an empty deck is `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigatorState {
    #[default]
    Idle,
    Showing { slides: SlideSequence, current: usize },
}

/// Rendering side effects of a single navigator call.
///
/// The visual layer applies `deactivated` then `activated`. Both `None` means the call was
/// absorbed as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct Transition {
    pub deactivated: Option<usize>,
    pub activated: Option<usize>,
    /// Set when a move was absorbed because the cursor already sits on the first/last slide.
    pub at_edge: Option<Edge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    First,
    Last,
}

impl Transition {
    const NOOP: Self = Self { deactivated: None, activated: None, at_edge: None };

    fn edge(edge: Edge) -> Self {
        Self { at_edge: Some(edge), ..Self::NOOP }
    }

    pub fn is_noop(&self) -> bool {
        self.deactivated.is_none() && self.activated.is_none()
    }
}

/// Single-selection cursor over a [`SlideSequence`].
///
/// Owns the one active-slide marker. Every mutation takes `&mut self` and finishes both halves
/// of the transition before returning, so no caller can observe zero or two active slides.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigatorState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// Replaces the deck and resets the cursor to the first slide.
    ///
    /// An empty sequence puts the navigator into idle mode.
    pub fn load(&mut self, slides: SlideSequence) -> Transition {
        let deactivated = self.current_index();
        self.state = if slides.is_empty() {
            NavigatorState::Idle
        } else {
            NavigatorState::Showing { slides, current: 0 }
        };
        let activated = self.current_index();

        tracing::info!(slides = self.len(), "deck loaded");
        Transition { deactivated, activated, at_edge: None }
    }

    pub fn advance(&mut self) -> Transition {
        let NavigatorState::Showing { slides, current } = &mut self.state else {
            return Transition::NOOP;
        };
        if *current + 1 >= slides.len() {
            return Transition::edge(Edge::Last);
        }

        let from = *current;
        *current += 1;
        tracing::debug!(from, to = *current, "advance");
        Transition { deactivated: Some(from), activated: Some(*current), at_edge: None }
    }

    pub fn retreat(&mut self) -> Transition {
        let NavigatorState::Showing { current, .. } = &mut self.state else {
            return Transition::NOOP;
        };
        if *current == 0 {
            return Transition::edge(Edge::First);
        }

        let from = *current;
        *current -= 1;
        tracing::debug!(from, to = *current, "retreat");
        Transition { deactivated: Some(from), activated: Some(*current), at_edge: None }
    }

    pub fn apply(&mut self, intent: NavIntent) -> Transition {
        match intent {
            NavIntent::Advance => self.advance(),
            NavIntent::Retreat => self.retreat(),
        }
    }

    /// `None` while idle.
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            NavigatorState::Idle => None,
            NavigatorState::Showing { current, .. } => Some(*current),
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current_index() == Some(index)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, NavigatorState::Idle)
    }

    pub fn len(&self) -> usize {
        self.slides().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slides(&self) -> &[SlideDescriptor] {
        match &self.state {
            NavigatorState::Idle => &[],
            NavigatorState::Showing { slides, .. } => slides.as_slice(),
        }
    }

    pub fn current_slide(&self) -> Option<&SlideDescriptor> {
        match &self.state {
            NavigatorState::Idle => None,
            NavigatorState::Showing { slides, current } => slides.get(*current),
        }
    }
}
