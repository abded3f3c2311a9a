// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Presentation engine: slide building plus cursor navigation.
//!
//! Data flows one way: [`build_slides`] turns a result into a [`SlideSequence`], which is handed
//! to [`Navigator::load`]. Input adapters feed [`NavIntent`]s into [`Navigator::apply`].
//!
//! [`SlideSequence`]: crate::model::SlideSequence

pub mod builder;
pub mod input;
pub mod navigator;

pub use builder::build_slides;
pub use input::{
    InputAdapter, InputEvent, InputRouter, KeyAdapter, NavIntent, TouchAdapter, TouchPhase,
    WheelAdapter, DEFAULT_SWIPE_THRESHOLD,
};
pub use navigator::{Edge, Navigator, NavigatorState, Transition};
