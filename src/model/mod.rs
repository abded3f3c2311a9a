// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! An [`AnalysisResult`] comes in from a provider; the deck builder turns it into a
//! [`SlideSequence`].

pub mod analysis;
pub mod slide;

pub use analysis::{AnalysisResult, ChartImage, ChartKind, Charts, ImageInfo};
pub use slide::{SlideBody, SlideDescriptor, SlideKind, SlideSequence};
