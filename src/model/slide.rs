// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Deref;
use std::sync::Arc;

use super::analysis::{ChartImage, ChartKind};

/// One unit of full-screen presented content.
///
/// Slides are value objects: built once, then only displayed or discarded with their sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDescriptor {
    position: usize,
    heading: String,
    caption: Option<String>,
    body: SlideBody,
}

impl SlideDescriptor {
    pub(crate) fn new(
        position: usize,
        heading: impl Into<String>,
        caption: Option<String>,
        body: SlideBody,
    ) -> Self {
        Self { position, heading: heading.into(), caption, body }
    }

    /// Zero-based position in display order.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn body(&self) -> &SlideBody {
        &self.body
    }

    pub fn kind(&self) -> SlideKind {
        match &self.body {
            SlideBody::Summary { .. } => SlideKind::Summary,
            SlideBody::Chart { kind, .. } => SlideKind::Chart(*kind),
            SlideBody::Facts { .. } => SlideKind::Facts,
        }
    }

    pub fn image(&self) -> Option<&ChartImage> {
        match &self.body {
            SlideBody::Chart { image, .. } => Some(image),
            _ => None,
        }
    }
}

/// Typed render payload of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBody {
    /// Headline count; grouping is applied at render time.
    Summary { total_messages: u64 },
    Chart { kind: ChartKind, image: ChartImage },
    /// At least one of the two facts is present.
    Facts { top_sender: Option<String>, busiest_day: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Summary,
    Chart(ChartKind),
    Facts,
}

/// An ordered, immutable list of slides produced by one builder call.
///
/// Cloning shares the underlying slides. There is no mutating API: a new analysis produces a new
/// sequence which replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideSequence {
    slides: Arc<[SlideDescriptor]>,
}

impl SlideSequence {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Positions are reassigned from the vector order so they are always `0..len`.
    pub(crate) fn from_slides(mut slides: Vec<SlideDescriptor>) -> Self {
        for (idx, slide) in slides.iter_mut().enumerate() {
            slide.position = idx;
        }
        Self { slides: slides.into() }
    }

    pub fn as_slice(&self) -> &[SlideDescriptor] {
        &self.slides
    }

    pub fn kinds(&self) -> Vec<SlideKind> {
        self.slides.iter().map(SlideDescriptor::kind).collect()
    }
}

impl Deref for SlideSequence {
    type Target = [SlideDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.slides
    }
}

impl<'a> IntoIterator for &'a SlideSequence {
    type Item = &'a SlideDescriptor;
    type IntoIter = std::slice::Iter<'a, SlideDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
