// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{AnalysisResult, ChartKind, SlideBody, SlideDescriptor, SlideSequence};

pub const SUMMARY_HEADING: &str = "You've been chatty!";
pub const SUMMARY_CAPTION: &str = "Total messages analyzed";
pub const FACTS_HEADING: &str = "Did you know?";

/// Builds the slide deck for one analysis result.
///
/// Order is fixed: summary, then one slide per present chart in [`ChartKind::ALL`] order, then
/// the facts slide. Each step is skipped when its data is absent, so the deck holds 0 to 7
/// slides. Missing data is never an error.
pub fn build_slides(result: &AnalysisResult) -> SlideSequence {
    let mut slides = Vec::with_capacity(ChartKind::ALL.len() + 2);

    if let Some(total_messages) = result.total_messages {
        slides.push(SlideDescriptor::new(
            slides.len(),
            SUMMARY_HEADING,
            Some(SUMMARY_CAPTION.to_owned()),
            SlideBody::Summary { total_messages },
        ));
    }

    for kind in ChartKind::ALL {
        let Some(image) = result.charts.get(kind) else {
            continue;
        };
        slides.push(SlideDescriptor::new(
            slides.len(),
            kind.heading(),
            kind.caption().map(str::to_owned),
            SlideBody::Chart { kind, image: image.clone() },
        ));
    }

    let top_sender = present_fact(result.top_sender.as_deref());
    let busiest_day = present_fact(result.busiest_day.as_deref());
    if top_sender.is_some() || busiest_day.is_some() {
        slides.push(SlideDescriptor::new(
            slides.len(),
            FACTS_HEADING,
            None,
            SlideBody::Facts { top_sender, busiest_day },
        ));
    }

    tracing::debug!(slides = slides.len(), "built slide deck");
    SlideSequence::from_slides(slides)
}

/// Blank strings count as absent.
fn present_fact(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|value| !value.is_empty()).map(str::to_owned)
}
