// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::format::NumberLocale;
use crate::model::{ChartImage, ChartKind, ImageInfo, SlideBody, SlideDescriptor};

use super::text::wrap_words;
use super::{Canvas, CanvasError};

/// Narrowest card that still fits a border, padding and a short word.
pub const MIN_CARD_WIDTH: usize = 12;
const PADDING_X: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideRenderError {
    Canvas(CanvasError),
    TooNarrow { width: usize },
}

impl fmt::Display for SlideRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::TooNarrow { width } => {
                write!(f, "card width {width} is below the minimum of {MIN_CARD_WIDTH}")
            }
        }
    }
}

impl std::error::Error for SlideRenderError {}

impl From<CanvasError> for SlideRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CardLine {
    Blank,
    Centered(String),
    FrameTop,
    Framed(String),
    FrameBottom,
}

/// Renders one slide as a bordered card exactly `width` columns wide.
///
/// Layout, top to bottom: heading, caption, then the body (big number, framed chart reference,
/// or wrapped fact sentences).
pub fn render_slide_unicode(
    slide: &SlideDescriptor,
    locale: &NumberLocale,
    width: usize,
) -> Result<String, SlideRenderError> {
    if width < MIN_CARD_WIDTH {
        return Err(SlideRenderError::TooNarrow { width });
    }
    let inner = width - 2 - 2 * PADDING_X;

    let mut lines = vec![CardLine::Blank];
    lines.extend(wrap_words(slide.heading(), inner).into_iter().map(CardLine::Centered));
    if let Some(caption) = slide.caption() {
        lines.extend(wrap_words(caption, inner).into_iter().map(CardLine::Centered));
    }
    lines.push(CardLine::Blank);
    body_lines(slide.body(), locale, inner, &mut lines);
    lines.push(CardLine::Blank);

    let height = lines.len() + 2;
    let mut canvas = Canvas::new(width, height)?;
    canvas.draw_box(0, 0, width - 1, height - 1)?;

    let x0 = 1 + PADDING_X;
    let x1 = width - 2 - PADDING_X;
    for (row, line) in lines.iter().enumerate() {
        let y = row + 1;
        match line {
            CardLine::Blank => {}
            CardLine::Centered(text) => canvas.write_centered(x0, x1, y, text)?,
            CardLine::FrameTop => {
                canvas.draw_box(x0, y, x1, y + 1 + framed_rows(&lines[row..]))?;
            }
            CardLine::Framed(text) => canvas.write_centered(x0 + 2, x1 - 2, y, text)?,
            CardLine::FrameBottom => {}
        }
    }

    Ok(canvas.to_string())
}

/// Number of `Framed` lines directly after a `FrameTop`.
fn framed_rows(lines: &[CardLine]) -> usize {
    lines.iter().skip(1).take_while(|line| matches!(line, CardLine::Framed(_))).count()
}

fn body_lines(body: &SlideBody, locale: &NumberLocale, inner: usize, out: &mut Vec<CardLine>) {
    match body {
        SlideBody::Summary { total_messages } => {
            out.push(CardLine::Centered(locale.group(*total_messages)));
        }
        SlideBody::Chart { kind, image } => {
            let text_width = inner.saturating_sub(4);
            out.push(CardLine::FrameTop);
            for line in wrap_words(&format!("[{}]", kind.alt_text()), text_width) {
                out.push(CardLine::Framed(line));
            }
            out.push(CardLine::Framed(image_summary(*kind, image)));
            out.push(CardLine::FrameBottom);
        }
        SlideBody::Facts { top_sender, busiest_day } => {
            let sentences = [
                top_sender.as_deref().map(|sender| format!("{sender} sent the most messages.")),
                busiest_day.as_deref().map(|day| format!("Your busiest day was {day}.")),
            ];
            for (idx, sentence) in sentences.into_iter().flatten().enumerate() {
                if idx > 0 {
                    out.push(CardLine::Blank);
                }
                out.extend(wrap_words(&sentence, inner).into_iter().map(CardLine::Centered));
            }
        }
    }
}

/// One-line description of a chart blob, e.g. `600×400 PNG · 23.4 KiB`.
pub fn image_summary(kind: ChartKind, image: &ChartImage) -> String {
    match image.info() {
        Some(ImageInfo { byte_len, dimensions: Some((w, h)) }) => {
            format!("{w}×{h} PNG · {}", human_bytes(byte_len))
        }
        Some(ImageInfo { byte_len, dimensions: None }) => {
            format!("image · {}", human_bytes(byte_len))
        }
        None => {
            tracing::warn!(chart = %kind, "chart blob is not valid base64");
            "image unavailable".to_owned()
        }
    }
}

fn human_bytes(len: usize) -> String {
    if len < 1024 {
        format!("{len} B")
    } else {
        format!("{:.1} KiB", len as f64 / 1024.0)
    }
}
