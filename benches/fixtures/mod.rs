// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic benchmark inputs (no RNG).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use recap::deck::{InputEvent, TouchPhase};
use recap::model::{AnalysisResult, ChartImage, ChartKind};
use serde_json::{json, Value};

/// A PNG signature plus IHDR chunk, enough for the image summary to read dimensions.
fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    // Pad to a realistic chart size.
    bytes.resize(24 * 1024, 0);
    bytes
}

#[derive(Debug, Clone, Copy)]
pub enum ResultCase {
    Empty,
    SummaryOnly,
    Full,
}

impl ResultCase {
    pub const ALL: [ResultCase; 3] = [Self::Empty, Self::SummaryOnly, Self::Full];

    pub fn id(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::SummaryOnly => "summary_only",
            Self::Full => "full",
        }
    }
}

pub fn result(case: ResultCase) -> AnalysisResult {
    match case {
        ResultCase::Empty => AnalysisResult::default(),
        ResultCase::SummaryOnly => {
            AnalysisResult { total_messages: Some(1_234_567), ..AnalysisResult::default() }
        }
        ResultCase::Full => {
            let mut result = AnalysisResult {
                total_messages: Some(1_234_567),
                top_sender: Some("Alice".to_owned()),
                busiest_day: Some("2024-03-01".to_owned()),
                ..AnalysisResult::default()
            };
            let image = ChartImage::from_bytes(&png_header(800, 400));
            for kind in ChartKind::ALL {
                result.charts.set(kind, Some(image.clone()));
            }
            result
        }
    }
}

/// `len` events cycling through every channel, net-forward so the cursor sweeps the deck.
pub fn mixed_events(len: usize) -> Vec<InputEvent> {
    (0..len)
        .map(|idx| match idx % 6 {
            0 => InputEvent::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            1 => InputEvent::Wheel { delta_y: 3.0 },
            2 => InputEvent::Touch(TouchPhase::Start { y: 20.0 }),
            3 => InputEvent::Touch(TouchPhase::End { y: 4.0 }),
            4 => InputEvent::Key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)),
            _ => InputEvent::Wheel { delta_y: -1.0 },
        })
        .collect()
}

/// A message-list chat export with `len` messages over five senders and ~40 days.
pub fn chat_log(len: usize) -> Value {
    const SENDERS: [&str; 5] = ["Alice", "Bob", "Carol", "Dan", "Eve"];
    const START_SECS: u64 = 1_704_067_200;

    let messages = (0..len)
        .map(|idx| {
            let ts = START_SECS + (idx as u64 * 3_607) % (40 * 86_400);
            json!({
                "timestamp": ts,
                "sender": SENDERS[(idx * 7 + idx / 3) % SENDERS.len()],
                "content": format!("message number {idx}"),
            })
        })
        .collect();
    Value::Array(messages)
}
