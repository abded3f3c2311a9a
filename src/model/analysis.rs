// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Statistics payload returned by an analysis provider.
///
/// Every field is optional at the type level: a payload missing `total_messages` is malformed but
/// still a valid input for the slide builder, which simply emits fewer slides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_messages: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub charts: Charts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busiest_day: Option<String>,
}

impl AnalysisResult {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Named chart blobs, one optional slot per [`ChartKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_pie: Option<ChartImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_bar: Option<ChartImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_line: Option<ChartImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<ChartImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_len_bar: Option<ChartImage>,
}

impl Charts {
    pub fn get(&self, kind: ChartKind) -> Option<&ChartImage> {
        match kind {
            ChartKind::SenderPie => self.sender_pie.as_ref(),
            ChartKind::HourlyBar => self.hourly_bar.as_ref(),
            ChartKind::DailyLine => self.daily_line.as_ref(),
            ChartKind::Heatmap => self.heatmap.as_ref(),
            ChartKind::AvgLenBar => self.avg_len_bar.as_ref(),
        }
    }

    pub fn set(&mut self, kind: ChartKind, image: Option<ChartImage>) {
        let slot = match kind {
            ChartKind::SenderPie => &mut self.sender_pie,
            ChartKind::HourlyBar => &mut self.hourly_bar,
            ChartKind::DailyLine => &mut self.daily_line,
            ChartKind::Heatmap => &mut self.heatmap,
            ChartKind::AvgLenBar => &mut self.avg_len_bar,
        };
        *slot = image;
    }

    pub fn is_empty(&self) -> bool {
        ChartKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

/// The fixed set of chart kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartKind {
    SenderPie,
    HourlyBar,
    DailyLine,
    Heatmap,
    AvgLenBar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::SenderPie,
        ChartKind::HourlyBar,
        ChartKind::DailyLine,
        ChartKind::Heatmap,
        ChartKind::AvgLenBar,
    ];

    /// Payload key of this chart inside `charts`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::SenderPie => "sender_pie",
            Self::HourlyBar => "hourly_bar",
            Self::DailyLine => "daily_line",
            Self::Heatmap => "heatmap",
            Self::AvgLenBar => "avg_len_bar",
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::SenderPie => "Who talks the most?",
            Self::HourlyBar => "Your Peak Hours",
            Self::DailyLine => "Chat History",
            Self::Heatmap => "Weekly Routine",
            Self::AvgLenBar => "Long Winded?",
        }
    }

    pub const fn caption(self) -> Option<&'static str> {
        match self {
            Self::SenderPie => None,
            Self::HourlyBar => Some("When you are most active"),
            Self::DailyLine => Some("Messages over time"),
            Self::Heatmap => Some("Day vs Hour Intensity"),
            Self::AvgLenBar => Some("Average characters per message"),
        }
    }

    pub const fn alt_text(self) -> &'static str {
        match self {
            Self::SenderPie => "Sender Distribution",
            Self::HourlyBar => "Hourly Activity",
            Self::DailyLine => "Daily Activity",
            Self::Heatmap => "Weekly Heatmap",
            Self::AvgLenBar => "Avg Message Length",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A base64-encoded chart image (PNG in practice).
///
/// The blob is kept encoded; decoding happens only when a renderer asks for [`ChartImage::info`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartImage(String);

impl ChartImage {
    pub fn from_base64(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    pub fn encoded(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.0.trim())
    }

    /// Size and, for PNG blobs, pixel dimensions. `None` if the blob is not valid base64.
    pub fn info(&self) -> Option<ImageInfo> {
        let bytes = self.decode().ok()?;
        Some(ImageInfo { byte_len: bytes.len(), dimensions: png_dimensions(&bytes) })
    }
}

impl fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Blobs are tens of kilobytes; keep debug output readable.
        write!(f, "ChartImage({} base64 chars)", self.0.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub byte_len: usize,
    pub dimensions: Option<(u32, u32)>,
}

/// Reads width/height from the IHDR chunk, which must directly follow the signature.
fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 24 || bytes[..8] != PNG_SIGNATURE || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    Some((width, height))
}

#[cfg(test)]
pub(crate) fn png_header_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = PNG_SIGNATURE.to_vec();
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes
}
