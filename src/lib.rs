// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recap: chat-log statistics as a terminal slide deck.
//!
//! An [`analyze::AnalysisProvider`] produces a [`model::AnalysisResult`],
//! [`deck::build_slides`] turns it into slides, and [`deck::Navigator`] keeps exactly one of
//! them active while keyboard, wheel and drag input move the cursor.

pub mod analyze;
pub mod config;
pub mod deck;
pub mod format;
pub mod logging;
pub mod model;
pub mod render;
pub mod tui;
