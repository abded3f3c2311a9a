// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recap CLI entrypoint.
//!
//! Opens the slide deck TUI, optionally analysing a file right away.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use recap::analyze::{AnalysisProvider, AutoProvider, ResultFile};
use recap::config::{parse_swipe_threshold, Settings};
use recap::format::NumberLocale;
use recap::tui::RunOptions;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<file>] [--swipe-threshold <rows>] [--locale <tag>]\n  {program} --result <file> [--swipe-threshold <rows>] [--locale <tag>]\n\n<file> is a chat export (JSON message list or column table) or a pre-computed result payload;\nthe kind is detected from its contents. Without a file the open screen asks for one.\n\n--result treats every opened file as a pre-computed result payload.\n--swipe-threshold sets how many rows a click-drag must travel to change slides (default 2).\n--locale picks digit grouping (e.g. de_DE, fr-FR); defaults to RECAP_LOCALE, LC_ALL, LC_NUMERIC, LANG.\n\nRECAP_LOG_FILE=<path> writes logs to a file (filter via RECAP_LOG, default recap=info)."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputFile {
    Detect(String),
    Result(String),
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    help: bool,
    input: Option<InputFile>,
    swipe_threshold: Option<f64>,
    locale: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--result" => {
                if options.input.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.input = Some(InputFile::Result(file));
            }
            "--swipe-threshold" => {
                if options.swipe_threshold.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.swipe_threshold = Some(parse_swipe_threshold(&raw).map_err(|_| ())?);
            }
            "--locale" => {
                if options.locale.is_some() {
                    return Err(());
                }
                options.locale = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(InputFile::Detect(arg));
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "recap".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        if options.help {
            print_usage(&program);
            return Ok(());
        }

        recap::logging::init_from_env()?;

        let mut settings = Settings::from_env()?;
        if let Some(threshold) = options.swipe_threshold {
            settings.swipe_threshold = threshold;
        }
        if let Some(tag) = options.locale.as_deref() {
            settings.locale = NumberLocale::from_tag(tag);
        }

        let (provider, file): (Arc<dyn AnalysisProvider>, Option<PathBuf>) = match options.input {
            Some(InputFile::Result(file)) => (Arc::new(ResultFile), Some(PathBuf::from(file))),
            Some(InputFile::Detect(file)) => (Arc::new(AutoProvider), Some(PathBuf::from(file))),
            None => (Arc::new(AutoProvider), None),
        };

        recap::tui::run(RunOptions { provider, settings, file })
    })();

    if let Err(err) = result {
        eprintln!("recap: {err}");
        std::process::exit(1);
    }
}
