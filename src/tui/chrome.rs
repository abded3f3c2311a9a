// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Screen, footer, help, and layout helpers used by TUI rendering.
fn render_deck(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if usize::from(area.width) < MIN_CARD_WIDTH {
        if let Some(slide) = app.navigator.current_slide() {
            let heading = Paragraph::new(slide.heading().to_owned())
                .style(app.theme.header_style())
                .wrap(Wrap { trim: true });
            frame.render_widget(heading, area);
        }
        return;
    }

    let Some(card) = app.card_text(area.width) else {
        let lines = vec![
            Line::styled("Nothing to show for this file.", app.theme.header_style()),
            Line::raw(""),
            Line::styled("Press o to open another file.", app.theme.muted_style()),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered_area(area, area.width, 3));
        return;
    };

    match card {
        Ok(card) => {
            let width = card.lines().next().map(|line| line.chars().count()).unwrap_or(0);
            let lines: Vec<Line<'static>> = card
                .lines()
                .map(|line| Line::styled(line.to_owned(), app.theme.card_style()))
                .collect();
            let height = clamp_to_u16(lines.len());
            let card_area = centered_area(area, clamp_to_u16(width), height);
            frame.render_widget(Paragraph::new(lines), card_area);
        }
        Err(message) => {
            let paragraph = Paragraph::new(message)
                .style(app.theme.error_style())
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_open_screen(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let width = area.width.saturating_sub(4).min(80);
    let box_area = centered_area(area, width, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.card_style())
        .title(" Open chat export ");
    let inner = block.inner(box_area);

    let status = match (&app.open_status, app.jobs.pending_path()) {
        (OpenStatus::Error(message), _) => Line::styled(message.clone(), app.theme.error_style()),
        (OpenStatus::Ready, Some(path)) => Line::styled(
            format!("Analyzing {}…", path.display()),
            app.theme.accent_style(),
        ),
        (OpenStatus::Ready, None) => {
            Line::styled("Press Enter to analyze.", app.theme.muted_style())
        }
    };
    let lines = vec![
        Line::styled("Path to a chat export or analysis result (JSON):", app.theme.label_style()),
        Line::from(vec![
            Span::styled("> ", app.theme.key_style()),
            Span::raw(app.path_input.clone()),
        ]),
        Line::raw(""),
        status,
    ];
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, box_area);

    if !app.show_help && inner.height > 1 {
        let cursor_x = inner
            .x
            .saturating_add(2)
            .saturating_add(clamp_to_u16(app.path_input.chars().count()))
            .min(inner.x.saturating_add(inner.width.saturating_sub(1)));
        frame.set_cursor_position((cursor_x, inner.y + 1));
    }
}

fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn clamp_to_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

fn slide_counter_label(index: Option<usize>, total: usize) -> String {
    match index {
        Some(index) if total > 0 => {
            let width = total.to_string().len();
            format!("[{:0width$}/{total}]", index + 1)
        }
        _ => "[0/0]".to_owned(),
    }
}

fn footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();

    match app.screen {
        Screen::Deck => {
            let counter =
                slide_counter_label(app.navigator.current_index(), app.navigator.len());
            spans.push(Span::styled("Slide ".to_owned(), theme.label_style()));
            spans.push(Span::styled(counter, theme.accent_style()));
            push_footer_entry(&mut spans, theme, "NAV", NAV_HINT);
            push_footer_entry(&mut spans, theme, "OPEN", "o");
            push_footer_entry(&mut spans, theme, "HELP", "?");
            push_footer_entry(&mut spans, theme, "QUIT", "q");
        }
        Screen::Open => {
            push_footer_entry(&mut spans, theme, "ANALYZE", "Enter");
            push_footer_entry(&mut spans, theme, "CLEAR", "^U");
            if app.deck_loaded {
                push_footer_entry(&mut spans, theme, "BACK", "Esc");
            } else {
                push_footer_entry(&mut spans, theme, "QUIT", "Esc");
            }
        }
    }

    if let Some(message) = toast_suffix.strip_prefix(" | ") {
        spans.push(Span::styled(" | ".to_owned(), theme.label_style()));
        spans.push(Span::raw(message.to_owned()));
    }

    Line::from(spans)
}

fn footer_brand_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![Span::styled(FOOTER_BRAND.to_owned(), theme.header_style())])
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), theme.label_style()));
    }
    spans.push(Span::styled(format!("{}:", footer_label_ucfirst(label)), theme.label_style()));
    spans.push(Span::styled(value.to_owned(), theme.key_style()));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>key_width$}"), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_ENTRIES: [(&str, &str); 8] = [
    ("→ ↓ Space Enter PgDn j l", "Next slide"),
    ("← ↑ PgUp k h", "Previous slide"),
    ("Wheel down/up", "Next/previous slide"),
    ("Drag up/down", "Next/previous slide"),
    ("o", "Open another file (deck is kept)"),
    ("Esc", "Back to the deck from the open screen"),
    ("?", "Help (toggle)"),
    ("q, Ctrl-C", "Quit"),
];

fn render_help(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let key_width = HELP_ENTRIES.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
    let mut lines = vec![Line::styled("--- Slides ---", app.theme.header_style())];
    lines.extend(
        HELP_ENTRIES
            .iter()
            .map(|(key, desc)| help_kv(key, desc, key_width, app.theme.key_style())),
    );

    let height = clamp_to_u16(lines.len() + 2);
    let width = clamp_to_u16(key_width + 44);
    let area = centered_area(main_area, width, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.card_style())
        .title(" Help ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
