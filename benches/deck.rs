// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use recap::analyze::analyze_chat_log;
use recap::deck::{build_slides, InputRouter, Navigator};
use recap::format::NumberLocale;
use recap::render::render_slide_unicode;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Groups: `deck.build`, `deck.navigate`, `render.slide`, `analyze.chat_log`
// - Case IDs after the `/` stay stable across refactors so results remain comparable.
fn benches_deck(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck.build");
    for case in fixtures::ResultCase::ALL {
        let result = fixtures::result(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(build_slides(black_box(&result))).len())
        });
    }
    group.finish();

    let mut group = c.benchmark_group("deck.navigate");
    let slides = build_slides(&fixtures::result(fixtures::ResultCase::Full));
    let events = fixtures::mixed_events(10_000);
    group.bench_function("mixed_10k", move |b| {
        b.iter_batched(
            || {
                let mut navigator = Navigator::new();
                let _ = navigator.load(slides.clone());
                (navigator, InputRouter::default())
            },
            |(mut navigator, mut router)| {
                for event in &events {
                    if let Some(intent) = router.route(*event) {
                        black_box(navigator.apply(intent));
                    }
                }
                navigator.current_index()
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();

    let mut group = c.benchmark_group("render.slide");
    let slides = build_slides(&fixtures::result(fixtures::ResultCase::Full));
    for (id, index) in [("summary", 0usize), ("chart", 1), ("facts", 6)] {
        let slide = slides[index].clone();
        group.bench_function(id, move |b| {
            b.iter(|| {
                let card = render_slide_unicode(black_box(&slide), &NumberLocale::ENGLISH, 72)
                    .expect("render_slide_unicode");
                black_box(card.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("analyze.chat_log");
    for (id, len) in [("small", 1_000usize), ("large", 50_000)] {
        let document = fixtures::chat_log(len);
        group.bench_function(id, move |b| {
            b.iter(|| {
                let result = analyze_chat_log(black_box(&document)).expect("analyze_chat_log");
                black_box(result.total_messages)
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_deck
}
criterion_main!(benches);
