use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use datepicker::config::ThemeConfig;
use datepicker::picker::model::{reduce, CalendarState, Rules};
use datepicker::picker::{
    month_grid, Action, DateBounds, Datepicker, DisplayPeriod, Props, Selection, WeekStart,
};
use datepicker::tui::{SurfaceOptions, TuiSurface};
use ratatui::{buffer::Buffer, layout::Rect};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn june() -> DisplayPeriod {
    DisplayPeriod::of(date(2024, 6, 1))
}

/// Two-page picker with a range selected, as used interactively
fn create_picker() -> Datepicker<TuiSurface> {
    let props = Props::new("stay")
        .selected(Selection::range(date(2024, 6, 5), date(2024, 6, 10)))
        .months_shown(2)
        .unwrap_or_else(|_| Props::new("stay"));
    Datepicker::new(TuiSurface::new(SurfaceOptions::default()), props)
}

/// Benchmark the pure reducer
fn bench_reducer_dispatch(c: &mut Criterion) {
    let rules = Rules {
        months_shown: 2,
        bounds: DateBounds::new(Some(date(2024, 1, 1)), Some(date(2024, 12, 31))),
    };
    let partial = CalendarState {
        selection: Selection::PartialStart(date(2024, 6, 10)),
        period: june(),
    };

    let mut group = c.benchmark_group("reducer");

    group.bench_function("turn_next", |b| {
        b.iter(|| reduce(black_box(partial), black_box(&Action::TurnNext), &rules))
    });

    group.bench_function("select_day_completes_range", |b| {
        b.iter(|| {
            reduce(
                black_box(partial),
                black_box(&Action::SelectDay(date(2024, 6, 5))),
                &rules,
            )
        })
    });

    group.bench_function("set_selected_far_away", |b| {
        let far = Selection::range(date(2024, 11, 2), date(2024, 11, 20));
        b.iter(|| reduce(black_box(partial), black_box(&Action::SetSelected(far)), &rules))
    });

    group.finish();
}

/// Benchmark dispatch through the facade, surface refresh included
fn bench_facade_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");

    group.bench_function("pick_two_days", |b| {
        let mut picker = create_picker();
        b.iter(|| {
            picker
                .dispatch(black_box(Action::SelectDay(date(2024, 6, 12))))
                .dispatch(black_box(Action::SelectDay(date(2024, 6, 3))));
        })
    });

    group.bench_function("turn_next_prev", |b| {
        let mut picker = create_picker();
        b.iter(|| {
            picker.dispatch(Action::TurnNext).dispatch(Action::TurnPrev);
        })
    });

    group.finish();
}

/// Benchmark grid construction and drawing
fn bench_rendering(c: &mut Criterion) {
    let theme = ThemeConfig::default();
    let mut group = c.benchmark_group("rendering");

    group.bench_function("month_grid", |b| {
        b.iter(|| month_grid(black_box(june()), WeekStart::Sunday))
    });

    group.bench_function("draw_two_pages", |b| {
        let mut picker = create_picker();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 10));
        b.iter(|| {
            buf.reset();
            picker.surface_mut().draw(buf.area, &mut buf, &theme);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_reducer_dispatch,
    bench_facade_dispatch,
    bench_rendering
);
criterion_main!(benches);
