use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_lagoon::core::{Compositor, Layer, MetaballEngine, WaveGrid};
use tui_lagoon::engine::LandingPage;
use tui_lagoon::term::{encode_diff_into, CrosstermStyler};
use tui_lagoon::types::{Canvas, Palette, Rgb};

fn lava(w: u16, h: u16) -> MetaballEngine {
    let palette = Palette::new(vec![
        Rgb::new(0x58, 0xa6, 0xff),
        Rgb::new(0x39, 0xc5, 0xcf),
        Rgb::new(0x56, 0xd3, 0x64),
    ])
    .unwrap();
    let mut engine = MetaballEngine::lava_lamp(w, h);
    engine.scatter(12345, 5, &palette).unwrap();
    engine
}

fn bench_metaball_render(c: &mut Criterion) {
    let mut engine = lava(160, 48);
    let mut canvas = Canvas::new(160, 48);

    c.bench_function("metaballs_160x48_5_blobs", |b| {
        b.iter(|| {
            engine.update();
            engine.render_into(black_box(&mut canvas));
        })
    });
}

fn bench_grid_render(c: &mut Criterion) {
    let mut grid = WaveGrid::new(160, 48);
    let mut canvas = Canvas::new(160, 48);

    c.bench_function("wave_grid_160x48", |b| {
        b.iter(|| {
            grid.update();
            grid.render_into(black_box(&mut canvas));
        })
    });
}

fn bench_composite(c: &mut Criterion) {
    let grid = WaveGrid::new(160, 48);
    let engine = lava(160, 48);
    let mut comp = Compositor::new(160, 48);
    comp.add_layer(&grid);
    comp.add_layer(&engine);
    let mut out = Canvas::new(160, 48);

    c.bench_function("composite_grid_and_metaballs", |b| {
        b.iter(|| {
            comp.composite_into(black_box(&mut out));
        })
    });
}

fn bench_landing_frame(c: &mut Criterion) {
    let mut page = LandingPage::new(160, 48);
    let mut prev = page.render();
    let mut next = Canvas::new(160, 48);
    let mut styler = CrosstermStyler::new();
    let mut bytes = Vec::with_capacity(64 * 1024);

    c.bench_function("landing_tick_render_diff", |b| {
        b.iter(|| {
            page.tick();
            page.render_into(&mut next);
            bytes.clear();
            encode_diff_into(&prev, &next, &mut styler, &mut bytes).unwrap();
            std::mem::swap(&mut prev, &mut next);
        })
    });
}

criterion_group!(
    benches,
    bench_metaball_render,
    bench_grid_render,
    bench_composite,
    bench_landing_frame
);
criterion_main!(benches);
