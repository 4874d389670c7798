//! Compositing properties over real effect layers.

use tui_lagoon::core::{Compositor, Layer, TextBlock, WaveGrid};
use tui_lagoon::types::{Canvas, CellStyle};

fn filled(w: u16, h: u16, ch: char) -> Canvas {
    let mut c = Canvas::new(w, h);
    c.fill_rect(0, 0, w, h, ch, CellStyle::DEFAULT);
    c
}

#[test]
fn two_by_two_overlay_lands_in_center() {
    let base = filled(4, 4, 'X');
    let top = filled(2, 2, 'Y');

    let mut comp = Compositor::new(4, 4);
    comp.add_layer(&base);
    comp.add_layer(&top);
    let out = comp.composite();

    assert_eq!(out.to_text(), "XXXX\nXYYX\nXYYX\nXXXX");
}

#[test]
fn transparent_layer_is_identity() {
    let mut grid = WaveGrid::new(37, 13);
    for _ in 0..7 {
        grid.update();
    }
    let clear = Canvas::new(20, 9);

    let mut before = Compositor::new(37, 13);
    before.add_layer(&grid);
    let expected = before.composite();

    let mut after = Compositor::new(37, 13);
    after.add_layer(&grid);
    after.add_layer(&clear);
    assert_eq!(after.composite(), expected);
}

#[test]
fn centering_leaves_symmetric_margins() {
    for (cw, ch, lw, lh) in [(10, 6, 4, 2), (11, 7, 4, 2), (9, 9, 9, 1), (5, 5, 1, 1)] {
        let base = filled(cw, ch, '.');
        let top = filled(lw, lh, '#');
        let mut comp = Compositor::new(cw, ch);
        comp.add_layer(&base);
        comp.add_layer(&top);
        let out = comp.composite();

        let left = (cw - lw) / 2;
        let top_rows = (ch - lh) / 2;
        for y in 0..ch {
            for x in 0..cw {
                let inside =
                    x >= left && x < left + lw && y >= top_rows && y < top_rows + lh;
                let want = if inside { '#' } else { '.' };
                assert_eq!(out.get(x, y).unwrap().ch, want, "cell ({}, {})", x, y);
            }
        }
        // Margins differ by at most one cell.
        let right = cw - lw - left;
        let bottom = ch - lh - top_rows;
        assert!(right.abs_diff(left) <= 1 && bottom.abs_diff(top_rows) <= 1);
    }
}

#[test]
fn oversized_layer_is_clipped() {
    let base = filled(4, 2, '.');
    let big = TextBlock::new(&["abcdefgh", "ijklmnop", "qrstuvwx"], CellStyle::DEFAULT);
    let mut comp = Compositor::new(4, 2);
    comp.add_layer(&base);
    comp.add_layer(&big);
    assert_eq!(comp.composite().to_text(), "abcd\nijkl");
}

#[test]
fn spaces_in_text_show_the_layer_below() {
    let base = filled(5, 1, '~');
    let text = TextBlock::new(&["a b c"], CellStyle::DEFAULT);
    let mut comp = Compositor::new(5, 1);
    comp.add_layer(&base);
    comp.add_layer(&text);
    assert_eq!(comp.composite().to_text(), "a~b~c");

    let opaque = TextBlock::opaque(&["a b c"], CellStyle::DEFAULT);
    let mut comp = Compositor::new(5, 1);
    comp.add_layer(&base);
    comp.add_layer(&opaque);
    assert_eq!(comp.composite().row(0).unwrap()[1].ch, '\u{a0}');
}
