//! Stylized device frame and the five schematic app screens
//!
//! Drawing order: bezel, screen, status bar, the content for the selected
//! [`MockupKind`], then the tab bar on top. Content rows that would cross
//! [`FrameLayout::content_limit`] are dropped, so small targets show fewer
//! cards instead of overflowing the bezel.

use image::Rgb;

use crate::catalog::{Color, MockupKind};
use crate::rendering::canvas::Canvas;
use crate::rendering::layout::{frac, FrameLayout};

const BEZEL: Color = Rgb([20, 20, 25]);
const SCREEN: Color = Rgb([28, 28, 35]);
const STATUS_BAR: Color = Rgb([35, 35, 45]);
const TAB_BAR: Color = Rgb([30, 30, 40]);
const TAB_DIVIDER: Color = Rgb([50, 50, 65]);
const CARD: Color = Rgb([45, 45, 58]);
const CARD_RAISED: Color = Rgb([55, 55, 70]);
const TEXT_LINE: Color = Rgb([80, 80, 100]);
const TEXT_LINE_LIGHT: Color = Rgb([90, 90, 110]);
const BULLET: Color = Rgb([120, 120, 150]);
const WHITE: Color = Rgb([255, 255, 255]);
const BLUE: Color = Rgb([59, 130, 246]);
const PURPLE: Color = Rgb([168, 85, 247]);
const PINK: Color = Rgb([236, 72, 153]);
const ORANGE: Color = Rgb([234, 138, 30]);
const GREEN: Color = Rgb([34, 197, 94]);
const RED: Color = Rgb([239, 68, 68]);
const TEAL: Color = Rgb([20, 184, 166]);
const INDIGO: Color = Rgb([99, 102, 241]);
const AMBER: Color = Rgb([245, 158, 11]);

const THUMBNAILS: [Color; 4] = [BLUE, PURPLE, PINK, GREEN];
const CHIPS: [Color; 9] = [BLUE, PURPLE, PINK, ORANGE, GREEN, RED, TEAL, INDIGO, AMBER];

pub fn draw_mockup(canvas: &mut Canvas, l: &FrameLayout, kind: MockupKind) {
    draw_frame(canvas, l);
    match kind {
        MockupKind::Feed => draw_feed(canvas, l),
        MockupKind::Topics => draw_topics(canvas, l),
        MockupKind::Bookmarks => draw_bookmarks(canvas, l),
        MockupKind::Notifications => draw_notifications(canvas, l),
        MockupKind::Summary => draw_summary(canvas, l),
    }
    draw_tab_bar(canvas, l);
}

fn draw_frame(canvas: &mut Canvas, l: &FrameLayout) {
    let (f, s, sr) = (l.frame, l.screen, l.screen_radius);
    canvas.rounded_rect(f.x, f.y, f.right(), f.bottom(), l.frame_radius, BEZEL);
    canvas.rounded_rect(s.x, s.y, s.right(), s.bottom(), sr, SCREEN);
    // Extends by the corner radius so only the top corners read as rounded
    canvas.rounded_rect(s.x, s.y, s.right(), s.y + l.status_bar_height + sr, sr, STATUS_BAR);
}

fn draw_tab_bar(canvas: &mut Canvas, l: &FrameLayout) {
    let (s, sr) = (l.screen, l.screen_radius);
    let tab_h = l.sh(0.07);
    let tab_y = s.bottom() - tab_h;
    canvas.rounded_rect(s.x, tab_y - sr, s.right(), s.bottom(), sr, TAB_BAR);
    canvas.rect(s.x, tab_y, s.right(), tab_y + 1, TAB_DIVIDER);
    let dy = tab_y + tab_h / 2;
    let dr = frac(tab_h, 0.12);
    for i in 0..3 {
        let dx = s.x + l.sw(0.2 + i as f64 * 0.3);
        let color = if i == 0 { BLUE } else { TEXT_LINE };
        circle(canvas, dx, dy, dr, color);
    }
}

/// Article cards with a colored thumbnail and three text lines.
fn draw_feed(canvas: &mut Canvas, l: &FrameLayout) {
    let (cx, cw) = (l.content_x, l.content_width);
    let card_h = l.sh(0.17);
    for (i, &thumb) in THUMBNAILS.iter().enumerate() {
        let card_y = l.content_top + l.sh(0.06) + i as i32 * l.sh(0.2);
        if card_y + card_h > l.content_limit() {
            break;
        }
        canvas.rounded_rect(cx, card_y, cx + cw, card_y + card_h, l.sw(0.03), CARD);

        let ts = frac(card_h, 0.7);
        let tx = cx + l.cw(0.03);
        let ty = card_y + (card_h - ts) / 2;
        canvas.rounded_rect(tx, ty, tx + ts, ty + ts, l.sw(0.02), thumb);

        let lx = tx + ts + l.cw(0.04);
        let lh = frac(card_h, 0.08);
        let full = cw - ts - l.cw(0.14);
        for j in 0..3 {
            let ly = card_y + frac(card_h, 0.2) + j * frac(lh, 2.2);
            let lw = if j == 2 { frac(full, 0.6) } else { full };
            canvas.rounded_rect(lx, ly, lx + lw, ly + lh, lh / 2, TEXT_LINE);
        }
    }
}

/// Wrapping cloud of topic chips; the first three carry a "selected" dot.
fn draw_topics(canvas: &mut Canvas, l: &FrameLayout) {
    let (cx, cw) = (l.content_x, l.content_width);
    let ch_h = l.sh(0.055);
    let mut ch_x = cx;
    let mut ch_y = l.content_top + l.sh(0.08);
    for (i, &color) in CHIPS.iter().enumerate() {
        let ch_w = l.cw(0.28 + (i % 3) as f64 * 0.05);
        if ch_x + ch_w > cx + cw {
            ch_x = cx;
            ch_y += frac(ch_h, 1.6);
        }
        if ch_y + ch_h > l.content_limit() {
            break;
        }
        canvas.rounded_rect(ch_x, ch_y, ch_x + ch_w, ch_y + ch_h, ch_h / 2, color);
        if i < 3 {
            let mr = frac(ch_h, 0.2);
            circle(canvas, ch_x + ch_w - frac(ch_h, 0.5), ch_y + ch_h / 2, mr, WHITE);
        }
        ch_x += ch_w + l.cw(0.03);
    }
}

/// Saved-article cards with a bookmark ribbon in the top-right corner.
fn draw_bookmarks(canvas: &mut Canvas, l: &FrameLayout) {
    let (cx, cw) = (l.content_x, l.content_width);
    let card_h = l.sh(0.18);
    for i in 0..3 {
        let card_y = l.content_top + l.sh(0.06) + i * l.sh(0.22);
        if card_y + card_h > l.content_limit() {
            break;
        }
        canvas.rounded_rect(cx, card_y, cx + cw, card_y + card_h, l.sw(0.03), CARD);

        let bx = cx + cw - l.cw(0.1);
        let by = card_y + frac(card_h, 0.15);
        let bs = frac(card_h, 0.2);
        canvas.rounded_rect(bx, by, bx + bs, by + frac(bs, 1.3), 3, BLUE);

        let lx = cx + l.cw(0.05);
        let lh = frac(card_h, 0.08);
        for j in 0..3 {
            let ly = card_y + frac(card_h, 0.2) + j * frac(card_h, 0.2);
            let lw = l.cw(if j < 2 { 0.7 } else { 0.4 });
            canvas.rounded_rect(lx, ly, lx + lw, ly + lh, lh / 2, TEXT_LINE);
        }
    }
}

/// A single push notification card above an enabled toggle.
fn draw_notifications(canvas: &mut Canvas, l: &FrameLayout) {
    let (cx, cw) = (l.content_x, l.content_width);
    let card_y = l.content_top + l.sh(0.15);
    let card_h = l.sh(0.2);
    canvas.rounded_rect(cx, card_y, cx + cw, card_y + card_h, l.sw(0.04), CARD_RAISED);

    let br = frac(card_h, 0.2);
    let bcx = cx + l.cw(0.12);
    let bcy = card_y + card_h / 2;
    circle(canvas, bcx, bcy, br, ORANGE);

    let lx = bcx + br + l.cw(0.05);
    let lh = frac(card_h, 0.1);
    for j in 0..2 {
        let ly = card_y + frac(card_h, 0.3) + j * frac(card_h, 0.22);
        let lw = l.cw(if j == 0 { 0.55 } else { 0.35 });
        canvas.rounded_rect(lx, ly, lx + lw, ly + lh, lh / 2, TEXT_LINE_LIGHT);
    }

    let (tw, th) = (l.cw(0.35), l.sh(0.06));
    let tx = (l.canvas_width - tw).div_euclid(2);
    let ty = card_y + card_h + l.sh(0.06);
    canvas.rounded_rect(tx, ty, tx + tw, ty + th, th / 2, GREEN);
    let knob = frac(th, 0.4);
    circle(canvas, tx + tw - frac(th, 0.55), ty + th / 2, knob, WHITE);
}

/// Article summary card: colored header band and alternating bullet lines.
fn draw_summary(canvas: &mut Canvas, l: &FrameLayout) {
    let (cx, cw) = (l.content_x, l.content_width);
    let card_y = l.content_top + l.sh(0.06);
    let card_h = l.sh(0.45);
    let radius = l.sw(0.03);
    canvas.rounded_rect(cx, card_y, cx + cw, card_y + card_h, radius, CARD);

    let hh = frac(card_h, 0.12);
    canvas.rounded_rect(cx, card_y, cx + cw, card_y + hh + radius, radius, BLUE);

    let dr = frac(card_h, 0.015);
    let dcx = cx + l.cw(0.08);
    let lh = frac(card_h, 0.04);
    let limit = card_y + card_h - frac(card_h, 0.05);
    for j in 0..5 {
        let dy = card_y + hh + frac(card_h, 0.08) + j * frac(card_h, 0.14);
        if dy + dr * 2 > limit {
            break;
        }
        circle(canvas, dcx, dy, dr, BULLET);
        let lw = l.cw(if j % 2 == 0 { 0.7 } else { 0.55 });
        let lx = dcx + dr * 3;
        canvas.rounded_rect(lx, dy - lh / 2, lx + lw, dy + lh / 2, lh / 2, TEXT_LINE);
    }
}

fn circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, color: Color) {
    canvas.ellipse(cx - r, cy - r, cx + r, cy + r, color);
}
