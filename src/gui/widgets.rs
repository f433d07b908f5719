//! Layout and styling helpers shared by the slides.

use catppuccin_egui::Theme;
use egui::{Align2, Color32, FontId, Frame, Margin, Pos2, Response, RichText, Sense, Stroke, Ui, Vec2};

const CARD_WIDTH: f32 = 680.0;

/// Translucent panel used behind cards, nodes and flow steps.
fn glass(theme: &Theme) -> Frame {
    Frame::none()
        .fill(theme.surface0.gamma_multiply(0.35))
        .stroke(Stroke::new(1.0, theme.overlay0.gamma_multiply(0.5)))
}

/// Column of at most `max_width`, centered in the available space.
pub fn centered_column<R>(ui: &mut Ui, max_width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let available = ui.available_width();
    let width = available.min(max_width);
    ui.horizontal(|ui| {
        ui.add_space((available - width) / 2.0);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

pub fn section<R>(ui: &mut Ui, theme: &Theme, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(30.0).strong().color(theme.text));
    });
    ui.add_space(28.0);
    let inner = add_contents(ui);
    ui.add_space(48.0);
    inner
}

pub fn card<R>(ui: &mut Ui, theme: &Theme, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    centered_column(ui, CARD_WIDTH, |ui| {
        glass(theme)
            .rounding(16.0)
            .inner_margin(Margin::same(28.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui)
            })
            .inner
    })
}

/// Lays `items` out in rows of `columns` equal-width cells.
pub fn grid<T>(ui: &mut Ui, columns: usize, items: &[T], mut show_item: impl FnMut(&mut Ui, &T)) {
    let columns = columns.max(1);
    for row in items.chunks(columns) {
        ui.columns(columns, |cells| {
            for (cell, item) in cells.iter_mut().zip(row) {
                show_item(cell, item);
            }
        });
        ui.add_space(16.0);
    }
}

pub fn node(ui: &mut Ui, theme: &Theme, title: &str, body: &str) {
    glass(theme)
        .rounding(12.0)
        .inner_margin(Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(18.0).strong().color(theme.text));
            ui.add_space(6.0);
            ui.label(RichText::new(body).size(14.0).color(theme.subtext1));
        });
}

/// Numbered circle for flow steps.
pub fn step_badge(ui: &mut Ui, theme: &Theme, number: usize) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(32.0), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 16.0, theme.text);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        number.to_string(),
        FontId::proportional(16.0),
        theme.base,
    );
}

pub fn flow_step(ui: &mut Ui, theme: &Theme, number: usize, text: &str) {
    ui.horizontal(|ui| {
        step_badge(ui, theme, number);
        ui.add_space(8.0);
        glass(theme)
            .rounding(12.0)
            .inner_margin(Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(text).size(16.0).color(theme.text));
            });
    });
}

pub fn toggle_button(ui: &mut Ui, selected: bool, label: &str) -> Response {
    ui.selectable_label(selected, RichText::new(label).size(15.0))
}

pub fn nav_button(ui: &mut Ui, enabled: bool, label: &str) -> Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(label).size(16.0))
            .min_size(Vec2::new(110.0, 36.0))
            .rounding(10.0),
    )
}

/// One pill per slide, the active one stretched, followed by an "n / total" counter.
pub fn progress_dots(ui: &mut Ui, theme: &Theme, index: usize, total: usize) {
    for i in 0..total {
        let width = if i == index { 24.0 } else { 10.0 };
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 10.0), Sense::hover());
        let color = if i == index {
            theme.text
        } else if i < index {
            theme.overlay2
        } else {
            theme.surface2
        };
        ui.painter().rect_filled(rect, 5.0, color);
    }
    ui.add_space(8.0);
    ui.label(RichText::new(format!("{} / {}", index + 1, total)).color(theme.subtext0));
}

/// Soft colour blobs painted under every panel. Purely decorative.
pub fn glow_background(ctx: &egui::Context, theme: &Theme) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.rect_filled(screen, 0.0, theme.crust);

    let radius = screen.width().max(screen.height()) * 0.3;
    let blobs = [
        (screen.left_top(), theme.mauve, 0.30),
        (
            Pos2::new(screen.right(), screen.top() + screen.height() / 3.0),
            theme.sapphire,
            0.30,
        ),
        (
            Pos2::new(screen.left() + screen.width() / 3.0, screen.bottom()),
            theme.pink,
            0.20,
        ),
    ];
    for (center, color, strength) in blobs {
        soft_circle(&painter, center, radius, color, strength);
    }
}

fn soft_circle(painter: &egui::Painter, center: Pos2, radius: f32, color: Color32, strength: f32) {
    const RINGS: usize = 16;
    let step = strength / RINGS as f32;
    for ring in 0..RINGS {
        let r = radius * (1.0 - ring as f32 / RINGS as f32);
        painter.circle_filled(center, r, color.gamma_multiply(step));
    }
}
