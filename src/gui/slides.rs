use catppuccin_egui::Theme;
use egui::text::{LayoutJob, TextFormat};
use egui::{FontId, RichText, Ui, Vec2};

use crate::gui::widgets;
use crate::models::content::{
    APPROACH, CLOSING_HEADLINE, CLOSING_LINES, DIFFERENTIATORS, JUDGE_MODE_LABEL, PROBLEM_POINTS,
    PROBLEM_SUMMARY, TAGLINE_EMPHASIS, TAGLINE_LEAD, WIREFLOW_STEPS,
};
use crate::models::view::SlideId;

pub fn show(ui: &mut Ui, theme: &Theme, slide: SlideId) {
    match slide {
        SlideId::Hero => hero(ui, theme),
        SlideId::Problem => problem(ui, theme),
        SlideId::Approach => approach(ui, theme),
        SlideId::Wireflow => wireflow(ui, theme),
        SlideId::Difference => difference(ui, theme),
    }
}

fn hero(ui: &mut Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(140.0);
        ui.label(
            RichText::new(SlideId::Hero.title())
                .size(72.0)
                .strong()
                .color(theme.text),
        );
        ui.add_space(20.0);

        let mut tagline = LayoutJob::default();
        tagline.append(
            TAGLINE_LEAD,
            0.0,
            TextFormat {
                font_id: FontId::proportional(22.0),
                color: theme.subtext1,
                ..Default::default()
            },
        );
        tagline.append(
            TAGLINE_EMPHASIS,
            6.0,
            TextFormat {
                font_id: FontId::proportional(22.0),
                color: theme.text,
                ..Default::default()
            },
        );
        ui.label(tagline);

        ui.add_space(36.0);
        ui.add_enabled(
            false,
            egui::Button::new(RichText::new(JUDGE_MODE_LABEL).size(16.0))
                .min_size(Vec2::new(180.0, 44.0))
                .rounding(12.0),
        )
        .on_disabled_hover_text("Not available in this round");
        ui.add_space(140.0);
    });
}

fn problem(ui: &mut Ui, theme: &Theme) {
    widgets::section(ui, theme, SlideId::Problem.title(), |ui| {
        widgets::card(ui, theme, |ui| {
            for line in PROBLEM_SUMMARY {
                ui.label(RichText::new(line).size(18.0).color(theme.subtext1));
            }
            ui.add_space(20.0);
            for point in PROBLEM_POINTS {
                ui.label(RichText::new(format!("•  {point}")).size(16.0).color(theme.subtext0));
                ui.add_space(4.0);
            }
        });
    });
}

fn approach(ui: &mut Ui, theme: &Theme) {
    widgets::section(ui, theme, SlideId::Approach.title(), |ui| {
        widgets::centered_column(ui, 960.0, |ui| {
            widgets::grid(ui, 2, &APPROACH, |ui, principle| {
                widgets::node(ui, theme, principle.title, principle.body);
            });
        });
    });
}

fn wireflow(ui: &mut Ui, theme: &Theme) {
    widgets::section(ui, theme, SlideId::Wireflow.title(), |ui| {
        widgets::centered_column(ui, 760.0, |ui| {
            for (index, step) in WIREFLOW_STEPS.iter().enumerate() {
                widgets::flow_step(ui, theme, index + 1, step);
                ui.add_space(12.0);
            }
        });
    });
}

fn difference(ui: &mut Ui, theme: &Theme) {
    widgets::section(ui, theme, SlideId::Difference.title(), |ui| {
        widgets::card(ui, theme, |ui| {
            for item in DIFFERENTIATORS {
                ui.label(RichText::new(format!("✔ {item}")).size(17.0).color(theme.text));
                ui.add_space(6.0);
            }
        });
    });
}

/// Sign-off shown at the bottom of the scroll view.
pub fn closing(ui: &mut Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(96.0);
        ui.label(RichText::new(CLOSING_HEADLINE).size(40.0).strong().color(theme.text));
        ui.add_space(16.0);
        for line in CLOSING_LINES {
            ui.label(RichText::new(line).size(18.0).color(theme.subtext0));
        }
        ui.add_space(96.0);
    });
}
