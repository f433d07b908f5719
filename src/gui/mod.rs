use catppuccin_egui::Theme;
use egui::{Align, Layout, Margin, Ui};
use log::debug;

use crate::config::DeckConfig;
use crate::models::view::{SlideId, ViewMode};

pub mod keyboard;
pub mod slides;
pub mod state;
pub mod transition;
pub mod widgets;

use keyboard::NavAction;
use state::DeckState;
use transition::SlideTransition;

/// Root view. Owns the deck state and decides what gets drawn each frame.
pub struct DeckApp {
    title: String,
    theme: Theme,
    state: DeckState,
    transition: SlideTransition,
    mounted: Vec<SlideId>,
}

impl DeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &DeckConfig) -> Self {
        let app = Self::from_config(config);
        catppuccin_egui::set_theme(&cc.egui_ctx, app.theme);
        app
    }

    pub fn from_config(config: &DeckConfig) -> Self {
        let state = DeckState::new(config.initial_mode, config.start_slide);
        let transition = SlideTransition::new(state.current_slide(), &config.transition);
        Self {
            title: config.title.clone(),
            theme: config.theme.theme(),
            state,
            transition,
            mounted: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DeckState {
        &self.state
    }

    /// Blocks drawn during the last frame.
    #[cfg(test)]
    pub fn mounted(&self) -> &[SlideId] {
        &self.mounted
    }

    fn record_mounted(&mut self, drawn: &[SlideId]) {
        if self.mounted.as_slice() != drawn {
            debug!("Mounted blocks: {:?}", drawn);
            self.mounted.clear();
            self.mounted.extend_from_slice(drawn);
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.state.set_mode(mode);
        if mode == ViewMode::Slides {
            self.transition.snap(self.state.current_slide());
        }
    }

    /// Button route for next/prev. Arrow keys end up in the same state changes.
    pub(crate) fn navigate(&mut self, action: NavAction, now: f64) {
        let moved = match action {
            NavAction::Next => self.state.next(),
            NavAction::Prev => self.state.prev(),
        };
        if moved {
            self.transition.retarget(self.state.current_slide(), now);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (now, pressed) = ctx.input(|i| {
            let pressed: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if modifiers.is_none() => Some(*key),
                    _ => None,
                })
                .collect();
            (i.time, pressed)
        });

        for key in pressed {
            if self.state.handle_key(key) {
                self.transition.retarget(self.state.current_slide(), now);
            }
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_keys(ctx);

        let theme = self.theme;
        let mode = self.state.mode();
        widgets::glow_background(ctx, &theme);

        let mut requested_mode = None;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            egui::Frame::default()
                .outer_margin(egui::vec2(0.0, 4.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(&self.title);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if widgets::toggle_button(ui, mode == ViewMode::Slides, "Slides").clicked() {
                                requested_mode = Some(ViewMode::Slides);
                            }
                            if widgets::toggle_button(ui, mode == ViewMode::Scroll, "Scroll").clicked() {
                                requested_mode = Some(ViewMode::Scroll);
                            }
                        });
                    });
                });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Mode: {}", mode));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if mode == ViewMode::Slides {
                        let slide = self.state.current_slide();
                        ui.label(format!(
                            "{} · {}/{}",
                            slide.title(),
                            slide.position() + 1,
                            self.state.total_slide_count()
                        ));
                    }
                });
            });
        });

        let now = ctx.input(|i| i.time);
        let mut action = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(Margin::symmetric(24.0, 12.0)))
            .show(ctx, |ui| match mode {
                ViewMode::Scroll => self.show_scroll(ui),
                ViewMode::Slides => action = self.show_slides(ui, now),
            });

        if let Some(action) = action {
            self.navigate(action, now);
        }
        if let Some(mode) = requested_mode {
            self.set_mode(mode);
        }
    }

    fn show_scroll(&mut self, ui: &mut Ui) {
        let theme = self.theme;
        let drawn = self.state.mounted_slides();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for &slide in drawn {
                    slides::show(ui, &theme, slide);
                }
                slides::closing(ui, &theme);
            });
        self.record_mounted(drawn);
    }

    fn show_slides(&mut self, ui: &mut Ui, now: f64) -> Option<NavAction> {
        let theme = self.theme;
        let frame = self.transition.frame(now);
        if self.transition.is_animating() {
            ui.ctx().request_repaint();
        }

        let mut action = None;
        let index = self.state.current_slide_index();
        let total = self.state.total_slide_count();
        ui.horizontal(|ui| {
            widgets::progress_dots(ui, &theme, index, total);
        });

        // Laid out first so the slide's scroll area fills what is left above it.
        egui::TopBottomPanel::bottom("slide_nav")
            .frame(egui::Frame::none().inner_margin(Margin::symmetric(0.0, 8.0)))
            .show_separator_line(false)
            .show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    if widgets::nav_button(ui, self.state.can_go_prev(), "← Prev").clicked() {
                        action = Some(NavAction::Prev);
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if widgets::nav_button(ui, self.state.can_go_next(), "Next →").clicked() {
                            action = Some(NavAction::Next);
                        }
                    });
                });
            });

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_opacity(frame.opacity);
                ui.add_space(frame.offset);
                slides::show(ui, &theme, frame.slide);
            });
        self.record_mounted(std::slice::from_ref(&frame.slide));
        action
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransitionConfig;
    use crate::models::view::SLIDE_CATALOG;

    fn instant_config(initial_mode: ViewMode, start_slide: usize) -> DeckConfig {
        DeckConfig {
            initial_mode,
            start_slide,
            transition: TransitionConfig {
                exit_ms: 0,
                enter_ms: 0,
                shift_px: 0.0,
            },
            ..DeckConfig::default()
        }
    }

    fn key_press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn run_frame(ctx: &egui::Context, app: &mut DeckApp, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    #[test]
    fn scroll_mode_draws_every_block() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Scroll, 0));

        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.mounted(), &SLIDE_CATALOG[..]);
    }

    #[test]
    fn slide_mode_draws_only_the_current_block() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Scroll, 2));

        app.set_mode(ViewMode::Slides);
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.mounted(), &[SlideId::Approach]);
    }

    #[test]
    fn arrow_keys_walk_the_deck() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Scroll, 0));
        app.set_mode(ViewMode::Slides);
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.mounted(), &[SlideId::Hero]);

        let right = egui::Key::ArrowRight;
        run_frame(&ctx, &mut app, vec![key_press(right), key_press(right), key_press(right)]);
        assert_eq!(app.state().current_slide_index(), 3);
        assert_eq!(app.mounted(), &[SlideId::Wireflow]);

        run_frame(&ctx, &mut app, vec![key_press(right), key_press(right)]);
        assert_eq!(app.state().current_slide_index(), 4);
        assert_eq!(app.mounted(), &[SlideId::Difference]);

        run_frame(&ctx, &mut app, vec![key_press(egui::Key::ArrowLeft)]);
        assert_eq!(app.mounted(), &[SlideId::Wireflow]);
    }

    #[test]
    fn arrow_keys_do_nothing_in_scroll_mode() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Scroll, 1));

        run_frame(
            &ctx,
            &mut app,
            vec![key_press(egui::Key::ArrowRight), key_press(egui::Key::ArrowLeft)],
        );
        assert_eq!(app.state().current_slide_index(), 1);
        assert_eq!(app.mounted().len(), SLIDE_CATALOG.len());
    }

    #[test]
    fn modified_arrows_are_ignored() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Slides, 0));

        let event = egui::Event::Key {
            key: egui::Key::ArrowRight,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::CTRL,
        };
        run_frame(&ctx, &mut app, vec![event]);
        assert_eq!(app.state().current_slide_index(), 0);
    }

    #[test]
    fn nav_buttons_match_arrow_keys() {
        let ctx = egui::Context::default();
        let mut by_key = DeckApp::from_config(&instant_config(ViewMode::Slides, 0));
        let mut by_button = DeckApp::from_config(&instant_config(ViewMode::Slides, 0));

        run_frame(&ctx, &mut by_key, vec![key_press(egui::Key::ArrowRight)]);
        by_button.navigate(NavAction::Next, 0.0);
        run_frame(&ctx, &mut by_button, Vec::new());
        assert_eq!(by_button.state().current_slide_index(), by_key.state().current_slide_index());
        assert_eq!(by_button.mounted(), by_key.mounted());
        assert_eq!(by_button.mounted(), &[SlideId::Problem]);

        run_frame(&ctx, &mut by_key, vec![key_press(egui::Key::ArrowLeft)]);
        by_button.navigate(NavAction::Prev, 0.0);
        run_frame(&ctx, &mut by_button, Vec::new());
        assert_eq!(by_button.state().current_slide_index(), 0);
        assert_eq!(by_button.mounted(), by_key.mounted());
    }

    #[test]
    fn nav_buttons_disable_at_the_ends() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Slides, 0));
        run_frame(&ctx, &mut app, Vec::new());
        assert!(!app.state().can_go_prev());
        assert!(app.state().can_go_next());

        for _ in 0..10 {
            app.navigate(NavAction::Next, 0.0);
        }
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.state().current_slide_index(), 4);
        assert!(app.state().can_go_prev());
        assert!(!app.state().can_go_next());
        assert_eq!(app.mounted(), &[SlideId::Difference]);
    }

    #[test]
    fn nav_buttons_do_nothing_in_scroll_mode() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Scroll, 2));

        app.navigate(NavAction::Next, 0.0);
        app.navigate(NavAction::Prev, 0.0);
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.state().current_slide_index(), 2);
        assert_eq!(app.mounted(), &SLIDE_CATALOG[..]);
    }

    #[test]
    fn returning_to_scroll_keeps_the_slide_index() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::from_config(&instant_config(ViewMode::Slides, 0));
        run_frame(&ctx, &mut app, vec![key_press(egui::Key::ArrowRight)]);

        app.set_mode(ViewMode::Scroll);
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.state().current_slide_index(), 1);
        assert_eq!(app.mounted(), &SLIDE_CATALOG[..]);
        assert!(app.state().key_bindings().is_empty());
    }
}
