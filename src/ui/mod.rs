mod fonts;
mod helpers;
pub mod layout;
pub mod views;

pub use fonts::install_cjk_fonts;

use crate::app::QuizApp;
use crate::model::{Page, QuizTab};
use crate::view_models::QuizScreen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, page_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Las vistas sólo leen el estado; los cambios llegan como eventos
        let mut events = Vec::new();

        top_panel(self, ctx, &mut events);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.page {
            Page::StepTable => page_panel(ctx, 1100.0, |ui| {
                views::step_table::ui_step_table(self, ui);
            }),
            Page::Quiz => page_panel(ctx, 900.0, |ui| {
                views::tabs::ui_quiz_tabs(self, ui, &mut events);
                ui.separator();
                match self.tab {
                    QuizTab::Quiz => match self.quiz_screen() {
                        QuizScreen::Start => views::quiz_start::ui_quiz_start(self, ui, &mut events),
                        QuizScreen::Round => views::quiz_round::ui_quiz_round(self, ui, &mut events),
                        QuizScreen::Review => {
                            views::quiz_review::ui_quiz_review(self, ui, &mut events)
                        }
                        QuizScreen::Finished => {
                            views::quiz_finished::ui_quiz_finished(self, ui, &mut events)
                        }
                    },
                    QuizTab::Results => views::leaderboard::ui_leaderboard(self, ui, &mut events),
                }
            }),
        }

        self.handle_all(events);

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
