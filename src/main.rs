use team_steps_quiz::ui::install_cjk_fonts;
use team_steps_quiz::{APP_TITLE, QuizApp};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            install_cjk_fonts(&cc.egui_ctx);
            let app = QuizApp::new().inspect_err(|e| log::error!("{e}"))?;
            Ok(Box::new(app))
        }),
    )
}
