use egui::Context;

/// Ruta explícita a una fuente con glifos japoneses
pub const FONT_ENV: &str = "TEAM_STEPS_CJK_FONT";

// Las fuentes por defecto de egui no traen kanji
const SYSTEM_FONTS: &[&str] = &[
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
];

fn font_candidates(env_path: Option<String>) -> Vec<String> {
    env_path
        .filter(|p| !p.trim().is_empty())
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(|p| p.to_string()))
        .collect()
}

pub fn install_cjk_fonts(ctx: &Context) {
    match load_first_font(&font_candidates(std::env::var(FONT_ENV).ok())) {
        Some((path, bytes)) => {
            log::info!("Fuente japonesa cargada: {path}");
            apply_font(ctx, bytes);
        }
        None => {
            log::warn!("No se encontró ninguna fuente japonesa; define {FONT_ENV} con la ruta de una")
        }
    }
}

/// Primera ruta legible de la lista, con su contenido
fn load_first_font(candidates: &[String]) -> Option<(String, Vec<u8>)> {
    candidates.iter().find_map(|path| match std::fs::read(path) {
        Ok(bytes) => Some((path.clone(), bytes)),
        Err(e) => {
            log::debug!("{path}: {e}");
            None
        }
    })
}

fn apply_font(ctx: &Context, bytes: Vec<u8>) {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "cjk".to_owned(),
        std::sync::Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
}
