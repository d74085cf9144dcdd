pub mod app;
pub mod data;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod round;
pub mod settings;
pub mod stats;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;

pub const APP_TITLE: &str = "チーム歩数クイズ";
