pub mod leaderboard;
pub mod quiz_finished;
pub mod quiz_review;
pub mod quiz_round;
pub mod quiz_start;
pub mod step_table;
pub mod tabs;
