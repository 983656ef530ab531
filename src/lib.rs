pub mod app;
pub mod config;
pub mod data;
pub mod history;
pub mod model;
pub mod query;
pub mod scoring;
pub mod session;
pub mod storage;
pub mod ui;
pub mod view_models;
pub mod visuals;

pub use app::QuizApp;
