pub mod app;
pub mod components;
pub mod login;
pub mod root;
pub mod schedule;
pub mod session;

pub use app::ChatApp;
pub use root::RootController;
