pub mod api;
pub mod ui;
pub mod view_state;
