// Models module
// Plain data records and closed enumerations shared by services and UI

pub mod calendar_event;
pub mod metric;
pub mod settings;
pub mod task;
pub mod theme;
pub mod user;
pub mod view;
