mod service;

pub use service::ThemeStore;
