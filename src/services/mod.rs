// Service module exports
// State machines for the shell and each stateful panel, plus seed data and config

pub mod calendar;
pub mod config;
pub mod kanban;
pub mod seed;
pub mod settings;
pub mod shell;
pub mod table;
pub mod theme;
