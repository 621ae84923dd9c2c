// Module exports for models

pub mod calendar;
pub mod event_list;
pub mod settings;
