// Service module exports

pub mod calendar;
pub mod clock;
pub mod events;
pub mod grid;
pub mod navigation;
pub mod settings;
