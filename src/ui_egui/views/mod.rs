pub mod month_view;
mod palette;
