pub mod app;
pub mod balance_display;
pub mod mining_simulator;
pub mod progress_bar;
