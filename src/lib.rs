pub mod clock;
pub mod dashboard;
pub mod gui;
pub mod logging;
pub mod settings;
