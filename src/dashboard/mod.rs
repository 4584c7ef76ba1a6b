pub mod data;
pub mod layouts;
pub mod page;
pub mod provider;
pub mod render;
pub mod sample;
pub mod view;

pub use data::DashboardData;
pub use page::Page;
pub use provider::DataProvider;
pub use render::render;
pub use view::{SwitchOption, ViewController, ViewMode};
