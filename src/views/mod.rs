pub mod controller;
pub mod types;

pub use controller::ViewController;
pub use types::ActiveView;
