pub mod labels;
pub mod settings;

pub use labels::Labels;
pub use settings::Settings;
