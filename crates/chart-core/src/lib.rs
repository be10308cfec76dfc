pub mod constants;
mod config;
mod csv_layout;
mod drag;
pub mod generators;
mod layout;
mod pool;
pub mod presets;
mod snapshot;
mod types;

pub use config::*;
pub use csv_layout::*;
pub use drag::*;
pub use generators::ChartPattern;
pub use layout::LayoutState;
pub use pool::{CharacterPool, regenerate};
pub use snapshot::LayoutSnapshot;
pub use types::*;
