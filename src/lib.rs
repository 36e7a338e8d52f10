pub mod aggregate;
pub mod cli;
pub mod error;
pub mod export;
pub mod github;
pub mod heat;
pub mod insights;
pub mod model;
pub mod stats;
pub mod tui;
pub mod util;
