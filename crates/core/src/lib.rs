pub mod config;
pub mod error;
pub mod response;
pub mod taxonomy;

pub use config::{AnalysisOptions, ClusteringMethod, EngineConfig};
pub use error::*;
pub use response::*;
pub use taxonomy::*;
