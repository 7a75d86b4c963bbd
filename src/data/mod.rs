//! Data module - request parsing and table building

mod loader;
mod processor;
mod request;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, XValues, XySeries};
pub use request::{ChartRequest, RequestError};
