pub mod etl;
pub mod feed;
pub mod pipeline;

pub use crate::domain::model::{FeedData, MapLayers};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
