pub mod classifier;
pub mod config;
pub mod display;
pub mod lookup;
pub mod model;
pub mod render;
pub mod selector;
pub mod source;

pub use classifier::classify;
pub use lookup::{resolve, Recommender};
pub use model::{Category, Dataset, DisplayItem, FetchError, LookupError};
pub use selector::select;
