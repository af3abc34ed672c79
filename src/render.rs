// Plain-text rendering of cards and lookup messages
use crate::model::{DisplayItem, LookupError};

pub const UNRECOGNIZED_MESSAGE: &str =
    "Please enter a valid travel keyword. Try: beach, temple, or country.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load recommendations.";
pub const NO_RESULTS_MESSAGE: &str = "No results found for this keyword.";

pub fn render_card(item: &DisplayItem) -> String {
    format!(
        "== {} ==\n   image: {}\n   {}\n   [ Visit ]",
        item.name, item.image_url, item.description
    )
}

pub fn message_for(err: &LookupError) -> &'static str {
    match err {
        LookupError::UnrecognizedKeyword => UNRECOGNIZED_MESSAGE,
        LookupError::DatasetFetchFailure(_) => FETCH_FAILED_MESSAGE,
        LookupError::EmptyResult(_) => NO_RESULTS_MESSAGE,
    }
}
