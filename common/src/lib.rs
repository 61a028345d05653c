//! Jeju Guide Common Library
//!
//! CLIとWeb(WASM)で共有される推薦パイプラインの型とロジック

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod store;
pub mod lookup;
pub mod weather;
pub mod selection;
pub mod card;
pub mod directions;

pub use types::{Category, PlaceDetails, Recommendation};
pub use error::{Error, Result};
pub use prompts::{build_recommendation_prompt, CompletionRequest};
pub use parser::{extract_completion_text, parse_completion_body, parse_place_details};
pub use store::RecommendationStore;
pub use lookup::{ImageLookupTable, FALLBACK_IMAGE};
pub use weather::{parse_weather_body, WeatherIcon, WeatherReport};
pub use selection::{settle, FetchOutcome, Notice, SelectionState};
pub use directions::{directions_url, Coordinates};
