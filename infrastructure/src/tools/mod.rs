//! Tool implementations
//!
//! - [`weather`]: `get_weather`, current conditions for a city
//! - [`food`]: `get_food_info`, local cuisine from the knowledge base
//!
//! Both tools translate Japanese city names with [`CityLocalizer`] before
//! calling their provider. [`ToolRegistry`] validates calls and dispatches
//! them; [`JsonSchemaToolConverter`] renders definitions for the API.

pub mod food;
pub mod localize;
pub mod weather;

mod registry;
mod schema;

#[cfg(test)]
pub(crate) mod test_support;

pub use food::FoodTool;
pub use localize::CityLocalizer;
pub use registry::ToolRegistry;
pub use schema::JsonSchemaToolConverter;
pub use weather::WeatherTool;
