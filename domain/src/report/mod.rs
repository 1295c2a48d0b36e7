//! Data returned by the external providers

pub mod article;
pub mod weather;

pub use article::Article;
pub use weather::WeatherReport;
