#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod plan;
mod prescription;
mod render;
mod request;
mod selection;
mod service;
mod split;

pub use error::*;
pub use exercise::*;
pub use plan::*;
pub use prescription::*;
pub use request::*;
pub use selection::*;
pub use service::*;
pub use split::*;
