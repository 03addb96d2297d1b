pub mod headers;
pub mod json;
