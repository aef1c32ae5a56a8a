pub mod history;
pub mod json;
