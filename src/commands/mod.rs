pub mod documents;
pub mod history;
pub mod query;
