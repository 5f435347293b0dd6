pub mod add;
pub mod delete;
pub mod get;
pub mod search;
pub mod update;
