pub mod index;
pub mod not_found;
pub(crate) mod product;
pub mod reset;
