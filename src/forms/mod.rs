pub mod product;

pub use product::ProductPayload;
