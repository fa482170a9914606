pub mod product;

pub use product::Model as ProductModel;
