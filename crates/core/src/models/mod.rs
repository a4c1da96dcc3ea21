pub mod basket;
pub mod flavor;
pub mod product;
pub mod settings;
pub mod view;
