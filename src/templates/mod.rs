pub mod layout;
pub mod pages;

pub use layout::*;
pub use pages::*;
