pub mod element;
pub(crate) mod reduce;

pub use element::Element;
