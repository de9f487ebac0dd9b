mod labels;
pub use labels::Labels;

mod selector;
pub use selector::{Selector, Selectors, ServiceSelectors};

pub mod constants;
