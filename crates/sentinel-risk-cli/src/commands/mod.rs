pub mod assess;
pub mod reference;
