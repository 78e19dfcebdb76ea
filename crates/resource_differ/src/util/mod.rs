pub mod errors;
pub mod quantity;
pub mod semantic;
