pub mod fish;
pub mod record;

pub use fish::*;
pub use record::*;
