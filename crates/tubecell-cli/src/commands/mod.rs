pub mod evaluate;
pub mod neighbors;
