pub mod earth911;
pub mod models;
