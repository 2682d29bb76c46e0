pub mod codes;
pub mod health;
