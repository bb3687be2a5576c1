pub mod role;
pub mod screening;
