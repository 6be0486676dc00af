pub mod games;
pub mod health;
pub mod students;
pub mod welcome;
