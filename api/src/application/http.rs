pub mod diet_plan;
pub mod health;
pub mod server;
