pub mod alerts;
pub mod games;
pub mod health;
pub mod metrics;
pub mod players;
pub mod scores;
pub mod stats;
pub mod system;
pub mod teams;
