// Export all instruction modules

pub mod initialize;
pub mod mint_reward;
pub mod approve;
pub mod transfer_from;
pub mod queries;

// Re-export the instruction structs for easy access
pub use initialize::*;
pub use mint_reward::*;
pub use approve::*;
pub use transfer_from::*;
pub use queries::*;
