// Export all instruction modules

pub mod initialize_registry;
pub mod create_poll;
pub mod submit_sealed_answer;
pub mod close_poll;
pub mod reveal_answer;
pub mod queries;

// Re-export the instruction structs for easy access
pub use initialize_registry::*;
pub use create_poll::*;
pub use submit_sealed_answer::*;
pub use close_poll::*;
pub use reveal_answer::*;
pub use queries::*;
