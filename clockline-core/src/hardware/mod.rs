//! Platform-specific collaborator implementations.
//!
//! Only the pieces the core can provide itself live here; bus transports
//! belong to the embedding application.

// Linux/desktop time source (requires std)
#[cfg(feature = "std")]
pub mod linux;
