//! Type-safe wrappers around [`StateClient`](actor_framework::StateClient).

pub mod desk_client;

pub use desk_client::*;
