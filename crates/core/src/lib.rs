//! Game rules and state for a two-player prompt-card night. Keep this
//! crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod content;
pub mod deck;
pub mod events;
pub mod players;
pub mod rng;
pub mod session;
pub mod timer;
pub mod turn;
pub mod wheel;

pub use cards::*;
pub use config::*;
pub use content::*;
pub use deck::*;
pub use events::*;
pub use players::*;
pub use rng::*;
pub use session::*;
pub use timer::*;
pub use turn::*;
pub use wheel::*;
