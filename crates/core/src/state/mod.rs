pub mod initiative;
pub mod io;
pub mod session;

pub use initiative::{Agent, AgentStatus, Initiative, InitiativeStatus, InitiativeStore};
pub use session::{SessionError, SessionStore};
