pub mod appointment;
pub mod conversation;

pub use appointment::Appointment;
pub use conversation::{ConversationMessage, Transcript};
