use serde::{Deserialize, Serialize};

/// A booked slot. Both fields are the literal tokens lifted from the user's
/// message; "May 5" and "5 May" are different dates as far as the book is
/// concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub date: String,
    pub time: String,
}
