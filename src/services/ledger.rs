use std::fmt;

use crate::models::Appointment;

/// In-memory book of accepted appointments, keyed by the literal date token.
/// Entries are append-only for the life of the process.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Appointment>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, date: &str) -> bool {
        self.entries.iter().any(|a| a.date == date)
    }

    /// Records a booking, or fails with the time already held for that date.
    /// A rejected booking leaves the existing entry untouched.
    pub fn book(&mut self, date: &str, time: &str) -> Result<(), BookingConflict> {
        if let Some(existing) = self.entries.iter().find(|a| a.date == date) {
            return Err(BookingConflict {
                date: existing.date.clone(),
                existing_time: existing.time.clone(),
            });
        }
        self.entries.push(Appointment {
            date: date.to_string(),
            time: time.to_string(),
        });
        Ok(())
    }

    /// Entries in the order they were booked.
    pub fn snapshot(&self) -> &[Appointment] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConflict {
    pub date: String,
    pub existing_time: String,
}

impl fmt::Display for BookingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sorry, there is already an appointment on {} at {}. Please choose another time.",
            self.date, self.existing_time
        )
    }
}

pub fn final_report(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No appointments booked.".to_string();
    }

    let mut out = String::from("Final Appointments:");
    for appt in ledger.snapshot() {
        out.push_str(&format!("\nAppointment on {} at {}", appt.date, appt.time));
    }
    out
}
