use crate::models::Transcript;
use crate::services::ai::{LlmProvider, Message};
use crate::services::extract::extract_appointment;
use crate::services::ledger::Ledger;

const SYSTEM_PROMPT: &str = "You are a friendly AI assistant for a dental clinic. \
Assist patients in booking appointments. Ask for the date and time if not provided, \
and confirm the booking once the details are received. If the user asks for help or \
has a question, respond appropriately. Always confirm when an appointment is booked \
successfully.";

/// Handles one user turn: always asks the model for a reply, then lets a
/// recognized date/time in the raw input override it with a booking
/// confirmation or a conflict message.
pub async fn process_turn(
    llm: &dyn LlmProvider,
    transcript: &mut Transcript,
    ledger: &mut Ledger,
    user_input: &str,
) -> String {
    let mut messages: Vec<Message> = transcript
        .messages()
        .iter()
        .map(|m| Message {
            role: m.role.clone(),
            content: m.content.clone(),
        })
        .collect();

    messages.push(Message {
        role: "user".to_string(),
        content: user_input.to_string(),
    });

    let model_reply = match llm.chat(SYSTEM_PROMPT, &messages).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "reply provider call failed");
            return format!("Error: Failed to process your request. Details: {e}");
        }
    };

    // The model's own words stay in the transcript even when a booking
    // message is surfaced instead, so the next turn sees the full exchange.
    transcript.record_exchange(user_input, &model_reply);

    match extract_appointment(user_input) {
        Some(appt) => match ledger.book(&appt.date, &appt.time) {
            Ok(()) => {
                tracing::info!(date = %appt.date, time = %appt.time, "appointment booked");
                format!(
                    "Booking your appointment for {} at {}... Done! Your appointment is confirmed.",
                    appt.date, appt.time
                )
            }
            Err(conflict) => conflict.to_string(),
        },
        None => model_reply,
    }
}
