// ABOUTME: Assistant chat command for pulse-cli
// ABOUTME: Replies from the local conversation and last calculation, then saves both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::{catalogs, display};
use pulse_core::models::ChatMessage;
use pulse_intelligence::{Assistant, AssistantContext};
use pulse_server::{
    constants::limits,
    errors::{AppError, AppResult},
    local_state::LocalStateStore,
};
use std::sync::Arc;

/// Send one message to the assistant
pub fn run(store: &LocalStateStore, message: &str, reset: bool) -> AppResult<()> {
    let mut state = store.load()?;
    if reset {
        state.chat_history.clear();
    }

    let message = message.trim();
    if message.is_empty() {
        if reset {
            store.save(&state)?;
            println!("Conversation cleared.");
            return Ok(());
        }
        return Err(AppError::missing_field("message"));
    }
    if message.chars().count() > limits::MAX_CHAT_MESSAGE_CHARS {
        return Err(AppError::invalid_input(format!(
            "Message must be at most {} characters",
            limits::MAX_CHAT_MESSAGE_CHARS
        )));
    }

    let assistant = Assistant::new(
        Arc::new(catalogs::load_recipes()?),
        Arc::new(catalogs::load_workouts()?),
    );
    let context = AssistantContext {
        metrics: state.last_metrics.clone(),
        display_name: None,
    };

    state.push_message(ChatMessage::user(message));
    let reply = assistant.respond(&state.chat_history, &context);
    display::display_reply(&reply);
    state.push_message(ChatMessage::assistant(reply));

    store.save(&state)
}
