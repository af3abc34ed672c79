//! The single output panel shared by every lookup flow.
//!
//! Lookups may overlap. Each flow takes a ticket before it starts, and an
//! outcome is only applied when no newer ticket has reached the panel yet,
//! so a slow earlier lookup can never overwrite a later one.

use crate::lookup::Recommender;
use crate::model::{DisplayItem, LookupError};
use crate::render::{message_for, render_card};
use crate::source::DatasetSource;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Blank,
    Cards(Vec<String>),
    Message(&'static str),
}

impl Panel {
    pub fn from_outcome(outcome: &Result<Vec<DisplayItem>, LookupError>) -> Self {
        match outcome {
            Ok(items) => Panel::Cards(items.iter().map(render_card).collect()),
            Err(e) => Panel::Message(message_for(e)),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Panel::Blank => String::new(),
            Panel::Cards(cards) => cards.join("\n\n"),
            Panel::Message(message) => message.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayState {
    pub panel: Panel,
    /// Ticket of the flow that produced `panel`.
    pub ticket: u64,
    pub updated_at: DateTime<Utc>,
}

pub struct DisplaySurface {
    state: Mutex<DisplayState>,
    next_ticket: AtomicU64,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DisplayState {
                panel: Panel::Blank,
                ticket: 0,
                updated_at: Utc::now(),
            }),
            next_ticket: AtomicU64::new(0),
        }
    }

    pub fn begin(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns the panel that was applied, or `None` when the outcome was stale.
    pub async fn show(
        &self,
        ticket: u64,
        outcome: &Result<Vec<DisplayItem>, LookupError>,
    ) -> Option<Panel> {
        let mut state = self.state.lock().await;
        if ticket < state.ticket {
            info!("Dropping stale lookup #{} (panel already at #{})", ticket, state.ticket);
            return None;
        }
        state.panel = Panel::from_outcome(outcome);
        state.ticket = ticket;
        state.updated_at = Utc::now();
        debug!("Panel updated by lookup #{}", ticket);
        Some(state.panel.clone())
    }

    /// Empties the panel and outdates every lookup still in flight.
    pub async fn clear(&self) {
        let ticket = self.begin();
        let mut state = self.state.lock().await;
        state.panel = Panel::Blank;
        state.ticket = ticket;
        state.updated_at = Utc::now();
        debug!("Panel cleared at #{}", ticket);
    }

    pub async fn snapshot(&self) -> DisplayState {
        self.state.lock().await.clone()
    }
}

/// Searches and publishes under a ticket taken by the caller when the
/// request was made, not when the search starts running.
pub async fn run_lookup<S: DatasetSource>(
    ticket: u64,
    text: &str,
    recommender: &Recommender<S>,
    surface: &DisplaySurface,
) -> Option<Panel> {
    let outcome = recommender.search(text).await;
    surface.show(ticket, &outcome).await
}

impl Default for DisplaySurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::render::{NO_RESULTS_MESSAGE, UNRECOGNIZED_MESSAGE};

    fn cards(names: &[&str]) -> Result<Vec<DisplayItem>, LookupError> {
        Ok(names
            .iter()
            .map(|n| DisplayItem { name: n.to_string(), ..DisplayItem::default() })
            .collect())
    }

    #[tokio::test]
    async fn later_lookup_wins_even_if_it_finishes_first() {
        let surface = DisplaySurface::new();
        let slow = surface.begin();
        let fast = surface.begin();

        let applied = surface.show(fast, &cards(&["Tokyo"])).await;
        assert!(applied.unwrap().to_text().contains("Tokyo"));
        assert_eq!(surface.show(slow, &cards(&["Sydney"])).await, None);

        let state = surface.snapshot().await;
        assert_eq!(state.ticket, fast);
        assert!(state.panel.to_text().contains("Tokyo"));
    }

    #[tokio::test]
    async fn errors_render_their_message() {
        let surface = DisplaySurface::new();
        let t = surface.begin();
        surface.show(t, &Err(LookupError::EmptyResult(Category::Temple))).await;
        assert_eq!(surface.snapshot().await.panel, Panel::Message(NO_RESULTS_MESSAGE));

        let t = surface.begin();
        surface.show(t, &Err(LookupError::UnrecognizedKeyword)).await;
        assert_eq!(surface.snapshot().await.panel.to_text(), UNRECOGNIZED_MESSAGE);
    }

    #[tokio::test]
    async fn clear_outdates_pending_lookups() {
        let surface = DisplaySurface::new();
        let pending = surface.begin();
        surface.clear().await;

        assert_eq!(surface.show(pending, &cards(&["Bali"])).await, None);
        assert_eq!(surface.snapshot().await.panel, Panel::Blank);
    }
}
