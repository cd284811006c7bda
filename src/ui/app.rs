use crate::random::RandomSource;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::{RandomReducer, Reducer};
use crate::ui::roster::{RosterIntent, RosterReducer, RosterState};
use crate::users::ProcessedUser;

/// Which pane owns keyboard input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Roster,
    Search,
    Amount,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
/// The second arm covers reducers that consume random draws.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
    ($self:expr, $field:ident, $reducer:ty, $intent:expr, $random:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent, $random);
    };
}

/// Digits the amount field accepts before input is ignored.
/// Nine digits always fit in a u64.
const AMOUNT_MAX_DIGITS: usize = 9;

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Counter state (MVI pattern).
    counter: CounterState,
    /// Roster state (MVI pattern).
    roster: RosterState,
    /// Raw text of the amount field. Parsed on use, invalid means zero.
    amount_input: String,
    random: Box<dyn RandomSource>,
}

impl App {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Roster,
            counter: CounterState::default(),
            roster: RosterState::default(),
            amount_input: "0".to_string(),
            random,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    // ========================================================================
    // Counter methods (MVI pattern)
    // ========================================================================

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Dispatch an intent to the counter reducer.
    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        tracing::trace!("Counter intent: {:?}", intent);
        dispatch_mvi!(self, counter, CounterReducer, intent, self.random.as_mut());
        tracing::trace!("Counter value: {}", self.counter.value);
    }

    /// Amount field as a number. Empty or malformed text counts as zero.
    pub fn amount(&self) -> u64 {
        self.amount_input.trim().parse().unwrap_or(0)
    }

    pub fn push_amount_char(&mut self, c: char) {
        if !c.is_ascii_digit() || self.amount_input.chars().count() >= AMOUNT_MAX_DIGITS {
            return;
        }
        if self.amount_input == "0" {
            self.amount_input.clear();
        }
        self.amount_input.push(c);
    }

    pub fn pop_amount_char(&mut self) {
        self.amount_input.pop();
    }

    pub fn decrement_by_amount(&mut self) {
        let amount = self.amount();
        self.dispatch_counter(CounterIntent::DecrementByInput { amount });
    }

    /// Reset zeroes the amount field too, matching the reset button
    /// clearing both.
    pub fn reset_counter(&mut self) {
        self.amount_input = "0".to_string();
        self.dispatch_counter(CounterIntent::Reset);
    }

    // ========================================================================
    // Roster methods (MVI pattern)
    // ========================================================================

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    /// Dispatch an intent to the roster reducer.
    pub fn dispatch_roster(&mut self, intent: RosterIntent) {
        dispatch_mvi!(self, roster, RosterReducer, intent);
    }

    pub fn seed_roster(&mut self, users: Vec<ProcessedUser>) {
        self.dispatch_roster(RosterIntent::Seed { users });
    }

    /// Remove the selected card, or restore it when already removed.
    pub fn toggle_selected(&mut self) {
        let Some(entry) = self.roster.selected_entry() else {
            return;
        };
        let id = entry.user.id.clone();
        let removed = entry.is_removed();

        if removed {
            tracing::debug!("Restoring user {id}");
            self.dispatch_roster(RosterIntent::Restore { id });
        } else {
            tracing::debug!("Removing user {id}");
            self.dispatch_roster(RosterIntent::Remove { id });
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.roster.query.clone();
        query.push(c);
        self.dispatch_roster(RosterIntent::QueryChanged { query });
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.roster.query.clone();
        query.pop();
        self.dispatch_roster(RosterIntent::QueryChanged { query });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;
    use crate::users::{Address, Geo};

    fn make_app() -> App {
        App::new(Box::new(SequenceRandom::new(vec![4])))
    }

    fn user(id: &str, username: &str) -> ProcessedUser {
        ProcessedUser {
            id: id.to_string(),
            username: username.to_string(),
            address: Address {
                street: "Rex Trail".to_string(),
                suite: "Suite 280".to_string(),
                city: "Howemouth".to_string(),
                zipcode: "58804-1099".to_string(),
                geo: Geo {
                    lat: "24.8918".to_string(),
                    lng: "21.8984".to_string(),
                },
            },
            age: 42,
            company_name: "Johns Group".to_string(),
        }
    }

    // -- counter dispatch --------------------------------------------------

    #[test]
    fn random_increment_uses_injected_draws() {
        let mut app = make_app();
        // Draw 4 maps to a step of 5.
        app.dispatch_counter(CounterIntent::IncrementRandom);
        assert_eq!(app.counter().value, 5);
    }

    #[test]
    fn decrement_reads_the_amount_field() {
        let mut app = make_app();
        app.dispatch_counter(CounterIntent::IncrementRandom);
        app.push_amount_char('3');
        app.decrement_by_amount();
        assert_eq!(app.counter().value, 2);
    }

    #[test]
    fn reset_clears_value_and_amount_field() {
        let mut app = make_app();
        app.dispatch_counter(CounterIntent::IncrementRandom);
        app.push_amount_char('7');
        app.reset_counter();
        assert_eq!(app.counter().value, 0);
        assert_eq!(app.amount_input(), "0");
    }

    // -- amount field editing ----------------------------------------------

    #[test]
    fn typing_replaces_the_leading_zero() {
        let mut app = make_app();
        app.push_amount_char('4');
        app.push_amount_char('2');
        assert_eq!(app.amount_input(), "42");
        assert_eq!(app.amount(), 42);
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut app = make_app();
        app.push_amount_char('x');
        app.push_amount_char('-');
        assert_eq!(app.amount_input(), "0");
    }

    #[test]
    fn emptied_field_counts_as_zero() {
        let mut app = make_app();
        app.pop_amount_char();
        assert_eq!(app.amount_input(), "");
        assert_eq!(app.amount(), 0);
    }

    #[test]
    fn amount_field_caps_its_length() {
        let mut app = make_app();
        for _ in 0..15 {
            app.push_amount_char('9');
        }
        assert_eq!(app.amount_input().len(), 9);
        assert_eq!(app.amount(), 999_999_999);
    }

    // -- roster flows ------------------------------------------------------

    #[test]
    fn toggle_removes_then_restores() {
        let mut app = make_app();
        app.seed_roster(vec![user("AB12CD", "Bret"), user("EF34AB", "Samantha")]);

        app.toggle_selected();
        assert_eq!(app.roster().active_count(), 1);
        assert_eq!(app.roster().removed_count(), 1);

        // Removed entries only surface through search, so query for the
        // parked user and toggle again to restore.
        app.dispatch_roster(RosterIntent::QueryChanged {
            query: "bret".to_string(),
        });
        app.toggle_selected();
        assert_eq!(app.roster().active_count(), 2);
        assert_eq!(app.roster().removed_count(), 0);
    }

    #[test]
    fn toggle_with_empty_roster_is_a_noop() {
        let mut app = make_app();
        app.toggle_selected();
        assert_eq!(app.roster().entries.len(), 0);
    }

    #[test]
    fn search_edits_flow_through_the_reducer() {
        let mut app = make_app();
        app.seed_roster(vec![user("AB12CD", "Bret")]);
        app.push_search_char('b');
        app.push_search_char('r');
        assert_eq!(app.roster().query, "br");
        app.pop_search_char();
        assert_eq!(app.roster().query, "b");
    }

    #[test]
    fn quit_flag_sticks() {
        let mut app = make_app();
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
    }
}
