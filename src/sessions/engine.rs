use crate::geo;
use crate::geo::models::LatLng;
use crate::locations::models::Location;
use crate::locations::provider::ProviderError;
use crate::scoring::score_for_distance;
use crate::sessions::consts::{HINT_MAX_LAT_OFFSET, HINT_MAX_LNG_OFFSET};
use crate::sessions::errors::SessionError;
use crate::sessions::models::{
    FetchOutcome, FetchSlot, FetchTicket, GameSession, GameSummary, Rating, RoundResult,
    SessionConfig, SessionState, SessionView,
};
use rand::Rng;

impl GameSession {
    /// A new session waiting for the location of its first round.
    pub fn start(id: String, config: SessionConfig) -> Self {
        Self {
            id,
            config,
            state: SessionState::Loading,
            current_round: 1,
            cumulative_score: 0,
            current_location: None,
            last_result: None,
            last_fetch_error: None,
            fetch: FetchSlot::Idle,
            issued_tickets: 0,
        }
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.expect_state("restart", SessionState::Finished)?;
        let issued_tickets = self.issued_tickets;
        *self = Self::start(std::mem::take(&mut self.id), self.config);
        // Tickets keep counting so nothing issued before the restart can match later.
        self.issued_tickets = issued_tickets;
        Ok(())
    }

    pub fn begin_fetch(&mut self) -> Result<FetchTicket, SessionError> {
        self.expect_state("fetch_location", SessionState::Loading)?;
        if let FetchSlot::InFlight(_) = self.fetch {
            return Err(SessionError::FetchInFlight);
        }
        self.issued_tickets += 1;
        let ticket = FetchTicket(self.issued_tickets);
        self.fetch = FetchSlot::InFlight(ticket);
        Ok(ticket)
    }

    pub fn location_ready(&mut self, ticket: FetchTicket, location: Location) -> FetchOutcome {
        if !self.settle_fetch(ticket) {
            return FetchOutcome::Discarded;
        }
        self.current_location = Some(location);
        self.last_result = None;
        self.last_fetch_error = None;
        self.state = SessionState::Playing;
        FetchOutcome::Applied
    }

    /// Records the failure; the session keeps waiting for a location.
    pub fn location_fetch_failed(
        &mut self,
        ticket: FetchTicket,
        error: &ProviderError,
    ) -> FetchOutcome {
        if !self.settle_fetch(ticket) {
            return FetchOutcome::Discarded;
        }
        self.last_fetch_error = Some(error.to_string());
        FetchOutcome::Applied
    }

    /// Forgets the fetch in flight, if any. Returns whether there was one.
    pub fn cancel_fetch(&mut self) -> Result<bool, SessionError> {
        self.expect_state("cancel_fetch", SessionState::Loading)?;
        let cancelled = matches!(self.fetch, FetchSlot::InFlight(_));
        self.fetch = FetchSlot::Idle;
        Ok(cancelled)
    }

    pub fn submit_guess(&mut self, guess: LatLng) -> Result<RoundResult, SessionError> {
        self.expect_state("submit_guess", SessionState::Playing)?;
        if !guess.is_valid() {
            return Err(SessionError::InvalidCoordinates {
                lat: guess.lat,
                lng: guess.lng,
            });
        }
        let Some(location) = self.current_location.clone() else {
            return Err(self.invalid_transition("submit_guess"));
        };
        let distance_km = geo::distance_km(location.coordinates, guess);
        let points_awarded = score_for_distance(distance_km, &self.config.scoring);
        let result = RoundResult {
            round: self.current_round,
            location,
            guess,
            distance_km,
            points_awarded,
        };
        self.cumulative_score += points_awarded;
        self.last_result = Some(result.clone());
        self.state = SessionState::Result;
        Ok(result)
    }

    pub fn advance(&mut self) -> Result<SessionState, SessionError> {
        self.expect_state("advance", SessionState::Result)?;
        self.current_location = None;
        if self.current_round < self.config.total_rounds {
            self.current_round += 1;
            self.state = SessionState::Loading;
        } else {
            self.state = SessionState::Finished;
        }
        Ok(self.state)
    }

    /// A map center somewhere around the target, never more than
    /// `HINT_MAX_LAT_OFFSET`/`HINT_MAX_LNG_OFFSET` degrees away from it.
    pub fn hint(&self, rng: &mut impl Rng) -> Result<LatLng, SessionError> {
        self.expect_state("hint", SessionState::Playing)?;
        let Some(location) = self.current_location.as_ref() else {
            return Err(self.invalid_transition("hint"));
        };
        Ok(geo::offset(
            location.coordinates,
            rng.gen_range(-HINT_MAX_LAT_OFFSET..=HINT_MAX_LAT_OFFSET),
            rng.gen_range(-HINT_MAX_LNG_OFFSET..=HINT_MAX_LNG_OFFSET),
        ))
    }

    pub fn summary(&self) -> Result<GameSummary, SessionError> {
        self.expect_state("summary", SessionState::Finished)?;
        let max_possible_score = self.config.max_possible_score();
        let rating = Rating::for_score(self.cumulative_score, max_possible_score);
        Ok(GameSummary {
            final_score: self.cumulative_score,
            max_possible_score,
            rounds_played: self.current_round,
            rating,
            message: rating.to_human_readable(),
        })
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id.clone(),
            state: self.state,
            current_round: self.current_round,
            total_rounds: self.config.total_rounds,
            cumulative_score: self.cumulative_score,
            max_score: self.config.scoring.max_score,
            current_location: self.current_location.as_ref().map(Location::clue),
            last_result: self.last_result.clone(),
            fetch_in_flight: matches!(self.fetch, FetchSlot::InFlight(_)),
            last_fetch_error: self.last_fetch_error.clone(),
            is_last_round: self.current_round == self.config.total_rounds,
        }
    }

    /// Frees the fetch slot if `ticket` is the one in flight.
    fn settle_fetch(&mut self, ticket: FetchTicket) -> bool {
        if self.state != SessionState::Loading || self.fetch != FetchSlot::InFlight(ticket) {
            return false;
        }
        self.fetch = FetchSlot::Idle;
        true
    }

    fn expect_state(
        &self,
        operation: &'static str,
        expected: SessionState,
    ) -> Result<(), SessionError> {
        if self.state != expected {
            return Err(self.invalid_transition(operation));
        }
        Ok(())
    }

    fn invalid_transition(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            state: self.state,
        }
    }
}
