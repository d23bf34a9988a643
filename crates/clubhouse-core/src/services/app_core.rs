//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, HTTP)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::{AuthService, EventService, PlayerService, ResultsService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let rows = core.results().list_results(&ResultFilter::all()).await?;
/// ```
pub struct AppCore {
    results: ResultsService,
    events: EventService,
    auth: AuthService,
    players: PlayerService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            results: ResultsService::new(repos.results),
            events: EventService::new(repos.events),
            auth: AuthService::new(repos.users, repos.tokens, repos.players.clone()),
            players: PlayerService::new(repos.players),
        }
    }

    /// Override the bcrypt cost used when creating users.
    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.auth = self.auth.with_bcrypt_cost(cost);
        self
    }

    /// Access the results service.
    pub const fn results(&self) -> &ResultsService {
        &self.results
    }

    /// Access the event service.
    pub const fn events(&self) -> &EventService {
        &self.events
    }

    /// Access the auth service.
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Access the player service.
    pub const fn players(&self) -> &PlayerService {
        &self.players
    }
}
