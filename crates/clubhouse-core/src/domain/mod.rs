//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `event` - Events, rounds and tournaments
//! - `results` - Tournament results, points and the shared listing filter
//! - `player` - Players, login users and API tokens
//! - `money` - Exact currency amounts

pub mod event;
pub mod money;
pub mod player;
pub mod results;

pub use event::{
    Event, EventStatus, EventType, NewEvent, NewRound, NewTournament, Round, Tournament,
};
pub use money::{Money, MoneyParseError};
pub use player::{AuthToken, NewPlayer, NewUser, Player, User, UserCredentials, key_prefix};
pub use results::{
    NewTournamentPoints, NewTournamentResult, ResultFilter, TournamentPoints, TournamentResult,
};
