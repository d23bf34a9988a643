//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the wire representation explicitly and decouple the
//! domain types from field naming on the wire (`player` rather than
//! `player_id`, nested tournaments, decimal strings for money).

pub mod auth;
pub mod events;
pub mod results;

pub use auth::{LoginRequest, TokenResponse, UserProfileDto};
pub use events::{EventDto, PlayerDto, TournamentDto};
pub use results::{ListParams, TournamentPointsDto, TournamentResultDto};
