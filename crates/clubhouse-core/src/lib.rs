//! Core domain, ports and services for the clubhouse results API.
//!
//! This crate is pure: it knows nothing about SQL or HTTP. Adapters
//! (`clubhouse-db`, `clubhouse-axum`, `clubhouse-cli`) implement or
//! consume the ports defined here.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AuthToken, Event, EventStatus, EventType, Money, MoneyParseError, NewEvent, NewPlayer,
    NewRound, NewTournament, NewTournamentPoints, NewTournamentResult, NewUser, Player,
    ResultFilter, Round, Tournament, TournamentPoints, TournamentResult, User, UserCredentials,
    key_prefix,
};
pub use ports::{
    CoreError, EventRepository, PlayerRepository, Repos, RepositoryError, ResultsRepository,
    TokenRepository, UserRepository,
};
pub use services::{
    AppCore, AuthError, AuthService, EventService, NewUserRequest, PlayerService, ResultsService,
    hash_password,
};

pub use paths::{PathError, data_root, database_path};
