/// Database configuration and connection management
pub mod database;

/// Menu catalog loading from menu.toml and day-of-week offers
pub mod menu;

/// Demo account seeding for first run
pub mod seed;
