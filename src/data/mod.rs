//! Data access layer.
//!
//! This module contains the clients that read and write data outside the process:
//! the Clash of Clans REST API (`coc`) and the on-disk opponent stats cache
//! (`player_cache`). Both return the domain models from `crate::model` so the
//! service layer never handles raw HTTP responses or file contents.

pub mod coc;
pub mod player_cache;

#[cfg(test)]
mod test;
