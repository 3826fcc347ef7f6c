//! # RnB Core
//!
//! Production and resource-accounting engine for a Roads & Boats style
//! economy game.
//!
//! This crate contains the economic rules only:
//! - No rendering
//! - No IO
//! - No map, movement or turn orchestration
//!
//! Each round the caller resets every building and cache, then asks each
//! building to produce against the cache on its tile. Buildings pull inputs
//! from the cache and hand back owned outputs.
//!
//! ## Crate Structure
//!
//! - [`resource`] - resource types and carrier markers
//! - [`cache`] - the ownership-aware resource pool
//! - [`buildings`] - building types, recipes and the production state machine
//! - [`factory`] - building construction by type tag
//! - [`config`] - RON engine configuration
//! - [`terrain`] / [`transporter`] - the narrow views of the map and of
//!   transporters the engine needs

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod buildings;
pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod player;
pub mod resource;
pub mod terrain;
pub mod transporter;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::buildings::{
        BoostKind, Building, BuildingType, MineShaft, MineVariant, ProducerClass,
        ProductionOutput,
    };
    pub use crate::cache::Cache;
    pub use crate::config::{EngineConfig, MineShuffle};
    pub use crate::error::{DecodeError, ErrorKind, GameError, Result};
    pub use crate::factory::{make_building, BuildingFactory};
    pub use crate::player::PlayerColor;
    pub use crate::resource::{Resource, ResourceType};
    pub use crate::terrain::{Site, TerrainKind, TileInfo};
    pub use crate::transporter::{Transporter, TransporterOrder, TransporterType};
}
