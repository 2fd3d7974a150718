//! Recipe suggestions from the ingredients at hand.
//!
//! Four stateless endpoints (ingredient extraction, recipe generation, detail
//! expansion, video search) each call an external provider when one is
//! configured and fall back to fixed demo data otherwise. The [`client`]
//! module drives the same flow from the other side of the wire.

pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipelines;
pub mod providers;
pub mod server;
pub mod video;

pub use client::{KondateClient, RecipeApi, Session, SessionState};
pub use config::AppConfig;
pub use error::KondateError;
pub use model::{IngredientList, Recipe, RecipeDetail, Video};
pub use server::{create_router, AppState};
