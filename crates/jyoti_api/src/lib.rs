//! Service layer over the engine, vedic math and cache crates.
//!
//! A deployment builds one [`ServiceSet`] from its collaborators — a
//! [`PositionProvider`](jyoti_engine::PositionProvider) and an optional
//! durable [`KeyValueStore`](jyoti_cache::KeyValueStore) — and every
//! operation goes through those explicitly held services. Results come
//! back as typed records, never dynamic maps.

pub mod error;
pub mod records;
pub mod services;

pub use error::ApiError;
pub use records::{BirthChart, DashaTimeline, KutaRow, MatchReport, SiderealPosition};
pub use services::{
    AstroService, CachedChartService, ChartRequest, DashaService, KutaService, ServiceSet,
};
