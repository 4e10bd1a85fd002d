//! Explicitly constructed service objects.
//!
//! Everything a deployment needs is built once by [`ServiceSet::new`] from
//! its two collaborators (a position provider and an optional durable
//! store) and passed by reference from there on. There are no module-level
//! singletons; tests construct as many independent sets as they like.

use std::sync::Arc;

use futures::future::join_all;
use log::debug;
use serde::{Deserialize, Serialize};

use jyoti_cache::{KeyValueStore, RetentionClass, TieredCache};
use jyoti_engine::{Body, BodyPosition, PositionProvider};
use jyoti_time::UtcInstant;
use jyoti_vedic::{
    AscMc, Ayanamsha, HouseCusps, HouseSystem, SignMansionQuarter, discretize, generate, score,
    to_sidereal,
};

use crate::error::ApiError;
use crate::records::{BirthChart, DashaTimeline, MatchReport, SiderealPosition};

/// Geographic and temporal identity of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub birth: UtcInstant,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub system: HouseSystem,
}

fn validate_location(lat_deg: f64, lon_deg: f64) -> Result<(), ApiError> {
    if !lat_deg.is_finite() || !(-90.0..=90.0).contains(&lat_deg) {
        return Err(ApiError::Validation(format!(
            "latitude {lat_deg} outside [-90, 90]"
        )));
    }
    if !lon_deg.is_finite() || !(-180.0..=180.0).contains(&lon_deg) {
        return Err(ApiError::Validation(format!(
            "longitude {lon_deg} outside [-180, 180]"
        )));
    }
    Ok(())
}

/// The full set of services for one deployment.
pub struct ServiceSet {
    pub astro: AstroService,
    pub dasha: DashaService,
    pub kuta: KutaService,
    pub charts: CachedChartService,
}

impl ServiceSet {
    /// Wire all services with the Lahiri ayanamsha.
    pub fn new(
        provider: Arc<dyn PositionProvider>,
        store: Option<Arc<dyn KeyValueStore>>,
    ) -> Self {
        Self::with_ayanamsha(provider, store, Ayanamsha::Lahiri)
    }

    pub fn with_ayanamsha(
        provider: Arc<dyn PositionProvider>,
        store: Option<Arc<dyn KeyValueStore>>,
        ayanamsha: Ayanamsha,
    ) -> Self {
        debug!(
            "wiring services: ayanamsha {ayanamsha:?}, durable store {}",
            if store.is_some() { "present" } else { "absent" }
        );
        let astro = AstroService::new(Arc::clone(&provider), ayanamsha);
        let dasha = DashaService::new(provider, ayanamsha);
        let charts = CachedChartService::new(astro.clone(), store);
        Self {
            astro,
            dasha,
            kuta: KutaService,
            charts,
        }
    }
}

/// Positions, sidereal conversion, discretization, and houses.
#[derive(Clone)]
pub struct AstroService {
    provider: Arc<dyn PositionProvider>,
    ayanamsha: Ayanamsha,
}

impl AstroService {
    pub fn new(provider: Arc<dyn PositionProvider>, ayanamsha: Ayanamsha) -> Self {
        Self {
            provider,
            ayanamsha,
        }
    }

    pub fn ayanamsha(&self) -> Ayanamsha {
        self.ayanamsha
    }

    /// Tropical geocentric position.
    pub fn position(&self, body: Body, at: UtcInstant) -> Result<BodyPosition, ApiError> {
        Ok(self.provider.position(body, at.julian_day())?)
    }

    /// Sidereal position with its `(sign, mansion, quarter)` triple.
    pub fn sidereal_position(
        &self,
        body: Body,
        at: UtcInstant,
    ) -> Result<SiderealPosition, ApiError> {
        let jd = at.julian_day();
        let pos = self.provider.position(body, jd)?;
        let sidereal = to_sidereal(pos.longitude_deg, self.ayanamsha, jd);
        let triple = discretize(sidereal);
        Ok(SiderealPosition::from_tropical(&pos, sidereal, triple))
    }

    /// Just the discretized triple of a body.
    pub fn triple(&self, body: Body, at: UtcInstant) -> Result<SignMansionQuarter, ApiError> {
        Ok(self.sidereal_position(body, at)?.triple)
    }

    pub fn asc_mc(
        &self,
        at: UtcInstant,
        lat_deg: f64,
        lon_east_deg: f64,
    ) -> Result<AscMc, ApiError> {
        validate_location(lat_deg, lon_east_deg)?;
        Ok(jyoti_vedic::asc_mc(at.julian_day(), lat_deg, lon_east_deg)?)
    }

    pub fn house_cusps(
        &self,
        at: UtcInstant,
        lat_deg: f64,
        lon_east_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, ApiError> {
        validate_location(lat_deg, lon_east_deg)?;
        Ok(jyoti_vedic::house_cusps(
            at.julian_day(),
            lat_deg,
            lon_east_deg,
            system,
        )?)
    }

    /// One body's sidereal position at each instant, gathered in input
    /// order. Each instant fails or succeeds independently.
    pub async fn positions_for(
        &self,
        body: Body,
        dates: &[UtcInstant],
    ) -> Vec<Result<SiderealPosition, ApiError>> {
        join_all(
            dates
                .iter()
                .map(|&at| async move { self.sidereal_position(body, at) }),
        )
        .await
    }
}

/// Vimshottari timelines anchored at the natal Moon.
#[derive(Clone)]
pub struct DashaService {
    provider: Arc<dyn PositionProvider>,
    ayanamsha: Ayanamsha,
}

impl DashaService {
    pub fn new(provider: Arc<dyn PositionProvider>, ayanamsha: Ayanamsha) -> Self {
        Self {
            provider,
            ayanamsha,
        }
    }

    pub fn timeline(&self, birth: UtcInstant) -> Result<DashaTimeline, ApiError> {
        let jd = birth.julian_day();
        let moon = self.provider.position(Body::Moon, jd)?;
        let sidereal = to_sidereal(moon.longitude_deg, self.ayanamsha, jd);
        Ok(DashaTimeline {
            birth_jd: jd,
            moon_sidereal_longitude_deg: sidereal,
            periods: generate(sidereal, jd),
        })
    }
}

/// Ashta Koota scoring over discretized triples.
#[derive(Debug, Clone, Copy, Default)]
pub struct KutaService;

impl KutaService {
    pub fn report(
        &self,
        a: &SignMansionQuarter,
        b: &SignMansionQuarter,
    ) -> Result<MatchReport, ApiError> {
        Ok(score(a, b)?.into())
    }

    /// Score every pair independently, gathered in input order.
    pub async fn match_many(
        &self,
        pairs: &[(SignMansionQuarter, SignMansionQuarter)],
    ) -> Vec<Result<MatchReport, ApiError>> {
        join_all(pairs.iter().map(|(a, b)| async move { self.report(a, b) })).await
    }
}

/// Birth-chart derivation behind the tiered memoizer.
///
/// The caller's own chart is cached long-term; charts of people they are
/// comparing against are cached short-term. Requests are validated before
/// the cache is consulted so an invalid request never occupies a slot.
pub struct CachedChartService {
    astro: AstroService,
    cache: TieredCache<BirthChart>,
}

impl CachedChartService {
    pub fn new(astro: AstroService, store: Option<Arc<dyn KeyValueStore>>) -> Self {
        Self {
            astro,
            cache: TieredCache::new(store),
        }
    }

    /// The caller's own natal chart (long-term retention).
    pub async fn own_chart(&self, req: &ChartRequest) -> Result<BirthChart, ApiError> {
        self.chart(req, RetentionClass::LongTerm).await
    }

    /// A comparison subject's natal chart (short-term retention).
    pub async fn comparison_chart(&self, req: &ChartRequest) -> Result<BirthChart, ApiError> {
        self.chart(req, RetentionClass::ShortTerm).await
    }

    /// Score the caller against a comparison subject by their natal Moons.
    pub async fn match_with(
        &self,
        own: &ChartRequest,
        other: &ChartRequest,
    ) -> Result<MatchReport, ApiError> {
        let a = self.own_chart(own).await?;
        let b = self.comparison_chart(other).await?;
        Ok(score(&a.moon_triple, &b.moon_triple)?.into())
    }

    async fn chart(
        &self,
        req: &ChartRequest,
        class: RetentionClass,
    ) -> Result<BirthChart, ApiError> {
        validate_location(req.latitude_deg, req.longitude_deg)?;
        let key = Self::cache_key(req);
        self.cache
            .get_or_compute(&key, class, || async { self.compute_chart(req) })
            .await
    }

    fn cache_key(req: &ChartRequest) -> String {
        format!(
            "chart:{}:{:.4}:{:.4}:{}",
            req.birth,
            req.latitude_deg,
            req.longitude_deg,
            req.system.name()
        )
    }

    fn compute_chart(&self, req: &ChartRequest) -> Result<BirthChart, ApiError> {
        let positions = Body::all()
            .iter()
            .map(|&body| self.astro.sidereal_position(body, req.birth))
            .collect::<Result<Vec<_>, _>>()?;
        let moon_triple = self.astro.triple(Body::Moon, req.birth)?;
        let cusps = self.astro.house_cusps(
            req.birth,
            req.latitude_deg,
            req.longitude_deg,
            req.system,
        )?;
        Ok(BirthChart {
            positions,
            cusps,
            moon_triple,
        })
    }
}
