//! Profile operations over the store seam: fetch, raw updates, taste
//! mapping, and the speed threshold checks.

use taste_core::{Band, TasteChange, TasteMapper, TasteParams, VisualParams};

use crate::store::{ProfileStore, StoreError};

/// Storage key used when a caller has no identity.
pub const DEFAULT_IDENTITY: &str = "default";

/// Caller-supplied session context.
///
/// Resolves an optional identity to the storage key, so the shared fallback
/// profile is an explicit value the caller passes around rather than
/// process-wide state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    identity: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn for_identity(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
        }
    }

    pub fn key(&self) -> &str {
        self.identity.as_deref().unwrap_or(DEFAULT_IDENTITY)
    }
}

/// Profile operations bound to one store backend.
pub struct ProfileService<S> {
    store: S,
    mapper: TasteMapper,
}

impl<S: ProfileStore> ProfileService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mapper: TasteMapper::from_entropy(),
        }
    }

    /// Service with seeded color synthesis, for reproducible runs.
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            store,
            mapper: TasteMapper::new(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.mapper.reseed(seed);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get-or-default. The sphere tri-state is refreshed from the stored
    /// displacement and the refreshed record written back, so stored and
    /// served values never diverge.
    pub fn fetch(&self, session: &Session) -> Result<VisualParams, StoreError> {
        let mut params = self.store.get(session.key())?.unwrap_or_default();
        params.refresh_spheres();
        self.store.put(session.key(), &params)?;
        Ok(params)
    }

    /// Merge raw field edits over the stored record.
    ///
    /// Unknown field names and values outside 0..=100 are dropped; accepted
    /// values overwrite, the spheres are recomputed, and the result is
    /// persisted. Field names are the wire names the sliders submit.
    pub fn update<'a, I>(&self, session: &Session, changes: I) -> Result<VisualParams, StoreError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut params = self.store.get(session.key())?.unwrap_or_default();
        for (field, value) in changes {
            if !(0..=100).contains(&value) {
                log::debug!("dropping out-of-range update {field}={value}");
                continue;
            }
            let value = value as u8;
            match field {
                "fresnel" => params.fresnel = value,
                "depthDarkTop" => params.depth_dark_top = value,
                "depthDarkBottom" => params.depth_dark_bottom = value,
                "red" => params.red = value,
                "green" => params.green = value,
                "blue" => params.blue = value,
                "noise" => params.noise = value,
                "displace" => params.displace = value,
                "speed" => params.speed = value,
                "normal" => params.normal = value,
                other => log::debug!("dropping unknown update field {other}"),
            }
        }
        params.refresh_spheres();
        self.store.put(session.key(), &params)?;
        log::debug!("profile {} updated", session.key());
        Ok(params)
    }

    /// Run one taste edit through the core mapper and persist the result.
    pub fn apply_taste(
        &mut self,
        session: &Session,
        taste: &TasteParams,
        change: TasteChange,
    ) -> Result<VisualParams, StoreError> {
        let current = self.store.get(session.key())?.unwrap_or_default();
        let next = self.mapper.apply(&current, taste, change);
        self.store.put(session.key(), &next)?;
        log::debug!("profile {} mapped {}", session.key(), change.field());
        Ok(next)
    }

    /// Store a speed value. Out-of-range input is rejected as `Ok(None)`;
    /// the caller decides how to surface the rejection.
    pub fn set_speed(
        &self,
        session: &Session,
        value: i64,
    ) -> Result<Option<VisualParams>, StoreError> {
        if !(0..=100).contains(&value) {
            return Ok(None);
        }
        self.update(session, [("speed", value)]).map(Some)
    }

    pub fn speed(&self, session: &Session) -> Result<u8, StoreError> {
        Ok(self.store.get(session.key())?.unwrap_or_default().speed)
    }

    /// Band the stored speed falls in, via the shared bucketing primitive.
    pub fn speed_band(&self, session: &Session) -> Result<Band, StoreError> {
        Ok(Band::classify(i64::from(self.speed(session)?)))
    }

    /// Threshold check: pass when the stored speed falls in `band`.
    pub fn check_speed(&self, session: &Session, band: Band) -> Result<bool, StoreError> {
        Ok(self.speed_band(session)? == band)
    }
}
