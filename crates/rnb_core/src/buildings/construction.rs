//! Construction legality and cost deduction.

use crate::cache::Cache;
use crate::error::{GameError, Result};
use crate::terrain::TileInfo;

use super::BuildingType;

impl BuildingType {
    /// Whether this type may be built on `tile` paying from `cache`.
    /// Never mutates anything.
    #[must_use]
    pub fn can_build<T: TileInfo + ?Sized>(self, cache: &Cache, tile: &T) -> bool {
        self.spec()
            .is_some_and(|spec| spec.site.allows(tile) && cache.has(spec.construction_cost))
    }

    /// Deduct the construction cost from `cache`.
    ///
    /// The site is not checked again; call [`BuildingType::can_build`] first.
    pub fn remove_construction_resources(self, cache: &mut Cache) -> Result<()> {
        let spec = self.spec().ok_or(GameError::InvalidBuildingType)?;
        cache.remove_all(spec.construction_cost)?;
        tracing::debug!(building = %self, "Construction resources removed");
        Ok(())
    }
}
