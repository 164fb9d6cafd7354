use super::brdf::Brdf;
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// One flat reflecting element of a satellite, in the satellite body frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    area: f64,
    normal: na::Vector3<f64>,
    brdf: Brdf,
}

impl Surface {
    pub fn new(area: f64, normal: na::Vector3<f64>, brdf: Brdf) -> Self {
        Surface { area, normal, brdf }
    }

    /// Area in m^2
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Outward normal as constructed. Not necessarily unit length.
    pub fn normal(&self) -> &na::Vector3<f64> {
        &self.normal
    }

    pub fn brdf(&self) -> &Brdf {
        &self.brdf
    }
}

/// Ordered collection of surfaces forming one satellite configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSet {
    surfaces: Vec<Surface>,
}

impl SurfaceSet {
    pub fn new(surfaces: Vec<Surface>) -> Self {
        SurfaceSet { surfaces }
    }

    pub fn push(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Surface> {
        self.surfaces.iter()
    }

    pub fn as_slice(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn last(&self) -> Option<&Surface> {
        self.surfaces.last()
    }

    pub fn total_area(&self) -> f64 {
        self.surfaces.iter().map(Surface::area).sum()
    }
}

impl From<Vec<Surface>> for SurfaceSet {
    fn from(surfaces: Vec<Surface>) -> Self {
        SurfaceSet::new(surfaces)
    }
}

impl<'a> IntoIterator for &'a SurfaceSet {
    type Item = &'a Surface;
    type IntoIter = std::slice::Iter<'a, Surface>;

    fn into_iter(self) -> Self::IntoIter {
        self.surfaces.iter()
    }
}

/// Provider of a satellite body, excluding its solar array.
///
/// Every call hands out an independently owned set, so callers may extend
/// the result without affecting the provider or other callers.
pub trait SatelliteModel {
    fn get_surfaces(&self) -> SurfaceSet;
}

/// A surface set is its own template.
impl SatelliteModel for SurfaceSet {
    fn get_surfaces(&self) -> SurfaceSet {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(area: f64) -> Surface {
        Surface::new(area, na::Vector3::new(0.0, 0.0, -1.0), Brdf::lambertian(0.3))
    }

    #[test]
    fn test_copies_are_independent() {
        let template = SurfaceSet::new(vec![plate(1.0), plate(2.0)]);

        let mut first = template.get_surfaces();
        let second = template.get_surfaces();
        first.push(plate(10.0));

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
        assert_eq!(template.len(), 2);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let set = SurfaceSet::new(vec![plate(1.0), plate(2.0), plate(3.0)]);
        let areas: Vec<f64> = set.iter().map(Surface::area).collect();
        assert_eq!(areas, vec![1.0, 2.0, 3.0]);
        assert_eq!(set.total_area(), 6.0);
    }
}
