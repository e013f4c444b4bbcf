//! Encodes raw environmental observations of a venting site as Fermatean fuzzy
//! values, one per BOG criterion.
//!
//! Acquiring the observations is up to the caller. Every mapping rule lives in a
//! [`MappingConfig`] so it can be tuned without touching the rule engine.

use crate::criterion::BogCriteria;
use crate::error::{BogResult, DomainError};
use crate::ffs::FermateanFuzzySet;
use crate::inputs::Assessment;
use crate::math::cube;
use crate::terms::{CategoryTerms, Key};

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum RoadType {
    Expressway,
    MainRoad,
    BranchRoad,
    Unknown,
}

impl RoadType {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "expressway" => Self::Expressway,
            "main_road" => Self::MainRoad,
            "branch_road" => Self::BranchRoad,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum WeatherCondition {
    Sunny,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Other,
}

impl WeatherCondition {
    /// Accepts weather-service condition names; `clear` counts as sunny.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "sunny" | "clear" => Self::Sunny,
            "clouds" | "cloudy" => Self::Clouds,
            "rain" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum TimeOfDay {
    RushHour,
    Daytime,
    Nighttime,
}

impl TimeOfDay {
    /// 07–09 and 17–19 are rush hour, the rest of 06–18 is daytime.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            7 | 8 | 17 | 18 => Self::RushHour,
            6..=17 => Self::Daytime,
            _ => Self::Nighttime,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "rush_hour" => Some(Self::RushHour),
            "daytime" => Some(Self::Daytime),
            "nighttime" => Some(Self::Nighttime),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum SiteType {
    Urban,
    Suburban,
    Rural,
}

impl SiteType {
    /// People per km²: above 1000 is urban, above 100 suburban.
    pub fn from_population_density(density: f64) -> Self {
        if density > 1000. {
            Self::Urban
        } else if density > 100. {
            Self::Suburban
        } else {
            Self::Rural
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "urban" => Some(Self::Urban),
            "suburban" => Some(Self::Suburban),
            "rural" => Some(Self::Rural),
            _ => None,
        }
    }
}

pub struct MappingConfig {
    /// Density (people per km²) at which the density membership saturates.
    pub density_saturation: f64,
    pub density_nu: f64,
    pub road: CategoryTerms<RoadType>,
    pub weather: CategoryTerms<WeatherCondition>,
    pub time_of_day: CategoryTerms<TimeOfDay>,
    pub site: CategoryTerms<SiteType>,
}

impl MappingConfig {
    /// `mu = density / saturation`, capped at the largest membership `density_nu`
    /// still admits.
    pub fn map_density(&self, density: f64) -> BogResult<FermateanFuzzySet> {
        if !density.is_finite() || density < 0. {
            return Err(DomainError::InvalidMeasurement {
                what: "population density",
                value: density,
            }
            .into());
        }

        if !self.density_saturation.is_finite() || self.density_saturation <= 0. {
            return Err(DomainError::InvalidMeasurement {
                what: "density saturation",
                value: self.density_saturation,
            }
            .into());
        }

        let max_mu = (1. - cube(self.density_nu)).max(0.).cbrt();
        let mu = (density / self.density_saturation).min(max_mu);

        Ok(FermateanFuzzySet::new(mu, self.density_nu)?)
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        let ffs = FermateanFuzzySet::new_unchecked;

        Self {
            density_saturation: 5000.,
            density_nu: 0.1,
            road: CategoryTerms::new(ffs(0.5, 0.2)).with(RoadType::Expressway, ffs(0.9, 0.2)),
            weather: CategoryTerms::new(ffs(0.5, 0.1)).with(WeatherCondition::Sunny, ffs(0.9, 0.1)),
            time_of_day: CategoryTerms::new(ffs(0.3, 0.2)).with(TimeOfDay::Daytime, ffs(0.8, 0.2)),
            site: CategoryTerms::new(ffs(0.5, 0.2)).with(SiteType::Urban, ffs(0.9, 0.2)),
        }
    }
}

/// What the data acquisition side reports for one location and time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentalObservation {
    /// People per km².
    pub population_density: f64,
    pub road_type: RoadType,
    pub weather: WeatherCondition,
    pub time_of_day: TimeOfDay,
    pub site_type: SiteType,
}

impl EnvironmentalObservation {
    /// Values in the order of [`crate::Criteria::bog_default`].
    pub fn map(&self, config: &MappingConfig) -> BogResult<Vec<FermateanFuzzySet>> {
        Ok(vec![
            config.map_density(self.population_density)?,
            config.road.get(self.road_type),
            config.weather.get(self.weather),
            config.time_of_day.get(self.time_of_day),
            config.site.get(self.site_type),
        ])
    }

    pub fn assessment(&self, criteria: &BogCriteria, config: &MappingConfig) -> BogResult<Assessment> {
        let mut assessment = Assessment::new();

        assessment.add(criteria.population_density, config.map_density(self.population_density)?);
        assessment.add(criteria.road_type, config.road.get(self.road_type));
        assessment.add(criteria.weather, config.weather.get(self.weather));
        assessment.add(criteria.driving_time, config.time_of_day.get(self.time_of_day));
        assessment.add(criteria.site_type, config.site.get(self.site_type));

        Ok(assessment)
    }
}
