//! Generation requests and the input boundary that builds them.
//!
//! Form values arrive as loose strings (a text field, a slider, two
//! dropdowns). This module turns them into an immutable
//! [`GenerationRequest`], applying the documented defaults, so nothing
//! downstream ever sees a missing or non-numeric value.
//!
//! ```
//! use floorplan_logic::request::{PlanConfig, validate_plan_config};
//!
//! let mut config = PlanConfig::default();
//! config.project_name = "Moda Konutları".to_string();
//! config.apartment_type = "3+1".to_string();
//! config.total_area = 140;
//! assert!(validate_plan_config(&config).is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::layout::Orientation;
use crate::template;

/// Everything one pipeline run needs. Built fresh on every trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub apartment_type: String,
    pub total_area: u32,
    pub street_facing: u32,
}

impl GenerationRequest {
    pub fn new(apartment_type: impl Into<String>, total_area: u32, street_facing: u32) -> Self {
        Self {
            apartment_type: apartment_type.into(),
            total_area,
            street_facing,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_street_facing(self.street_facing)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(
            defaults::APARTMENT_TYPE,
            defaults::TOTAL_AREA,
            defaults::STREET_FACING,
        )
    }
}

/// Parse a positive integer the way a lenient form field would: leading
/// digits count, anything else (or zero) is treated as missing.
pub fn parse_positive(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<u32>().ok().filter(|v| *v > 0)
}

/// Raw form state, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInputs {
    pub apartment_type: String,
    pub total_area: String,
    pub street_facing: String,
}

impl RawInputs {
    /// Apply defaults (area → 75, facing → 1), cap the area at
    /// [`defaults::AREA_CAP`] and freeze into a request.
    pub fn into_request(self) -> GenerationRequest {
        let total_area = parse_positive(&self.total_area)
            .map(|a| a.min(defaults::AREA_CAP))
            .unwrap_or(defaults::TOTAL_AREA);
        let street_facing =
            parse_positive(&self.street_facing).unwrap_or(defaults::STREET_FACING);
        GenerationRequest {
            apartment_type: self.apartment_type.trim().to_string(),
            total_area,
            street_facing,
        }
    }
}

/// The paired area text field and slider. Writing either updates both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaInput {
    text: String,
    slider: u32,
}

impl Default for AreaInput {
    fn default() -> Self {
        Self::from_value(defaults::TOTAL_AREA)
    }
}

impl AreaInput {
    pub fn from_value(value: u32) -> Self {
        Self {
            text: value.to_string(),
            slider: clamp_slider(value),
        }
    }

    /// Text field edited. The slider follows whenever the text parses.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        if let Some(v) = parse_positive(text) {
            self.slider = clamp_slider(v);
        }
    }

    /// Slider dragged. The text field mirrors the slider value.
    pub fn set_slider(&mut self, value: u32) {
        self.slider = clamp_slider(value);
        self.text = self.slider.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slider(&self) -> u32 {
        self.slider
    }
}

fn clamp_slider(value: u32) -> u32 {
    value.clamp(defaults::AREA_MIN, defaults::AREA_MAX)
}

// ── Plan configuration ─────────────────────────────────────────────────

/// User-editable plan configuration, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub project_name: String,
    pub apartment_type: String,
    pub total_area: u32,
    pub street_facing: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            apartment_type: defaults::APARTMENT_TYPE.to_string(),
            total_area: defaults::TOTAL_AREA,
            street_facing: defaults::STREET_FACING,
        }
    }
}

impl PlanConfig {
    /// Freeze into a request. Zero values take the defaults.
    pub fn to_request(&self) -> GenerationRequest {
        RawInputs {
            apartment_type: self.apartment_type.clone(),
            total_area: self.total_area.to_string(),
            street_facing: self.street_facing.to_string(),
        }
        .into_request()
    }
}

/// Advisory configuration problems. Generation proceeds regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanConfigError {
    /// Area outside the slider range.
    AreaOutOfRange(u32),
    /// Street facing must be at least 1.
    InvalidFacing(u32),
    /// Label not in the template table; "2+1" will be used.
    UnknownApartmentType(String),
    /// Project name blank; exports use the default file name.
    EmptyProjectName,
}

impl fmt::Display for PlanConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanConfigError::AreaOutOfRange(a) => write!(
                f,
                "total area {} m² outside {}..={}",
                a,
                defaults::AREA_MIN,
                defaults::AREA_MAX
            ),
            PlanConfigError::InvalidFacing(n) => write!(f, "street facing count {} is invalid", n),
            PlanConfigError::UnknownApartmentType(t) => {
                write!(f, "unknown apartment type {:?}, using 2+1", t)
            }
            PlanConfigError::EmptyProjectName => write!(f, "project name is empty"),
        }
    }
}

impl std::error::Error for PlanConfigError {}

/// Validate a plan configuration, returning all problems found.
pub fn validate_plan_config(config: &PlanConfig) -> Vec<PlanConfigError> {
    let mut errors = Vec::new();

    if !(defaults::AREA_MIN..=defaults::AREA_MAX).contains(&config.total_area) {
        errors.push(PlanConfigError::AreaOutOfRange(config.total_area));
    }
    if config.street_facing == 0 {
        errors.push(PlanConfigError::InvalidFacing(config.street_facing));
    }
    if !template::is_known_type(&config.apartment_type) {
        errors.push(PlanConfigError::UnknownApartmentType(
            config.apartment_type.clone(),
        ));
    }
    if config.project_name.trim().is_empty() {
        errors.push(PlanConfigError::EmptyProjectName);
    }

    errors
}
