//! Configuration types for Trellis layout computation.
//!
//! This module provides configuration structures that control the layout
//! heuristics and the shape of CLI reports. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and output settings.
//! - [`LayoutConfig`] - Tunable knobs of the layout heuristics.
//! - [`OutputConfig`] - Controls what the CLI layout report includes.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().orbit_distance(), 2);
//! ```

use serde::Deserialize;

/// Top-level application configuration combining layout and output settings.
///
/// Groups [`LayoutConfig`] and [`OutputConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and output configurations.
    pub fn new(layout: LayoutConfig, output: OutputConfig) -> Self {
        Self { layout, output }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Tunable knobs of the layout heuristics.
///
/// The placement rules themselves are fixed (they are what make the output
/// reproducible across runs and machines); this only exposes the acceptance
/// bounds the heuristics consult.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Manhattan radius around the hub table that internal tables prefer
    /// to fill before overflowing row-major.
    #[serde(default = "default_orbit_distance")]
    orbit_distance: u32,
}

fn default_orbit_distance() -> u32 {
    2
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orbit_distance: default_orbit_distance(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified orbit distance.
    pub fn new(orbit_distance: u32) -> Self {
        Self { orbit_distance }
    }

    /// Returns the near-hub acceptance bound for internal table fill.
    pub fn orbit_distance(&self) -> u32 {
        self.orbit_distance
    }
}

/// Controls what the CLI layout report includes.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Whether the report includes per-domain table grids in addition to
    /// the domain grid.
    #[serde(default = "default_include_table_grids")]
    include_table_grids: bool,
}

fn default_include_table_grids() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_table_grids: default_include_table_grids(),
        }
    }
}

impl OutputConfig {
    /// Returns whether per-domain table grids are included in reports.
    pub fn include_table_grids(&self) -> bool {
        self.include_table_grids
    }
}
