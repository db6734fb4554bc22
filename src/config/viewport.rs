//! Page size selection from the terminal width.

use super::loader::{ConfigError, ResolvedConfig};
use crate::model::PageSize;

/// Terminal width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Narrower than the breakpoint.
    Compact,
    /// At or above the breakpoint.
    Wide,
}

/// Page sizes per viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizing {
    compact: PageSize,
    wide: PageSize,
    compact_width: u16,
}

impl PageSizing {
    /// Build from resolved config, rejecting zero page sizes.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` if either page size is zero.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        let compact = PageSize::new(config.compact_page_size).map_err(|e| {
            ConfigError::InvalidValue {
                key: "compact_page_size",
                reason: e.to_string(),
            }
        })?;
        let wide = PageSize::new(config.wide_page_size).map_err(|e| ConfigError::InvalidValue {
            key: "wide_page_size",
            reason: e.to_string(),
        })?;
        Ok(Self {
            compact,
            wide,
            compact_width: config.compact_width,
        })
    }

    /// Classify a terminal width.
    pub fn classify(&self, width: u16) -> ViewportClass {
        if width < self.compact_width {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }

    /// Page size for a terminal `width` columns wide.
    pub fn page_size_for(&self, width: u16) -> PageSize {
        match self.classify(width) {
            ViewportClass::Compact => self.compact,
            ViewportClass::Wide => self.wide,
        }
    }
}
