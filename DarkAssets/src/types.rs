//! Progress reporting for the pre-build step

/// Receives one [`BuildProgress`] per color or listed image, then a final
/// [`BuildPhase::Complete`]
pub type BuildProgressCallback<'a> = &'a (dyn Fn(&BuildProgress) + Sync + Send);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildProgress {
    pub phase: BuildPhase,
    /// 1-based position within the phase
    pub current: usize,
    pub total: usize,
    /// Color name or source image filename
    pub item: Option<String>,
}

impl BuildProgress {
    #[must_use]
    pub fn new(phase: BuildPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            item: None,
        }
    }

    /// Update naming the color or image being handled
    #[must_use]
    pub fn with_item(phase: BuildPhase, current: usize, total: usize, item: impl Into<String>) -> Self {
        Self {
            item: Some(item.into()),
            ..Self::new(phase, current, total)
        }
    }
}

/// Stage of the pre-build step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// Writing `.colorset` directories
    Colors,
    /// Copying dark images and appending their `.imageset` entries
    Images,
    Complete,
}

impl BuildPhase {
    /// Spinner label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colors => "Generating color sets",
            Self::Images => "Linking dark images",
            Self::Complete => "Complete",
        }
    }
}
