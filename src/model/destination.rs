//! Outline destination records.

use serde::{Deserialize, Serialize};

/// Where an outline entry points to on its target page.
///
/// Mirrors the explicit destination forms of the PDF format
/// (`[page /XYZ left top zoom]`, `[page /FitH top]`, ...). Coordinates
/// written as `null` in the file are kept as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Destination {
    /// Position the page at (left, top) with the given zoom.
    Xyz {
        left: Option<f32>,
        top: Option<f32>,
        zoom: Option<f32>,
    },
    /// Fit the whole page in the window.
    Fit,
    /// Fit the page width, with `top` at the top of the window.
    FitH { top: Option<f32> },
    /// Fit the page height, with `left` at the left edge.
    FitV { left: Option<f32> },
    /// Fit the given rectangle in the window.
    FitR {
        left: Option<f32>,
        bottom: Option<f32>,
        right: Option<f32>,
        top: Option<f32>,
    },
    /// Fit the page bounding box.
    FitB,
    /// Fit the bounding box width.
    FitBH { top: Option<f32> },
    /// Fit the bounding box height.
    FitBV { left: Option<f32> },
}

impl Destination {
    /// Build a destination from its kind name and numeric parameters.
    ///
    /// `params` are the array elements following the kind name. Missing
    /// trailing parameters are treated as `null`. Returns `None` for an
    /// unknown kind.
    pub fn from_kind(kind: &str, params: &[Option<f32>]) -> Option<Self> {
        let arg = |i: usize| params.get(i).copied().flatten();

        let dest = match kind {
            "XYZ" => Destination::Xyz {
                left: arg(0),
                top: arg(1),
                zoom: arg(2),
            },
            "Fit" => Destination::Fit,
            "FitH" => Destination::FitH { top: arg(0) },
            "FitV" => Destination::FitV { left: arg(0) },
            "FitR" => Destination::FitR {
                left: arg(0),
                bottom: arg(1),
                right: arg(2),
                top: arg(3),
            },
            "FitB" => Destination::FitB,
            "FitBH" => Destination::FitBH { top: arg(0) },
            "FitBV" => Destination::FitBV { left: arg(0) },
            _ => return None,
        };
        Some(dest)
    }

    /// Vertical offset on the target page, used as the paragraph position hint.
    ///
    /// Only `XYZ` destinations carry one; every other form yields `None`.
    pub fn vertical_offset(&self) -> Option<f32> {
        match self {
            Destination::Xyz { top, .. } => *top,
            _ => None,
        }
    }
}
