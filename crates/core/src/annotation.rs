//! OCR annotation input model and boundary conversion.
//!
//! The OCR collaborator hands back one of two shapes per text token: a
//! plain record with an explicit min/max box, or a richer object carrying
//! the four corner points of a bounding polygon. Both converge on the one
//! [`Fragment`] type here; shape dispatch never leaks into the layout
//! algorithm.

use serde::Deserialize;

use crate::error::{Result, RosterError};
use crate::utils::Bounds;

/// One OCR-detected text token with its bounding box.
///
/// Immutable once constructed; the extraction stages only regroup
/// references to fragments, never rewrite them.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    text: String,
    bounds: Bounds,
}

impl Fragment {
    /// Builds a fragment from an explicit min/max box.
    pub fn new(text: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            text: text.into(),
            bounds,
        }
    }

    /// Builds a fragment from the corner points of a bounding polygon.
    ///
    /// The box is the min/max hull over the supplied corners, so rotated or
    /// reordered polygons are handled the same way.
    pub fn from_vertices(
        text: impl Into<String>,
        vertices: impl IntoIterator<Item = (f64, f64)>,
    ) -> Result<Self> {
        let text = text.into();
        let bounds = Bounds::from_points(vertices).ok_or_else(|| {
            RosterError::Annotation(format!("annotation {text:?} has an empty bounding polygon"))
        })?;
        Ok(Self { text, bounds })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Raw annotation as serialized by the OCR collaborator.
///
/// `Plain` is the pre-converted `{description, bounds}` record; `Poly` is
/// the engine's native shape with a `boundingPoly` of corner vertices.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawAnnotation {
    Plain {
        description: String,
        bounds: (f64, f64, f64, f64),
    },
    Poly {
        description: String,
        #[serde(rename = "boundingPoly")]
        bounding_poly: BoundingPoly,
    },
}

#[derive(Debug, Deserialize)]
pub struct BoundingPoly {
    pub vertices: Vec<Vertex>,
}

/// A polygon corner. The engine omits zero-valued coordinates from its
/// JSON, so both fields default to 0.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl TryFrom<RawAnnotation> for Fragment {
    type Error = RosterError;

    fn try_from(raw: RawAnnotation) -> Result<Self> {
        match raw {
            RawAnnotation::Plain {
                description,
                bounds: (x_min, x_max, y_min, y_max),
            } => Ok(Fragment::new(
                description,
                Bounds::new(x_min, x_max, y_min, y_max),
            )),
            RawAnnotation::Poly {
                description,
                bounding_poly,
            } => Fragment::from_vertices(
                description,
                bounding_poly.vertices.iter().map(|v| (v.x, v.y)),
            ),
        }
    }
}

/// Parses a JSON array of OCR annotations in either collaborator shape
/// (the two shapes may be mixed within one array).
pub fn fragments_from_json(data: &str) -> Result<Vec<Fragment>> {
    let raw: Vec<RawAnnotation> =
        serde_json::from_str(data).map_err(|e| RosterError::Annotation(e.to_string()))?;
    raw.into_iter().map(Fragment::try_from).collect()
}
