use crate::core::models::chain::PolymerChain;
use crate::core::models::monomer::Monomer;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Sphere radius for every monomer.
pub const MONOMER_RADIUS: f64 = 0.3;
/// Distance between consecutive monomer centers along the x axis.
pub const MONOMER_SPACING: f64 = 0.8;
/// Base line width of a bond segment before the strength contribution.
pub const BOND_BASE_WIDTH: f64 = 1.0;
/// Line-width gain per unit of bond strength.
pub const BOND_WIDTH_GAIN: f64 = 3.0;
/// Default camera distance along the z axis.
pub const CAMERA_DISTANCE: f64 = 15.0;
/// Default vertical field of view, in degrees.
pub const CAMERA_FOV_DEGREES: f64 = 60.0;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Rgb = Rgb { r: 0, g: 128, b: 0 };
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    /// Display color for a monomer kind.
    pub fn for_monomer(kind: Monomer) -> Rgb {
        match kind {
            Monomer::A => Rgb::RED,
            Monomer::B => Rgb::GREEN,
            Monomer::C => Rgb::BLUE,
        }
    }
}

/// One rendered monomer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonomerSphere {
    pub label: char,
    pub color: Rgb,
    pub center: Point3<f64>,
    pub radius: f64,
}

/// One rendered bond between consecutive monomers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondSegment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Point3<f64>,
    pub fov_degrees: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, CAMERA_DISTANCE),
            fov_degrees: CAMERA_FOV_DEGREES,
        }
    }
}

/// A complete, renderer-agnostic scene for one polymer chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub spheres: Vec<MonomerSphere>,
    pub bonds: Vec<BondSegment>,
    pub camera: Camera,
}

/// Positions a chain along the x axis, centered on the origin.
///
/// Monomer `i` of an `n`-chain sits at `x = SPACING * i - 0.4 * n`; bond
/// widths grow linearly with bond strength.
pub fn layout_chain(chain: &PolymerChain) -> SceneLayout {
    let n = chain.length as f64;
    let x_of = |i: usize| MONOMER_SPACING * i as f64 - 0.4 * n;

    let spheres = chain
        .composition
        .iter()
        .enumerate()
        .map(|(i, &kind)| MonomerSphere {
            label: kind.as_char(),
            color: Rgb::for_monomer(kind),
            center: Point3::new(x_of(i), 0.0, 0.0),
            radius: MONOMER_RADIUS,
        })
        .collect();

    let bonds = chain
        .bond_strengths
        .iter()
        .enumerate()
        .map(|(i, &strength)| BondSegment {
            start: Point3::new(x_of(i), 0.0, 0.0),
            end: Point3::new(x_of(i + 1), 0.0, 0.0),
            width: BOND_BASE_WIDTH + BOND_WIDTH_GAIN * strength,
        })
        .collect();

    SceneLayout {
        spheres,
        bonds,
        camera: Camera::default(),
    }
}
