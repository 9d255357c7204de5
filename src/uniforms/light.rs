//! Light descriptions and their flattened shader-facing layout.
//!
//! Shaders consume lights as parallel arrays sized to the light count, so
//! [`LightArray`] flattens a list of [`Light`]s once at construction instead
//! of re-packing every frame.

use cgmath::Vector3;

/// Shader-side light kind. Discriminants are part of the shader contract and
/// must match the integer constants compiled into the programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum LightType {
    Sunlight = 0,
    Ambient = 1,
    Point = 2,
    Spot = 3,
}

/// One light source.
#[derive(Clone, Debug)]
pub struct Light {
    pub position: Vector3<f32>,
    pub color: [f32; 3],
    pub specular: [f32; 3],
    pub intensity: f32,
    /// Constant, linear and quadratic attenuation terms.
    pub attenuation: Vector3<f32>,
    pub light_type: LightType,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vector3::new(1.0, 1.0, 1.0),
            color: [1.0, 1.0, 1.0],
            specular: [0.6, 0.6, 0.6],
            intensity: 1.0,
            attenuation: Vector3::new(1.0, 0.0, 0.0),
            light_type: LightType::Sunlight,
        }
    }
}

/// Lights flattened into the parallel arrays the uniform interface expects.
#[derive(Clone, Debug)]
pub struct LightArray {
    pub len: usize,
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub speculars: Vec<f32>,
    pub intensities: Vec<f32>,
    pub attenuations: Vec<f32>,
    pub types: Vec<i32>,
}

impl LightArray {
    pub fn new(lights: &[Light]) -> Self {
        let len = lights.len();
        let mut array = Self {
            len,
            positions: Vec::with_capacity(len * 3),
            colors: Vec::with_capacity(len * 3),
            speculars: Vec::with_capacity(len * 3),
            intensities: Vec::with_capacity(len),
            attenuations: Vec::with_capacity(len * 3),
            types: Vec::with_capacity(len),
        };
        for light in lights {
            array
                .positions
                .extend_from_slice(&[light.position.x, light.position.y, light.position.z]);
            array.colors.extend_from_slice(&light.color);
            array.speculars.extend_from_slice(&light.specular);
            array.intensities.push(light.intensity);
            array.attenuations.extend_from_slice(&[
                light.attenuation.x,
                light.attenuation.y,
                light.attenuation.z,
            ]);
            array.types.push(light.light_type as i32);
        }
        array
    }

    pub fn position_at(&self, i: usize) -> Vector3<f32> {
        let offset = i * 3;
        Vector3::new(
            self.positions[offset],
            self.positions[offset + 1],
            self.positions[offset + 2],
        )
    }

    pub fn set_position_at(&mut self, i: usize, position: Vector3<f32>) {
        let offset = i * 3;
        self.positions[offset] = position.x;
        self.positions[offset + 1] = position.y;
        self.positions[offset + 2] = position.z;
    }
}
