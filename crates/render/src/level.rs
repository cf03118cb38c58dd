use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Interleaved position + texture coordinate, ready for a vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LevelVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

const fn v(position: [f32; 3], uv: [f32; 2]) -> LevelVertex {
    LevelVertex { position, uv }
}

/// 20×20 floor quad at y = 0, texture tiled 5×5.
static FLOOR_VERTICES: [LevelVertex; 6] = [
    v([-10.0, 0.0, -10.0], [0.0, 0.0]),
    v([10.0, 0.0, -10.0], [5.0, 0.0]),
    v([10.0, 0.0, 10.0], [5.0, 5.0]),
    v([10.0, 0.0, 10.0], [5.0, 5.0]),
    v([-10.0, 0.0, 10.0], [0.0, 5.0]),
    v([-10.0, 0.0, -10.0], [0.0, 0.0]),
];

/// 20×4 wall quad in the local XY plane, texture tiled 5×1.
static WALL_VERTICES: [LevelVertex; 6] = [
    v([-10.0, 0.0, 0.0], [0.0, 0.0]),
    v([10.0, 0.0, 0.0], [5.0, 0.0]),
    v([10.0, 4.0, 0.0], [5.0, 1.0]),
    v([10.0, 4.0, 0.0], [5.0, 1.0]),
    v([-10.0, 4.0, 0.0], [0.0, 1.0]),
    v([-10.0, 0.0, 0.0], [0.0, 0.0]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Floor,
    Wall,
}

/// One drawable: a shared mesh placed by a model matrix.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub kind: SurfaceKind,
    pub translation: Vec3,
    /// Rotation about +Y in degrees.
    pub yaw_degrees: f32,
}

impl Surface {
    /// Translate, then rotate about +Y.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_y(self.yaw_degrees.to_radians())
    }

    pub fn vertices(&self) -> &'static [LevelVertex] {
        match self.kind {
            SurfaceKind::Floor => &FLOOR_VERTICES,
            SurfaceKind::Wall => &WALL_VERTICES,
        }
    }
}

/// The static scene: one floor and four walls around it.
#[derive(Debug, Clone)]
pub struct Level {
    pub surfaces: Vec<Surface>,
    /// RGBA clear color.
    pub clear_color: [f32; 4],
}

impl Level {
    /// Walled 20×20 arena centred on the origin.
    pub fn arena() -> Self {
        let floor = Surface {
            kind: SurfaceKind::Floor,
            translation: Vec3::ZERO,
            yaw_degrees: 0.0,
        };
        let walls = [
            (Vec3::new(0.0, 0.0, -10.0), 0.0),
            (Vec3::new(10.0, 0.0, 0.0), 90.0),
            (Vec3::new(0.0, 0.0, 10.0), 180.0),
            (Vec3::new(-10.0, 0.0, 0.0), 270.0),
        ]
        .map(|(translation, yaw_degrees)| Surface {
            kind: SurfaceKind::Wall,
            translation,
            yaw_degrees,
        });

        // Sky blue (217, 234, 250), offset by one and scaled by 1/256.
        let sky = [217.0_f32, 234.0, 250.0].map(|c| (c + 1.0) / 256.0);

        Self {
            surfaces: std::iter::once(floor).chain(walls).collect(),
            clear_color: [sky[0], sky[1], sky[2], 1.0],
        }
    }

    pub fn floor(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.iter().filter(|s| s.kind == SurfaceKind::Floor)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.iter().filter(|s| s.kind == SurfaceKind::Wall)
    }

    pub fn floor_vertex_bytes() -> &'static [u8] {
        bytemuck::cast_slice(&FLOOR_VERTICES)
    }

    pub fn wall_vertex_bytes() -> &'static [u8] {
        bytemuck::cast_slice(&WALL_VERTICES)
    }
}
