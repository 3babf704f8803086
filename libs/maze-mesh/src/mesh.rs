//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles and the per-vertex
//! attributes a renderer needs: UVs, normals and tangents.

use glam::{DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::ops::tangents;

/// A triangle mesh with vertices, indices and optional vertex attributes.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens through the `*_f32` helpers for GPU upload.
///
/// # Example
///
/// ```rust
/// use maze_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 1.0));
/// mesh.add_triangle(0, 2, 1);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional texture coordinates
    uvs: Option<Vec<DVec2>>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
    /// Optional tangents, handedness in `w`
    tangents: Option<Vec<DVec4>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Sets texture coordinates, one per vertex.
    pub fn set_uvs(&mut self, uvs: Vec<DVec2>) {
        self.uvs = Some(uvs);
    }

    /// Returns the texture coordinates.
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the vertex tangents.
    pub fn tangents(&self) -> Option<&[DVec4]> {
        self.tangents.as_deref()
    }

    /// Computes and sets area-weighted normals for each vertex.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            let normal = edge1.cross(edge2);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        // Normalize
        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes and sets tangents from positions, UVs and normals.
    ///
    /// Missing UVs are treated as all-zero and missing normals are computed
    /// first, so the result always has one tangent per vertex.
    pub fn compute_tangents(&mut self) {
        if self.normals.is_none() {
            self.compute_normals();
        }
        let zero_uvs;
        let uvs = match &self.uvs {
            Some(uvs) => uvs.as_slice(),
            None => {
                zero_uvs = vec![DVec2::ZERO; self.vertices.len()];
                zero_uvs.as_slice()
            }
        };
        let normals = self.normals.as_deref().unwrap_or_default();
        let computed = tangents::compute_tangents(&self.vertices, uvs, normals, &self.triangles);
        self.tangents = Some(computed);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Merges another mesh into this one.
    ///
    /// Triangle indices of `other` are offset past this mesh's vertices.
    /// An attribute survives the merge only when both meshes carry it,
    /// except that merging into an empty mesh adopts `other`'s attributes.
    pub fn merge(&mut self, other: &Mesh) {
        let was_empty = self.is_empty() && self.triangles.is_empty();
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles.push([
                tri[0] + offset,
                tri[1] + offset,
                tri[2] + offset,
            ]);
        }

        merge_attribute(&mut self.uvs, other.uvs.as_deref(), was_empty);
        merge_attribute(&mut self.normals, other.normals.as_deref(), was_empty);
        merge_attribute(&mut self.tangents, other.tangents.as_deref(), was_empty);
    }

    /// Merges any number of meshes into one surface, in iteration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use maze_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut part = Mesh::new();
    /// part.add_vertex(DVec3::ZERO);
    /// part.add_vertex(DVec3::X);
    /// part.add_vertex(DVec3::Z);
    /// part.add_triangle(0, 2, 1);
    ///
    /// let surface = Mesh::merge_all([&part, &part]);
    /// assert_eq!(surface.vertex_count(), 6);
    /// assert_eq!(surface.triangle(1), [3, 5, 4]);
    /// ```
    pub fn merge_all<'a>(meshes: impl IntoIterator<Item = &'a Mesh>) -> Mesh {
        let mut merged = Mesh::new();
        for mesh in meshes {
            merged.merge(mesh);
        }
        merged
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    /// - Every present attribute has one entry per vertex
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let indices_valid = self.triangles.iter().all(|tri| {
            tri.iter().all(|&index| index < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        });

        let attribute_lengths_valid = [
            self.uvs.as_ref().map(Vec::len),
            self.normals.as_ref().map(Vec::len),
            self.tangents.as_ref().map(Vec::len),
        ]
        .into_iter()
        .flatten()
        .all(|len| len == self.vertices.len());

        indices_valid && attribute_lengths_valid
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.as_vec3().to_array())
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals
            .as_ref()
            .map(|normals| normals.iter().flat_map(|n| n.as_vec3().to_array()).collect())
    }

    /// Exports UVs as f32 array for GPU.
    pub fn uvs_f32(&self) -> Option<Vec<f32>> {
        self.uvs
            .as_ref()
            .map(|uvs| uvs.iter().flat_map(|uv| uv.as_vec2().to_array()).collect())
    }

    /// Exports tangents as f32 array for GPU, four components per vertex.
    pub fn tangents_f32(&self) -> Option<Vec<f32>> {
        self.tangents
            .as_ref()
            .map(|tangents| tangents.iter().flat_map(|t| t.as_vec4().to_array()).collect())
    }
}

fn merge_attribute<T: Copy>(own: &mut Option<Vec<T>>, other: Option<&[T]>, adopt: bool) {
    match (own.as_mut(), other) {
        (Some(values), Some(incoming)) => values.extend_from_slice(incoming),
        (None, Some(incoming)) if adopt => *own = Some(incoming.to_vec()),
        _ => *own = None,
    }
}
