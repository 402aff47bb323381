use super::Viewport;

/// Column-major 4×4 matrix, laid out the way WGSL reads `mat4x4<f32>`.
pub type Mat4 = [[f32; 4]; 4];

/// Orthographic projection mapping `[left, right] × [bottom, top]` to NDC.
///
/// Matches the OpenGL convention (`z` mapped from `[near, far]` to `[-1, 1]`);
/// geometry drawn at `z = 0` lands on the `z = 0` plane either way. Passing
/// `bottom = height, top = 0` yields window coordinates with +Y down.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = right - left;
    let tb = top - bottom;
    let depth = far - near;

    [
        [2.0 / rl, 0.0, 0.0, 0.0],
        [0.0, 2.0 / tb, 0.0, 0.0],
        [0.0, 0.0, -2.0 / depth, 0.0],
        [-(right + left) / rl, -(top + bottom) / tb, -(far + near) / depth, 1.0],
    ]
}

/// Window-pixel projection for the current viewport (origin top-left, +Y
/// down).
///
/// Built from the live size every frame, so geometry keeps its pixel size
/// when the window is resized instead of stretching with it.
#[inline]
pub fn window_ortho(viewport: Viewport) -> Mat4 {
    ortho(0.0, viewport.width, viewport.height, 0.0, -1.0, 1.0)
}
