//! Orbit camera with damping, circling a target point.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

/// Radians of orbit per pixel of mouse drag
const ROTATE_SPEED: f32 = 0.005;

/// Fraction of pending motion applied (and removed) each frame
const DAMPING_FACTOR: f32 = 0.05;

/// Zoom multiplier per scroll line
const ZOOM_STEP: f32 = 0.95;

const MIN_RADIUS: f32 = 0.2;
const MAX_RADIUS: f32 = 50.0;

/// Keeps the camera off the poles where `look_at` degenerates
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit camera in spherical coordinates around `target`
///
/// Input accumulates as pending yaw/pitch/zoom; `update` bleeds a fixed
/// fraction of it into the pose every frame, so motion eases out after
/// the mouse stops.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    radius: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
}

impl OrbitCamera {
    /// Place the camera at `eye`, orbiting `target`
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().clamp(MIN_RADIUS, MAX_RADIUS);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_PITCH, MAX_PITCH);

        Self {
            target,
            yaw,
            pitch,
            radius,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(Vec3::from_array(config.camera_position), Vec3::ZERO)
    }

    /// Queue an orbit from a mouse drag (pixels)
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_yaw -= dx * ROTATE_SPEED;
        self.pending_pitch += dy * ROTATE_SPEED;
    }

    /// Queue a zoom; positive `lines` moves closer
    pub fn zoom(&mut self, lines: f32) {
        self.pending_zoom += lines;
    }

    /// Apply damped motion; call once per frame
    pub fn update(&mut self) {
        let yaw = self.pending_yaw * DAMPING_FACTOR;
        let pitch = self.pending_pitch * DAMPING_FACTOR;
        let zoom = self.pending_zoom * DAMPING_FACTOR;

        self.yaw += yaw;
        self.pitch = (self.pitch + pitch).clamp(-MAX_PITCH, MAX_PITCH);
        self.radius = (self.radius * ZOOM_STEP.powf(zoom)).clamp(MIN_RADIUS, MAX_RADIUS);

        self.pending_yaw -= yaw;
        self.pending_pitch -= pitch;
        self.pending_zoom -= zoom;
    }

    /// Current eye position
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, config: &RenderConfig) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            config.fov_degrees.to_radians(),
            config.aspect_ratio(),
            config.near_plane,
            config.far_plane,
        );
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_eye_roundtrips_initial_position() {
        let camera = OrbitCamera::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
        assert_vec_close(camera.eye(), Vec3::new(1.0, 1.0, 1.0));
        assert!((camera.radius() - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_damping_eases_toward_requested_orbit() {
        let mut camera = OrbitCamera::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);
        let start = camera.eye();

        camera.rotate(100.0, 0.0);
        camera.update();
        let first = camera.eye();
        camera.update();
        let second = camera.eye();

        assert_ne!(first, start);
        // Each step moves less than the one before
        assert!((second - first).length() < (first - start).length());
        // Orbiting keeps the distance to the target
        assert!((second.length() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = OrbitCamera::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
        camera.rotate(0.0, 1.0e6);
        for _ in 0..500 {
            camera.update();
        }
        let eye = camera.eye();
        assert!(eye.is_finite());
        assert!(eye.y < camera.radius());
    }

    #[test]
    fn test_zoom_stays_in_bounds() {
        let mut camera = OrbitCamera::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
        camera.zoom(10_000.0);
        for _ in 0..500 {
            camera.update();
        }
        assert!(camera.radius() >= MIN_RADIUS);

        camera.zoom(-1.0e6);
        for _ in 0..500 {
            camera.update();
        }
        assert!(camera.radius() <= MAX_RADIUS);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = OrbitCamera::from_config(&RenderConfig::default());
        let view_proj = camera.view_proj(&RenderConfig::default());

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert!(view_proj.is_finite());
    }
}
