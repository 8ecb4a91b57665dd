use skyward_math::{Euler, Quat, Vec3};

/// Anything a controller can move: a camera or a scene node
///
/// Allows the controllers to work with different pose implementations.
pub trait ControlTarget {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn rotation(&self) -> Euler;
    fn set_rotation(&mut self, rotation: Euler);

    /// Current orientation as a quaternion
    fn orientation(&self) -> Quat {
        self.rotation().to_quat()
    }
}
