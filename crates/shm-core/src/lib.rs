pub mod clock;
pub mod constants;
pub mod derivation;
pub mod kinematics;
pub mod scene;
pub mod state;
pub mod waveform;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use clock::*;
pub use constants::*;
pub use derivation::*;
pub use kinematics::*;
pub use scene::*;
pub use state::*;
pub use waveform::*;
