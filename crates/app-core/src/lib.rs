pub mod command;
pub mod constants;
pub mod error;
pub mod frame;
pub mod instances;
pub mod interaction;
pub mod party;
pub mod pick;
pub mod state;
pub mod walk;
pub mod world;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use command::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use instances::*;
pub use interaction::*;
pub use pick::*;
pub use state::*;
pub use walk::*;
pub use world::*;
