pub mod assets;
pub mod camera;
pub mod core;
pub mod loading;
pub mod render;
pub mod scene;
pub mod systems;
