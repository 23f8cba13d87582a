/// Normal shading for the decorative logo
use bevy::{
    pbr::{MaterialPipeline, MaterialPipelineKey},
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
        },
    },
};

const NORMAL_DEBUG_SHADER_PATH: &str = "shaders/normal_debug.wgsl";

/// Colours each fragment by its view-space normal, drawn from both sides.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct NormalDebugMaterial {
    /// Blend of the normal colour towards this tint, `w` is the blend weight.
    #[uniform(0)]
    pub tint: Vec4,
}

impl Material for NormalDebugMaterial {
    fn fragment_shader() -> ShaderRef {
        NORMAL_DEBUG_SHADER_PATH.into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

/// Shared handle applied to every logo leaf after load.
#[derive(Resource, Debug, Clone, Default)]
pub struct LogoMaterial(pub Handle<NormalDebugMaterial>);
