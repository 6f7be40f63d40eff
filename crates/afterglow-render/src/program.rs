//! WGSL program sources and their compile/link checks.
//!
//! Sources are parsed and validated with naga, the same front end wgpu runs
//! internally, so a bad program is reported with its diagnostic text before any
//! GPU object is created.

use std::borrow::Cow;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::error::{DriverError, ShaderStage};

/// Vertex stage of the sunset program.
pub const VERTEX_SOURCE: &str = include_str!("shaders/afterglow.vert.wgsl");
/// Fragment stage of the sunset program.
pub const FRAGMENT_SOURCE: &str = include_str!("shaders/afterglow.frag.wgsl");

/// Entry point expected in the vertex stage.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Entry point expected in the fragment stage.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// WGSL text for both stages of a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramSource {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ProgramSource {
    pub fn new(vertex: impl Into<Cow<'static, str>>, fragment: impl Into<Cow<'static, str>>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// The built-in sunset program.
    pub fn afterglow() -> Self {
        Self::new(VERTEX_SOURCE, FRAGMENT_SOURCE)
    }
}

impl Default for ProgramSource {
    fn default() -> Self {
        Self::afterglow()
    }
}

/// A program whose stages parsed, validated and linked.
#[derive(Clone, Debug)]
pub struct CompiledProgram {
    pub source: ProgramSource,
}

/// Compile both stages and check that they link into a drawable program.
pub fn compile(source: &ProgramSource) -> Result<CompiledProgram, DriverError> {
    let vertex = compile_stage(ShaderStage::Vertex, &source.vertex)?;
    let fragment = compile_stage(ShaderStage::Fragment, &source.fragment)?;
    link(&vertex, &fragment)?;
    log::debug!("Program compiled and linked");
    Ok(CompiledProgram {
        source: source.clone(),
    })
}

/// Parse and validate one stage.
pub fn compile_stage(stage: ShaderStage, source: &str) -> Result<naga::Module, DriverError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|err| {
        DriverError::ProgramCompile {
            stage,
            log: err.emit_to_string(source),
        }
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|err| DriverError::ProgramCompile {
            stage,
            log: err.emit_to_string(source),
        })?;

    Ok(module)
}

/// Check entry points and the frame uniform binding across both stages.
pub fn link(vertex: &naga::Module, fragment: &naga::Module) -> Result<(), DriverError> {
    require_entry(vertex, VERTEX_ENTRY, naga::ShaderStage::Vertex)?;
    require_entry(fragment, FRAGMENT_ENTRY, naga::ShaderStage::Fragment)?;

    let has_frame_uniforms = fragment.global_variables.iter().any(|(_, var)| {
        var.space == naga::AddressSpace::Uniform
            && var
                .binding
                .as_ref()
                .is_some_and(|b| b.group == 0 && b.binding == 0)
    });
    if !has_frame_uniforms {
        return Err(DriverError::ProgramLink {
            log: "fragment stage does not declare a uniform block at @group(0) @binding(0)"
                .to_string(),
        });
    }
    Ok(())
}

fn require_entry(
    module: &naga::Module,
    name: &str,
    stage: naga::ShaderStage,
) -> Result<(), DriverError> {
    if module
        .entry_points
        .iter()
        .any(|ep| ep.name == name && ep.stage == stage)
    {
        Ok(())
    } else {
        Err(DriverError::ProgramLink {
            log: format!("missing {stage:?} entry point `{name}`"),
        })
    }
}
