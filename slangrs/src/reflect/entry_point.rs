//! Entry point reflection

use super::{Function, Iter, TypeLayout, VariableLayout, str_from};
use slangc::{EntryPointReflection as RawEntryPoint, Handle, SlangUInt};
use std::fmt;
use std::marker::PhantomData;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Stage {
    /// No stage
    None = 0,
    /// Vertex shader
    Vertex = 1,
    /// Hull (tessellation control) shader
    Hull = 2,
    /// Domain (tessellation evaluation) shader
    Domain = 3,
    /// Geometry shader
    Geometry = 4,
    /// Fragment (pixel) shader
    Fragment = 5,
    /// Compute shader
    Compute = 6,
    /// Ray generation
    RayGeneration = 7,
    /// Intersection
    Intersection = 8,
    /// Any hit
    AnyHit = 9,
    /// Closest hit
    ClosestHit = 10,
    /// Miss
    Miss = 11,
    /// Callable
    Callable = 12,
    /// Mesh shader
    Mesh = 13,
    /// Amplification (task) shader
    Amplification = 14,
    /// Dispatch
    Dispatch = 15,
}

impl Stage {
    /// Name as used in `[shader("...")]`
    pub fn name(&self) -> &'static str {
        match self {
            Stage::None => "none",
            Stage::Vertex => "vertex",
            Stage::Hull => "hull",
            Stage::Domain => "domain",
            Stage::Geometry => "geometry",
            Stage::Fragment => "fragment",
            Stage::Compute => "compute",
            Stage::RayGeneration => "raygeneration",
            Stage::Intersection => "intersection",
            Stage::AnyHit => "anyhit",
            Stage::ClosestHit => "closesthit",
            Stage::Miss => "miss",
            Stage::Callable => "callable",
            Stage::Mesh => "mesh",
            Stage::Amplification => "amplification",
            Stage::Dispatch => "dispatch",
        }
    }
}

impl From<u32> for Stage {
    fn from(value: u32) -> Self {
        if value < slangc::SLANG_STAGE_COUNT {
            unsafe { std::mem::transmute::<u32, Stage>(value) }
        } else {
            Stage::None
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout of one entry point in a program
#[derive(Clone, Copy)]
pub struct EntryPointReflection<'a> {
    handle: Handle<RawEntryPoint>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> EntryPointReflection<'a> {
    pub(crate) fn from_handle(handle: Handle<RawEntryPoint>) -> Option<Self> {
        (!handle.is_null()).then_some(EntryPointReflection {
            handle,
            _marker: PhantomData,
        })
    }

    /// Gets the entry point name.
    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::EntryPointReflection_getName(self.handle)) }
    }

    /// Name in the generated code, if it was renamed.
    pub fn name_override(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::EntryPointReflection_getNameOverride(self.handle)) }
    }

    /// Gets the pipeline stage.
    pub fn stage(&self) -> Stage {
        Stage::from(unsafe { slangc::EntryPointReflection_getStage(self.handle) })
    }

    pub fn parameter_count(&self) -> u32 {
        unsafe { slangc::EntryPointReflection_getParameterCount(self.handle) }
    }

    /// Gets an entry point parameter by index.
    pub fn parameter(&self, index: u32) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::EntryPointReflection_getParameterByIndex(self.handle, index) })
    }

    /// Returns an iterator over entry point parameters.
    pub fn parameters(&self) -> Iter<Self, VariableLayout<'a>> {
        Iter::new(*self, self.parameter_count(), |ep, i| ep.parameter(i))
    }

    /// The function declaration behind the entry point.
    pub fn function(&self) -> Option<Function<'a>> {
        Function::from_handle(unsafe { slangc::EntryPointReflection_getFunction(self.handle) })
    }

    /// `[numthreads(x, y, z)]` of a compute entry point.
    pub fn compute_thread_group_size(&self) -> [u64; 3] {
        let mut sizes: [SlangUInt; 3] = [0; 3];
        unsafe { slangc::EntryPointReflection_getComputeThreadGroupSize(self.handle, 3, sizes.as_mut_ptr()) };
        sizes
    }

    /// `[WaveSize(n)]`, if declared.
    pub fn compute_wave_size(&self) -> Option<u64> {
        let mut size: SlangUInt = 0;
        unsafe { slangc::EntryPointReflection_getComputeWaveSize(self.handle, &mut size) };
        (size != 0).then_some(size)
    }

    /// Returns true if any input is sampled per sample.
    pub fn uses_any_sample_rate_input(&self) -> bool {
        unsafe { slangc::EntryPointReflection_usesAnySampleRateInput(self.handle) }
    }

    /// Layout of all entry point parameters as one variable.
    pub fn var_layout(&self) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::EntryPointReflection_getVarLayout(self.handle) })
    }

    pub fn type_layout(&self) -> Option<TypeLayout<'a>> {
        TypeLayout::from_handle(unsafe { slangc::EntryPointReflection_getTypeLayout(self.handle) })
    }

    /// Layout of the return value.
    pub fn result_var_layout(&self) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::EntryPointReflection_getResultVarLayout(self.handle) })
    }

    /// Returns true if uniform parameters were wrapped in a constant buffer.
    pub fn has_default_constant_buffer(&self) -> bool {
        unsafe { slangc::EntryPointReflection_hasDefaultConstantBuffer(self.handle) }
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<RawEntryPoint> {
        self.handle
    }
}

impl fmt::Debug for EntryPointReflection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPointReflection")
            .field("name", &self.name())
            .field("stage", &self.stage())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_from_raw() {
        assert_eq!(Stage::from(slangc::SLANG_STAGE_COMPUTE), Stage::Compute);
        assert_eq!(Stage::from(slangc::SLANG_STAGE_PIXEL), Stage::Fragment);
        assert_eq!(Stage::from(slangc::SLANG_STAGE_DISPATCH), Stage::Dispatch);
        assert_eq!(Stage::from(slangc::SLANG_STAGE_COUNT), Stage::None);
        assert_eq!(Stage::Compute.to_string(), "compute");
    }
}
