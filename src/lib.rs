//! Script-callable vector and sequence maths for virtual world hosts.
//!
//! Scripting environments embedded in world simulators often lack syntax for
//! elementwise vector products, quotients and rounding, and have no cheap way
//! to sample long Fibonacci runs. This crate supplies those helpers as pure
//! functions, plus a [`registry::FunctionRegistry`] boundary through which a
//! host exposes them to scripts by name along with a small set of read-only
//! constants.
pub mod constants;
pub mod fibonacci;
pub mod logging;
pub mod numeric;
pub mod registry;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use fibonacci::sequence as fibonacci_sequence;
pub use logging::init as init_logging;
pub use registry::{
    register_module, CallError, FunctionRegistry, HostId, ModuleConfig, ScriptContext, ScriptId,
    ScriptValue,
};
pub use vector_math::{
    ceil, component_max, component_min, divide, floor, multiply, round, volume,
};
