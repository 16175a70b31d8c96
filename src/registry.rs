//! Invocation boundary between a scripting host and the maths helpers.
//!
//! The host owns script discovery and lifecycle; this module gives it a
//! [`FunctionRegistry`] value mapping script-visible names to dispatch
//! functions and named read-only constants. Dispatch validates the call
//! shape (name, arity, argument types) and hands validated values to the
//! pure helpers in [`crate::vector_math`] and [`crate::fibonacci`]. The
//! maths functions themselves are total; only a malformed call can fault.

use glam::DVec3;
use hashbrown::HashMap;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{PHI, PHI_BY_TWO, TAU, TAU_BY_TWO, TWO_PHI, TWO_TAU};
use crate::{fibonacci, vector_math};

/// Opaque identity of the object hosting a calling script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(pub u128);

impl From<u128> for HostId {
    fn from(id: u128) -> Self {
        Self(id)
    }
}

/// Opaque identity of the calling script itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptId(pub u128);

impl From<u128> for ScriptId {
    fn from(id: u128) -> Self {
        Self(id)
    }
}

/// Caller identity attached to every invocation.
///
/// Both tokens exist for the host's authorisation and bookkeeping. The maths
/// functions accept them and ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptContext {
    /// Object the calling script is attached to.
    pub host: HostId,
    /// The calling script.
    pub script: ScriptId,
}

/// A typed value crossing the invocation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    /// A floating-point scalar.
    Float(f64),
    /// An integer scalar.
    Integer(i64),
    /// A 3-component vector.
    Vector(DVec3),
    /// An ordered list of integers.
    List(Vec<i64>),
}

/// Rejection of a malformed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// No function is registered under the requested name.
    #[error("no script function named `{0}` is registered")]
    UnknownFunction(String),
    /// The function exists but received the wrong number of arguments.
    #[error("`{name}` expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Script-visible name of the function.
        name: &'static str,
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments supplied by the caller.
        actual: usize,
    },
    /// An argument had an incompatible type.
    #[error("`{name}` argument {index} must be {expected}")]
    ArgumentType {
        /// Script-visible name of the function.
        name: &'static str,
        /// Zero-based position of the offending argument.
        index: usize,
        /// Description of the accepted type.
        expected: &'static str,
    },
}

/// Signature shared by every registered dispatch function.
pub type ScriptFn = fn(&ScriptContext, &[ScriptValue]) -> Result<ScriptValue, CallError>;

/// Configuration for the maths module.
///
/// Hosts typically deserialize this from their own configuration tree. The
/// module stays inert unless explicitly enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModuleConfig {
    /// Whether [`register_module`] installs anything at all. Defaults to
    /// `false`.
    pub enabled: bool,
}

impl ModuleConfig {
    /// Parses a configuration fragment from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error when `text` is not a valid
    /// configuration document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Registry mapping script-visible names to functions and constants.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, ScriptFn>,
    constants: HashMap<&'static str, f64>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `function` under `name`, replacing any previous registration.
    pub fn register_function(&mut self, name: &'static str, function: ScriptFn) {
        self.functions.insert(name, function);
    }

    /// Surfaces `value` to scripts as the read-only constant `name`.
    pub fn register_constant(&mut self, name: &'static str, value: f64) {
        self.constants.insert(name, value);
    }

    /// Looks up a registered constant.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Returns `true` when no functions or constants are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.constants.is_empty()
    }

    /// Dispatches a call to the function registered under `name`.
    ///
    /// # Errors
    ///
    /// [`CallError::UnknownFunction`] when nothing is registered under
    /// `name`; otherwise whatever call-shape fault the dispatch reports.
    pub fn call(
        &self,
        ctx: &ScriptContext,
        name: &str,
        args: &[ScriptValue],
    ) -> Result<ScriptValue, CallError> {
        let Some(function) = self.functions.get(name) else {
            return Err(CallError::UnknownFunction(name.to_owned()));
        };
        function(ctx, args)
    }
}

/// Installs the maths functions and constants when `config` enables them.
///
/// Mirrors a host module coming online: a disabled module logs the fact and
/// leaves the registry untouched.
pub fn register_module(registry: &mut FunctionRegistry, config: &ModuleConfig) {
    if !config.enabled {
        info!("maths module disabled; nothing registered");
        return;
    }

    registry.register_constant("SM_MATH_PHI", *PHI);
    registry.register_constant("SM_MATH_TWO_PHI", *TWO_PHI);
    registry.register_constant("SM_MATH_PHI_BY_TWO", *PHI_BY_TWO);
    registry.register_constant("SM_MATH_TAU", TAU);
    registry.register_constant("SM_MATH_TWO_TAU", TWO_TAU);
    registry.register_constant("SM_MATH_TAU_BY_TWO", TAU_BY_TWO);

    registry.register_function("smVecMultiply", vec_multiply);
    registry.register_function("smVecDivide", vec_divide);
    registry.register_function("smVecFloor", vec_floor);
    registry.register_function("smVecRound", vec_round);
    registry.register_function("smVecCeil", vec_ceil);
    registry.register_function("smVecClampMin", vec_clamp_min);
    registry.register_function("smVecClampMax", vec_clamp_max);
    registry.register_function("smVecVolume", vec_volume);
    registry.register_function("smFibonacci", fibonacci_run);

    info!("maths module enabled");
}

fn expect_arity(
    name: &'static str,
    args: &[ScriptValue],
    expected: usize,
) -> Result<(), CallError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CallError::ArityMismatch {
            name,
            expected,
            actual: args.len(),
        })
    }
}

fn vector_arg(
    name: &'static str,
    args: &[ScriptValue],
    index: usize,
) -> Result<DVec3, CallError> {
    match args.get(index) {
        Some(&ScriptValue::Vector(value)) => Ok(value),
        _ => Err(CallError::ArgumentType {
            name,
            index,
            expected: "a vector",
        }),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Scalar bounds tolerate f64 granularity at the i64 extremes."
)]
fn scalar_arg(name: &'static str, args: &[ScriptValue], index: usize) -> Result<f64, CallError> {
    match args.get(index) {
        Some(&ScriptValue::Float(value)) => Ok(value),
        Some(&ScriptValue::Integer(value)) => Ok(value as f64),
        _ => Err(CallError::ArgumentType {
            name,
            index,
            expected: "a float or integer scalar",
        }),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
fn integer_arg(name: &'static str, args: &[ScriptValue], index: usize) -> Result<i32, CallError> {
    let wide = match args.get(index) {
        Some(&ScriptValue::Integer(value)) => value,
        Some(&ScriptValue::Float(value)) => value as i64,
        _ => {
            return Err(CallError::ArgumentType {
                name,
                index,
                expected: "an integer scalar",
            })
        }
    };
    Ok(wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

fn vec_multiply(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecMultiply", args, 2)?;
    let a = vector_arg("smVecMultiply", args, 0)?;
    let b = vector_arg("smVecMultiply", args, 1)?;
    Ok(ScriptValue::Vector(vector_math::multiply(a, b)))
}

fn vec_divide(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecDivide", args, 2)?;
    let a = vector_arg("smVecDivide", args, 0)?;
    let b = vector_arg("smVecDivide", args, 1)?;
    Ok(ScriptValue::Vector(vector_math::divide(a, b)))
}

fn vec_floor(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecFloor", args, 1)?;
    let a = vector_arg("smVecFloor", args, 0)?;
    Ok(ScriptValue::Vector(vector_math::floor(a)))
}

fn vec_round(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecRound", args, 1)?;
    let a = vector_arg("smVecRound", args, 0)?;
    Ok(ScriptValue::Vector(vector_math::round(a)))
}

fn vec_ceil(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecCeil", args, 1)?;
    let a = vector_arg("smVecCeil", args, 0)?;
    Ok(ScriptValue::Vector(vector_math::ceil(a)))
}

// The legacy script names keep their historical, inverted meaning: ClampMin
// caps at an upper bound, ClampMax enforces a lower bound.
fn vec_clamp_min(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecClampMin", args, 2)?;
    let a = vector_arg("smVecClampMin", args, 0)?;
    let bound = scalar_arg("smVecClampMin", args, 1)?;
    Ok(ScriptValue::Vector(vector_math::component_min(a, bound)))
}

fn vec_clamp_max(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecClampMax", args, 2)?;
    let a = vector_arg("smVecClampMax", args, 0)?;
    let bound = scalar_arg("smVecClampMax", args, 1)?;
    Ok(ScriptValue::Vector(vector_math::component_max(a, bound)))
}

fn vec_volume(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smVecVolume", args, 1)?;
    let a = vector_arg("smVecVolume", args, 0)?;
    Ok(ScriptValue::Float(vector_math::volume(a)))
}

fn fibonacci_run(_ctx: &ScriptContext, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
    expect_arity("smFibonacci", args, 2)?;
    let start = integer_arg("smFibonacci", args, 0)?;
    let length = integer_arg("smFibonacci", args, 1)?;
    Ok(ScriptValue::List(fibonacci::sequence(start, length)))
}
