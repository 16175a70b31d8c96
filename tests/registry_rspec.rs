//! Behavioural tests for the script-facing registry boundary.
//!
//! These rspec-style suites install the maths module into a registry and
//! exercise dispatch by name, constant lookup, configuration gating, and the
//! legacy clamp-name mapping.
use approx::assert_relative_eq;
use glam::DVec3;
use simmath::registry::{
    register_module, CallError, FunctionRegistry, HostId, ModuleConfig, ScriptContext, ScriptId,
    ScriptValue,
};

#[derive(Clone, Debug)]
struct Env {
    registry: FunctionRegistry,
    ctx: ScriptContext,
}

impl Default for Env {
    fn default() -> Self {
        let mut registry = FunctionRegistry::new();
        register_module(&mut registry, &ModuleConfig { enabled: true });
        Self {
            registry,
            ctx: ScriptContext {
                host: HostId(7),
                script: ScriptId(11),
            },
        }
    }
}

impl Env {
    fn call(&self, name: &str, args: &[ScriptValue]) -> Result<ScriptValue, CallError> {
        self.registry.call(&self.ctx, name, args)
    }
}

fn vec(x: f64, y: f64, z: f64) -> ScriptValue {
    ScriptValue::Vector(DVec3::new(x, y, z))
}

#[test]
fn dispatches_functions_by_name() {
    rspec::run(&rspec::given(
        "an enabled maths module",
        Env::default(),
        |ctx| {
            ctx.then("smVecMultiply multiplies elementwise", |env| {
                let result = env.call("smVecMultiply", &[vec(2.0, 3.0, 4.0), vec(5.0, 6.0, 7.0)]);
                assert_eq!(result, Ok(vec(10.0, 18.0, 28.0)));
            });
            ctx.then("smVecDivide squashes zero-divisor axes", |env| {
                let result = env.call("smVecDivide", &[vec(1.0, -2.0, 6.0), vec(0.0, 0.0, 3.0)]);
                assert_eq!(result, Ok(vec(0.0, 0.0, 2.0)));
            });
            ctx.then("smVecRound rounds ties to even", |env| {
                let result = env.call("smVecRound", &[vec(1.5, -1.5, 2.5)]);
                assert_eq!(result, Ok(vec(2.0, -2.0, 2.0)));
            });
            ctx.then("smVecVolume multiplies the axes", |env| {
                let result = env.call("smVecVolume", &[vec(2.0, 3.0, 4.0)]);
                assert_eq!(result, Ok(ScriptValue::Float(24.0)));
            });
            ctx.then("smFibonacci returns the canonical run", |env| {
                let result = env.call(
                    "smFibonacci",
                    &[ScriptValue::Integer(0), ScriptValue::Integer(5)],
                );
                assert_eq!(result, Ok(ScriptValue::List(vec![0, 1, 1, 2, 3])));
            });
        },
    ));
}

// The legacy names are part of the script-facing contract: ClampMin caps at
// an upper bound and ClampMax enforces a lower bound. These pin the mapping
// so the names are never "corrected" into matching behaviour.
#[test]
fn legacy_clamp_names_keep_their_inverted_meaning() {
    rspec::run(&rspec::given(
        "an enabled maths module",
        Env::default(),
        |ctx| {
            ctx.then("smVecClampMin caps every axis at the bound", |env| {
                let result = env.call("smVecClampMin", &[vec(5.0, -5.0, 0.0), ScriptValue::Float(3.0)]);
                assert_eq!(result, Ok(vec(3.0, -5.0, 0.0)));
            });
            ctx.then("smVecClampMax raises every axis to the bound", |env| {
                let result = env.call("smVecClampMax", &[vec(5.0, -5.0, 0.0), ScriptValue::Float(3.0)]);
                assert_eq!(result, Ok(vec(5.0, 3.0, 3.0)));
            });
            ctx.then("integer bounds are accepted", |env| {
                let result = env.call("smVecClampMin", &[vec(5.0, -5.0, 0.0), ScriptValue::Integer(3)]);
                assert_eq!(result, Ok(vec(3.0, -5.0, 0.0)));
            });
        },
    ));
}

#[test]
fn surfaces_the_constant_family() {
    rspec::run(&rspec::given(
        "an enabled maths module",
        Env::default(),
        |ctx| {
            ctx.then("the golden ratio family resolves", |env| {
                let phi = env.registry.constant("SM_MATH_PHI").unwrap_or_default();
                assert_relative_eq!(phi, 1.618_033_988_749_895);
                let two_phi = env.registry.constant("SM_MATH_TWO_PHI").unwrap_or_default();
                assert_relative_eq!(two_phi, phi * 2.0);
                let phi_by_two = env.registry.constant("SM_MATH_PHI_BY_TWO").unwrap_or_default();
                assert_relative_eq!(phi_by_two, phi / 2.0);
            });
            ctx.then("the circle constant family resolves", |env| {
                let tau = env.registry.constant("SM_MATH_TAU").unwrap_or_default();
                assert_relative_eq!(tau, std::f64::consts::TAU);
                let two_tau = env.registry.constant("SM_MATH_TWO_TAU").unwrap_or_default();
                assert_relative_eq!(two_tau, tau * 2.0);
                let tau_by_two = env.registry.constant("SM_MATH_TAU_BY_TWO").unwrap_or_default();
                assert_relative_eq!(tau_by_two, std::f64::consts::PI);
            });
        },
    ));
}

#[test]
fn rejects_malformed_calls() {
    rspec::run(&rspec::given(
        "an enabled maths module",
        Env::default(),
        |ctx| {
            ctx.then("unknown names are rejected", |env| {
                let result = env.call("smVecCross", &[]);
                assert_eq!(
                    result,
                    Err(CallError::UnknownFunction("smVecCross".to_owned()))
                );
            });
            ctx.then("wrong arity is rejected", |env| {
                let result = env.call("smVecFloor", &[]);
                assert_eq!(
                    result,
                    Err(CallError::ArityMismatch {
                        name: "smVecFloor",
                        expected: 1,
                        actual: 0,
                    })
                );
            });
            ctx.then("wrong argument types are rejected", |env| {
                let result = env.call("smVecCeil", &[ScriptValue::Float(1.0)]);
                assert_eq!(
                    result,
                    Err(CallError::ArgumentType {
                        name: "smVecCeil",
                        index: 0,
                        expected: "a vector",
                    })
                );
            });
        },
    ));
}

#[test]
fn disabled_configuration_registers_nothing() {
    let mut registry = FunctionRegistry::new();
    register_module(&mut registry, &ModuleConfig::default());
    assert!(registry.is_empty());

    let ctx = ScriptContext {
        host: HostId(1),
        script: ScriptId(2),
    };
    assert_eq!(
        registry.call(&ctx, "smVecFloor", &[vec(1.1, 2.2, 3.3)]),
        Err(CallError::UnknownFunction("smVecFloor".to_owned()))
    );
}

#[test]
fn configuration_parses_from_json() {
    let enabled = ModuleConfig::from_json(r#"{"Enabled": true}"#);
    assert_eq!(enabled.ok(), Some(ModuleConfig { enabled: true }));

    let defaulted = ModuleConfig::from_json("{}");
    assert_eq!(defaulted.ok(), Some(ModuleConfig { enabled: false }));
}
