//! Scenario tests for stepping semantics and compiler laws.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use stepper::core::{AutomatonStep, Stepper};
use stepper::{
    always, compose, filter, fold, identity, lift, normalize, pipeline, run, skip, slice, take,
    trace, Automaton, CompileError, Compiler, CompilerConfig, Shape, Step,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deep trees recurse once per level while compiling, stepping and dropping.
fn with_large_stack<F>(f: F)
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn doubled_window_scenario() {
    init_logging();
    let pipeline = compose(lift(|x: i32| x * 2), slice(1, 3).unwrap());
    let inputs = vec![10, 20, 30, 40, 50];

    assert_eq!(
        trace(pipeline.clone(), inputs.clone()),
        vec![
            Step::skipped(()),
            Step::produced(40, ()),
            Step::produced(60, ()),
            Step::terminated(),
        ]
    );

    let mut outputs = run(pipeline, inputs);
    assert_eq!(outputs.by_ref().collect::<Vec<_>>(), vec![40, 60]);
    assert_eq!(outputs.consumed(), 4);
}

#[test]
fn doubled_window_scenario_after_normalizing() {
    init_logging();
    let pipeline = compose(lift(|x: i32| x * 2), slice(1, 3).unwrap());
    let compiled = normalize(&pipeline).unwrap();

    let mut outputs = compiled.run(vec![10, 20, 30, 40, 50]);
    assert_eq!(outputs.by_ref().collect::<Vec<_>>(), vec![40, 60]);
    assert_eq!(outputs.consumed(), 4);
}

#[test]
fn slice_fusion_law() {
    init_logging();
    let compiled = normalize(&compose(slice(2, 5).unwrap(), slice(1, 3).unwrap())).unwrap();
    assert_eq!(compiled.shape(), slice::<i32>(3, 5).unwrap().shape());

    let outcomes = trace(compiled, (0..10).collect::<Vec<i32>>());
    assert_eq!(
        outcomes,
        vec![
            Step::skipped(()),
            Step::skipped(()),
            Step::skipped(()),
            Step::produced(3, ()),
            Step::produced(4, ()),
            Step::terminated(),
        ]
    );
}

#[test]
fn identity_laws_hold_structurally() {
    init_logging();
    let t = compose(filter(|x: &i32| *x > 2), take(2));

    let left = normalize(&compose(identity(), t.clone())).unwrap();
    let right = normalize(&compose(t.clone(), identity())).unwrap();

    assert_eq!(left.shape(), t.shape());
    assert_eq!(right.shape(), t.shape());
}

#[test]
fn lift_fusion_has_no_intermediate_dispatch() {
    init_logging();
    let f_calls = Arc::new(AtomicUsize::new(0));
    let g_calls = Arc::new(AtomicUsize::new(0));
    let (fc, gc) = (Arc::clone(&f_calls), Arc::clone(&g_calls));

    let f = lift(move |x: i32| {
        fc.fetch_add(1, Ordering::SeqCst);
        x + 3
    });
    let g = lift(move |x: i32| {
        gc.fetch_add(1, Ordering::SeqCst);
        x * x
    });

    let compiled = normalize(&compose(f, g)).unwrap();
    assert_eq!(compiled.shape(), Shape::Lift);

    let outputs: Vec<i32> = compiled.run(vec![0, 1, 2]).collect();
    assert_eq!(outputs, vec![9, 16, 25]);
    assert_eq!(f_calls.load(Ordering::SeqCst), 3);
    assert_eq!(g_calls.load(Ordering::SeqCst), 3);
}

#[test]
fn deep_right_leaning_lift_chain_compiles() {
    with_large_stack(|| {
        init_logging();
        let mut chain = lift(|x: i64| x + 1);
        for _ in 1..1000 {
            chain = compose(lift(|x: i64| x + 1), chain);
        }
        assert_eq!(chain.shape().depth(), 999);

        let compiled = normalize(&chain).unwrap();
        assert_eq!(compiled.shape(), Shape::Lift);
        assert_eq!(compiled.step(0).into_value(), Some(1000));
    });
}

#[test]
fn deep_left_leaning_lift_chain_compiles() {
    with_large_stack(|| {
        init_logging();
        let mut chain = lift(|x: i64| x + 1);
        for _ in 1..1000 {
            chain = compose(chain, lift(|x: i64| x + 1));
        }
        assert!(!chain.shape().is_right_associated());

        let compiled = normalize(&chain).unwrap();
        assert_eq!(compiled.shape(), Shape::Lift);
        assert_eq!(compiled.step(5).into_value(), Some(1005));
    });
}

#[test]
fn deep_left_leaning_filter_chain_rotates() {
    with_large_stack(|| {
        init_logging();
        let mut chain = filter(|x: &i64| *x >= 0);
        for bound in 1..1000 {
            chain = compose(chain, filter(move |x: &i64| *x != bound));
        }

        let compiled = normalize(&chain).unwrap();
        let shape = compiled.shape();
        assert!(shape.is_right_associated());
        assert_eq!(shape.leaf_count(), 1000);

        let outputs: Vec<i64> = compiled.run(vec![-1, 0, 500, 1000]).collect();
        assert_eq!(outputs, vec![0, 1000]);
    });
}

#[test]
#[should_panic(expected = "predicate failed")]
fn panicking_predicate_propagates_from_step() {
    init_logging();
    let failing = filter(|_: &i32| -> bool { panic!("predicate failed") });
    let compiled = normalize(&compose(failing, take(3))).unwrap();

    let _ = compiled.step(1);
}

#[test]
#[should_panic(expected = "fused lift failed")]
fn panicking_fused_lift_propagates_from_step() {
    init_logging();
    let inc = lift(|x: i32| x + 1);
    let failing = lift(|x: i32| -> i32 {
        if x > 2 {
            panic!("fused lift failed");
        }
        x
    });
    let compiled = normalize(&compose(inc, failing)).unwrap();
    assert_eq!(compiled.shape(), Shape::Lift);
    assert_eq!(compiled.step(0).into_value(), Some(1));

    let _ = compiled.step(5);
}

#[test]
fn partially_stepped_pipeline_normalizes_equivalently() {
    init_logging();
    let pipeline = pipeline![
        lift(|x: i32| x * 2),
        skip(1),
        take(4),
        filter(|x: &i32| x % 3 != 0)
    ];

    let mut stepped = pipeline;
    for input in [1, 2] {
        stepped = stepped.step(input).into_next().unwrap();
    }
    let compiled = normalize(&stepped).unwrap();

    let inputs: Vec<i32> = (3..12).collect();
    assert_eq!(trace(compiled, inputs.clone()), trace(stepped, inputs));
}

#[test]
fn early_termination_discards_other_stage() {
    init_logging();
    // The first stage is still alive when the second terminates.
    let pipeline = compose(take(10), take(1));
    let outcomes = trace(pipeline, vec![1, 2, 3]);

    assert_eq!(outcomes, vec![Step::produced(1, ()), Step::terminated()]);
}

#[test]
fn shared_automaton_steps_independently_across_threads() {
    init_logging();
    let pipeline = pipeline![lift(|x: u64| x * 3), filter(|x: &u64| x % 2 == 1), take(2)];
    let compiled = normalize(&pipeline).unwrap();

    let results: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|offset| {
                let automaton = compiled.clone();
                scope.spawn(move || automaton.run(offset..).collect::<Vec<u64>>())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results[0], vec![3, 9]);
    assert_eq!(results[1], vec![3, 9]);
    assert_eq!(results[2], vec![9, 15]);
    assert_eq!(results[3], vec![9, 15]);
}

#[test]
fn conservative_compiler_preserves_call_counts() {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let noisy = lift(move |x: i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        x
    });
    let pipeline = compose(noisy, compose(slice(2, 4).unwrap(), always(0)));

    let plain: Vec<i32> = pipeline.clone().run(0..10).collect();
    let plain_calls = calls.swap(0, Ordering::SeqCst);

    let compiler = Compiler::new(CompilerConfig::conservative());
    let compiled = compiler.normalize(&pipeline).unwrap();
    let fused: Vec<i32> = compiled.run(0..10).collect();

    assert_eq!(fused, plain);
    assert_eq!(calls.load(Ordering::SeqCst), plain_calls);
}

#[test]
fn fold_sums_a_window() {
    init_logging();
    let sum = compose(
        slice(1, 4).unwrap(),
        lift(|(acc, x): (i32, i32)| (acc + x, x)),
    );

    assert_eq!(fold(sum, 0, vec![100, 1, 2, 3, 100]), 6);
}

struct RunningMax {
    best: Option<i32>,
}

impl Stepper<i32> for RunningMax {
    fn name(&self) -> &str {
        "RunningMax"
    }

    fn step(&self, input: i32) -> AutomatonStep<i32> {
        let best = self.best.map_or(input, |b| b.max(input));
        let next: Automaton<i32> = Automaton::Custom(Arc::new(RunningMax { best: Some(best) }));
        if Some(best) == self.best {
            Step::skipped(next)
        } else {
            Step::produced(best, next)
        }
    }
}

#[test]
fn custom_automaton_runs_but_does_not_compile() {
    init_logging();
    let running_max: Automaton<i32> = Automaton::Custom(Arc::new(RunningMax { best: None }));
    let pipeline = compose(lift(|x: i32| x % 10), running_max);

    let outputs: Vec<i32> = pipeline.clone().run(vec![3, 1, 7, 14, 9, 2]).collect();
    assert_eq!(outputs, vec![3, 7, 9]);

    let err = normalize(&pipeline).unwrap_err();
    assert_eq!(
        err,
        CompileError::UnsupportedVariant {
            name: "RunningMax".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Cannot compile unsupported automaton variant 'RunningMax'"
    );
}
