// Integration tests for the trace engine and the construct tables

use steptty::constructs::{
    self, do_while, else_if, for_each, for_loop, if_else, Comparison, ConstructParams,
    ConstructSpec,
};
use steptty::highlight;
use steptty::trace::{step, Phase, TraceError, TraceState};

/// Drive a fresh trace to completion, returning every state including the
/// initial one
fn run_trace(spec: &ConstructSpec, params: ConstructParams) -> Vec<TraceState> {
    let mut states = vec![(spec.init)(&params)];
    while !states.last().unwrap().done {
        let next = step(spec, states.last().unwrap()).expect("step failed");
        states.push(next);
        assert!(states.len() < 10_000, "trace did not terminate");
    }
    states
}

fn phases_of(states: &[TraceState]) -> Vec<Phase> {
    states.iter().map(|s| s.phase).collect()
}

#[test]
fn for_loop_prints_each_counter_value() {
    let states = run_trace(&for_loop::SPEC, ConstructParams::ForLoop { bound: 4 });
    let last = states.last().unwrap();

    assert_eq!(last.output, vec!["0", "1", "2", "3"]);
    assert_eq!(last.iterations, 4);
    assert!(last.done);
}

#[test]
fn for_loop_zero_bound_never_visits_body() {
    let states = run_trace(&for_loop::SPEC, ConstructParams::ForLoop { bound: 0 });
    let last = states.last().unwrap();

    assert!(last.output.is_empty());
    assert_eq!(last.iterations, 0);
    assert!(!phases_of(&states).contains(&Phase::Body));
    // Init, then the condition check that fails
    assert_eq!(phases_of(&states), vec![Phase::Init, Phase::Condition]);
}

#[test]
fn for_loop_negative_bound_treated_as_zero() {
    let states = run_trace(&for_loop::SPEC, ConstructParams::ForLoop { bound: -3 });
    assert!(states.last().unwrap().output.is_empty());
}

#[test]
fn for_loop_rechecks_condition_after_every_update() {
    let states = run_trace(&for_loop::SPEC, ConstructParams::ForLoop { bound: 3 });
    let phases = phases_of(&states);

    // An Update is always followed by Condition, never directly by Body
    for window in phases.windows(2) {
        if window[0] == Phase::Update {
            assert_eq!(window[1], Phase::Condition);
        }
    }
}

#[test]
fn do_while_prints_start_through_end() {
    let states = run_trace(&do_while::SPEC, ConstructParams::DoWhile { start: 2, end: 5 });
    let last = states.last().unwrap();

    assert_eq!(last.output, vec!["2", "3", "4", "5"]);
    assert_eq!(last.iterations, 4);
}

#[test]
fn do_while_runs_body_once_when_start_exceeds_end() {
    let states = run_trace(&do_while::SPEC, ConstructParams::DoWhile { start: 5, end: 2 });
    let last = states.last().unwrap();

    // The body runs before the first condition check
    assert_eq!(last.output, vec!["5"]);
    assert_eq!(last.iterations, 1);
    assert_eq!(
        phases_of(&states),
        vec![Phase::Init, Phase::Body, Phase::Increment, Phase::Condition]
    );
}

#[test]
fn do_while_survives_extreme_start_values() {
    // The counter saturates instead of overflowing, and the trace still
    // terminates through the failing condition check
    let states = run_trace(
        &do_while::SPEC,
        ConstructParams::DoWhile {
            start: i64::MAX,
            end: 0,
        },
    );
    let last = states.last().unwrap();

    assert_eq!(last.output, vec![i64::MAX.to_string()]);
    assert_eq!(last.iterations, 1);
    assert!(last.done);
}

#[test]
fn do_while_enters_body_before_any_condition_check() {
    let states = run_trace(&do_while::SPEC, ConstructParams::DoWhile { start: 0, end: 2 });
    let phases = phases_of(&states);

    let first_body = phases.iter().position(|p| *p == Phase::Body).unwrap();
    let first_condition = phases.iter().position(|p| *p == Phase::Condition).unwrap();
    assert!(first_body < first_condition);
}

#[test]
fn for_each_visits_every_item_in_order() {
    let items = vec![
        "apple".to_string(),
        "banana".to_string(),
        "cherry".to_string(),
    ];
    let states = run_trace(
        &for_each::SPEC,
        ConstructParams::ForEach {
            items: items.clone(),
        },
    );
    let last = states.last().unwrap();

    assert_eq!(last.output, items);
    assert_eq!(last.iterations, 3);

    let body_visits = phases_of(&states)
        .iter()
        .filter(|p| **p == Phase::Body)
        .count();
    assert_eq!(body_visits, 3);
}

#[test]
fn for_each_finishes_right_after_last_item() {
    let items = vec!["a".to_string(), "b".to_string()];
    let states = run_trace(&for_each::SPEC, ConstructParams::ForEach { items });

    // Done is reached on the Advance that finds no next element; no phantom
    // extra body visit afterwards
    let last = states.last().unwrap();
    assert_eq!(last.phase, Phase::Advance);
    assert_eq!(last.iterations, 2);
}

#[test]
fn for_each_empty_collection_is_immediately_trivial() {
    let states = run_trace(&for_each::SPEC, ConstructParams::ForEach { items: vec![] });
    let last = states.last().unwrap();

    assert!(last.output.is_empty());
    assert_eq!(last.iterations, 0);
    assert_eq!(
        phases_of(&states),
        vec![Phase::DeclareCollection, Phase::StartLoop]
    );
}

#[test]
fn if_else_picks_then_branch() {
    let states = run_trace(
        &if_else::SPEC,
        ConstructParams::IfElse {
            a: 5,
            b: 3,
            op: Comparison::Greater,
        },
    );

    assert_eq!(
        phases_of(&states),
        vec![Phase::CheckCondition, Phase::ThenBranch]
    );
    assert_eq!(states.last().unwrap().output, vec!["condition was true"]);
}

#[test]
fn if_else_picks_else_branch() {
    let states = run_trace(
        &if_else::SPEC,
        ConstructParams::IfElse {
            a: 2,
            b: 3,
            op: Comparison::Greater,
        },
    );

    assert_eq!(
        phases_of(&states),
        vec![Phase::CheckCondition, Phase::ElseBranch]
    );
    assert_eq!(states.last().unwrap().output, vec!["condition was false"]);
}

#[test]
fn if_else_supports_every_operator() {
    for (op, a, b, expect_then) in [
        (Comparison::Greater, 5, 3, true),
        (Comparison::Less, 5, 3, false),
        (Comparison::Equal, 3, 3, true),
        (Comparison::NotEqual, 3, 3, false),
        (Comparison::GreaterEqual, 3, 3, true),
        (Comparison::LessEqual, 4, 3, false),
    ] {
        let states = run_trace(&if_else::SPEC, ConstructParams::IfElse { a, b, op });
        let expected = if expect_then {
            Phase::ThenBranch
        } else {
            Phase::ElseBranch
        };
        assert_eq!(
            states.last().unwrap().phase,
            expected,
            "operator {} with a={}, b={}",
            op,
            a,
            b
        );
    }
}

#[test]
fn else_if_short_circuits_when_first_condition_holds() {
    let states = run_trace(
        &else_if::SPEC,
        ConstructParams::ElseIfChain {
            a: 5,
            b: 3,
            op: Comparison::Greater,
        },
    );

    // Straight to the first branch; the second check never runs
    assert_eq!(
        phases_of(&states),
        vec![Phase::CheckFirstCondition, Phase::ThenBranch]
    );
    assert!(!phases_of(&states).contains(&Phase::CheckSecondCondition));
}

#[test]
fn else_if_evaluates_second_condition_on_tie() {
    let states = run_trace(
        &else_if::SPEC,
        ConstructParams::ElseIfChain {
            a: 3,
            b: 3,
            op: Comparison::Greater,
        },
    );

    assert_eq!(
        phases_of(&states),
        vec![
            Phase::CheckFirstCondition,
            Phase::CheckSecondCondition,
            Phase::ElseIfBranch
        ]
    );
    assert_eq!(
        states.last().unwrap().output,
        vec!["second condition matched"]
    );
}

#[test]
fn else_if_falls_through_to_else_branch() {
    let states = run_trace(
        &else_if::SPEC,
        ConstructParams::ElseIfChain {
            a: 2,
            b: 3,
            op: Comparison::Greater,
        },
    );

    assert_eq!(states.last().unwrap().phase, Phase::ElseBranch);
    assert_eq!(states.last().unwrap().output, vec!["no condition matched"]);
}

#[test]
fn step_is_identity_once_done() {
    let states = run_trace(&for_loop::SPEC, ConstructParams::ForLoop { bound: 2 });
    let terminal = states.last().unwrap();

    let again = step(&for_loop::SPEC, terminal).unwrap();
    assert_eq!(&again, terminal);

    let and_again = step(&for_loop::SPEC, &again).unwrap();
    assert_eq!(and_again, again);
}

#[test]
fn step_rejects_phase_outside_the_construct() {
    let mut state = (for_loop::SPEC.init)(&ConstructParams::ForLoop { bound: 2 });
    state.phase = Phase::Advance; // belongs to for-each, not for

    let err = step(&for_loop::SPEC, &state).unwrap_err();
    assert_eq!(
        err,
        TraceError::InvalidPhase {
            construct: "for",
            phase: Phase::Advance,
        }
    );
}

#[test]
fn mismatched_params_fall_back_to_defaults() {
    // A for loop initialized with for-each params behaves like bound 0
    let states = run_trace(
        &for_loop::SPEC,
        ConstructParams::ForEach {
            items: vec!["x".to_string()],
        },
    );
    assert!(states.last().unwrap().output.is_empty());
}

#[test]
fn every_phase_of_every_construct_highlights_something() {
    for spec in constructs::all() {
        for descriptor in spec.phases {
            let mut state = TraceState::new(descriptor.id);
            state.done = false;
            let lines = highlight::resolve(spec, &state);
            assert!(
                !lines.is_empty(),
                "{} phase {} highlights nothing",
                spec.name,
                descriptor.id
            );
        }
    }
}

#[test]
fn final_condition_check_also_highlights_loop_exit() {
    let states = run_trace(&for_loop::SPEC, ConstructParams::ForLoop { bound: 1 });

    // Mid-trace condition check highlights only the header line
    let running = states.iter().find(|s| s.phase == Phase::Condition).unwrap();
    assert_eq!(highlight::resolve(&for_loop::SPEC, running), vec![0]);

    // The failing check at the end adds the closing brace
    let last = states.last().unwrap();
    assert_eq!(last.phase, Phase::Condition);
    assert!(last.done);
    assert_eq!(highlight::resolve(&for_loop::SPEC, last), vec![0, 2]);
}

#[test]
fn listings_render_the_user_parameters() {
    let source = (for_loop::SPEC.source)(&ConstructParams::ForLoop { bound: 7 });
    assert!(source.contains("i < 7"));

    let source = (do_while::SPEC.source)(&ConstructParams::DoWhile { start: 2, end: 9 });
    assert!(source.contains("let i = 2;"));
    assert!(source.contains("while (i <= 9);"));

    let source = (if_else::SPEC.source)(&ConstructParams::IfElse {
        a: 5,
        b: 3,
        op: Comparison::LessEqual,
    });
    assert!(source.contains("if (5 <= 3)"));

    let source = (for_each::SPEC.source)(&ConstructParams::ForEach {
        items: vec!["kiwi".to_string(), "plum".to_string()],
    });
    assert!(source.contains("[\"kiwi\", \"plum\"]"));
}

#[test]
fn registry_finds_every_construct_by_name() {
    for name in ["for", "for-each", "do-while", "if-else", "else-if"] {
        let spec = constructs::find(name).expect(name);
        assert_eq!(spec.name, name);
    }
    assert!(constructs::find("while").is_none());
}
