// Randomized checks of the loop constructs and of drive-mode equivalence

use proptest::prelude::*;
use std::time::{Duration, Instant};

use steptty::constructs::{do_while, for_each, for_loop, ConstructParams, ConstructSpec};
use steptty::playback::Playback;
use steptty::trace::{step, TraceState};

fn run_trace(spec: &ConstructSpec, params: &ConstructParams) -> TraceState {
    let mut state = (spec.init)(params);
    let mut budget = 10_000;
    while !state.done {
        state = step(spec, &state).expect("step failed");
        budget -= 1;
        assert!(budget > 0, "trace did not terminate");
    }
    state
}

/// The state sequence produced by manual stepping
fn manual_states(spec: &'static ConstructSpec, params: &ConstructParams) -> Vec<TraceState> {
    let mut playback = Playback::with_params(spec, params.clone());
    let mut states = vec![playback.state().unwrap().clone()];
    while !playback.state().unwrap().done {
        playback.step_once().unwrap();
        states.push(playback.state().unwrap().clone());
    }
    states
}

/// The state sequence produced by autoplay under a synthetic clock
fn autoplay_states(spec: &'static ConstructSpec, params: &ConstructParams) -> Vec<TraceState> {
    let interval = Duration::from_millis(900);
    let mut playback = Playback::with_params(spec, params.clone());
    let mut states = vec![playback.state().unwrap().clone()];

    let mut now = Instant::now();
    playback.play(interval, now).unwrap();
    while playback.is_playing() {
        now += interval;
        if playback.poll(now).unwrap() {
            states.push(playback.state().unwrap().clone());
        }
    }
    states
}

proptest! {
    #[test]
    fn for_loop_output_counts_up_to_bound(bound in 0i64..40) {
        let last = run_trace(&for_loop::SPEC, &ConstructParams::ForLoop { bound });
        let expected: Vec<String> = (0..bound).map(|i| i.to_string()).collect();
        prop_assert_eq!(&last.output, &expected);
        prop_assert_eq!(last.iterations as i64, bound);
    }

    #[test]
    fn do_while_output_is_start_through_end_or_just_start(
        start in -10i64..10,
        end in -10i64..10,
    ) {
        let last = run_trace(&do_while::SPEC, &ConstructParams::DoWhile { start, end });
        let expected: Vec<String> = if start <= end {
            (start..=end).map(|i| i.to_string()).collect()
        } else {
            vec![start.to_string()]
        };
        prop_assert_eq!(&last.output, &expected);
    }

    #[test]
    fn for_each_output_matches_the_collection(
        items in proptest::collection::vec("[a-z]{1,8}", 0..8),
    ) {
        let last = run_trace(
            &for_each::SPEC,
            &ConstructParams::ForEach { items: items.clone() },
        );
        prop_assert_eq!(&last.output, &items);
        prop_assert_eq!(last.iterations, items.len());
    }

    #[test]
    fn drive_modes_never_diverge_on_for_loops(bound in 0i64..25) {
        let params = ConstructParams::ForLoop { bound };
        prop_assert_eq!(
            manual_states(&for_loop::SPEC, &params),
            autoplay_states(&for_loop::SPEC, &params)
        );
    }

    #[test]
    fn drive_modes_never_diverge_on_do_while(start in -8i64..8, end in -8i64..8) {
        let params = ConstructParams::DoWhile { start, end };
        prop_assert_eq!(
            manual_states(&do_while::SPEC, &params),
            autoplay_states(&do_while::SPEC, &params)
        );
    }
}
