//! Model-based tests driving `LinkedSequence<u32>` against `Vec<u32>` as
//! the reference model.

use proptest::prelude::*;
use proptest::test_runner::Config;
use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

use crate::LinkedSequence;

proptest_state_machine::prop_state_machine! {
    #![proptest_config(Config {
        failure_persistence: None,
        .. Config::default()
    })]

    #[test]
    fn sequence_matches_vec_model(sequential 50..300 => LinkedSequence<u32>);
}

/// The transitions of the state machine. Values are drawn from a small
/// range so that `Unique` and `RemoveValue` actually find duplicates.
#[derive(Clone, Debug)]
pub enum Transition {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    PopBack,
    InsertAt(usize, u32),
    EraseAt(usize),
    RemoveValue(u32),
    Sort,
    Reverse,
    Unique,
}

pub struct SequenceStateMachine;

impl ReferenceStateMachine for SequenceStateMachine {
    type State = Vec<u32>;
    type Transition = Transition;

    fn init_state() -> BoxedStrategy<Self::State> {
        Just(Vec::new()).boxed()
    }

    fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
        let len = state.len();
        if len == 0 {
            prop_oneof![
                3 => (0u32..16).prop_map(Transition::PushFront),
                3 => (0u32..16).prop_map(Transition::PushBack),
                1 => Just(Transition::PopFront),
                1 => Just(Transition::PopBack),
                1 => (0u32..16).prop_map(|v| Transition::InsertAt(0, v)),
                1 => Just(Transition::Sort),
                1 => Just(Transition::Reverse),
                1 => Just(Transition::Unique),
            ]
            .boxed()
        } else {
            prop_oneof![
                2 => (0u32..16).prop_map(Transition::PushFront),
                2 => (0u32..16).prop_map(Transition::PushBack),
                2 => Just(Transition::PopFront),
                2 => Just(Transition::PopBack),
                2 => (0..=len, 0u32..16).prop_map(|(at, v)| Transition::InsertAt(at, v)),
                2 => (0..len).prop_map(Transition::EraseAt),
                1 => (0u32..16).prop_map(Transition::RemoveValue),
                1 => Just(Transition::Sort),
                1 => Just(Transition::Reverse),
                1 => Just(Transition::Unique),
            ]
            .boxed()
        }
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        match transition {
            Transition::PushFront(value) => state.insert(0, *value),
            Transition::PushBack(value) => state.push(*value),
            Transition::PopFront => {
                if !state.is_empty() {
                    state.remove(0);
                }
            }
            Transition::PopBack => {
                state.pop();
            }
            Transition::InsertAt(at, value) => state.insert(*at, *value),
            Transition::EraseAt(at) => {
                state.remove(*at);
            }
            Transition::RemoveValue(value) => state.retain(|x| x != value),
            Transition::Sort => state.sort(),
            Transition::Reverse => state.reverse(),
            // `Vec::dedup` removes consecutive duplicates, which is
            // exactly the adjacency contract of `unique`
            Transition::Unique => state.dedup(),
        }
        state
    }

    /// Shrinking replays transitions against states they were not
    /// generated for, so indexed transitions must re-check their bounds.
    fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
        match transition {
            Transition::InsertAt(at, _) => *at <= state.len(),
            Transition::EraseAt(at) => *at < state.len(),
            _ => true,
        }
    }
}

impl StateMachineTest for LinkedSequence<u32> {
    type SystemUnderTest = Self;
    type Reference = SequenceStateMachine;

    fn init_test(
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        LinkedSequence::new()
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: Transition,
    ) -> Self::SystemUnderTest {
        match transition {
            Transition::PushFront(value) => state.push_front(value),
            Transition::PushBack(value) => state.push_back(value),
            Transition::PopFront => {
                state.pop_front();
            }
            Transition::PopBack => {
                state.pop_back();
            }
            Transition::InsertAt(at, value) => state.insert_at(at, value),
            Transition::EraseAt(at) => {
                state.erase(at).expect("erase of a valid position");
            }
            Transition::RemoveValue(value) => {
                state.remove(&value);
            }
            Transition::Sort => state.sort(),
            Transition::Reverse => state.reverse(),
            Transition::Unique => {
                state.unique();
            }
        }
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        state.assert_ring_consistent();
        assert_eq!(state.len(), ref_state.len());
        assert!(state.iter().eq(ref_state.iter()));
    }
}
