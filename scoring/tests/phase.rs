use scoring::phase::{transition, MatchPhase, PhaseError};

#[test]
fn forward_steps_are_accepted_in_order() {
    let mut current = MatchPhase::Toss;
    for expected in [
        MatchPhase::TeamSelection,
        MatchPhase::InningOne,
        MatchPhase::InningTwo,
        MatchPhase::Finished,
    ] {
        current = transition(current, expected).unwrap();
        assert_eq!(current, expected);
    }
}

#[test]
fn skipping_a_phase_is_rejected() {
    assert_eq!(
        transition(MatchPhase::Toss, MatchPhase::InningOne),
        Err(PhaseError::Skipped {
            from: MatchPhase::Toss,
            requested: MatchPhase::InningOne,
        })
    );
}

#[test]
fn moving_backwards_is_rejected() {
    assert_eq!(
        transition(MatchPhase::InningTwo, MatchPhase::Toss),
        Err(PhaseError::Backward {
            from: MatchPhase::InningTwo,
            requested: MatchPhase::Toss,
        })
    );
}

#[test]
fn repeating_the_current_phase_is_rejected() {
    assert_eq!(
        transition(MatchPhase::InningOne, MatchPhase::InningOne),
        Err(PhaseError::AlreadyInPhase(MatchPhase::InningOne))
    );
}

#[test]
fn finished_is_terminal() {
    assert_eq!(
        transition(MatchPhase::Finished, MatchPhase::Toss),
        Err(PhaseError::Terminal)
    );
}

#[test]
fn completed_is_the_strict_prefix() {
    assert_eq!(MatchPhase::Toss.completed(), &[] as &[MatchPhase]);
    assert_eq!(
        MatchPhase::InningTwo.completed(),
        &[
            MatchPhase::Toss,
            MatchPhase::TeamSelection,
            MatchPhase::InningOne,
        ]
    );
}

#[test]
fn phase_names_round_trip() {
    for phase in MatchPhase::ALL {
        assert_eq!(phase.as_str().parse::<MatchPhase>().unwrap(), phase);
    }
    assert_eq!(
        "rain_delay".parse::<MatchPhase>(),
        Err(PhaseError::Unknown("rain_delay".to_string()))
    );
}

#[test]
fn only_finished_is_terminal() {
    assert!(MatchPhase::Finished.is_terminal());
    for phase in [
        MatchPhase::Toss,
        MatchPhase::TeamSelection,
        MatchPhase::InningOne,
        MatchPhase::InningTwo,
    ] {
        assert!(!phase.is_terminal());
    }
}

#[test]
fn innings_phases_know_their_sequence_number() {
    assert_eq!(MatchPhase::InningOne.inning_number(), Some(1));
    assert_eq!(MatchPhase::InningTwo.inning_number(), Some(2));
    assert_eq!(MatchPhase::Toss.inning_number(), None);
}
