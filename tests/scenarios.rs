// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

use tapecount::{
    AlarmAck, Anomaly, CarrierProfile, EventDispatcher, Poll, Session, SessionController, Stage,
};

const E: bool = false;
const C: bool = true;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records every anomaly and answers with a fixed acknowledgement.
struct Operator {
    ack: AlarmAck,
    seen: Vec<(Anomaly, bool)>,
}

impl Operator {
    fn confirming() -> Self {
        Self {
            ack: AlarmAck::Continue,
            seen: Vec::new(),
        }
    }
}

impl tapecount::AnomalyHandler for Operator {
    fn on_anomaly(&mut self, anomaly: Anomaly, session: &Session) -> AlarmAck {
        self.seen.push((anomaly, session.is_active()));
        self.ack
    }
}

/// Push samples through the interrupt side and the loop side, one edge at a time.
fn run(
    dispatcher: &EventDispatcher,
    counter: &mut SessionController<'_>,
    operator: &mut Operator,
    samples: &[bool],
) {
    for &chip in samples {
        dispatcher.on_trigger_callback(|| chip);
        let poll = counter.poll(operator);
        assert!(!matches!(poll, Poll::Idle));
    }
}

fn one_to_one(dispatcher: &EventDispatcher) -> SessionController<'_> {
    let mut counter = SessionController::new(dispatcher).with_carrier_profile(CarrierProfile::Sot);
    counter.resume();
    counter
}

#[test]
fn full_tape_walk_through_all_three_zones() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = one_to_one(&dispatcher);
    let mut operator = Operator::confirming();

    run(&dispatcher, &mut counter, &mut operator, &[E, C, C, C, C]);
    let s = counter.snapshot();
    assert_eq!(s.stage, Stage::Middle);
    assert_eq!(s.middle_chip_count, 4);
    assert_eq!(s.lead_empty_count, 1);
    assert_eq!(s.chip_run, 0);

    run(&dispatcher, &mut counter, &mut operator, &[C, E, E, E]);
    let s = counter.snapshot();
    assert_eq!(s.stage, Stage::TrailEmpty);
    assert_eq!(s.middle_chip_count, 5);
    assert_eq!(s.middle_loss_count, 0);
    assert_eq!(s.trail_empty_count, 3);

    run(&dispatcher, &mut counter, &mut operator, &[C]);
    let s = counter.snapshot();
    assert_eq!(s.stage, Stage::TrailEmpty);
    assert_eq!(s.edge_extra_count, 1);
    assert!((s.yield_rate - 100.0).abs() < 1e-3);
    assert_eq!(
        operator.seen,
        vec![(
            Anomaly::ExtraChip {
                edge_extra_count: 1
            },
            true
        )]
    );
    assert_eq!(s.trigger_ordinal, 10);
    assert!(s.data_valid);
}

#[test]
fn sub_threshold_lead_run_is_noise() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = one_to_one(&dispatcher);
    let mut operator = Operator::confirming();

    run(&dispatcher, &mut counter, &mut operator, &[C, C, E]);
    let s = counter.snapshot();
    assert_eq!(s.stage, Stage::LeadEmpty);
    assert_eq!(s.lead_empty_count, 1);
    assert_eq!(s.edge_extra_count, 2);
    assert_eq!(s.chip_run, 0);
    assert!(operator.seen.is_empty());
}

#[test]
fn isolated_middle_gap_is_a_single_loss() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = one_to_one(&dispatcher);
    let mut operator = Operator::confirming();

    run(&dispatcher, &mut counter, &mut operator, &[C, C, C, C]);
    let before = counter.snapshot();

    run(&dispatcher, &mut counter, &mut operator, &[C, C, E, C, C]);
    let s = counter.snapshot();
    assert_eq!(s.stage, Stage::Middle);
    assert_eq!(s.middle_chip_count, before.middle_chip_count + 4);
    assert_eq!(s.middle_loss_count, before.middle_loss_count + 1);
    assert_eq!(s.empty_run, 0);
}

#[test]
fn paused_counter_leaves_session_untouched() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = one_to_one(&dispatcher);
    let mut operator = Operator::confirming();
    run(&dispatcher, &mut counter, &mut operator, &[E, C, C, C, C, C]);

    counter.pause();
    let frozen = counter.session().clone();
    for chip in [E, E, E, C, C, E] {
        dispatcher.on_trigger_callback(|| chip);
        assert_eq!(counter.poll(&mut operator), Poll::Idle);
    }
    assert_eq!(*counter.session(), frozen);
    assert_eq!(counter.snapshot().trigger_ordinal, 12);

    counter.resume();
    run(&dispatcher, &mut counter, &mut operator, &[C]);
    assert_eq!(counter.session().middle_chip_count(), frozen.middle_chip_count() + 1);
}

#[test]
fn stopping_an_alarm_halts_counting_until_resumed() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = one_to_one(&dispatcher);
    let mut operator = Operator {
        ack: AlarmAck::Stop,
        seen: Vec::new(),
    };

    run(&dispatcher, &mut counter, &mut operator, &[C, C, C, C, E, E, E, C]);
    assert!(!counter.is_active());
    assert!(counter.take_refresh_request());
    // The handler still saw the session marked active.
    assert_eq!(operator.seen.len(), 1);
    assert!(operator.seen[0].1);

    dispatcher.on_trigger_callback(|| true);
    assert_eq!(counter.poll(&mut operator), Poll::Idle);
    assert_eq!(counter.session().edge_extra_count(), 1);
}

#[test]
fn two_edge_carrier_halves_the_sample_rate() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = SessionController::new(&dispatcher);
    counter.resume();
    let mut operator = Operator::confirming();

    // Odd edges carry pockets; even edges read whatever sits between them.
    for pocket in [E, C, C, C, C] {
        dispatcher.on_trigger_callback(|| pocket);
        counter.poll(&mut operator);
        dispatcher.on_trigger_callback(|| !pocket);
        assert!(matches!(counter.poll(&mut operator), Poll::Skipped(_)));
    }

    let s = counter.snapshot();
    assert_eq!(s.stage, Stage::Middle);
    assert_eq!(s.middle_chip_count, 4);
    assert_eq!(s.lead_empty_count, 1);
    assert_eq!(s.trigger_ordinal, 10);
}

#[test]
fn burst_between_polls_keeps_only_latest_edge() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = one_to_one(&dispatcher);
    let mut operator = Operator::confirming();

    dispatcher.on_trigger_callback(|| true);
    dispatcher.on_trigger_callback(|| true);
    dispatcher.on_trigger_callback(|| false);
    assert_eq!(dispatcher.coalesced(), 2);

    assert!(matches!(counter.poll(&mut operator), Poll::Accepted(ev, _) if ev.ordinal == 3));
    assert_eq!(counter.poll(&mut operator), Poll::Idle);
    let s = counter.snapshot();
    assert_eq!(s.lead_empty_count, 1);
    assert_eq!(s.chip_run, 0);
    assert_eq!(s.edge_extra_count, 0);
}

#[test]
fn yield_tracks_counts_across_a_long_run() {
    init_logs();
    let dispatcher = EventDispatcher::new();
    let mut counter = one_to_one(&dispatcher);
    let mut operator = Operator::confirming();

    let mut tape = vec![E, E, C, C, C, C];
    for i in 0..200 {
        tape.push(i % 7 != 3);
    }
    tape.extend_from_slice(&[C, E, E, E, E, E]);

    for &chip in &tape {
        run(&dispatcher, &mut counter, &mut operator, &[chip]);
        let s = counter.snapshot();
        let total = s.middle_chip_count + s.middle_loss_count;
        let expected = if total > 0 {
            s.middle_chip_count as f32 * 100.0 / total as f32
        } else {
            0.0
        };
        assert!((s.yield_rate - expected).abs() < 1e-3);
        assert!((0.0..=100.0).contains(&s.yield_rate));
    }

    let s = counter.snapshot();
    assert_eq!(s.stage, Stage::TrailEmpty);
    assert_eq!(s.trail_empty_count, 5);
}
