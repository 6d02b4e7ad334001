mod common;

mod tests {
    use navlight_composer::color::OFF_COLOR;
    use navlight_composer::{
        PixelSink, Rgb, StrobeGroup, StrobeKind, StrobeState, StrobeTimer, StrobeTimings,
    };

    use crate::common::RecordingSink;

    const AMBER: Rgb = Rgb {
        r: 255,
        g: 120,
        b: 0,
    };

    /// Advance `timer` `ticks` times, returning the 1-based ticks that transitioned
    fn transition_ticks(timer: &mut StrobeTimer, ticks: u32) -> Vec<u32> {
        (1..=ticks)
            .filter(|_| timer.advance().transitioned)
            .collect()
    }

    #[test]
    fn test_starts_dark() {
        let timer = StrobeTimer::new(StrobeTimings::new(3, 4));
        assert_eq!(timer.state(), StrobeState::Off);
        assert_eq!(timer.ticks_in_state(), 0);
        assert!(!timer.is_lit());
    }

    #[test]
    fn test_first_transition_after_off_duration() {
        for on in 1..=6 {
            for off in 1..=6 {
                let mut timer = StrobeTimer::new(StrobeTimings::new(on, off));
                for _ in 1..off {
                    let step = timer.advance();
                    assert!(!step.transitioned, "on={on} off={off}");
                    assert_eq!(step.state, StrobeState::Off);
                }
                let step = timer.advance();
                assert!(step.transitioned, "on={on} off={off}");
                assert_eq!(step.state, StrobeState::On);
                assert_eq!(timer.ticks_in_state(), 0);
            }
        }
    }

    #[test]
    fn test_state_sequence_has_on_plus_off_period() {
        for (on, off) in [(1, 1), (2, 5), (12, 12), (10, 11)] {
            let timings = StrobeTimings::new(on, off);
            let period = timings.period() as usize;
            let mut timer = StrobeTimer::new(timings);
            let states: Vec<StrobeState> = (0..period * 3).map(|_| timer.advance().state).collect();

            for i in 0..period * 2 {
                assert_eq!(states[i], states[i + period], "on={on} off={off} tick={i}");
            }
            let lit = states[..period].iter().filter(|s| s.is_lit()).count();
            assert_eq!(lit, usize::from(on));
        }
    }

    #[test]
    fn test_transitions_alternate() {
        let mut timer = StrobeTimer::new(StrobeTimings::new(10, 11));
        assert_eq!(transition_ticks(&mut timer, 63), vec![11, 21, 32, 42, 53, 63]);
    }

    #[test]
    fn test_non_transition_tick_keeps_state() {
        let mut timer = StrobeTimer::new(StrobeTimings::new(5, 5));
        for _ in 0..5 {
            timer.advance();
        }
        assert_eq!(timer.state(), StrobeState::On);

        for expected_ticks in 1..5 {
            let step = timer.advance();
            assert!(!step.transitioned);
            assert_eq!(step.state, StrobeState::On);
            assert_eq!(timer.ticks_in_state(), expected_ticks);
        }
    }

    #[test]
    fn test_zero_off_duration_holds_on() {
        let mut timer = StrobeTimer::new(StrobeTimings::new(3, 0));

        let step = timer.advance();
        assert!(step.transitioned);
        assert_eq!(step.state, StrobeState::On);

        for _ in 0..20 {
            let step = timer.advance();
            assert!(!step.transitioned);
            assert_eq!(step.state, StrobeState::On);
        }
    }

    #[test]
    fn test_zero_on_duration_never_lights() {
        let mut timer = StrobeTimer::new(StrobeTimings::new(0, 2));
        for _ in 0..20 {
            let step = timer.advance();
            assert!(!step.transitioned);
            assert_eq!(step.state, StrobeState::Off);
        }
    }

    #[test]
    fn test_both_durations_zero_terminates() {
        let mut timer = StrobeTimer::new(StrobeTimings::new(0, 0));
        for _ in 0..10 {
            let step = timer.advance();
            assert!(!step.transitioned);
            assert_eq!(step.state, StrobeState::Off);
            assert_eq!(timer.ticks_in_state(), 0);
        }
    }

    #[test]
    fn test_group_paints_on_transition_only() {
        let mut sink = RecordingSink::new();
        let mut group = StrobeGroup::new(
            StrobeKind::Beacon,
            StrobeTimings::new(2, 2),
            [3, 4],
            AMBER,
        );

        assert!(!group.advance(&mut sink));
        assert_eq!(sink.log.borrow().len(), 0);

        assert!(group.advance(&mut sink));
        assert_eq!(sink.pixels[3], AMBER);
        assert_eq!(sink.pixels[4], AMBER);
        assert_eq!(sink.flushes(), 0);

        group.advance(&mut sink);
        assert!(group.advance(&mut sink));
        assert_eq!(sink.pixels[3], OFF_COLOR);
        assert_eq!(sink.pixels[4], OFF_COLOR);
        assert_eq!(sink.pixel_count(), 6);
    }

    #[test]
    fn test_group_color_for_state() {
        let group = StrobeGroup::new(
            StrobeKind::Collision,
            StrobeTimings::new(1, 1),
            [5, 0],
            AMBER,
        );
        assert_eq!(group.kind(), StrobeKind::Collision);
        assert_eq!(group.color_for(StrobeState::On), AMBER);
        assert_eq!(group.color_for(StrobeState::Off), OFF_COLOR);
    }
}
