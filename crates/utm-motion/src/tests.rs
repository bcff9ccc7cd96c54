#[cfg(test)]
mod tests {
    use utm_core::commands::FlightCommand;
    use utm_core::enums::{Direction, FlightMode, FlightPhase};
    use utm_core::types::GeoPoint;

    use crate::fsm::{apply_command, evaluate, FlightContext};
    use crate::model::*;
    use crate::profiles::MotionProfile;

    fn start() -> GeoPoint {
        GeoPoint::new(37.0, -122.0)
    }

    fn end() -> GeoPoint {
        GeoPoint::new(37.1, -122.1)
    }

    fn make_context(mode: FlightMode, progress: f64, direction: Direction) -> FlightContext {
        FlightContext {
            start: start(),
            end: end(),
            mode,
            progress,
            direction,
            target_altitude: 0.0,
            current_altitude: 0.0,
            battery: 97.0,
            heading: 0.0,
        }
    }

    // ---- Position ----

    #[test]
    fn test_interpolate_endpoints_and_midpoint() {
        let p0 = interpolate_position(&start(), &end(), 0.0);
        let p1 = interpolate_position(&start(), &end(), 1.0);
        let mid = interpolate_position(&start(), &end(), 0.5);
        assert_eq!(p0, start());
        assert!((p1.lat - 37.1).abs() < 1e-12);
        assert!((p1.lon + 122.1).abs() < 1e-12);
        assert!((mid.lat - 37.05).abs() < 1e-12);
        assert!((mid.lon + 122.05).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_zero_length_route() {
        let p = GeoPoint::new(10.0, 20.0);
        assert_eq!(interpolate_position(&p, &p, 0.37), p);
        assert_eq!(heading(&p, &p, Direction::Forward), 0.0);
    }

    // ---- Heading ----

    #[test]
    fn test_heading_reverses_with_direction() {
        let fwd = heading(&start(), &end(), Direction::Forward);
        let back = heading(&start(), &end(), Direction::Backward);
        // Northwest outbound, southeast inbound.
        assert!((fwd - 315.0).abs() < 1e-9, "forward heading {fwd}");
        assert!((back - 135.0).abs() < 1e-9, "backward heading {back}");
    }

    #[test]
    fn test_heading_in_range() {
        let points = [
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(-1.0, 1.0),
            GeoPoint::new(-1.0, -1.0),
            GeoPoint::new(1.0, -1.0),
        ];
        for p in points {
            let h = heading(&GeoPoint::default(), &p, Direction::Forward);
            assert!((0.0..360.0).contains(&h), "heading {h} out of range");
        }
    }

    // ---- Altitude ----

    #[test]
    fn test_altitude_profile_shape() {
        let profile = MotionProfile::default();
        assert_eq!(altitude_profile(0.0, &profile), 0.0);
        assert!((altitude_profile(0.1, &profile) - 60.0).abs() < 1e-9);
        assert_eq!(altitude_profile(0.5, &profile), 120.0);
        assert!((altitude_profile(0.9, &profile) - 60.0).abs() < 1e-9);
        assert!(altitude_profile(1.0, &profile).abs() < 1e-9);
    }

    #[test]
    fn test_target_altitude_by_mode() {
        let profile = MotionProfile::default();
        assert_eq!(target_altitude(FlightMode::Auto, 0.5, 7.0, &profile), 120.0);
        assert_eq!(target_altitude(FlightMode::Rtl, 0.5, 7.0, &profile), 120.0);
        assert_eq!(target_altitude(FlightMode::Hover, 0.5, 7.0, &profile), 7.0);
        assert_eq!(target_altitude(FlightMode::Paused, 0.5, 7.0, &profile), 7.0);
        assert_eq!(target_altitude(FlightMode::Landing, 0.5, 7.0, &profile), 0.0);
        assert_eq!(target_altitude(FlightMode::Emergency, 0.5, 7.0, &profile), 0.0);
    }

    #[test]
    fn test_ramp_never_overshoots() {
        assert_eq!(ramp_altitude(0.0, 120.0, 5.0), 5.0);
        assert_eq!(ramp_altitude(118.0, 120.0, 5.0), 120.0);
        assert_eq!(ramp_altitude(120.0, 0.0, 15.0), 105.0);
        assert_eq!(ramp_altitude(3.0, 0.0, 15.0), 0.0);
        assert_eq!(ramp_altitude(50.0, 50.0, 5.0), 50.0);
    }

    // ---- Speed ----

    #[test]
    fn test_speed_reduced_in_climb_and_descent() {
        let profile = MotionProfile::default();
        assert!((cruise_speed(0.05, &profile) - 27.0).abs() < 1e-9);
        assert!((cruise_speed(0.95, &profile) - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_cruise_speed_varies_within_band() {
        let profile = MotionProfile::default();
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 16..85 {
            let s = cruise_speed(i as f64 / 100.0, &profile);
            min = min.min(s);
            max = max.max(s);
        }
        assert!(min >= 45.0 * 0.95 - 1e-9);
        assert!(max <= 45.0 * 1.05 + 1e-9);
        assert!(max - min > 1.0, "cruise speed should not be constant");
    }

    #[test]
    fn test_stationary_modes_have_zero_speed() {
        let profile = MotionProfile::default();
        for mode in [
            FlightMode::Paused,
            FlightMode::Hover,
            FlightMode::Landing,
            FlightMode::Emergency,
        ] {
            assert_eq!(ground_speed(mode, 0.5, &profile), 0.0, "{mode}");
        }
        let rtl = ground_speed(FlightMode::Rtl, 0.05, &profile);
        assert!((rtl - 27.0 * 1.2).abs() < 1e-9);
    }

    // ---- Battery ----

    #[test]
    fn test_drain_rates() {
        let profile = MotionProfile::default();
        assert_eq!(battery_drain(FlightMode::Auto, 0.5, &profile), 0.02);
        assert_eq!(battery_drain(FlightMode::Auto, 0.05, &profile), 0.04);
        assert_eq!(battery_drain(FlightMode::Auto, 0.95, &profile), 0.04);
        assert_eq!(battery_drain(FlightMode::Hover, 0.5, &profile), 0.015);
        assert_eq!(battery_drain(FlightMode::Paused, 0.5, &profile), 0.015);
        assert_eq!(battery_drain(FlightMode::Emergency, 0.5, &profile), 0.1);
        assert_eq!(battery_drain(FlightMode::Landing, 0.5, &profile), 0.04);
    }

    #[test]
    fn test_battery_floor() {
        let profile = MotionProfile::default();
        assert_eq!(drain_battery(5.05, 0.1, &profile), 5.0);
        assert_eq!(drain_battery(5.0, 0.1, &profile), 5.0);
    }

    #[test]
    fn test_flight_phase_bands() {
        let profile = MotionProfile::default();
        assert_eq!(flight_phase(0.0, &profile), FlightPhase::Climb);
        assert_eq!(flight_phase(0.2, &profile), FlightPhase::Cruise);
        assert_eq!(flight_phase(0.8, &profile), FlightPhase::Cruise);
        assert_eq!(flight_phase(0.86, &profile), FlightPhase::Descent);
    }

    // ---- Progress ----

    #[test]
    fn test_advance_progress_flips_at_bounds() {
        assert_eq!(advance_progress(0.996, Direction::Forward, 0.008), (1.0, Direction::Backward));
        assert_eq!(advance_progress(0.004, Direction::Backward, 0.008), (0.0, Direction::Forward));
        let (p, d) = advance_progress(0.5, Direction::Forward, 0.008);
        assert!((p - 0.508).abs() < 1e-12);
        assert_eq!(d, Direction::Forward);
    }

    // ---- Commands ----

    #[test]
    fn test_apply_command_table() {
        use FlightCommand as C;
        use FlightMode as M;
        assert_eq!(apply_command(M::Auto, C::Pause), M::Paused);
        assert_eq!(apply_command(M::Auto, C::Hover), M::Hover);
        assert_eq!(apply_command(M::Auto, C::Land), M::Landing);
        assert_eq!(apply_command(M::Auto, C::Rtl), M::Rtl);
        assert_eq!(apply_command(M::Auto, C::EmergencyStop), M::Emergency);
        assert_eq!(apply_command(M::Paused, C::Resume), M::Auto);
        assert_eq!(apply_command(M::Hover, C::Resume), M::Auto);
        assert_eq!(apply_command(M::Hover, C::Land), M::Landing);
        assert_eq!(apply_command(M::Landing, C::Takeoff), M::Auto);
        assert_eq!(apply_command(M::Emergency, C::Takeoff), M::Auto);
    }

    #[test]
    fn test_resume_ignored_outside_hold() {
        assert_eq!(apply_command(FlightMode::Auto, FlightCommand::Resume), FlightMode::Auto);
        assert_eq!(apply_command(FlightMode::Landing, FlightCommand::Resume), FlightMode::Landing);
        assert_eq!(
            apply_command(FlightMode::Emergency, FlightCommand::Resume),
            FlightMode::Emergency
        );
        assert_eq!(apply_command(FlightMode::Rtl, FlightCommand::Resume), FlightMode::Rtl);
    }

    #[test]
    fn test_terminal_modes_only_accept_takeoff() {
        use FlightCommand as C;
        let ignored = [C::Land, C::Rtl, C::EmergencyStop, C::Pause, C::Hover, C::Resume];
        for mode in [FlightMode::Landing, FlightMode::Emergency] {
            for command in ignored {
                assert_eq!(apply_command(mode, command), mode, "{command:?} left {mode:?}");
            }
            assert_eq!(apply_command(mode, C::Takeoff), FlightMode::Auto);
        }
    }

    #[test]
    fn test_apply_command_idempotent() {
        let once = apply_command(FlightMode::Auto, FlightCommand::Land);
        let twice = apply_command(once, FlightCommand::Land);
        assert_eq!(once, twice);
    }

    // ---- FSM step ----

    #[test]
    fn test_auto_step_advances() {
        let profile = MotionProfile::default();
        let update = evaluate(&make_context(FlightMode::Auto, 0.0, Direction::Forward), &profile);
        assert!((update.progress - 0.008).abs() < 1e-12);
        assert_eq!(update.mode, FlightMode::Auto);
        assert!(!update.mode_changed);
        assert!(update.current_altitude > 0.0);
        assert!(update.current_altitude <= 5.0);
        assert!(update.ground_speed > 0.0);
        assert!((update.heading - 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_hover_step_freezes() {
        let profile = MotionProfile::default();
        let mut ctx = make_context(FlightMode::Hover, 0.4, Direction::Forward);
        ctx.target_altitude = 80.0;
        ctx.current_altitude = 80.0;
        ctx.heading = 315.0;
        let update = evaluate(&ctx, &profile);
        assert_eq!(update.progress, 0.4);
        assert_eq!(update.target_altitude, 80.0);
        assert_eq!(update.current_altitude, 80.0);
        assert_eq!(update.ground_speed, 0.0);
        assert_eq!(update.heading, 315.0);
        assert!((ctx.battery - update.battery - 0.015).abs() < 1e-9);
    }

    #[test]
    fn test_emergency_step_descends_fast() {
        let profile = MotionProfile::default();
        let mut ctx = make_context(FlightMode::Emergency, 0.5, Direction::Forward);
        ctx.target_altitude = 120.0;
        ctx.current_altitude = 120.0;
        let update = evaluate(&ctx, &profile);
        assert_eq!(update.target_altitude, 0.0);
        assert_eq!(update.current_altitude, 105.0);
        assert_eq!(update.ground_speed, 0.0);
        assert_eq!(update.progress, 0.5);
        assert!((ctx.battery - update.battery - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_rtl_step_reverses_and_lands_at_origin() {
        let profile = MotionProfile::default();
        let update = evaluate(&make_context(FlightMode::Rtl, 0.5, Direction::Forward), &profile);
        assert!((update.progress - (0.5 - 0.012)).abs() < 1e-12);
        assert_eq!(update.direction, Direction::Backward);
        assert!((update.heading - 135.0).abs() < 1e-9);

        let arrival = evaluate(&make_context(FlightMode::Rtl, 0.01, Direction::Backward), &profile);
        assert_eq!(arrival.progress, 0.0);
        assert_eq!(arrival.mode, FlightMode::Landing);
        assert!(arrival.mode_changed);
        assert_eq!(arrival.ground_speed, 0.0);
        assert_eq!(arrival.target_altitude, 0.0);
        assert_eq!(arrival.direction, Direction::Forward);
    }

    #[test]
    fn test_takeoff_after_rtl_arrival_moves_immediately() {
        let profile = MotionProfile::default();
        let arrival = evaluate(&make_context(FlightMode::Rtl, 0.01, Direction::Backward), &profile);

        let mut ctx = make_context(
            apply_command(arrival.mode, FlightCommand::Takeoff),
            arrival.progress,
            arrival.direction,
        );
        ctx.heading = arrival.heading;
        let update = evaluate(&ctx, &profile);
        assert_eq!(update.mode, FlightMode::Auto);
        assert!((update.progress - 0.008).abs() < 1e-12);
        assert_eq!(update.direction, Direction::Forward);
        assert!(update.ground_speed > 0.0);
    }

    #[test]
    fn test_paused_step_freezes() {
        let profile = MotionProfile::default();
        let mut ctx = make_context(FlightMode::Paused, 0.6, Direction::Backward);
        ctx.target_altitude = 120.0;
        ctx.current_altitude = 118.0;
        ctx.heading = 135.0;
        let update = evaluate(&ctx, &profile);
        assert_eq!(update.progress, 0.6);
        assert_eq!(update.direction, Direction::Backward);
        assert_eq!(update.target_altitude, 120.0);
        assert_eq!(update.current_altitude, 120.0);
        assert_eq!(update.ground_speed, 0.0);
        assert_eq!(update.heading, 135.0);
        assert!((ctx.battery - update.battery - 0.015).abs() < 1e-9);
    }

    #[test]
    fn test_custom_profile_cruise_altitude() {
        let profile = MotionProfile {
            cruise_altitude: 200.0,
            ..Default::default()
        };
        assert_eq!(altitude_profile(0.5, &profile), 200.0);
    }
}
