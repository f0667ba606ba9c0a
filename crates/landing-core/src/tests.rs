#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use crate::commands::PlayerCommand;
    use crate::config::{CategoryProfile, GameConfig, SitePlacement};
    use crate::enums::*;
    use crate::error::ContractError;
    use crate::events::GameEvent;
    use crate::types::{normalize_angle, wrap_signed, Aerodrome, AircraftId, Position};

    // ---- Position ----

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_add_translates_in_place() {
        let mut p = Position::new(1.0, 1.0);
        p.add(Position::new(-3.0, 0.5));
        assert_eq!(p, Position::new(-2.0, 1.5));
        assert_eq!(p.to_string(), "(-2,1.5)");
    }

    // ---- Aerodrome ----

    #[test]
    fn test_boundary_points_are_in_bounds() {
        let aerodrome = Aerodrome::default();
        for p in [
            Position::new(0.0, 0.0),
            Position::new(100.0, 100.0),
            Position::new(0.0, 50.0),
            Position::new(100.0, 50.0),
            Position::new(50.0, 0.0),
            Position::new(50.0, 100.0),
        ] {
            assert!(!aerodrome.is_out_of_bounds(&p), "{p} should be inside");
        }
    }

    #[test]
    fn test_one_unit_outside_any_edge_is_out_of_bounds() {
        let aerodrome = Aerodrome::default();
        for p in [
            Position::new(-1.0, 50.0),
            Position::new(101.0, 50.0),
            Position::new(50.0, -1.0),
            Position::new(50.0, 101.0),
        ] {
            assert!(aerodrome.is_out_of_bounds(&p), "{p} should be outside");
        }
    }

    #[test]
    fn test_aerodrome_dimensions() {
        let aerodrome = Aerodrome::new(-10.0, 40.0, 30.0, 0.0).unwrap();
        assert_eq!(aerodrome.width(), 40.0);
        assert_eq!(aerodrome.height(), 40.0);
    }

    #[test]
    fn test_malformed_aerodrome_rejected() {
        assert!(matches!(
            Aerodrome::new(10.0, 100.0, 10.0, 0.0),
            Err(ContractError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Aerodrome::new(0.0, 0.0, 100.0, 50.0),
            Err(ContractError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Aerodrome::new(0.0, f64::NAN, 100.0, 0.0),
            Err(ContractError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_aerodrome_deserialize_validates() {
        let ok: Aerodrome =
            serde_json::from_str(r#"{"left":0,"top":10,"right":20,"bottom":0}"#).unwrap();
        assert_eq!(ok.width(), 20.0);

        let bad = serde_json::from_str::<Aerodrome>(r#"{"left":5,"top":10,"right":5,"bottom":0}"#);
        assert!(bad.is_err());
    }

    // ---- Angles ----

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-12);
        assert_eq!(normalize_angle(TAU), 0.0);
        let tiny = normalize_angle(-1e-18);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_wrap_signed_range() {
        assert!((wrap_signed(3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(wrap_signed(PI), PI);
        assert!((wrap_signed(-PI) - PI).abs() < 1e-12);
        assert!((wrap_signed(0.25) - 0.25).abs() < 1e-12);
    }

    // ---- Acceptance matrix ----

    #[test]
    fn test_acceptance_matrix_exhaustive() {
        use AircraftCategory::*;
        let expected = [
            (SiteKind::LongRunway, [true, true, false]),
            (SiteKind::ShortRunway, [false, true, false]),
            (SiteKind::Helipad, [false, false, true]),
        ];
        for (site, row) in expected {
            for (category, accepted) in [LargePlane, LightPlane, Helicopter].into_iter().zip(row) {
                assert_eq!(
                    site.accepts(category),
                    accepted,
                    "{site:?} accepting {category}"
                );
            }
        }
    }

    #[test]
    fn test_only_helipad_has_fixed_aperture() {
        assert_eq!(SiteKind::Helipad.fixed_aperture(), Some(TAU));
        assert_eq!(SiteKind::LongRunway.fixed_aperture(), None);
        assert_eq!(SiteKind::ShortRunway.fixed_aperture(), None);
    }

    #[test]
    fn test_edge_inward_headings_point_inside() {
        let aerodrome = Aerodrome::default();
        let starts = [
            (Edge::Bottom, Position::new(50.0, 0.0)),
            (Edge::Right, Position::new(100.0, 50.0)),
            (Edge::Top, Position::new(50.0, 100.0)),
            (Edge::Left, Position::new(0.0, 50.0)),
        ];
        for (edge, mut p) in starts {
            let h = edge.inward_heading();
            p.add(Position::new(h.cos(), h.sin()));
            assert!(!aerodrome.is_out_of_bounds(&p), "{edge:?} normal leaves bounds");
        }
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.sites.len(), 3);
        assert_eq!(config.tick_period().as_millis(), 30);
        let timing = config.spawn_timing();
        assert_eq!(timing.min_delay.as_millis(), 1000);
        assert_eq!(timing.jitter.as_millis(), 1000);
    }

    #[test]
    fn test_config_rejects_contract_violations() {
        let mut config = GameConfig::default();
        config.categories.helicopter = CategoryProfile {
            radius: -1.0,
            min_speed: 1.0,
            max_speed: 2.0,
        };
        assert_eq!(config.validate(), Err(ContractError::NegativeRadius(-1.0)));

        let mut config = GameConfig::default();
        config.sites[0].aperture_angle = TAU + 0.1;
        assert!(matches!(
            config.validate(),
            Err(ContractError::ApertureOutOfRange(_))
        ));

        let mut config = GameConfig::default();
        config.sites[1].aperture_angle = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ContractError::ApertureOutOfRange(_))
        ));

        let mut config = GameConfig::default();
        config.categories.large_plane.min_speed = 20.0;
        assert!(matches!(
            config.validate(),
            Err(ContractError::InvalidSpeedRange { .. })
        ));

        let mut config = GameConfig::default();
        config.tick_period_ms = 0;
        assert_eq!(config.validate(), Err(ContractError::ZeroTickPeriod));

        let mut config = GameConfig::default();
        config.spawn_min_delay_ms = 0;
        config.spawn_jitter_ms = 0;
        assert_eq!(config.validate(), Err(ContractError::ZeroSpawnInterval));
        config.spawn_jitter_ms = 5;
        assert_eq!(config.validate(), Ok(()));

        let mut config = GameConfig::default();
        config.selection_margin = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ContractError::InvalidSelectionMargin(_))
        ));

        let mut config = GameConfig::default();
        config.sites.clear();
        assert_eq!(config.validate(), Err(ContractError::NoLandingSites));

        let mut config = GameConfig::default();
        config.bounds.right = config.bounds.left;
        assert!(matches!(
            config.validate(),
            Err(ContractError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let json = r#"{
            "tick_period_ms": 10,
            "seed": 7,
            "sites": [{ "kind": "Helipad", "x": 10.0, "y": 10.0 }]
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        config.validate().unwrap();
        assert_eq!(config.tick_period_ms, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sites.len(), 1);
        assert_eq!(config.sites[0].aperture_angle, TAU);
        assert_eq!(config.selection_margin, GameConfig::default().selection_margin);
        assert_eq!(config.sites[0], SitePlacement {
            kind: SiteKind::Helipad,
            x: 10.0,
            y: 10.0,
            center_angle: 0.0,
            aperture_angle: TAU,
        });
    }

    // ---- Wire shapes ----

    #[test]
    fn test_event_is_tagged_by_type() {
        let event = GameEvent::Crash {
            first: AircraftId(3),
            second: AircraftId(9),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Crash");
        assert_eq!(json["first"], 3);
        assert_eq!(json["second"], 9);
    }

    #[test]
    fn test_command_deserializes_and_exposes_point() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"OrientateSelected","x":3.0,"y":4.0}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::OrientateSelected { x: 3.0, y: 4.0 });
        assert_eq!(cmd.point(), Position::new(3.0, 4.0));
    }

    #[test]
    fn test_game_phase_defaults_to_not_started() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    }
}
