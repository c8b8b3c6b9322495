//! Staged construction: what each builder demands before it yields a value.

mod common;

use s2bridge::prelude::*;
use s2bridge_wire as wire;

use common::{ATTACK, MOVE, ability, catalog, init_tracing};

// =========================================================================
// Derived port assignment
// =========================================================================

#[test]
fn test_derived_ports_for_two_participants() {
    init_tracing();

    let options = MultiplayerOptions::for_participants(5000, 2).unwrap();
    assert_eq!(options.shared_port(), 5001);
    assert_eq!(options.server_port(), PortSet::new(5002, 5003).unwrap());

    let clients: Vec<(u16, u16)> = options
        .client_ports()
        .iter()
        .map(|p| (p.game_port(), p.base_port()))
        .collect();
    assert_eq!(clients, vec![(5004, 5005), (5006, 5007)]);
}

#[test]
fn test_derived_ports_from_json_config() {
    let config: MultiplayerConfig =
        serde_json::from_str(r#"{ "port_start": 7000, "participants": 1 }"#).unwrap();
    let options = MultiplayerOptions::from_config(&config).unwrap();
    assert_eq!(options.shared_port(), 7001);
    assert_eq!(options.client_ports().len(), 1);
}

#[test]
fn test_staged_ports_match_derived_ports() {
    let staged = MultiplayerOptions::builder()
        .shared_port(5001)
        .unwrap()
        .server_port(PortSet::new(5002, 5003).unwrap())
        .client_ports([PortSet::new(5006, 5007).unwrap()])
        .client_ports([PortSet::new(5004, 5005).unwrap()])
        .build()
        .unwrap();
    assert_eq!(
        staged,
        MultiplayerOptions::from_config(&MultiplayerConfig::default()).unwrap()
    );
}

// =========================================================================
// Command staging
// =========================================================================

#[test]
fn test_command_without_target_or_queue_builds() {
    let command = UnitCommand::builder()
        .for_units([Tag(1)])
        .use_ability(ability(MOVE))
        .build()
        .unwrap();
    assert_eq!(command.target(), Target::None);
    assert!(!command.is_queued());
    assert_eq!(command.encode().queue_command, None);
}

#[test]
fn test_command_with_no_units_fails_at_build() {
    let err = UnitCommand::builder()
        .for_units([])
        .use_ability(ability(ATTACK))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::EmptyRequiredCollection {
            name: "unit tag list"
        }
    );
}

#[test]
fn test_decode_without_ability_matches_builder_error() {
    let msg = wire::ActionRawUnitCommand {
        unit_tags: vec![1],
        ..wire::ActionRawUnitCommand::default()
    };
    let err = UnitCommand::decode(&msg, &catalog()).unwrap_err();
    assert_eq!(err, MappingError::MissingRequiredField { name: "ability id" });
}

// =========================================================================
// Other builders
// =========================================================================

#[test]
fn test_debug_draw_single_line() {
    let draw = DebugDraw::builder()
        .lines([DebugLine::new(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 4.0, 0.0))
            .with_color(Color::WHITE)])
        .build()
        .unwrap();
    assert_eq!(draw.lines()[0].color(), Some(Color::WHITE));
}

#[test]
fn test_observation_response_builder_with_only_observation() {
    let response = ResponseObservation::builder()
        .observation(Observation::new(0, PlayerCommon::new(1, 50, 0, 12, 15)))
        .build();
    let encoded = response.encode();
    assert!(encoded.has_observation());
    assert!(encoded.actions.is_empty());
    assert!(encoded.chat.is_empty());
}

#[test]
fn test_map_state_missing_creep() {
    let layer = wire::ImageData {
        bits_per_pixel: Some(8),
        size: Some(wire::Size2DI {
            x: Some(2),
            y: Some(2),
        }),
        data: Some(vec![0; 4]),
    };
    let catalog = catalog();

    for visibility in [Some(layer.clone()), None] {
        let msg = wire::MapState {
            visibility,
            creep: None,
        };
        assert_eq!(
            MapState::decode(&msg, &catalog).unwrap_err(),
            MappingError::MissingRequiredField { name: "creep" }
        );
    }

    let complete = wire::MapState {
        visibility: Some(layer.clone()),
        creep: Some(layer),
    };
    assert!(MapState::decode(&complete, &catalog).is_ok());
}
