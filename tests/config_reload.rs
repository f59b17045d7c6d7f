mod support;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use morphing::prelude::*;
use support::compositor;

fn config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("morphing-{}-{}.toml", std::process::id(), name))
}

#[test]
fn toml_file_is_reread_on_config_change() {
    let path = config_path("reread");
    fs::write(&path, "[morphing]\nduration_ms = 200\n").unwrap();

    let tooltip = Surface::new(SurfaceKind::Tooltip, Geometry::new(0.0, 0.0, 50.0, 20.0));
    let mut compositor = compositor(vec![tooltip], TomlConfig::new(&path));
    assert_eq!(compositor.effect.duration(), Duration::from_millis(200));

    fs::write(&path, "[morphing]\nanimation_speed_factor = 0.5\n").unwrap();
    compositor.dispatch(HostEvent::ConfigChanged);
    assert_eq!(compositor.effect.duration(), Duration::from_millis(75));

    // A broken file keeps what we had.
    fs::write(&path, "[morphing\n").unwrap();
    compositor.dispatch(HostEvent::ConfigChanged);
    assert_eq!(compositor.effect.duration(), Duration::from_millis(75));

    fs::remove_file(&path).unwrap();
    compositor.dispatch(HostEvent::ConfigChanged);
    assert_eq!(compositor.effect.duration(), Duration::from_millis(75));
}

#[test]
fn missing_file_falls_back_to_default() {
    let compositor = compositor(vec![], TomlConfig::new(config_path("missing")));
    assert_eq!(compositor.effect.duration(), DEFAULT_DURATION);
}

#[test]
fn negative_duration_makes_transitions_instant() {
    let tooltip = Surface::new(SurfaceKind::Tooltip, Geometry::new(0.0, 0.0, 50.0, 20.0));
    let id = tooltip.id();
    let settings = EffectSettings {
        duration_ms: Some(-100.0),
        animation_speed_factor: None,
    };
    let mut compositor = compositor(vec![tooltip], settings);
    assert_eq!(compositor.effect.duration(), Duration::ZERO);

    compositor.set_geometry(id, Geometry::new(5.0, 0.0, 50.0, 20.0));
    let movement = compositor.effect.registry().movement(id).unwrap();
    let request = compositor.effect.runtime().request(movement.id()).unwrap();
    assert_eq!(request.duration, Duration::ZERO);
}
