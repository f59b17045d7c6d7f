//! A tooltip chasing a moving cursor.
//!
//! A background thread plays the host: it maps a tooltip and a regular window,
//! then keeps reporting new tooltip geometries faster than one animation lasts.
//! The loop thread feeds those notifications to the effect and prints the
//! interpolated tooltip center each frame, showing retargeting in action.
//!
//! Run with `RUST_LOG=morphing=debug cargo run --example tooltip_follow`.
//! Pass a path to a TOML settings file to override the duration.

use std::thread;
use std::time::{Duration, Instant};

use calloop::EventLoop;
use morphing::prelude::*;
use morphing::retarget::POSITION_TRACK;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), MorphError> {
    env_logger::init();

    let settings: Box<dyn ConfigSource> = match std::env::args().nth(1) {
        Some(path) => {
            let source = TomlConfig::new(path);
            // Fail early on a broken file; reloads later fall back silently.
            source.load()?;
            Box::new(source)
        }
        None => Box::new(EffectSettings::default()),
    };

    let mut event_loop: EventLoop<'static, Compositor<Timeline>> = EventLoop::try_new()?;
    let (sender, channel) = calloop::channel::channel();
    register_events(&event_loop.handle(), channel)?;

    let effect = MorphingEffect::new(Timeline::new(Instant::now()), settings);
    let mut compositor = Compositor::new(SurfaceManager::new(), effect);
    compositor.init();

    let tooltip = Surface::new(SurfaceKind::Tooltip, Geometry::new(100.0, 100.0, 120.0, 24.0));
    let window = Surface::new(SurfaceKind::Other, Geometry::new(0.0, 0.0, 800.0, 600.0));
    let tooltip_id = tooltip.id();

    let host = thread::spawn(move || {
        let _ = sender.send(HostEvent::SurfaceAdded(window));
        let _ = sender.send(HostEvent::SurfaceAdded(tooltip.clone()));

        let mut previous = tooltip.geometry;
        for step in 1..=8 {
            thread::sleep(Duration::from_millis(60));
            let next = previous
                .offset(25.0, 5.0)
                .resized(120.0 + step as f32 * 4.0, 24.0);
            let _ = sender.send(HostEvent::GeometryAboutToChange(tooltip_id));
            let _ = sender.send(HostEvent::GeometryChanged {
                surface: tooltip_id,
                geometry: next,
                previous: Some(previous),
            });
            previous = next;
        }
    });

    let deadline = Instant::now() + Duration::from_secs(1);
    while Instant::now() < deadline {
        event_loop.dispatch(Some(FRAME), &mut compositor)?;
        compositor.effect.advance(Instant::now());

        let center = compositor
            .effect
            .registry()
            .movement(tooltip_id)
            .and_then(|handle| handle.track(POSITION_TRACK))
            .and_then(|track| compositor.effect.runtime().value(track));
        if let Some(TrackValue::Pair(x, y)) = center {
            println!("tooltip center: ({:.1}, {:.1})", x, y);
        }
    }

    if host.join().is_err() {
        log::warn!("Host thread panicked");
    }
    Ok(())
}
