//! Headless demo: script one break shot and run the table to rest.
//!
//! Run with `RUST_LOG=info cargo run -p break-shot` to watch the shot,
//! pocket drops, and turn changes. The final ball state prints as JSON.

use pool_core::{FrameClock, InputQueue, PointerEvent, PoolSession, SessionEvent};

const MAX_FRAMES: u32 = 5000;

fn report(events: Vec<SessionEvent>, frame: u32) {
    for event in events {
        match event {
            SessionEvent::BallPotted { ball, pocket } => {
                log::info!("frame {}: ball {} dropped into pocket {}", frame, ball.0, pocket)
            }
            SessionEvent::TurnChanged { player } => {
                log::info!("frame {}: turn passes to {:?}", frame, player)
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut session = PoolSession::new();
    let mut input = InputQueue::new();

    // Scripted gesture: press on the cue ball, drag toward the rack with a
    // slight upward bias, release.
    input.push(PointerEvent::Down { x: 200.0, y: 200.0 });
    input.push(PointerEvent::Move { x: 330.0, y: 185.0 });
    input.push(PointerEvent::Up { x: 330.0, y: 185.0 });
    session.handle_input(&mut input);
    report(session.drain_events(), 0);

    let mut clock = FrameClock::standard();
    let host_dt = clock.frame_dt();
    let mut frame = 0;
    while !session.all_at_rest() && frame < MAX_FRAMES {
        // Pretend the host renders at a steady 60 fps
        for _ in 0..clock.advance(host_dt) {
            session.step();
            frame += 1;
        }
        report(session.drain_events(), frame);
    }

    log::info!(
        "table settled after {} frames; {} balls still in play",
        frame,
        session.live_balls().count()
    );

    match serde_json::to_string_pretty(session.balls()) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("could not serialize final state: {}", err),
    }
}
