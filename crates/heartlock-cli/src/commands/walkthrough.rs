//! Walkthrough command - unlock and step through the scenes against a recording host

use anyhow::Result;
use heartlock_core::Viewport;
use heartlock_runtime::RecordingSurface;
use heartlock_scene::{HeadlessHost, HostEvent, Presentation, PresentationConfig};
use std::time::Duration;

/// Host frame interval
const FRAME: Duration = Duration::from_millis(16);

pub struct WalkthroughArgs {
    pub config: PresentationConfig,
    pub combination: Option<[u8; 3]>,
    pub advances: u32,
    pub frames_per_scene: u32,
    pub width: f32,
    pub height: f32,
}

struct Session {
    presentation: Presentation,
    host: HeadlessHost,
    surface: RecordingSurface,
    now: Duration,
}

impl Session {
    /// Step host time frame by frame, firing timers and animation frames
    fn run_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.now += FRAME;
            self.presentation.advance_time(self.now, &mut self.host);
            self.presentation.frame(self.now, &mut self.surface);
        }
    }

    fn flush(&mut self, heading: &str) {
        let commands = self.host.take_commands();
        if commands.is_empty() {
            return;
        }
        println!("{}", heading);
        for command in commands {
            println!("  {}", command);
        }
    }
}

/// Dial events that move each dial from 0 to its digit by the shortest way
fn dial_events(combination: [u8; 3]) -> Vec<HostEvent> {
    let mut events = Vec::new();
    for (dial, &digit) in combination.iter().enumerate() {
        if digit <= 5 {
            events.extend((0..digit).map(|_| HostEvent::IncrementDial(dial)));
        } else {
            events.extend((0..10 - digit).map(|_| HostEvent::DecrementDial(dial)));
        }
    }
    events
}

pub fn run(args: WalkthroughArgs) -> Result<()> {
    let viewport = Viewport::new(args.width, args.height);
    let combination = args.combination.unwrap_or(args.config.lock.combination);
    let unlock_frames = (args.config.lock.unlock_delay_ms / FRAME.as_millis() as u64) as u32 + 1;

    let mut session = Session {
        presentation: Presentation::new(args.config, viewport),
        host: HeadlessHost::new(viewport),
        surface: RecordingSurface::new(),
        now: Duration::ZERO,
    };

    println!("Dialing {:?}", combination);
    for event in dial_events(combination) {
        session.presentation.push_event(event);
    }
    // An all-zero combination needs one full turn to be checked
    if combination == [0, 0, 0] {
        session.presentation.push_event(HostEvent::IncrementDial(0));
        session.presentation.push_event(HostEvent::DecrementDial(0));
    }
    session.run_frames(1);
    session.flush("Lock:");

    if !session.presentation.lock().is_unlocked() {
        println!("Lock is still closed at {:?}", session.presentation.lock().dials());
        return Ok(());
    }

    session.run_frames(unlock_frames);
    session.flush("After unlock delay:");

    for press in 1..=args.advances {
        session.presentation.push_event(HostEvent::AdvanceScene);
        session.run_frames(args.frames_per_scene.max(1));
        let heading = format!("Next #{} (scene {}):", press, session.presentation.current_scene());
        session.flush(&heading);
    }

    let driver = session.presentation.driver();
    println!();
    println!("Scene:            {}", session.presentation.current_scene());
    println!("Particles:        {}", session.presentation.particles().field().len());
    println!("Animation:        {:?}", driver.state());
    println!("Frames drawn:     {}", session.surface.clear_count());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_events_take_the_short_way() {
        let events = dial_events([5, 2, 9]);
        assert_eq!(events.len(), 5 + 2 + 1);
        assert_eq!(events[0], HostEvent::IncrementDial(0));
        assert_eq!(events[6], HostEvent::IncrementDial(1));
        assert_eq!(events[7], HostEvent::DecrementDial(2));
    }

    #[test]
    fn dial_events_reach_every_digit() {
        use heartlock_scene::{CombinationLock, DialDirection};

        for digit in 0..10u8 {
            let mut lock = CombinationLock::new([9, 9, 9]);
            for event in dial_events([digit, 0, 0]) {
                match event {
                    HostEvent::IncrementDial(i) => lock.turn(i, DialDirection::Up),
                    HostEvent::DecrementDial(i) => lock.turn(i, DialDirection::Down),
                    _ => unreachable!(),
                };
            }
            assert_eq!(lock.dials()[0], digit);
        }
    }
}
