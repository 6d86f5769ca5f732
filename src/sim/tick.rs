//! Per-frame command processing
//!
//! Hosts may call the `on_*` handlers directly from their event callbacks, or
//! queue commands and drain them once per frame with [`Engine::tick`] so that
//! key and pointer events are applied in a single, well-defined order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::body::Handle;
use super::motion::Key;
use super::state::{Engine, MoveOutcome, RotateOutcome};

/// A raw input event forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    KeyDown { key: Key },
    KeyUp { key: Key },
    PointerDown { handle: Handle, x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
}

/// FIFO of commands waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return everything queued, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}

/// What happened during one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u64,
    /// Outcome of every pointer move that rotated (or tried to)
    pub rotations: Vec<RotateOutcome>,
    pub movement: MoveOutcome,
    /// Win latch state after this frame
    pub won: bool,
}

impl Engine {
    /// Apply one command immediately; returns the rotation outcome for pointer moves
    pub fn apply(&mut self, command: Command) -> Option<RotateOutcome> {
        match command {
            Command::KeyDown { key } => self.on_key_down(key),
            Command::KeyUp { key } => self.on_key_up(key),
            Command::PointerDown { handle, x, y } => self.on_pointer_down(handle, x, y),
            Command::PointerMove { x, y } => return self.on_pointer_move(x, y),
            Command::PointerUp => self.on_pointer_up(),
        }
        None
    }

    /// Queue a command for the next tick
    pub fn enqueue(&mut self, command: Command) {
        self.queue.push(command);
    }

    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// Drain queued commands in arrival order, then advance one frame
    pub fn tick(&mut self) -> FrameReport {
        let commands: Vec<Command> = self.queue.drain().collect();
        let rotations = commands
            .into_iter()
            .filter_map(|command| self.apply(command))
            .collect();
        let movement = self.advance_frame();
        FrameReport {
            frame: self.frame(),
            rotations,
            movement,
            won: self.has_won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Level, Pose};
    use crate::Settings;

    #[test]
    fn test_queue_is_fifo() {
        let mut q = CommandQueue::new();
        q.push(Command::KeyDown { key: Key::Left });
        q.push(Command::PointerUp);
        assert_eq!(q.len(), 2);
        let drained: Vec<_> = q.drain().collect();
        assert_eq!(
            drained,
            vec![Command::KeyDown { key: Key::Left }, Command::PointerUp]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn test_tick_applies_commands_before_moving() {
        let mut e = Engine::reference().unwrap();
        e.enqueue(Command::KeyDown { key: Key::Right });
        assert_eq!(e.pending_commands(), 1);

        let report = e.tick();
        assert_eq!(report.frame, 1);
        assert_eq!(report.movement, MoveOutcome::Moved { x: 103.0, y: 150.0 });
        assert!(report.rotations.is_empty());
        assert_eq!(e.pending_commands(), 0);

        // Key stays held across ticks
        assert_eq!(e.tick().movement, MoveOutcome::Moved { x: 106.0, y: 150.0 });
    }

    #[test]
    fn test_press_and_release_in_same_tick_cancels() {
        let mut e = Engine::reference().unwrap();
        e.enqueue(Command::KeyDown { key: Key::Up });
        e.enqueue(Command::KeyUp { key: Key::Up });
        assert_eq!(e.tick().movement, MoveOutcome::Idle);
        assert_eq!(e.pose(), Pose::new(100.0, 150.0, 0.0));
    }

    #[test]
    fn test_tick_reports_rotations_in_order() {
        let mut e = Engine::new(Level::open(), Settings::default()).unwrap();
        // Bottom pivot (106, 250); grab along +x then sweep to straight down
        e.enqueue(Command::PointerDown {
            handle: Handle::Bottom,
            x: 166.0,
            y: 250.0,
        });
        e.enqueue(Command::PointerMove { x: 106.0, y: 310.0 });
        e.enqueue(Command::PointerUp);
        e.enqueue(Command::PointerMove { x: 166.0, y: 250.0 });

        let report = e.tick();
        assert_eq!(
            report.rotations,
            vec![RotateOutcome::Reached { rotation_deg: 90.0 }]
        );
        assert!(!e.is_dragging());
        assert_eq!(e.pose().rotation_deg, 90.0);
    }

    #[test]
    fn test_command_json_format() {
        let cmd: Command = serde_json::from_str(r#"{ "type": "key_down", "key": "Right" }"#).unwrap();
        assert_eq!(cmd, Command::KeyDown { key: Key::Right });
        let cmd: Command = serde_json::from_str(
            r#"{ "type": "pointer_down", "handle": "Top", "x": 1.0, "y": 2.0 }"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            Command::PointerDown {
                handle: Handle::Top,
                x: 1.0,
                y: 2.0
            }
        );
        let cmd: Command = serde_json::from_str(r#"{ "type": "pointer_up" }"#).unwrap();
        assert_eq!(cmd, Command::PointerUp);
    }
}
