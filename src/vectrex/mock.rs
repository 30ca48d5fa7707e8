//! Recording channel output for tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::vectrex::channel::{decode, Channel, ChannelOutput};
use crate::vectrex::coord::Coord;

/// What the driver asked the peripheral to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Enable(Channel),
    Disable(Channel),
    Write(Channel, u8),
}

/// Injected peripheral failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

/// Logs every call into a shared event list, so the log survives the driver
#[derive(Debug, Default, Clone)]
pub struct RecordingOutput {
    pub events: Rc<RefCell<Vec<Event>>>,
    /// Number of level writes to accept before failing
    pub fail_after: Option<usize>,
    writes: usize,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(writes: usize) -> Self {
        RecordingOutput {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Number of level writes on the channel
    pub fn writes_on(&self, channel: Channel) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Write(c, _) if *c == channel))
            .count()
    }

    fn writes(&self) -> Vec<(Channel, i16)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Write(channel, level) => Some((*channel, decode(*level))),
                _ => None,
            })
            .collect()
    }

    /// Beam position after every single write, starting from `from`
    pub fn positions(&self, from: Coord) -> Vec<Coord> {
        let mut beam = from;
        self.writes()
            .into_iter()
            .map(|(channel, value)| {
                match channel {
                    Channel::X => beam.x = value,
                    Channel::Y => beam.y = value,
                }
                beam
            })
            .collect()
    }

    /// Points visited by a general line, starting from `from`
    ///
    /// A point move writes X then Y, so such a pair counts as one point.
    pub fn points(&self, from: Coord) -> Vec<Coord> {
        let writes = self.writes();
        let mut beam = from;
        let mut points = Vec::new();
        let mut i = 0;
        while i < writes.len() {
            match writes[i] {
                (Channel::X, x) => {
                    beam.x = x;
                    if let Some((Channel::Y, y)) = writes.get(i + 1).copied() {
                        beam.y = y;
                        i += 1;
                    }
                }
                (Channel::Y, y) => beam.y = y,
            }
            points.push(beam);
            i += 1;
        }
        points
    }
}

impl ChannelOutput for RecordingOutput {
    type Error = Fault;

    fn enable_channel(&mut self, channel: Channel) -> Result<(), Fault> {
        self.events.borrow_mut().push(Event::Enable(channel));
        Ok(())
    }

    fn disable_channel(&mut self, channel: Channel) -> Result<(), Fault> {
        self.events.borrow_mut().push(Event::Disable(channel));
        Ok(())
    }

    fn write_level(&mut self, channel: Channel, level: u8) -> Result<(), Fault> {
        if self.fail_after.is_some_and(|limit| self.writes >= limit) {
            return Err(Fault);
        }
        self.writes += 1;
        self.events.borrow_mut().push(Event::Write(channel, level));
        Ok(())
    }
}
