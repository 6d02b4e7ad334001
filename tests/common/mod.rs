#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use navlight_composer::{Duration, PixelSink, Rgb, TickTimer, config::PIXEL_COUNT};

/// Something that happened to the sink or its collaborators, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    JumperRead,
    SetPixel(usize, Rgb),
    Show,
    TimerStarted(Duration),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Pixel sink that records every call
pub struct RecordingSink {
    pub pixels: [Rgb; PIXEL_COUNT],
    pub shown: Vec<[Rgb; PIXEL_COUNT]>,
    pub log: EventLog,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::with_log(event_log())
    }

    pub fn with_log(log: EventLog) -> Self {
        Self {
            pixels: [Rgb::default(); PIXEL_COUNT],
            shown: Vec::new(),
            log,
        }
    }

    pub fn flushes(&self) -> usize {
        self.shown.len()
    }

    pub fn last_shown(&self) -> Option<[Rgb; PIXEL_COUNT]> {
        self.shown.last().copied()
    }
}

impl PixelSink for RecordingSink {
    fn pixel_count(&self) -> usize {
        PIXEL_COUNT
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.log.borrow_mut().push(Event::SetPixel(index, color));
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.log.borrow_mut().push(Event::Show);
        self.shown.push(self.pixels);
    }
}

/// Timer that only records the requested period
pub struct RecordingTimer {
    pub log: EventLog,
}

impl TickTimer for RecordingTimer {
    fn start_periodic(&mut self, period: Duration) {
        self.log.borrow_mut().push(Event::TimerStarted(period));
    }
}

/// Jumper input returning a fixed level and logging each read
pub fn jumper(level: bool, log: &EventLog) -> impl FnMut() -> bool + '_ {
    move || {
        log.borrow_mut().push(Event::JumperRead);
        level
    }
}
