use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::app::AppMessage;
use crate::views::Scoped;

pub enum Event {
    Key(KeyEvent),
    Tick,
    /// A remote call finished; tagged with the view epoch that issued it.
    Loaded(Scoped<AppMessage>),
}

pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = mpsc::channel();
        let sender_clone = sender.clone();

        thread::spawn(move || loop {
            match event::poll(Duration::from_millis(tick_rate)) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press && sender_clone.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => {}
            }
            if sender_clone.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { sender, receiver }
    }

    /// Sender handed to spawned tasks so their results join the key stream.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
