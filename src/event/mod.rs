mod bus;
mod events;

pub use bus::EventBus;
pub use events::ShapeEvent;

/// Receives change notifications from point-sequence shapes.
pub trait EventHandler {
    fn handle_event(&mut self, event: &ShapeEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&ShapeEvent),
{
    fn handle_event(&mut self, event: &ShapeEvent) {
        self(event)
    }
}
