use std::cell::RefCell;
use crate::event::{EventHandler, ShapeEvent};

/// Observers of one point list. Each squiggle or polyline owns its own bus,
/// and a cloned shape starts with no observers.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        // Observers belong to the instance they were registered on
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// A bus with no observers
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Registers `handler` for every later change to the point list
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Calls each observer with `event`, in registration order
    pub fn emit(&self, event: ShapeEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_handler() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in 0..2 {
            let seen = Rc::clone(&seen);
            bus.subscribe(Box::new(move |event: &ShapeEvent| {
                seen.borrow_mut().push((tag, *event));
            }));
        }

        let event = ShapeEvent::PointAdded { index: 0, point: Point::new(1, 2) };
        bus.emit(event);

        assert_eq!(*seen.borrow(), vec![(0, event), (1, event)]);
    }

    #[test]
    fn test_clone_drops_handlers() {
        let bus = EventBus::new();
        bus.subscribe(Box::new(|_: &ShapeEvent| {}));
        assert_eq!(bus.handler_count(), 1);
        assert_eq!(bus.clone().handler_count(), 0);
    }
}
