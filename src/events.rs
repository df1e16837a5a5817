/// Handlers for one event source, called in registration order.
pub struct Subscribers<E> {
    handlers: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<E> Subscribers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&E) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Run every handler to completion before returning.
    pub fn emit(&mut self, event: &E) {
        for handler in self.handlers.iter_mut() {
            handler(event);
        }
    }
}
