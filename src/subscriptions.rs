pub struct Subscriptions<H> {
    handles: Vec<H>,
    torn_down: bool,
}

impl<H> Subscriptions<H> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
            torn_down: false,
        }
    }

    pub fn hold(&mut self, handle: H) {
        if self.torn_down {
            drop(handle);
            return;
        }
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn teardown(&mut self) -> usize {
        self.torn_down = true;
        let released = self.handles.len();
        // Release in reverse registration order.
        while let Some(handle) = self.handles.pop() {
            drop(handle);
        }
        released
    }
}

impl<H> Default for Subscriptions<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Drop for Subscriptions<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
