use tokio::sync::watch;

/// Current viewport width, observed by mounted components.
pub struct Viewport {
    width: watch::Sender<u32>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        let (width, _) = watch::channel(width);
        Self { width }
    }

    pub fn resize(&self, width: u32) {
        self.width.send_replace(width);
    }

    pub fn width(&self) -> u32 {
        *self.width.borrow()
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription(self.width.subscribe())
    }

    #[cfg(test)]
    pub fn subscribers(&self) -> usize {
        self.width.receiver_count()
    }
}

/// Released when dropped, so a component that goes away stops listening.
pub struct ViewportSubscription(watch::Receiver<u32>);

impl ViewportSubscription {
    pub fn width(&self) -> u32 {
        *self.0.borrow()
    }
}
