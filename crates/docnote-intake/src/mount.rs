//! Mounted/unmounted signal for a screen instance.

use tokio::sync::watch;

/// Create a signal pair. The handle stays with whoever owns the screen's
/// lifetime; the watch goes to work running on the screen's behalf.
pub fn mount() -> (MountHandle, Mounted) {
    let (tx, rx) = watch::channel(false);
    (MountHandle(tx), Mounted(rx))
}

/// Dropping the handle also counts as unmounting.
#[derive(Debug)]
pub struct MountHandle(watch::Sender<bool>);

impl MountHandle {
    pub fn unmount(&self) {
        self.0.send_replace(true);
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.0.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct Mounted(watch::Receiver<bool>);

impl Mounted {
    pub fn is_mounted(&self) -> bool {
        !*self.0.borrow()
    }

    /// Resolves once the screen has unmounted.
    pub async fn unmounted(&mut self) {
        // An error means the sender is gone, which only happens after
        // `Drop` already sent `true`.
        let _ = self.0.wait_for(|unmounted| *unmounted).await;
    }
}
