use tokio::sync::watch;

use betheclub_core::domain::club::Club;

/// Receiving side of a repository's live club listing.
#[derive(Clone, Debug)]
pub struct ClubFeed {
    receiver: watch::Receiver<Vec<Club>>,
}

impl ClubFeed {
    pub fn current(&self) -> Vec<Club> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next published snapshot. Returns `None` once the
    /// repository has been dropped.
    pub async fn changed(&mut self) -> Option<Vec<Club>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

#[derive(Debug)]
pub(crate) struct FeedPublisher {
    sender: watch::Sender<Vec<Club>>,
}

impl Default for FeedPublisher {
    fn default() -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self { sender }
    }
}

impl FeedPublisher {
    pub(crate) fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }

    pub(crate) fn publish(&self, clubs: Vec<Club>) {
        self.sender.send_replace(clubs);
    }

    pub(crate) fn subscribe(&self) -> ClubFeed {
        ClubFeed { receiver: self.sender.subscribe() }
    }
}
