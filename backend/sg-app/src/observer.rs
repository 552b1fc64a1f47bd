use sg_auth::SessionSnapshot;

use log::{debug, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Log every session state change until the store is dropped
pub fn spawn(mut rx: watch::Receiver<SessionSnapshot>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut was_authenticated = rx.borrow_and_update().is_authenticated();

        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();

            if snapshot.is_loading {
                debug!("Session store busy");
                continue;
            }

            match (&snapshot.identity, was_authenticated) {
                (Some(identity), false) => info!("Session opened for {}", identity.id),
                (None, true) => info!("Session closed"),
                (Some(identity), true) => debug!("Session state refreshed for {}", identity.id),
                (None, false) => debug!("Session still anonymous"),
            }
            was_authenticated = snapshot.is_authenticated();
        }

        debug!("Session store dropped, observer exiting");
    })
}
