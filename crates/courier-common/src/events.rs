use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::AccountId;

/// Notifications published by the core for the UI shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Event {
    /// The set of registered accounts changed (add or delete).
    AccountsChanged,
    /// An account's unread flag transitioned.
    UnreadChanged { account_id: AccountId, unread: bool },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::AccountsChanged);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::AccountsChanged));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::Shutdown));
        assert!(matches!(e2, Event::Shutdown));
    }

    #[tokio::test]
    async fn unread_events_carry_account_and_flag() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let account = AccountId::from("acct-1");

        bus.publish(Event::UnreadChanged {
            account_id: account.clone(),
            unread: true,
        });
        bus.publish(Event::UnreadChanged {
            account_id: account.clone(),
            unread: false,
        });

        let e1 = rx.recv().await.unwrap();
        assert!(
            matches!(e1, Event::UnreadChanged { ref account_id, unread } if *account_id == account && unread)
        );

        let e2 = rx.recv().await.unwrap();
        assert!(
            matches!(e2, Event::UnreadChanged { ref account_id, unread } if *account_id == account && !unread)
        );
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::AccountsChanged);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(Event::AccountsChanged);
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"some_future_event","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }

    #[test]
    fn event_serialization_shape() {
        let event = Event::UnreadChanged {
            account_id: AccountId::from("acct-2"),
            unread: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"unread_changed\""));
        assert!(json.contains("\"acct-2\""));
    }
}
