/*
 * Copyright (c) 2024-2025. Rob Hartley and others.
 *
 * This file is part of Osprey Route Planner.
 *
 * Osprey Route Planner is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Osprey Route Planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Osprey Route Planner; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Rob Hartley
 *
 */

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use async_channel::{Receiver, Sender, TrySendError};
use log::warn;

use crate::model::route::RouteChange;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventType {
    AirportsLoaded,
    AircraftLoaded,
    RouteChanged,
    PreferencesChanged,
    StatusChange,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Event {
    AirportsLoaded,
    AircraftLoaded,
    RouteChanged(RouteChange),
    PreferencesChanged,
    StatusChange(String),
}

impl Event {
    fn event_type(&self) -> EventType {
        match self {
            Event::AirportsLoaded => EventType::AirportsLoaded,
            Event::AircraftLoaded => EventType::AircraftLoaded,
            Event::RouteChanged(_) => EventType::RouteChanged,
            Event::PreferencesChanged => EventType::PreferencesChanged,
            Event::StatusChange(_) => EventType::StatusChange,
        }
    }
}

static MANAGER: LazyLock<EventManager> = LazyLock::new(|| EventManager {
    listeners: RwLock::new(HashMap::new()),
});

pub fn manager() -> &'static EventManager {
    &MANAGER
}

pub struct EventManager {
    listeners: RwLock<HashMap<EventType, Vec<Sender<Event>>>>,
}

impl EventManager {
    // Registers a listener for multiple `event_types`.
    // Returns a receiver that will receive copies of those events when notified.
    pub fn register_listener(&self, event_types: &[EventType]) -> Option<Receiver<Event>> {
        let (tx, rx) = async_channel::unbounded::<Event>();

        for event_type in event_types.iter().cloned() {
            self.listeners.write().ok().map(|mut listeners| {
                listeners
                    .entry(event_type)
                    .or_insert_with(Vec::new)
                    .push(tx.clone());
            });
        }
        Some(rx)
    }

    /// Notify only listeners registered for the specific `ev`.
    pub fn notify_listeners(&self, ev: Event) {
        let key = ev.event_type();

        if let Ok(listeners) = self.listeners.read() {
            if let Some(vec) = listeners.get(&key) {
                for listener in vec.iter() {
                    match listener.try_send(ev.clone()) {
                        Ok(_) => {}
                        Err(TrySendError::Closed(_)) => {
                            warn!("Listener channel closed");
                        }
                        Err(TrySendError::Full(_)) => {}
                    }
                }
            }
        }
        if let Ok(mut listeners) = self.listeners.write() {
            // Remove closed senders and remove empty vectors
            listeners.retain(|_, v| {
                v.retain(|l| !l.is_closed());
                !v.is_empty()
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_channel::TryRecvError;

    #[test]
    fn test_register_listener() {
        let manager = EventManager {
            listeners: RwLock::new(HashMap::new()),
        };

        let receiver = manager.register_listener(&[EventType::AirportsLoaded]);
        assert!(receiver.is_some());
    }

    #[test]
    fn test_notify_listeners() {
        let manager = EventManager {
            listeners: RwLock::new(HashMap::new()),
        };

        let receiver = manager
            .register_listener(&[EventType::AirportsLoaded])
            .unwrap();
        manager.notify_listeners(Event::AirportsLoaded);

        match receiver.try_recv() {
            Ok(event) => assert_eq!(event, Event::AirportsLoaded),
            Err(_) => panic!("Expected event not received"),
        }
    }

    #[test]
    fn test_notify_multiple_listeners() {
        let manager = EventManager {
            listeners: RwLock::new(HashMap::new()),
        };

        let receiver1 = manager
            .register_listener(&[EventType::AircraftLoaded])
            .unwrap();
        let receiver2 = manager
            .register_listener(&[EventType::AircraftLoaded])
            .unwrap();
        manager.notify_listeners(Event::AircraftLoaded);

        match receiver1.try_recv() {
            Ok(event) => assert_eq!(event, Event::AircraftLoaded),
            Err(_) => panic!("Expected event not received by listener 1"),
        }

        match receiver2.try_recv() {
            Ok(event) => assert_eq!(event, Event::AircraftLoaded),
            Err(_) => panic!("Expected event not received by listener 2"),
        }
    }

    #[test]
    fn test_listener_gets_only_registered_types() {
        let manager = EventManager {
            listeners: RwLock::new(HashMap::new()),
        };

        let receiver = manager
            .register_listener(&[EventType::RouteChanged])
            .unwrap();
        manager.notify_listeners(Event::AirportsLoaded);

        match receiver.try_recv() {
            Err(TryRecvError::Empty) => {}
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_listener_channel_closed() {
        let manager = EventManager {
            listeners: RwLock::new(HashMap::new()),
        };

        let receiver = manager
            .register_listener(&[EventType::AirportsLoaded])
            .unwrap();
        drop(receiver); // Close the receiver

        manager.notify_listeners(Event::AirportsLoaded);

        // Ensure no listeners are left
        assert!(manager.listeners.read().unwrap().is_empty());
    }

    #[test]
    fn test_route_change_with_payload() {
        let manager = EventManager {
            listeners: RwLock::new(HashMap::new()),
        };

        let rx = manager
            .register_listener(&[EventType::RouteChanged])
            .unwrap();
        manager.notify_listeners(Event::RouteChanged(RouteChange::Cleared));

        match rx.try_recv() {
            Ok(Event::RouteChanged(change)) => assert_eq!(change, RouteChange::Cleared),
            other => panic!("Expected route change event, got {:?}", other),
        }
    }

    #[test]
    fn test_status_change_with_payload() {
        let manager = EventManager {
            listeners: RwLock::new(HashMap::new()),
        };

        let rx = manager
            .register_listener(&[EventType::StatusChange])
            .unwrap();
        manager.notify_listeners(Event::StatusChange("hello".to_string()));

        match rx.try_recv() {
            Ok(event) => match event {
                Event::StatusChange(s) => assert_eq!(s, "hello"),
                _ => panic!("Wrong event variant"),
            },
            Err(_) => panic!("Expected status change event"),
        }
    }
}
