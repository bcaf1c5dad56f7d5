use serde::Serialize;

/// What a single navigation intent did to the stack.
///
/// Produced by the central coordinator after each mutation and handed to
/// every subscribed observer. `depth` is the stack length afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationEvent<G> {
    /// A route was appended.
    Pushed { route: G, depth: usize },
    /// The tail route was removed.
    Popped { route: G, depth: usize },
    /// A pop was requested on an empty stack and ignored.
    PopIgnored,
    /// The stack was emptied in one step.
    Reset { cleared: usize },
}

impl<G> NavigationEvent<G> {
    /// Whether the stack contents changed.
    ///
    /// A reset of an already empty stack is not a mutation.
    pub fn is_mutation(&self) -> bool {
        match self {
            NavigationEvent::Pushed { .. } | NavigationEvent::Popped { .. } => true,
            NavigationEvent::PopIgnored => false,
            NavigationEvent::Reset { cleared } => *cleared > 0,
        }
    }

    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            NavigationEvent::Pushed { .. } => "pushed",
            NavigationEvent::Popped { .. } => "popped",
            NavigationEvent::PopIgnored => "pop_ignored",
            NavigationEvent::Reset { .. } => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_classification() {
        assert!(NavigationEvent::Pushed { route: 1, depth: 1 }.is_mutation());
        assert!(NavigationEvent::Popped { route: 1, depth: 0 }.is_mutation());
        assert!(!NavigationEvent::<i32>::PopIgnored.is_mutation());
        assert!(NavigationEvent::<i32>::Reset { cleared: 3 }.is_mutation());
        assert!(!NavigationEvent::<i32>::Reset { cleared: 0 }.is_mutation());
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(NavigationEvent::Pushed { route: "a", depth: 1 }).unwrap();
        assert_eq!(json["kind"], "pushed");
        assert_eq!(json["route"], "a");
        assert_eq!(json["depth"], 1);

        let json = serde_json::to_value(NavigationEvent::<&str>::Reset { cleared: 2 }).unwrap();
        assert_eq!(json["kind"], "reset");
        assert_eq!(json["cleared"], 2);
    }

    #[test]
    fn test_label_matches_serde_kind() {
        let events = [
            NavigationEvent::Pushed { route: "a", depth: 1 },
            NavigationEvent::Popped { route: "a", depth: 0 },
            NavigationEvent::PopIgnored,
            NavigationEvent::Reset { cleared: 0 },
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["kind"], event.label());
        }
    }
}
