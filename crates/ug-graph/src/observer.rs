//! Mutation notifications.
//!
//! A [`Graph`](crate::Graph) holds at most one observer. Every mutator finishes
//! its adjacency and registry changes before the observer is called, so an
//! observer always sees the post-mutation state of the component it is handed.

use std::cell::RefCell;
use std::rc::Rc;

use ug_core::{LinkId, NodeId};

use crate::component::ComponentRef;

/// Receiver of graph add/remove events.
///
/// Calls are synchronous and fire-and-forget.
pub trait GraphObserver {
    /// A node or link was registered.
    fn on_add(&mut self, _component: ComponentRef<'_>) {}

    /// A node or link was deregistered. `None` when nothing was registered
    /// under the requested key.
    fn on_remove(&mut self, _component: Option<ComponentRef<'_>>) {}
}

/// Owned record of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    NodeAdded(NodeId),
    LinkAdded(LinkId),
    NodeRemoved(NodeId),
    LinkRemoved(LinkId),
    /// A removal found nothing to remove.
    NothingRemoved,
}

impl GraphEvent {
    fn added(component: ComponentRef<'_>) -> Self {
        match component {
            ComponentRef::Node(node) => GraphEvent::NodeAdded(node.id().clone()),
            ComponentRef::Link(link) => GraphEvent::LinkAdded(link.id().clone()),
        }
    }

    fn removed(component: Option<ComponentRef<'_>>) -> Self {
        match component {
            Some(ComponentRef::Node(node)) => GraphEvent::NodeRemoved(node.id().clone()),
            Some(ComponentRef::Link(link)) => GraphEvent::LinkRemoved(link.id().clone()),
            None => GraphEvent::NothingRemoved,
        }
    }
}

/// Observer that records every event.
///
/// Clones share the same log, so keep one handle and give another to the graph.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GraphEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<GraphEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<GraphEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl GraphObserver for EventLog {
    fn on_add(&mut self, component: ComponentRef<'_>) {
        self.events.borrow_mut().push(GraphEvent::added(component));
    }

    fn on_remove(&mut self, component: Option<ComponentRef<'_>>) {
        self.events.borrow_mut().push(GraphEvent::removed(component));
    }
}
