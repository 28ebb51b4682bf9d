//! Toast host
//!
//! Owns the display tree, the scheduler and the clock. `notify` builds a
//! toast element in the shared container and schedules its enter and exit;
//! `tick` applies whatever became due. Every toast is removed exactly once,
//! either by its exit task or by manual dismissal, whichever comes first.

use std::time::{Duration, Instant};

use super::notification::Notification;
use crate::config::ToastConfig;
use crate::display::{DisplayTree, NodeId};
use crate::scheduler::{Clock, Scheduler, SystemClock};
use crate::severity::Severity;

pub const CONTAINER_ID: &str = "toastContainer";
pub const CONTAINER_CLASS: &str = "toast-container";
pub const TOAST_CLASS: &str = "toast";
pub const MESSAGE_CLASS: &str = "toast-message";
pub const CLOSE_CLASS: &str = "toast-close";
pub const VISIBLE_CLASS: &str = "show";

const ICON_FONT_CLASS: &str = "fas";
const CLOSE_ICON_CLASS: &str = "fa-times";

/// Deferred step in a toast's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastTask {
    /// Add the visible class
    Show(NodeId),
    /// Drop the visible class and schedule removal
    Hide(NodeId),
    Remove(NodeId),
}

/// Notification host: the container, its toasts and their timers
#[derive(Debug)]
pub struct ToastHost<C: Clock = SystemClock> {
    tree: DisplayTree,
    scheduler: Scheduler<ToastTask>,
    clock: C,
    config: ToastConfig,
}

impl ToastHost<SystemClock> {
    pub fn new(config: ToastConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> ToastHost<C> {
    pub fn with_clock(clock: C, config: ToastConfig) -> Self {
        Self {
            tree: DisplayTree::new(),
            scheduler: Scheduler::new(),
            clock,
            config,
        }
    }

    /// Show a toast and return its element handle
    pub fn notify(&mut self, message: &str, severity: Severity, duration: Duration) -> NodeId {
        let container = self.ensure_container();
        let toast = self.build_toast(message, severity);
        self.tree.append_child(container, toast);

        let now = self.clock.now();
        self.scheduler
            .schedule_after(now, self.config.enter_delay(), ToastTask::Show(toast));
        self.scheduler
            .schedule_after(now, duration, ToastTask::Hide(toast));

        #[cfg(debug_assertions)]
        log::debug!(
            "Toast {} ({}) shown for {:?}: {}",
            toast.raw(),
            severity,
            duration,
            message
        );

        toast
    }

    /// Show an info toast for the configured duration
    pub fn notify_default(&mut self, message: &str) -> NodeId {
        self.notify(message, Severity::Info, self.config.duration())
    }

    /// Show a toast from loosely typed input: any unknown severity name is
    /// treated as info, and a missing duration uses the configured one.
    pub fn notify_str(&mut self, message: &str, severity: &str, duration_ms: Option<u64>) -> NodeId {
        let duration = duration_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| self.config.duration());
        self.notify(message, Severity::from_name(severity), duration)
    }

    pub fn show(&mut self, notification: &Notification) -> NodeId {
        let duration = notification
            .duration()
            .unwrap_or_else(|| self.config.duration());
        self.notify(notification.message(), notification.severity(), duration)
    }

    /// Return the container, creating it on first use
    pub fn ensure_container(&mut self) -> NodeId {
        if let Some(container) = self.container() {
            return container;
        }

        let container = self.tree.create_element("div");
        self.tree.set_id(container, CONTAINER_ID);
        self.tree.add_class(container, CONTAINER_CLASS);
        let body = self.tree.body();
        self.tree.append_child(body, container);

        #[cfg(debug_assertions)]
        log::debug!("Created toast container");

        container
    }

    pub fn container(&self) -> Option<NodeId> {
        self.tree.get_element_by_id(CONTAINER_ID)
    }

    /// Remove a toast immediately. False if it is already gone or the
    /// handle is not a toast.
    pub fn dismiss(&mut self, toast: NodeId) -> bool {
        if !self.tree.has_class(toast, TOAST_CLASS) {
            return false;
        }

        #[cfg(debug_assertions)]
        log::debug!("Toast {} dismissed", toast.raw());

        self.tree.remove(toast)
    }

    /// Activate a close control (or any element inside one): removes the
    /// toast that owns it
    pub fn activate_close(&mut self, node: NodeId) -> bool {
        if self.tree.find_ancestor_with_class(node, CLOSE_CLASS).is_none() {
            return false;
        }
        match self.tree.find_ancestor_with_class(node, TOAST_CLASS) {
            Some(toast) => self.dismiss(toast),
            None => false,
        }
    }

    /// Apply every task that is due. Returns true if the tree changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;

        while let Some((due, task)) = self.scheduler.pop_due(now) {
            changed |= self.apply(due, task);
        }
        changed
    }

    fn apply(&mut self, due: Instant, task: ToastTask) -> bool {
        match task {
            ToastTask::Show(toast) => self.tree.add_class(toast, VISIBLE_CLASS),
            ToastTask::Hide(toast) => {
                if !self.tree.contains(toast) {
                    return false;
                }
                let changed = self.tree.remove_class(toast, VISIBLE_CLASS);
                self.scheduler
                    .schedule_after(due, self.config.exit_delay(), ToastTask::Remove(toast));
                changed
            }
            ToastTask::Remove(toast) => {
                let removed = self.tree.remove(toast);
                if removed {
                    #[cfg(debug_assertions)]
                    log::debug!("Toast {} expired", toast.raw());
                }
                removed
            }
        }
    }

    /// Earliest time a pending task becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Toasts currently in the container, in display order
    pub fn toasts(&self) -> Vec<NodeId> {
        match self.container() {
            Some(container) => self
                .tree
                .children(container)
                .iter()
                .copied()
                .filter(|n| self.tree.has_class(*n, TOAST_CLASS))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn is_visible(&self, toast: NodeId) -> bool {
        self.tree.has_class(toast, VISIBLE_CLASS)
    }

    pub fn severity_of(&self, toast: NodeId) -> Option<Severity> {
        self.tree
            .classes(toast)
            .iter()
            .find_map(|c| Severity::from_marker_class(c))
    }

    pub fn message_of(&self, toast: NodeId) -> Option<&str> {
        self.child_with_class(toast, MESSAGE_CLASS)
            .and_then(|span| self.tree.text(span))
    }

    pub fn close_control(&self, toast: NodeId) -> Option<NodeId> {
        self.child_with_class(toast, CLOSE_CLASS)
    }

    pub fn tree(&self) -> &DisplayTree {
        &self.tree
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    fn child_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.tree
            .children(node)
            .iter()
            .copied()
            .find(|c| self.tree.has_class(*c, class))
    }

    fn build_toast(&mut self, message: &str, severity: Severity) -> NodeId {
        let tree = &mut self.tree;

        let toast = tree.create_element("div");
        tree.add_class(toast, TOAST_CLASS);
        tree.add_class(toast, severity.marker_class());

        let icon = tree.create_element("i");
        tree.add_class(icon, ICON_FONT_CLASS);
        tree.add_class(icon, severity.icon_class());
        tree.append_child(toast, icon);

        let text = tree.create_element("span");
        tree.add_class(text, MESSAGE_CLASS);
        tree.set_text(text, message);
        tree.append_child(toast, text);

        let close = tree.create_element("button");
        tree.add_class(close, CLOSE_CLASS);
        let close_icon = tree.create_element("i");
        tree.add_class(close_icon, ICON_FONT_CLASS);
        tree.add_class(close_icon, CLOSE_ICON_CLASS);
        tree.append_child(close, close_icon);
        tree.append_child(toast, close);

        toast
    }
}

#[cfg(test)]
#[path = "toast_host_tests.rs"]
mod toast_host_tests;
