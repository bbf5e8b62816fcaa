use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use super::scope::resolve;
use super::{EventArg, EventError, Scope, ScopeArg};

type Handler = Box<dyn Fn(&Scope<'_>, &[EventArg]) -> anyhow::Result<()>>;

/// Opaque handle returned by [`EventBus::try_bind`].
///
/// Unlike names, handles are unique per bus.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    /// Caller-chosen tag. Not unique.
    name: String,
    handler: Handler,
}

/// A handler that returned an error during a dispatch.
#[derive(Debug)]
pub struct HandlerFailure {
    pub name: String,
    pub error: anyhow::Error,
}

/// Outcome of one trigger call.
#[derive(Debug, Default)]
pub struct Dispatch {
    /// Number of handlers that were called.
    pub invoked: usize,
    /// Handlers that returned `Err`, in call order.
    pub failures: Vec<HandlerFailure>,
}

impl Dispatch {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Named multi-subscriber event dispatcher.
///
/// Each event id maps to an ordered list of named handlers. Triggering an id
/// calls every handler bound to it, in bind order, on the calling thread.
///
/// Unbinding the last handler of an id leaves the id present with an empty
/// list; only [`unbind_all`](Self::unbind_all) removes it.
///
/// ```
/// use gamefw_core::events::EventBus;
///
/// let mut bus = EventBus::new();
/// bus.bind("tick", "physics", |_, _| Ok(()));
/// bus.bind("tick", "ai", |_, _| Ok(()));
/// bus.unbind("tick", "physics");
/// assert_eq!(bus.trigger("tick").invoked, 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    events: HashMap<String, Vec<Subscription>>,
    next_id: u64,
}

impl EventBus {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `id` under `name`.
    ///
    /// Empty `id` or `name` is ignored.
    pub fn bind<F>(&mut self, id: &str, name: &str, handler: F)
    where
        F: Fn(&Scope<'_>, &[EventArg]) -> anyhow::Result<()> + 'static,
    {
        if let Err(err) = self.try_bind(id, name, handler) {
            log::trace!("bind ignored: {err}");
        }
    }

    /// Strict form of [`bind`](Self::bind). Returns a handle usable with
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn try_bind<F>(&mut self, id: &str, name: &str, handler: F) -> Result<SubscriptionId, EventError>
    where
        F: Fn(&Scope<'_>, &[EventArg]) -> anyhow::Result<()> + 'static,
    {
        if id.is_empty() {
            return Err(EventError::InvalidArgument("id"));
        }
        if name.is_empty() {
            return Err(EventError::InvalidArgument("name"));
        }

        let sub_id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        self.events.entry(id.to_owned()).or_default().push(Subscription {
            id: sub_id,
            name: name.to_owned(),
            handler: Box::new(handler),
        });

        log::debug!("bound '{name}' to event '{id}'");
        Ok(sub_id)
    }

    /// Removes the first subscription under `id` tagged `name`.
    pub fn unbind(&mut self, id: &str, name: &str) {
        if let Err(err) = self.try_unbind(id, name) {
            log::trace!("unbind ignored: {err}");
        }
    }

    pub fn try_unbind(&mut self, id: &str, name: &str) -> Result<(), EventError> {
        if id.is_empty() {
            return Err(EventError::InvalidArgument("id"));
        }
        if name.is_empty() {
            return Err(EventError::InvalidArgument("name"));
        }

        let subs = self
            .events
            .get_mut(id)
            .ok_or_else(|| EventError::UnknownEvent(id.to_owned()))?;

        let pos = subs
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| EventError::UnknownSubscription {
                id: id.to_owned(),
                name: name.to_owned(),
            })?;

        // `remove` keeps the remaining handlers in bind order.
        subs.remove(pos);
        log::debug!("unbound '{name}' from event '{id}'");
        Ok(())
    }

    /// Removes exactly the subscription identified by `handle`.
    ///
    /// Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, handle: SubscriptionId) -> bool {
        for subs in self.events.values_mut() {
            if let Some(pos) = subs.iter().position(|s| s.id == handle) {
                subs.remove(pos);
                return true;
            }
        }
        false
    }

    /// Drops every subscription of `id`, including the id itself.
    pub fn unbind_all(&mut self, id: &str) {
        if let Err(err) = self.try_unbind_all(id) {
            log::trace!("unbind_all ignored: {err}");
        }
    }

    pub fn try_unbind_all(&mut self, id: &str) -> Result<(), EventError> {
        if id.is_empty() {
            return Err(EventError::InvalidArgument("id"));
        }
        match self.events.remove(id) {
            Some(_) => {
                log::debug!("removed event '{id}'");
                Ok(())
            }
            None => Err(EventError::UnknownEvent(id.to_owned())),
        }
    }

    /// Triggers `id` with the bus as scope and no arguments.
    pub fn trigger(&self, id: &str) -> Dispatch {
        self.trigger_with(id, None, None)
    }

    /// Triggers `id` with the bus as scope.
    pub fn trigger_args(&self, id: &str, args: &[EventArg]) -> Dispatch {
        self.trigger_with(id, Some(ScopeArg::Args(args)), None)
    }

    /// Triggers `id` with `scope` as receiver and no arguments.
    pub fn trigger_in(&self, id: &str, scope: &dyn Any) -> Dispatch {
        self.trigger_with(id, Some(ScopeArg::Object(scope)), None)
    }

    /// General trigger. Unknown ids are a no-op.
    ///
    /// A lone `ScopeArg::Args` is taken as the argument list with the bus as
    /// scope; a lone `ScopeArg::Object` gets no arguments; with neither, the
    /// bus is the scope. An explicit pair is used as given.
    pub fn trigger_with<'a>(
        &'a self,
        id: &str,
        scope: Option<ScopeArg<'a>>,
        args: Option<&'a [EventArg]>,
    ) -> Dispatch {
        self.try_trigger_with(id, scope, args).unwrap_or_default()
    }

    pub fn try_trigger(&self, id: &str) -> Result<Dispatch, EventError> {
        self.try_trigger_with(id, None, None)
    }

    pub fn try_trigger_with<'a>(
        &'a self,
        id: &str,
        scope: Option<ScopeArg<'a>>,
        args: Option<&'a [EventArg]>,
    ) -> Result<Dispatch, EventError> {
        if id.is_empty() {
            return Err(EventError::InvalidArgument("id"));
        }
        let subs = self
            .events
            .get(id)
            .ok_or_else(|| EventError::UnknownEvent(id.to_owned()))?;

        let (scope, args) = resolve(self, scope, args);
        log::trace!("trigger '{id}': {} handler(s), {} arg(s)", subs.len(), args.len());

        let mut report = Dispatch::default();
        for sub in subs {
            report.invoked += 1;
            if let Err(error) = (sub.handler)(&scope, args) {
                log::warn!("handler '{}' for event '{id}' failed: {error:#}", sub.name);
                report.failures.push(HandlerFailure {
                    name: sub.name.clone(),
                    error,
                });
            }
        }
        Ok(report)
    }

    /// Whether `id` has a subscription list, possibly empty.
    pub fn is_bound(&self, id: &str) -> bool {
        self.events.contains_key(id)
    }

    pub fn handler_count(&self, id: &str) -> usize {
        self.events.get(id).map_or(0, Vec::len)
    }

    /// Handler names under `id`, in bind order.
    pub fn handler_names(&self, id: &str) -> Vec<&str> {
        self.events
            .get(id)
            .map(|subs| subs.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Known event ids, in no particular order.
    pub fn event_ids(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (id, subs) in &self.events {
            let names: Vec<&str> = subs.iter().map(|s| s.name.as_str()).collect();
            map.entry(id, &names);
        }
        map.finish()
    }
}
