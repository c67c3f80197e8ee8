//! Intent dispatch table.

use std::collections::HashMap;
use std::fmt;

use super::handlers::{self, HandlerFn};
use crate::domain::skill::{IntentName, SkillEvent};

/// Every kind of event the skill answers, one handler each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Launch,
    FactNumber,
    StartOver,
    Help,
    StopOrCancel,
    SessionEnded,
    Yes,
    No,
    Fallback,
}

impl Route {
    /// All routes in registration order.
    pub const ALL: [Route; 9] = [
        Route::Launch,
        Route::FactNumber,
        Route::StartOver,
        Route::Help,
        Route::StopOrCancel,
        Route::SessionEnded,
        Route::Yes,
        Route::No,
        Route::Fallback,
    ];

    /// Pick the route for an event: request type first, then intent name.
    ///
    /// Intent names the skill does not define go to `Fallback`.
    pub fn for_event(event: &SkillEvent) -> Route {
        match event {
            SkillEvent::Launch => Route::Launch,
            SkillEvent::SessionEnded(_) => Route::SessionEnded,
            SkillEvent::Intent(intent) => match intent.name {
                IntentName::FactNumber => Route::FactNumber,
                IntentName::StartOver => Route::StartOver,
                IntentName::Help => Route::Help,
                IntentName::Stop | IntentName::Cancel => Route::StopOrCancel,
                IntentName::Yes => Route::Yes,
                IntentName::No => Route::No,
                IntentName::Fallback | IntentName::Other(_) => Route::Fallback,
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Route::Launch => "launch",
            Route::FactNumber => "fact_number",
            Route::StartOver => "start_over",
            Route::Help => "help",
            Route::StopOrCancel => "stop_or_cancel",
            Route::SessionEnded => "session_ended",
            Route::Yes => "yes",
            Route::No => "no",
            Route::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

/// Mapping from route to handler, built once and handed to `SkillHandler`.
#[derive(Clone, Default)]
pub struct DispatchTable {
    handlers: HashMap<Route, HandlerFn>,
}

impl DispatchTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cat facts handlers for every route.
    pub fn standard() -> Self {
        Self::new()
            .with(Route::Launch, handlers::launch)
            .with(Route::FactNumber, handlers::fact_number)
            .with(Route::StartOver, handlers::start_over)
            .with(Route::Help, handlers::help)
            .with(Route::StopOrCancel, handlers::stop_or_cancel)
            .with(Route::SessionEnded, handlers::session_ended)
            .with(Route::Yes, handlers::yes)
            .with(Route::No, handlers::no)
            .with(Route::Fallback, handlers::fallback)
    }

    /// Register a handler, replacing any previous one for the route.
    pub fn with(mut self, route: Route, handler: HandlerFn) -> Self {
        self.handlers.insert(route, handler);
        self
    }

    /// Look up the handler for a route.
    pub fn get(&self, route: Route) -> Option<HandlerFn> {
        self.handlers.get(&route).copied()
    }

    /// Routes that have a handler, in registration order.
    pub fn routes(&self) -> Vec<Route> {
        Route::ALL
            .into_iter()
            .filter(|route| self.handlers.contains_key(route))
            .collect()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("routes", &self.routes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skill::{Intent, SessionEndedReason};

    fn intent(name: IntentName) -> SkillEvent {
        SkillEvent::Intent(Intent::named(name))
    }

    #[test]
    fn request_types_route_before_intents() {
        assert_eq!(Route::for_event(&SkillEvent::Launch), Route::Launch);
        assert_eq!(
            Route::for_event(&SkillEvent::SessionEnded(SessionEndedReason::Error)),
            Route::SessionEnded
        );
    }

    #[test]
    fn intents_map_to_their_routes() {
        assert_eq!(Route::for_event(&intent(IntentName::FactNumber)), Route::FactNumber);
        assert_eq!(Route::for_event(&intent(IntentName::StartOver)), Route::StartOver);
        assert_eq!(Route::for_event(&intent(IntentName::Yes)), Route::Yes);
        assert_eq!(Route::for_event(&intent(IntentName::No)), Route::No);
        assert_eq!(Route::for_event(&intent(IntentName::Help)), Route::Help);
        assert_eq!(Route::for_event(&intent(IntentName::Fallback)), Route::Fallback);
    }

    #[test]
    fn stop_and_cancel_share_a_route() {
        assert_eq!(Route::for_event(&intent(IntentName::Stop)), Route::StopOrCancel);
        assert_eq!(Route::for_event(&intent(IntentName::Cancel)), Route::StopOrCancel);
    }

    #[test]
    fn unknown_intents_fall_back() {
        let event = intent(IntentName::Other("AMAZON.PauseIntent".to_string()));
        assert_eq!(Route::for_event(&event), Route::Fallback);
    }

    #[test]
    fn standard_table_covers_every_route() {
        let table = DispatchTable::standard();
        assert_eq!(table.routes(), Route::ALL.to_vec());
        for route in Route::ALL {
            assert!(table.get(route).is_some(), "missing handler for {}", route);
        }
    }

    #[test]
    fn empty_table_has_no_handlers() {
        let table = DispatchTable::new();
        assert!(table.get(Route::Launch).is_none());
        assert!(table.routes().is_empty());
    }

    #[test]
    fn with_registers_single_route() {
        let table = DispatchTable::new().with(Route::Help, handlers::help);
        assert_eq!(table.routes(), vec![Route::Help]);
    }
}
