use thiserror::Error;
use crate::core::{find_matches, submit_login, Step, Wizard, WizardError};
use crate::models::{
    DashboardSnapshot, FilterCriteria, FilterOption, LandingSnapshot, LoginForm, LoginSnapshot,
    NavLink, ProfileCard, RegisterSnapshot, ViewEvent, ViewSnapshot, ViewState,
};
use crate::routes::{Route, RouteError};
use crate::services::{
    Catalog, CatalogError, NotificationCenter, SimulatedLatency, DEFAULT_NOTIFICATION_LIMIT, LOGIN_LATENCY,
    REGISTER_LATENCY,
};

/// Errors for events the host rejects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Event '{event}' is not handled by the view at {route}")]
    UnsupportedEvent { event: &'static str, route: Route },
}

impl AppError {
    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Route(_) => "unknown_route",
            AppError::Wizard(_) => "registration_rejected",
            AppError::Catalog(_) => "invalid_catalog",
            AppError::UnsupportedEvent { .. } => "unsupported_event",
        }
    }
}

/// Fixed collaborators of the view host
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub login_latency: SimulatedLatency,
    pub register_latency: SimulatedLatency,
    pub notification_limit: usize,
}

impl AppState {
    /// Validated catalog with default delays and notification limit
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            login_latency: SimulatedLatency::new(LOGIN_LATENCY),
            register_latency: SimulatedLatency::new(REGISTER_LATENCY),
            notification_limit: DEFAULT_NOTIFICATION_LIMIT,
        }
    }

    /// Mock catalog with the default delays
    pub fn mock() -> Result<Self, AppError> {
        Ok(Self::with_catalog(Catalog::mock()?))
    }

    /// Mock catalog with zero latency
    pub fn instant() -> Result<Self, AppError> {
        Ok(Self {
            login_latency: SimulatedLatency::none(),
            register_latency: SimulatedLatency::none(),
            ..Self::mock()?
        })
    }
}

/// State owned by the active view, dropped on navigation
#[derive(Debug, Clone)]
enum View {
    Landing,
    Login(LoginForm),
    Register(Wizard),
    Dashboard(FilterCriteria),
}

impl View {
    fn for_route(route: Route) -> Self {
        match route {
            Route::Landing => View::Landing,
            Route::Login => View::Login(LoginForm::default()),
            Route::Register => View::Register(Wizard::new()),
            Route::Dashboard => View::Dashboard(FilterCriteria::default()),
        }
    }
}

/// Single-owner view host
///
/// Events run to completion one at a time. Navigating to another route
/// discards the previous view's state; notifications outlive navigation.
#[derive(Debug)]
pub struct App {
    state: AppState,
    route: Route,
    view: View,
    notifications: NotificationCenter,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let notifications = NotificationCenter::new(state.notification_limit);
        Self {
            state,
            route: Route::Landing,
            view: View::Landing,
            notifications,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Switch views; re-navigating to the current route keeps its state
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!("Navigating from {} to {}", self.route, route);
        self.route = route;
        self.view = View::for_route(route);
    }

    /// Handle one UI event
    pub async fn dispatch(&mut self, event: ViewEvent) -> Result<(), AppError> {
        let route = self.route;
        let unsupported = |event: &ViewEvent| AppError::UnsupportedEvent {
            event: event.name(),
            route,
        };

        match event {
            ViewEvent::Navigate { path } => {
                let target = Route::from_path(&path)?;
                self.navigate(target);
            }
            ViewEvent::DismissNotifications => self.notifications.dismiss_all(),

            ViewEvent::Search { query } => match &mut self.view {
                View::Dashboard(criteria) => criteria.query = query,
                _ => return Err(unsupported(&ViewEvent::Search { query })),
            },
            ViewEvent::FilterLocation { location } => match &mut self.view {
                View::Dashboard(criteria) => criteria.location = location,
                _ => return Err(unsupported(&ViewEvent::FilterLocation { location })),
            },
            ViewEvent::FilterBudget { budget } => match &mut self.view {
                View::Dashboard(criteria) => criteria.budget = budget,
                _ => return Err(unsupported(&ViewEvent::FilterBudget { budget })),
            },

            ViewEvent::LoginEmail { email } => match &mut self.view {
                View::Login(form) => form.email = email,
                _ => return Err(unsupported(&ViewEvent::LoginEmail { email })),
            },
            ViewEvent::LoginPassword { password } => match &mut self.view {
                View::Login(form) => form.password = password,
                _ => return Err(unsupported(&ViewEvent::LoginPassword { password })),
            },
            ViewEvent::SubmitLogin => {
                let form = match &self.view {
                    View::Login(form) => form.clone(),
                    _ => return Err(unsupported(&ViewEvent::SubmitLogin)),
                };
                let outcome = submit_login(&form, &self.state.login_latency).await;
                self.notifications.push(outcome.notification().clone());
                if let Some(target) = outcome.redirect() {
                    self.navigate(target);
                }
            }

            ViewEvent::UpdateDraft { update } => match &mut self.view {
                View::Register(wizard) => wizard.update(update),
                _ => return Err(unsupported(&ViewEvent::UpdateDraft { update })),
            },
            ViewEvent::AddInterest { interest } => match &mut self.view {
                View::Register(wizard) => {
                    wizard.add_interest(interest);
                }
                _ => return Err(unsupported(&ViewEvent::AddInterest { interest })),
            },
            ViewEvent::RemoveInterest { interest } => match &mut self.view {
                View::Register(wizard) => {
                    wizard.remove_interest(interest);
                }
                _ => return Err(unsupported(&ViewEvent::RemoveInterest { interest })),
            },
            ViewEvent::NextStep => match &mut self.view {
                View::Register(wizard) => {
                    let step = wizard.next();
                    tracing::debug!("Registration step {} of {}", step.number(), Step::TOTAL);
                }
                _ => return Err(unsupported(&ViewEvent::NextStep)),
            },
            ViewEvent::PreviousStep => match &mut self.view {
                View::Register(wizard) => {
                    let step = wizard.previous();
                    tracing::debug!("Registration step {} of {}", step.number(), Step::TOTAL);
                }
                _ => return Err(unsupported(&ViewEvent::PreviousStep)),
            },
            ViewEvent::SubmitRegistration => {
                let outcome = match &mut self.view {
                    View::Register(wizard) => wizard.submit(&self.state.register_latency).await?,
                    _ => return Err(unsupported(&ViewEvent::SubmitRegistration)),
                };
                self.notifications.push(outcome.notification);
                self.navigate(outcome.redirect);
            }
        }

        Ok(())
    }

    /// Current rendering-independent state
    pub fn snapshot(&self) -> ViewSnapshot {
        let state = match &self.view {
            View::Landing => ViewState::Landing(landing_snapshot()),
            View::Login(form) => ViewState::Login(LoginSnapshot {
                email: form.email.clone(),
                has_password: !form.password.is_empty(),
            }),
            View::Register(wizard) => ViewState::Register(register_snapshot(wizard)),
            View::Dashboard(criteria) => {
                ViewState::Dashboard(dashboard_snapshot(&self.state.catalog, criteria))
            }
        };

        ViewSnapshot {
            route: self.route,
            state,
            notifications: self.notifications.active(),
        }
    }
}

fn landing_snapshot() -> LandingSnapshot {
    let link = |label: &str, route: Route| NavLink {
        label: label.to_string(),
        route,
    };

    LandingSnapshot {
        links: vec![link("Sign In", Route::Login), link("Get Started", Route::Register)],
    }
}

fn register_snapshot(wizard: &Wizard) -> RegisterSnapshot {
    let step = wizard.step();

    RegisterSnapshot {
        step,
        step_number: step.number(),
        step_title: step.title().to_string(),
        total_steps: Step::TOTAL,
        status: wizard.status(),
        draft: wizard.draft().clone(),
        available_interests: wizard.available_interests(),
        missing_fields: wizard
            .missing_required_fields(step)
            .into_iter()
            .map(str::to_string)
            .collect(),
        can_submit: wizard.can_submit(),
    }
}

fn dashboard_snapshot(catalog: &Catalog, criteria: &FilterCriteria) -> DashboardSnapshot {
    let result = find_matches(catalog.profiles(), criteria);

    DashboardSnapshot {
        criteria: criteria.clone(),
        showing: result.showing(),
        total: result.total_candidates,
        is_filtered: result.is_filtered,
        no_results: result.is_empty(),
        cards: result.matches.iter().map(ProfileCard::from).collect(),
        location_options: FilterOption::locations(),
        budget_options: FilterOption::budgets(),
    }
}
