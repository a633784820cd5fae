// Integration tests for RoomieFind

use roomie_find::core::wizard::WizardError;
use roomie_find::models::{
    BudgetRange, DraftField, Interest, NotificationVariant, Pets, Smoking, ViewEvent, ViewState,
};
use roomie_find::routes::{App, AppError, AppState, Route};

fn navigate(path: &str) -> ViewEvent {
    ViewEvent::Navigate { path: path.to_string() }
}

async fn on_route(path: &str) -> App {
    let mut app = App::new(AppState::instant().unwrap());
    app.dispatch(navigate(path)).await.unwrap();
    app
}

#[tokio::test]
async fn test_dashboard_search_and_counts() {
    let mut app = on_route("/dashboard").await;

    match app.snapshot().state {
        ViewState::Dashboard(dashboard) => {
            assert_eq!(dashboard.showing, 4);
            assert_eq!(dashboard.total, 4);
            assert!(!dashboard.is_filtered);
            assert!(!dashboard.no_results);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    app.dispatch(ViewEvent::Search { query: "chen".to_string() }).await.unwrap();
    match app.snapshot().state {
        ViewState::Dashboard(dashboard) => {
            assert_eq!(dashboard.showing, 1);
            assert_eq!(dashboard.total, 4);
            assert_eq!(dashboard.cards[0].name, "Sarah Chen");
            assert_eq!(dashboard.cards[0].visible_interests, vec!["Coding", "Hiking", "Cooking"]);
            assert_eq!(dashboard.cards[0].hidden_interest_count, 1);
        }
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_dashboard_offers_every_location_option() {
    let mut app = on_route("/dashboard").await;

    let options = match app.snapshot().state {
        ViewState::Dashboard(dashboard) => {
            let labels: Vec<&str> = dashboard.budget_options.iter().map(|o| o.label.as_str()).collect();
            assert_eq!(
                labels,
                vec!["All Budgets", "$500 - $800", "$800 - $1,200", "$1,200 - $1,600", "$1,600+"]
            );
            dashboard.location_options
        }
        other => panic!("unexpected view: {:?}", other),
    };
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["", "Berkeley", "Stanford", "Palo Alto", "San Francisco"]);

    // Selecting each offered value filters on that location token
    for option in options.iter().skip(1) {
        app.dispatch(ViewEvent::FilterLocation { location: option.value.clone() }).await.unwrap();
        match app.snapshot().state {
            ViewState::Dashboard(dashboard) => {
                assert!(dashboard.cards.iter().all(|c| c.location.contains(&option.value)));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_dashboard_no_results_state() {
    let mut app = on_route("/dashboard").await;
    app.dispatch(ViewEvent::FilterLocation { location: "San Francisco".to_string() })
        .await
        .unwrap();

    match app.snapshot().state {
        ViewState::Dashboard(dashboard) => {
            assert_eq!(dashboard.showing, 0);
            assert_eq!(dashboard.total, 4);
            assert!(dashboard.is_filtered);
            assert!(dashboard.no_results);
        }
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_dashboard_combined_filters() {
    let mut app = on_route("/dashboard").await;
    app.dispatch(ViewEvent::Search { query: "stanford".to_string() }).await.unwrap();
    app.dispatch(ViewEvent::FilterBudget { budget: Some(BudgetRange::From1200To1600) })
        .await
        .unwrap();

    match app.snapshot().state {
        ViewState::Dashboard(dashboard) => {
            let names: Vec<&str> = dashboard.cards.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Mike Rodriguez"]);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    app.dispatch(ViewEvent::FilterBudget { budget: None }).await.unwrap();
    match app.snapshot().state {
        ViewState::Dashboard(dashboard) => assert_eq!(dashboard.showing, 2),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_with_empty_email_fails_without_navigation() {
    let mut app = on_route("/login").await;
    app.dispatch(ViewEvent::LoginPassword { password: "x".to_string() }).await.unwrap();
    app.dispatch(ViewEvent::SubmitLogin).await.unwrap();

    let snapshot = app.snapshot();
    assert_eq!(snapshot.route, Route::Login);
    assert_eq!(snapshot.notifications.len(), 1);
    assert_eq!(snapshot.notifications[0].title, "Login failed");
    assert_eq!(snapshot.notifications[0].variant, NotificationVariant::Destructive);

    // form contents survive the failed attempt
    match snapshot.state {
        ViewState::Login(login) => assert!(login.has_password),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_success_navigates_to_dashboard() {
    let mut app = on_route("/login").await;
    app.dispatch(ViewEvent::LoginEmail { email: "a@b.com".to_string() }).await.unwrap();
    app.dispatch(ViewEvent::LoginPassword { password: "x".to_string() }).await.unwrap();
    app.dispatch(ViewEvent::SubmitLogin).await.unwrap();

    let snapshot = app.snapshot();
    assert_eq!(snapshot.route, Route::Dashboard);
    assert_eq!(snapshot.notifications[0].title, "Login successful!");
    assert_eq!(snapshot.notifications[0].variant, NotificationVariant::Default);
}

#[tokio::test]
async fn test_login_waits_for_simulated_latency() {
    let state = AppState {
        login_latency: roomie_find::SimulatedLatency::from_millis(30),
        ..AppState::instant().unwrap()
    };
    let mut app = App::new(state);
    app.navigate(Route::Login);
    app.dispatch(ViewEvent::LoginEmail { email: "a@b.com".to_string() }).await.unwrap();
    app.dispatch(ViewEvent::LoginPassword { password: "x".to_string() }).await.unwrap();

    let started = std::time::Instant::now();
    app.dispatch(ViewEvent::SubmitLogin).await.unwrap();

    assert!(started.elapsed() >= std::time::Duration::from_millis(30));
    assert_eq!(app.route(), Route::Dashboard);
}

#[tokio::test]
async fn test_full_registration_flow() {
    let mut app = on_route("/register").await;

    let step_one = [
        DraftField::FirstName("Jamie".to_string()),
        DraftField::LastName("Lee".to_string()),
        DraftField::Email("jamie@berkeley.edu".to_string()),
        DraftField::Password("secret".to_string()),
        DraftField::ConfirmPassword("different".to_string()),
        DraftField::University("UC Berkeley".to_string()),
        DraftField::Major("Physics".to_string()),
    ];
    for update in step_one {
        app.dispatch(ViewEvent::UpdateDraft { update }).await.unwrap();
    }
    app.dispatch(ViewEvent::NextStep).await.unwrap();

    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Location("Berkeley, CA".to_string()) })
        .await
        .unwrap();
    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Budget(BudgetRange::From800To1200) })
        .await
        .unwrap();
    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Smoking(Smoking::No) }).await.unwrap();
    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Pets(Pets::Neutral) }).await.unwrap();
    app.dispatch(ViewEvent::AddInterest { interest: Interest::Hiking }).await.unwrap();
    app.dispatch(ViewEvent::AddInterest { interest: Interest::Music }).await.unwrap();
    app.dispatch(ViewEvent::RemoveInterest { interest: Interest::Hiking }).await.unwrap();

    match app.snapshot().state {
        ViewState::Register(register) => {
            assert_eq!(register.step_number, 2);
            assert_eq!(register.draft.interests, vec![Interest::Music]);
            assert!(register.missing_fields.is_empty());
            assert!(!register.available_interests.contains(&Interest::Music));
            assert!(!register.can_submit);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    app.dispatch(ViewEvent::NextStep).await.unwrap();
    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Bio("Quiet physics student".to_string()) })
        .await
        .unwrap();

    // terms not accepted yet
    let err = app.dispatch(ViewEvent::SubmitRegistration).await.unwrap_err();
    assert_eq!(err, AppError::Wizard(WizardError::TermsNotAccepted));
    assert_eq!(app.route(), Route::Register);

    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Verified(true) }).await.unwrap();
    app.dispatch(ViewEvent::SubmitRegistration).await.unwrap();

    let snapshot = app.snapshot();
    assert_eq!(snapshot.route, Route::Dashboard);
    assert_eq!(snapshot.notifications[0].title, "Account created successfully!");
}

#[tokio::test]
async fn test_registration_submit_before_final_step() {
    let mut app = on_route("/register").await;
    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Verified(true) }).await.unwrap();

    let err = app.dispatch(ViewEvent::SubmitRegistration).await.unwrap_err();
    assert_eq!(err, AppError::Wizard(WizardError::NotOnFinalStep(1)));
}

#[tokio::test]
async fn test_blank_wizard_advances_and_reports_missing_fields() {
    let mut app = on_route("/register").await;

    match app.snapshot().state {
        ViewState::Register(register) => assert_eq!(register.missing_fields.len(), 7),
        other => panic!("unexpected view: {:?}", other),
    }

    app.dispatch(ViewEvent::NextStep).await.unwrap();
    app.dispatch(ViewEvent::NextStep).await.unwrap();
    app.dispatch(ViewEvent::NextStep).await.unwrap();
    app.dispatch(ViewEvent::PreviousStep).await.unwrap();

    match app.snapshot().state {
        ViewState::Register(register) => {
            assert_eq!(register.step_number, 2);
            assert_eq!(register.missing_fields, vec!["location"]);
        }
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_snapshot_never_exposes_passwords() {
    let mut app = on_route("/register").await;
    app.dispatch(ViewEvent::UpdateDraft { update: DraftField::Password("hunter2".to_string()) })
        .await
        .unwrap();

    let json = serde_json::to_string(&app.snapshot()).unwrap();
    assert!(!json.contains("hunter2"));
    assert!(json.contains("\"route\":\"/register\""));
}

#[test]
fn test_event_stream_from_json() {
    let events = [
        r#"{"event":"navigate","path":"/dashboard"}"#,
        r#"{"event":"filterLocation","location":"Berkeley"}"#,
        r#"{"event":"filterBudget","budget":"800-1200"}"#,
    ];

    let mut app = App::new(AppState::instant().unwrap());
    for raw in events {
        let event: ViewEvent = serde_json::from_str(raw).unwrap();
        tokio_test::block_on(app.dispatch(event)).unwrap();
    }

    match app.snapshot().state {
        ViewState::Dashboard(dashboard) => {
            assert_eq!(dashboard.showing, 1);
            assert_eq!(dashboard.cards[0].id, 1);
        }
        other => panic!("unexpected view: {:?}", other),
    }
}
