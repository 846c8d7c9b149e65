mod actions;
mod api;
mod catalog;
mod config;
mod forms;
mod models;
mod route;
mod session;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::actions::{submit_login, submit_profile_update, submit_registration, load_profile, Notice};
use crate::api::{HttpPortalApi, PortalApi};
use crate::catalog::search::SearchFilters;
use crate::catalog::{FREELANCERS, JOBS};
use crate::config::Config;
use crate::route::Route;
use crate::session::{FileTokenStore, Session};
use crate::ui::{
    dashboard::{render_dashboard, DashboardState, DASHBOARD_HELP},
    freelancers::FreelancersState,
    home::{render_home, HomeAction, HomeState, HOME_HELP},
    job_detail::{render_job_detail, JobDetailAction, JobDetailState},
    jobs::JobsState,
    listing::{render_listing, ListingAction, LISTING_HELP},
    login::{render_login, LoginAction, LoginState},
    navbar::{self, render_menu, render_navbar, NavEntry, NavbarState},
    profile::{render_profile, ProfileAction, ProfileState},
    register::{render_register, RegisterAction, RegisterState},
    render_status,
};

// Main application state
struct AppState {
    api: Box<dyn PortalApi>,
    session: Session,
    route: Route,
    navbar: NavbarState,
    notice: Option<Notice>,
    home_state: Option<HomeState>,
    jobs_state: Option<JobsState>,
    freelancers_state: Option<FreelancersState>,
    job_detail_state: Option<JobDetailState>,
    dashboard_state: Option<DashboardState>,
    login_state: Option<LoginState>,
    register_state: Option<RegisterState>,
    profile_state: Option<ProfileState>,
}

impl AppState {
    fn new(api: Box<dyn PortalApi>, session: Session) -> Self {
        Self {
            api,
            session,
            route: Route::Home,
            navbar: NavbarState::default(),
            notice: None,
            home_state: None,
            jobs_state: None,
            freelancers_state: None,
            job_detail_state: None,
            dashboard_state: None,
            login_state: None,
            register_state: None,
            profile_state: None,
        }
    }

    // Whether keys should go straight to a text field instead of the shell
    fn is_capturing_text(&self) -> bool {
        match self.route {
            Route::Home => self.home_state.as_ref().is_some_and(HomeState::is_capturing_text),
            Route::Jobs => self.jobs_state.as_ref().is_some_and(JobsState::is_capturing_text),
            Route::Freelancers => self
                .freelancers_state
                .as_ref()
                .is_some_and(FreelancersState::is_capturing_text),
            Route::JobDetail(_) => self
                .job_detail_state
                .as_ref()
                .is_some_and(JobDetailState::is_capturing_text),
            Route::Login => self.login_state.as_ref().is_some_and(LoginState::is_capturing_text),
            Route::Register => self
                .register_state
                .as_ref()
                .is_some_and(RegisterState::is_capturing_text),
            Route::Profile => self
                .profile_state
                .as_ref()
                .is_some_and(ProfileState::is_capturing_text),
            Route::Business => false,
        }
    }

    fn help_text(&self) -> &'static str {
        if self.navbar.is_open() {
            return "Up/Down - Select | Enter - Go | M/Esc - Close menu";
        }
        match self.route {
            Route::Home => HOME_HELP,
            Route::Jobs | Route::Freelancers => LISTING_HELP,
            Route::JobDetail(_) => self
                .job_detail_state
                .as_ref()
                .map_or(LISTING_HELP, JobDetailState::help_text),
            Route::Business => DASHBOARD_HELP,
            Route::Login => self.login_state.as_ref().map_or("", LoginState::help_text),
            Route::Register => self.register_state.as_ref().map_or("", RegisterState::help_text),
            Route::Profile => self.profile_state.as_ref().map_or("", ProfileState::help_text),
        }
    }
}

fn init_logging(config: &Config) -> Result<()> {
    if let Some(dir) = config.log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    // The terminal belongs to the UI, so logs only go to the file
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobify=info")))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::init()?;
    init_logging(&config)?;
    info!(api = config.api_base_url(), "starting jobify");

    let api = HttpPortalApi::new(&config)?;
    let session = Session::new(Box::new(FileTokenStore::new(config.token_path.clone())));

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state and open the default screen
    let mut app_state = AppState::new(Box::new(api), session);
    navigate(&mut app_state, Route::Home).await;

    // Run the main app loop
    let result = run_app(&mut terminal, &mut app_state).await;

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Show any error message
    if let Err(err) = result {
        error!(error = %err, "terminal loop failed");
        println!("Error: {}", err);
    }

    println!("Thanks for using Jobify!");

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app_state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Notices last until the next key press
            app_state.notice = None;

            if handle_key(app_state, key.code).await {
                break;
            }
        }
    }

    Ok(())
}

fn render<B: Backend>(f: &mut Frame<B>, app_state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_navbar(f, &app_state.session, &app_state.route, chunks[0]);

    let body = chunks[1];
    match app_state.route {
        Route::Home => {
            if let Some(state) = &mut app_state.home_state {
                render_home(f, state, body);
            }
        }
        Route::Jobs => {
            if let Some(state) = &mut app_state.jobs_state {
                render_listing(f, state, body);
            }
        }
        Route::Freelancers => {
            if let Some(state) = &mut app_state.freelancers_state {
                render_listing(f, state, body);
            }
        }
        Route::JobDetail(_) => {
            if let Some(state) = &app_state.job_detail_state {
                render_job_detail(f, state, body);
            }
        }
        Route::Business => {
            if let Some(state) = &app_state.dashboard_state {
                render_dashboard(f, state, body);
            }
        }
        Route::Login => {
            if let Some(state) = &app_state.login_state {
                render_login(f, state, body);
            }
        }
        Route::Register => {
            if let Some(state) = &app_state.register_state {
                render_register(f, state, body);
            }
        }
        Route::Profile => {
            if let Some(state) = &app_state.profile_state {
                render_profile(f, state, body);
            }
        }
    }

    render_status(f, app_state.notice.as_ref(), app_state.help_text(), chunks[2]);

    if app_state.navbar.is_open() {
        render_menu(f, &app_state.navbar, &navbar::entries(&app_state.session));
    }
}

/// Switch screens. Every route change re-derives the session first.
async fn navigate(app_state: &mut AppState, route: Route) {
    app_state.session.refresh(app_state.api.as_ref()).await;

    let route = match route {
        Route::Business if !app_state.session.shows_business_link() => {
            warn!("business dashboard refused for this account");
            app_state.notice = Some(Notice::info("The business dashboard is for business accounts."));
            Route::Home
        }
        route => route,
    };

    match &route {
        Route::Home => app_state.home_state = Some(HomeState::new()),
        Route::Jobs => app_state.jobs_state = Some(JobsState::new(JOBS, SearchFilters::default())),
        Route::Freelancers => {
            app_state.freelancers_state = Some(FreelancersState::new(FREELANCERS, SearchFilters::default()))
        }
        Route::JobDetail(id) => {
            let state = JobDetailState::new(id);
            if !state.is_found() {
                warn!(job_id = %id, "job not found");
            }
            app_state.job_detail_state = Some(state);
        }
        Route::Business => app_state.dashboard_state = Some(DashboardState::default()),
        Route::Login => app_state.login_state = Some(LoginState::new()),
        Route::Register => app_state.register_state = Some(RegisterState::new()),
        Route::Profile => {
            let view = match load_profile(app_state.api.as_ref(), &app_state.session).await {
                Ok(view) => Some(view),
                Err(notice) => {
                    app_state.notice = Some(notice);
                    None
                }
            };
            app_state.profile_state = Some(ProfileState::new(view));
        }
    }

    info!(screen = route.title(), "navigated");
    app_state.route = route;
}

/// Returns true when the app should quit
async fn handle_key(app_state: &mut AppState, code: KeyCode) -> bool {
    // The open menu takes every key
    if app_state.navbar.is_open() {
        let entries = navbar::entries(&app_state.session);
        if let Some(i) = app_state.navbar.handle_key(code, entries.len()) {
            match &entries[i] {
                NavEntry::Go(route) => navigate(app_state, route.clone()).await,
                NavEntry::SignOut => {
                    app_state.session.sign_out();
                    navigate(app_state, Route::Home).await;
                    app_state.notice = Some(Notice::info("You have been signed out."));
                }
            }
        }
        return false;
    }

    if !app_state.is_capturing_text() {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('m') => {
                app_state.navbar.toggle_menu();
                return false;
            }
            _ => {}
        }
    }

    match app_state.route.clone() {
        Route::Home => handle_home(app_state, code).await,
        Route::Jobs => {
            let action = app_state.jobs_state.as_mut().and_then(|s| s.handle_key(code));
            if let Some(ListingAction::Open(id)) = action {
                navigate(app_state, Route::JobDetail(id.to_string())).await;
            }
        }
        Route::Freelancers => {
            // The detail pane already follows the selection
            if let Some(state) = &mut app_state.freelancers_state {
                state.handle_key(code);
            }
        }
        Route::JobDetail(_) => {
            let action = app_state.job_detail_state.as_mut().and_then(|s| s.handle_key(code));
            if let Some(JobDetailAction::Back) = action {
                navigate(app_state, Route::Jobs).await;
            }
        }
        Route::Business => {
            if let Some(state) = &mut app_state.dashboard_state {
                state.handle_key(code);
            }
        }
        Route::Login => handle_login(app_state, code).await,
        Route::Register => handle_register(app_state, code).await,
        Route::Profile => handle_profile(app_state, code).await,
    }

    false
}

async fn handle_home(app_state: &mut AppState, code: KeyCode) {
    match app_state.home_state.as_mut().and_then(|s| s.handle_key(code)) {
        Some(HomeAction::SearchJobs(filters)) => {
            navigate(app_state, Route::Jobs).await;
            app_state.jobs_state = Some(JobsState::new(JOBS, filters));
        }
        Some(HomeAction::Go(route)) => navigate(app_state, route).await,
        None => {}
    }
}

async fn handle_login(app_state: &mut AppState, code: KeyCode) {
    match app_state.login_state.as_mut().and_then(|s| s.handle_key(code)) {
        Some(LoginAction::Submit(form)) => {
            match submit_login(app_state.api.as_ref(), &mut app_state.session, &form).await {
                Ok(submitted) => {
                    if let Some(route) = submitted.redirect {
                        navigate(app_state, route).await;
                    }
                    app_state.notice = Some(submitted.notice);
                }
                Err(err) => {
                    app_state.notice = err.notice().cloned();
                    if let Some(state) = &mut app_state.login_state {
                        state.rejected(err);
                    }
                }
            }
        }
        Some(LoginAction::Go(route)) => navigate(app_state, route).await,
        None => {}
    }
}

async fn handle_register(app_state: &mut AppState, code: KeyCode) {
    match app_state.register_state.as_mut().and_then(|s| s.handle_key(code)) {
        Some(RegisterAction::Submit(form)) => {
            match submit_registration(app_state.api.as_ref(), &form).await {
                Ok(submitted) => {
                    if let Some(route) = submitted.redirect {
                        navigate(app_state, route).await;
                    }
                    app_state.notice = Some(submitted.notice);
                }
                Err(err) => {
                    app_state.notice = err.notice().cloned();
                    if let Some(state) = &mut app_state.register_state {
                        state.rejected(err);
                    }
                }
            }
        }
        Some(RegisterAction::Go(route)) => navigate(app_state, route).await,
        None => {}
    }
}

async fn handle_profile(app_state: &mut AppState, code: KeyCode) {
    let Some(ProfileAction::Save(form)) =
        app_state.profile_state.as_mut().and_then(|s| s.handle_key(code))
    else {
        return;
    };

    let outcome = submit_profile_update(app_state.api.as_ref(), &app_state.session, &form).await;
    let Some(state) = &mut app_state.profile_state else {
        return;
    };
    match outcome {
        Ok(saved) => {
            let fetch_failed = state.saved(&form, saved.refreshed);
            app_state.notice = Some(fetch_failed.unwrap_or(saved.notice));
        }
        Err(err) => {
            app_state.notice = err.notice().cloned();
            state.save_failed(err);
        }
    }
}
