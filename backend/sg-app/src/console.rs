//! Line-oriented presentation layer over the session store.
//!
//! Each screen of the app becomes a command; each form field becomes a
//! prompt. The console validates input, calls the store, and reports the
//! outcome the way the app's dialogs do.

use crate::error::{AppError, Result as AppErrorResult};
use crate::navigation::{self, Route};

use sg_auth::SessionStore;
use sg_core::{DEMO_EMAIL, Identity, LoginForm, ProfessionalProfile, RegistrationForm};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "\
Commands:
  login     sign in with email and password
  register  create an account and surgeon profile
  profile   show the dashboard
  edit      edit your surgeon profile
  logout    sign out
  help      show this list
  quit      exit";

/// Profile prompt input that empties the field
const CLEAR_FIELD: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Login,
    Register,
    Profile,
    Edit,
    Logout,
    Help,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "login" | "signin" => Some(Self::Login),
            "register" | "signup" => Some(Self::Register),
            "profile" | "dashboard" => Some(Self::Profile),
            "edit" => Some(Self::Edit),
            "logout" | "signout" => Some(Self::Logout),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }

    fn route(&self) -> Option<Route> {
        match self {
            Self::Login => Some(Route::Login),
            Self::Register => Some(Route::Register),
            Self::Profile => Some(Route::Dashboard),
            Self::Edit => Some(Route::EditProfile),
            Self::Logout | Self::Help | Self::Quit => None,
        }
    }
}

pub struct Console<'a, R, W> {
    store: &'a mut SessionStore,
    input: R,
    output: W,
    route: Route,
    min_password_length: usize,
}

impl<'a, R, W> Console<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: &'a mut SessionStore, input: R, output: W, min_password_length: usize) -> Self {
        let route = navigation::resolve(Route::Login, store.is_authenticated());
        Self {
            store,
            input,
            output,
            route,
            min_password_length,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Run until `quit` or end of input
    pub async fn run(&mut self) -> AppErrorResult<()> {
        self.write_line(self.route.title()).await?;
        self.write_line("Type 'help' for commands.").await?;

        loop {
            let Some(line) = self.read_line("> ").await? else {
                debug!("Console input closed");
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(command) = Command::parse(line) else {
                self.write_line(&format!("Unknown command '{line}'. Type 'help' for commands."))
                    .await?;
                continue;
            };

            match command {
                Command::Quit => break,
                Command::Help => self.write_line(HELP).await?,
                Command::Logout => self.logout().await?,
                _ => {
                    if let Some(requested) = command.route() {
                        self.navigate(requested).await?;
                    }
                }
            }
        }

        self.output.flush().await.map_err(io_error)?;
        Ok(())
    }

    async fn navigate(&mut self, requested: Route) -> AppErrorResult<()> {
        let route = navigation::resolve(requested, self.store.is_authenticated());
        if route != requested {
            debug!("Navigation to {requested:?} redirected to {route:?}");
            if route == Route::Login {
                self.write_line("Please sign in first.").await?;
            } else if let Some(identity) = self.store.current_identity() {
                let notice = format!("Already signed in as {}.", identity.display_name());
                self.write_line(&notice).await?;
            }
        }
        self.route = route;

        match route {
            Route::Login if requested == Route::Login => self.login().await,
            Route::Login => Ok(()),
            Route::Register => self.register().await,
            Route::Dashboard => self.render_dashboard().await,
            Route::EditProfile => self.edit_profile().await,
        }
    }

    async fn login(&mut self) -> AppErrorResult<()> {
        let form = LoginForm::new(
            self.read_field("Email").await?,
            self.read_field("Password").await?,
        );

        if let Err(e) = form.validate() {
            return self.write_error(e.user_message()).await;
        }

        self.write_line("Signing in...").await?;
        if self.store.sign_in(&form.email, &form.password).await {
            self.write_line("Success: Login successful! Welcome back!")
                .await?;
            self.route = Route::Dashboard;
            self.render_dashboard().await
        } else {
            self.write_error(&format!("Invalid email or password. Try: {DEMO_EMAIL}"))
                .await
        }
    }

    async fn register(&mut self) -> AppErrorResult<()> {
        self.write_line("Account Information").await?;
        let mut form = RegistrationForm {
            first_name: self.read_field("First Name *").await?,
            last_name: self.read_field("Last Name *").await?,
            email: self.read_field("Email Address *").await?,
            password: self.read_field("Password *").await?,
            confirm_password: self.read_field("Confirm Password *").await?,
            ..RegistrationForm::default()
        };

        self.write_line("Professional Profile").await?;
        form.profile = self.read_profile(ProfessionalProfile::blank()).await?;

        let registration = match form.validate(self.min_password_length) {
            Ok(registration) => registration,
            Err(e) => return self.write_error(e.user_message()).await,
        };

        self.write_line("Creating account...").await?;
        if self.store.sign_up(registration).await {
            self.write_line("Success: Account created and profile saved! Welcome to Surger!")
                .await?;
            self.route = Route::Dashboard;
            self.render_dashboard().await
        } else {
            warn!("Sign-up reported failure");
            self.route = Route::Login;
            self.write_error("Failed to create account. Please try again.")
                .await
        }
    }

    async fn edit_profile(&mut self) -> AppErrorResult<()> {
        let current = self
            .store
            .current_identity()
            .and_then(|identity| identity.profile.clone())
            .unwrap_or_else(ProfessionalProfile::blank);

        self.write_line(&format!(
            "Leave a field blank to keep its current value, or enter '{CLEAR_FIELD}' to clear it."
        ))
        .await?;
        let profile = self.read_profile(current).await?;

        self.store.update_profile(profile);
        self.write_line("Success: Profile updated successfully!")
            .await?;
        self.route = Route::Dashboard;
        self.render_dashboard().await
    }

    async fn logout(&mut self) -> AppErrorResult<()> {
        if !self.store.is_authenticated() {
            return self.write_line("Not signed in.").await;
        }

        let answer = self
            .read_line("Are you sure you want to logout? [y/N]: ")
            .await?
            .unwrap_or_default();
        if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            self.store.sign_out();
            self.route = Route::Login;
            self.write_line("Signed out.").await
        } else {
            self.write_line("Logout cancelled.").await
        }
    }

    async fn render_dashboard(&mut self) -> AppErrorResult<()> {
        let Some(identity) = self.store.current_identity() else {
            return self.write_line("Please sign in first.").await;
        };
        let text = dashboard_text(identity);
        self.write_line(&text).await
    }

    /// Prompt for every profile field, starting from `defaults`.
    /// Blank input keeps the default and `-` empties the field.
    async fn read_profile(
        &mut self,
        defaults: ProfessionalProfile,
    ) -> AppErrorResult<ProfessionalProfile> {
        Ok(ProfessionalProfile {
            specialty: self.read_with_default("Specialty *", defaults.specialty).await?,
            subspecialty: self
                .read_with_default("Subspecialty", defaults.subspecialty)
                .await?,
            experience_years: self
                .read_with_default("Years of Experience *", defaults.experience_years)
                .await?,
            cases_completed: self
                .read_with_default("Cases Completed", defaults.cases_completed)
                .await?,
            success_rate: self
                .read_with_default("Success Rate (%)", defaults.success_rate)
                .await?,
            certifications: self
                .read_with_default("Certifications", defaults.certifications)
                .await?,
            current_workload: self
                .read_with_default("Current Workload", defaults.current_workload)
                .await?,
            fatigue_level: self
                .read_with_default("Fatigue Level (1-10)", defaults.fatigue_level)
                .await?,
        })
    }

    async fn read_with_default(&mut self, label: &str, current: String) -> AppErrorResult<String> {
        let prompt = if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        };
        let value = self.read_line(&prompt).await?.unwrap_or_default();
        match value.trim() {
            "" => Ok(current),
            CLEAR_FIELD => Ok(String::new()),
            _ => Ok(value),
        }
    }

    /// Read one form field. End of input yields an empty value.
    async fn read_field(&mut self, label: &str) -> AppErrorResult<String> {
        Ok(self
            .read_line(&format!("{label}: "))
            .await?
            .unwrap_or_default())
    }

    /// Prompt and read a line without its terminator. None at end of input.
    async fn read_line(&mut self, prompt: &str) -> AppErrorResult<Option<String>> {
        self.output
            .write_all(prompt.as_bytes())
            .await
            .map_err(io_error)?;
        self.output.flush().await.map_err(io_error)?;

        let mut buf = String::new();
        let read = self.input.read_line(&mut buf).await.map_err(io_error)?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    async fn write_error(&mut self, message: &str) -> AppErrorResult<()> {
        self.write_line(&format!("Error: {message}")).await
    }

    async fn write_line(&mut self, text: &str) -> AppErrorResult<()> {
        self.output
            .write_all(text.as_bytes())
            .await
            .map_err(io_error)?;
        self.output.write_all(b"\n").await.map_err(io_error)
    }
}

#[track_caller]
fn io_error(source: std::io::Error) -> AppError {
    AppError::Io {
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Dashboard view of an identity
pub fn dashboard_text(identity: &Identity) -> String {
    let mut lines = vec![identity.display_name(), identity.email.clone()];

    if let Some(ref profile) = identity.profile {
        lines.push(profile.specialty.clone());
        if !profile.subspecialty.is_empty() {
            lines.push(profile.subspecialty.clone());
        }
        lines.push(format!(
            "Years Experience: {} | Cases Completed: {} | Success Rate: {}% | Current Load: {}",
            profile.experience_years,
            profile.cases_completed,
            profile.success_rate,
            profile.current_workload
        ));
        if !profile.certifications.is_empty() {
            lines.push(format!("Certifications: {}", profile.certifications));
        }
        lines.push(format!("Fatigue Level: {}", profile.fatigue_level));
    } else {
        lines.push(String::from("No surgeon profile yet. Use 'edit' to add one."));
    }

    lines.join("\n")
}
