// SPDX-License-Identifier: MPL-2.0
//! Command flows: login, listing and the scripted detail-screen share.

use super::flags::{Command, Flags, ScaleInput, ShareArgs, USAGE};
use super::paths;
use super::session::Session;
use crate::api::restaurant::share_file_name;
use crate::api::{Client, OtpCode, PhoneNumber, Restaurant};
use crate::config::{self, Config};
use crate::domain::overlay::{AspectRatio, ScaleFactor};
use crate::error::{Error, Result};
use crate::media::export::default_backends;
use crate::media::{assets, image, BaseImage, ExportOutcome, ExportPipeline, ImageSource};
use crate::ui::detail::{self, Event, Message, SliderMessage};
use crate::ui::notifications::{Manager, Notification};
use iced_core::{Size, Vector};
use std::process::ExitCode;
use std::sync::Arc;

/// Shared handles for one CLI invocation.
pub struct Context {
    pub config: Config,
    pub session: Session,
    pub client: Client,
    pub notifications: Manager,
}

impl Context {
    /// Loads settings and the stored session. Unreadable files fall back to
    /// defaults with a warning.
    pub fn load() -> Result<Self> {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load settings, using defaults");
            Config::default()
        });
        let (session, warning) = Session::load();
        if let Some(warning) = warning {
            tracing::warn!("{warning}");
        }
        let client = Client::new(&config.api)?;
        Ok(Self {
            config,
            session,
            client,
            notifications: Manager::new(),
        })
    }

    fn persist_session(&self) -> Result<()> {
        self.session.save()
    }
}

/// Runs one command to completion.
pub async fn run(flags: Flags) -> Result<ExitCode> {
    if flags.command == Command::Help {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    paths::init_cli_overrides(flags.data_dir, flags.config_dir, flags.cache_dir);
    let mut ctx = Context::load()?;

    match flags.command {
        Command::Help => {}
        Command::Register { phone } => register(&mut ctx, &phone).await?,
        Command::Verify { otp } => verify(&mut ctx, &otp).await?,
        Command::Restaurants => restaurants(&ctx).await?,
        Command::Share(args) => {
            let outcome = share(&mut ctx, &args).await?;
            print_notifications(&mut ctx.notifications);
            if outcome.is_failure() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn register(ctx: &mut Context, phone: &str) -> Result<()> {
    let phone = PhoneNumber::parse(phone)?;
    ctx.client.register_phone(&phone).await?;
    ctx.session
        .begin_login(phone.as_str(), &ctx.config.api.dial_code);
    ctx.persist_session()?;
    println!("OTP sent to {}{phone}", ctx.config.api.dial_code);
    Ok(())
}

pub async fn verify(ctx: &mut Context, otp: &str) -> Result<()> {
    let otp = OtpCode::parse(otp)?;
    let phone = ctx
        .session
        .phone
        .as_deref()
        .ok_or_else(|| Error::Session("no phone registered, run `register` first".to_string()))
        .and_then(PhoneNumber::parse)?;

    let token = ctx.client.login_with_otp(&phone, &otp).await?;
    if token.is_none() {
        tracing::warn!("login succeeded without a session token");
    }
    ctx.session.token = token;
    ctx.persist_session()?;
    println!("Logged in as {phone}");
    Ok(())
}

pub async fn restaurants(ctx: &Context) -> Result<()> {
    let list = ctx
        .client
        .fetch_restaurants(ctx.config.api.city_id, ctx.session.token())
        .await?;
    if list.is_empty() {
        println!("No restaurants found");
    }
    for r in &list {
        println!(
            "{}\t{}\t{:.1}\t{}\t{}\t{}",
            r.id().unwrap_or_default(),
            r.name(),
            r.rating(),
            r.cost_for_two(),
            r.cuisines(),
            r.address().trim(),
        );
    }
    Ok(())
}

/// Picks the listed restaurant with this id.
fn find_restaurant(list: Vec<Restaurant>, id: &str) -> Result<Restaurant> {
    list.into_iter()
        .find(|r| r.id().as_deref() == Some(id))
        .ok_or_else(|| Error::InvalidInput(format!("no restaurant with id {id}")))
}

/// Base image and file name for a share. Explicit flags win over the record.
fn share_target(args: &ShareArgs, restaurant: Option<&Restaurant>) -> (ImageSource, String) {
    let source = match (&args.image, restaurant.and_then(Restaurant::image_url)) {
        (Some(image), _) => ImageSource::parse(image),
        (None, Some(url)) => ImageSource::parse(&url),
        (None, None) => ImageSource::Placeholder,
    };
    let file_name = match (&args.name, restaurant) {
        (Some(name), _) => share_file_name(name),
        (None, Some(r)) => r.share_file_name(),
        (None, None) => share_file_name("restaurant"),
    };
    (source, file_name)
}

/// Replays the detail-screen gestures, then exports.
///
/// Returns the export outcome; failures are reported through the
/// notification manager rather than as `Err`.
pub async fn share(ctx: &mut Context, args: &ShareArgs) -> Result<ExportOutcome> {
    let restaurant = match &args.restaurant {
        Some(id) => {
            let list = ctx
                .client
                .fetch_restaurants(ctx.config.api.city_id, ctx.session.token())
                .await?;
            Some(find_restaurant(list, id)?)
        }
        None => None,
    };

    let logo = match &args.logo {
        Some(path) => image::load_path(path)?,
        None => assets::default_logo()?,
    };
    let (logo_w, logo_h) = logo.dimensions();
    let mut state = detail::State::new(&ctx.config, AspectRatio::of_dimensions(logo_w, logo_h));

    let (width, height) = args
        .canvas
        .unwrap_or((ctx.config.canvas.width, ctx.config.canvas.height()));
    state.update(Message::CanvasMeasured(Size::new(width, height)));

    match args.scale {
        Some(ScaleInput::Slider(y)) => {
            state.update(SliderMessage::Pressed { y }.into());
            state.update(SliderMessage::Released.into());
        }
        Some(ScaleInput::Scale(s)) => state.set_scale(ScaleFactor::new(s)),
        None => {}
    }
    for &(dx, dy) in &args.drags {
        state.drag_overlay_by(Vector::new(dx, dy));
    }

    let Event::ShareRequested(snapshot) = state.update(Message::ShareRequested) else {
        return Err(Error::Capture("share was not requested".to_string()));
    };
    tracing::debug!(bounds = ?state.bounds(), "overlay placed");

    let (source, file_name) = share_target(args, restaurant.as_ref());
    tracing::debug!(?source, %file_name, "share target");
    let mut base_image = BaseImage::new();
    let base = base_image
        .resolve(&source, ctx.client.http(), ctx.session.token())
        .await?;

    let pipeline = ExportPipeline::new(logo, default_backends(&ctx.config.export, args.interactive));
    let outcome = pipeline.share(Arc::new(base), snapshot, file_name).await;

    if !outcome.is_failure() {
        ctx.notifications.clear_errors();
    }
    if let Some(notice) = outcome.notification() {
        ctx.notifications.push(notice);
    }
    Ok(outcome)
}

/// Drops expired notices, then prints every visible one, newest first.
pub fn print_notifications(manager: &mut Manager) {
    manager.tick();
    for notice in manager.visible() {
        print_notice(notice);
    }
}

fn print_notice(notice: &Notification) {
    println!("{notice}");
}
