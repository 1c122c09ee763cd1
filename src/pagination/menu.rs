// menu.rs - Button Menu Driver
// Binds a PaginationSession to one outbound Discord message. Button presses arrive on a
// single component-interaction stream and are handled strictly one after another:
// apply to the session, then render, then pull the next press.
//
// Key Features:
// - First / previous / next / last / stop buttons, disabled at the edges
// - Idle timeout: the clock restarts after every press
// - Controls are stripped on every exit, the message itself stays
//   (unless delete_message_after is set and the user pressed stop)
// - A failed response to one press is logged and the menu keeps going
// - Presses from anyone but the invoker get an ephemeral refusal

use std::time::Duration;

use futures_util::StreamExt;
use log::{debug, info, warn};
use serenity::{
    builder::{CreateComponents, CreateEmbed},
    client::Context,
    model::{
        application::component::ButtonStyle,
        application::interaction::{
            message_component::MessageComponentInteraction, InteractionResponseType,
        },
        channel::Message,
    },
};

use super::page::{EmbedPage, Page};
use super::session::{Navigation, PaginationSession, SessionState};
use crate::error::MetaError;

// ============================================================================
// OPTIONS
// ============================================================================

/// Default idle period before a menu closes itself
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub idle_timeout: Duration,
    pub allow_any_user: bool,
    pub delete_message_after: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            allow_any_user: false,
            delete_message_after: false,
        }
    }
}

impl MenuOptions {
    pub fn delete_message_after(mut self) -> Self {
        self.delete_message_after = true;
        self
    }
}

// ============================================================================
// BUTTONS
// ============================================================================

const BUTTON_FIRST: &str = "meta_menu:first";
const BUTTON_PREVIOUS: &str = "meta_menu:previous";
const BUTTON_NEXT: &str = "meta_menu:next";
const BUTTON_LAST: &str = "meta_menu:last";
const BUTTON_STOP: &str = "meta_menu:stop";

/// Translate a button custom id into a navigation event
pub fn parse_button(custom_id: &str, last_index: usize) -> Option<Navigation> {
    match custom_id {
        BUTTON_FIRST => Some(Navigation::Jump(0)),
        BUTTON_PREVIOUS => Some(Navigation::Previous),
        BUTTON_NEXT => Some(Navigation::Next),
        BUTTON_LAST => Some(Navigation::Jump(last_index)),
        BUTTON_STOP => Some(Navigation::Close),
        _ => None,
    }
}

fn nav_buttons<'a>(
    components: &'a mut CreateComponents,
    session: &PaginationSession,
) -> &'a mut CreateComponents {
    let at_start = session.current_index() == 0;
    let at_end = session.current_index() == session.last_index();

    components.create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id(BUTTON_FIRST).label("⏮").style(ButtonStyle::Secondary).disabled(at_start)
        })
        .create_button(|b| {
            b.custom_id(BUTTON_PREVIOUS).label("◀").style(ButtonStyle::Primary).disabled(at_start)
        })
        .create_button(|b| {
            b.custom_id(BUTTON_NEXT).label("▶").style(ButtonStyle::Primary).disabled(at_end)
        })
        .create_button(|b| {
            b.custom_id(BUTTON_LAST).label("⏭").style(ButtonStyle::Secondary).disabled(at_end)
        })
        .create_button(|b| b.custom_id(BUTTON_STOP).label("⏹").style(ButtonStyle::Danger))
    })
}

fn fill_embed<'a>(embed: &'a mut CreateEmbed, page: &EmbedPage) -> &'a mut CreateEmbed {
    embed.title(&page.title).description(&page.description).colour(page.colour);
    for (name, value) in &page.fields {
        embed.field(name, value, false);
    }
    if let Some(footer) = &page.footer {
        embed.footer(|f| f.text(footer));
    }
    embed
}

// ============================================================================
// DRIVER
// ============================================================================

/// How the interaction loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuExit {
    Closed,
    TimedOut,
}

/// What happens to the menu message once the session is gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cleanup {
    StripControls,
    DeleteMessage,
}

/// Every exit cleans up; only a stop press may delete the message
fn cleanup_for(exit: MenuExit, options: &MenuOptions) -> Cleanup {
    match exit {
        MenuExit::Closed if options.delete_message_after => Cleanup::DeleteMessage,
        _ => Cleanup::StripControls,
    }
}

/// Show `pages` as a navigable reply to `invoking` and drive it until it is closed
/// or left idle.
pub async fn run_menu(
    ctx: &Context,
    invoking: &Message,
    pages: Vec<Page>,
    options: &MenuOptions,
) -> Result<(), MetaError> {
    let mut session = PaginationSession::new(pages.len(), invoking.author.id.0, options.allow_any_user)?;
    let first = &pages[session.current_index()];

    let mut message = invoking
        .channel_id
        .send_message(&ctx.http, |m| {
            match first {
                Page::Text(text) => {
                    m.content(text);
                }
                Page::Embed(embed) => {
                    m.embed(|e| fill_embed(e, embed));
                }
            }
            m.components(|c| nav_buttons(c, &session))
        })
        .await?;

    info!(
        "[MENU] Started {}-page menu for {} in channel {}",
        session.page_count(),
        invoking.author.name,
        invoking.channel_id
    );

    let mut presses = message.await_component_interactions(ctx).build();

    let exit = loop {
        let interaction = match tokio::time::timeout(options.idle_timeout, presses.next()).await {
            Ok(Some(interaction)) => interaction,
            Ok(None) | Err(_) => {
                if let Err(e) = session.apply(invoking.author.id.0, Navigation::Timeout) {
                    warn!("[MENU] Timeout on message {} after close: {}", message.id, e);
                }
                debug!("[MENU] Menu on message {} timed out", message.id);
                break MenuExit::TimedOut;
            }
        };

        let event = match parse_button(&interaction.data.custom_id, session.last_index()) {
            Some(event) => event,
            None => continue,
        };

        // a failed response only loses that one press
        let responded = match session.apply(interaction.user.id.0, event) {
            Ok(SessionState::Active(index)) => {
                render_update(ctx, &interaction, &pages[index], &session).await
            }
            Ok(SessionState::Closed) => {
                if let Err(e) = acknowledge(ctx, &interaction).await {
                    warn!("[MENU] Failed to acknowledge stop on message {}: {}", message.id, e);
                }
                debug!("[MENU] Menu on message {} closed by user", message.id);
                break MenuExit::Closed;
            }
            Err(e) => {
                warn!("[MENU] Refused {:?} from {}: {}", event, interaction.user.name, e);
                refuse(ctx, &interaction, &e).await
            }
        };
        if let Err(e) = responded {
            warn!("[MENU] Failed to answer {:?} on message {}: {}", event, message.id, e);
        }
    };
    drop(presses);

    match cleanup_for(exit, options) {
        Cleanup::DeleteMessage => {
            if let Err(e) = message.delete(&ctx.http).await {
                warn!("[MENU] Failed to delete message {}: {}", message.id, e);
            }
        }
        Cleanup::StripControls => {
            if let Err(e) = message.edit(&ctx.http, |m| m.components(|c| c)).await {
                warn!("[MENU] Failed to strip controls from message {}: {}", message.id, e);
            }
        }
    }
    Ok(())
}

async fn render_update(
    ctx: &Context,
    interaction: &MessageComponentInteraction,
    page: &Page,
    session: &PaginationSession,
) -> Result<(), MetaError> {
    interaction
        .create_interaction_response(&ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|d| {
                    match page {
                        Page::Text(text) => {
                            d.content(text);
                        }
                        Page::Embed(embed) => {
                            d.embed(|e| fill_embed(e, embed));
                        }
                    }
                    d.components(|c| nav_buttons(c, session))
                })
        })
        .await?;
    Ok(())
}

async fn acknowledge(ctx: &Context, interaction: &MessageComponentInteraction) -> Result<(), MetaError> {
    interaction
        .create_interaction_response(&ctx.http, |r| r.kind(InteractionResponseType::DeferredUpdateMessage))
        .await?;
    Ok(())
}

async fn refuse(
    ctx: &Context,
    interaction: &MessageComponentInteraction,
    error: &MetaError,
) -> Result<(), MetaError> {
    interaction
        .create_interaction_response(&ctx.http, |r| {
            r.kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|d| d.content(error.user_message()).ephemeral(true))
        })
        .await?;
    Ok(())
}
