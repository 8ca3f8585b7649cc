//! Twilight glue: sending paginated messages, answering button presses and
//! applying expiry.

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use tracing::{debug, warn};
use twilight_http::{Client, request::channel::message::CreateMessage};
use twilight_model::{
    channel::{Message, message::MessageFlags},
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{Id, marker::ChannelMarker},
};
use twilight_util::builder::InteractionResponseDataBuilder;

use super::components::build_nav_components;
use super::controller::{Pager, RenderInstruction};
use super::interaction::{NavigationInteraction, validate_navigation_interaction};
use super::session::{NavigationOutcome, PaginationSession, PaginationSessions, SessionMessage};
use super::token::NavToken;

/// Generic message shown when a pagination interaction belongs to another user.
pub const PAGINATION_WRONG_USER_MESSAGE: &str = "This pagination session belongs to another user.";
/// Generic message shown when a pagination interaction has no live session.
pub const PAGINATION_EXPIRED_MESSAGE: &str =
    "This pagination session expired. Run the command again.";
/// Generic message shown when pagination interaction payload is invalid.
pub const PAGINATION_INVALID_MESSAGE: &str = "Invalid pagination interaction.";

/// Respond to a component interaction by rewriting the message in place.
pub async fn respond_update_message(
    http: &Client,
    interaction: &InteractionCreate,
    session_id: u64,
    instruction: &RenderInstruction,
) -> anyhow::Result<()> {
    let payload = &instruction.payload;
    let response = InteractionResponse {
        kind: InteractionResponseType::UpdateMessage,
        data: Some(
            InteractionResponseDataBuilder::new()
                .content(payload.content.clone().unwrap_or_default())
                .embeds(payload.embeds().to_vec())
                .components(build_nav_components(session_id, instruction.controls))
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Acknowledge a component interaction without changing the message.
pub async fn respond_deferred_update(
    http: &Client,
    interaction: &InteractionCreate,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::DeferredUpdateMessage,
        data: None,
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Respond to a component interaction with an ephemeral message.
pub async fn respond_ephemeral_message(
    http: &Client,
    interaction: &InteractionCreate,
    content: &str,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .content(content)
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Send the first page of a new paginated message and arm its expiry timer.
///
/// The session is registered before the message goes out, so its buttons
/// work from the moment they are visible.
pub async fn send_paginated_message(
    http: Arc<Client>,
    sessions: Arc<PaginationSessions>,
    channel_id: Id<ChannelMarker>,
    pager: Box<dyn Pager>,
    owner_user_id: Option<u64>,
) -> anyhow::Result<()> {
    let instruction = pager.render();
    let session_id = sessions
        .open(PaginationSession::new(pager, owner_user_id))
        .await;
    let components = build_nav_components(session_id, instruction.controls);

    let mut request = http
        .create_message(channel_id)
        .embeds(instruction.payload.embeds())
        .components(&components);
    if let Some(content) = instruction.payload.content.as_deref() {
        request = request.content(content);
    }

    let created_message = match send_and_model(request).await {
        Ok(message) => message,
        Err(source) => {
            sessions.remove(session_id).await;
            return Err(source);
        }
    };

    let message = SessionMessage {
        channel_id: created_message.channel_id,
        message_id: created_message.id,
    };
    let timer = expiry_timer(Arc::clone(&http), Arc::clone(&sessions), session_id);
    sessions.attach_message(session_id, message, timer).await;

    Ok(())
}

async fn send_and_model(request: CreateMessage<'_>) -> anyhow::Result<Message> {
    Ok(request.await?.model().await?)
}

/// Handle a component interaction if it is a pagination button press.
///
/// Returns `Ok(false)` when the interaction is not a pagination control.
pub async fn handle_navigation_interaction(
    http: Arc<Client>,
    sessions: Arc<PaginationSessions>,
    interaction: &InteractionCreate,
) -> anyhow::Result<bool> {
    let (actor_user_id, token) = match validate_navigation_interaction(interaction) {
        NavigationInteraction::NotForPagination => return Ok(false),
        NavigationInteraction::Invalid => {
            respond_ephemeral_message(&http, interaction, PAGINATION_INVALID_MESSAGE).await?;
            return Ok(true);
        }
        NavigationInteraction::Valid {
            actor_user_id,
            token,
        } => (actor_user_id, token),
    };

    let NavToken { session_id, action } = token;
    let timer = expiry_timer(Arc::clone(&http), Arc::clone(&sessions), session_id);

    match sessions
        .navigate(session_id, actor_user_id, action, timer)
        .await
    {
        NavigationOutcome::Render { instruction, index } => {
            if let Err(source) =
                respond_update_message(&http, interaction, session_id, &instruction).await
            {
                // The message still shows the previous page.
                sessions.revert(session_id, action, index).await;
                return Err(source);
            }
        }
        NavigationOutcome::UnknownSession => {
            respond_ephemeral_message(&http, interaction, PAGINATION_EXPIRED_MESSAGE).await?;
        }
        NavigationOutcome::WrongUser => {
            respond_ephemeral_message(&http, interaction, PAGINATION_WRONG_USER_MESSAGE).await?;
        }
        NavigationOutcome::Rejected(reason) => {
            debug!(%reason, session_id, ?action, "pagination navigation rejected");
            respond_deferred_update(&http, interaction).await?;
        }
    }

    Ok(true)
}

/// Build the expiry timer for a session: wait out its timeout, then turn the
/// message into the expired view.
fn expiry_timer(
    http: Arc<Client>,
    sessions: Arc<PaginationSessions>,
    session_id: u64,
) -> impl FnOnce(Duration) -> ExpiryFuture {
    move |timeout| -> ExpiryFuture { Box::pin(expire_after(timeout, http, sessions, session_id)) }
}

type ExpiryFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

async fn expire_after(
    timeout: Duration,
    http: Arc<Client>,
    sessions: Arc<PaginationSessions>,
    session_id: u64,
) {
    tokio::time::sleep(timeout).await;

    let Some((message, instruction)) = sessions.expire(session_id).await else {
        return;
    };

    if let Err(source) = apply_to_message(&http, session_id, message, &instruction).await {
        warn!(
            ?source,
            session_id,
            message_id = message.message_id.get(),
            "failed to render expired pagination"
        );
    }
}

/// Edit a live message so it shows the given instruction.
pub async fn apply_to_message(
    http: &Client,
    session_id: u64,
    message: SessionMessage,
    instruction: &RenderInstruction,
) -> anyhow::Result<()> {
    let components = build_nav_components(session_id, instruction.controls);
    let payload = &instruction.payload;

    http.update_message(message.channel_id, message.message_id)
        .content(Some(payload.content.as_deref().unwrap_or_default()))
        .embeds(Some(payload.embeds()))
        .components(Some(&components))
        .await?;

    Ok(())
}
