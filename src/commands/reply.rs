//! Ephemeral interaction responses
//!
//! Every reply this bot makes is visible only to the invoking user.

use anyhow::Result;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;

/// Acknowledge now, answer later with [`edit_reply`]
pub async fn defer_ephemeral(http: &Http, interaction: &ApplicationCommandInteraction) -> Result<()> {
    interaction
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::DeferredChannelMessageWithSource)
                .interaction_response_data(|data| data.ephemeral(true))
        })
        .await?;
    Ok(())
}

/// Fill in a deferred reply
pub async fn edit_reply(
    http: &Http,
    interaction: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    interaction
        .edit_original_interaction_response(http, |response| response.content(content))
        .await?;
    Ok(())
}

/// Answer immediately
pub async fn reply_ephemeral(
    http: &Http,
    interaction: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    interaction
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(true))
        })
        .await?;
    Ok(())
}
