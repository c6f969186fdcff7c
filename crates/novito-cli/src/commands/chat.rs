use serde::Serialize;
use serde_json::Value;

use novito_views::Page;
use novito_views::controllers::ChatSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::commands::shared::loading;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ChatResponse {
    #[serde(rename = "type")]
    kind: String,
    response: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    data: Value,
}

/// Handle `novito chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_page(Page::Chat)?;
    let mut chat = ChatSession::new(ctx.views());
    let reply = loading("Thinking", chat.ask(&args.question.join(" "))).await?;

    output(
        &ChatResponse {
            kind: reply.kind,
            response: reply.text,
            data: reply.data,
        },
        flags.format,
    )
}
