use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::{Local, NaiveDateTime};

use novito_views::Page;
use novito_views::controllers::MeetingsView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MeetingCommands;
use crate::commands::shared::{loading, report_notice};
use crate::context::AppContext;
use crate::output::output;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Handle `novito meetings`.
pub async fn handle(
    action: &MeetingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_page(Page::Meetings)?;
    let MeetingCommands::Process {
        title,
        transcript,
        date,
    } = action;

    let transcript = read_transcript(transcript)?;
    let meeting_date = match date {
        Some(raw) => parse_date(raw)?,
        None => Local::now().naive_local(),
    };

    let mut meetings = MeetingsView::new(ctx.views());
    let outcome = loading(
        "Processing transcript",
        meetings.process(title, &transcript, meeting_date),
    )
    .await?;

    report_notice(meetings.state().notice(), flags);
    output(&outcome, flags.format)
}

fn read_transcript(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read transcript from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript {}", path.display()))
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid --date '{raw}' (expected YYYY-MM-DD HH:MM)"))
}
