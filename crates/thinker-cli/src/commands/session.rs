use crate::context::AppContext;
use anyhow::{Result, bail};
use colored::Colorize;
use thinker_core::timestamp;

pub fn new(ctx: &AppContext, title: &str, description: &str) -> Result<()> {
    let (id, title) = ctx.mutate(|store| {
        let session = store.create_session(title, description)?;
        Ok((session.id().to_string(), session.title().to_string()))
    })?;
    println!(
        "{} {} {}",
        "Created session".green(),
        id.cyan(),
        title.bold()
    );
    Ok(())
}

pub fn list(ctx: &AppContext) -> Result<()> {
    let store = ctx.read()?;
    let summaries = store.session_summaries();
    if summaries.is_empty() {
        println!("{}", "No sessions yet. Create one with `thinker session new <TITLE>`.".bright_black());
        return Ok(());
    }

    for summary in summaries {
        let marker = if summary.is_current { "*".green().bold() } else { " ".normal() };
        println!(
            "{} {} {} {}",
            marker,
            summary.id.cyan(),
            summary.title.bold(),
            format!(
                "({} thoughts, {} completed, created {})",
                summary.thought_count,
                summary.completed_count,
                timestamp::to_seconds(&summary.created_at)
            )
            .bright_black()
        );
        if !summary.description.is_empty() {
            println!("    {}", summary.description);
        }
    }
    Ok(())
}

pub fn select(ctx: &AppContext, session_id: &str) -> Result<()> {
    if ctx.has_session_override() {
        bail!("`session select` saves the selection; run it without --session.");
    }
    let title = ctx.mutate(|store| Ok(store.select_session(session_id)?.title().to_string()))?;
    println!("{} {}", "Selected session".green(), title.bold());
    Ok(())
}

pub fn delete(ctx: &AppContext, session_id: &str) -> Result<()> {
    let removed = ctx.mutate(|store| store.delete_session(session_id))?;
    println!(
        "{} {} ({} thoughts)",
        "Deleted session".yellow(),
        removed.title().bold(),
        removed.thoughts().len()
    );
    Ok(())
}
