use super::parse_tags;
use crate::context::AppContext;
use anyhow::{Result, bail};
use colored::Colorize;
use thinker_core::{Thought, ThoughtDraft, ThoughtFilter, ThoughtUpdate};

/// Options of `thinker add`; unset fields fall back to the configuration.
pub struct AddArgs {
    pub content: String,
    pub category: Option<String>,
    pub priority: Option<i64>,
    pub tags: Option<String>,
}

pub fn add(ctx: &AppContext, args: AddArgs) -> Result<()> {
    let draft = ThoughtDraft::new(args.content)
        .with_category(args.category.unwrap_or_else(|| ctx.config.default_category.clone()))
        .with_priority(args.priority.unwrap_or(ctx.config.default_priority))
        .with_tags(args.tags.as_deref().map(parse_tags).unwrap_or_default());

    let thought = ctx.mutate(|store| store.add_thought(draft).cloned())?;
    println!("{} {}", "Added thought".green(), thought.id().cyan());
    print_thought(&thought);
    Ok(())
}

pub fn list(ctx: &AppContext, filter: ThoughtFilter) -> Result<()> {
    let store = ctx.read()?;
    let thoughts = store.list_thoughts(&filter)?;

    if let Some(session) = store.current_session() {
        println!("{} {}", "Session:".bright_black(), session.title().bold());
    }
    if thoughts.is_empty() {
        println!("{}", "No thoughts found.".bright_black());
        return Ok(());
    }
    for thought in &thoughts {
        print_thought(thought);
    }
    Ok(())
}

pub fn complete(ctx: &AppContext, thought_id: &str) -> Result<()> {
    let thought = ctx.mutate(|store| store.complete_thought(thought_id).cloned())?;
    println!("{} {}", "Completed".green(), thought.content());
    Ok(())
}

/// Options of `thinker edit`.
pub struct EditArgs {
    pub content: Option<String>,
    pub category: Option<String>,
    pub priority: Option<i64>,
    pub tags: Option<String>,
}

pub fn edit(ctx: &AppContext, thought_id: &str, args: EditArgs) -> Result<()> {
    let update = ThoughtUpdate {
        content: args.content,
        category: args.category,
        priority: args.priority,
        tags: args.tags.as_deref().map(parse_tags),
    };
    if update.is_empty() {
        bail!("Nothing to change. Pass --content, --category, --priority or --tags.");
    }

    let thought = ctx.mutate(|store| store.update_thought(thought_id, update).cloned())?;
    println!("{} {}", "Updated thought".green(), thought.id().cyan());
    print_thought(&thought);
    Ok(())
}

pub fn delete(ctx: &AppContext, thought_id: &str) -> Result<()> {
    let removed = ctx.mutate(|store| store.delete_thought(thought_id))?;
    println!("{} {}", "Deleted".yellow(), removed.content());
    Ok(())
}

fn print_thought(thought: &Thought) {
    let status = if thought.is_completed() {
        "[✓]".green()
    } else {
        "[ ]".normal()
    };
    let content = if thought.is_completed() {
        thought.content().strikethrough()
    } else {
        thought.content().normal()
    };
    println!("{} {} {}", status, thought.id().cyan(), content);

    let mut details = format!(
        "    {} | {}",
        "★".repeat(usize::from(thought.priority().value())),
        thought.category()
    );
    if !thought.tags().is_empty() {
        details.push_str(&format!(" | #{}", thought.tags().join(" #")));
    }
    println!("{}", details.bright_black());
}
