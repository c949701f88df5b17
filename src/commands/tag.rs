use anyhow::Result;
use clap::{Args, Subcommand};

use crate::commands::active_user;
use crate::db::tags::{Tag, Tags};
use crate::libs::messages::Message;
use crate::libs::query::PageRequest;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: TagCommand,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    /// Create a new tag
    Create {
        /// Tag name
        name: String,
        /// Tag color
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List tags
    List {
        /// Filter by a name substring
        #[arg(short, long)]
        search: Option<String>,
        /// Page number (0-based)
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    /// Edit a tag
    Edit {
        /// Tag ID
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a tag
    Delete {
        /// Tag ID
        id: i64,
    },
}

pub fn cmd(args: TagArgs) -> Result<()> {
    let user = active_user()?;
    let user_id = user.id.unwrap_or(0);

    match args.command {
        TagCommand::Create { name, color } => handle_create(user_id, name, color),
        TagCommand::List { search, page, page_size } => handle_list(user_id, search, page, page_size),
        TagCommand::Edit { id, name, color } => handle_edit(user_id, id, name, color),
        TagCommand::Delete { id } => handle_delete(user_id, id),
    }
}

fn handle_create(user_id: i64, name: String, color: Option<String>) -> Result<()> {
    let mut tags = Tags::new()?;
    if tags.get_by_name(user_id, &name)?.is_some() {
        msg_error!(Message::TagAlreadyExists(name));
        return Ok(());
    }

    tags.create(&Tag::new(user_id, name.clone(), color))?;
    msg_success!(Message::TagCreated(name));
    Ok(())
}

fn handle_list(user_id: i64, search: Option<String>, page: Option<u32>, page_size: u32) -> Result<()> {
    let mut tags_db = Tags::new()?;

    // Plain listing unless a page or search was requested.
    if search.is_none() && page.is_none() {
        let tags = tags_db.list(user_id)?;
        if tags.is_empty() {
            msg_info!(Message::NoTagsFound);
            return Ok(());
        }
        msg_print!(Message::TagListHeader, true);
        return View::tags(&tags);
    }

    let page = tags_db.fetch_page(user_id, search.as_deref(), PageRequest::new(page.unwrap_or(0), page_size))?;
    if page.items.is_empty() {
        msg_info!(Message::NoTagsFound);
        return Ok(());
    }
    msg_print!(Message::TagListHeader, true);
    View::tags(&page.items)?;
    println!("Page {} ({} of {} tags)", page.page, page.items.len(), page.total);
    Ok(())
}

fn handle_edit(user_id: i64, id: i64, name: Option<String>, color: Option<String>) -> Result<()> {
    let mut tags = Tags::new()?;
    let Some(tag) = tags.get_by_id(user_id, id)? else {
        msg_error!(Message::TagNotFound(id.to_string()));
        return Ok(());
    };

    let name = name.unwrap_or(tag.name);
    let color = color.or(tag.color);
    tags.update(user_id, id, &name, color.as_deref())?;
    msg_success!(Message::TagUpdated(name));
    Ok(())
}

fn handle_delete(user_id: i64, id: i64) -> Result<()> {
    let mut tags = Tags::new()?;
    let Some(tag) = tags.get_by_id(user_id, id)? else {
        msg_error!(Message::TagNotFound(id.to_string()));
        return Ok(());
    };

    tags.delete(user_id, id)?;
    msg_success!(Message::TagDeleted(tag.name));
    Ok(())
}
