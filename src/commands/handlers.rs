//! Command handlers.
//!
//! Each handler checks its arguments, applies the matching address book or
//! record operation and returns the message to show the user. Failures are
//! returned as [`CommandError`] and rendered by the registry.

use super::context::CommandContext;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

fn expect_args(args: &[String], count: usize) -> CommandResult<()> {
    if args.len() != count {
        return Err(CommandError::BadArguments(args.to_vec()));
    }
    Ok(())
}

fn existing<'a>(ctx: &'a mut CommandContext<'_>, name: &str) -> CommandResult<&'a mut Record> {
    ctx.book
        .find_mut(name)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))
}

pub fn hello(_ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

pub fn goodbye(_ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult<String> {
    Ok("Good bye!".to_string())
}

/// Fallback for names missing from the registry.
pub fn invalid_command(_ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult<String> {
    Ok("Invalid command.".to_string())
}

/// `add <name> <phone>`
pub fn add_contact(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult<String> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    if ctx.book.contains(name) {
        return Err(CommandError::NameAlreadyExists(name.clone()));
    }

    let mut record = Record::try_new(name.as_str())?;
    record.add_phone(phone)?;
    ctx.book.add_record(record);

    Ok(format!("Contact {} added.", name))
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult<String> {
    expect_args(args, 3)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    let record = existing(ctx, name)?;
    if record.phones().is_empty() {
        return Ok(format!("Contact {} doesn't have phone numbers.", name));
    }
    if record.find_phone(old)?.is_none() {
        return Ok(format!("Contact {} doesn't have phone number {}.", name, old));
    }

    record.edit_phone(old, new)?;
    Ok(format!("Contact {} updated.", name))
}

/// `phone <name>`
pub fn show_phone(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult<String> {
    expect_args(args, 1)?;
    let record = existing(ctx, &args[0])?;
    Ok(record.to_string())
}

/// `all`
pub fn show_all(ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult<String> {
    if ctx.book.is_empty() {
        return Ok("The address book is empty.".to_string());
    }

    Ok(ctx
        .book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult<String> {
    expect_args(args, 2)?;
    let (name, birthday) = (&args[0], &args[1]);

    existing(ctx, name)?.set_birthday(birthday)?;
    Ok(format!("Set birthday for contact {} at {}.", name, birthday))
}

/// `show-birthday <name>`
pub fn show_birthday(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult<String> {
    expect_args(args, 1)?;
    let name = &args[0];

    let record = existing(ctx, name)?;
    Ok(format!("Birthday of {} is at {}", name, record.render_birthday()))
}

/// `birthdays`
pub fn birthdays(ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult<String> {
    let reminders = ctx.book.schedule_birthday_reminders(ctx.today);
    if reminders.is_empty() {
        return Ok("No birthdays in the coming week.".to_string());
    }
    Ok(reminders.to_string())
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult<String> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    existing(ctx, name)?.remove_phone(phone)?;
    Ok(format!("Phone {} removed from contact {}.", phone, name))
}

/// `delete <name>`
pub fn delete_contact(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult<String> {
    expect_args(args, 1)?;
    let name = &args[0];

    ctx.book
        .delete(name)
        .ok_or_else(|| CommandError::NameNotFound(name.clone()))?;
    Ok(format!("Contact {} deleted.", name))
}
