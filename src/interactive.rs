// src/interactive.rs
// =============================================================================
// Prompts used when site-digest runs without a subcommand.
//
// Same questions in the same order as a guided session:
// 1. Website address (with or without https://)
// 2. Section, full page or entire domain
// 3. Whether to change the excluded words first
// 4. For a section: its title
// =============================================================================

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::app::{PageMode, WordAction};
use crate::cli::normalize_target;

/// Everything the prompts collected for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub url: String,
    pub target: Target,
    pub word_action: WordAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Page(PageMode),
    Domain,
}

pub fn prompt_session() -> Result<Session> {
    let theme = ColorfulTheme::default();

    let site: String = Input::with_theme(&theme)
        .with_prompt("Enter website address (with or without 'https://')")
        .interact_text()?;
    let url = normalize_target(&site);

    let mode = Select::with_theme(&theme)
        .with_prompt("Extract a section, full page, or entire domain?")
        .items(&["section", "full", "domain"])
        .default(1)
        .interact()?;

    let action = Select::with_theme(&theme)
        .with_prompt("Modify excluded words?")
        .items(&["none", "add", "remove", "save preset", "load preset"])
        .default(0)
        .interact()?;
    let word_action = match action {
        1 => WordAction::Add(ask(&theme, "Enter word to add")?),
        2 => WordAction::Remove(ask(&theme, "Enter word to remove")?),
        3 => WordAction::SavePreset(ask(&theme, "Enter preset name")?),
        4 => WordAction::LoadPreset(ask(&theme, "Enter preset name")?),
        _ => WordAction::Keep,
    };

    let target = match mode {
        0 => Target::Page(PageMode::Section(ask(
            &theme,
            "Enter the section title to extract",
        )?)),
        2 => Target::Domain,
        _ => Target::Page(PageMode::FullPage),
    };

    Ok(Session {
        url,
        target,
        word_action,
    })
}

fn ask(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let answer: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?;
    Ok(answer.trim().to_string())
}
