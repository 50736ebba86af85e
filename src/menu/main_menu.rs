use crate::config::save::save_settings;
use crate::config::types::{Config, Language, SchedulerSettings};
use crate::menu::handlers::{
    run_folder_cleaner, run_prefix_renamer, run_publish_scheduler, run_upload_preparer,
    run_video_shuffler,
};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_renamer"),
        t!("main_menu.opt_shuffler"),
        t!("main_menu.opt_preparer"),
        t!("main_menu.opt_scheduler"),
        t!("main_menu.opt_cleaner"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => run_prefix_renamer(term, shutdown_signal, config)?,
        Some(1) => run_video_shuffler(term, shutdown_signal, config)?,
        Some(2) => run_upload_preparer(term, shutdown_signal, config)?,
        Some(3) => run_publish_scheduler(term, shutdown_signal, config)?,
        Some(4) => run_folder_cleaner(term, shutdown_signal, config)?,
        Some(5) => show_settings_menu(term, config)?,
        _ => return Ok(false), // 離開或 ESC
    }

    Ok(true)
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let options = vec![
            t!("settings.opt_scheduler"),
            t!("settings.opt_language"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => show_scheduler_settings_menu(term, config)?,
            Some(1) => show_language_menu(term, config)?,
            _ => break,
        }
    }

    Ok(())
}

/// 排程間隔設定
fn show_scheduler_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.scheduler.title")).cyan().bold());

    let scheduler = &config.settings.workflow.scheduler;
    let first_delay: i64 = Input::new()
        .with_prompt(t!("settings.scheduler.first_delay"))
        .default(scheduler.first_delay_minutes)
        .validate_with(|value: &i64| {
            if SchedulerSettings::is_valid_first_delay(*value) {
                Ok(())
            } else {
                Err(t!("settings.scheduler.invalid").to_string())
            }
        })
        .interact_text()?;
    let interval: i64 = Input::new()
        .with_prompt(t!("settings.scheduler.interval"))
        .default(scheduler.interval_minutes)
        .validate_with(|value: &i64| {
            if SchedulerSettings::is_valid_interval(*value) {
                Ok(())
            } else {
                Err(t!("settings.scheduler.invalid").to_string())
            }
        })
        .interact_text()?;

    let scheduler = &mut config.settings.workflow.scheduler;
    if first_delay != scheduler.first_delay_minutes || interval != scheduler.interval_minutes {
        scheduler.first_delay_minutes = first_delay;
        scheduler.interval_minutes = interval;
        save_settings(&config.settings)?;
        println!("\n{}", style(t!("settings.saved")).green());
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [Language::EnUs, Language::ZhTw];
    let items: Vec<String> = languages.iter().map(ToString::to_string).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_lang
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
