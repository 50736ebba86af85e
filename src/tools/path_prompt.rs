use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::Path;

/// 讓使用者從歷史路徑選擇或輸入新路徑
///
/// 回傳 `None` 表示使用者按下 ESC
pub fn prompt_path_with_history(
    prompt: &str,
    default_path: &str,
    recent_paths: &[String],
) -> Result<Option<String>> {
    if recent_paths.is_empty() {
        return prompt_new_path(prompt, default_path).map(Some);
    }

    let mut options: Vec<String> = recent_paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let indicator = if Path::new(p).exists() { "✓" } else { "✗" };
            format!("{} [{}] {}", i + 1, indicator, p)
        })
        .collect();
    options.push("輸入新路徑...".to_string());

    println!("{}", style("(按 ESC 返回主選單)").dim());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact_opt()?;

    match selection {
        None => Ok(None),
        Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
        Some(_) => prompt_new_path(prompt, default_path).map(Some),
    }
}

fn prompt_new_path(prompt: &str, default_path: &str) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if !default_path.is_empty() {
        input = input.default(default_path.to_string());
    }
    let path = input.interact_text()?;
    Ok(path.trim().to_string())
}
