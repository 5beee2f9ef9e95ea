//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `jarvis_core` linkage without the mobile runtime.
//! - Print the first home frame so view-model wiring can be eyeballed.

use jarvis_core::{AppConfig, Page, Shell};

fn main() {
    println!("jarvis_core ping={}", jarvis_core::ping());
    println!("jarvis_core version={}", jarvis_core::core_version());

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("jarvis_cli config error: {err}");
            std::process::exit(2);
        }
    };
    let shell = Shell::with_system_clock(config);
    println!("app={} id={}", shell.config().app_name, shell.config().app_id);

    let frame = shell.render();
    let tabs: Vec<String> = frame
        .nav
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    println!("nav: {}", tabs.join(" | "));

    if let Page::Home(home) = frame.page {
        println!("{}", home.greeting);
        println!("{}", home.subtitle);
        for action in &home.quick_actions {
            println!("  {} {} - {}", action.icon, action.title, action.subtitle);
        }
        for insight in &home.insights {
            println!("  * {insight}");
        }
    }
}
