use std::process;

use anyhow::{Context, Result, bail};

use ghost_shell::{app::App, config::AppConfig, content::Content};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const RUN_USAGE: &str = "ghost-shell [content.json]";
const CHECK_USAGE: &str = "ghost-shell check <content.json>";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None => start(Content::builtin()),
        Some("check") => {
            let path = args.next().context(CHECK_USAGE)?;
            check(&path)
        }
        Some(flag) if flag.starts_with('-') => {
            bail!(
                "ghost-shell — terminal portfolio over a particle field\n\nUsage:\n  {RUN_USAGE}\n  {CHECK_USAGE}"
            )
        }
        Some(path) => start(Content::from_file(path)?),
    }
}

fn start(content: Content) -> Result<()> {
    let config = AppConfig::load();
    App::new(content, config).run()
}

fn check(path: &str) -> Result<()> {
    let content = Content::from_file(path)?;
    eprintln!(
        "{}: ok ({} experiences, {} projects, {} skill categories)",
        path,
        content.experiences.len(),
        content.projects.len(),
        content.skill_categories.len(),
    );
    Ok(())
}
