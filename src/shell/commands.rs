//! The fixed command vocabulary and its output templates.
//!
//! Handlers turn static content records into styled transcript blocks. They
//! are pure: all randomness-looking variation (the skill bars) is derived
//! from name hashes so repeated invocations render identically.

use crate::content::Content;
use crate::types::{Block, LineKind, Span, Style, ui};

use super::SideEffect;

/// Primary command forms, in suggestion order. Aliases resolve in
/// [`reply`] and are deliberately absent here, so completion never offers
/// two spellings of the same command.
pub const VOCABULARY: [&str; 14] = [
    "whoami",
    "ls experience/",
    "cat projects.md",
    "./skills --verbose",
    "ping alfonso",
    "help",
    "clear",
    "exit",
    "coffee",
    "matrix",
    "hack nasa",
    "ascii",
    "sudo hire alfonso",
    "rm -rf /",
];

const NAME_ART: &str = r"
    ██████╗ ██╗  ██╗███████╗ ██████╗ ███╗   ██╗███████╗██╗   ██╗
   ██╔═████╗╚██╗██╔╝██╔════╝██╔═══██╗████╗  ██║╚══███╔╝╚██╗ ██╔╝
   ██║██╔██║ ╚███╔╝ █████╗  ██║   ██║██╔██╗ ██║  ███╔╝  ╚████╔╝
   ████╔╝██║ ██╔██╗ ██╔══╝  ██║   ██║██║╚██╗██║ ███╔╝    ╚██╔╝
   ╚██████╔╝██╔╝ ██╗██║     ╚██████╔╝██║ ╚████║███████╗   ██║
    ╚═════╝ ╚═╝  ╚═╝╚═╝      ╚═════╝ ╚═╝  ╚═══╝╚══════╝   ╚═╝";

const BANNER_ART: &str = r"
    ╔══════════════════════════════════════════════════════════╗
    ║                                                          ║
    ║     █████╗ ██╗     ███████╗ ██████╗ ███╗   ██╗███████╗   ║
    ║    ██╔══██╗██║     ██╔════╝██╔═══██╗████╗  ██║██╔════╝   ║
    ║    ███████║██║     █████╗  ██║   ██║██╔██╗ ██║███████╗   ║
    ║    ██╔══██║██║     ██╔══╝  ██║   ██║██║╚██╗██║╚════██║   ║
    ║    ██║  ██║███████╗██║     ╚██████╔╝██║ ╚████║███████║   ║
    ║    ╚═╝  ╚═╝╚══════╝╚═╝      ╚═════╝ ╚═╝  ╚═══╝╚══════╝   ║
    ║                                                          ║
    ║            * SENIOR SOFTWARE ENGINEER *                  ║
    ║              React · TypeScript · Web3                   ║
    ║                                                          ║
    ╚══════════════════════════════════════════════════════════╝";

const COFFEE_ART: &str = r"
        ( (
         ) )
      ........
      |      |]
      \      /
       '----'
    BREWING...";

/// Width commands wrap prose at; the view clips anything wider than the
/// terminal.
const WRAP_WIDTH: usize = 76;
/// Skill proficiency bar width in cells.
const BAR_WIDTH: usize = 20;

pub struct Reply {
    pub kind: LineKind,
    pub block: Block,
    pub effect: Option<SideEffect>,
}

fn out(block: Block) -> Reply {
    Reply {
        kind: LineKind::Output,
        block,
        effect: None,
    }
}

/// Look up a normalized command. `clear` is handled by the session itself;
/// `None` means "command not found".
pub fn reply(content: &Content, cmd: &str) -> Option<Reply> {
    let reply = match cmd {
        "help" => out(help()),
        "whoami" => out(whoami(content)),
        "ls experience/" | "ls experience" => out(experience(content)),
        "cat projects.md" | "cat projects" => out(projects(content)),
        "./skills --verbose" | "./skills" | "skills" => out(skills(content)),
        "ping alfonso" | "contact" => out(contact(content)),
        "exit" => out(exit_quote()),
        "coffee" => Reply {
            kind: LineKind::Ascii,
            block: coffee(),
            effect: None,
        },
        "matrix" => Reply {
            kind: LineKind::Success,
            block: Block::text("Entering the Matrix...", Style::fg(ui::GREEN)),
            effect: Some(SideEffect::MatrixOverlay),
        },
        "hack nasa" => out(hack_nasa()),
        "ascii" => Reply {
            kind: LineKind::Ascii,
            block: Block::text(BANNER_ART.trim_start_matches('\n'), Style::fg(ui::CYAN)),
            effect: None,
        },
        "sudo hire alfonso" => Reply {
            kind: LineKind::Success,
            block: sudo_hire(content),
            effect: Some(SideEffect::Confetti),
        },
        "rm -rf /" => Reply {
            kind: LineKind::Error,
            block: rm_rf(),
            effect: None,
        },
        _ => return None,
    };
    Some(reply)
}

pub fn not_found(raw: &str) -> Block {
    Block::new()
        .row(vec![
            Span::new("Command not found: ", Style::fg(ui::RED)),
            Span::new(raw, Style::fg(ui::MUTED)),
        ])
        .row(vec![Span::new(
            "Type 'help' for available commands.",
            Style::dim(ui::FAINT),
        )])
}

fn help() -> Block {
    let entries = [
        ("whoami", "Learn about me"),
        ("ls experience/", "View my career"),
        ("cat projects.md", "See my projects"),
        ("./skills --verbose", "Check my skills"),
        ("ping alfonso", "Contact me"),
        ("clear", "Clear terminal"),
        ("help", "Show this message"),
    ];
    let mut block = Block::new().row(vec![Span::new(
        "Available commands:",
        Style::fg(ui::YELLOW),
    )]);
    for (cmd, what) in entries {
        block = block.row(vec![
            Span::new(format!("  {cmd:<20}"), Style::fg(ui::CYAN)),
            Span::new(format!("- {what}"), Style::fg(ui::TEXT)),
        ]);
    }
    block.row(vec![]).row(vec![Span::new(
        "Hint: There might be some hidden commands...",
        Style::dim(ui::FAINT),
    )])
}

fn whoami(content: &Content) -> Block {
    let p = &content.personal;
    let mut block = Block::text(NAME_ART.trim_start_matches('\n'), Style::fg(ui::CYAN));
    block = block
        .row(vec![])
        .row(vec![Span::new(&p.name, Style::bold(ui::CYAN))])
        .row(vec![Span::new(&p.title, Style::fg(ui::PINK))]);
    for line in wrap(&p.summary, WRAP_WIDTH) {
        block = block.row(vec![Span::new(line, Style::fg(ui::TEXT))]);
    }
    block.row(vec![]).row(vec![
        Span::new(
            format!("[ {}+ years ]", p.years_experience),
            Style::fg(ui::CYAN),
        ),
        Span::new(format!("  [ {} ]", p.location), Style::fg(ui::PINK)),
    ])
}

fn experience(content: &Content) -> Block {
    let mut block = Block::new().row(vec![Span::new(
        format!("drwxr-xr-x  {} items", content.experiences.len()),
        Style::fg(ui::GREEN),
    )]);
    for exp in &content.experiences {
        block = block
            .row(vec![])
            .row(vec![Span::new(&exp.role, Style::bold(ui::CYAN))])
            .row(vec![
                Span::new(&exp.company, Style::fg(ui::PINK)),
                Span::new(format!("  {}", exp.period), Style::dim(ui::FAINT)),
            ]);
        for highlight in &exp.highlights {
            let mut first = true;
            for line in wrap(highlight, WRAP_WIDTH - 4) {
                let lead = if first { "  → " } else { "    " };
                first = false;
                block = block.row(vec![
                    Span::new(lead, Style::fg(ui::CYAN)),
                    Span::new(line, Style::fg(ui::TEXT)),
                ]);
            }
        }
        block = block.row(vec![Span::new(
            format!("  {}", tags(&exp.tech)),
            Style::dim(ui::CYAN),
        )]);
    }
    block
}

fn projects(content: &Content) -> Block {
    let mut block = Block::new()
        .row(vec![Span::new("# Projects", Style::fg(ui::GREEN))])
        .row(vec![Span::new(
            format!("→ {}", content.personal.github),
            Style::fg(ui::CYAN),
        )]);
    for project in &content.projects {
        block = block.row(vec![]).row(vec![
            Span::new(&project.name, Style::bold(ui::CYAN)),
            Span::new(
                format!("  ({})", project.visibility.label()),
                Style::dim(ui::FAINT),
            ),
        ]);
        for line in wrap(&project.description, WRAP_WIDTH - 2) {
            block = block.row(vec![Span::new(format!("  {line}"), Style::fg(ui::MUTED))]);
        }
        block = block.row(vec![Span::new(
            format!("  {}", tags(&project.tech)),
            Style::dim(ui::PINK),
        )]);
    }
    block
}

fn skills(content: &Content) -> Block {
    let mut block = Block::new().row(vec![Span::new(
        "Executing skills analysis...",
        Style::fg(ui::GREEN),
    )]);
    for category in &content.skill_categories {
        block = block.row(vec![]).row(vec![Span::new(
            format!("{} {}", category.icon, category.name),
            Style::bold(ui::CYAN),
        )]);
        for skill in &category.skills {
            let pct = proficiency(skill);
            let filled = pct * BAR_WIDTH / 100;
            block = block.row(vec![
                Span::new(format!("  {skill:<18}"), Style::fg(ui::TEXT)),
                Span::new("█".repeat(filled), Style::fg(ui::CYAN)),
                Span::new("░".repeat(BAR_WIDTH - filled), Style::dim(ui::FAINT)),
                Span::new(format!(" {pct}%"), Style::dim(ui::FAINT)),
            ]);
        }
    }
    let e = &content.education;
    block = block
        .row(vec![])
        .row(vec![Span::new("Education", Style::bold(ui::YELLOW))])
        .row(vec![Span::new(&e.degree, Style::fg(ui::CYAN))])
        .row(vec![Span::new(
            format!("{}, {}", e.school, e.year),
            Style::fg(ui::PINK),
        )]);
    for line in wrap(&e.description, WRAP_WIDTH) {
        block = block.row(vec![Span::new(line, Style::fg(ui::MUTED))]);
    }
    block
}

fn contact(content: &Content) -> Block {
    let p = &content.personal;
    let first_name = p
        .name
        .split_whitespace()
        .next()
        .unwrap_or("host")
        .to_lowercase();
    Block::new()
        .row(vec![Span::new(
            format!("PING {first_name} ({}): 56 data bytes", p.location),
            Style::fg(ui::GREEN),
        )])
        .row(vec![Span::new(
            format!("64 bytes from {first_name}: icmp_seq=0 ttl=64 time=0.042 ms"),
            Style::fg(ui::CYAN),
        )])
        .row(vec![Span::new(
            "--- Connection established ---",
            Style::fg(ui::GREEN),
        )])
        .row(vec![])
        .row(vec![Span::new("Get In Touch", Style::bold(ui::CYAN))])
        .row(vec![
            Span::new("  Email     ", Style::dim(ui::FAINT)),
            Span::new(&p.email, Style::fg(ui::CYAN)),
        ])
        .row(vec![
            Span::new("  Phone     ", Style::dim(ui::FAINT)),
            Span::new(&p.phone, Style::fg(ui::PINK)),
        ])
        .row(vec![
            Span::new("  GitHub    ", Style::dim(ui::FAINT)),
            Span::new(&p.github, Style::fg(ui::TEXT)),
        ])
        .row(vec![
            Span::new("  LinkedIn  ", Style::dim(ui::FAINT)),
            Span::new(&p.linkedin, Style::fg(ui::BLUE)),
        ])
        .row(vec![])
        .row(vec![Span::new(
            format!("  {}", p.location),
            Style::dim(ui::FAINT),
        )])
}

fn exit_quote() -> Block {
    Block::text(
        "\"You can check out any time you like, but you can never leave\"",
        Style::fg(ui::PINK),
    )
}

fn coffee() -> Block {
    let mut block = Block::text(COFFEE_ART.trim_start_matches('\n'), Style::fg(ui::AMBER));
    block.rows.push(vec![]);
    block.rows.push(vec![Span::new(
        "Coffee ready! Productivity increased by 200%.",
        Style::fg(ui::CYAN),
    )]);
    block
}

fn hack_nasa() -> Block {
    Block::new()
        .row(vec![Span::new(
            "Connecting to nasa.gov...",
            Style::fg(ui::GREEN),
        )])
        .row(vec![Span::new("Bypassing firewall...", Style::fg(ui::GREEN))])
        .row(vec![Span::new(
            "Accessing mainframe...",
            Style::fg(ui::GREEN),
        )])
        .row(vec![Span::new("Decrypting files...", Style::fg(ui::YELLOW))])
        .row(vec![Span::new("ACCESS DENIED", Style::bold(ui::BRIGHT_RED))])
        .row(vec![Span::new(
            "FBI has been notified. Agents are on their way.",
            Style::fg(ui::RED),
        )])
        .row(vec![Span::new(
            "(Just kidding, please don't actually hack NASA)",
            Style::dim(ui::FAINT),
        )])
}

fn sudo_hire(content: &Content) -> Block {
    Block::new()
        .row(vec![Span::new(
            "[sudo] password for recruiter: ********",
            Style::fg(ui::GREEN),
        )])
        .row(vec![Span::new("✓ Access granted.", Style::bold(ui::GREEN))])
        .row(vec![Span::new(
            format!("Sending offer letter to {}...", content.personal.email),
            Style::fg(ui::CYAN),
        )])
        .row(vec![Span::new(
            "Congratulations! You made a great choice!",
            Style::fg(ui::YELLOW),
        )])
}

fn rm_rf() -> Block {
    Block::new()
        .row(vec![Span::new(
            "Deleting system files...",
            Style::fg(ui::BRIGHT_RED),
        )])
        .row(vec![Span::new(
            "rm: /bin: Operation not permitted",
            Style::fg(ui::RED),
        )])
        .row(vec![Span::new(
            "rm: /etc: Permission denied",
            Style::fg(ui::RED),
        )])
        .row(vec![Span::new(
            "Just kidding. Nice try though.",
            Style::fg(ui::YELLOW),
        )])
}

fn tags(items: &[String]) -> String {
    items
        .iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greedy word wrap. Words longer than the width get their own row.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Stable per-skill proficiency in [70, 100], derived from an FNV-1a hash of
/// the name.
fn proficiency(skill: &str) -> usize {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in skill.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    70 + (hash % 31) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_entries_are_unique_and_normalized() {
        let mut seen = std::collections::HashSet::new();
        for cmd in VOCABULARY {
            assert!(seen.insert(cmd), "duplicate vocabulary entry {cmd}");
            assert_eq!(cmd, cmd.trim().to_lowercase().as_str());
        }
    }

    #[test]
    fn wrap_respects_width() {
        let rows = wrap("one two three four five six seven", 10);
        assert!(rows.iter().all(|r| r.chars().count() <= 10));
        assert_eq!(rows.join(" "), "one two three four five six seven");
    }

    #[test]
    fn wrap_handles_oversized_words() {
        let rows = wrap("tiny antidisestablishmentarianism tiny", 8);
        assert_eq!(rows[1], "antidisestablishmentarianism");
    }

    #[test]
    fn proficiency_is_stable_and_bounded() {
        let a = proficiency("React");
        assert_eq!(a, proficiency("React"));
        for skill in ["React", "Rust", "Docker", "Git", "Viem"] {
            let pct = proficiency(skill);
            assert!((70..=100).contains(&pct), "{skill} -> {pct}");
        }
    }

    #[test]
    fn not_found_echoes_the_raw_input() {
        let block = not_found("FooBar");
        assert!(block.plain_text().contains("FooBar"));
    }

    #[test]
    fn help_lists_the_primary_commands() {
        let text = help().plain_text();
        for cmd in ["whoami", "ls experience/", "ping alfonso", "clear"] {
            assert!(text.contains(cmd), "help is missing {cmd}");
        }
    }

    #[test]
    fn experience_counts_items_in_the_header() {
        let content = crate::content::Content::builtin();
        let text = experience(&content).plain_text();
        assert!(text.starts_with("drwxr-xr-x  6 items"));
        assert!(text.contains("Henry Meds"));
    }

    #[test]
    fn skills_renders_one_bar_per_skill() {
        let content = crate::content::Content::builtin();
        let block = skills(&content);
        let bars = block
            .rows
            .iter()
            .filter(|row| row.iter().any(|s| s.text.contains('█')))
            .count();
        let total: usize = content.skill_categories.iter().map(|c| c.skills.len()).sum();
        assert_eq!(bars, total);
    }

    #[test]
    fn unknown_command_has_no_reply() {
        let content = crate::content::Content::builtin();
        assert!(reply(&content, "frobnicate").is_none());
        // `clear` is session-level, not a template.
        assert!(reply(&content, "clear").is_none());
    }
}
