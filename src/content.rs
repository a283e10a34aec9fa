//! Static portfolio content — the read-only data feed the shell renders.
//!
//! A built-in data set is compiled in; an alternate set can be supplied as a
//! JSON file with the same shape.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub summary: String,
    pub years_experience: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub highlights: Vec<String>,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub personal: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub education: Education,
}

impl Content {
    pub fn from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {path}"))?;
        serde_json::from_str(&json).with_context(|| format!("Failed to parse {path}"))
    }

    pub fn builtin() -> Self {
        Content {
            personal: PersonalInfo {
                name: "Alfonso Aranzazu".into(),
                title: "Senior Software Engineer".into(),
                email: "alfonso.aranzazu@gmail.com".into(),
                phone: "(559) 726-4094".into(),
                location: "Irvine, CA".into(),
                github: "github.com/0xFonzy".into(),
                linkedin: "linkedin.com/in/alfonso-aranzazu".into(),
                summary: "Senior Software Engineer with 9+ years of experience in building \
                          scalable, high-performance products using React, TypeScript, and \
                          GraphQL. Skilled in architecture, performance, API integration, \
                          UI/UX, and delivering exceptional user experiences."
                    .into(),
                years_experience: 9,
            },
            experiences: vec![
                Experience {
                    id: "henry-meds".into(),
                    company: "Henry Meds".into(),
                    role: "Senior Software Engineer".into(),
                    period: "Jul 2024 - Present".into(),
                    highlights: vec![
                        "Raised ARR by 10% by building scalable onboarding flows for a new ED \
                         treatment line, refactoring React components and optimizing GraphQL \
                         queries to a PostgreSQL relational database on GCP"
                            .into(),
                        "Accelerated prescription delivery to customers by 30% by redesigning \
                         the provider workflow with modular React TypeScript components and \
                         improved UI flows, streamlining prescribing and reducing delays"
                            .into(),
                    ],
                    tech: vec![
                        "React".into(),
                        "TypeScript".into(),
                        "GraphQL".into(),
                        "Postgres".into(),
                        "GCP".into(),
                    ],
                },
                Experience {
                    id: "homes-com".into(),
                    company: "Homes.com".into(),
                    role: "Senior Software Engineer".into(),
                    period: "Sep 2023 - Jan 2024".into(),
                    highlights: vec![
                        "Drove $10M in auction sales by streamlining auction payments with \
                         Stripe, replacing slow ACH transfers with instant processing via \
                         React and Java Spring integrations"
                            .into(),
                        "Improved bidding speed by 25% by leading performance optimizations, \
                         including memoizing React components and implementing Redis caching \
                         for bid state"
                            .into(),
                    ],
                    tech: vec![
                        "React".into(),
                        "TypeScript".into(),
                        "Java".into(),
                        "AWS".into(),
                        "Stripe".into(),
                        "CI/CD".into(),
                    ],
                },
                Experience {
                    id: "capital-group".into(),
                    company: "Capital Group".into(),
                    role: "Software Engineer III".into(),
                    period: "Apr 2019 - Sep 2023".into(),
                    highlights: vec![
                        "Increased ARR by $500K by delivering online enrollment in React and \
                         TypeScript, serving dynamic content with a headless CMS over a Java \
                         Spring API"
                            .into(),
                        "Enhanced First Contentful Paint by 75% with tree-shaking, lazy \
                         loading, and image compression in React, leading the team to resolve \
                         critical performance issues and meet launch KPIs"
                            .into(),
                    ],
                    tech: vec![
                        "React".into(),
                        "TypeScript".into(),
                        "Performance Optimization".into(),
                        "CMS".into(),
                    ],
                },
                Experience {
                    id: "glidewell".into(),
                    company: "Glidewell".into(),
                    role: "Software Engineer".into(),
                    period: "Jul 2017 - Apr 2019".into(),
                    highlights: vec![
                        "Increased development productivity by 20% by building a company-wide \
                         Angular component library that 5 engineering teams adopted to create \
                         user-friendly interfaces"
                            .into(),
                        "Improved CRM performance by 40% by reducing Time to Interactive (TTI) \
                         through ahead-of-time compilation and tree shaking"
                            .into(),
                        "Strengthened user collaboration by 40% by building live chat in the \
                         Angular CRM with WebSockets and Redis caching"
                            .into(),
                    ],
                    tech: vec![
                        "Angular".into(),
                        "Component Libraries".into(),
                        "Redis".into(),
                        "WebSockets".into(),
                        "Performance Optimization".into(),
                    ],
                },
                Experience {
                    id: "cofebe".into(),
                    company: "Cofebe".into(),
                    role: "Junior Software Engineer".into(),
                    period: "Mar 2016 - Jul 2017".into(),
                    highlights: vec![
                        "Launched a mobile app in 2 months using Ionic, deploying to Apple and \
                         Google app stores"
                            .into(),
                        "Enabled sub-200ms real-time video streaming using Angular, \
                         WebSockets, and Redis, facilitating live interactions between \
                         celebrities and fans"
                            .into(),
                        "Enabled a client's IPO by developing an end-to-end Jasmine test suite \
                         for their product launch"
                            .into(),
                    ],
                    tech: vec![
                        "Ionic".into(),
                        "Angular".into(),
                        "WebSockets".into(),
                        "Redis".into(),
                        "Jasmine".into(),
                    ],
                },
                Experience {
                    id: "toshiba".into(),
                    company: "Toshiba".into(),
                    role: "Undergrad Intern".into(),
                    period: "Mar 2015".into(),
                    highlights: vec![
                        "Pitched an IoT smart home gardening prototype built with Python and \
                         Arduino to the VP of Toshiba"
                            .into(),
                    ],
                    tech: vec!["Python".into(), "Arduino".into(), "IoT".into()],
                },
            ],
            projects: vec![
                Project {
                    id: "meme-pools-web".into(),
                    name: "meme-pools-web".into(),
                    description: "Frontend web3 app for memepools.com using React, Next.js, \
                                  Viem, Wagmi, and Delegate.xyz"
                        .into(),
                    tech: vec!["Next.js".into(), "React".into(), "Web3".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "layer-zero-contracts".into(),
                    name: "layer-zero-contracts".into(),
                    description: "Upgradeable Ethereum smart contracts built in Solidity using \
                                  Layer Zero ONFTs"
                        .into(),
                    tech: vec!["Solidity".into(), "Ethereum".into(), "Layer Zero".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "solidity-contracts".into(),
                    name: "solidity-contracts".into(),
                    description: "Deployed Solidity contracts implementing ERC-721A, ERC-404, \
                                  ERC-1155, Staking, and Soulbound standards"
                        .into(),
                    tech: vec!["Solidity".into(), "ERC-721A".into(), "ERC-1155".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "froggy-friends-dapp".into(),
                    name: "froggy-friends-dapp".into(),
                    description: "Web3 Dapp for froggyfriends.io".into(),
                    tech: vec!["React".into(), "Web3".into(), "DApp".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "froggy-friends-api".into(),
                    name: "froggy-friends-api".into(),
                    description: "All purpose API built in Nest JS to service the Froggy \
                                  Friends website"
                        .into(),
                    tech: vec!["TypeScript".into(), "NestJS".into(), "API".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "walmart-launch-consulting".into(),
                    name: "walmart-launch-consulting".into(),
                    description: "Consulting project for Walmart launch".into(),
                    tech: vec!["JavaScript".into(), "Consulting".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "github-battleship-app".into(),
                    name: "github-battleship-app".into(),
                    description: "Battleship game in React for Github coding interview".into(),
                    tech: vec!["TypeScript".into(), "React".into(), "Game".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "moviesearch".into(),
                    name: "moviesearch".into(),
                    description: "Netflix like movie search app that fetches movies from TMDB"
                        .into(),
                    tech: vec!["TypeScript".into(), "React".into(), "TMDB API".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
                Project {
                    id: "henrymeds".into(),
                    name: "henrymeds".into(),
                    description: "Scheduling app for HenryMeds.com coding challenge built in \
                                  React"
                        .into(),
                    tech: vec!["TypeScript".into(), "React".into(), "Scheduling".into()],
                    visibility: Visibility::Public,
                    url: None,
                },
            ],
            skill_categories: vec![
                SkillCategory {
                    id: "frontend".into(),
                    name: "Frontend".into(),
                    icon: "🖥".into(),
                    skills: vec![
                        "React".into(),
                        "Next.js".into(),
                        "TailwindCSS".into(),
                        "Angular".into(),
                    ],
                },
                SkillCategory {
                    id: "backend".into(),
                    name: "Backend".into(),
                    icon: "⚙".into(),
                    skills: vec![
                        "Node.js".into(),
                        "WebSockets".into(),
                        "Postgres".into(),
                        "Redis".into(),
                        "NestJS".into(),
                    ],
                },
                SkillCategory {
                    id: "languages".into(),
                    name: "Languages".into(),
                    icon: "📝".into(),
                    skills: vec![
                        "TypeScript".into(),
                        "JavaScript".into(),
                        "Python".into(),
                        "Solidity".into(),
                    ],
                },
                SkillCategory {
                    id: "devops".into(),
                    name: "DevOps".into(),
                    icon: "🔄".into(),
                    skills: vec![
                        "CI/CD".into(),
                        "Docker".into(),
                        "Terraform".into(),
                        "Kubernetes".into(),
                        "GCP".into(),
                        "AWS".into(),
                    ],
                },
                SkillCategory {
                    id: "tools".into(),
                    name: "Tools".into(),
                    icon: "🛠".into(),
                    skills: vec![
                        "Cursor AI".into(),
                        "Chrome DevTools".into(),
                        "LLMs".into(),
                        "Git".into(),
                    ],
                },
                SkillCategory {
                    id: "web3".into(),
                    name: "Web3".into(),
                    icon: "🔗".into(),
                    skills: vec![
                        "Solidity".into(),
                        "Viem".into(),
                        "Wagmi".into(),
                        "ERC Standards".into(),
                        "Smart Contracts".into(),
                    ],
                },
            ],
            education: Education {
                degree: "B.S. Computer Science (Human Computer Interaction)".into(),
                school: "University of California, Irvine".into(),
                year: "2016".into(),
                description: "Specialized in Human Computer Interaction, focusing on creating \
                              intuitive and user-friendly interfaces. Developed a strong \
                              foundation in computer science principles while honing skills \
                              in user experience design."
                    .into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_populated() {
        let content = Content::builtin();
        assert_eq!(content.experiences.len(), 6);
        assert_eq!(content.projects.len(), 9);
        assert_eq!(content.skill_categories.len(), 6);
        assert!(!content.personal.name.is_empty());
    }

    #[test]
    fn content_round_trips_through_json() {
        let content = Content::builtin();
        let json = serde_json::to_string(&content).expect("serialize");
        let parsed: Content = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, content);
    }

    #[test]
    fn missing_file_is_a_context_error() {
        let err = Content::from_file("/nonexistent/content.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/content.json"));
    }
}
