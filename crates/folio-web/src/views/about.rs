//! The about page: skills grouped by category, experience, education,
//! and awards. Empty collections drop their section.

use std::collections::BTreeMap;

use folio_client::Dataset;
use folio_content::escape_html;
use folio_core::types::format_period;
use folio_core::{Award, Education, Experience, Skill};

use super::{Nav, Page};
use crate::config::SiteConfig;

const UNCATEGORIZED: &str = "Other";

/// Render the about page from the profile collections.
pub fn render(site: &SiteConfig, profile: &Dataset) -> Page {
    let body = format!(
        r#"<h1>About</h1><p class="bio">{bio}</p>{skills}{experience}{education}{awards}"#,
        bio = escape_html(&site.bio),
        skills = skills(&profile.skills),
        experience = experience(&profile.experience),
        education = education(&profile.education),
        awards = awards(&profile.awards),
    );
    Page::new("About", Nav::About, body)
}

/// Skills grouped by category, categories alphabetical, skills in
/// source order within a group.
pub fn group_skills(skills: &[Skill]) -> BTreeMap<&str, Vec<&Skill>> {
    let mut groups: BTreeMap<&str, Vec<&Skill>> = BTreeMap::new();
    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        groups.entry(category).or_default().push(skill);
    }
    groups
}

fn skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return String::new();
    }
    let groups: String = group_skills(skills)
        .into_iter()
        .map(|(category, members)| {
            let items: String = members.into_iter().map(skill).collect();
            format!(
                r#"<div class="skill-group"><h3>{}</h3><ul class="timeline">{items}</ul></div>"#,
                escape_html(category)
            )
        })
        .collect();
    format!(r#"<section><h2>Skills</h2><div class="skills">{groups}</div></section>"#)
}

fn skill(skill: &Skill) -> String {
    let meter = skill
        .level
        .map(|level| {
            let level = level.min(100);
            format!(
                r#"<div class="meter" role="meter" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{level}"><span style="width:{level}%"></span></div>"#
            )
        })
        .unwrap_or_default();
    format!("<li>{}{meter}</li>", escape_html(&skill.name))
}

fn experience(entries: &[Experience]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            let highlights: String = e
                .highlights
                .iter()
                .map(|h| format!("<li>{}</li>", escape_html(h)))
                .collect();
            let highlights = if highlights.is_empty() {
                highlights
            } else {
                format!("<ul>{highlights}</ul>")
            };
            format!(
                r#"<li><h3>{role} · {company}</h3><p class="period">{period}</p>{description}{highlights}</li>"#,
                role = escape_html(&e.role),
                company = escape_html(&e.company),
                period = escape_html(&format_period(e.start_date.as_deref(), e.end_date.as_deref())),
                description = paragraph(e.description.as_deref()),
            )
        })
        .collect();
    format!(r#"<section><h2>Experience</h2><ul class="timeline">{items}</ul></section>"#)
}

fn education(entries: &[Education]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            let degree = match e.field.as_deref().filter(|f| !f.trim().is_empty()) {
                Some(field) => format!("{}, {}", e.degree, field),
                None => e.degree.clone(),
            };
            format!(
                r#"<li><h3>{degree}</h3><p>{institution}</p><p class="period">{period}</p>{description}</li>"#,
                degree = escape_html(&degree),
                institution = escape_html(&e.institution),
                period = escape_html(&format_period(e.start_date.as_deref(), e.end_date.as_deref())),
                description = paragraph(e.description.as_deref()),
            )
        })
        .collect();
    format!(r#"<section><h2>Education</h2><ul class="timeline">{items}</ul></section>"#)
}

fn awards(entries: &[Award]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|a| {
            let meta: Vec<&str> = [a.issuer.as_deref(), a.date.as_deref()]
                .into_iter()
                .flatten()
                .filter(|s| !s.trim().is_empty())
                .collect();
            format!(
                r#"<li><h3>{title}</h3><p class="period">{meta}</p>{description}</li>"#,
                title = escape_html(&a.title),
                meta = escape_html(&meta.join(" · ")),
                description = paragraph(a.description.as_deref()),
            )
        })
        .collect();
    format!(r#"<section><h2>Awards</h2><ul class="timeline">{items}</ul></section>"#)
}

fn paragraph(text: Option<&str>) -> String {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("<p>{}</p>", escape_html(t)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: Option<&str>) -> Skill {
        Skill {
            name: name.into(),
            category: category.map(Into::into),
            level: None,
            icon: None,
        }
    }

    #[test]
    fn test_group_skills() {
        let skills = vec![
            skill("Rust", Some("Languages")),
            skill("Linux", Some("Systems")),
            skill("Go", Some("Languages")),
            skill("Juggling", None),
        ];
        let groups = group_skills(&skills);
        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, ["Languages", "Other", "Systems"]);
        let languages: Vec<&str> = groups["Languages"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(languages, ["Rust", "Go"]);
    }

    #[test]
    fn test_empty_profile_has_no_sections() {
        let page = render(&SiteConfig::default(), &Dataset::default());
        assert!(!page.body.contains("<section>"));
    }

    #[test]
    fn test_experience_period_and_highlights() {
        let profile = Dataset {
            experience: vec![Experience {
                id: None,
                company: "Acme".into(),
                role: "Engineer".into(),
                start_date: Some("2021-03-01".into()),
                end_date: None,
                description: None,
                highlights: vec!["Shipped".into()],
            }],
            ..Dataset::default()
        };
        let page = render(&SiteConfig::default(), &profile);
        assert!(page.body.contains("<h3>Engineer · Acme</h3>"));
        assert!(page.body.contains("Present"));
        assert!(page.body.contains("<ul><li>Shipped</li></ul>"));
    }

    #[test]
    fn test_skill_level_meter() {
        let mut rust = skill("Rust", Some("Languages"));
        rust.level = Some(90);
        let profile = Dataset {
            skills: vec![rust],
            ..Dataset::default()
        };
        let page = render(&SiteConfig::default(), &profile);
        assert!(page.body.contains(r#"aria-valuenow="90""#));
    }
}
