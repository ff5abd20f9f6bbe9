//! Section formatters: pure `record -> markup` functions.

use crate::banner;
use crate::content::{
    Banners, Certifications, Contact, ContentStore, Education, Experience, Item, Profile, Skills,
};
use crate::markup::{
    anchor, color_class, escape_html, field, glyph, item_line, linkify, placeholder, title,
    INDENT,
};

pub const SEPARATOR_WIDTH: usize = 60;

fn subheading(label: &str) -> String {
    format!("<span class=\"text-cyan-400\">{}:</span>", escape_html(label))
}

fn push_items(out: &mut Vec<String>, items: &[Item], indent: &str) {
    if items.is_empty() {
        out.push(placeholder(indent));
        return;
    }
    out.extend(items.iter().map(|item| item_line(item, indent)));
}

fn entry_heading(text: &str) -> String {
    format!(
        "<span class=\"font-bold text-white\">{}</span>",
        escape_html(text)
    )
}

pub fn whoami(profile: &Profile, banners: &Banners) -> String {
    let mut info = vec![
        title(&profile.name),
        format!(
            "<span class=\"text-gray-600\">{}</span>",
            "─".repeat(profile.name.chars().count().max(1))
        ),
        field("Role", &profile.role),
    ];
    if !profile.tagline.is_empty() {
        info.push(format!(
            "<span class=\"text-gray-400\">{}</span>",
            escape_html(&profile.tagline)
        ));
    }
    banner::compose(&banners.whoami, banners.color.as_deref(), &info)
}

pub fn profile(profile: &Profile) -> String {
    let mut out = vec![
        title("PROFILE"),
        field("Name", &profile.name),
        field("Role", &profile.role),
        field("Location", &profile.location),
        subheading("About"),
    ];
    if profile.summary.is_empty() {
        out.push(placeholder(INDENT));
    } else {
        out.extend(
            profile
                .summary
                .iter()
                .map(|p| format!("{}{}", INDENT, linkify(p))),
        );
    }
    out.push(subheading("Interests"));
    push_items(&mut out, &profile.interests, INDENT);
    out.join("\n")
}

pub fn education(education: &Education) -> String {
    let mut out = vec![title("EDUCATION")];
    if education.entries.is_empty() {
        out.push(placeholder(""));
    }
    for entry in &education.entries {
        out.push(entry_heading(&entry.institution));
        out.push(format!("{}{}", INDENT, field("Degree", &entry.degree)));
        out.push(format!("{}{}", INDENT, field("Period", &entry.period)));
        out.push(format!("{}{}", INDENT, field("Location", &entry.location)));
        out.push(format!("{}{}", INDENT, subheading("Notes")));
        push_items(&mut out, &entry.notes, &INDENT.repeat(2));
    }
    out.join("\n")
}

pub fn experience(experience: &Experience) -> String {
    let mut out = vec![title("EXPERIENCE")];
    if experience.entries.is_empty() {
        out.push(placeholder(""));
    }
    for entry in &experience.entries {
        out.push(format!(
            "{} <span class=\"text-gray-400\">@</span> {}",
            entry_heading(&entry.role),
            entry_heading(&entry.company)
        ));
        out.push(format!("{}{}", INDENT, field("Period", &entry.period)));
        out.push(format!("{}{}", INDENT, field("Location", &entry.location)));
        out.push(format!("{}{}", INDENT, subheading("Highlights")));
        push_items(&mut out, &entry.highlights, &INDENT.repeat(2));
        let stack = if entry.stack.is_empty() {
            "-".to_string()
        } else {
            entry.stack.join(", ")
        };
        out.push(format!("{}{}", INDENT, field("Stack", &stack)));
    }
    out.join("\n")
}

pub fn skills(skills: &Skills) -> String {
    let mut out = vec![title("SKILLS")];
    if skills.categories.is_empty() {
        out.push(placeholder(""));
    }
    for category in &skills.categories {
        out.push(format!(
            "{} <span class=\"font-bold {}\">{}</span>",
            glyph(category.icon.as_deref(), category.color.as_deref()),
            color_class(category.color.as_deref()),
            escape_html(&category.name)
        ));
        push_items(&mut out, &category.items, INDENT);
    }
    out.join("\n")
}

pub fn certifications(certs: &Certifications) -> String {
    let mut out = vec![title("CERTIFICATIONS")];
    if certs.entries.is_empty() {
        out.push(placeholder(""));
    }
    for cert in &certs.entries {
        out.push(format!(
            "{} {}",
            glyph(cert.icon.as_deref(), cert.color.as_deref()),
            entry_heading(&cert.name)
        ));
        out.push(format!("{}{}", INDENT, field("Issuer", &cert.issuer)));
        out.push(format!("{}{}", INDENT, field("Date", &cert.date)));
        if let Some(id) = cert.credential_id.as_deref().filter(|id| !id.is_empty()) {
            out.push(format!("{}{}", INDENT, field("Credential", id)));
        }
        if let Some(url) = cert.url.as_deref().filter(|u| !u.is_empty()) {
            out.push(format!("{}{} {}", INDENT, subheading("Verify"), anchor(url, url)));
        }
    }
    out.join("\n")
}

pub fn contact(contact: &Contact) -> String {
    let email = if contact.email.is_empty() {
        String::new()
    } else {
        anchor(&format!("mailto:{}", contact.email), &contact.email)
    };
    let mut out = vec![
        title("CONTACT"),
        format!("{} {}", subheading("Email"), email),
        field("Location", &contact.location),
    ];
    if !contact.message.is_empty() {
        out.push(linkify(&contact.message));
    }
    out.push(subheading("Links"));
    push_items(&mut out, &contact.links, INDENT);
    out.join("\n")
}

/// Fixed-width rule placed between sections of the combined listing.
pub fn separator() -> String {
    format!(
        "\n<span class=\"text-gray-600\">{}</span>\n",
        "─".repeat(SEPARATOR_WIDTH)
    )
}

/// Every section in display order, joined by [`separator`].
pub fn all_info(store: &ContentStore) -> String {
    [
        whoami(store.profile(), store.banners()),
        profile(store.profile()),
        education(store.education()),
        experience(store.experience()),
        skills(store.skills()),
        certifications(store.certifications()),
        contact(store.contact()),
    ]
    .join(&separator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Certification, SkillCategory};

    fn skills_fixture() -> Skills {
        Skills {
            categories: vec![SkillCategory {
                name: "Security".into(),
                items: vec![Item::text("nmap")],
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_skills_example_block() {
        let out = skills(&skills_fixture());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], title("SKILLS"));
        assert!(lines[1].contains("Security"));
        assert_eq!(lines[2], "  - nmap");
    }

    #[test]
    fn test_formatters_are_idempotent() {
        let store = ContentStore::embedded();
        assert_eq!(all_info(&store), all_info(&store));
        assert_eq!(skills(store.skills()), skills(store.skills()));
    }

    #[test]
    fn test_empty_records_render_placeholders() {
        let store = ContentStore::default();
        for block in [
            education(store.education()),
            experience(store.experience()),
            skills(store.skills()),
            certifications(store.certifications()),
        ] {
            let lines: Vec<&str> = block.lines().collect();
            assert_eq!(lines.len(), 2, "{block}");
            assert_eq!(lines[1], "-");
        }
        let prof = profile(store.profile());
        assert!(prof.starts_with(&title("PROFILE")));
        assert_eq!(prof.lines().filter(|l| *l == "  -").count(), 2);
        let con = contact(store.contact());
        assert!(con.starts_with(&title("CONTACT")));
        assert!(con.ends_with("Links:</span>\n  -"));
    }

    #[test]
    fn test_empty_category_keeps_header() {
        let skills = Skills {
            categories: vec![SkillCategory {
                name: "Cloud".into(),
                ..Default::default()
            }],
        };
        let out = super::skills(&skills);
        assert!(out.contains("Cloud"));
        assert!(out.ends_with("\n  -"));
    }

    #[test]
    fn test_whoami_has_name_and_role() {
        let profile = Profile {
            name: "Morgan Lee".into(),
            role: "Security Engineer".into(),
            ..Default::default()
        };
        let out = whoami(&profile, &Banners::default());
        assert!(out.contains("Morgan Lee"));
        assert!(out.contains("Security Engineer"));
        assert!(!out.contains("<span class=\"text-gray-400\">"));
    }

    #[test]
    fn test_whoami_escapes_name_and_role() {
        let profile = Profile {
            name: "A&B".into(),
            role: "R<D".into(),
            ..Default::default()
        };
        let out = whoami(&profile, &Banners::default());
        // markup carries the stored text HTML-escaped; the page shows it verbatim
        assert!(out.contains("A&amp;B"));
        assert!(out.contains("R&lt;D"));
        assert!(!out.contains("R<D"));
        assert_eq!(escape_html(&profile.role), "R&lt;D");
    }

    #[test]
    fn test_certification_optional_fields() {
        let certs = Certifications {
            entries: vec![Certification {
                name: "OSCP".into(),
                url: Some("https://example.com/verify".into()),
                ..Default::default()
            }],
        };
        let out = certifications(&certs);
        assert!(out.contains("- <span class=\"font-bold text-white\">OSCP</span>"));
        assert!(!out.contains("Credential"));
        assert!(out.contains("href=\"https://example.com/verify\""));
    }

    #[test]
    fn test_contact_email_is_mailto() {
        let out = contact(&Contact {
            email: "a@b.dev".into(),
            ..Default::default()
        });
        assert!(out.contains("href=\"mailto:a@b.dev\""));
    }

    #[test]
    fn test_all_info_order() {
        let store = ContentStore::embedded();
        let expected = [
            whoami(store.profile(), store.banners()),
            profile(store.profile()),
            education(store.education()),
            experience(store.experience()),
            skills(store.skills()),
            certifications(store.certifications()),
            contact(store.contact()),
        ];
        let out = all_info(&store);
        let parts: Vec<&str> = out.split(separator().as_str()).collect();
        assert_eq!(parts.len(), expected.len());
        for (got, want) in parts.iter().zip(expected.iter()) {
            assert_eq!(*got, want.as_str());
        }
    }

    #[test]
    fn test_separator_width() {
        let sep = separator();
        assert_eq!(sep.matches('─').count(), SEPARATOR_WIDTH);
        assert!(sep.starts_with('\n') && sep.ends_with('\n'));
    }
}
