//! Comments derived from the declaration's name.
//!
//! Identifiers are decomposed into a lowercase phrase at camel-case
//! boundaries. Role suffixes on type names (`OrderService`) and leading
//! verbs on method names (`getTotal`) select the phrase template and are
//! stripped from the subject.

use once_cell::sync::Lazy;
use phf::phf_map;
use regex::Regex;

use crate::detect::{DeclarationKind, DeclarationSite};

use super::randomized::{RETURN_LINE, THROWS_LINE};
use super::{CommentBlock, Synthesizer};

/// Type templates keyed by role suffix.
static TYPE_TEMPLATES: phf::Map<&'static str, &'static str> = phf_map! {
    "Service" => "Provides business logic for managing {}.",
    "Controller" => "REST controller for handling {} requests.",
    "Repository" => "Repository for accessing {} data.",
    "Manager" => "Manager responsible for coordinating {} functionality.",
};

const DEFAULT_TYPE_TEMPLATE: &str = "Represents the {} component of the application.";
const CONSTRUCTOR_TEMPLATE: &str = "Creates a new {} instance.";
const FIELD_TEMPLATE: &str = "Represents the {} of this class.";

/// Leading verb and the summary template it selects.
struct VerbRule {
    pattern: Regex,
    verb: &'static str,
    template: &'static str,
}

/// Ordered verb rules; the last entry matches every name.
static VERB_RULES: Lazy<Vec<VerbRule>> = Lazy::new(|| {
    let table: &[(&'static str, &'static str)] = &[
        ("get", "Retrieves {}."),
        ("set", "Sets the {}."),
        ("update", "Updates the {}."),
        ("delete", "Deletes the {}."),
        ("create", "Creates a new {}."),
        ("process", "Processes the {}."),
        ("calculate", "Calculates the {}."),
        ("load", "Loads the {}."),
        ("save", "Saves the {}."),
        ("send", "Sends the {}."),
        ("is", "Checks whether the {}."),
        ("has", "Determines whether the {} is present."),
        ("", "Performs the {} operation."),
    ];

    table
        .iter()
        .map(|&(verb, template)| {
            // A verb only counts at a word boundary: `isActive`, not `issue`.
            let pattern = if verb.is_empty() {
                Regex::new("^").unwrap()
            } else {
                Regex::new(&format!("^{}(?:[A-Z0-9_]|$)", verb)).unwrap()
            };
            VerbRule {
                pattern,
                verb,
                template,
            }
        })
        .collect()
});

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());
static CASE_CHANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Decompose an identifier into a lowercase, space-separated phrase.
///
/// `calculateTotalPrice` becomes `calculate total price`, `HTTPServer`
/// becomes `http server` and `MAX_SIZE` becomes `max size`.
pub fn humanize(name: &str) -> String {
    let spaced = WORD_START.replace_all(name, "${1} ${2}");
    let spaced = CASE_CHANGE.replace_all(&spaced, "${1} ${2}");
    spaced
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Humanize `stripped`, falling back to the full name when nothing is left.
fn subject(stripped: &str, full: &str) -> String {
    let phrase = humanize(stripped);
    if phrase.is_empty() {
        humanize(full)
    } else {
        phrase
    }
}

/// Summary and humanized subject for a type name.
fn type_summary(name: &str) -> String {
    let matched = TYPE_TEMPLATES
        .entries()
        .find(|(suffix, _)| name.ends_with(*suffix));

    match matched {
        Some((suffix, template)) => {
            let entity = subject(&name[..name.len() - suffix.len()], name);
            template.replace("{}", &entity)
        }
        None => DEFAULT_TYPE_TEMPLATE.replace("{}", &humanize(name)),
    }
}

fn type_subject(name: &str) -> String {
    let stripped = TYPE_TEMPLATES
        .keys()
        .find(|suffix| name.ends_with(*suffix))
        .map(|suffix| &name[..name.len() - suffix.len()])
        .unwrap_or(name);
    subject(stripped, name)
}

fn method_summary(name: &str) -> String {
    match VERB_RULES.iter().find(|rule| rule.pattern.is_match(name)) {
        Some(rule) => {
            let entity = subject(&name[rule.verb.len()..], name);
            rule.template.replace("{}", &entity)
        }
        None => format!("Performs the {} operation.", humanize(name)),
    }
}

/// Picks phrases from naming conventions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameDerived;

impl Synthesizer for NameDerived {
    fn name(&self) -> &'static str {
        "name-derived"
    }

    fn synthesize(&self, site: &DeclarationSite) -> CommentBlock {
        let summary = match site.kind {
            DeclarationKind::Type => type_summary(&site.name),
            DeclarationKind::Constructor => {
                CONSTRUCTOR_TEMPLATE.replace("{}", &type_subject(&site.name))
            }
            DeclarationKind::Method => method_summary(&site.name),
            DeclarationKind::Field => FIELD_TEMPLATE.replace("{}", &humanize(&site.name)),
        };
        let builder = CommentBlock::builder().line(summary);

        if !site.kind.is_callable() {
            return builder.build();
        }

        let mut builder = builder.blank();
        for param in &site.parameters {
            builder = builder.line(format!("@param {} The {}.", param, humanize(param)));
        }
        if site.kind == DeclarationKind::Method {
            if site.has_return_value {
                builder = builder.line(RETURN_LINE);
            }
            builder = builder.line(THROWS_LINE);
        }
        builder.build()
    }
}
